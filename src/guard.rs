use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use crate::{
    ActiveFieldFn, EdgeInsets, EventBus, EventHandler, GuardOptions, KeyboardChannel,
    KeyboardEvent, OwnerContext, ScrollView, SnapshotPolicy, SubscriptionToken,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Resting,
    Adjusted,
}

struct GuardState {
    scroll_view: Weak<RefCell<dyn ScrollView>>,
    owner: Weak<RefCell<dyn OwnerContext>>,
    active_field: ActiveFieldFn,
    options: GuardOptions,
    saved_inset: EdgeInsets,
    phase: Phase,
}

impl GuardState {
    fn on_keyboard_shown(&mut self, event: &KeyboardEvent) {
        let Some(height) = event.keyboard_height() else {
            igwarn!("did-show event carried no end frame; skipping adjustment");
            return;
        };
        let (Some(view), Some(owner)) = (self.scroll_view.upgrade(), self.owner.upgrade()) else {
            igwarn!("collaborator gone; skipping adjustment");
            return;
        };

        let keyboard_inset = EdgeInsets::bottom_only(height);
        {
            let mut view = view.borrow_mut();
            if self.phase == Phase::Resting
                || self.options.snapshot_policy == SnapshotPolicy::EveryShow
            {
                self.saved_inset = view.content_inset();
            }
            view.set_content_inset(keyboard_inset);
            view.set_scroll_indicator_inset(keyboard_inset);
        }
        self.phase = Phase::Adjusted;
        igdebug!(height, "keyboard shown, inset adjusted");

        // The accessor may read the view, so the borrow above must not be
        // held across this call.
        let reduced = owner.borrow().visible_frame().reduced_height(height);
        if let Some(field) = (self.active_field)() {
            if !reduced.contains(field.origin) {
                igtrace!(
                    x = field.origin.x,
                    y = field.origin.y,
                    "active field obscured, scrolling into view"
                );
                view.borrow_mut()
                    .scroll_rect_to_visible(field, self.options.animate_reveal);
            }
        }
    }

    fn on_keyboard_will_hide(&mut self) {
        let Some(view) = self.scroll_view.upgrade() else {
            igwarn!("scroll view gone; skipping restore");
            return;
        };
        let mut view = view.borrow_mut();
        view.set_content_inset(self.saved_inset);
        view.set_scroll_indicator_inset(self.saved_inset);
        self.phase = Phase::Resting;
        igdebug!("keyboard hiding, inset restored");
    }
}

/// Keeps a scrollable view's content out from under the on-screen keyboard.
///
/// On construction the guard subscribes to [`KeyboardChannel::DidShow`] and
/// [`KeyboardChannel::WillHide`] on the given bus. While the keyboard is
/// shown, the view's content and scroll-indicator insets are replaced by a
/// bottom inset of the keyboard's height; on hide, the pre-keyboard insets
/// are restored. If the owner-designated active field would be obscured by
/// the keyboard, the guard asks the view to scroll it into view.
///
/// The guard holds its view and owner weakly and never extends their
/// lifetime. Dropping the guard unsubscribes both channels, so no handler
/// can run against freed state.
pub struct InsetGuard<B: EventBus> {
    bus: Rc<B>,
    shown_token: SubscriptionToken,
    hide_token: SubscriptionToken,
    state: Rc<RefCell<GuardState>>,
}

impl<B: EventBus> InsetGuard<B> {
    /// Creates a guard with default options and subscribes it to `bus`.
    ///
    /// `active_field` is queried on every did-show; returning `None` means
    /// no element is focused and is not an error.
    pub fn new<V, C>(
        bus: Rc<B>,
        scroll_view: &Rc<RefCell<V>>,
        owner: &Rc<RefCell<C>>,
        active_field: ActiveFieldFn,
    ) -> Self
    where
        V: ScrollView + 'static,
        C: OwnerContext + 'static,
    {
        Self::with_options(bus, scroll_view, owner, active_field, GuardOptions::default())
    }

    pub fn with_options<V, C>(
        bus: Rc<B>,
        scroll_view: &Rc<RefCell<V>>,
        owner: &Rc<RefCell<C>>,
        active_field: ActiveFieldFn,
        options: GuardOptions,
    ) -> Self
    where
        V: ScrollView + 'static,
        C: OwnerContext + 'static,
    {
        let scroll_view: Rc<RefCell<dyn ScrollView>> = Rc::clone(scroll_view) as _;
        let owner: Rc<RefCell<dyn OwnerContext>> = Rc::clone(owner) as _;
        igdebug!(?options, "InsetGuard::new");

        let state = Rc::new(RefCell::new(GuardState {
            scroll_view: Rc::downgrade(&scroll_view),
            owner: Rc::downgrade(&owner),
            active_field,
            options,
            saved_inset: EdgeInsets::ZERO,
            phase: Phase::Resting,
        }));

        let shown_state = Rc::downgrade(&state);
        let shown: EventHandler = Rc::new(move |event| {
            if let Some(state) = shown_state.upgrade() {
                state.borrow_mut().on_keyboard_shown(event);
            }
        });
        let shown_token = bus.subscribe(KeyboardChannel::DidShow, shown);

        let hide_state = Rc::downgrade(&state);
        let hide: EventHandler = Rc::new(move |_event| {
            if let Some(state) = hide_state.upgrade() {
                state.borrow_mut().on_keyboard_will_hide();
            }
        });
        let hide_token = bus.subscribe(KeyboardChannel::WillHide, hide);

        Self {
            bus,
            shown_token,
            hide_token,
            state,
        }
    }

    pub fn options(&self) -> GuardOptions {
        self.state.borrow().options
    }

    /// The inset that will be restored on the next will-hide.
    pub fn saved_inset(&self) -> EdgeInsets {
        self.state.borrow().saved_inset
    }

    /// Whether the view's inset currently reflects a keyboard adjustment.
    pub fn is_adjusted(&self) -> bool {
        self.state.borrow().phase == Phase::Adjusted
    }
}

impl<B: EventBus> Drop for InsetGuard<B> {
    fn drop(&mut self) {
        self.bus.unsubscribe(self.shown_token);
        self.bus.unsubscribe(self.hide_token);
    }
}

impl<B: EventBus> core::fmt::Debug for InsetGuard<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("InsetGuard")
            .field("shown_token", &self.shown_token)
            .field("hide_token", &self.hide_token)
            .field("options", &state.options)
            .field("saved_inset", &state.saved_inset)
            .field("phase", &state.phase)
            .finish_non_exhaustive()
    }
}
