use crate::*;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Default)]
struct MockScrollView {
    content_inset: EdgeInsets,
    indicator_inset: EdgeInsets,
    scroll_calls: Vec<(Rect, bool)>,
}

impl ScrollView for MockScrollView {
    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
    }

    fn set_scroll_indicator_inset(&mut self, inset: EdgeInsets) {
        self.indicator_inset = inset;
    }

    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool) {
        self.scroll_calls.push((rect, animated));
    }
}

struct MockOwner {
    frame: Rect,
}

impl OwnerContext for MockOwner {
    fn visible_frame(&self) -> Rect {
        self.frame
    }
}

struct Harness {
    hub: Rc<NotificationHub>,
    view: Rc<RefCell<MockScrollView>>,
    owner: Rc<RefCell<MockOwner>>,
    field: Rc<Cell<Option<Rect>>>,
}

impl Harness {
    fn new(initial_inset: EdgeInsets) -> Self {
        let view = Rc::new(RefCell::new(MockScrollView {
            content_inset: initial_inset,
            indicator_inset: initial_inset,
            scroll_calls: Vec::new(),
        }));
        Self {
            hub: Rc::new(NotificationHub::new()),
            view,
            owner: Rc::new(RefCell::new(MockOwner {
                frame: Rect::new(0.0, 0.0, 320.0, 480.0),
            })),
            field: Rc::new(Cell::new(None)),
        }
    }

    fn guard(&self) -> InsetGuard<NotificationHub> {
        self.guard_with(GuardOptions::default())
    }

    fn guard_with(&self, options: GuardOptions) -> InsetGuard<NotificationHub> {
        let field = Rc::clone(&self.field);
        InsetGuard::with_options(
            Rc::clone(&self.hub),
            &self.view,
            &self.owner,
            Rc::new(move || field.get()),
            options,
        )
    }

    fn show(&self, height: f32) {
        let frame = Rect::new(0.0, 480.0 - height, 320.0, height);
        self.hub
            .post(KeyboardChannel::DidShow, &KeyboardEvent::shown(frame));
    }

    fn hide(&self) {
        self.hub
            .post(KeyboardChannel::WillHide, &KeyboardEvent::hidden());
    }

    fn content_inset(&self) -> EdgeInsets {
        self.view.borrow().content_inset
    }

    fn indicator_inset(&self) -> EdgeInsets {
        self.view.borrow().indicator_inset
    }

    fn scroll_calls(&self) -> Vec<(Rect, bool)> {
        self.view.borrow().scroll_calls.clone()
    }
}

#[test]
fn show_replaces_inset_with_keyboard_bottom() {
    let h = Harness::new(EdgeInsets::new(10.0, 0.0, 0.0, 0.0));
    let guard = h.guard();

    h.show(300.0);

    assert_eq!(h.content_inset(), EdgeInsets::bottom_only(300.0));
    assert_eq!(h.indicator_inset(), EdgeInsets::bottom_only(300.0));
    assert!(guard.is_adjusted());
}

#[test]
fn show_then_hide_round_trips_the_inset() {
    let initial = EdgeInsets::new(10.0, 0.0, 0.0, 0.0);
    let h = Harness::new(initial);
    let guard = h.guard();

    h.show(300.0);
    assert_eq!(h.content_inset(), EdgeInsets::bottom_only(300.0));

    h.hide();
    assert_eq!(h.content_inset(), initial);
    assert_eq!(h.indicator_inset(), initial);
    assert!(!guard.is_adjusted());
}

#[test]
fn hide_before_any_show_applies_zero_insets() {
    let h = Harness::new(EdgeInsets::new(10.0, 5.0, 0.0, 5.0));
    let _guard = h.guard();

    h.hide();

    assert_eq!(h.content_inset(), EdgeInsets::ZERO);
}

#[test]
fn hide_is_idempotent() {
    let initial = EdgeInsets::new(10.0, 0.0, 0.0, 0.0);
    let h = Harness::new(initial);
    let _guard = h.guard();

    h.show(300.0);
    h.hide();
    h.hide();

    assert_eq!(h.content_inset(), initial);
    assert_eq!(h.indicator_inset(), initial);
}

#[test]
fn missing_end_frame_is_a_guarded_no_op() {
    let initial = EdgeInsets::new(10.0, 0.0, 0.0, 0.0);
    let h = Harness::new(initial);
    let guard = h.guard();

    h.hub
        .post(KeyboardChannel::DidShow, &KeyboardEvent::hidden());

    assert_eq!(h.content_inset(), initial);
    assert!(h.scroll_calls().is_empty());
    assert!(!guard.is_adjusted());
}

#[test]
fn no_active_field_means_no_scroll_request() {
    let h = Harness::new(EdgeInsets::ZERO);
    let _guard = h.guard();

    h.show(300.0);

    assert!(h.scroll_calls().is_empty());
}

#[test]
fn field_inside_reduced_frame_is_not_scrolled() {
    let h = Harness::new(EdgeInsets::ZERO);
    let _guard = h.guard();
    // Visible frame is 480 tall; a 300 keyboard leaves y < 180 visible.
    h.field.set(Some(Rect::new(10.0, 50.0, 200.0, 30.0)));

    h.show(300.0);

    assert!(h.scroll_calls().is_empty());
}

#[test]
fn obscured_field_is_scrolled_into_view_once() {
    let h = Harness::new(EdgeInsets::ZERO);
    let _guard = h.guard();
    let field = Rect::new(10.0, 400.0, 200.0, 30.0);
    h.field.set(Some(field));

    h.show(300.0);

    assert_eq!(h.scroll_calls(), alloc::vec![(field, true)]);
}

#[test]
fn reveal_animation_follows_options() {
    let h = Harness::new(EdgeInsets::ZERO);
    let _guard = h.guard_with(GuardOptions::new().with_animate_reveal(false));
    let field = Rect::new(10.0, 400.0, 200.0, 30.0);
    h.field.set(Some(field));

    h.show(300.0);

    assert_eq!(h.scroll_calls(), alloc::vec![(field, false)]);
}

#[test]
fn field_on_reduced_frame_boundary_counts_as_obscured() {
    let h = Harness::new(EdgeInsets::ZERO);
    let _guard = h.guard();
    // Max edges are exclusive: y == 180 is already under the keyboard.
    h.field.set(Some(Rect::new(10.0, 180.0, 200.0, 30.0)));

    h.show(300.0);

    assert_eq!(h.scroll_calls().len(), 1);
}

#[test]
fn double_show_keeps_original_snapshot_by_default() {
    let initial = EdgeInsets::new(10.0, 0.0, 0.0, 0.0);
    let h = Harness::new(initial);
    let guard = h.guard();

    h.show(300.0);
    h.show(250.0);

    assert_eq!(h.content_inset(), EdgeInsets::bottom_only(250.0));
    assert_eq!(guard.saved_inset(), initial);

    h.hide();
    assert_eq!(h.content_inset(), initial);
}

#[test]
fn legacy_policy_overwrites_snapshot_on_every_show() {
    let initial = EdgeInsets::new(10.0, 0.0, 0.0, 0.0);
    let h = Harness::new(initial);
    let guard =
        h.guard_with(GuardOptions::new().with_snapshot_policy(SnapshotPolicy::EveryShow));

    h.show(300.0);
    h.show(250.0);

    // The second save captures the already-adjusted inset.
    assert_eq!(guard.saved_inset(), EdgeInsets::bottom_only(300.0));

    h.hide();
    assert_eq!(h.content_inset(), EdgeInsets::bottom_only(300.0));
}

#[test]
fn drop_unsubscribes_from_both_channels() {
    let initial = EdgeInsets::new(10.0, 0.0, 0.0, 0.0);
    let h = Harness::new(initial);
    let guard = h.guard();
    assert_eq!(h.hub.handler_count(KeyboardChannel::DidShow), 1);
    assert_eq!(h.hub.handler_count(KeyboardChannel::WillHide), 1);

    drop(guard);

    assert_eq!(h.hub.handler_count(KeyboardChannel::DidShow), 0);
    assert_eq!(h.hub.handler_count(KeyboardChannel::WillHide), 0);
    let delivered = h
        .hub
        .post(KeyboardChannel::DidShow, &KeyboardEvent::shown(Rect::new(0.0, 180.0, 320.0, 300.0)));
    assert_eq!(delivered, 0);
    assert_eq!(h.content_inset(), initial);
}

#[test]
fn dropped_view_makes_handlers_no_ops() {
    let h = Harness::new(EdgeInsets::ZERO);
    let guard = h.guard();

    let Harness {
        hub, view, field, ..
    } = h;
    drop(view);
    field.set(Some(Rect::new(10.0, 400.0, 200.0, 30.0)));

    // Both posts still deliver, but the guard has nothing left to mutate.
    assert_eq!(
        hub.post(
            KeyboardChannel::DidShow,
            &KeyboardEvent::shown(Rect::new(0.0, 180.0, 320.0, 300.0))
        ),
        1
    );
    assert_eq!(hub.post(KeyboardChannel::WillHide, &KeyboardEvent::hidden()), 1);
    assert!(!guard.is_adjusted());
}

#[test]
fn hub_tokens_are_distinct_and_unknown_tokens_are_rejected() {
    let hub = NotificationHub::new();
    let a = hub.subscribe(KeyboardChannel::DidShow, Rc::new(|_| {}));
    let b = hub.subscribe(KeyboardChannel::DidShow, Rc::new(|_| {}));
    assert_ne!(a, b);

    assert!(hub.unsubscribe(a));
    assert!(!hub.unsubscribe(a));
    assert!(hub.unsubscribe(b));
    assert!(!hub.unsubscribe(SubscriptionToken::new(999)));
}

#[test]
fn hub_delivers_in_subscription_order_and_only_on_channel() {
    let hub = NotificationHub::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let o = Rc::clone(&order);
    hub.subscribe(KeyboardChannel::DidShow, Rc::new(move |_| o.borrow_mut().push(1)));
    let o = Rc::clone(&order);
    hub.subscribe(KeyboardChannel::WillHide, Rc::new(move |_| o.borrow_mut().push(2)));
    let o = Rc::clone(&order);
    hub.subscribe(KeyboardChannel::DidShow, Rc::new(move |_| o.borrow_mut().push(3)));

    hub.post(KeyboardChannel::DidShow, &KeyboardEvent::hidden());

    assert_eq!(*order.borrow(), alloc::vec![1, 3]);
}

#[test]
fn handler_may_unsubscribe_reentrantly() {
    let hub = Rc::new(NotificationHub::new());
    let token = Rc::new(Cell::new(None::<SubscriptionToken>));

    let hub2 = Rc::clone(&hub);
    let token2 = Rc::clone(&token);
    let t = hub.subscribe(
        KeyboardChannel::WillHide,
        Rc::new(move |_| {
            if let Some(t) = token2.get() {
                hub2.unsubscribe(t);
            }
        }),
    );
    token.set(Some(t));

    assert_eq!(hub.post(KeyboardChannel::WillHide, &KeyboardEvent::hidden()), 1);
    assert_eq!(hub.handler_count(KeyboardChannel::WillHide), 0);
    assert_eq!(hub.post(KeyboardChannel::WillHide, &KeyboardEvent::hidden()), 0);
}

#[test]
fn reduced_height_saturates_at_zero() {
    let r = Rect::new(0.0, 0.0, 320.0, 100.0).reduced_height(300.0);
    assert_eq!(r.size.height, 0.0);
    assert!(!r.contains(Point::new(0.0, 0.0)));
}
