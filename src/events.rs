use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

use crate::Rect;

/// The two notification channels the guard listens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyboardChannel {
    DidShow,
    WillHide,
}

/// Payload delivered on a keyboard channel.
///
/// The host runtime reports the keyboard's end-state frame on `DidShow`.
/// The frame may legitimately be absent; consumers must treat that as
/// "nothing to adjust" rather than an error.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyboardEvent {
    pub end_frame: Option<Rect>,
}

impl KeyboardEvent {
    pub const fn shown(end_frame: Rect) -> Self {
        Self {
            end_frame: Some(end_frame),
        }
    }

    /// An event with no frame attached (the `WillHide` payload carries none).
    pub const fn hidden() -> Self {
        Self { end_frame: None }
    }

    pub fn keyboard_height(&self) -> Option<f32> {
        self.end_frame.map(|f| f.size.height)
    }
}

/// A callback invoked when an event is posted on a subscribed channel.
///
/// Handlers run to completion on the posting thread; the bus contract is
/// single-threaded (the host runtime's main/UI thread).
pub type EventHandler = Rc<dyn Fn(&KeyboardEvent)>;

/// Opaque handle identifying one subscription on an [`EventBus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionToken(u64);

impl SubscriptionToken {
    /// Mints a token from a raw id. Bus implementors must keep ids unique
    /// for the lifetime of the bus.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Minimal observer-registration capability the guard needs from the host.
///
/// Subscriptions are an acquire/release pair: whoever calls `subscribe` owns
/// the returned token and must `unsubscribe` it before the handler's captured
/// state goes away.
pub trait EventBus {
    fn subscribe(&self, channel: KeyboardChannel, handler: EventHandler) -> SubscriptionToken;

    /// Removes a subscription. Returns `false` if the token is unknown
    /// (already removed, or minted by another bus).
    fn unsubscribe(&self, token: SubscriptionToken) -> bool;
}

struct Registration {
    token: SubscriptionToken,
    channel: KeyboardChannel,
    handler: EventHandler,
}

/// A single-threaded in-process notification hub.
///
/// Hosts with a native notification system should adapt it behind
/// [`EventBus`] instead; this implementation exists for hosts without one,
/// and for tests and demos.
#[derive(Default)]
pub struct NotificationHub {
    next_token: Cell<u64>,
    registrations: RefCell<Vec<Registration>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every handler subscribed to `channel`, in
    /// subscription order. Returns the number of handlers invoked.
    ///
    /// The handler list is snapshotted before delivery, so a handler may
    /// subscribe or unsubscribe reentrantly; such changes take effect from
    /// the next `post`.
    pub fn post(&self, channel: KeyboardChannel, event: &KeyboardEvent) -> usize {
        let snapshot: Vec<EventHandler> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.channel == channel)
            .map(|r| Rc::clone(&r.handler))
            .collect();
        igtrace!(?channel, handlers = snapshot.len(), "NotificationHub::post");
        for handler in &snapshot {
            handler(event);
        }
        snapshot.len()
    }

    pub fn handler_count(&self, channel: KeyboardChannel) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|r| r.channel == channel)
            .count()
    }
}

impl EventBus for NotificationHub {
    fn subscribe(&self, channel: KeyboardChannel, handler: EventHandler) -> SubscriptionToken {
        let raw = self.next_token.get();
        self.next_token.set(raw.wrapping_add(1));
        let token = SubscriptionToken::new(raw);
        self.registrations.borrow_mut().push(Registration {
            token,
            channel,
            handler,
        });
        igtrace!(token = raw, ?channel, "NotificationHub::subscribe");
        token
    }

    fn unsubscribe(&self, token: SubscriptionToken) -> bool {
        let mut regs = self.registrations.borrow_mut();
        let before = regs.len();
        regs.retain(|r| r.token != token);
        let removed = regs.len() != before;
        if !removed {
            igwarn!(token = token.raw(), "NotificationHub: unknown token");
        }
        removed
    }
}

impl core::fmt::Debug for NotificationHub {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("NotificationHub")
            .field("registrations", &self.registrations.borrow().len())
            .finish_non_exhaustive()
    }
}
