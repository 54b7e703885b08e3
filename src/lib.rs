//! A headless keyboard-inset guard for scrollable views.
//!
//! When an on-screen keyboard appears it can cover the input field the user
//! is typing into. [`InsetGuard`] solves that narrow problem: it listens for
//! keyboard show/hide events on an injected [`EventBus`], pads the managed
//! view's bottom content inset by the keyboard height while the keyboard is
//! up, restores the pre-keyboard insets when it goes away, and scrolls the
//! focused field into view if the keyboard would obscure it.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the scrollable view, behind [`ScrollView`]
//! - the owning screen's visible frame, behind [`OwnerContext`]
//! - a focused-element accessor ([`ActiveFieldFn`])
//! - keyboard notifications, behind [`EventBus`] (or via the bundled
//!   [`NotificationHub`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod events;
mod guard;
mod options;
mod types;
mod view;

#[cfg(test)]
mod tests;

pub use events::{
    EventBus, EventHandler, KeyboardChannel, KeyboardEvent, NotificationHub, SubscriptionToken,
};
pub use guard::InsetGuard;
pub use options::{GuardOptions, SnapshotPolicy};
pub use types::{EdgeInsets, Point, Rect, Size};
pub use view::{ActiveFieldFn, OwnerContext, ScrollView};
