use alloc::rc::Rc;

use crate::{EdgeInsets, Rect};

/// The scrollable view whose insets the guard manages.
///
/// The guard mutates `content_inset` and `scroll_indicator_inset` and may
/// request a scroll; it never owns the view's lifecycle.
pub trait ScrollView {
    fn content_inset(&self) -> EdgeInsets;
    fn set_content_inset(&mut self, inset: EdgeInsets);
    fn set_scroll_indicator_inset(&mut self, inset: EdgeInsets);

    /// Scrolls the smallest amount necessary so `rect` becomes visible.
    fn scroll_rect_to_visible(&mut self, rect: Rect, animated: bool);
}

/// The screen/controller that owns the scrollable view.
///
/// Only its layout frame is read; the frame must be in the same coordinate
/// space as the focused element's frame.
pub trait OwnerContext {
    fn visible_frame(&self) -> Rect;
}

/// Accessor for the currently focused element's frame.
///
/// Focus tracking is entirely the owner's job; the guard only queries.
/// `None` means no element is focused, which is normal, expected state.
pub type ActiveFieldFn = Rc<dyn Fn() -> Option<Rect>>;
