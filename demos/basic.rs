// Example: guard a form's scroll view through a keyboard show/hide cycle.
use std::cell::RefCell;
use std::rc::Rc;

use inset_guard::{
    EdgeInsets, InsetGuard, KeyboardChannel, KeyboardEvent, NotificationHub, OwnerContext, Rect,
    ScrollView,
};

struct FormScrollView {
    content_inset: EdgeInsets,
    indicator_inset: EdgeInsets,
}

impl FormScrollView {
    fn report(&self) -> (EdgeInsets, EdgeInsets) {
        (self.content_inset, self.indicator_inset)
    }
}

impl ScrollView for FormScrollView {
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
        println!("scroll_rect_to_visible({rect:?}, animated={animated})");
    }
}

struct FormScreen;

impl OwnerContext for FormScreen {
    fn visible_frame(&self) -> Rect {
        Rect::new(0.0, 0.0, 320.0, 480.0)
    }
}

fn main() {
    let hub = Rc::new(NotificationHub::new());
    let view = Rc::new(RefCell::new(FormScrollView {
        content_inset: EdgeInsets::new(10.0, 0.0, 0.0, 0.0),
        indicator_inset: EdgeInsets::ZERO,
    }));
    let screen = Rc::new(RefCell::new(FormScreen));

    // The password field near the bottom of the form has focus.
    let focused = Rect::new(16.0, 420.0, 288.0, 32.0);
    let guard = InsetGuard::new(
        Rc::clone(&hub),
        &view,
        &screen,
        Rc::new(move || Some(focused)),
    );

    let keyboard = Rect::new(0.0, 180.0, 320.0, 300.0);
    hub.post(KeyboardChannel::DidShow, &KeyboardEvent::shown(keyboard));
    println!("shown: (content, indicator) = {:?}", view.borrow().report());

    hub.post(KeyboardChannel::WillHide, &KeyboardEvent::hidden());
    println!("hidden: (content, indicator) = {:?}", view.borrow().report());

    drop(guard);
    let delivered = hub.post(KeyboardChannel::DidShow, &KeyboardEvent::shown(keyboard));
    println!("after drop: {delivered} handlers left");
}
