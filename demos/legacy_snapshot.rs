// Example: the difference between the two snapshot policies when two
// did-show events arrive without an intervening hide (e.g. the keyboard
// resizes for an accessory bar).
use std::cell::RefCell;
use std::rc::Rc;

use inset_guard::{
    EdgeInsets, GuardOptions, InsetGuard, KeyboardChannel, KeyboardEvent, NotificationHub,
    OwnerContext, Rect, ScrollView, SnapshotPolicy,
};

struct PlainScrollView {
    content_inset: EdgeInsets,
}

impl ScrollView for PlainScrollView {
    fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }

    fn set_content_inset(&mut self, inset: EdgeInsets) {
        self.content_inset = inset;
    }

    fn set_scroll_indicator_inset(&mut self, _inset: EdgeInsets) {}

    fn scroll_rect_to_visible(&mut self, _rect: Rect, _animated: bool) {}
}

struct Screen;

impl OwnerContext for Screen {
    fn visible_frame(&self) -> Rect {
        Rect::new(0.0, 0.0, 320.0, 480.0)
    }
}

fn run(policy: SnapshotPolicy) -> EdgeInsets {
    let hub = Rc::new(NotificationHub::new());
    let view = Rc::new(RefCell::new(PlainScrollView {
        content_inset: EdgeInsets::new(10.0, 0.0, 0.0, 0.0),
    }));
    let screen = Rc::new(RefCell::new(Screen));
    let _guard = InsetGuard::with_options(
        Rc::clone(&hub),
        &view,
        &screen,
        Rc::new(|| None),
        GuardOptions::new().with_snapshot_policy(policy),
    );

    let tall = Rect::new(0.0, 180.0, 320.0, 300.0);
    let short = Rect::new(0.0, 230.0, 320.0, 250.0);
    hub.post(KeyboardChannel::DidShow, &KeyboardEvent::shown(tall));
    hub.post(KeyboardChannel::DidShow, &KeyboardEvent::shown(short));
    hub.post(KeyboardChannel::WillHide, &KeyboardEvent::hidden());

    view.borrow().content_inset
}

fn main() {
    println!(
        "FirstShowOnly restores {:?}",
        run(SnapshotPolicy::FirstShowOnly)
    );
    println!("EveryShow restores {:?}", run(SnapshotPolicy::EveryShow));
}
