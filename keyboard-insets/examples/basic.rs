use std::cell::RefCell;
use std::rc::Rc;

use keyboard_insets::{
    AdjusterOptions, EdgeInsets, HostView, InputPanelEvent, InsetAdjuster, NotificationBus,
    PanelSignal, Rect, ScrollableRegion,
};

/// A host placed 100pt below the top of the screen.
struct Header;

impl HostView for Header {
    fn convert_to_screen(&self, rect: Rect) -> Rect {
        rect.offset(0.0, 100.0)
    }
}

#[derive(Debug, Default)]
struct List {
    insets: EdgeInsets,
    indicators: EdgeInsets,
}

impl ScrollableRegion for List {
    fn frame(&self) -> Rect {
        Rect::new(0.0, 0.0, 390.0, 400.0)
    }

    fn content_insets(&self) -> EdgeInsets {
        self.insets
    }

    fn set_content_insets(&mut self, insets: EdgeInsets) {
        self.insets = insets;
    }

    fn indicator_insets(&self) -> EdgeInsets {
        self.indicators
    }

    fn set_indicator_insets(&mut self, insets: EdgeInsets) {
        self.indicators = insets;
    }
}

fn main() {
    let bus = NotificationBus::new();
    let host = Rc::new(Header);
    let list = Rc::new(RefCell::new(List::default()));

    let adjuster = InsetAdjuster::new(
        bus.clone(),
        &host,
        Rc::clone(&list),
        AdjusterOptions::new().with_minimum_clearance(8.0),
    )
    .start();

    let panel = Rect::new(0.0, 450.0, 390.0, 394.0);
    bus.post(&InputPanelEvent::new(PanelSignal::DidShow).with_end_frame(panel));
    println!("after show: {:?}", adjuster.state());

    bus.post(&InputPanelEvent::new(PanelSignal::WillHide));
    println!("after hide: {:?}", adjuster.state());

    drop(adjuster);
    println!("subscribers after drop: {}", bus.subscriber_count());
}
