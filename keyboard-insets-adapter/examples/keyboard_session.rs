use std::cell::RefCell;
use std::rc::Rc;

use keyboard_insets::{AdjusterOptions, InsetAdjuster, NotificationBus, Rect, Size};
use keyboard_insets_adapter::{PanelDriver, ScrollView, ViewNode};

fn main() {
    // Example: a form inside a navigation container, with a text field near the bottom.
    //
    // An adapter would:
    // - mirror its view hierarchy into `HostView` conversions
    // - forward platform keyboard notifications to the bus
    // - scroll the focused field into view after the insets change
    let screen = Rect::new(0.0, 0.0, 390.0, 844.0);
    let window = ViewNode::root(screen);
    let content = ViewNode::child(&window, Rect::new(0.0, 100.0, 390.0, 744.0));
    let form = Rc::new(RefCell::new(ScrollView::new(
        Rect::new(0.0, 0.0, 390.0, 644.0),
        Size::new(390.0, 1200.0),
    )));

    let bus = NotificationBus::new();
    let adjuster = InsetAdjuster::new(
        bus.clone(),
        &content,
        Rc::clone(&form),
        AdjusterOptions::new().with_minimum_clearance(12.0),
    )
    .start();
    let mut panel = PanelDriver::new(bus, screen);

    let field = Rect::new(16.0, 560.0, 358.0, 44.0);
    for height in [291.0, 336.0] {
        panel.show(height, 0.25);
        let offset = form.borrow_mut().reveal(field, 8.0);
        println!(
            "panel={:?} insets={:?} offset={offset} visible={:?}",
            panel.frame(),
            form.borrow().content_insets,
            form.borrow().visible_content_rect()
        );
    }

    panel.hide(0.25);
    println!("after hide: {:?}", adjuster.state());
}
