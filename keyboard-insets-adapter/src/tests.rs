use crate::*;

use alloc::rc::Rc;
use core::cell::RefCell;

use keyboard_insets::{
    AdjusterOptions, EdgeInsets, HostView, InputPanelEvent, InsetAdjuster, NotificationBus,
    PanelSignal, Point, Rect, Size,
};

const SCREEN: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

/// Window at the screen origin, a content view below a 100pt header, and a scroll view
/// filling the content view down to y = 744 (screen space).
fn scene() -> (Rc<ViewNode>, Rc<ViewNode>, Rc<RefCell<ScrollView>>) {
    let window = ViewNode::root(SCREEN);
    let content = ViewNode::child(&window, Rect::new(0.0, 100.0, 390.0, 744.0));
    let scroll = Rc::new(RefCell::new(ScrollView::new(
        Rect::new(0.0, 0.0, 390.0, 644.0),
        Size::new(390.0, 2000.0),
    )));
    (window, content, scroll)
}

#[test]
fn view_tree_converts_through_ancestors() {
    let root = ViewNode::root(Rect::new(10.0, 20.0, 300.0, 600.0));
    let mid = ViewNode::child(&root, Rect::new(5.0, 50.0, 200.0, 400.0));
    let leaf = ViewNode::child(&mid, Rect::new(0.0, 30.0, 100.0, 100.0));

    let r = Rect::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(leaf.convert_to_screen(r), Rect::new(16.0, 102.0, 3.0, 4.0));

    // A scrolled container shifts everything inside it.
    mid.set_bounds_origin(Point::new(0.0, 40.0));
    assert_eq!(leaf.convert_to_screen(r), Rect::new(16.0, 62.0, 3.0, 4.0));

    // Losing the root ends the walk at `mid`.
    drop(root);
    assert!(mid.parent().is_none());
    assert_eq!(leaf.convert_to_screen(r), Rect::new(6.0, 42.0, 3.0, 4.0));
}

#[test]
fn panel_driver_posts_will_and_did_signals() {
    let bus = NotificationBus::new();
    let seen = Rc::new(RefCell::new(alloc::vec::Vec::new()));
    for signal in [
        PanelSignal::WillShow,
        PanelSignal::DidShow,
        PanelSignal::WillHide,
        PanelSignal::DidHide,
    ] {
        let seen = Rc::clone(&seen);
        bus.subscribe_fn(signal, move |e: &InputPanelEvent| {
            seen.borrow_mut().push((e.signal, e.begin_frame(), e.end_frame()))
        });
    }

    let mut driver = PanelDriver::new(bus.clone(), SCREEN);
    assert_eq!(driver.show(300.0, 0.25), 2);
    assert!(driver.is_visible());
    let docked = Rect::new(0.0, 544.0, 390.0, 300.0);
    assert_eq!(driver.frame(), Some(docked));

    assert_eq!(driver.hide(0.25), 2);
    assert!(!driver.is_visible());

    let offscreen = Rect::new(0.0, 844.0, 390.0, 300.0);
    let seen = seen.borrow();
    assert_eq!(
        *seen,
        [
            (PanelSignal::WillShow, Some(offscreen), Some(docked)),
            (PanelSignal::DidShow, Some(offscreen), Some(docked)),
            (PanelSignal::WillHide, Some(docked), Some(offscreen)),
            (PanelSignal::DidHide, Some(docked), Some(offscreen)),
        ]
    );
}

#[test]
fn keyboard_session_end_to_end() {
    let bus = NotificationBus::new();
    let (_window, content, scroll) = scene();
    let adjuster = InsetAdjuster::new(
        bus.clone(),
        &content,
        Rc::clone(&scroll),
        AdjusterOptions::new().with_minimum_clearance(8.0),
    )
    .start();
    let mut panel = PanelDriver::new(bus.clone(), SCREEN);

    // Scroll view bottom is 744 on screen, panel top is 544.
    panel.show(300.0, 0.25);
    assert_eq!(
        scroll.borrow().content_insets,
        EdgeInsets::new(0.0, 0.0, 208.0, 0.0)
    );
    assert_eq!(scroll.borrow().indicator_insets.bottom, 208.0);
    assert!(adjuster.state().panel_visible);

    // Taller panel (e.g. a suggestion bar appeared).
    panel.show(340.0, 0.1);
    assert_eq!(scroll.borrow().content_insets.bottom, 248.0);

    panel.hide(0.25);
    assert_eq!(scroll.borrow().content_insets, EdgeInsets::ZERO);
    assert_eq!(scroll.borrow().indicator_insets, EdgeInsets::ZERO);
    assert!(!adjuster.state().panel_visible);
}

#[test]
fn short_panel_below_the_scroll_view_changes_nothing() {
    let bus = NotificationBus::new();
    let (_window, content, scroll) = scene();
    let _adjuster = InsetAdjuster::new(
        bus.clone(),
        &content,
        Rc::clone(&scroll),
        AdjusterOptions::new().with_minimum_clearance(8.0),
    )
    .start();

    // Panel top at 764, 20pt below the scroll view: overlap is -12.
    PanelDriver::new(bus, SCREEN).show(80.0, 0.0);
    assert_eq!(scroll.borrow().content_insets, EdgeInsets::ZERO);
}

#[test]
fn torn_down_view_tree_is_tolerated() {
    let bus = NotificationBus::new();
    let (window, content, scroll) = scene();
    let _adjuster = InsetAdjuster::new(
        bus.clone(),
        &content,
        Rc::clone(&scroll),
        AdjusterOptions::new(),
    )
    .start();
    let mut panel = PanelDriver::new(bus.clone(), SCREEN);

    drop(content);
    drop(window);

    panel.show(300.0, 0.25);
    assert_eq!(scroll.borrow().content_insets, EdgeInsets::ZERO);
    panel.hide(0.25);
    assert_eq!(scroll.borrow().content_insets, EdgeInsets::ZERO);
}

#[test]
fn reveal_keeps_a_field_above_the_panel() {
    let bus = NotificationBus::new();
    let (_window, content, scroll) = scene();
    let _adjuster =
        InsetAdjuster::new(bus.clone(), &content, Rc::clone(&scroll), AdjusterOptions::new())
            .start();

    // Field sits at content y = 500..540, visible before the panel shows.
    let field = Rect::new(16.0, 500.0, 358.0, 40.0);
    assert_eq!(scroll.borrow_mut().reveal(field, 8.0), 0.0);

    PanelDriver::new(bus, SCREEN).show(300.0, 0.25);
    let mut view = scroll.borrow_mut();
    assert_eq!(view.content_insets.bottom, 200.0);

    // Visible content is now 0..444; the field's padded bottom (548) must sit at 444.
    let applied = view.reveal(field, 8.0);
    assert_eq!(applied, 104.0);
    let visible = view.visible_content_rect();
    assert_eq!(visible.max_y(), 548.0);
}

#[test]
fn scroll_view_offsets_follow_insets() {
    let mut view = ScrollView::new(Rect::new(0.0, 0.0, 320.0, 500.0), Size::new(320.0, 800.0))
        .with_insets(EdgeInsets::new(40.0, 0.0, 0.0, 0.0));
    assert_eq!(view.offset_range(), (-40.0, 300.0));

    view.content_insets.bottom = 200.0;
    assert_eq!(view.offset_range(), (-40.0, 500.0));
    assert_eq!(view.set_content_offset_clamped(900.0), 500.0);
    assert_eq!(view.set_content_offset_clamped(-100.0), -40.0);

    // Content shorter than the viewport cannot scroll past its top.
    let short = ScrollView::new(Rect::new(0.0, 0.0, 320.0, 500.0), Size::new(320.0, 100.0));
    assert_eq!(short.offset_range(), (0.0, 0.0));
}

#[test]
fn reveal_aligns_top_for_targets_above_or_too_tall() {
    let mut view = ScrollView::new(Rect::new(0.0, 0.0, 320.0, 500.0), Size::new(320.0, 3000.0));
    view.set_content_offset_clamped(1000.0);

    assert_eq!(view.reveal(Rect::new(0.0, 400.0, 320.0, 50.0), 0.0), 400.0);
    assert_eq!(view.reveal(Rect::new(0.0, 900.0, 320.0, 800.0), 10.0), 890.0);
    // Already visible: no movement.
    assert_eq!(view.reveal(Rect::new(0.0, 1000.0, 320.0, 100.0), 0.0), 890.0);
}
