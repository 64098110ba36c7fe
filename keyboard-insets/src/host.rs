use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::{EdgeInsets, Rect};

/// The view that contains the scrollable region.
///
/// It is only used to map the region's frame into the screen space the input panel reports in.
pub trait HostView {
    /// Converts `rect`, expressed in this view's coordinate space, to screen coordinates.
    fn convert_to_screen(&self, rect: Rect) -> Rect;
}

impl<H: HostView + ?Sized> HostView for &H {
    fn convert_to_screen(&self, rect: Rect) -> Rect {
        (**self).convert_to_screen(rect)
    }
}

impl<H: HostView + ?Sized> HostView for Rc<H> {
    fn convert_to_screen(&self, rect: Rect) -> Rect {
        (**self).convert_to_screen(rect)
    }
}

impl<H: HostView + ?Sized> HostView for Box<H> {
    fn convert_to_screen(&self, rect: Rect) -> Rect {
        (**self).convert_to_screen(rect)
    }
}

/// A scrollable viewport whose insets can be adjusted.
pub trait ScrollableRegion {
    /// The region's frame in its host view's coordinate space.
    fn frame(&self) -> Rect;

    fn content_insets(&self) -> EdgeInsets;

    fn set_content_insets(&mut self, insets: EdgeInsets);

    fn indicator_insets(&self) -> EdgeInsets;

    fn set_indicator_insets(&mut self, insets: EdgeInsets);
}
