use alloc::rc::{Rc, Weak};
use core::cell::Cell;
use core::fmt;

use keyboard_insets::{HostView, Point, Rect};

/// A node in an in-memory view hierarchy.
///
/// `frame` is expressed in the parent's coordinate space and `bounds_origin` shifts the node's
/// own coordinate space (e.g. a scrolled container). Parents are held weakly, so a subtree never
/// keeps its ancestors alive.
pub struct ViewNode {
    frame: Cell<Rect>,
    bounds_origin: Cell<Point>,
    parent: Weak<ViewNode>,
}

impl ViewNode {
    /// A node attached directly to the screen.
    pub fn root(frame: Rect) -> Rc<Self> {
        Rc::new(Self {
            frame: Cell::new(frame),
            bounds_origin: Cell::new(Point::ZERO),
            parent: Weak::new(),
        })
    }

    pub fn child(parent: &Rc<ViewNode>, frame: Rect) -> Rc<Self> {
        Rc::new(Self {
            frame: Cell::new(frame),
            bounds_origin: Cell::new(Point::ZERO),
            parent: Rc::downgrade(parent),
        })
    }

    pub fn frame(&self) -> Rect {
        self.frame.get()
    }

    pub fn set_frame(&self, frame: Rect) {
        self.frame.set(frame);
    }

    pub fn bounds_origin(&self) -> Point {
        self.bounds_origin.get()
    }

    pub fn set_bounds_origin(&self, origin: Point) {
        self.bounds_origin.set(origin);
    }

    pub fn parent(&self) -> Option<Rc<ViewNode>> {
        self.parent.upgrade()
    }

    fn offset_in_parent(&self) -> (f64, f64) {
        let frame = self.frame.get();
        let bounds = self.bounds_origin.get();
        (frame.origin.x - bounds.x, frame.origin.y - bounds.y)
    }
}

impl HostView for ViewNode {
    /// Walks up to the root. A dropped ancestor ends the walk as if the chain stopped there.
    fn convert_to_screen(&self, rect: Rect) -> Rect {
        let (mut dx, mut dy) = self.offset_in_parent();
        let mut next = self.parent.upgrade();
        while let Some(node) = next {
            let (x, y) = node.offset_in_parent();
            dx += x;
            dy += y;
            next = node.parent.upgrade();
        }
        rect.offset(dx, dy)
    }
}

impl fmt::Debug for ViewNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewNode")
            .field("frame", &self.frame.get())
            .field("bounds_origin", &self.bounds_origin.get())
            .field("has_parent", &(self.parent.strong_count() > 0))
            .finish()
    }
}
