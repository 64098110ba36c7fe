use keyboard_insets::{EdgeInsets, Point, Rect, ScrollableRegion, Size};

/// A plain scroll view model that implements [`ScrollableRegion`].
///
/// Offsets follow the usual convention: `content_offset.y == -content_insets.top` shows the very
/// top of the content below the top inset.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollView {
    pub frame: Rect,
    pub content_size: Size,
    pub content_offset: Point,
    pub content_insets: EdgeInsets,
    pub indicator_insets: EdgeInsets,
}

impl ScrollView {
    pub fn new(frame: Rect, content_size: Size) -> Self {
        Self {
            frame,
            content_size,
            ..Self::default()
        }
    }

    /// Sets both content and indicator insets.
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = insets;
        self.indicator_insets = insets;
        self
    }

    /// Vertical `(min, max)` content offsets reachable with the current insets.
    pub fn offset_range(&self) -> (f64, f64) {
        let min = -self.content_insets.top;
        let max = self.content_size.height + self.content_insets.bottom - self.frame.size.height;
        (min, max.max(min))
    }

    pub fn clamp_offset(&self, y: f64) -> f64 {
        let (min, max) = self.offset_range();
        y.max(min).min(max)
    }

    /// Sets the vertical content offset, clamped to [`Self::offset_range`]. Returns the applied
    /// offset.
    pub fn set_content_offset_clamped(&mut self, y: f64) -> f64 {
        let y = self.clamp_offset(y);
        self.content_offset.y = y;
        y
    }

    /// The part of the content (in content coordinates) that is visible between the insets.
    pub fn visible_content_rect(&self) -> Rect {
        Rect::new(
            self.content_offset.x,
            self.content_offset.y,
            self.frame.size.width,
            self.frame.size.height,
        )
        .inset_by(self.content_insets)
    }

    /// Scrolls just enough to show `target` (content coordinates) plus `padding` above and below.
    ///
    /// - Already visible: nothing moves.
    /// - Above the visible area, or taller than it: the target's top is aligned.
    /// - Below the visible area: the target's bottom is aligned above the bottom inset.
    ///
    /// Returns the applied (clamped) offset.
    pub fn reveal(&mut self, target: Rect, padding: f64) -> f64 {
        let padding = padding.max(0.0);
        let visible = self.visible_content_rect();
        let start = target.min_y() - padding;
        let end = target.max_y() + padding;
        let cur = self.content_offset.y;

        let wanted = if end - start > visible.size.height || start < visible.min_y() {
            start - self.content_insets.top
        } else if end > visible.max_y() {
            end - (self.frame.size.height - self.content_insets.bottom)
        } else {
            cur
        };
        self.set_content_offset_clamped(wanted)
    }
}

impl ScrollableRegion for ScrollView {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn content_insets(&self) -> EdgeInsets {
        self.content_insets
    }

    fn set_content_insets(&mut self, insets: EdgeInsets) {
        self.content_insets = insets;
    }

    fn indicator_insets(&self) -> EdgeInsets {
        self.indicator_insets
    }

    fn set_indicator_insets(&mut self, insets: EdgeInsets) {
        self.indicator_insets = insets;
    }
}
