use keyboard_insets::{InputPanelEvent, NotificationBus, PanelSignal, Rect};

/// Simulates an input panel docked at the bottom of `screen`.
///
/// Each transition posts the "will" signal followed by the "did" signal, with begin/end frames
/// and the animation duration in the user info, the way a platform keyboard reports itself.
#[derive(Clone, Debug)]
pub struct PanelDriver {
    bus: NotificationBus,
    screen: Rect,
    frame: Option<Rect>,
}

impl PanelDriver {
    pub fn new(bus: NotificationBus, screen: Rect) -> Self {
        Self {
            bus,
            screen,
            frame: None,
        }
    }

    pub fn bus(&self) -> &NotificationBus {
        &self.bus
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn is_visible(&self) -> bool {
        self.frame.is_some()
    }

    /// The docked frame while visible.
    pub fn frame(&self) -> Option<Rect> {
        self.frame
    }

    /// Shows the panel (or changes its height while shown).
    ///
    /// `height` is clamped to the screen height. Returns the number of handlers invoked.
    pub fn show(&mut self, height: f64, duration: f64) -> usize {
        let height = height.max(0.0).min(self.screen.size.height.max(0.0));
        let begin = self.frame.unwrap_or_else(|| self.offscreen_frame(height));
        let end = Rect::new(
            self.screen.min_x(),
            self.screen.max_y() - height,
            self.screen.size.width,
            height,
        );
        self.frame = Some(end);
        ktrace!(height, "PanelDriver::show");
        self.post_pair(PanelSignal::WillShow, PanelSignal::DidShow, begin, end, duration)
    }

    /// Hides the panel. Returns the number of handlers invoked.
    pub fn hide(&mut self, duration: f64) -> usize {
        let height = self.frame.map_or(0.0, |f| f.size.height);
        let begin = self.frame.unwrap_or_else(|| self.offscreen_frame(height));
        let end = self.offscreen_frame(height);
        self.frame = None;
        ktrace!("PanelDriver::hide");
        self.post_pair(PanelSignal::WillHide, PanelSignal::DidHide, begin, end, duration)
    }

    fn offscreen_frame(&self, height: f64) -> Rect {
        Rect::new(
            self.screen.min_x(),
            self.screen.max_y(),
            self.screen.size.width,
            height,
        )
    }

    fn post_pair(
        &self,
        will: PanelSignal,
        did: PanelSignal,
        begin: Rect,
        end: Rect,
        duration: f64,
    ) -> usize {
        let event = |signal| {
            InputPanelEvent::new(signal)
                .with_begin_frame(begin)
                .with_end_frame(end)
                .with_animation_duration(duration.max(0.0))
                .with_is_local(true)
        };
        self.bus.post(&event(will)) + self.bus.post(&event(did))
    }
}
