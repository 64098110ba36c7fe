use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::{
    AdjusterOptions, AdjusterState, EdgeInsets, HostView, InputPanelEvent, NotificationBus,
    PanelSignal, Rect, ScrollableRegion, SignalSource, SubscriptionToken,
};

/// Vertical distance by which `region_frame` reaches below the top of `panel_frame`, plus the
/// requested clearance. Both rects must be in the same (screen) coordinate space.
pub fn bottom_overlap(region_frame: Rect, panel_frame: Rect, minimum_clearance: f64) -> f64 {
    region_frame.max_y() - panel_frame.min_y() + minimum_clearance
}

/// Insets to apply for a given overlap, or `None` when nothing should change.
pub fn adjusted_insets(default_insets: EdgeInsets, overlap: f64) -> Option<EdgeInsets> {
    (overlap > 0.0).then(|| default_insets.with_bottom(default_insets.bottom + overlap))
}

struct Core<H: ?Sized, R> {
    host: Weak<H>,
    region: Rc<RefCell<R>>,
    default_insets: EdgeInsets,
    minimum_clearance: f64,
    last_overlap: Cell<Option<f64>>,
    panel_visible: Cell<bool>,
}

impl<H: HostView + ?Sized, R: ScrollableRegion> Core<H, R> {
    fn panel_did_show(&self, event: &InputPanelEvent) {
        let Some(panel_frame) = event.end_frame() else {
            ktrace!("InsetAdjuster: shown without an end frame, ignoring");
            return;
        };
        let Some(host) = self.host.upgrade() else {
            ktrace!("InsetAdjuster: host view is gone, ignoring shown");
            return;
        };
        let Ok(mut region) = self.region.try_borrow_mut() else {
            kwarn!("InsetAdjuster: region is borrowed elsewhere, ignoring shown");
            return;
        };

        let region_frame = host.convert_to_screen(region.frame());
        let overlap = bottom_overlap(region_frame, panel_frame, self.minimum_clearance);
        if !overlap.is_finite() {
            ktrace!(overlap, "InsetAdjuster: non-finite geometry, ignoring shown");
            return;
        }
        self.panel_visible.set(true);
        self.last_overlap.set(Some(overlap));

        // Non-positive overlap leaves whatever is applied, even a larger previous adjustment.
        let Some(insets) = adjusted_insets(self.default_insets, overlap) else {
            ktrace!(overlap, "InsetAdjuster: no overlap");
            return;
        };
        ktrace!(overlap, bottom = insets.bottom, "InsetAdjuster: applying insets");
        region.set_content_insets(insets);
        region.set_indicator_insets(insets);
    }

    fn panel_will_hide(&self) {
        let Ok(mut region) = self.region.try_borrow_mut() else {
            kwarn!("InsetAdjuster: region is borrowed elsewhere, ignoring hidden");
            return;
        };
        ktrace!("InsetAdjuster: restoring default insets");
        region.set_content_insets(self.default_insets);
        region.set_indicator_insets(self.default_insets);
        self.panel_visible.set(false);
        self.last_overlap.set(None);
    }
}

/// Keeps a scrollable region clear of the input panel by adjusting its bottom inset.
///
/// The adjuster listens to [`PanelSignal::DidShow`] and [`PanelSignal::WillHide`] on a
/// [`SignalSource`]:
/// - on "shown", the bottom inset becomes `default.bottom + overlap` when the region reaches
///   below the panel (plus the configured clearance);
/// - on "hidden", content and indicator insets go back to the defaults.
///
/// The host view is held weakly and the subscriptions are removed when the adjuster is stopped
/// or dropped.
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use keyboard_insets::*;
///
/// struct Screen;
/// impl HostView for Screen {
///     fn convert_to_screen(&self, rect: Rect) -> Rect {
///         rect
///     }
/// }
///
/// #[derive(Default)]
/// struct List {
///     insets: EdgeInsets,
///     indicators: EdgeInsets,
/// }
/// impl ScrollableRegion for List {
///     fn frame(&self) -> Rect {
///         Rect::new(0.0, 0.0, 320.0, 500.0)
///     }
///     fn content_insets(&self) -> EdgeInsets {
///         self.insets
///     }
///     fn set_content_insets(&mut self, insets: EdgeInsets) {
///         self.insets = insets;
///     }
///     fn indicator_insets(&self) -> EdgeInsets {
///         self.indicators
///     }
///     fn set_indicator_insets(&mut self, insets: EdgeInsets) {
///         self.indicators = insets;
///     }
/// }
///
/// let bus = NotificationBus::new();
/// let host = Rc::new(Screen);
/// let list = Rc::new(RefCell::new(List::default()));
/// let _adjuster = InsetAdjuster::new(
///     bus.clone(),
///     &host,
///     Rc::clone(&list),
///     AdjusterOptions::new().with_minimum_clearance(8.0),
/// )
/// .start();
///
/// bus.post(&InputPanelEvent::new(PanelSignal::DidShow).with_end_frame(Rect::new(0.0, 450.0, 320.0, 250.0)));
/// assert_eq!(list.borrow().insets.bottom, 58.0);
/// ```
pub struct InsetAdjuster<H: ?Sized, R, B: SignalSource = NotificationBus> {
    core: Rc<Core<H, R>>,
    bus: B,
    tokens: Vec<SubscriptionToken>,
}

impl<H, R, B> InsetAdjuster<H, R, B>
where
    H: HostView + ?Sized + 'static,
    R: ScrollableRegion + 'static,
    B: SignalSource,
{
    /// Creates an adjuster. No subscriptions are made until [`Self::start`].
    ///
    /// If `options.default_insets` is `None`, the region's current content insets are captured.
    ///
    /// # Panics
    ///
    /// Panics if `region` is mutably borrowed while the defaults are captured.
    pub fn new(
        bus: B,
        host: &Rc<H>,
        region: Rc<RefCell<R>>,
        options: AdjusterOptions,
    ) -> Self {
        let options = options.sanitized();
        let default_insets = match options.default_insets {
            Some(insets) => insets,
            None => region.borrow().content_insets(),
        };
        kdebug!(
            minimum_clearance = options.minimum_clearance,
            ?default_insets,
            "InsetAdjuster::new"
        );
        Self {
            core: Rc::new(Core {
                host: Rc::downgrade(host),
                region,
                default_insets,
                minimum_clearance: options.minimum_clearance,
                last_overlap: Cell::new(None),
                panel_visible: Cell::new(false),
            }),
            bus,
            tokens: Vec::new(),
        }
    }

    /// Subscribes to the panel signals and returns `self` for chaining.
    pub fn start(mut self) -> Self {
        self.start_mut();
        self
    }

    /// In-place form of [`Self::start`]. Starting an active adjuster is a no-op.
    pub fn start_mut(&mut self) -> &mut Self {
        if self.is_active() {
            ktrace!("InsetAdjuster: already started");
            return self;
        }

        let core = Rc::downgrade(&self.core);
        let shown = self.bus.subscribe(
            PanelSignal::DidShow,
            Box::new(move |event: &InputPanelEvent| {
                if let Some(core) = core.upgrade() {
                    core.panel_did_show(event);
                }
            }),
        );

        let core = Rc::downgrade(&self.core);
        let hidden = self.bus.subscribe(
            PanelSignal::WillHide,
            Box::new(move |_: &InputPanelEvent| {
                if let Some(core) = core.upgrade() {
                    core.panel_will_hide();
                }
            }),
        );

        self.tokens.push(shown);
        self.tokens.push(hidden);
        kdebug!(tokens = self.tokens.len(), "InsetAdjuster::start");
        self
    }
}

impl<H, R, B> InsetAdjuster<H, R, B>
where
    H: ?Sized,
    R: ScrollableRegion,
    B: SignalSource,
{
    pub fn default_insets(&self) -> EdgeInsets {
        self.core.default_insets
    }

    pub fn minimum_clearance(&self) -> f64 {
        self.core.minimum_clearance
    }

    pub fn region(&self) -> &Rc<RefCell<R>> {
        &self.core.region
    }

    /// The host view, if it is still alive.
    pub fn host(&self) -> Option<Rc<H>> {
        self.core.host.upgrade()
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// # Panics
    ///
    /// Panics if the region is mutably borrowed.
    pub fn state(&self) -> AdjusterState {
        let region = self.core.region.borrow();
        AdjusterState {
            default_insets: self.core.default_insets,
            content_insets: region.content_insets(),
            indicator_insets: region.indicator_insets(),
            last_overlap: self.core.last_overlap.get(),
            panel_visible: self.core.panel_visible.get(),
        }
    }
}

impl<H: ?Sized, R, B: SignalSource> InsetAdjuster<H, R, B> {
    pub fn is_active(&self) -> bool {
        !self.tokens.is_empty()
    }

    pub fn subscription_count(&self) -> usize {
        self.tokens.len()
    }

    /// Removes every subscription made by [`Self::start`]. Safe to call at any time.
    pub fn stop(&mut self) {
        if self.tokens.is_empty() {
            return;
        }
        for token in self.tokens.drain(..) {
            let removed = self.bus.unsubscribe(token);
            if !removed {
                kwarn!(?token, "InsetAdjuster: subscription was already removed");
            }
        }
        kdebug!("InsetAdjuster::stop");
    }
}

impl<H: ?Sized, R, B: SignalSource> Drop for InsetAdjuster<H, R, B> {
    fn drop(&mut self) {
        self.stop();
    }
}

impl<H: ?Sized, R, B: SignalSource> fmt::Debug for InsetAdjuster<H, R, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsetAdjuster")
            .field("default_insets", &self.core.default_insets)
            .field("minimum_clearance", &self.core.minimum_clearance)
            .field("host_alive", &(self.core.host.strong_count() > 0))
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}
