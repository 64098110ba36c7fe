//! A headless controller that keeps a scrollable region clear of an on-screen keyboard.
//!
//! For reference host views, scroll views and panel drivers, see the `keyboard-insets-adapter`
//! crate.
//!
//! When the input panel appears, the region's bottom content inset grows by the distance the
//! region reaches below the panel's top edge (plus an optional clearance). When the panel hides,
//! the insets go back to their defaults.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - a [`HostView`] that maps the region's frame to screen coordinates
//! - a [`ScrollableRegion`] whose insets can be read and written
//! - a [`SignalSource`] that delivers panel lifecycle signals (or use [`NotificationBus`])
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adjuster;
mod bus;
mod event;
mod host;
mod options;
mod state;
mod types;


pub use adjuster::{InsetAdjuster, adjusted_insets, bottom_overlap};
pub use bus::{NotificationBus, PanelHandler, SignalSource, SubscriptionToken};
pub use event::{
    ANIMATION_DURATION_KEY, FRAME_BEGIN_KEY, FRAME_END_KEY, IS_LOCAL_KEY, InfoValue,
    InputPanelEvent, PanelSignal, UserInfo,
};
pub use host::{HostView, ScrollableRegion};
pub use options::AdjusterOptions;
pub use state::AdjusterState;
pub use types::{EdgeInsets, Point, Rect, Size};
