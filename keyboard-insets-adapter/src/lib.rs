//! Adapter utilities for the `keyboard-insets` crate.
//!
//! The `keyboard-insets` crate only defines the seams (`HostView`, `ScrollableRegion`,
//! `SignalSource`) and the inset logic. This crate provides small, framework-neutral pieces
//! that plug into them:
//!
//! - `ViewNode`: an in-memory view hierarchy with coordinate conversion
//! - `ScrollView`: a scroll view model, including "reveal the focused field" scrolling
//! - `PanelDriver`: posts realistic keyboard show/hide signal sequences
//!
//! This crate is intentionally framework-agnostic (no platform bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod panel;
mod scroll_view;
mod view_tree;

#[cfg(test)]
mod tests;

pub use panel::PanelDriver;
pub use scroll_view::ScrollView;
pub use view_tree::ViewNode;
