use crate::EdgeInsets;

/// A lightweight, serializable snapshot of an adjuster and the insets it manages.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjusterState {
    pub default_insets: EdgeInsets,
    pub content_insets: EdgeInsets,
    pub indicator_insets: EdgeInsets,
    /// Overlap computed by the most recent "shown" signal. Cleared when the panel hides.
    pub last_overlap: Option<f64>,
    pub panel_visible: bool,
}
