use crate::EdgeInsets;

/// Configuration for [`crate::InsetAdjuster`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize` so hosts can keep it
/// in their own configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AdjusterOptions {
    /// Minimum vertical gap kept between the region's bottom edge and the panel's top edge.
    pub minimum_clearance: f64,
    /// Baseline insets. When `None`, the region's insets at construction time are used.
    pub default_insets: Option<EdgeInsets>,
}

impl AdjusterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimum_clearance(mut self, minimum_clearance: f64) -> Self {
        self.minimum_clearance = minimum_clearance;
        self
    }

    pub fn with_default_insets(mut self, default_insets: Option<EdgeInsets>) -> Self {
        self.default_insets = default_insets;
        self
    }

    /// Negative or non-finite clearance becomes 0, non-finite inset components become 0.
    pub(crate) fn sanitized(self) -> Self {
        let minimum_clearance = if self.minimum_clearance.is_finite() && self.minimum_clearance >= 0.0
        {
            self.minimum_clearance
        } else {
            kwarn!(
                minimum_clearance = self.minimum_clearance,
                "AdjusterOptions: clearance must be a finite value >= 0, using 0"
            );
            0.0
        };

        let default_insets = self.default_insets.map(|insets| {
            if !insets.is_finite() {
                kwarn!(?insets, "AdjusterOptions: non-finite default insets, zeroing");
            }
            insets.finite_or_zero()
        });

        Self {
            minimum_clearance,
            default_insets,
        }
    }
}
