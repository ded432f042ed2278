use serde::{Deserialize, Serialize};

/// Skip factors for grid lines, tick marks and labels on each axis.
///
/// Only ticks whose index is a multiple of the factor are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisDecimation {
    pub x: usize,
    pub y: usize,
}

impl Default for AxisDecimation {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

impl AxisDecimation {
    #[must_use]
    pub fn shows_x(self, index: usize) -> bool {
        index % self.x.max(1) == 0
    }

    #[must_use]
    pub fn shows_y(self, index: usize) -> bool {
        index % self.y.max(1) == 0
    }
}

/// Smallest `m >= 1` with `step_px * scale * m > label_extent_px * overlap_margin`.
///
/// Degenerate inputs (no pixel spacing, no label extent) yield `1`.
#[must_use]
pub fn decimation_multiplier(
    step_px: f64,
    scale: f64,
    label_extent_px: f64,
    overlap_margin: f64,
) -> usize {
    let spacing = step_px * scale;
    let required = label_extent_px * overlap_margin;
    if !spacing.is_finite() || spacing <= 0.0 || !required.is_finite() || required <= 0.0 {
        return 1;
    }

    let mut multiplier = ((required / spacing).floor() as usize).saturating_add(1);
    // Correct a single rounding step in either direction.
    if multiplier > 1 && spacing * (multiplier - 1) as f64 > required {
        multiplier -= 1;
    } else if spacing * multiplier as f64 <= required {
        multiplier = multiplier.saturating_add(1);
    }
    multiplier.max(1)
}
