use serde::{Deserialize, Serialize};

use crate::core::{Axis, DataPoint};
use crate::error::{PlotError, PlotResult};

/// Component-wise minimum and maximum of a point set.
///
/// `min.x` and `min.y` may come from different source points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub min: DataPoint,
    pub max: DataPoint,
}

impl AxisBounds {
    /// Returns `None` for an empty point set.
    #[must_use]
    pub fn from_points(points: &[DataPoint]) -> Option<Self> {
        let first = *points.first()?;
        let bounds = points.iter().skip(1).fold(
            Self {
                min: first,
                max: first,
            },
            |acc, point| Self {
                min: DataPoint::new(acc.min.x.min(point.x), acc.min.y.min(point.y)),
                max: DataPoint::new(acc.max.x.max(point.x), acc.max.y.max(point.y)),
            },
        );
        Some(bounds)
    }

    #[must_use]
    pub fn contains(self, point: DataPoint) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    #[must_use]
    pub fn range(self, axis: Axis) -> (i64, i64) {
        match axis {
            Axis::X => (self.min.x, self.max.x),
            Axis::Y => (self.min.y, self.max.y),
        }
    }

    /// Number of integer ticks between min and max, inclusive.
    ///
    /// Computed in `i128` so spans across the full `i64` range do not overflow.
    #[must_use]
    pub fn tick_count(self, axis: Axis) -> u128 {
        let (min, max) = self.range(axis);
        (i128::from(max) - i128::from(min) + 1) as u128
    }
}

/// Integer tick layout of one axis inside the plot rectangle.
///
/// `step_px` is the unscaled distance between neighbouring ticks. When an axis
/// has a single distinct value the segment count clamps to one and `origin`
/// moves half a segment back so the lone tick lands in the middle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub min: i64,
    pub tick_count: usize,
    pub step_px: f64,
    pub origin: f64,
}

impl AxisLayout {
    pub fn new(axis: Axis, min: i64, max: i64, length_px: f64, max_ticks: usize) -> PlotResult<Self> {
        let span = i128::from(max) - i128::from(min);
        if span < 0 {
            return Err(PlotError::InvalidData(format!(
                "{axis} axis max must be >= min"
            )));
        }
        let count = span + 1;
        if count > max_ticks as i128 {
            return Err(PlotError::AxisSpanTooLarge {
                axis,
                span: count as u128,
                limit: max_ticks,
            });
        }
        let tick_count = count as usize;
        let segment_count = (tick_count - 1).max(1);
        let step_px = length_px.max(0.0) / segment_count as f64;
        let origin = if tick_count == 1 {
            min as f64 - 0.5
        } else {
            min as f64
        };

        Ok(Self {
            min,
            tick_count,
            step_px,
            origin,
        })
    }

    /// Layout used when there are no points: no ticks, zero step.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            min: 0,
            tick_count: 0,
            step_px: 0.0,
            origin: 0.0,
        }
    }

    #[must_use]
    pub fn segment_count(self) -> usize {
        self.tick_count.saturating_sub(1).max(1)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.tick_count == 1
    }

    /// Integer value of the tick at `index`.
    #[must_use]
    pub fn tick_value(self, index: usize) -> i64 {
        self.min + index as i64
    }

    pub fn tick_values(self) -> impl Iterator<Item = i64> {
        (0..self.tick_count).map(move |index| self.tick_value(index))
    }
}
