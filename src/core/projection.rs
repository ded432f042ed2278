use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Axis, DataPoint, PlotRect, PlotTransform, ScreenPoint};

/// A graph point annotated with its screen position for one transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub value: DataPoint,
    pub screen: ScreenPoint,
    pub visible: bool,
}

impl PlotPoint {
    #[must_use]
    pub fn project(value: DataPoint, transform: &PlotTransform) -> Self {
        let screen = transform.to_screen(value);
        Self {
            value,
            screen,
            visible: transform.is_visible(screen),
        }
    }
}

/// One integer tick of an axis, projected onto that axis.
///
/// `visible` only considers the axis direction: an X tick is visible when its
/// screen X lies within the plot rectangle's horizontal extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub index: usize,
    pub value: i64,
    pub position_px: f64,
    pub visible: bool,
}

/// Rebuilds `out` with one projected point per graph point.
pub fn project_points(points: &[DataPoint], transform: &PlotTransform, out: &mut Vec<PlotPoint>) {
    out.clear();
    #[cfg(feature = "parallel-projection")]
    {
        out.par_extend(
            points
                .par_iter()
                .map(|point| PlotPoint::project(*point, transform)),
        );
    }
    #[cfg(not(feature = "parallel-projection"))]
    {
        out.extend(
            points
                .iter()
                .map(|point| PlotPoint::project(*point, transform)),
        );
    }
}

/// Rebuilds `out` with one tick per integer between the axis bounds.
pub fn project_axis_ticks(axis: Axis, transform: &PlotTransform, out: &mut Vec<AxisTick>) {
    out.clear();
    let layout = match axis {
        Axis::X => transform.x_axis,
        Axis::Y => transform.y_axis,
    };
    out.reserve(layout.tick_count);
    for index in 0..layout.tick_count {
        let value = layout.tick_value(index);
        let (position_px, visible) = match axis {
            Axis::X => {
                let x = transform.x_to_screen(value as f64);
                (x, transform.rect.contains_x(x))
            }
            Axis::Y => {
                let y = transform.y_to_screen(value as f64);
                (y, transform.rect.contains_y(y))
            }
        };
        out.push(AxisTick {
            index,
            value,
            position_px,
            visible,
        });
    }
}

/// Clips a segment to `rect` (Liang-Barsky).
///
/// Returns `None` when no part of the segment lies inside the rectangle.
#[must_use]
pub fn clip_segment(
    rect: PlotRect,
    a: ScreenPoint,
    b: ScreenPoint,
) -> Option<(ScreenPoint, ScreenPoint)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, a.x - rect.left),
        (dx, rect.right - a.x),
        (-dy, a.y - rect.top),
        (dy, rect.bottom - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((
        ScreenPoint::new(a.x + t0 * dx, a.y + t0 * dy),
        ScreenPoint::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}
