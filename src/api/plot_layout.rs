use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisBounds, AxisLayout, PlotRect, Viewport};
use crate::error::PlotResult;

use super::label_metrics::{LabelMetrics, TextExtent, max_label_extent};
use super::{LayoutBehavior, PlotStyle};

/// Geometry derived from the viewport size and the current bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub rect: PlotRect,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    /// Widest X label; decimation compares its width against X spacing.
    pub x_label_width_px: f64,
    /// Y labels stack vertically, so their height drives Y decimation.
    pub y_label_height_px: f64,
    pub label_height_px: f64,
}

impl PlotLayout {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rect: PlotRect::default(),
            x_axis: AxisLayout::empty(),
            y_axis: AxisLayout::empty(),
            x_label_width_px: 0.0,
            y_label_height_px: 0.0,
            label_height_px: 0.0,
        }
    }

    /// Reserves label margins inside `viewport` and lays out both axes.
    pub(super) fn compute(
        viewport: Viewport,
        bounds: Option<AxisBounds>,
        behavior: LayoutBehavior,
        style: PlotStyle,
        metrics: &dyn LabelMetrics,
    ) -> PlotResult<Self> {
        let Some(bounds) = bounds else {
            return Ok(Self::empty());
        };

        // Span limits are checked before any label is measured.
        let limit = behavior.max_axis_ticks;
        AxisLayout::new(Axis::X, bounds.min.x, bounds.max.x, 0.0, limit)?;
        AxisLayout::new(Axis::Y, bounds.min.y, bounds.max.y, 0.0, limit)?;

        let font = style.label_font_size_px;
        let x_labels = max_label_extent(metrics, bounds.min.x..=bounds.max.x, font);
        let y_labels = max_label_extent(metrics, bounds.min.y..=bounds.max.y, font);
        let label_height = x_labels.height.max(y_labels.height);

        let rect = plot_rect(viewport, behavior, x_labels, y_labels, label_height);
        let x_axis = AxisLayout::new(Axis::X, bounds.min.x, bounds.max.x, rect.width(), limit)?;
        let y_axis = AxisLayout::new(Axis::Y, bounds.min.y, bounds.max.y, rect.height(), limit)?;

        Ok(Self {
            rect,
            x_axis,
            y_axis,
            x_label_width_px: x_labels.width,
            y_label_height_px: y_labels.height,
            label_height_px: label_height,
        })
    }
}

fn plot_rect(
    viewport: Viewport,
    behavior: LayoutBehavior,
    x_labels: TextExtent,
    y_labels: TextExtent,
    label_height: f64,
) -> PlotRect {
    let width = f64::from(viewport.width);
    let height = f64::from(viewport.height);
    let axis_reserve = behavior.tick_length_px + behavior.label_gap_px;

    let left = behavior.padding_px + y_labels.width + axis_reserve;
    let right = width - behavior.padding_px - x_labels.width * 0.5;
    let top = behavior.padding_px + label_height * 0.5;
    let bottom = height - behavior.padding_px - label_height - axis_reserve;

    // Too-small viewports collapse to an empty rect anchored at the margin.
    PlotRect::new(left, top, right.max(left), bottom.max(top))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EstimatedLabelMetrics;
    use crate::core::DataPoint;

    #[test]
    fn tiny_viewport_collapses_to_empty_rect() {
        let bounds = AxisBounds {
            min: DataPoint::new(0, 0),
            max: DataPoint::new(10, 10),
        };
        let layout = PlotLayout::compute(
            Viewport::new(20, 20),
            Some(bounds),
            LayoutBehavior::default(),
            PlotStyle::default(),
            &EstimatedLabelMetrics,
        )
        .expect("layout");
        assert!(layout.rect.is_empty());
        assert_eq!(layout.x_axis.step_px, 0.0);
    }
}
