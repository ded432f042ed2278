use serde::{Deserialize, Serialize};

use crate::core::{AxisLayout, DataPoint, PlotRect, ScreenPoint};

/// Scale and translation applied on top of the unscaled grid layout.
///
/// Translation is a screen-space offset measured from the plot rectangle's
/// left edge (X) and bottom edge (Y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportState {
    pub scale: f64,
    pub translation_x: f64,
    pub translation_y: f64,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

/// Data-space to screen-space mapping for the current layout and viewport.
///
/// ```text
/// screen_x = left   + (x - x_origin) * step_x * scale + translation_x
/// screen_y = bottom - (y - y_origin) * step_y * scale + translation_y
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotTransform {
    pub rect: PlotRect,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    pub state: ViewportState,
}

impl PlotTransform {
    #[must_use]
    pub fn new(
        rect: PlotRect,
        x_axis: AxisLayout,
        y_axis: AxisLayout,
        state: ViewportState,
    ) -> Self {
        Self {
            rect,
            x_axis,
            y_axis,
            state,
        }
    }

    #[must_use]
    pub fn x_to_screen(&self, x: f64) -> f64 {
        self.rect.left
            + (x - self.x_axis.origin) * self.x_axis.step_px * self.state.scale
            + self.state.translation_x
    }

    #[must_use]
    pub fn y_to_screen(&self, y: f64) -> f64 {
        self.rect.bottom - (y - self.y_axis.origin) * self.y_axis.step_px * self.state.scale
            + self.state.translation_y
    }

    #[must_use]
    pub fn to_screen(&self, point: DataPoint) -> ScreenPoint {
        ScreenPoint::new(
            self.x_to_screen(point.x as f64),
            self.y_to_screen(point.y as f64),
        )
    }

    /// Inverse of [`Self::to_screen`], returning fractional data coordinates.
    ///
    /// Returns `None` while an axis has no pixel extent (empty layout or
    /// zero-size plot rectangle).
    #[must_use]
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<(f64, f64)> {
        let x_unit = self.x_axis.step_px * self.state.scale;
        let y_unit = self.y_axis.step_px * self.state.scale;
        if x_unit <= 0.0 || y_unit <= 0.0 {
            return None;
        }

        let x = self.x_axis.origin + (point.x - self.rect.left - self.state.translation_x) / x_unit;
        let y =
            self.y_axis.origin + (self.rect.bottom + self.state.translation_y - point.y) / y_unit;
        Some((x, y))
    }

    /// Nearest data point to a screen position, rounding to whole ticks.
    #[must_use]
    pub fn screen_to_nearest_tick(&self, point: ScreenPoint) -> Option<DataPoint> {
        let (x, y) = self.screen_to_data(point)?;
        Some(DataPoint::new(x.round() as i64, y.round() as i64))
    }

    /// Screen rectangle currently covered by the scaled content.
    ///
    /// For a degenerate axis the content still spans the full plot extent.
    #[must_use]
    pub fn content_rect(&self) -> PlotRect {
        let width = self.rect.width() * self.state.scale;
        let height = self.rect.height() * self.state.scale;
        let left = self.rect.left + self.state.translation_x;
        let bottom = self.rect.bottom + self.state.translation_y;
        PlotRect::new(left, bottom - height, left + width, bottom)
    }

    #[must_use]
    pub fn is_visible(&self, point: ScreenPoint) -> bool {
        self.rect.contains(point)
    }
}
