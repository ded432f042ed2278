use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Fixed draw parameters for one plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotStyle {
    pub grid_line_color: Color,
    pub grid_line_width: f64,
    pub series_line_color: Color,
    pub series_line_width: f64,
    /// Edge length of the marker drawn when the series has a single point.
    pub point_marker_size_px: f64,
    pub border_color: Color,
    pub border_width: f64,
    pub tick_mark_color: Color,
    pub tick_mark_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            grid_line_color: Color::rgb(0.88, 0.89, 0.91),
            grid_line_width: 1.0,
            series_line_color: Color::rgb(0.16, 0.38, 1.0),
            series_line_width: 2.0,
            point_marker_size_px: 6.0,
            border_color: Color::rgb(0.35, 0.37, 0.40),
            border_width: 1.0,
            tick_mark_color: Color::rgb(0.35, 0.37, 0.40),
            tick_mark_width: 1.0,
            label_color: Color::rgb(0.10, 0.12, 0.15),
            label_font_size_px: 12.0,
        }
    }
}

impl PlotStyle {
    pub fn validate(self) -> PlotResult<()> {
        for color in [
            self.grid_line_color,
            self.series_line_color,
            self.border_color,
            self.tick_mark_color,
            self.label_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("grid_line_width", self.grid_line_width),
            ("series_line_width", self.series_line_width),
            ("point_marker_size_px", self.point_marker_size_px),
            ("border_width", self.border_width),
            ("tick_mark_width", self.tick_mark_width),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "style `{name}` must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}
