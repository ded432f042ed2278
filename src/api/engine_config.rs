use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{PlotError, PlotResult};
use crate::interaction::{InteractionInputBehavior, ZoomBehavior};

use super::PlotStyle;

/// Margins and limits for the axis frame around the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutBehavior {
    /// Outer padding between the viewport edge and labels.
    pub padding_px: f64,
    pub tick_length_px: f64,
    /// Gap between a tick mark and its label.
    pub label_gap_px: f64,
    /// Largest accepted tick count per axis.
    pub max_axis_ticks: usize,
}

impl Default for LayoutBehavior {
    fn default() -> Self {
        Self {
            padding_px: 8.0,
            tick_length_px: 5.0,
            label_gap_px: 3.0,
            max_axis_ticks: 100_000,
        }
    }
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load plot setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub layout: LayoutBehavior,
    /// Zoom ceiling: grid lines never spread further apart than this.
    #[serde(default = "default_max_grid_step_px")]
    pub max_grid_step_px: f64,
    /// Breathing room applied to label extents before decimating.
    #[serde(default = "default_label_overlap_margin")]
    pub label_overlap_margin: f64,
    #[serde(default)]
    pub zoom: ZoomBehavior,
    #[serde(default)]
    pub interaction: InteractionInputBehavior,
    #[serde(default)]
    pub style: PlotStyle,
}

impl PlotEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layout: LayoutBehavior::default(),
            max_grid_step_px: default_max_grid_step_px(),
            label_overlap_margin: default_label_overlap_margin(),
            zoom: ZoomBehavior::default(),
            interaction: InteractionInputBehavior::default(),
            style: PlotStyle::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LayoutBehavior) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_max_grid_step_px(mut self, max_grid_step_px: f64) -> Self {
        self.max_grid_step_px = max_grid_step_px;
        self
    }

    #[must_use]
    pub fn with_label_overlap_margin(mut self, label_overlap_margin: f64) -> Self {
        self.label_overlap_margin = label_overlap_margin;
        self
    }

    #[must_use]
    pub fn with_zoom_behavior(mut self, zoom: ZoomBehavior) -> Self {
        self.zoom = zoom;
        self
    }

    #[must_use]
    pub fn with_interaction_behavior(mut self, interaction: InteractionInputBehavior) -> Self {
        self.interaction = interaction;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| PlotError::InvalidConfig(format!("failed to parse config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| PlotError::InvalidConfig(format!("failed to serialize config: {err}")))
    }

    /// Checks every numeric knob. A zero-size viewport is allowed: hosts often
    /// construct the engine before their first layout pass.
    pub fn validate(&self) -> PlotResult<()> {
        for (name, value) in [
            ("layout.padding_px", self.layout.padding_px),
            ("layout.tick_length_px", self.layout.tick_length_px),
            ("layout.label_gap_px", self.layout.label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if self.layout.max_axis_ticks == 0 {
            return Err(PlotError::InvalidConfig(
                "`layout.max_axis_ticks` must be > 0".to_owned(),
            ));
        }
        if !self.max_grid_step_px.is_finite() || self.max_grid_step_px <= 0.0 {
            return Err(PlotError::InvalidConfig(
                "`max_grid_step_px` must be finite and > 0".to_owned(),
            ));
        }
        if !self.label_overlap_margin.is_finite() || self.label_overlap_margin < 1.0 {
            return Err(PlotError::InvalidConfig(
                "`label_overlap_margin` must be finite and >= 1".to_owned(),
            ));
        }
        if !self.zoom.min_step_factor.is_finite()
            || self.zoom.min_step_factor <= 0.0
            || self.zoom.min_step_factor >= 1.0
        {
            return Err(PlotError::InvalidConfig(
                "`zoom.min_step_factor` must be in (0, 1)".to_owned(),
            ));
        }
        if !self.zoom.jitter_epsilon.is_finite() || self.zoom.jitter_epsilon < 0.0 {
            return Err(PlotError::InvalidConfig(
                "`zoom.jitter_epsilon` must be finite and >= 0".to_owned(),
            ));
        }
        self.style.validate()
    }
}

fn default_max_grid_step_px() -> f64 {
    200.0
}

fn default_label_overlap_margin() -> f64 {
    1.25
}
