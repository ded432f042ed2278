use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{PlotRect, ScreenPoint, ViewportState};

/// Tuning for pinch/zoom step filtering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomBehavior {
    /// Factors below this value are treated as gesture glitches and dropped.
    pub min_step_factor: f64,
    /// Factors within this distance of `1.0` are treated as jitter and dropped.
    pub jitter_epsilon: f64,
}

impl Default for ZoomBehavior {
    fn default() -> Self {
        Self {
            min_step_factor: 0.25,
            jitter_epsilon: 1e-4,
        }
    }
}

/// Result of a zoom request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomOutcome {
    /// Scale and/or translation changed.
    Applied,
    /// Input was accepted but the clamped state did not move.
    Clamped,
    /// Factor too close to `1.0`; the caller may keep accumulating.
    Jitter,
    /// Non-finite input, or a factor below the minimal step.
    Rejected,
}

impl ZoomOutcome {
    #[must_use]
    pub fn changed(self) -> bool {
        self == Self::Applied
    }
}

/// Legal translation interval for each axis at the current scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslationBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Owns scale and translation and keeps them inside their legal ranges.
///
/// Content is laid out relative to the plot rectangle's left/bottom edges, so
/// the scaled content spans `[left + tx, left + width * scale + tx]`
/// horizontally and `[bottom - height * scale + ty, bottom + ty]` vertically.
/// Clamping keeps that span covering the whole plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportController {
    rect: PlotRect,
    state: ViewportState,
    max_scale: f64,
    zoom: ZoomBehavior,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(ZoomBehavior::default())
    }
}

impl ViewportController {
    #[must_use]
    pub fn new(zoom: ZoomBehavior) -> Self {
        Self {
            rect: PlotRect::default(),
            state: ViewportState::default(),
            max_scale: 1.0,
            zoom,
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    #[must_use]
    pub fn rect(&self) -> PlotRect {
        self.rect
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.zoom
    }

    pub fn set_zoom_behavior(&mut self, zoom: ZoomBehavior) {
        self.zoom = zoom;
    }

    /// Resets to scale 1 with no translation for a fresh layout.
    ///
    /// The zoom ceiling keeps neighbouring grid lines at most
    /// `max_grid_step_px` apart.
    pub fn reset_for_new_bounds(
        &mut self,
        rect: PlotRect,
        step_x: f64,
        step_y: f64,
        max_grid_step_px: f64,
    ) {
        self.rect = rect;
        self.state = ViewportState::default();

        let min_step = step_x.min(step_y);
        self.max_scale = if min_step.is_finite() && min_step > 0.0 {
            (max_grid_step_px / min_step).max(1.0)
        } else {
            1.0
        };
        debug!(
            step_x,
            step_y,
            max_scale = self.max_scale,
            "viewport reset for new bounds"
        );
    }

    /// Scales around `focal` so the content under it stays put.
    pub fn apply_zoom(&mut self, focal: ScreenPoint, raw_factor: f64) -> ZoomOutcome {
        if !raw_factor.is_finite() || raw_factor <= 0.0 || !focal.is_finite() {
            trace!(raw_factor, "zoom rejected: invalid input");
            return ZoomOutcome::Rejected;
        }
        if raw_factor < self.zoom.min_step_factor {
            trace!(
                raw_factor,
                min_step_factor = self.zoom.min_step_factor,
                "zoom rejected: factor below minimal step"
            );
            return ZoomOutcome::Rejected;
        }
        if (raw_factor - 1.0).abs() < self.zoom.jitter_epsilon {
            return ZoomOutcome::Jitter;
        }

        let before = self.state;
        let scale = before.scale;
        let next_scale = (scale * raw_factor).clamp(1.0, self.max_scale.max(1.0));
        if next_scale == scale {
            return ZoomOutcome::Clamped;
        }
        let ratio = next_scale / scale;

        let focal_x = focal.x - self.rect.left;
        let focal_y = focal.y - self.rect.bottom;
        self.state.scale = next_scale;
        self.state.translation_x = focal_x + (before.translation_x - focal_x) * ratio;
        self.state.translation_y = focal_y + (before.translation_y - focal_y) * ratio;
        self.clamp_translation();

        if self.state == before {
            return ZoomOutcome::Clamped;
        }
        trace!(
            scale = self.state.scale,
            translation_x = self.state.translation_x,
            translation_y = self.state.translation_y,
            "zoom applied"
        );
        ZoomOutcome::Applied
    }

    /// Translates by a screen delta; a no-op while not zoomed in.
    ///
    /// Returns `true` when translation changed.
    pub fn apply_pan(&mut self, delta_x: f64, delta_y: f64) -> bool {
        if self.state.scale <= 1.0 || !delta_x.is_finite() || !delta_y.is_finite() {
            return false;
        }

        let before = self.state;
        self.state.translation_x += delta_x;
        self.state.translation_y += delta_y;
        self.clamp_translation();

        let changed = self.state != before;
        if changed {
            trace!(
                translation_x = self.state.translation_x,
                translation_y = self.state.translation_y,
                "pan applied"
            );
        }
        changed
    }

    #[must_use]
    pub fn translation_bounds(&self) -> TranslationBounds {
        let overflow_x = self.rect.width() * (self.state.scale - 1.0);
        let overflow_y = self.rect.height() * (self.state.scale - 1.0);
        TranslationBounds {
            min_x: -overflow_x,
            max_x: 0.0,
            min_y: 0.0,
            max_y: overflow_y,
        }
    }

    pub fn clamp_translation(&mut self) {
        let bounds = self.translation_bounds();
        self.state.translation_x = self.state.translation_x.clamp(bounds.min_x, bounds.max_x);
        self.state.translation_y = self.state.translation_y.clamp(bounds.min_y, bounds.max_y);
    }
}
