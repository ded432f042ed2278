use tracing::{debug, trace};

use crate::core::{ScreenPoint, Viewport};
use crate::error::PlotResult;
use crate::interaction::{
    EventDisposition, GestureState, InteractionInputBehavior, PointerEvent, ZoomBehavior,
    ZoomOutcome,
};
use crate::render::Renderer;

use super::PlotEngine;

impl<R: Renderer> PlotEngine<R> {
    /// Size-change hook; the host calls this whenever the drawable area changes.
    ///
    /// Resizing always resets the viewport to scale 1.
    pub fn on_resize(&mut self, width: u32, height: u32) -> PlotResult<()> {
        let viewport = Viewport::new(width, height);
        let layout = self.compute_layout(viewport, self.bounds)?;
        self.config.viewport = viewport;
        self.apply_layout(layout);
        debug!(width, height, "plot resized");
        Ok(())
    }

    /// Feeds one raw pointer event through the gesture interpreter.
    ///
    /// Label decimation is refreshed after zoom changes; pans leave it alone.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> EventDisposition {
        let scale_before = self.viewport.scale();
        let disposition = self.gestures.handle(event, &mut self.viewport);
        if self.viewport.scale() != scale_before {
            self.refresh_decimation();
        }
        trace!(?event, ?disposition, "pointer event");
        disposition
    }

    /// Zooms around `focal` by `factor`, e.g. for wheel or keyboard input.
    pub fn zoom_at(&mut self, focal: ScreenPoint, factor: f64) -> ZoomOutcome {
        let outcome = self.viewport.apply_zoom(focal, factor);
        if outcome.changed() {
            self.refresh_decimation();
        }
        outcome
    }

    /// Pans by a screen delta; returns `false` when nothing moved.
    pub fn pan_by(&mut self, delta_x: f64, delta_y: f64) -> bool {
        self.viewport.apply_pan(delta_x, delta_y)
    }

    /// Returns to scale 1 without touching the data.
    pub fn reset_viewport(&mut self) {
        self.apply_layout(self.layout);
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.gestures.state()
    }

    #[must_use]
    pub fn interaction_input_behavior(&self) -> InteractionInputBehavior {
        self.config.interaction
    }

    pub fn set_interaction_input_behavior(&mut self, behavior: InteractionInputBehavior) {
        self.config.interaction = behavior;
        self.gestures.set_behavior(behavior);
    }

    #[must_use]
    pub fn zoom_behavior(&self) -> ZoomBehavior {
        self.config.zoom
    }

    pub fn set_zoom_behavior(&mut self, zoom: ZoomBehavior) -> PlotResult<()> {
        self.config.with_zoom_behavior(zoom).validate()?;
        self.config.zoom = zoom;
        self.viewport.set_zoom_behavior(zoom);
        Ok(())
    }
}
