use tracing::debug;

use crate::core::{
    Axis, AxisBounds, AxisTick, DataPoint, PlotPoint, PlotRect, PlotTransform, ScreenPoint,
    Viewport, ViewportState, project_axis_ticks, project_points,
};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{GestureInterpreter, ViewportController};
use crate::render::{RenderFrame, Renderer};

use super::decimation::{AxisDecimation, decimation_multiplier};
use super::label_metrics::{EstimatedLabelMetrics, LabelMetrics};
use super::plot_layout::PlotLayout;
use super::render_frame_builder::RenderPass;
use super::{LoadTicket, PlotEngineConfig, PlotStyle};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the point set, the derived layout, the viewport
/// controller and the gesture interpreter, and hands finished frames to its
/// renderer. All methods are synchronous and expected to run on the UI thread.
pub struct PlotEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotEngineConfig,
    pub(super) metrics: Box<dyn LabelMetrics>,
    pub(super) points: Vec<DataPoint>,
    pub(super) bounds: Option<AxisBounds>,
    pub(super) layout: PlotLayout,
    pub(super) viewport: ViewportController,
    pub(super) gestures: GestureInterpreter,
    pub(super) decimation: AxisDecimation,
    pub(super) latest_load: Option<LoadTicket>,
    pub(super) next_load_generation: u64,
    graph_buffer: Vec<PlotPoint>,
    x_tick_buffer: Vec<AxisTick>,
    y_tick_buffer: Vec<AxisTick>,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotEngineConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self {
            renderer,
            config,
            metrics: Box::new(EstimatedLabelMetrics),
            points: Vec::new(),
            bounds: None,
            layout: PlotLayout::empty(),
            viewport: ViewportController::new(config.zoom),
            gestures: GestureInterpreter::new(config.interaction),
            decimation: AxisDecimation::default(),
            latest_load: None,
            next_load_generation: 0,
            graph_buffer: Vec::new(),
            x_tick_buffer: Vec::new(),
            y_tick_buffer: Vec::new(),
        })
    }

    /// Replaces the text measurement used for margins and decimation.
    pub fn set_label_metrics(&mut self, metrics: Box<dyn LabelMetrics>) -> PlotResult<()> {
        self.metrics = metrics;
        self.relayout()
    }

    #[must_use]
    pub fn config(&self) -> PlotEngineConfig {
        self.config
    }

    #[must_use]
    pub fn style(&self) -> PlotStyle {
        self.config.style
    }

    /// Label font size feeds the margins, so this triggers a full relayout.
    pub fn set_style(&mut self, style: PlotStyle) -> PlotResult<()> {
        style.validate()?;
        self.config.style = style;
        self.relayout()
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn axis_bounds(&self) -> Option<AxisBounds> {
        self.bounds
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn plot_rect(&self) -> PlotRect {
        self.layout.rect
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn viewport_state(&self) -> ViewportState {
        self.viewport.state()
    }

    #[must_use]
    pub fn viewport_controller(&self) -> &ViewportController {
        &self.viewport
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.viewport.max_scale()
    }

    #[must_use]
    pub fn decimation(&self) -> AxisDecimation {
        self.decimation
    }

    #[must_use]
    pub fn transform(&self) -> PlotTransform {
        PlotTransform::new(
            self.layout.rect,
            self.layout.x_axis,
            self.layout.y_axis,
            self.viewport.state(),
        )
    }

    #[must_use]
    pub fn map_data_to_screen(&self, point: DataPoint) -> ScreenPoint {
        self.transform().to_screen(point)
    }

    #[must_use]
    pub fn map_screen_to_data(&self, point: ScreenPoint) -> Option<(f64, f64)> {
        self.transform().screen_to_data(point)
    }

    /// Graph points projected with the current transform.
    #[must_use]
    pub fn plot_points(&self) -> Vec<PlotPoint> {
        let mut out = Vec::with_capacity(self.points.len());
        project_points(&self.points, &self.transform(), &mut out);
        out
    }

    /// One projected tick per integer between the bounds of `axis`.
    #[must_use]
    pub fn axis_ticks(&self, axis: Axis) -> Vec<AxisTick> {
        let mut out = Vec::new();
        project_axis_ticks(axis, &self.transform(), &mut out);
        out
    }

    /// Projects the current state and builds the ordered draw list.
    ///
    /// Projection buffers are reused across frames and rebuilt from scratch
    /// on every call, so the frame never reflects a stale transform.
    pub fn build_render_frame(&mut self) -> RenderFrame {
        let transform = self.transform();
        project_points(&self.points, &transform, &mut self.graph_buffer);
        project_axis_ticks(Axis::X, &transform, &mut self.x_tick_buffer);
        project_axis_ticks(Axis::Y, &transform, &mut self.y_tick_buffer);

        RenderPass {
            viewport: self.config.viewport,
            transform,
            graph: &self.graph_buffer,
            x_ticks: &self.x_tick_buffer,
            y_ticks: &self.y_tick_buffer,
            decimation: self.decimation,
            label_height_px: self.layout.label_height_px,
            layout: self.config.layout,
            style: self.config.style,
        }
        .build()
    }

    pub fn render(&mut self) -> PlotResult<()> {
        if !self.config.viewport.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.config.viewport.width,
                height: self.config.viewport.height,
            });
        }
        let frame = self.build_render_frame();
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    ///
    /// This path is used by toolkit draw callbacks while keeping the renderer
    /// implementation decoupled from toolkit-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame();
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Recomputes layout for the current bounds and viewport size.
    pub(super) fn relayout(&mut self) -> PlotResult<()> {
        let layout = self.compute_layout(self.config.viewport, self.bounds)?;
        self.apply_layout(layout);
        Ok(())
    }

    pub(super) fn compute_layout(
        &self,
        viewport: Viewport,
        bounds: Option<AxisBounds>,
    ) -> PlotResult<PlotLayout> {
        PlotLayout::compute(
            viewport,
            bounds,
            self.config.layout,
            self.config.style,
            self.metrics.as_ref(),
        )
    }

    /// Installs `layout`, resets the viewport and drops gesture tracking.
    pub(super) fn apply_layout(&mut self, layout: PlotLayout) {
        self.layout = layout;
        self.viewport.reset_for_new_bounds(
            layout.rect,
            layout.x_axis.step_px,
            layout.y_axis.step_px,
            self.config.max_grid_step_px,
        );
        self.gestures.reset();
        self.refresh_decimation();
        debug!(
            left = layout.rect.left,
            top = layout.rect.top,
            right = layout.rect.right,
            bottom = layout.rect.bottom,
            x_ticks = layout.x_axis.tick_count,
            y_ticks = layout.y_axis.tick_count,
            max_scale = self.viewport.max_scale(),
            decimation_x = self.decimation.x,
            decimation_y = self.decimation.y,
            "plot relayout"
        );
    }

    pub(super) fn refresh_decimation(&mut self) {
        let scale = self.viewport.scale();
        let margin = self.config.label_overlap_margin;
        self.decimation = AxisDecimation {
            x: decimation_multiplier(
                self.layout.x_axis.step_px,
                scale,
                self.layout.x_label_width_px,
                margin,
            ),
            y: decimation_multiplier(
                self.layout.y_axis.step_px,
                scale,
                self.layout.y_label_height_px,
                margin,
            ),
        };
    }
}
