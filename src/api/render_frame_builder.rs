use crate::core::{AxisTick, PlotPoint, PlotTransform, Viewport, clip_segment};
use crate::render::{
    CanvasLayerKind, LinePrimitive, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{AxisDecimation, LayoutBehavior, PlotStyle};

/// Inputs of one draw pass, already projected for the current transform.
pub(super) struct RenderPass<'a> {
    pub(super) viewport: Viewport,
    pub(super) transform: PlotTransform,
    pub(super) graph: &'a [PlotPoint],
    pub(super) x_ticks: &'a [AxisTick],
    pub(super) y_ticks: &'a [AxisTick],
    pub(super) decimation: AxisDecimation,
    pub(super) label_height_px: f64,
    pub(super) layout: LayoutBehavior,
    pub(super) style: PlotStyle,
}

impl RenderPass<'_> {
    /// Grid beneath graph beneath border beneath ticks and labels.
    ///
    /// An empty point set or a collapsed plot rectangle yields an empty frame.
    pub(super) fn build(&self) -> RenderFrame {
        let rect = self.transform.rect;
        let mut frame = RenderFrame::new(self.viewport, rect);
        if self.graph.is_empty() || rect.is_empty() {
            return frame;
        }

        self.push_grid(&mut frame);
        self.push_series(&mut frame);
        frame.push_rect(
            CanvasLayerKind::Border,
            RectPrimitive::new(
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                self.style.border_width,
                self.style.border_color,
            ),
        );
        self.push_axes(&mut frame);
        frame
    }

    fn visible_x_ticks(&self) -> impl Iterator<Item = &AxisTick> {
        self.x_ticks
            .iter()
            .filter(|tick| tick.visible && self.decimation.shows_x(tick.index))
    }

    fn visible_y_ticks(&self) -> impl Iterator<Item = &AxisTick> {
        self.y_ticks
            .iter()
            .filter(|tick| tick.visible && self.decimation.shows_y(tick.index))
    }

    fn push_grid(&self, frame: &mut RenderFrame) {
        let rect = self.transform.rect;
        let (width, color) = (self.style.grid_line_width, self.style.grid_line_color);
        for tick in self.visible_x_ticks() {
            let x = tick.position_px;
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(x, rect.top, x, rect.bottom, width, color),
            );
        }
        for tick in self.visible_y_ticks() {
            let y = tick.position_px;
            frame.push_line(
                CanvasLayerKind::Grid,
                LinePrimitive::new(rect.left, y, rect.right, y, width, color),
            );
        }
    }

    fn push_series(&self, frame: &mut RenderFrame) {
        let rect = self.transform.rect;
        let (width, color) = (self.style.series_line_width, self.style.series_line_color);

        if let [point] = self.graph {
            if point.visible {
                let half = self.style.point_marker_size_px * 0.5;
                frame.push_rect(
                    CanvasLayerKind::Series,
                    RectPrimitive::new(
                        point.screen.x - half,
                        point.screen.y - half,
                        half * 2.0,
                        half * 2.0,
                        width,
                        color,
                    ),
                );
            }
            return;
        }

        for pair in self.graph.windows(2) {
            let (a, b) = (pair[0].screen, pair[1].screen);
            if !rect.intersects_segment_bounds(a, b) {
                continue;
            }
            if let Some((start, end)) = clip_segment(rect, a, b) {
                frame.push_line(
                    CanvasLayerKind::Series,
                    LinePrimitive::new(start.x, start.y, end.x, end.y, width, color),
                );
            }
        }
    }

    fn push_axes(&self, frame: &mut RenderFrame) {
        let rect = self.transform.rect;
        let tick_length = self.layout.tick_length_px;
        let label_offset = tick_length + self.layout.label_gap_px;
        let style = self.style;

        for tick in self.visible_x_ticks() {
            let x = tick.position_px;
            if tick_length > 0.0 {
                frame.push_line(
                    CanvasLayerKind::Axis,
                    LinePrimitive::new(
                        x,
                        rect.bottom,
                        x,
                        rect.bottom + tick_length,
                        style.tick_mark_width,
                        style.tick_mark_color,
                    ),
                );
            }
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    tick.value.to_string(),
                    x,
                    rect.bottom + label_offset,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ),
            );
        }

        for tick in self.visible_y_ticks() {
            let y = tick.position_px;
            if tick_length > 0.0 {
                frame.push_line(
                    CanvasLayerKind::Axis,
                    LinePrimitive::new(
                        rect.left - tick_length,
                        y,
                        rect.left,
                        y,
                        style.tick_mark_width,
                        style.tick_mark_color,
                    ),
                );
            }
            frame.push_text(
                CanvasLayerKind::Axis,
                TextPrimitive::new(
                    tick.value.to_string(),
                    rect.left - label_offset,
                    y - self.label_height_px * 0.5,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Right,
                ),
            );
        }
    }
}
