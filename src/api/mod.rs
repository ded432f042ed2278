mod data_controller;
mod decimation;
mod engine;
mod engine_config;
mod interaction_controller;
mod label_metrics;
mod plot_layout;
mod render_frame_builder;
mod render_style;

pub use data_controller::{LoadDelivery, LoadTicket};
pub use decimation::{AxisDecimation, decimation_multiplier};
pub use engine::PlotEngine;
pub use engine_config::{LayoutBehavior, PlotEngineConfig};
pub use label_metrics::{EstimatedLabelMetrics, LabelMetrics, TextExtent};
pub use plot_layout::PlotLayout;
pub use render_style::PlotStyle;

pub use crate::interaction::{
    EventDisposition, GestureState, InteractionInputBehavior, PointerEvent, PointerEventKind,
    PointerId, ZoomBehavior, ZoomOutcome,
};
