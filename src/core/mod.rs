pub mod bounds;
pub mod projection;
pub mod transform;
pub mod types;

pub use bounds::{AxisBounds, AxisLayout};
pub use projection::{
    AxisTick, PlotPoint, clip_segment, project_axis_ticks, project_points,
};
pub use transform::{PlotTransform, ViewportState};
pub use types::{Axis, DataPoint, PlotRect, ScreenPoint, Viewport};
