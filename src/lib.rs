//! gridplot-rs: interactive 2D plot of integer points on a unit-step grid.
//!
//! The engine owns the data-to-screen transform, viewport state under zoom and
//! pan, tick-label decimation and gesture interpretation. Hosts feed it size
//! changes and pointer events and hand its [`render::RenderFrame`] output to a
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod source;
pub mod telemetry;

pub use api::{PlotEngine, PlotEngineConfig};
pub use error::{PlotError, PlotResult};
