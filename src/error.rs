use std::path::PathBuf;

use thiserror::Error;

use crate::core::Axis;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("{axis} axis spans {span} ticks, limit is {limit}")]
    AxisSpanTooLarge { axis: Axis, span: u128, limit: usize },

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("render backend failure: {0}")]
    Backend(String),
}

/// Failures reported by the point loader. The engine only forwards these.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("point source not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read point source {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected `x,y` integers, got {content:?}")]
    Format { line: usize, content: String },
}
