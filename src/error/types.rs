use thiserror::Error;

use crate::logging::LoggingError;

/// Unified result type for the tilefit crate.
pub type Result<T> = std::result::Result<T, DistributeError>;

/// Errors surfaced by grid setup and the distribution search.
#[derive(Debug, Error)]
pub enum DistributeError {
    #[error("element list is empty")]
    NoElements,
    #[error("priority of element {index} is not finite")]
    NonFinitePriority { index: usize },
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGridSize { width: u16, height: u16 },
    #[error("tile aspect ratio bounds are invalid: min {min}, max {max}")]
    InvalidRatioBounds { min: f64, max: f64 },
    #[error("search aborted after {iterations} iterations")]
    Aborted { iterations: u64 },
    #[error("logging failure: {0}")]
    Logging(#[from] LoggingError),
}
