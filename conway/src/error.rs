//! Engine error types.

use thiserror::Error;

/// Errors raised by the simulation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero.
    #[error("invalid grid dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: usize, height: usize },

    /// A row task of the concurrent tick did not complete.
    #[error("row task failed: {0}")]
    RowTask(#[from] tokio::task::JoinError),
}
