//! Error types for the backdrop.

use thiserror::Error;

/// Errors produced while wiring the backdrop to its host.
///
/// None of these are fatal to the page: callers log them and skip the
/// affected feature.
#[derive(Debug, Error)]
pub enum BackdropError {
    /// The drawing surface (canvas or its 2D context) could not be acquired.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A configuration value was out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The configuration JSON could not be parsed.
    #[error("malformed config: {0}")]
    Config(#[from] serde_json::Error),

    /// The frame scheduler refused to register the next frame.
    #[error("frame scheduler failed: {0}")]
    Scheduler(String),

    /// The preference store could not be read or written.
    #[error("preference storage failed: {0}")]
    Storage(String),

    /// A DOM lookup or mutation failed.
    #[error("dom operation failed: {0}")]
    Dom(String),
}
