//! Error types for divecolor-filter

use thiserror::Error;

/// Errors that can occur while estimating or applying a correction
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] divecolor_core::Error),

    /// The pixel source holds no pixels, so no average exists
    #[error("empty image: no pixels to process")]
    EmptyImage,

    /// A zero-width normalization interval would divide the gain by zero
    #[error("degenerate {channel} interval: low == high == {value}")]
    DegenerateInterval {
        /// Channel name ("red", "green" or "blue")
        channel: &'static str,
        /// The single value the interval covers
        value: i32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
