//! Error types for divecolor-core
//!
//! Provides a unified error type for the image container, pixel sources and
//! the small value types (histograms, intervals) used by the filters.

use thiserror::Error;

/// divecolor-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Value outside a histogram or interval domain
    #[error("value {value} outside domain [{from}, {to}]")]
    OutOfDomain { value: i32, from: i32, to: i32 },

    /// Raw buffer length does not match the declared geometry
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for divecolor-core operations
pub type Result<T> = std::result::Result<T, Error>;
