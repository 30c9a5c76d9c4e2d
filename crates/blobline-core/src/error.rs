//! Error types for blobline-core

use thiserror::Error;

/// Blobline core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Line with no pixels
    #[error("empty line at ({x}, {y}): length must be at least 1")]
    EmptyLine { x: u32, y: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
