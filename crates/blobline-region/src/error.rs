//! Error types for blobline-region

use thiserror::Error;

/// Errors that can occur during blob labeling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] blobline_core::Error),

    /// Input violates the row-major sort precondition
    #[error("unsorted input: line {index} is out of (y, x) order")]
    UnsortedInput { index: usize },

    /// Internal partition invariant violated
    ///
    /// Every processed line belongs to exactly one group; a failed group
    /// lookup is an internal defect, not a recoverable condition.
    #[error("invariant violated: no group holds line {index}")]
    MissingGroup { index: usize },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
