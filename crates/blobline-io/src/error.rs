//! Error types for blobline-io

use thiserror::Error;

/// Errors that can occur while decoding or rendering rasters
#[derive(Debug, Error)]
pub enum IoError {
    /// Character outside `.` and `A`-`Z`
    #[error("illegal character {pixel:?} at row {row}, column {column}: rasters comprise only '.' and 'A'-'Z'")]
    IllegalCharacter {
        row: usize,
        column: usize,
        pixel: char,
    },

    /// Two differently-lettered runs with no separating background pixel
    #[error("touching runs on row {row} at column {column}: runs must be separated by background")]
    AdjacentRuns { row: usize, column: usize },

    /// Line and blob-index sequences differ in length
    #[error("length mismatch: {lines} lines but {indices} blob indices")]
    LengthMismatch { lines: usize, indices: usize },

    /// Blob index beyond the letter alphabet
    #[error("blob index {index} cannot be rendered: letters cover indices 0-25")]
    IndexOverflow { index: u32 },

    /// Raster has no pixels
    #[error("empty raster: no lines to export")]
    EmptyRaster,

    /// Image encode error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for raster I/O operations
pub type IoResult<T> = Result<T, IoError>;
