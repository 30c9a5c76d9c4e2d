//! blobline-io - Raster decoding and rendering for blobline
//!
//! This crate converts between character rasters and the line sequences
//! the labeling core consumes:
//!
//! - **Decoding** - Extracting sorted lines and letter-derived reference
//!   indices from an ASCII raster
//! - **Rendering** - Painting a labeled line sequence back into an ASCII
//!   raster for comparison and inspection
//! - **PNG export** - Writing a labeled raster as an indexed-color PNG
//!   (feature `png-format`, on by default)
//!
//! # Examples
//!
//! ```
//! use blobline_io::{decode_raster, render_raster};
//!
//! let decoded = decode_raster(&[".AA.", "BB.."]).unwrap();
//! assert_eq!(decoded.reference, vec![0, 1]);
//!
//! let rows = render_raster(&decoded.lines, &decoded.reference).unwrap();
//! assert_eq!(rows, vec![".AA".to_string(), "BB.".to_string()]);
//! ```

pub mod ascii;
pub mod error;
#[cfg(feature = "png-format")]
pub mod png;

// Re-export core types
pub use blobline_core;

// Re-export error types
pub use error::{IoError, IoResult};

// Re-export raster types and functions
pub use ascii::{BACKGROUND, DecodedRaster, LETTER_COUNT, decode_raster, parse_raster, render_raster};

// Re-export PNG export functions
#[cfg(feature = "png-format")]
pub use crate::png::{write_png, write_png_file};
