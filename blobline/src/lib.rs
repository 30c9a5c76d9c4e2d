//! Blobline - blob labeling for run-encoded raster images
//!
//! Blobline assigns a connected-component ("blob") index to each maximal
//! horizontal pixel run ("line") extracted from a raster image. Two lines
//! belong to the same blob iff they are connected through a chain of
//! vertically-adjacent, column-overlapping lines.
//!
//! # Overview
//!
//! - Line extraction from ASCII rasters and rendering back (`io`)
//! - Blob labeling with canonical, order-stable indices (`region`)
//! - Per-blob statistics: line count, pixel count, bounds (`region`)
//!
//! # Example
//!
//! ```
//! use blobline::io::decode_raster;
//! use blobline::region::label_lines;
//!
//! let decoded = decode_raster(&[
//!     "AA...AA",
//!     ".AAAAA.",
//! ]).unwrap();
//!
//! // The lower run bridges the two upper runs into one blob
//! let labels = label_lines(&decoded.lines).unwrap();
//! assert_eq!(labels, vec![0, 0, 0]);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobline_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use blobline_io as io;
pub use blobline_region as region;
