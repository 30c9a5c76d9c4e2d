//! blobline-core - Core data structures for blobline
//!
//! Blobline analyzes raster images represented as maximal horizontal pixel
//! runs ("lines") rather than raw pixel masks. This crate provides the data
//! structures shared by the rest of the workspace:
//!
//! - **Line** - a horizontal run of same-blob pixels on one row
//! - **Bounds** - the rectangular extent of a set of lines
//!
//! # Example
//!
//! ```
//! use blobline_core::Line;
//!
//! let a = Line::new(0, 0, 3).unwrap();
//! let b = Line::new(2, 1, 4).unwrap();
//!
//! // Rows one apart, columns overlap at column 2
//! assert!(a.touches(&b));
//! ```

pub mod bounds;
pub mod error;
pub mod line;

pub use bounds::Bounds;
pub use error::{Error, Result};
pub use line::Line;
