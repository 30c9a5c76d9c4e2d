//! blobline-region - Blob labeling for blobline
//!
//! This crate provides the labeling core:
//!
//! - **Blob labeling** - Partitioning sorted line sequences into blobs
//! - **Union-Find** - The disjoint-set partition backing the labeler
//! - **Blob summaries** - Per-blob line, pixel and bounds statistics
//!
//! Two lines belong to the same blob iff they are connected through a chain
//! of vertically-adjacent, column-overlapping lines. Blob indices are
//! contiguous from zero and ordered by each blob's earliest line in
//! row-major order, so the labeling is reproducible regardless of the
//! internal merge order.
//!
//! # Examples
//!
//! ```
//! use blobline_core::Line;
//! use blobline_region::label_lines;
//!
//! // Two runs bridged by the wide run below them
//! let lines = [
//!     Line::new(0, 0, 2).unwrap(),
//!     Line::new(5, 0, 2).unwrap(),
//!     Line::new(0, 1, 8).unwrap(),
//! ];
//! assert_eq!(label_lines(&lines).unwrap(), vec![0, 0, 0]);
//! ```

pub mod blobs;
pub mod error;
pub mod labeler;
pub mod unionfind;

// Re-export core types
pub use blobline_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export labeler types and functions
pub use labeler::{BlobLabeler, LabelOptions, label_lines};

// Re-export blob summaries
pub use blobs::{Blob, find_blobs};

// Re-export the partition primitive
pub use unionfind::UnionFind;
