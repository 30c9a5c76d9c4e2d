//! Blob summaries
//!
//! Aggregate per-blob statistics on top of the labeling pass.

use crate::error::RegionResult;
use crate::labeler::label_lines;
use blobline_core::{Bounds, Line};

/// Summary of one labeled blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    /// Canonical blob index
    pub index: u32,
    /// Number of lines in the blob
    pub line_count: u32,
    /// Number of pixels covered by the blob's lines
    pub pixel_count: u64,
    /// Bounding box of the blob
    pub bounds: Bounds,
}

impl Blob {
    fn of_line(index: u32, line: &Line) -> Self {
        Self {
            index,
            line_count: 1,
            pixel_count: line.length as u64,
            bounds: Bounds::of_line(line),
        }
    }

    fn absorb(&mut self, line: &Line) {
        self.line_count += 1;
        self.pixel_count += line.length as u64;
        self.bounds.include(line);
    }
}

/// Label a line sequence and summarize each blob
///
/// # Arguments
///
/// * `lines` - Lines of a single image, sorted ascending by `(y, x)`
///
/// # Returns
///
/// One [`Blob`] per connected component, ordered by blob index.
///
/// # Errors
///
/// Propagates labeling errors; see [`label_lines`].
pub fn find_blobs(lines: &[Line]) -> RegionResult<Vec<Blob>> {
    let indices = label_lines(lines)?;

    // Canonical numbering hands out each new index at its blob's earliest
    // line, so index == blobs.len() exactly when a blob is first seen.
    let mut blobs: Vec<Blob> = Vec::new();
    for (line, &index) in lines.iter().zip(&indices) {
        match blobs.get_mut(index as usize) {
            Some(blob) => blob.absorb(line),
            None => blobs.push(Blob::of_line(index, line)),
        }
    }
    Ok(blobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(x: u32, y: u32, length: u32) -> Line {
        Line::new_unchecked(x, y, length)
    }

    #[test]
    fn test_empty() {
        assert!(find_blobs(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_blob_stats() {
        // A 2-line L-shape
        let lines = [line(2, 0, 3), line(2, 1, 1)];
        let blobs = find_blobs(&lines).unwrap();
        assert_eq!(blobs.len(), 1);
        let blob = &blobs[0];
        assert_eq!(blob.index, 0);
        assert_eq!(blob.line_count, 2);
        assert_eq!(blob.pixel_count, 4);
        assert_eq!(blob.bounds, Bounds { x: 2, y: 0, w: 3, h: 2 });
    }

    #[test]
    fn test_blobs_ordered_by_index() {
        let lines = [line(0, 0, 2), line(6, 0, 3), line(6, 1, 3)];
        let blobs = find_blobs(&lines).unwrap();
        assert_eq!(blobs.len(), 2);
        assert_eq!(blobs[0].index, 0);
        assert_eq!(blobs[0].pixel_count, 2);
        assert_eq!(blobs[1].index, 1);
        assert_eq!(blobs[1].line_count, 2);
        assert_eq!(blobs[1].pixel_count, 6);
    }
}
