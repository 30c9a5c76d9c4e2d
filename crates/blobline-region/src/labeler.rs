//! Blob labeling over sorted line sequences
//!
//! The labeler partitions a row-major sorted line sequence into blobs:
//! maximal sets of lines connected transitively through vertical adjacency
//! and column overlap. Connectivity is tracked incrementally in a
//! disjoint-set partition, so a line bridging two previously separate
//! groups merges them retroactively, including everything already assigned
//! to either. A final renumbering pass maps the surviving groups to
//! contiguous, order-stable blob indices.

use crate::error::{RegionError, RegionResult};
use crate::unionfind::UnionFind;
use blobline_core::Line;

/// Options for the labeling pass
#[derive(Debug, Clone)]
pub struct LabelOptions {
    /// Verify the row-major sort precondition before labeling
    ///
    /// The labeling pass relies on its input being sorted ascending by
    /// `(y, x)` and silently mislabels unsorted input. With this set the
    /// pass fails fast with [`RegionError::UnsortedInput`] instead.
    pub check_sorted: bool,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self { check_sorted: true }
    }
}

impl LabelOptions {
    /// Create options with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the sort precondition is verified
    pub fn with_check_sorted(mut self, check_sorted: bool) -> Self {
        self.check_sorted = check_sorted;
        self
    }
}

/// Assigns blob indices to lines extracted from a single image
///
/// The labeler holds no state across calls; all working state lives for
/// the duration of one [`process`](BlobLabeler::process) call, so a single
/// labeler may serve concurrent callers with independent inputs.
#[derive(Debug, Clone, Default)]
pub struct BlobLabeler {
    options: LabelOptions,
}

impl BlobLabeler {
    /// Create a labeler with the given options
    pub fn new(options: LabelOptions) -> Self {
        Self { options }
    }

    /// Compute the blob index of every line
    ///
    /// # Arguments
    ///
    /// * `lines` - Lines of a single image, sorted ascending by `(y, x)`
    ///
    /// # Returns
    ///
    /// One blob index per input line, in input order. Indices are
    /// contiguous from zero; blob 0 is the group holding the earliest line
    /// in sort order, blob 1 the next-earliest new group, and so on,
    /// independent of the internal merge order.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnsortedInput`] when the sort check is
    /// enabled and the input violates the `(y, x)` ordering.
    pub fn process(&self, lines: &[Line]) -> RegionResult<Vec<u32>> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }
        if self.options.check_sorted {
            check_sorted(lines)?;
        }

        let mut partition = UnionFind::new(lines.len());

        // Sliding window over the row directly above the current one. Rows
        // two or more apart never touch, and neither do lines sharing a row,
        // so only this window can contribute merges.
        let mut above = 0..0usize;
        let mut row_start = 0usize;

        for (i, line) in lines.iter().enumerate() {
            if i > 0 && line.y != lines[i - 1].y {
                above = if line.y == lines[i - 1].y + 1 {
                    row_start..i
                } else {
                    0..0
                };
                row_start = i;
            }

            // Runs ending at or left of this line's start cannot overlap it,
            // nor any later line on this row; drop them from the window.
            while above.start < above.end && lines[above.start].right() <= line.x {
                above.start += 1;
            }

            for j in above.clone() {
                let candidate = &lines[j];
                if candidate.x >= line.right() {
                    break;
                }
                // A line touching several previously distinct groups on the
                // row above folds them all into one set here, before the
                // pass moves on.
                if candidate.touches(line) {
                    partition.union(j, i);
                }
            }
        }

        renumber(lines.len(), &mut partition)
    }
}

/// Label a line sequence with the default options
///
/// Convenience wrapper around [`BlobLabeler::process`].
pub fn label_lines(lines: &[Line]) -> RegionResult<Vec<u32>> {
    BlobLabeler::default().process(lines)
}

/// Verify the `(y, x)` ordering invariant
fn check_sorted(lines: &[Line]) -> RegionResult<()> {
    for (i, pair) in lines.windows(2).enumerate() {
        if (pair[1].y, pair[1].x) < (pair[0].y, pair[0].x) {
            return Err(RegionError::UnsortedInput { index: i + 1 });
        }
    }
    Ok(())
}

/// Map the final partition to contiguous, order-stable blob indices
///
/// Walking lines in index order assigns each group its index at the
/// group's earliest member, which is exactly the canonical numbering:
/// blob 0 holds the globally earliest line, blob 1 the next line not in
/// blob 0, and so on. Group identities destroyed by merges never surface.
fn renumber(n: usize, partition: &mut UnionFind) -> RegionResult<Vec<u32>> {
    let mut blob_of_root: Vec<Option<u32>> = vec![None; n];
    let mut next = 0u32;
    for i in 0..n {
        let root = partition.find(i);
        if blob_of_root[root].is_none() {
            blob_of_root[root] = Some(next);
            next += 1;
        }
    }

    // Every line must resolve to a numbered group; a miss here is a defect
    // in the partition, not a caller error.
    let mut indices = Vec::with_capacity(n);
    for i in 0..n {
        let root = partition.find(i);
        let index = blob_of_root[root].ok_or(RegionError::MissingGroup { index: i })?;
        indices.push(index);
    }
    Ok(indices)
}
