//! ASCII raster decoding and rendering
//!
//! Rasters are encoded one character per pixel: `.` marks background and an
//! uppercase letter marks a blob pixel, the letter doubling as the reference
//! blob index (`A` = 0 ... `Z` = 25). Runs of one letter form lines; two
//! differently-lettered runs on the same row must be separated by at least
//! one background pixel.

use crate::error::{IoError, IoResult};
use blobline_core::Line;

/// Background pixel marker
pub const BACKGROUND: char = '.';

/// Number of blob letters, and so of renderable blob indices
pub const LETTER_COUNT: u32 = 26;

/// A decoded raster
///
/// `lines` is sorted row-major by construction: rows are scanned top to
/// bottom and columns left to right. `reference` carries the blob index
/// each line's letter encodes, derived from the letters alone.
#[derive(Debug, Clone, Default)]
pub struct DecodedRaster {
    /// Extracted lines, ascending by `(y, x)`
    pub lines: Vec<Line>,
    /// Letter-derived blob index per line
    pub reference: Vec<u32>,
}

/// Decode a raster given as one string per row
///
/// # Arguments
///
/// * `rows` - Raster rows, one character per pixel
///
/// # Returns
///
/// The extracted lines and their letter-derived reference indices.
///
/// # Errors
///
/// Returns [`IoError::IllegalCharacter`] for any character outside `.` and
/// `A`-`Z`, and [`IoError::AdjacentRuns`] when two differently-lettered
/// runs touch on one row.
pub fn decode_raster<S: AsRef<str>>(rows: &[S]) -> IoResult<DecodedRaster> {
    let mut decoded = DecodedRaster::default();

    for (y, row) in rows.iter().enumerate() {
        let mut previous = BACKGROUND;
        for (x, pixel) in row.as_ref().chars().enumerate() {
            if pixel != BACKGROUND {
                if !pixel.is_ascii_uppercase() {
                    return Err(IoError::IllegalCharacter {
                        row: y,
                        column: x,
                        pixel,
                    });
                }
                if previous == BACKGROUND {
                    decoded.reference.push(pixel as u32 - 'A' as u32);
                    decoded
                        .lines
                        .push(Line::new_unchecked(x as u32, y as u32, 1));
                } else if pixel == previous {
                    if let Some(run) = decoded.lines.last_mut() {
                        run.length += 1;
                    }
                } else {
                    return Err(IoError::AdjacentRuns { row: y, column: x });
                }
            }
            previous = pixel;
        }
    }

    Ok(decoded)
}

/// Decode a raster given as one text blob, one row per text line
pub fn parse_raster(text: &str) -> IoResult<DecodedRaster> {
    let rows: Vec<&str> = text.lines().collect();
    decode_raster(&rows)
}

/// Render a labeled line sequence back into raster rows
///
/// The raster is minimally sized: width is the rightmost used column plus
/// one, height the bottommost used row plus one. Each line's pixels are
/// painted with the letter of its blob index; everything else is `.`.
///
/// # Arguments
///
/// * `lines` - Lines of a single image
/// * `indices` - Blob index per line, parallel to `lines`
///
/// # Returns
///
/// The rendered rows; empty input renders an empty raster.
///
/// # Errors
///
/// Returns [`IoError::LengthMismatch`] when the two sequences differ in
/// length (nothing is rendered), and [`IoError::IndexOverflow`] for a blob
/// index with no letter.
pub fn render_raster(lines: &[Line], indices: &[u32]) -> IoResult<Vec<String>> {
    if lines.len() != indices.len() {
        return Err(IoError::LengthMismatch {
            lines: lines.len(),
            indices: indices.len(),
        });
    }
    if lines.is_empty() {
        return Ok(Vec::new());
    }

    let width = lines.iter().map(Line::right).max().unwrap_or(0) as usize;
    let height = lines.iter().map(|line| line.y).max().unwrap_or(0) as usize + 1;

    let mut rows = vec![vec![BACKGROUND; width]; height];
    for (line, &index) in lines.iter().zip(indices) {
        if index >= LETTER_COUNT {
            return Err(IoError::IndexOverflow { index });
        }
        let pixel = (b'A' + index as u8) as char;
        for x in line.x..line.right() {
            rows[line.y as usize][x as usize] = pixel;
        }
    }

    Ok(rows.into_iter().map(|row| row.into_iter().collect()).collect())
}
