//! PNG export of labeled rasters
//!
//! Encodes a labeled line sequence as an 8-bit indexed-color PNG for visual
//! inspection: palette slot 0 is the background, slots 1 onwards a fixed
//! color cycle keyed by blob index. Unlike the letter renderer, the color
//! cycle accepts any blob index by wrapping modulo the palette size.

use crate::error::{IoError, IoResult};
use blobline_core::Line;
use png::{BitDepth, ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Background color (palette slot 0)
const BACKGROUND_RGB: [u8; 3] = [255, 255, 255];

/// Blob color cycle, one slot per letter
const BLOB_PALETTE: [[u8; 3]; 26] = [
    [230, 25, 75],
    [60, 180, 75],
    [255, 225, 25],
    [0, 130, 200],
    [245, 130, 48],
    [145, 30, 180],
    [70, 240, 240],
    [240, 50, 230],
    [210, 245, 60],
    [250, 190, 212],
    [0, 128, 128],
    [220, 190, 255],
    [170, 110, 40],
    [255, 250, 200],
    [128, 0, 0],
    [170, 255, 195],
    [128, 128, 0],
    [255, 215, 180],
    [0, 0, 128],
    [128, 128, 128],
    [233, 175, 90],
    [25, 75, 230],
    [75, 180, 60],
    [200, 130, 0],
    [180, 30, 145],
    [48, 130, 245],
];

/// Write a labeled raster as an indexed-color PNG
///
/// # Arguments
///
/// * `lines` - Lines of a single image
/// * `indices` - Blob index per line, parallel to `lines`
/// * `writer` - Destination for the encoded image
///
/// # Errors
///
/// Returns [`IoError::LengthMismatch`] when the sequences differ in length
/// and [`IoError::EmptyRaster`] for empty input (PNG cannot encode a
/// zero-sized image).
pub fn write_png<W: Write>(lines: &[Line], indices: &[u32], writer: W) -> IoResult<()> {
    if lines.len() != indices.len() {
        return Err(IoError::LengthMismatch {
            lines: lines.len(),
            indices: indices.len(),
        });
    }
    if lines.is_empty() {
        return Err(IoError::EmptyRaster);
    }

    let width = lines.iter().map(Line::right).max().unwrap_or(0) as usize;
    let height = lines.iter().map(|line| line.y).max().unwrap_or(0) as usize + 1;

    let mut data = vec![0u8; width * height];
    for (line, &index) in lines.iter().zip(indices) {
        let slot = (index % BLOB_PALETTE.len() as u32) as u8 + 1;
        let row = line.y as usize * width;
        for x in line.x..line.right() {
            data[row + x as usize] = slot;
        }
    }

    let mut palette = Vec::with_capacity((1 + BLOB_PALETTE.len()) * 3);
    palette.extend_from_slice(&BACKGROUND_RGB);
    for rgb in &BLOB_PALETTE {
        palette.extend_from_slice(rgb);
    }

    let mut encoder = Encoder::new(writer, width as u32, height as u32);
    encoder.set_color(ColorType::Indexed);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_palette(palette);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {}", e)))?;
    png_writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG encode error: {}", e)))?;

    Ok(())
}

/// Write a labeled raster as a PNG file
pub fn write_png_file<P: AsRef<Path>>(lines: &[Line], indices: &[u32], path: P) -> IoResult<()> {
    let file = File::create(path)?;
    write_png(lines, indices, BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_write_png_produces_png_stream() {
        let lines = [Line::new_unchecked(0, 0, 2), Line::new_unchecked(1, 1, 2)];
        let mut out = Vec::new();
        write_png(&lines, &[0, 0], &mut out).unwrap();
        assert_eq!(&out[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_write_png_rejects_length_mismatch() {
        let lines = [Line::new_unchecked(0, 0, 2)];
        let err = write_png(&lines, &[], Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::LengthMismatch { .. }));
    }

    #[test]
    fn test_write_png_rejects_empty_raster() {
        let err = write_png(&[], &[], Vec::new()).unwrap_err();
        assert!(matches!(err, IoError::EmptyRaster));
    }

    #[test]
    fn test_color_cycle_accepts_large_indices() {
        let lines = [Line::new_unchecked(0, 0, 1)];
        let mut out = Vec::new();
        write_png(&lines, &[31], &mut out).unwrap();
        assert!(!out.is_empty());
    }
}
