//! Blob labeling regression test
//!
//! Decodes the lettered fixture rasters and checks that the labeler
//! reproduces the letter-derived reference indices exactly.
//!
//! Run with:
//! ```
//! cargo test -p blobline-region --test label_reg
//! ```

use blobline_io::decode_raster;
use blobline_region::{find_blobs, label_lines};
use blobline_test::{RegParams, load_test_raster};

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // -----------------------------------------------------------
    // Simple fixture: 15 blobs, including same-letter groups
    // connected only through lower rows
    // -----------------------------------------------------------
    let rows = match load_test_raster("simple.txt") {
        Ok(rows) => rows,
        Err(e) => {
            panic!("Failed to load fixture: {}", e);
        }
    };
    let decoded = match decode_raster(&rows) {
        Ok(d) => d,
        Err(e) => {
            panic!("Failed to decode simple fixture: {}", e);
        }
    };
    let n1 = decoded.lines.len();
    eprintln!("Number of lines in simple fixture: n1 = {}", n1);

    // Line count and label agreement
    rp.compare_values(71.0, n1 as f64, 0.0);
    match label_lines(&decoded.lines) {
        Ok(labels) => {
            rp.compare_labels(&decoded.reference, &labels);
        }
        Err(e) => {
            panic!("Failed to label simple fixture: {}", e);
        }
    }

    // Blob count
    let blobs = match find_blobs(&decoded.lines) {
        Ok(blobs) => blobs,
        Err(e) => {
            panic!("Failed to summarize simple fixture: {}", e);
        }
    };
    rp.compare_values(15.0, blobs.len() as f64, 0.0);

    // Pixel accounting: blob pixels must cover every line pixel exactly
    let line_pixels: u64 = decoded.lines.iter().map(|l| l.length as u64).sum();
    let blob_pixels: u64 = blobs.iter().map(|b| b.pixel_count).sum();
    rp.compare_values(line_pixels as f64, blob_pixels as f64, 0.0);

    // -----------------------------------------------------------
    // Complex fixture: 23 blobs, heavy bridge merging (the R blob
    // spans most of the lower third of the image)
    // -----------------------------------------------------------
    let rows = match load_test_raster("complex.txt") {
        Ok(rows) => rows,
        Err(e) => {
            panic!("Failed to load fixture: {}", e);
        }
    };
    let decoded = match decode_raster(&rows) {
        Ok(d) => d,
        Err(e) => {
            panic!("Failed to decode complex fixture: {}", e);
        }
    };
    let n2 = decoded.lines.len();
    eprintln!("Number of lines in complex fixture: n2 = {}", n2);

    // Line count, label agreement, blob count
    rp.compare_values(232.0, n2 as f64, 0.0);
    match label_lines(&decoded.lines) {
        Ok(labels) => {
            rp.compare_labels(&decoded.reference, &labels);
        }
        Err(e) => {
            panic!("Failed to label complex fixture: {}", e);
        }
    }
    let blobs = match find_blobs(&decoded.lines) {
        Ok(blobs) => blobs,
        Err(e) => {
            panic!("Failed to summarize complex fixture: {}", e);
        }
    };
    rp.compare_values(23.0, blobs.len() as f64, 0.0);

    assert!(rp.cleanup(), "label regression test failed");
}
