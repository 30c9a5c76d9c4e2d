//! Raster decode/render regression test
//!
//! Checks that decoding a fixture raster and re-rendering its lines with
//! the letter-derived indices reproduces the fixture exactly.
//!
//! Run with:
//! ```
//! cargo test -p blobline-io --test raster_reg
//! ```

use blobline_io::{decode_raster, render_raster};
use blobline_test::{RegParams, load_test_raster};

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    for (name, line_count) in [("simple.txt", 71.0), ("complex.txt", 232.0)] {
        let rows = match load_test_raster(name) {
            Ok(rows) => rows,
            Err(e) => {
                panic!("Failed to load fixture {}: {}", name, e);
            }
        };
        let decoded = match decode_raster(&rows) {
            Ok(d) => d,
            Err(e) => {
                panic!("Failed to decode {}: {}", name, e);
            }
        };
        eprintln!("{}: {} lines", name, decoded.lines.len());
        rp.compare_values(line_count, decoded.lines.len() as f64, 0.0);

        // The fixtures use their full width and height, so the minimal
        // bounding render reproduces them byte for byte
        let rendered = match render_raster(&decoded.lines, &decoded.reference) {
            Ok(rendered) => rendered,
            Err(e) => {
                panic!("Failed to render {}: {}", name, e);
            }
        };
        rp.compare_rasters(&rows, &rendered);
    }

    assert!(rp.cleanup(), "raster regression test failed");
}
