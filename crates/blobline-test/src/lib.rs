//! blobline-test - Regression test framework for blobline
//!
//! This crate provides a golden-file regression test framework supporting
//! three modes:
//!
//! - **Generate**: Create golden files for comparison
//! - **Compare**: Compare results with golden files (default)
//! - **Display**: Run tests without comparison (visual inspection)
//!
//! # Usage
//!
//! ```ignore
//! use blobline_test::{RegParams, load_test_raster};
//!
//! let mut rp = RegParams::new("label");
//! let rows = load_test_raster("simple.txt").unwrap();
//! rp.compare_values(15.0, blob_count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "generate", "compare", or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Load a fixture raster from the test data directory
///
/// # Arguments
///
/// * `name` - Raster filename (e.g., "simple.txt")
///
/// # Returns
///
/// The raster rows, or an error if loading fails.
pub fn load_test_raster(name: &str) -> TestResult<Vec<String>> {
    let path = test_data_path(name);
    let text = std::fs::read_to_string(&path).map_err(|e| TestError::RasterLoad {
        path: path.clone(),
        message: e.to_string(),
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // blobline-test is at crates/blobline-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a test data file
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/rasters/{}", workspace_root(), name)
}

/// Get the path to the golden files directory
pub fn golden_dir() -> String {
    format!("{}/tests/golden", workspace_root())
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
