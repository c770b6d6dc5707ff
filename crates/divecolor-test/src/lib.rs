//! divecolor-test - Regression test framework for divecolor
//!
//! Provides [`RegParams`], which records numbered comparisons and reports
//! every failure at the end of a test, plus builders for synthetic test
//! scenes so the regression tests need no image files.
//!
//! # Usage
//!
//! ```
//! use divecolor_test::RegParams;
//!
//! let mut rp = RegParams::new("example");
//! rp.compare_values(256.0, 255.0 + 1.0, 0.0);
//! assert!(rp.cleanup());
//! ```

mod fixtures;
mod params;

pub use fixtures::{checker, gradient_scene, noise_scene, underwater_scene, uniform};
pub use params::RegParams;
