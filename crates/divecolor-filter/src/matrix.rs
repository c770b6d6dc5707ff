//! 4x5 affine color matrices
//!
//! A [`ColorMatrix`] holds 20 coefficients in row-major order. Rows 0-2
//! produce red, green and blue, row 3 produces alpha. Columns 0-3 weight the
//! input `(r, g, b, a)` and column 4 is an additive offset expressed as a
//! fraction of the full channel range:
//!
//! ```text
//! out_c = r·m[c][0] + g·m[c][1] + b·m[c][2] + a·m[c][3] + m[c][4]·255
//! ```
//!
//! Outputs are rounded and clamped to `[0, 255]`.

use crate::{FilterError, FilterResult};
use divecolor_core::{Pix, PixelSource, color};

/// Row-major 4x5 affine color transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    values: [f32; 20],
}

impl ColorMatrix {
    /// Number of rows.
    pub const ROWS: usize = 4;
    /// Number of columns.
    pub const COLS: usize = 5;

    /// The transform that leaves every pixel unchanged.
    pub const IDENTITY: ColorMatrix = ColorMatrix {
        values: [
            1.0, 0.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 0.0, 1.0, 0.0,
        ],
    };

    /// Build a matrix from its 20 row-major coefficients.
    pub const fn new(values: [f32; 20]) -> Self {
        Self { values }
    }

    /// Build a matrix from a slice of row-major coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] unless the slice holds
    /// exactly 20 finite values.
    pub fn from_slice(values: &[f32]) -> FilterResult<Self> {
        let values: [f32; 20] = values.try_into().map_err(|_| {
            FilterError::InvalidParameters(format!(
                "color matrix needs 20 values, got {}",
                values.len()
            ))
        })?;
        if values.iter().any(|v| !v.is_finite()) {
            return Err(FilterError::InvalidParameters(
                "color matrix values must be finite".into(),
            ));
        }
        Ok(Self { values })
    }

    /// All coefficients in row-major order.
    pub fn values(&self) -> &[f32; 20] {
        &self.values
    }

    /// Coefficients of one row, or `None` if `row >= 4`.
    pub fn row(&self, row: usize) -> Option<&[f32]> {
        if row >= Self::ROWS {
            return None;
        }
        Some(&self.values[row * Self::COLS..(row + 1) * Self::COLS])
    }

    /// Coefficient at `(row, col)`, or `None` out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row >= Self::ROWS || col >= Self::COLS {
            return None;
        }
        Some(self.values[row * Self::COLS + col])
    }

    /// Transform one RGBA pixel.
    pub fn apply_rgba(&self, r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
        let input = [r as f32, g as f32, b as f32, a as f32];
        let channel = |row: usize| -> u8 {
            let m = &self.values[row * Self::COLS..(row + 1) * Self::COLS];
            let sum = input[0] * m[0] + input[1] * m[1] + input[2] * m[2] + input[3] * m[3]
                + m[4] * 255.0;
            sum.round().clamp(0.0, 255.0) as u8
        };
        (channel(0), channel(1), channel(2), channel(3))
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Apply `matrix` to every pixel of `src`, producing a new image.
///
/// The result keeps alpha (spp = 4) only when the source carries
/// non-opaque alpha.
///
/// # Errors
///
/// Returns [`FilterError::EmptyImage`] if the source has no pixels.
pub fn apply_color_matrix<S: PixelSource + ?Sized>(
    src: &S,
    matrix: &ColorMatrix,
) -> FilterResult<Pix> {
    if src.pixel_count() == 0 {
        return Err(FilterError::EmptyImage);
    }

    let pix = Pix::new(src.width(), src.height())?;
    let mut pm = pix.try_into_mut().unwrap();
    let mut translucent = false;

    for (i, word) in pm.data_mut().iter_mut().enumerate() {
        let (r, g, b) = src.rgb(i);
        let a = src.alpha(i);
        translucent |= a != 255;
        let (nr, ng, nb, na) = matrix.apply_rgba(r, g, b, a);
        *word = color::compose_rgba(nr, ng, nb, na);
    }

    if translucent {
        pm.set_spp(4)?;
    }
    Ok(pm.into())
}
