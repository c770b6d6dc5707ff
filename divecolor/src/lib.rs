//! divecolor - Automatic color correction for underwater photographs
//!
//! Underwater, red light is absorbed within a few meters and images take on
//! a blue-green cast. This library estimates a 4x5 color matrix that shifts
//! hue back toward red and stretches each channel onto the full range, then
//! applies it to the image.
//!
//! # Overview
//!
//! - [`Pix`] and [`PixelSource`] describe the input image
//! - [`filter::underwater_filter`] estimates the correction matrix,
//!   reporting progress as it walks the image
//! - [`filter::apply_color_matrix`] applies any [`ColorMatrix`]
//!
//! # Example
//!
//! ```
//! use divecolor::filter::{UnderwaterOptions, apply_color_matrix, underwater_filter};
//! use divecolor::RgbBuffer;
//!
//! // 4x2 image with weak red and strong blue-green
//! let bytes = [
//!     20u8, 120, 160, 25, 130, 170, 18, 110, 150, 30, 140, 180, //
//!     22, 125, 165, 28, 135, 175, 15, 100, 140, 35, 150, 190,
//! ];
//! let src = RgbBuffer::from_rgb(4, 2, &bytes).unwrap();
//!
//! let matrix = underwater_filter(&src, &UnderwaterOptions::default(), &mut |p| {
//!     assert!((0.0..=1.0).contains(&p));
//! })
//! .unwrap();
//! let corrected = apply_color_matrix(&src, &matrix).unwrap();
//! assert_eq!((corrected.width(), corrected.height()), (4, 2));
//! ```
//!
//! # Features
//!
//! - `image`: read `image::RgbImage` and `image::RgbaImage` directly

// Re-export core types (primary data structures used everywhere)
pub use divecolor_core::*;

// Re-export the filter crate as a module to avoid name conflicts
pub use divecolor_filter as filter;
pub use divecolor_filter::{ColorMatrix, FilterError, FilterResult};

#[cfg(all(test, feature = "image"))]
mod tests {
    use super::filter::{ColorMatrix, apply_color_matrix, underwater_matrix};
    use super::{Pix, PixelSource};

    #[test]
    fn test_image_buffers_match_pix() {
        let img = image::RgbImage::from_fn(6, 4, |x, y| {
            image::Rgb([(x * 10) as u8, 100 + y as u8, 180 - (x + y) as u8])
        });
        let pix = Pix::from_source(&img).unwrap();
        assert_eq!(img.pixel_count(), 24);
        assert_eq!(underwater_matrix(&img).unwrap(), underwater_matrix(&pix).unwrap());

        let rgba = image::RgbaImage::from_fn(2, 2, |x, _| image::Rgba([1, 2, 3, 100 + x as u8]));
        let out = apply_color_matrix(&rgba, &ColorMatrix::IDENTITY).unwrap();
        assert_eq!(out.spp(), 4);
        assert_eq!(out.get_rgba(1, 0), Some((1, 2, 3, 101)));
    }
}
