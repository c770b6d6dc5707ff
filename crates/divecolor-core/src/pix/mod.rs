//! PIX - The main image container
//!
//! `Pix` holds a decoded 32 bpp RGB(A) image. The filters read it through
//! [`PixelSource`](crate::PixelSource) and write their results into a fresh
//! `Pix`.
//!
//! # Pixel layout
//!
//! - One 32-bit word per pixel, rows stored top to bottom without padding
//! - Color order is RGBA (red in MSB), see [`crate::color`]
//! - `spp` is 3 for RGB images (alpha ignored, written as 255) and 4 for RGBA
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Samples per pixel (3 for RGB, 4 for RGBA)
    spp: u32,
    /// The image data, one packed word per pixel
    data: Vec<u32>,
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use divecolor_core::Pix;
///
/// let pix = Pix::new(640, 480).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new RGB image with the specified dimensions.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_spp(width, height, 3)
    }

    /// Create a new image with an explicit samples-per-pixel count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::InvalidParameter`] if `spp` is not 3 or 4.
    pub fn with_spp(width: u32, height: u32, spp: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if spp != 3 && spp != 4 {
            return Err(Error::InvalidParameter(format!(
                "spp must be 3 or 4, got {spp}"
            )));
        }

        let data_size = (width as usize) * (height as usize);
        let inner = PixData {
            width,
            height,
            spp,
            data: vec![0u32; data_size],
        };

        Ok(Pix {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Check if two PIX have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this PIX.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Pix {
            inner: Arc::new(PixData::clone(&self.inner)),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData::clone(&self.inner),
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get samples per pixel.
    #[inline]
    pub fn spp(&self) -> u32 {
        self.inner.spp
    }

    /// Set samples per pixel (3 or 4).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] for any other value.
    pub fn set_spp(&mut self, spp: u32) -> Result<()> {
        if spp != 3 && spp != 4 {
            return Err(Error::InvalidParameter(format!(
                "spp must be 3 or 4, got {spp}"
            )));
        }
        self.inner.spp = spp;
        Ok(())
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let start = (y as usize) * (self.inner.width as usize);
        let end = start + self.inner.width as usize;
        &mut self.inner.data[start..end]
    }
}

impl From<PixMut> for Pix {
    fn from(pix: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let pix = Pix::new(4, 3).unwrap();
        assert_eq!(pix.width(), 4);
        assert_eq!(pix.height(), 3);
        assert_eq!(pix.spp(), 3);
        assert_eq!(pix.data().len(), 12);
        assert!(pix.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Pix::new(0, 10),
            Err(Error::InvalidDimension {
                width: 0,
                height: 10
            })
        ));
        assert!(Pix::new(10, 0).is_err());
    }

    #[test]
    fn test_invalid_spp_rejected() {
        assert!(Pix::with_spp(2, 2, 1).is_err());
        assert_eq!(Pix::with_spp(2, 2, 4).unwrap().spp(), 4);
    }

    #[test]
    fn test_try_into_mut_requires_unique_owner() {
        let pix = Pix::new(2, 2).unwrap();
        let shared = pix.clone();
        let pix = pix.try_into_mut().unwrap_err();
        drop(shared);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_deep_clone_is_independent() {
        let pix = Pix::new(2, 2).unwrap();
        let mut pm = pix.deep_clone().try_into_mut().unwrap();
        pm.data_mut()[0] = 0xffffffff;
        let modified: Pix = pm.into();
        assert_eq!(pix.data()[0], 0);
        assert_eq!(modified.data()[0], 0xffffffff);
    }

    #[test]
    fn test_rows() {
        let pix = Pix::new(3, 2).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.row_data_mut(1).copy_from_slice(&[1, 2, 3]);
        let pix: Pix = pm.into();
        assert_eq!(&pix.data()[..3], &[0, 0, 0]);
        assert_eq!(&pix.data()[3..], &[1, 2, 3]);
    }

    #[test]
    fn test_sizes_equal() {
        let pix = Pix::with_spp(5, 4, 4).unwrap();
        assert!(pix.sizes_equal(&Pix::new(5, 4).unwrap()));
        assert!(!pix.sizes_equal(&Pix::new(4, 5).unwrap()));
    }
}
