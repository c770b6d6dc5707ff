//! Read-only pixel sources
//!
//! The filters never care where pixels live. They read through
//! [`PixelSource`], which exposes the image as a row-major sequence of
//! `width * height` channel triples (plus alpha). Implementations exist for
//! [`Pix`], for borrowed packed byte buffers ([`RgbBuffer`]) and, with the
//! `image` feature, for `image::RgbImage` / `image::RgbaImage`.
//!
//! Unlike [`Pix`], a source may be empty (0x0); consumers decide whether
//! that is an error.

use crate::color;
use crate::error::{Error, Result};
use crate::pix::Pix;

/// Row-major, read-only access to the pixels of a decoded image.
pub trait PixelSource {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Total number of pixels.
    fn pixel_count(&self) -> usize {
        (self.width() as usize) * (self.height() as usize)
    }

    /// Channel triple of the pixel at row-major `index`.
    ///
    /// # Panics
    ///
    /// May panic if `index >= pixel_count()`.
    fn rgb(&self, index: usize) -> (u8, u8, u8);

    /// Alpha of the pixel at row-major `index`; opaque unless overridden.
    fn alpha(&self, _index: usize) -> u8 {
        255
    }
}

impl PixelSource for Pix {
    fn width(&self) -> u32 {
        Pix::width(self)
    }

    fn height(&self) -> u32 {
        Pix::height(self)
    }

    #[inline]
    fn rgb(&self, index: usize) -> (u8, u8, u8) {
        color::extract_rgb(self.data()[index])
    }

    #[inline]
    fn alpha(&self, index: usize) -> u8 {
        if self.spp() == 4 {
            color::alpha(self.data()[index])
        } else {
            255
        }
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn pixel_count(&self) -> usize {
        (**self).pixel_count()
    }

    fn rgb(&self, index: usize) -> (u8, u8, u8) {
        (**self).rgb(index)
    }

    fn alpha(&self, index: usize) -> u8 {
        (**self).alpha(index)
    }
}

/// Borrowed buffer of packed 8-bit RGB or RGBA samples.
///
/// # Examples
///
/// ```
/// use divecolor_core::{PixelSource, RgbBuffer};
///
/// let bytes = [255u8, 0, 0, 0, 0, 255];
/// let buf = RgbBuffer::from_rgb(2, 1, &bytes).unwrap();
/// assert_eq!(buf.rgb(1), (0, 0, 255));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbBuffer<'a> {
    width: u32,
    height: u32,
    channels: usize,
    data: &'a [u8],
}

impl<'a> RgbBuffer<'a> {
    /// Wrap packed `[r, g, b, r, g, b, ...]` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height * 3`.
    pub fn from_rgb(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        Self::with_channels(width, height, 3, data)
    }

    /// Wrap packed `[r, g, b, a, ...]` samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSizeMismatch`] if `data.len() != width * height * 4`.
    pub fn from_rgba(width: u32, height: u32, data: &'a [u8]) -> Result<Self> {
        Self::with_channels(width, height, 4, data)
    }

    fn with_channels(width: u32, height: u32, channels: usize, data: &'a [u8]) -> Result<Self> {
        let expected = (width as usize) * (height as usize) * channels;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Samples per pixel (3 or 4).
    pub fn channels(&self) -> usize {
        self.channels
    }
}

impl PixelSource for RgbBuffer<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn rgb(&self, index: usize) -> (u8, u8, u8) {
        let i = index * self.channels;
        (self.data[i], self.data[i + 1], self.data[i + 2])
    }

    #[inline]
    fn alpha(&self, index: usize) -> u8 {
        if self.channels == 4 {
            self.data[index * 4 + 3]
        } else {
            255
        }
    }
}

impl Pix {
    /// Copy any pixel source into a new `Pix`.
    ///
    /// The result has spp = 4 when the source carries non-opaque alpha.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty source.
    pub fn from_source<S: PixelSource + ?Sized>(src: &S) -> Result<Pix> {
        let (w, h) = (src.width(), src.height());
        let pix = Pix::new(w, h)?;
        let mut pm = pix
            .try_into_mut()
            .map_err(|_| Error::InvalidParameter("new pix is shared".into()))?;
        let mut translucent = false;
        for (i, word) in pm.data_mut().iter_mut().enumerate() {
            let (r, g, b) = src.rgb(i);
            let a = src.alpha(i);
            translucent |= a != 255;
            *word = color::compose_rgba(r, g, b, a);
        }
        if translucent {
            pm.set_spp(4)?;
        }
        Ok(pm.into())
    }
}

#[cfg(feature = "image")]
mod image_impls {
    use super::PixelSource;

    impl PixelSource for image::RgbImage {
        fn width(&self) -> u32 {
            image::RgbImage::width(self)
        }

        fn height(&self) -> u32 {
            image::RgbImage::height(self)
        }

        fn rgb(&self, index: usize) -> (u8, u8, u8) {
            let s = &self.as_raw()[index * 3..index * 3 + 3];
            (s[0], s[1], s[2])
        }
    }

    impl PixelSource for image::RgbaImage {
        fn width(&self) -> u32 {
            image::RgbaImage::width(self)
        }

        fn height(&self) -> u32 {
            image::RgbaImage::height(self)
        }

        fn rgb(&self, index: usize) -> (u8, u8, u8) {
            let s = &self.as_raw()[index * 4..index * 4 + 3];
            (s[0], s[1], s[2])
        }

        fn alpha(&self, index: usize) -> u8 {
            self.as_raw()[index * 4 + 3]
        }
    }
}
