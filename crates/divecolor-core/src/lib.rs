//! divecolor Core - Basic data structures for underwater color correction
//!
//! This crate provides the fundamental data structures used by the
//! divecolor filters:
//!
//! - [`Pix`] / [`PixMut`] - 32 bpp RGB(A) image container (immutable / mutable)
//! - [`PixelSource`] / [`RgbBuffer`] - read-only pixel access the filters consume
//! - [`IntColor`] / [`DoubleColor`] - channel triples in integer and real form
//! - [`Histogram`] - fixed-range integer frequency counter
//! - [`Interval`] - channel sub-range selected for contrast stretching
//!
//! # Features
//!
//! - `image`: implement [`PixelSource`] for `image::RgbImage` and
//!   `image::RgbaImage`

pub mod color;
pub mod error;
pub mod histogram;
pub mod interval;
pub mod pix;
pub mod source;

pub use color::{DoubleColor, IntColor};
pub use error::{Error, Result};
pub use histogram::Histogram;
pub use interval::Interval;
pub use pix::{Pix, PixMut};
pub use source::{PixelSource, RgbBuffer};
