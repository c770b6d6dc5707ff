//! Color channel helpers and channel-triple value types.
//!
//! # Pixel format
//!
//! 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
//!
//! [`IntColor`] and [`DoubleColor`] hold one channel triple (alpha excluded)
//! in the integer and real domains respectively. Neither clamps its
//! components: a hue-shifted triple may leave `[0, 255]`, and callers clamp
//! where a valid channel value is required.

/// Red channel (MSB, byte 0)
pub const RED: usize = 0;
/// Green channel (byte 1)
pub const GREEN: usize = 1;
/// Blue channel (byte 2)
pub const BLUE: usize = 2;
/// Alpha channel (LSB, byte 3)
pub const ALPHA: usize = 3;

/// Shift amounts for extracting color channels
pub const RED_SHIFT: u32 = 24;
pub const GREEN_SHIFT: u32 = 16;
pub const BLUE_SHIFT: u32 = 8;
pub const ALPHA_SHIFT: u32 = 0;

/// Largest valid 8-bit channel value.
pub const MAX_CHANNEL: i32 = 255;

/// Extract red component from a 32-bit pixel.
#[inline]
pub fn red(pixel: u32) -> u8 {
    ((pixel >> RED_SHIFT) & 0xff) as u8
}

/// Extract green component from a 32-bit pixel.
#[inline]
pub fn green(pixel: u32) -> u8 {
    ((pixel >> GREEN_SHIFT) & 0xff) as u8
}

/// Extract blue component from a 32-bit pixel.
#[inline]
pub fn blue(pixel: u32) -> u8 {
    ((pixel >> BLUE_SHIFT) & 0xff) as u8
}

/// Extract alpha component from a 32-bit pixel.
#[inline]
pub fn alpha(pixel: u32) -> u8 {
    ((pixel >> ALPHA_SHIFT) & 0xff) as u8
}

/// Compose a 32-bit RGB pixel (alpha = 255).
#[inline]
pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
    compose_rgba(r, g, b, 255)
}

/// Compose a 32-bit RGBA pixel.
#[inline]
pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((r as u32) << RED_SHIFT)
        | ((g as u32) << GREEN_SHIFT)
        | ((b as u32) << BLUE_SHIFT)
        | ((a as u32) << ALPHA_SHIFT)
}

/// Extract RGB values from a 32-bit pixel.
#[inline]
pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel))
}

/// Extract RGBA values from a 32-bit pixel.
#[inline]
pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
    (red(pixel), green(pixel), blue(pixel), alpha(pixel))
}

/// Clamp an integer channel value into `[0, 255]`.
#[inline]
pub fn clip_channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL) as u8
}

/// Channel triple in the integer domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IntColor {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl IntColor {
    /// Create a triple from its components.
    pub const fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    /// Decode the channel triple of a packed 32-bit pixel (alpha ignored).
    pub fn from_pixel(pixel: u32) -> Self {
        let (r, g, b) = extract_rgb(pixel);
        Self::from((r, g, b))
    }

    /// Sum of the three channels.
    pub fn sum(&self) -> i32 {
        self.r + self.g + self.b
    }
}

impl From<(u8, u8, u8)> for IntColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }
}

/// Channel triple in the real domain.
///
/// Used for the image average and for the unit basis vector that turns the
/// hue rotation into matrix coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleColor {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl DoubleColor {
    /// The `(1, 1, 1)` basis vector.
    pub const UNIT: DoubleColor = DoubleColor::new(1.0, 1.0, 1.0);

    /// Create a triple from its components.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels.
    pub fn sum(&self) -> f64 {
        self.r + self.g + self.b
    }

    /// Round each channel to the nearest integer, halves away from zero.
    pub fn round_to_int_color(&self) -> IntColor {
        IntColor::new(
            self.r.round() as i32,
            self.g.round() as i32,
            self.b.round() as i32,
        )
    }
}

impl From<IntColor> for DoubleColor {
    fn from(c: IntColor) -> Self {
        Self::new(c.r as f64, c.g as f64, c.b as f64)
    }
}
