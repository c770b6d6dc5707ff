//! Hue rotation used to recover attenuated red
//!
//! Underwater, red light is absorbed first. Rotating the hue of a color by
//! an angle `h` moves energy from green and blue back into red. The rotation
//! is the fixed matrix
//!
//! ```text
//! r' = (0.299 + 0.701·u + 0.168·w) · r
//! g' = (0.587 − 0.587·u + 0.330·w) · g
//! b' = (0.114 − 0.114·u − 0.497·w) · b
//! ```
//!
//! with `u = cos(h)` and `w = sin(h)`, `h` in degrees. Each output channel
//! only scales its own input; the filter later sums the three to obtain the
//! recovered red value.

use divecolor_core::{DoubleColor, IntColor, color};
use std::f64::consts::PI;

/// Hue rotation by a fixed integer angle.
///
/// Holds the three per-channel multipliers so a full-image pass computes the
/// trigonometry once instead of per pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HueRotation {
    angle: i32,
    coefficients: [f64; 3],
}

impl HueRotation {
    /// Rotation by `angle` degrees.
    pub fn new(angle: i32) -> Self {
        let u = (angle as f64 * PI / 180.0).cos();
        let w = (angle as f64 * PI / 180.0).sin();
        Self {
            angle,
            coefficients: [
                0.299 + 0.701 * u + 0.168 * w,
                0.587 - 0.587 * u + 0.330 * w,
                0.114 - 0.114 * u - 0.497 * w,
            ],
        }
    }

    /// Angle in degrees.
    pub fn angle(&self) -> i32 {
        self.angle
    }

    /// Rotate a real-valued triple.
    #[inline]
    pub fn apply(&self, rgb: DoubleColor) -> DoubleColor {
        let [kr, kg, kb] = self.coefficients;
        DoubleColor::new(kr * rgb.r, kg * rgb.g, kb * rgb.b)
    }

    /// Rotate an integer triple, truncating each component toward zero.
    #[inline]
    pub fn apply_int(&self, rgb: IntColor) -> IntColor {
        let [kr, kg, kb] = self.coefficients;
        IntColor::new(
            (kr * rgb.r as f64) as i32,
            (kg * rgb.g as f64) as i32,
            (kb * rgb.b as f64) as i32,
        )
    }

    /// Red value recovered from `rgb`, clamped to `[0, 255]`.
    #[inline]
    pub fn shifted_red(&self, rgb: IntColor) -> u8 {
        color::clip_channel(self.apply_int(rgb).sum())
    }
}

/// Hue-shift a real-valued triple by `angle` degrees.
pub fn hue_shift(rgb: DoubleColor, angle: i32) -> DoubleColor {
    HueRotation::new(angle).apply(rgb)
}

/// Hue-shift an integer triple by `angle` degrees.
///
/// Each component is truncated toward zero after the multiply. The result is
/// not clamped and may be negative.
pub fn hue_shift_int(rgb: IntColor, angle: i32) -> IntColor {
    HueRotation::new(angle).apply_int(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_angle_is_identity_real() {
        let c = DoubleColor::new(12.5, 200.0, 33.25);
        let s = hue_shift(c, 0);
        assert_eq!(s.r, c.r);
        assert_eq!(s.g, 0.0);
        assert_eq!(s.b, 0.0);
    }

    #[test]
    fn test_zero_angle_is_identity_int() {
        for v in 0..=255 {
            let s = hue_shift_int(IntColor::new(v, v, v), 0);
            assert_eq!(s, IntColor::new(v, 0, 0));
            assert_eq!(s.sum(), v);
        }
    }

    #[test]
    fn test_unit_vector_at_zero() {
        let s = hue_shift(DoubleColor::UNIT, 0);
        assert_eq!(s, DoubleColor::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_unit_vector_at_ninety() {
        // u = cos(90°) ≈ 0, w = 1
        let s = hue_shift(DoubleColor::UNIT, 90);
        assert!((s.r - 0.467).abs() < 1e-9);
        assert!((s.g - 0.917).abs() < 1e-9);
        assert!((s.b - (-0.383)).abs() < 1e-9);
    }

    #[test]
    fn test_int_truncates_toward_zero() {
        // Blue coefficient is negative at 90°: 0.114 - 0.497 = -0.383
        let s = hue_shift_int(IntColor::new(0, 0, 10), 90);
        assert_eq!(s.b, -3);
        let s = hue_shift_int(IntColor::new(10, 10, 0), 90);
        assert_eq!(s.r, 4);
        assert_eq!(s.g, 9);
    }

    #[test]
    fn test_int_matches_real_truncated() {
        let c = IntColor::new(17, 140, 180);
        let i = hue_shift_int(c, 94);
        let d = hue_shift(DoubleColor::from(c), 94);
        assert_eq!(i.r, d.r as i32);
        assert_eq!(i.g, d.g as i32);
        assert_eq!(i.b, d.b as i32);
    }

    #[test]
    fn test_shifted_red_clamped() {
        assert_eq!(HueRotation::new(121).shifted_red(IntColor::new(0, 0, 255)), 0);
        let identity = HueRotation::new(0);
        assert_eq!(identity.shifted_red(IntColor::new(255, 255, 255)), 255);
        assert_eq!(identity.shifted_red(IntColor::new(128, 1, 1)), 128);
    }

    #[test]
    fn test_rotation_matches_free_functions() {
        let rot = HueRotation::new(77);
        let c = IntColor::new(40, 200, 220);
        assert_eq!(rot.angle(), 77);
        assert_eq!(rot.apply_int(c), hue_shift_int(c, 77));
        assert_eq!(rot.apply(DoubleColor::UNIT), hue_shift(DoubleColor::UNIT, 77));
    }
}
