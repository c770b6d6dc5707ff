//! Synthetic test scenes
//!
//! All builders are deterministic so regression values stay stable.

use divecolor_core::{Pix, color};

type Rgb = (u8, u8, u8);

fn build(width: u32, height: u32, f: impl Fn(u32, u32) -> Rgb) -> Pix {
    let mut pm = Pix::new(width, height)
        .expect("fixture dimensions must be non-zero")
        .try_into_mut()
        .unwrap();
    for y in 0..height {
        for (x, word) in pm.row_data_mut(y).iter_mut().enumerate() {
            let (r, g, b) = f(x as u32, y);
            *word = color::compose_rgb(r, g, b);
        }
    }
    pm.into()
}

/// Image filled with a single color.
pub fn uniform(width: u32, height: u32, rgb: Rgb) -> Pix {
    build(width, height, |_, _| rgb)
}

/// Checkerboard of `cell`-sized squares alternating `a` and `b`.
pub fn checker(width: u32, height: u32, cell: u32, a: Rgb, b: Rgb) -> Pix {
    let cell = cell.max(1);
    build(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 { a } else { b }
    })
}

/// Horizontal ramp of red, vertical ramp of green, constant blue.
///
/// Every red and green value in `[0, 255]` appears when the image is at
/// least 256x256.
pub fn gradient_scene(width: u32, height: u32, blue: u8) -> Pix {
    let w = width.saturating_sub(1).max(1);
    let h = height.saturating_sub(1).max(1);
    build(width, height, |x, y| {
        ((x * 255 / w) as u8, (y * 255 / h) as u8, blue)
    })
}

/// Blue-green scene with weak red, as a camera records it underwater.
///
/// Red stays in `[8, 40]`, green in `[90, 170]` and blue in `[130, 210]`,
/// with a smooth vertical falloff and a small deterministic texture.
pub fn underwater_scene(width: u32, height: u32) -> Pix {
    let h = height.max(1);
    build(width, height, |x, y| {
        let noise = hash(x, y) % 17;
        let depth = y * 64 / h;
        let r = 8 + noise * 2;
        let g = 90 + 64 - depth + noise;
        let b = 130 + depth + noise;
        (r as u8, g as u8, b as u8)
    })
}

/// Pseudo-random colors, fixed by `seed`.
///
/// Every channel may take any value in `[0, 255]`.
pub fn noise_scene(width: u32, height: u32, seed: u32) -> Pix {
    let salt = seed.wrapping_mul(0x27d4_eb2d);
    build(width, height, |x, y| {
        let v = hash(x.wrapping_add(salt), y ^ seed);
        (v as u8, (v >> 8) as u8, (v >> 16) as u8)
    })
}

fn hash(x: u32, y: u32) -> u32 {
    let mut v = x.wrapping_mul(0x9e37_79b9) ^ y.wrapping_mul(0x85eb_ca6b);
    v ^= v >> 15;
    v = v.wrapping_mul(0x2c1b_3c6d);
    v ^ (v >> 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform() {
        let pix = uniform(4, 3, (9, 8, 7));
        assert!(pix.data().iter().all(|&p| color::extract_rgb(p) == (9, 8, 7)));
    }

    #[test]
    fn test_checker() {
        let pix = checker(4, 4, 2, (255, 0, 0), (0, 0, 255));
        assert_eq!(pix.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(pix.get_rgb(2, 0), Some((0, 0, 255)));
        assert_eq!(pix.get_rgb(2, 2), Some((255, 0, 0)));
    }

    #[test]
    fn test_gradient_covers_range() {
        let pix = gradient_scene(256, 256, 100);
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 100)));
        assert_eq!(pix.get_rgb(255, 255), Some((255, 255, 100)));
        assert_eq!(pix.get_rgb(128, 64), Some((128, 64, 100)));
    }

    #[test]
    fn test_noise_scene_depends_on_seed() {
        let a = noise_scene(16, 16, 1);
        assert_eq!(a.data(), noise_scene(16, 16, 1).data());
        assert_ne!(a.data(), noise_scene(16, 16, 2).data());
    }

    #[test]
    fn test_underwater_scene_ranges() {
        let pix = underwater_scene(64, 64);
        for &p in pix.data() {
            let (r, g, b) = color::extract_rgb(p);
            assert!((8..=40).contains(&r));
            assert!((90..=170).contains(&g));
            assert!((130..=210).contains(&b));
        }
    }
}
