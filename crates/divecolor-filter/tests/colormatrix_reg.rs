//! Color matrix regression test
//!
//! Tests applying 4x5 color matrices to images:
//!   (1) identity reproduces the input for Pix and packed buffers
//!   (2) channel mixing and offsets on a checkerboard
//!   (3) alpha is carried through only for translucent sources

use divecolor_core::{Pix, RgbBuffer, color};
use divecolor_filter::{ColorMatrix, apply_color_matrix};
use divecolor_test::{RegParams, checker, gradient_scene};

fn pack_rgb(pix: &Pix) -> Vec<u8> {
    pix.data()
        .iter()
        .flat_map(|&p| {
            let (r, g, b) = color::extract_rgb(p);
            [r, g, b]
        })
        .collect()
}

#[test]
fn colormatrix_reg_identity() {
    let mut rp = RegParams::new("colormatrix_identity");

    let pix = gradient_scene(40, 30, 77);
    let out = apply_color_matrix(&pix, &ColorMatrix::IDENTITY).expect("identity on pix");
    rp.compare_pix(&pix, &out);

    // Same result through a packed RGB buffer
    let bytes = pack_rgb(&pix);
    let buf = RgbBuffer::from_rgb(40, 30, &bytes).expect("rgb buffer");
    let out2 = apply_color_matrix(&buf, &ColorMatrix::IDENTITY).expect("identity on buffer");
    rp.compare_pix(&out, &out2);
    rp.compare_strings(&bytes, &pack_rgb(&out2));

    assert!(rp.cleanup(), "colormatrix_identity regression test failed");
}

#[test]
fn colormatrix_reg_mixing() {
    let mut rp = RegParams::new("colormatrix_mixing");

    let pix = checker(8, 8, 2, (200, 100, 50), (10, 20, 30));

    // Grayscale by channel average, written to all three outputs
    let third = 1.0 / 3.0;
    let gray = ColorMatrix::new([
        third, third, third, 0.0, 0.0, //
        third, third, third, 0.0, 0.0, //
        third, third, third, 0.0, 0.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);
    let out = apply_color_matrix(&pix, &gray).expect("gray");
    rp.compare_values(1.0, (out.get_rgb(0, 0) == Some((117, 117, 117))) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_rgb(2, 0) == Some((20, 20, 20))) as u8 as f64, 0.0);

    // Invert: 255 - c
    let invert = ColorMatrix::new([
        -1.0, 0.0, 0.0, 0.0, 1.0, //
        0.0, -1.0, 0.0, 0.0, 1.0, //
        0.0, 0.0, -1.0, 0.0, 1.0, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);
    let out = apply_color_matrix(&pix, &invert).expect("invert");
    rp.compare_values(1.0, (out.get_rgb(0, 0) == Some((55, 155, 205))) as u8 as f64, 0.0);
    let back = apply_color_matrix(&out, &invert).expect("invert twice");
    rp.compare_pix(&pix, &back);

    assert!(rp.cleanup(), "colormatrix_mixing regression test failed");
}

#[test]
fn colormatrix_reg_alpha() {
    let mut rp = RegParams::new("colormatrix_alpha");

    let bytes = [10u8, 20, 30, 255, 40, 50, 60, 128];
    let buf = RgbBuffer::from_rgba(2, 1, &bytes).expect("rgba buffer");

    let out = apply_color_matrix(&buf, &ColorMatrix::IDENTITY).expect("identity");
    rp.compare_values(4.0, out.spp() as f64, 0.0);
    rp.compare_values(
        1.0,
        (out.get_rgba(1, 0) == Some((40, 50, 60, 128))) as u8 as f64,
        0.0,
    );

    // Halve alpha through row 3
    let fade = ColorMatrix::new([
        1.0, 0.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 0.0, 0.5, 0.0,
    ]);
    let out = apply_color_matrix(&buf, &fade).expect("fade");
    rp.compare_values(1.0, (out.get_rgba(0, 0) == Some((10, 20, 30, 128))) as u8 as f64, 0.0);
    rp.compare_values(1.0, (out.get_rgba(1, 0) == Some((40, 50, 60, 64))) as u8 as f64, 0.0);

    // Opaque RGBA input stays spp = 3
    let opaque = [1u8, 2, 3, 255];
    let buf = RgbBuffer::from_rgba(1, 1, &opaque).expect("opaque buffer");
    let out = apply_color_matrix(&buf, &ColorMatrix::IDENTITY).expect("opaque");
    rp.compare_values(3.0, out.spp() as f64, 0.0);

    assert!(rp.cleanup(), "colormatrix_alpha regression test failed");
}
