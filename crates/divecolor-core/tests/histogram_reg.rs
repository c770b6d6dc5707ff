//! Channel histogram regression test
//!
//! Tests histogram counting over synthetic scenes:
//!   (1) totals equal the pixel count
//!   (2) ramp images fill every bucket evenly
//!   (3) out-of-domain values are rejected without counting

use divecolor_core::{Error, Histogram, IntColor, Interval, color};
use divecolor_test::{RegParams, checker, gradient_scene};

#[test]
fn histogram_reg_gradient() {
    let mut rp = RegParams::new("histogram_gradient");

    let pix = gradient_scene(256, 128, 42);
    let mut red = Histogram::channel();
    let mut blue = Histogram::channel();
    for &p in pix.data() {
        let c = IntColor::from_pixel(p);
        red.increment(c.r).expect("red in range");
        blue.increment(c.b).expect("blue in range");
    }

    rp.compare_values(32768.0, red.total() as f64, 0.0);
    rp.compare_values(32768.0, blue.total() as f64, 0.0);
    // Each red value appears once per row
    rp.compare_values(1.0, red.iter().all(|(_, n)| n == 128) as u8 as f64, 0.0);
    rp.compare_values(32768.0, blue.get(42).unwrap_or(0) as f64, 0.0);
    rp.compare_values(0.0, blue.get(41).unwrap_or(1) as f64, 0.0);

    assert!(rp.cleanup(), "histogram_gradient regression test failed");
}

#[test]
fn histogram_reg_checker() {
    let mut rp = RegParams::new("histogram_checker");

    let pix = checker(10, 10, 5, (255, 0, 0), (0, 255, 0));
    let mut green = Histogram::channel();
    for &p in pix.data() {
        green.increment(i32::from(color::green(p))).expect("green in range");
    }
    rp.compare_values(50.0, green.get(0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(50.0, green.get(255).unwrap_or(0) as f64, 0.0);

    // Wider domain keeps out-of-range hue-shifted values countable
    let mut wide = Histogram::new(-255, 510).expect("wide histogram");
    wide.increment(-100).expect("negative value");
    wide.increment(400).expect("large value");
    rp.compare_values(766.0, wide.len() as f64, 0.0);
    rp.compare_values(2.0, wide.total() as f64, 0.0);

    let err = green.increment(256);
    rp.compare_values(
        1.0,
        matches!(err, Err(Error::OutOfDomain { value: 256, .. })) as u8 as f64,
        0.0,
    );
    rp.compare_values(100.0, green.total() as f64, 0.0);

    // Intervals stay inside the channel range
    rp.compare_values(1.0, Interval::new(-1, 10).is_err() as u8 as f64, 0.0);
    rp.compare_values(255.0, Interval::default().diff() as f64, 0.0);

    assert!(rp.cleanup(), "histogram_checker regression test failed");
}
