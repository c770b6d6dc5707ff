//! Automatic underwater color correction
//!
//! Estimates a [`ColorMatrix`] that restores the colors of a photograph taken
//! underwater, where red is absorbed first and the image drifts to blue-green.
//!
//! # Algorithm
//!
//! 1. **Average color**: one pass over the image computes the mean of each
//!    channel.
//! 2. **Hue angle**: the hue of the average color is rotated one degree at a
//!    time until its recovered red value reaches `min_avg_red`, giving up
//!    after `max_hue_shift` degrees.
//! 3. **Histograms**: a second pass counts the recovered red value of every
//!    pixel, plus the untouched green and blue values.
//! 4. **Normalization**: for each channel the widest run of sparse histogram
//!    values (count near or below `pixel_count / threshold_ratio`) is found;
//!    its ends become the interval stretched to the full range.
//! 5. **Matrix**: per-channel gains and offsets are combined with the hue
//!    rotation into a 4x5 affine color matrix.
//!
//! The result is applied with [`apply_color_matrix`](crate::apply_color_matrix).
//!
//! # Examples
//!
//! ```
//! use divecolor_core::{Pix, color};
//! use divecolor_filter::{UnderwaterOptions, underwater_filter};
//!
//! let mut pm = Pix::new(8, 8).unwrap().try_into_mut().unwrap();
//! for y in 0..8 {
//!     for x in 0..8 {
//!         pm.set_pixel_unchecked(x, y, color::compose_rgb(20, 110 + x as u8, 150 + y as u8));
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let mut last = 0.0;
//! let matrix = underwater_filter(&pix, &UnderwaterOptions::default(), &mut |p| last = p).unwrap();
//! assert_eq!(last, 1.0);
//! assert_eq!(matrix.row(3), Some(&[0.0, 0.0, 0.0, 1.0, 0.0][..]));
//! ```

use crate::hue::{HueRotation, hue_shift};
use crate::matrix::{ColorMatrix, apply_color_matrix};
use crate::progress::ProgressReporter;
use crate::{FilterError, FilterResult};
use divecolor_core::{DoubleColor, Histogram, IntColor, Interval, Pix, PixelSource};
use tracing::{debug, instrument, warn};

/// Options for underwater color correction
#[derive(Debug, Clone, PartialEq)]
pub struct UnderwaterOptions {
    /// Density threshold divisor: a histogram value counts as sparse when
    /// its count is below `pixel_count / threshold_ratio + 2`
    pub threshold_ratio: u32,
    /// Recovered red level the average color must reach (0-255 scale)
    pub min_avg_red: f64,
    /// Largest hue angle in degrees tried by the search
    pub max_hue_shift: i32,
    /// Extra weight of blue in the red output row
    pub blue_magic_value: f32,
    /// Gain that stretches a full-width interval to the channel range
    pub full_gain: f32,
    /// Pixels between two progress reports
    pub progress_stride: usize,
    /// Share of total progress taken by the average-color pass
    pub average_progress_share: f32,
    /// Share of total progress taken by the histogram pass
    pub histogram_progress_share: f32,
}

impl Default for UnderwaterOptions {
    fn default() -> Self {
        Self {
            threshold_ratio: 2000,
            min_avg_red: 60.0,
            max_hue_shift: 120,
            blue_magic_value: 1.2,
            full_gain: 256.0,
            progress_stride: 100_000,
            average_progress_share: 0.2,
            // leaves a gap so 1.0 is only sent once the matrix exists
            histogram_progress_share: 0.75,
        }
    }
}

impl UnderwaterOptions {
    /// Check that every option is usable.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] naming the first bad field.
    pub fn validate(&self) -> FilterResult<()> {
        if self.threshold_ratio == 0 {
            return Err(FilterError::InvalidParameters(
                "threshold_ratio must be >= 1".into(),
            ));
        }
        if !self.min_avg_red.is_finite() {
            return Err(FilterError::InvalidParameters(
                "min_avg_red must be finite".into(),
            ));
        }
        if self.max_hue_shift < 0 {
            return Err(FilterError::InvalidParameters(
                "max_hue_shift must be >= 0".into(),
            ));
        }
        if !self.blue_magic_value.is_finite() {
            return Err(FilterError::InvalidParameters(
                "blue_magic_value must be finite".into(),
            ));
        }
        if !(self.full_gain.is_finite() && self.full_gain > 0.0) {
            return Err(FilterError::InvalidParameters(
                "full_gain must be > 0.0".into(),
            ));
        }
        if self.progress_stride == 0 {
            return Err(FilterError::InvalidParameters(
                "progress_stride must be >= 1".into(),
            ));
        }
        for (name, share) in [
            ("average_progress_share", self.average_progress_share),
            ("histogram_progress_share", self.histogram_progress_share),
        ] {
            if !(0.0..=1.0).contains(&share) {
                return Err(FilterError::InvalidParameters(format!(
                    "{name} must be in [0.0, 1.0]"
                )));
            }
        }
        if self.average_progress_share + self.histogram_progress_share > 1.0 {
            return Err(FilterError::InvalidParameters(
                "progress shares must not exceed 1.0 in total".into(),
            ));
        }
        Ok(())
    }
}

/// Outcome of the hue-angle search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HueShiftSearch {
    /// Angle in degrees used for the rest of the correction
    pub angle: i32,
    /// Whether the search stopped at `max_hue_shift` without reaching
    /// `min_avg_red`
    pub capped: bool,
}

/// Per-channel histograms built by the second pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelHistograms {
    /// Recovered (hue-shifted) red values, clamped to [0, 255]
    pub red: Histogram,
    /// Green values
    pub green: Histogram,
    /// Blue values
    pub blue: Histogram,
}

/// Per-channel normalization intervals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelIntervals {
    pub red: Interval,
    pub green: Interval,
    pub blue: Interval,
}

// =============================================================================
// Pass 1: average color
// =============================================================================

/// Compute the mean of each channel over the whole image.
///
/// Reports progress over `[0, average_progress_share]`.
///
/// # Errors
///
/// Returns [`FilterError::EmptyImage`] if the source has no pixels.
pub fn average_color<S: PixelSource + ?Sized>(
    src: &S,
    options: &UnderwaterOptions,
    progress: &mut dyn FnMut(f32),
) -> FilterResult<DoubleColor> {
    options.validate()?;
    let mut reporter = ProgressReporter::new(progress);
    average_pass(src, options, &mut reporter)
}

fn average_pass<S: PixelSource + ?Sized>(
    src: &S,
    options: &UnderwaterOptions,
    reporter: &mut ProgressReporter<'_>,
) -> FilterResult<DoubleColor> {
    let total = src.pixel_count();
    if total == 0 {
        return Err(FilterError::EmptyImage);
    }

    let mut pass = reporter.pass(
        "average",
        0.0,
        options.average_progress_share,
        total,
        options.progress_stride,
    );
    let (mut r, mut g, mut b) = (0u64, 0u64, 0u64);
    for i in 0..total {
        pass.tick(i);
        let (pr, pg, pb) = src.rgb(i);
        r += u64::from(pr);
        g += u64::from(pg);
        b += u64::from(pb);
    }
    pass.finish();

    let total = total as f64;
    let average = DoubleColor::new(r as f64 / total, g as f64 / total, b as f64 / total);
    debug!(r = average.r, g = average.g, b = average.b, "average color");
    Ok(average)
}

// =============================================================================
// Hue angle search
// =============================================================================

/// Find the hue angle that lifts the red of `average` to `min_avg_red`.
///
/// Linear scan: while the running red value is below the threshold it is
/// recomputed as `hue_shift(average, angle).sum()` and `angle` advances by
/// one degree. The returned angle is therefore one past the first angle that
/// reached the threshold, or 0 when the unshifted red already does. Once the
/// angle exceeds `max_hue_shift` the scan stops with `capped` set.
pub fn hue_shift_angle(average: DoubleColor, options: &UnderwaterOptions) -> HueShiftSearch {
    let mut angle = 0;
    let mut red = average.r;
    while red < options.min_avg_red {
        red = hue_shift(average, angle).sum();
        angle += 1;
        if angle > options.max_hue_shift {
            let capped = red < options.min_avg_red;
            if capped {
                warn!(
                    angle,
                    red, "hue search reached its cap without restoring red"
                );
            }
            return HueShiftSearch { angle, capped };
        }
    }
    debug!(angle, red, "hue shift angle");
    HueShiftSearch {
        angle,
        capped: false,
    }
}

// =============================================================================
// Pass 2: histograms
// =============================================================================

/// Build the red (hue-shifted by `angle`), green and blue histograms.
///
/// Reports progress over the slice following the average-color pass, so a
/// host that calls both passes sees one non-decreasing sequence.
///
/// # Errors
///
/// Returns [`FilterError::EmptyImage`] if the source has no pixels.
pub fn channel_histograms<S: PixelSource + ?Sized>(
    src: &S,
    angle: i32,
    options: &UnderwaterOptions,
    progress: &mut dyn FnMut(f32),
) -> FilterResult<ChannelHistograms> {
    options.validate()?;
    let mut reporter = ProgressReporter::new(progress);
    histogram_pass(src, angle, options, &mut reporter)
}

fn histogram_pass<S: PixelSource + ?Sized>(
    src: &S,
    angle: i32,
    options: &UnderwaterOptions,
    reporter: &mut ProgressReporter<'_>,
) -> FilterResult<ChannelHistograms> {
    let total = src.pixel_count();
    if total == 0 {
        return Err(FilterError::EmptyImage);
    }

    let rotation = HueRotation::new(angle);
    let mut red = Histogram::channel();
    let mut green = Histogram::channel();
    let mut blue = Histogram::channel();

    let mut pass = reporter.pass(
        "histogram",
        options.average_progress_share,
        options.histogram_progress_share,
        total,
        options.progress_stride,
    );
    for i in 0..total {
        pass.tick(i);
        let color = IntColor::from(src.rgb(i));
        red.increment(i32::from(rotation.shifted_red(color)))?;
        green.increment(color.g)?;
        blue.increment(color.b)?;
    }
    pass.finish();

    Ok(ChannelHistograms { red, green, blue })
}

// =============================================================================
// Normalization intervals
// =============================================================================

/// Density threshold for the normalization search: `pixel_count / threshold_ratio`.
pub fn density_threshold(pixel_count: usize, options: &UnderwaterOptions) -> i64 {
    (pixel_count / options.threshold_ratio.max(1) as usize) as i64
}

/// Find the interval of `histogram` to stretch to the full channel range.
///
/// Collects 0, every value whose count minus `threshold` is below 2, and 255,
/// then returns the widest gap between consecutive entries (see
/// [`widest_gap`]).
///
/// # Errors
///
/// Returns [`FilterError::Core`] if the histogram domain reaches outside
/// `[0, 255]` and the widest gap ends there.
pub fn normalizing_interval(histogram: &Histogram, threshold: i64) -> FilterResult<Interval> {
    let mut sparse = Vec::with_capacity(histogram.len() + 2);
    sparse.push(0);
    sparse.extend(
        histogram
            .iter()
            .filter(|&(_, count)| i64::from(count) - threshold < 2)
            .map(|(value, _)| value),
    );
    sparse.push(255);
    widest_gap(&sparse)
}

/// Return the consecutive pair of `values` with the largest positive
/// difference.
///
/// Ties keep the first pair. With no positive difference the full range
/// `[0, 255]` is returned.
///
/// # Errors
///
/// Returns [`FilterError::Core`] if the selected pair is not a valid
/// [`Interval`].
pub fn widest_gap(values: &[i32]) -> FilterResult<Interval> {
    let mut best = Interval::FULL;
    let mut max_dist = 0;
    for pair in values.windows(2) {
        let dist = pair[1] - pair[0];
        if dist > max_dist {
            max_dist = dist;
            best = Interval::new(pair[0], pair[1])?;
        }
    }
    Ok(best)
}

// =============================================================================
// Matrix assembly
// =============================================================================

/// Assemble the correction matrix from the channel intervals and hue angle.
///
/// ```text
/// gain_c   = full_gain / interval_c.diff()
/// offset_c = (-interval_c.low / full_gain) * gain_c
/// shifted  = hue_shift((1, 1, 1), angle)
///
/// [ shifted.r·gainR  shifted.g·gainR  shifted.b·gainR·blue  0  offsetR ]
/// [ 0                gainG            0                     0  offsetG ]
/// [ 0                0                gainB                 0  offsetB ]
/// [ 0                0                0                     1  0       ]
/// ```
///
/// # Errors
///
/// Returns [`FilterError::DegenerateInterval`] if any interval has zero width.
pub fn underwater_color_matrix(
    intervals: &ChannelIntervals,
    angle: i32,
    options: &UnderwaterOptions,
) -> FilterResult<ColorMatrix> {
    let full_gain = options.full_gain;
    let gain_and_offset = |channel: &'static str, iv: &Interval| -> FilterResult<(f32, f32)> {
        if iv.diff() == 0 {
            return Err(FilterError::DegenerateInterval {
                channel,
                value: iv.low(),
            });
        }
        let gain = full_gain / iv.diff() as f32;
        let offset = (-iv.low() as f32 / full_gain) * gain;
        Ok((gain, offset))
    };
    let (red_gain, red_offset) = gain_and_offset("red", &intervals.red)?;
    let (green_gain, green_offset) = gain_and_offset("green", &intervals.green)?;
    let (blue_gain, blue_offset) = gain_and_offset("blue", &intervals.blue)?;

    let shifted = hue_shift(DoubleColor::UNIT, angle);
    let red_from_red = shifted.r as f32 * red_gain;
    let red_from_green = shifted.g as f32 * red_gain;
    let red_from_blue = shifted.b as f32 * red_gain * options.blue_magic_value;

    Ok(ColorMatrix::new([
        red_from_red, red_from_green, red_from_blue, 0.0, red_offset, //
        0.0, green_gain, 0.0, 0.0, green_offset, //
        0.0, 0.0, blue_gain, 0.0, blue_offset, //
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]))
}

// =============================================================================
// Estimator
// =============================================================================

/// Estimate the underwater correction matrix for an image.
///
/// Emits 0.0, progress through both passes, and 1.0 once the matrix is
/// assembled.
///
/// # Errors
///
/// - [`FilterError::InvalidParameters`] for unusable options
/// - [`FilterError::EmptyImage`] if the source has no pixels
/// - [`FilterError::DegenerateInterval`] if a channel interval has zero width
#[instrument(skip(src, progress), fields(width = src.width(), height = src.height()))]
pub fn underwater_filter<S: PixelSource + ?Sized>(
    src: &S,
    options: &UnderwaterOptions,
    progress: &mut dyn FnMut(f32),
) -> FilterResult<ColorMatrix> {
    options.validate()?;
    let total = src.pixel_count();
    if total == 0 {
        return Err(FilterError::EmptyImage);
    }

    let mut reporter = ProgressReporter::new(progress);
    reporter.report(0.0);

    let average = average_pass(src, options, &mut reporter)?;
    let search = hue_shift_angle(average, options);
    let histograms = histogram_pass(src, search.angle, options, &mut reporter)?;

    let threshold = density_threshold(total, options);
    let intervals = ChannelIntervals {
        red: normalizing_interval(&histograms.red, threshold)?,
        green: normalizing_interval(&histograms.green, threshold)?,
        blue: normalizing_interval(&histograms.blue, threshold)?,
    };
    debug!(
        threshold,
        red = ?intervals.red,
        green = ?intervals.green,
        blue = ?intervals.blue,
        "normalization intervals"
    );

    let matrix = underwater_color_matrix(&intervals, search.angle, options)?;
    reporter.report(1.0);
    Ok(matrix)
}

/// Estimate the correction matrix with default options and no progress.
pub fn underwater_matrix<S: PixelSource + ?Sized>(src: &S) -> FilterResult<ColorMatrix> {
    underwater_filter(src, &UnderwaterOptions::default(), &mut |_| {})
}

/// Estimate and apply the underwater correction in one call.
pub fn underwater_correct(pix: &Pix) -> FilterResult<Pix> {
    let matrix = underwater_matrix(pix)?;
    apply_color_matrix(pix, &matrix)
}
