//! divecolor-filter - Underwater color correction
//!
//! This crate estimates and applies the color correction for photographs
//! taken underwater:
//!
//! - Hue rotation that recovers attenuated red
//! - Two-pass statistics (average color, per-channel histograms)
//! - Normalization interval search over sparse histogram values
//! - 4x5 affine color matrix assembly and application
//! - Monotonic progress reporting for long passes

pub mod hue;
pub mod matrix;
mod error;
mod progress;
pub mod underwater;

pub use error::{FilterError, FilterResult};
pub use matrix::ColorMatrix;

// Re-export commonly used functions
pub use hue::{HueRotation, hue_shift, hue_shift_int};
pub use matrix::apply_color_matrix;
pub use underwater::{
    ChannelHistograms, ChannelIntervals, HueShiftSearch, UnderwaterOptions, average_color,
    channel_histograms, density_threshold, hue_shift_angle, normalizing_interval,
    underwater_color_matrix, underwater_correct, underwater_filter, underwater_matrix, widest_gap,
};
