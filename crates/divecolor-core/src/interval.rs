//! Channel value sub-range selected for contrast stretching.

use crate::color::MAX_CHANNEL;
use crate::error::{Error, Result};

/// Inclusive `[low, high]` range of 8-bit channel values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    low: i32,
    high: i32,
}

impl Interval {
    /// The whole channel range `[0, 255]`.
    pub const FULL: Interval = Interval {
        low: 0,
        high: MAX_CHANNEL,
    };

    /// Create an interval.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if either bound lies outside `[0, 255]`
    /// and [`Error::InvalidParameter`] if `low > high`.
    pub fn new(low: i32, high: i32) -> Result<Self> {
        for value in [low, high] {
            if !(0..=MAX_CHANNEL).contains(&value) {
                return Err(Error::OutOfDomain {
                    value,
                    from: 0,
                    to: MAX_CHANNEL,
                });
            }
        }
        if low > high {
            return Err(Error::InvalidParameter(format!(
                "interval low {low} exceeds high {high}"
            )));
        }
        Ok(Self { low, high })
    }

    /// Lower bound.
    #[inline]
    pub fn low(&self) -> i32 {
        self.low
    }

    /// Upper bound.
    #[inline]
    pub fn high(&self) -> i32 {
        self.high
    }

    /// Width `high - low`; zero for a single-value interval.
    #[inline]
    pub fn diff(&self) -> i32 {
        self.high - self.low
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::FULL
    }
}
