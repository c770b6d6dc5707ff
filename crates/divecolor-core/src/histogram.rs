//! Fixed-range integer frequency counter.
//!
//! A [`Histogram`] counts occurrences of each integer in an inclusive domain
//! `[from, to]`. The underwater filter builds one per color channel over
//! `[0, 255]`; values outside the domain are rejected, never wrapped, so
//! callers clamp before counting.

use crate::error::{Error, Result};

/// Frequency distribution of one channel over an inclusive integer range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    from: i32,
    to: i32,
    counts: Vec<u32>,
}

impl Histogram {
    /// Create an empty histogram over `[from, to]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `from > to`.
    pub fn new(from: i32, to: i32) -> Result<Self> {
        if from > to {
            return Err(Error::InvalidParameter(format!(
                "histogram range [{from}, {to}] is empty"
            )));
        }
        let len = (i64::from(to) - i64::from(from) + 1) as usize;
        Ok(Self {
            from,
            to,
            counts: vec![0; len],
        })
    }

    /// Create an empty histogram over the 8-bit channel range `[0, 255]`.
    pub fn channel() -> Self {
        Self {
            from: 0,
            to: 255,
            counts: vec![0; 256],
        }
    }

    /// Lower bound of the domain (inclusive).
    #[inline]
    pub fn from(&self) -> i32 {
        self.from
    }

    /// Upper bound of the domain (inclusive).
    #[inline]
    pub fn to(&self) -> i32 {
        self.to
    }

    /// Number of buckets.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Always false: the domain holds at least one value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for `value`, or `None` if it lies outside the domain.
    pub fn get(&self, value: i32) -> Option<u32> {
        self.bucket(value).map(|i| self.counts[i])
    }

    /// Add one to the bucket for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfDomain`] if `value` lies outside `[from, to]`.
    pub fn increment(&mut self, value: i32) -> Result<()> {
        let i = self.bucket(value).ok_or(Error::OutOfDomain {
            value,
            from: self.from,
            to: self.to,
        })?;
        self.counts[i] += 1;
        Ok(())
    }

    /// Total number of counted values.
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| u64::from(c)).sum()
    }

    /// Iterate over `(value, count)` pairs in ascending value order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        (self.from..=self.to).zip(self.counts.iter().copied())
    }

    fn bucket(&self, value: i32) -> Option<usize> {
        if value < self.from || value > self.to {
            return None;
        }
        Some((i64::from(value) - i64::from(self.from)) as usize)
    }
}
