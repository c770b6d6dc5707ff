//! Progress reporting for the full-image passes
//!
//! The estimator walks the image twice. Each pass owns a slice of `[0, 1]`
//! and reports `start + index * share / pixel_count` every `stride` pixels,
//! then the slice end. The reporter drops any value lower than the last one
//! it emitted, so the host always observes a non-decreasing sequence.

use tracing::trace;

/// Forwards progress fractions to the host callback.
pub(crate) struct ProgressReporter<'a> {
    sink: &'a mut dyn FnMut(f32),
    last: f32,
}

impl<'a> ProgressReporter<'a> {
    pub(crate) fn new(sink: &'a mut dyn FnMut(f32)) -> Self {
        Self {
            sink,
            last: f32::NEG_INFINITY,
        }
    }

    /// Emit `value` clamped to `[0, 1]`, unless it would go backwards.
    pub(crate) fn report(&mut self, value: f32) {
        let value = value.clamp(0.0, 1.0);
        if value < self.last {
            return;
        }
        self.last = value;
        (self.sink)(value);
    }

    /// Start a pass covering `[start, start + share]` over `total` pixels.
    pub(crate) fn pass(
        &mut self,
        name: &'static str,
        start: f32,
        share: f32,
        total: usize,
        stride: usize,
    ) -> PassProgress<'_, 'a> {
        let per_pixel = if total == 0 { 0.0 } else { share / total as f32 };
        PassProgress {
            reporter: self,
            name,
            start,
            share,
            per_pixel,
            stride: stride.max(1),
        }
    }
}

/// Progress of one full-image pass.
pub(crate) struct PassProgress<'r, 'a> {
    reporter: &'r mut ProgressReporter<'a>,
    name: &'static str,
    start: f32,
    share: f32,
    per_pixel: f32,
    stride: usize,
}

impl PassProgress<'_, '_> {
    /// Called for every pixel; reports only on stride boundaries.
    #[inline]
    pub(crate) fn tick(&mut self, index: usize) {
        if index % self.stride == 0 {
            let value = self.start + index as f32 * self.per_pixel;
            trace!(pass = self.name, progress = value, "pass progress");
            self.reporter.report(value);
        }
    }

    /// Report the end of the pass's slice.
    pub(crate) fn finish(self) {
        self.reporter.report(self.start + self.share);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_is_monotonic() {
        let mut seen = Vec::new();
        let mut sink = |v: f32| seen.push(v);
        let mut reporter = ProgressReporter::new(&mut sink);
        reporter.report(0.3);
        reporter.report(0.1);
        reporter.report(0.3);
        reporter.report(2.0);
        drop(reporter);
        assert_eq!(seen, vec![0.3, 0.3, 1.0]);
    }

    #[test]
    fn test_pass_reports_on_stride() {
        let mut seen = Vec::new();
        let mut sink = |v: f32| seen.push(v);
        let mut reporter = ProgressReporter::new(&mut sink);
        let mut pass = reporter.pass("test", 0.2, 0.5, 10, 4);
        for i in 0..10 {
            pass.tick(i);
        }
        pass.finish();
        drop(reporter);
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], 0.2);
        assert!((seen[1] - 0.4).abs() < 1e-6);
        assert!((seen[2] - 0.6).abs() < 1e-6);
        assert!((seen[3] - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_zero_stride_reports_every_pixel() {
        let mut count = 0;
        let mut sink = |_: f32| count += 1;
        let mut reporter = ProgressReporter::new(&mut sink);
        let mut pass = reporter.pass("test", 0.0, 1.0, 3, 0);
        for i in 0..3 {
            pass.tick(i);
        }
        drop(reporter);
        assert_eq!(count, 3);
    }
}
