//! Adaptive-Width Sliding-Window Minimum Extraction
//!
//! ## Overview
//!
//! The pressure floor of a pulsatile signal shows up as sparse local minima
//! buried in noise. This module extracts, for every start index of the
//! compensated series, a representative "floor" value: the mean of the few
//! smallest samples in a window anchored at that index.
//!
//! ## Why an adaptive width?
//!
//! A fixed window has two failure modes on noisy readings:
//!
//! - too short, and it may contain too few genuinely low points for a
//!   stable floor estimate;
//! - too long, and irrelevant samples from neighboring cycles dilute it.
//!
//! Instead of tuning a width per recording, each window grows from a base
//! length until enough of its own samples qualify as "very low" - at or
//! below a configured percentile *of the window itself*. The stopping
//! condition is self-calibrating: dense floors settle at the base length,
//! sparse ones stretch, and the growth cap plus the array end guarantee
//! termination.
//!
//! ```text
//! start                                  growth ->
//!   |----- base -----|
//!   |----- base -----|-- grow --|
//!   |----- base -----|-- grow --|-- grow --|   <= max_len, <= array end
//! ```
//!
//! ## Fallback
//!
//! When a window can no longer grow (capped by `max_len` and the array
//! end) and still lacks `bottom_n` very-low points, the scan settles for
//! the mean of however many smallest samples it has - `min(bottom_n, len)`
//! of them. The mean over an empty selection is "no value", reported as
//! `None` and omitted from the series, never as an error.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    constants::scan::{
        DEFAULT_BASE_WINDOW, DEFAULT_BOTTOM_N, DEFAULT_GROWTH_FACTOR, DEFAULT_LOW_PERCENTILE,
        MAX_WINDOW_FACTOR,
    },
    errors::{ProcessingError, ProcessingResult},
};

/// Counters accumulated while scanning a series
///
/// Cheap observability for tuning the growth policy: a high fallback
/// count means `max_len` (or the percentile) is too tight for the data.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Scans that produced a value
    pub windows: usize,
    /// Growth steps taken across all scans
    pub growths: usize,
    /// Scans that settled through the fallback path
    pub fallbacks: usize,
    /// Scans that produced no value
    pub absent: usize,
}

/// Adaptive-width window scanner
///
/// Extracts a per-window floor estimate: the mean of the `bottom_n`
/// smallest samples in a window that grows until enough of its samples
/// qualify as very low. See the module docs for the growth policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdaptiveWindow {
    /// Minimum window length (samples)
    base_len: usize,

    /// Number of smallest samples averaged into the floor estimate
    bottom_n: usize,

    /// Percentile (0-100) of the window defining "very low"
    low_percentile: f32,

    /// Multiplicative growth applied when a window comes up short
    growth_factor: f32,

    /// Hard cap on window length (samples)
    max_len: usize,
}

impl Default for AdaptiveWindow {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_WINDOW, DEFAULT_BOTTOM_N)
    }
}

impl AdaptiveWindow {
    /// Create a scanner with the default growth policy
    ///
    /// `max_len` defaults to [`MAX_WINDOW_FACTOR`] times the base length.
    pub fn new(base_len: usize, bottom_n: usize) -> Self {
        Self {
            base_len,
            bottom_n,
            low_percentile: DEFAULT_LOW_PERCENTILE,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_len: base_len.saturating_mul(MAX_WINDOW_FACTOR),
        }
    }

    /// Set the percentile (0-100) that defines "very low"
    pub fn with_low_percentile(mut self, percentile: f32) -> Self {
        self.low_percentile = percentile;
        self
    }

    /// Set the multiplicative growth factor (must exceed 1.0 to be valid)
    pub fn with_growth_factor(mut self, factor: f32) -> Self {
        self.growth_factor = factor;
        self
    }

    /// Set the hard cap on window length
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Base window length (samples)
    pub fn base_len(&self) -> usize {
        self.base_len
    }

    /// Number of smallest samples averaged per window
    pub fn bottom_n(&self) -> usize {
        self.bottom_n
    }

    /// Hard cap on window length (samples)
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Reject configurations that could never make progress
    ///
    /// Called by the pipeline builder before any processing begins; fatal
    /// configuration is surfaced immediately rather than mid-series.
    pub fn validate(&self) -> ProcessingResult<()> {
        if self.base_len == 0 {
            return Err(ProcessingError::InvalidConfig {
                parameter: "base_len",
                reason: "must be at least 1",
            });
        }
        if self.bottom_n == 0 {
            return Err(ProcessingError::InvalidConfig {
                parameter: "bottom_n",
                reason: "must be at least 1",
            });
        }
        // `!(x > 1.0)` also rejects NaN.
        if !(self.growth_factor > 1.0) {
            return Err(ProcessingError::InvalidConfig {
                parameter: "growth_factor",
                reason: "must exceed 1.0",
            });
        }
        if !(0.0..=100.0).contains(&self.low_percentile) {
            return Err(ProcessingError::InvalidConfig {
                parameter: "low_percentile",
                reason: "must be within 0-100",
            });
        }
        if self.max_len < self.base_len {
            return Err(ProcessingError::InvalidConfig {
                parameter: "max_len",
                reason: "must not be below base_len",
            });
        }
        Ok(())
    }

    /// Scan one window anchored at `start`
    ///
    /// Returns the mean of the `bottom_n` smallest samples of the settled
    /// window, or `None` when the start index is at or past the end of
    /// the series (or nothing can be averaged). Ties among equal samples
    /// are broken arbitrarily - selection is by value, not position.
    pub fn scan(&self, values: &[f32], start: usize) -> Option<f32> {
        self.scan_tracked(values, start, &mut ScanStats::default())
    }

    /// Scan every valid start index and collect the floor series
    ///
    /// Start indices run from 0 through `max(0, N - base_len)` inclusive,
    /// so the final window considered is always a full base-length one.
    /// Absent results are omitted; order follows start-index order.
    pub fn build_series(&self, values: &[f32]) -> Vec<f32> {
        self.build_series_with_stats(values).0
    }

    /// Like [`build_series`](Self::build_series), also returning counters
    pub fn build_series_with_stats(&self, values: &[f32]) -> (Vec<f32>, ScanStats) {
        let mut stats = ScanStats::default();
        let last_start = values.len().saturating_sub(self.base_len);
        let mut series = Vec::with_capacity(last_start + 1);

        for start in 0..=last_start {
            match self.scan_tracked(values, start, &mut stats) {
                Some(floor) => {
                    stats.windows += 1;
                    series.push(floor);
                }
                None => stats.absent += 1,
            }
        }

        (series, stats)
    }

    fn scan_tracked(&self, values: &[f32], start: usize, stats: &mut ScanStats) -> Option<f32> {
        if start >= values.len() {
            return None;
        }

        let available = values.len() - start;
        let mut len = self.base_len.min(available);
        let mut sorted: Vec<f32> = Vec::with_capacity(len);

        loop {
            sorted.clear();
            sorted.extend_from_slice(&values[start..start + len]);
            sorted.sort_unstable_by(f32::total_cmp);

            let threshold = percentile(&sorted, self.low_percentile);
            let very_low = sorted.partition_point(|&v| v <= threshold);

            if very_low >= self.bottom_n {
                return mean(&sorted[..self.bottom_n.min(len)]);
            }

            let next = self.grown(len).min(self.max_len).min(available);
            if next <= len {
                // Growth exhausted: settle for however many smallest
                // samples this window has.
                stats.fallbacks += 1;
                return mean(&sorted[..self.bottom_n.min(len)]);
            }

            stats.growths += 1;
            len = next;
        }
    }

    /// Next window length: multiplicative growth, ceiling-rounded,
    /// with a forced +1 when rounding would stall.
    fn grown(&self, len: usize) -> usize {
        let grown = libm::ceilf(len as f32 * self.growth_factor) as usize;
        if grown > len {
            grown
        } else {
            len + 1
        }
    }
}

/// Percentile of an ascending-sorted slice, linearly interpolated
///
/// Uses the `(n - 1)`-rank convention: `percentile(s, 0)` is the minimum,
/// `percentile(s, 100)` the maximum, and ranks between samples interpolate
/// linearly. `pct` is clamped to 0-100. Must not be called on an empty
/// slice.
pub fn percentile(sorted: &[f32], pct: f32) -> f32 {
    debug_assert!(!sorted.is_empty());
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (pct / 100.0).clamp(0.0, 1.0) * (n - 1) as f32;
    let idx = rank as usize;
    let frac = rank - idx as f32;

    if idx + 1 < n {
        sorted[idx] + frac * (sorted[idx + 1] - sorted[idx])
    } else {
        sorted[n - 1]
    }
}

/// Mean of a slice; empty slices have no mean
fn mean(values: &[f32]) -> Option<f32> {
    if values.is_empty() {
        return None;
    }
    let sum: f32 = values.iter().sum();
    Some(sum / values.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_at_base_length() {
        // Window [10, 1, 2]: median 2, two samples <= 2 satisfy bottom_n=2,
        // so the scan settles immediately with mean(1, 2).
        let values = [10.0, 1.0, 2.0, 9.0, 8.0, 0.0, 3.0];
        let window = AdaptiveWindow::new(3, 2).with_low_percentile(50.0);
        assert_eq!(window.scan(&values, 0), Some(1.5));
    }

    #[test]
    fn grows_until_low_points_arrive() {
        // The base window holds only high samples; the floor sits past it.
        let values = [10.0, 9.0, 8.0, 7.0, 1.0, 2.0, 3.0, 10.0, 10.0, 10.0];
        let window = AdaptiveWindow::new(4, 3)
            .with_low_percentile(50.0)
            .with_growth_factor(2.0)
            .with_max_len(16);

        let mut stats = ScanStats::default();
        let floor = window.scan_tracked(&values, 0, &mut stats);
        assert_eq!(floor, Some(2.0)); // mean(1, 2, 3)
        assert_eq!(stats.growths, 1); // 4 -> 8 was enough
        assert_eq!(stats.fallbacks, 0);
    }

    #[test]
    fn fallback_averages_what_is_there() {
        // Two samples total, bottom_n of 3: growth is blocked at the array
        // end, so the scan averages both samples.
        let values = [5.0, 1.0];
        let window = AdaptiveWindow::new(4, 3).with_low_percentile(10.0);
        assert_eq!(window.scan(&values, 0), Some(3.0));
    }

    #[test]
    fn start_past_end_is_absent() {
        let values = [1.0, 2.0, 3.0];
        let window = AdaptiveWindow::new(2, 1);
        assert_eq!(window.scan(&values, 3), None);
        assert_eq!(window.scan(&values, 10), None);
    }

    #[test]
    fn empty_input_empty_series() {
        let window = AdaptiveWindow::new(3, 2);
        let (series, stats) = window.build_series_with_stats(&[]);
        assert!(series.is_empty());
        assert_eq!(stats.windows, 0);
    }

    #[test]
    fn series_length_contract() {
        // N - base + 1 start indices, each yielding a value here.
        let values: Vec<f32> = (0..20).map(|i| (i % 7) as f32).collect();
        let window = AdaptiveWindow::new(5, 2).with_low_percentile(50.0);
        let series = window.build_series(&values);
        assert_eq!(series.len(), values.len() - 5 + 1);
    }

    #[test]
    fn short_input_yields_single_value() {
        // base_len >= N: only start index 0 is scanned.
        let values = [4.0, 2.0, 6.0];
        let window = AdaptiveWindow::new(10, 2).with_low_percentile(50.0);
        let series = window.build_series(&values);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0], 3.0); // mean(2, 4)
    }

    #[test]
    fn growth_is_capped() {
        // All-equal samples always satisfy the percentile test, so force
        // growth with an unreachable bottom_n and watch the cap hold.
        let values = [1.0f32; 64];
        let window = AdaptiveWindow::new(4, 100)
            .with_growth_factor(3.0)
            .with_max_len(9);

        let mut stats = ScanStats::default();
        // 4 -> min(12, 9, 64) = 9 -> blocked; fallback averages 9 ones.
        let floor = window.scan_tracked(&values, 0, &mut stats);
        assert_eq!(floor, Some(1.0));
        assert_eq!(stats.growths, 1);
        assert_eq!(stats.fallbacks, 1);
    }

    #[test]
    fn stalled_growth_is_forced_forward() {
        let window = AdaptiveWindow::new(1, 1).with_growth_factor(1.0001);
        // ceil(1 * 1.0001) == 2 > 1, but ceil can stall on larger factors
        // close to 1; the +1 rule guarantees strict increase either way.
        assert!(window.grown(1) > 1);
        assert!(window.grown(100) > 100);
    }

    #[test]
    fn percentile_interpolates() {
        let sorted = [1.0, 2.0, 10.0];
        assert_eq!(percentile(&sorted, 0.0), 1.0);
        assert_eq!(percentile(&sorted, 50.0), 2.0);
        assert_eq!(percentile(&sorted, 100.0), 10.0);
        assert_eq!(percentile(&sorted, 75.0), 6.0);

        assert_eq!(percentile(&[5.0], 35.0), 5.0);
        assert_eq!(percentile(&[0.0, 10.0], 50.0), 5.0);
    }

    #[test]
    fn validate_rejects_bad_config() {
        assert!(AdaptiveWindow::new(0, 3).validate().is_err());
        assert!(AdaptiveWindow::new(300, 0).validate().is_err());
        assert!(AdaptiveWindow::new(300, 3)
            .with_growth_factor(1.0)
            .validate()
            .is_err());
        assert!(AdaptiveWindow::new(300, 3)
            .with_growth_factor(f32::NAN)
            .validate()
            .is_err());
        assert!(AdaptiveWindow::new(300, 3)
            .with_low_percentile(150.0)
            .validate()
            .is_err());
        assert!(AdaptiveWindow::new(300, 3)
            .with_max_len(100)
            .validate()
            .is_err());
        assert!(AdaptiveWindow::new(300, 3).validate().is_ok());
    }

    #[test]
    fn default_matches_documented_policy() {
        let window = AdaptiveWindow::default();
        assert_eq!(window.base_len(), 300);
        assert_eq!(window.bottom_n(), 3);
        assert_eq!(window.max_len(), 1200);
        assert!(window.validate().is_ok());
    }
}
