//! Piecewise-Linear Frequency-to-Pressure Calibration
//!
//! ## Overview
//!
//! A calibration table is an ordered list of frequency segments, each
//! carrying the pressures measured at its two knots. Mapping a frequency
//! means finding its segment and interpolating linearly between the knots:
//!
//! ```text
//! p = p_low + (f - f_low) / (f_high - f_low) * (p_high - p_low)
//! ```
//!
//! Outside the calibrated span the mapping extrapolates with the slope of
//! the nearest end segment. That keeps the conversion total, but pressures
//! far outside the span inherit whatever slope the end segment happens to
//! have and can turn unphysical - a known limitation of the bench table,
//! reported through a log warning rather than silently clamped.
//!
//! ## Table hygiene
//!
//! [`CalibrationTable::new`] validates at load time: segments must be
//! finite, individually ordered (`f_low <= f_high`), sorted ascending by
//! lower knot, and non-overlapping. [`CalibrationTable::permissive`]
//! skips validation for callers that want the historical behavior;
//! mapping through an overlapping table is then unspecified.
//!
//! Tables are *data*, supplied per transducer batch. The direction of the
//! reference table (frequency up, pressure down) is a property of that
//! data, not of this module.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    errors::{ProcessingError, ProcessingResult},
    traits::Measurable,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// One calibration segment: a frequency span and its knot pressures
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Lower frequency knot
    pub f_low: f32,
    /// Upper frequency knot
    pub f_high: f32,
    /// Pressure measured at the lower frequency knot
    pub p_low: f32,
    /// Pressure measured at the upper frequency knot
    pub p_high: f32,
}

impl Segment {
    /// Create a segment from its knots
    pub const fn new(f_low: f32, f_high: f32, p_low: f32, p_high: f32) -> Self {
        Self {
            f_low,
            f_high,
            p_low,
            p_high,
        }
    }

    /// Pressure change per frequency unit; zero for a degenerate segment
    pub fn slope(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            (self.p_high - self.p_low) / (self.f_high - self.f_low)
        }
    }

    /// True when both frequency knots coincide
    pub fn is_degenerate(&self) -> bool {
        self.f_high == self.f_low
    }

    /// True when `freq` lies within this segment, knots included
    pub fn contains(&self, freq: f32) -> bool {
        self.f_low <= freq && freq <= self.f_high
    }

    /// Pressure on this segment's line at `freq`
    ///
    /// Interpolates inside the span and extrapolates with the same slope
    /// outside it. A degenerate segment answers its lower-knot pressure.
    pub fn pressure_at(&self, freq: f32) -> f32 {
        if self.is_degenerate() {
            return self.p_low;
        }
        let t = (freq - self.f_low) / (self.f_high - self.f_low);
        self.p_low + t * (self.p_high - self.p_low)
    }
}

/// Ordered piecewise-linear calibration table
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationTable {
    segments: Vec<Segment>,
}

impl CalibrationTable {
    /// Build a validated table
    ///
    /// Rejects empty tables ([`ProcessingError::NoCalibration`]) and any
    /// segment set that is non-finite, reversed, unsorted, or overlapping
    /// ([`ProcessingError::InvalidConfig`]). Shared knots between adjacent
    /// segments are the expected layout and pass.
    pub fn new(segments: Vec<Segment>) -> ProcessingResult<Self> {
        if segments.is_empty() {
            return Err(ProcessingError::NoCalibration);
        }

        for seg in &segments {
            let finite = seg.f_low.is_valid()
                && seg.f_high.is_valid()
                && seg.p_low.is_valid()
                && seg.p_high.is_valid();
            if !finite {
                return Err(ProcessingError::InvalidConfig {
                    parameter: "segments",
                    reason: "knot is not a finite number",
                });
            }
            if seg.f_low > seg.f_high {
                return Err(ProcessingError::InvalidConfig {
                    parameter: "segments",
                    reason: "frequency knots reversed",
                });
            }
        }

        for pair in segments.windows(2) {
            if pair[1].f_low < pair[0].f_low {
                return Err(ProcessingError::InvalidConfig {
                    parameter: "segments",
                    reason: "not sorted by lower frequency knot",
                });
            }
            if pair[1].f_low < pair[0].f_high {
                return Err(ProcessingError::InvalidConfig {
                    parameter: "segments",
                    reason: "segments overlap",
                });
            }
        }

        Ok(Self { segments })
    }

    /// Build a table without validation
    ///
    /// Preserves the historical permissive behavior; mapping through an
    /// unsorted or overlapping table is unspecified.
    pub fn permissive(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// The reference bench table for the standard transducer batch
    pub fn reference() -> Self {
        Self {
            segments: crate::constants::calibration::REFERENCE_SEGMENTS.to_vec(),
        }
    }

    /// Segments in table order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Calibrated frequency span, `None` for an empty table
    pub fn span(&self) -> Option<(f32, f32)> {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => Some((first.f_low, last.f_high)),
            _ => None,
        }
    }

    /// Map one frequency to a pressure
    ///
    /// Scans segments in order; inside a segment the knots interpolate
    /// linearly, below or above the whole table the nearest end segment's
    /// slope extrapolates, and a frequency falling in a gap between two
    /// segments interpolates across the gap so the mapping stays
    /// continuous.
    pub fn map(&self, freq: f32) -> ProcessingResult<f32> {
        let (first, last) = match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(ProcessingError::NoCalibration),
        };

        if !freq.is_valid() {
            return Err(ProcessingError::InvalidValue);
        }

        if freq < first.f_low {
            log_warn!(
                "Frequency {} below calibrated span (>= {}): extrapolating",
                freq,
                first.f_low
            );
            return Ok(first.pressure_at(freq));
        }
        if freq > last.f_high {
            log_warn!(
                "Frequency {} above calibrated span (<= {}): extrapolating",
                freq,
                last.f_high
            );
            return Ok(last.pressure_at(freq));
        }

        for seg in &self.segments {
            if seg.contains(freq) {
                return Ok(seg.pressure_at(freq));
            }
        }

        // In span but in no segment: bridge the gap between neighbors.
        for pair in self.segments.windows(2) {
            if pair[0].f_high < freq && freq < pair[1].f_low {
                let bridge = Segment::new(pair[0].f_high, pair[1].f_low, pair[0].p_high, pair[1].p_low);
                return Ok(bridge.pressure_at(freq));
            }
        }

        // Only reachable through a permissive unsorted table.
        Ok(last.pressure_at(freq))
    }

    /// Largest pressure jump across a shared knot
    ///
    /// A well-formed bench table is continuous: adjacent segments agree on
    /// the pressure at their shared knot. This probes the worst violation
    /// so a caller can vet a supplied table; it enforces nothing.
    pub fn max_knot_discontinuity(&self) -> f32 {
        let mut worst = 0.0f32;
        for pair in self.segments.windows(2) {
            if pair[0].f_high == pair[1].f_low {
                let jump = (pair[1].p_low - pair[0].p_high).abs();
                worst = worst.max(jump);
            }
        }
        worst
    }
}

#[cfg(feature = "json")]
impl CalibrationTable {
    /// Load and validate a table from a JSON array of segments
    ///
    /// ```json
    /// [{"f_low": 498.8, "f_high": 505.0, "p_low": 15.0, "p_high": 7.5}]
    /// ```
    pub fn from_json(json: &str) -> ProcessingResult<Self> {
        let segments: Vec<Segment> =
            serde_json::from_str(json).map_err(|_| ProcessingError::InvalidConfig {
                parameter: "segments",
                reason: "malformed calibration JSON",
            })?;
        Self::new(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    fn reference() -> CalibrationTable {
        CalibrationTable::reference()
    }

    #[test]
    fn interpolates_inside_segment() {
        // freq 500 on (498.8, 505.0, 15.0, 7.5): t ~ 0.1935 => ~13.548
        let pressure = reference().map(500.0).unwrap();
        assert!((pressure - 13.548).abs() < 0.001);
    }

    #[test]
    fn knots_round_trip() {
        let table = reference();
        for seg in table.segments() {
            assert_eq!(table.map(seg.f_low).unwrap(), seg.p_low);
            assert_eq!(table.map(seg.f_high).unwrap(), seg.p_high);
        }
    }

    #[test]
    fn extrapolates_above_span() {
        // Last segment (505, 570, 7.5, 0): slope ~ -0.1154, so
        // freq 600 => 0 + 30 * slope ~ -3.46.
        let pressure = reference().map(600.0).unwrap();
        assert!((pressure - (-3.46)).abs() < 0.01);
    }

    #[test]
    fn extrapolates_below_span() {
        // First segment (484.8, 487.8, 45.0, 37.5): slope -2.5/unit.
        let pressure = reference().map(483.8).unwrap();
        assert!((pressure - 47.5).abs() < 0.001);
    }

    #[test]
    fn degenerate_segment_answers_lower_knot() {
        let seg = Segment::new(500.0, 500.0, 12.0, 99.0);
        assert!(seg.is_degenerate());
        assert_eq!(seg.slope(), 0.0);
        assert_eq!(seg.pressure_at(500.0), 12.0);

        let table = CalibrationTable::permissive(vec![seg]);
        assert_eq!(table.map(500.0).unwrap(), 12.0);
    }

    #[test]
    fn empty_table_has_no_mapping() {
        let table = CalibrationTable::permissive(Vec::new());
        assert_eq!(table.map(500.0), Err(ProcessingError::NoCalibration));
        assert!(table.span().is_none());
    }

    #[test]
    fn validation_rejects_bad_tables() {
        assert_eq!(
            CalibrationTable::new(Vec::new()),
            Err(ProcessingError::NoCalibration)
        );

        let reversed = vec![Segment::new(505.0, 498.8, 7.5, 15.0)];
        assert!(CalibrationTable::new(reversed).is_err());

        let unsorted = vec![
            Segment::new(498.8, 505.0, 15.0, 7.5),
            Segment::new(484.8, 487.8, 45.0, 37.5),
        ];
        assert!(CalibrationTable::new(unsorted).is_err());

        let overlapping = vec![
            Segment::new(484.8, 490.0, 45.0, 35.0),
            Segment::new(489.0, 495.0, 36.0, 30.0),
        ];
        assert!(CalibrationTable::new(overlapping).is_err());

        let nan = vec![Segment::new(484.8, f32::NAN, 45.0, 37.5)];
        assert!(CalibrationTable::new(nan).is_err());
    }

    #[test]
    fn reference_table_is_valid_and_continuous() {
        let segments = crate::constants::calibration::REFERENCE_SEGMENTS.to_vec();
        let table = CalibrationTable::new(segments).unwrap();
        assert_eq!(table.max_knot_discontinuity(), 0.0);
        assert_eq!(table.span(), Some((484.8, 570.0)));
    }

    #[test]
    fn gap_between_segments_is_bridged() {
        let gapped = vec![
            Segment::new(480.0, 490.0, 40.0, 30.0),
            Segment::new(500.0, 510.0, 20.0, 10.0),
        ];
        let table = CalibrationTable::new(gapped).unwrap();
        // Halfway across the 490 -> 500 gap: halfway from 30 to 20.
        assert_eq!(table.map(495.0).unwrap(), 25.0);
        // The mapping stays continuous at the gap edges.
        assert_eq!(table.map(490.0).unwrap(), 30.0);
        assert_eq!(table.map(500.0).unwrap(), 20.0);
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let table = reference();
        assert_eq!(table.map(f32::NAN), Err(ProcessingError::InvalidValue));
        assert_eq!(table.map(f32::INFINITY), Err(ProcessingError::InvalidValue));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_round_trip_validates() {
        let json = r#"[
            {"f_low": 498.8, "f_high": 505.0, "p_low": 15.0, "p_high": 7.5},
            {"f_low": 505.0, "f_high": 570.0, "p_low": 7.5, "p_high": 0.0}
        ]"#;
        let table = CalibrationTable::from_json(json).unwrap();
        assert_eq!(table.segments().len(), 2);
        assert!((table.map(500.0).unwrap() - 13.548).abs() < 0.001);

        assert!(CalibrationTable::from_json("not json").is_err());
        assert_eq!(
            CalibrationTable::from_json("[]"),
            Err(ProcessingError::NoCalibration)
        );
    }
}
