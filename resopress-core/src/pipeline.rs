//! Frequency-to-Pressure Processing Pipeline
//!
//! ## Overview
//!
//! The pipeline chains the three processing stages over an in-memory
//! sample series:
//!
//! ```text
//! raw samples -> TemperatureCompensator -> AdaptiveWindow -> CalibrationTable
//!                 (uniform offset)         (floor series)    (one pressure
//!                                                             per floor)
//! ```
//!
//! Everything is a pure, single-threaded computation over read-only
//! sequences; each stage preserves order, and the floor and pressure
//! series stay aligned one-to-one. The per-start-index scans and the
//! per-floor mappings are independent given the shared compensated
//! series, so a caller chasing throughput could parallelize them - the
//! pipeline itself never does.
//!
//! ## Fail fast, then never abort
//!
//! All configuration is validated by [`PipelineBuilder::build`] before a
//! single sample is touched. After that, processing cannot fail: windows
//! that produce no value are omitted from the output, which is the
//! per-element absence policy, not an error.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    calibration::CalibrationTable,
    compensation::TemperatureCompensator,
    errors::{ProcessingError, ProcessingResult},
    traits::Compensation,
    window::{AdaptiveWindow, ScanStats},
};

/// Counters describing one processing run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Raw samples taken in
    pub samples_in: usize,
    /// Floor values extracted by the window scanner
    pub floors: usize,
    /// Pressures produced
    pub pressures_out: usize,
    /// Window scanner counters
    pub scan: ScanStats,
}

/// Complete frequency-to-pressure conversion pipeline
///
/// Build one with [`PressurePipeline::builder`]; construction validates
/// the whole configuration up front.
#[derive(Debug, Clone)]
pub struct PressurePipeline {
    compensator: TemperatureCompensator,
    window: AdaptiveWindow,
    calibration: CalibrationTable,
}

impl PressurePipeline {
    /// Create a new pipeline builder
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Convert a raw sample series to a pressure series
    ///
    /// Output order follows start-index order; absent windows are
    /// omitted, so the result holds at most `max(0, N - base + 1)`
    /// pressures.
    pub fn process(&self, samples: &[f32]) -> Vec<f32> {
        self.process_with_stats(samples).0
    }

    /// Like [`process`](Self::process), also returning run counters
    pub fn process_with_stats(&self, samples: &[f32]) -> (Vec<f32>, ProcessingStats) {
        let compensated = self.compensator.apply(samples);
        let (floors, scan) = self.window.build_series_with_stats(&compensated);

        let pressures: Vec<f32> = floors
            .iter()
            .filter_map(|&floor| self.calibration.map(floor).ok())
            .collect();

        let stats = ProcessingStats {
            samples_in: samples.len(),
            floors: floors.len(),
            pressures_out: pressures.len(),
            scan,
        };

        (pressures, stats)
    }

    /// Convert a series, requiring at least one full base window
    ///
    /// For callers that treat an under-filled recording as fatal rather
    /// than as an empty result.
    pub fn process_strict(&self, samples: &[f32]) -> ProcessingResult<Vec<f32>> {
        if samples.len() < self.window.base_len() {
            return Err(ProcessingError::InsufficientData {
                required: self.window.base_len(),
                available: samples.len(),
            });
        }
        Ok(self.process(samples))
    }

    /// The compensator this pipeline applies
    pub fn compensator(&self) -> &TemperatureCompensator {
        &self.compensator
    }

    /// The window scanner this pipeline runs
    pub fn window(&self) -> &AdaptiveWindow {
        &self.window
    }

    /// The calibration table this pipeline maps through
    pub fn calibration(&self) -> &CalibrationTable {
        &self.calibration
    }
}

/// Builder for [`PressurePipeline`]
///
/// The compensator defaults to identity and the window scanner to the
/// documented defaults; the calibration table must be supplied
/// explicitly - it is deployment data, never baked in.
pub struct PipelineBuilder {
    compensator: TemperatureCompensator,
    window: AdaptiveWindow,
    calibration: Option<CalibrationTable>,
}

impl PipelineBuilder {
    /// Create a builder with default compensator and window scanner
    pub fn new() -> Self {
        Self {
            compensator: TemperatureCompensator::default(),
            window: AdaptiveWindow::default(),
            calibration: None,
        }
    }

    /// Set the temperature compensator
    pub fn compensator(mut self, compensator: TemperatureCompensator) -> Self {
        self.compensator = compensator;
        self
    }

    /// Set the window scanner
    pub fn window(mut self, window: AdaptiveWindow) -> Self {
        self.window = window;
        self
    }

    /// Set the calibration table
    pub fn calibration(mut self, calibration: CalibrationTable) -> Self {
        self.calibration = Some(calibration);
        self
    }

    /// Validate the configuration and build the pipeline
    ///
    /// Fatal configuration surfaces here, before processing begins: an
    /// invalid window policy, a missing or empty calibration table.
    pub fn build(self) -> ProcessingResult<PressurePipeline> {
        self.window.validate()?;

        let calibration = self.calibration.ok_or(ProcessingError::NoCalibration)?;
        if calibration.segments().is_empty() {
            return Err(ProcessingError::NoCalibration);
        }

        Ok(PressurePipeline {
            compensator: self.compensator,
            window: self.window,
            calibration,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::Segment;

    #[cfg(not(feature = "std"))]
    use alloc::vec;

    fn small_pipeline() -> PressurePipeline {
        PressurePipeline::builder()
            .window(AdaptiveWindow::new(3, 2).with_low_percentile(50.0))
            .calibration(CalibrationTable::reference())
            .build()
            .unwrap()
    }

    #[test]
    fn builder_requires_calibration() {
        let result = PressurePipeline::builder()
            .window(AdaptiveWindow::new(3, 2))
            .build();
        assert_eq!(result.err(), Some(ProcessingError::NoCalibration));
    }

    #[test]
    fn builder_rejects_empty_table() {
        let result = PressurePipeline::builder()
            .calibration(CalibrationTable::permissive(Vec::new()))
            .build();
        assert_eq!(result.err(), Some(ProcessingError::NoCalibration));
    }

    #[test]
    fn builder_rejects_bad_window() {
        let result = PressurePipeline::builder()
            .window(AdaptiveWindow::new(3, 2).with_growth_factor(0.5))
            .calibration(CalibrationTable::reference())
            .build();
        assert!(matches!(
            result.err(),
            Some(ProcessingError::InvalidConfig { parameter: "growth_factor", .. })
        ));
    }

    #[test]
    fn floors_and_pressures_stay_aligned() {
        let samples = [505.0, 498.8, 500.0, 501.0, 499.5, 502.0, 498.9, 503.0];
        let pipeline = small_pipeline();
        let (pressures, stats) = pipeline.process_with_stats(&samples);

        assert_eq!(stats.samples_in, samples.len());
        assert_eq!(stats.floors, stats.pressures_out);
        assert_eq!(pressures.len(), stats.pressures_out);
        assert!(pressures.len() <= samples.len() - 3 + 1);
    }

    #[test]
    fn empty_input_empty_output() {
        let pipeline = small_pipeline();
        let (pressures, stats) = pipeline.process_with_stats(&[]);
        assert!(pressures.is_empty());
        assert_eq!(stats.samples_in, 0);
        assert_eq!(stats.pressures_out, 0);
    }

    #[test]
    fn strict_mode_rejects_short_series() {
        let pipeline = small_pipeline();
        assert_eq!(
            pipeline.process_strict(&[500.0, 501.0]),
            Err(ProcessingError::InsufficientData {
                required: 3,
                available: 2,
            })
        );
        assert!(pipeline.process_strict(&[500.0, 501.0, 502.0]).is_ok());
    }

    #[test]
    fn compensation_shifts_mapped_floor() {
        // A flat series at 505.0 maps to 7.5 uncompensated. Measured 3
        // degrees warm with coeff 0.1, every sample drops by 0.3, landing
        // on the (498.8, 505.0, 15.0, 7.5) segment slightly above 7.5.
        let samples = [505.0f32; 8];

        let identity = small_pipeline();
        let warm = PressurePipeline::builder()
            .compensator(TemperatureCompensator::new(40.0, 37.0, 0.1))
            .window(AdaptiveWindow::new(3, 2).with_low_percentile(50.0))
            .calibration(CalibrationTable::reference())
            .build()
            .unwrap();

        let flat = identity.process(&samples);
        let shifted = warm.process(&samples);
        assert_eq!(flat.len(), shifted.len());

        let expected = CalibrationTable::reference().map(505.0 - 0.3).unwrap();
        for (p0, p1) in flat.iter().zip(&shifted) {
            assert!((p0 - 7.5).abs() < 1e-4);
            assert!((p1 - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn custom_table_flows_through() {
        let table = CalibrationTable::new(vec![
            Segment::new(0.0, 10.0, 0.0, 100.0),
        ])
        .unwrap();
        let pipeline = PressurePipeline::builder()
            .window(AdaptiveWindow::new(2, 1).with_low_percentile(50.0))
            .calibration(table)
            .build()
            .unwrap();

        // Floors are the per-window minima; the toy table maps x -> 10x.
        let pressures = pipeline.process(&[5.0, 5.0, 5.0]);
        assert_eq!(pressures.len(), 2);
        for p in pressures {
            assert!((p - 50.0).abs() < 1e-5);
        }
    }
}
