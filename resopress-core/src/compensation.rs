//! Temperature compensation for resonant-transducer readings
//!
//! The oscillator frequency of a resonant pressure transducer drifts with
//! the temperature of the sensing element. Over the narrow span the sensor
//! operates in, the drift is well approximated as linear, so every sample
//! is shifted by a constant offset:
//!
//! ```text
//! compensated = raw + (reference - measured) x coefficient
//! ```
//!
//! The offset is derived once from the measurement conditions and applied
//! uniformly - compensation never reorders the series or changes its
//! length, and `measured == reference` is an exact identity transform.

use crate::{
    constants::transducer::{DEFAULT_TEMP_COEFF_PER_C, OCULAR_REFERENCE_TEMP_C},
    traits::Compensation,
};

/// Linear temperature compensator for frequency readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureCompensator {
    /// Temperature at which the series was measured (Celsius)
    measured_c: f32,

    /// Reference temperature the calibration curve was taken at (Celsius)
    reference_c: f32,

    /// Frequency shift per degree of deviation (frequency units / Celsius)
    coeff_per_c: f32,
}

impl Default for TemperatureCompensator {
    fn default() -> Self {
        // Measured defaults to the reference, so the default compensator
        // is an identity transform until a measurement temperature is set.
        Self {
            measured_c: OCULAR_REFERENCE_TEMP_C,
            reference_c: OCULAR_REFERENCE_TEMP_C,
            coeff_per_c: DEFAULT_TEMP_COEFF_PER_C,
        }
    }
}

impl TemperatureCompensator {
    /// Create a compensator with explicit temperatures and coefficient
    pub fn new(measured_c: f32, reference_c: f32, coeff_per_c: f32) -> Self {
        Self {
            measured_c,
            reference_c,
            coeff_per_c,
        }
    }

    /// Compensator for an ocular measurement taken at `measured_c`
    ///
    /// Uses the ocular-tissue reference temperature and the default
    /// per-degree coefficient.
    pub fn ocular(measured_c: f32) -> Self {
        Self {
            measured_c,
            ..Self::default()
        }
    }

    /// The constant offset added to every sample
    pub fn offset(&self) -> f32 {
        (self.reference_c - self.measured_c) * self.coeff_per_c
    }

    /// True when compensation leaves samples untouched
    pub fn is_identity(&self) -> bool {
        self.offset() == 0.0
    }

    /// Measurement temperature (Celsius)
    pub fn measured_c(&self) -> f32 {
        self.measured_c
    }

    /// Reference temperature (Celsius)
    pub fn reference_c(&self) -> f32 {
        self.reference_c
    }
}

impl Compensation for TemperatureCompensator {
    fn compensate(&self, raw: f32) -> f32 {
        raw + self.offset()
    }
}
