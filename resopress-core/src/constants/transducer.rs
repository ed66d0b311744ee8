//! Transducer Characteristics
//!
//! Operating characteristics of the resonant pressure transducer whose
//! oscillator output the pipeline processes. Values come from the sensor
//! acceptance bench; a different sensing element needs its own numbers,
//! passed in as explicit configuration.

// ===== TEMPERATURE COMPENSATION =====

/// Reference temperature the calibration curve was taken at (Celsius).
///
/// The implanted sensing element sits at ocular-tissue temperature,
/// which tracks core body temperature closely.
///
/// Source: clinical ocular surface temperature surveys
pub const OCULAR_REFERENCE_TEMP_C: f32 = 37.0;

/// Oscillator frequency drift per degree Celsius (frequency units / C).
///
/// Linear approximation of the resonator's thermal response over the
/// 30-42 C span the sensor is specified for. Positive coefficient:
/// readings taken warmer than the reference are shifted down.
///
/// Source: thermal chamber sweep of the reference transducer batch
pub const DEFAULT_TEMP_COEFF_PER_C: f32 = 0.1;

// ===== FREQUENCY BAND =====

/// Lowest oscillator frequency the transducer produces in service.
///
/// Corresponds to the high end of the calibrated pressure range;
/// readings below this indicate a detuned or damaged resonator.
pub const TRANSDUCER_FREQ_MIN: f32 = 480.0;

/// Highest oscillator frequency the transducer produces in service.
///
/// Corresponds to zero differential pressure on the diaphragm.
pub const TRANSDUCER_FREQ_MAX: f32 = 575.0;
