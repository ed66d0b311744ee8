//! Adaptive-Window Scan Defaults
//!
//! Defaults for the sliding-window minimum extractor. The base window is
//! sized so one window covers roughly one cardiac pulsation cycle at the
//! transducer's sampling rate; the growth policy lets a window stretch
//! when the local floor is sparsely populated.

/// Default base window length (samples).
///
/// At the acquisition rate of the reference rig this spans about one
/// pulsation cycle, so every base window should contain one diastolic
/// floor.
pub const DEFAULT_BASE_WINDOW: usize = 300;

/// Default number of smallest samples averaged per window.
///
/// Averaging the three lowest points smooths single-sample noise without
/// pulling the estimate away from the true floor.
pub const DEFAULT_BOTTOM_N: usize = 3;

/// Default percentile (0-100) defining "very low" within a window.
///
/// A window is considered settled once at least `bottom_n` samples sit
/// at or below this percentile of the window itself. Self-referential,
/// so no absolute threshold needs tuning per recording.
pub const DEFAULT_LOW_PERCENTILE: f32 = 10.0;

/// Default multiplicative window growth factor.
///
/// Applied (with ceiling rounding) each time a window comes up short of
/// low samples. 1.5 reaches the growth cap in three steps from the base
/// length.
pub const DEFAULT_GROWTH_FACTOR: f32 = 1.5;

/// Growth cap as a multiple of the base window length.
///
/// Bounds both the work per start index and how far a window may reach
/// past its own neighborhood; combined with the array end this guarantees
/// the scan always terminates.
pub const MAX_WINDOW_FACTOR: usize = 4;
