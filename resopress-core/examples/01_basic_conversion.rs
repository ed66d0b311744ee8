//! Basic Frequency-to-Pressure Conversion Example
//!
//! This example demonstrates the simplest use case of ResoPress:
//! converting a synthetic transducer recording into pressures with the
//! reference calibration table.
//!
//! ## What You'll Learn
//!
//! - Building a pipeline with the builder
//! - Temperature compensation from measurement conditions
//! - Reading the run statistics
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_conversion
//! ```

use resopress_core::{
    AdaptiveWindow, CalibrationTable, PressurePipeline, TemperatureCompensator,
};

fn main() {
    println!("ResoPress Basic Conversion Example");
    println!("==================================\n");

    // Synthetic recording: a pulsatile signal around 502 frequency units.
    // Every cycle dips to its floor for a few samples, the way diastole
    // shows up in a real ocular recording.
    let samples = synthetic_recording(1200, 502.0, 40);
    println!("Recording: {} samples around 502.0", samples.len());

    // Measured at 39.2 C against the 37.0 C reference; the compensator
    // shifts every sample by a constant offset before scanning.
    let compensator = TemperatureCompensator::ocular(39.2);
    println!("Compensation offset: {:.3} frequency units\n", compensator.offset());

    let pipeline = PressurePipeline::builder()
        .compensator(compensator)
        .window(AdaptiveWindow::new(300, 3))
        .calibration(CalibrationTable::reference())
        .build()
        .expect("default configuration is valid");

    let (pressures, stats) = pipeline.process_with_stats(&samples);

    println!("Run statistics:");
    println!("  Samples in:     {}", stats.samples_in);
    println!("  Floors found:   {}", stats.floors);
    println!("  Window growths: {}", stats.scan.growths);
    println!("  Fallbacks:      {}", stats.scan.fallbacks);
    println!("  Pressures out:  {}\n", stats.pressures_out);

    println!("First pressures (mmHg):");
    for (i, p) in pressures.iter().take(8).enumerate() {
        println!("  window {:3}: {:6.2}", i, p);
    }
}

/// Base frequency plus a repeating bump with a little deterministic jitter
fn synthetic_recording(len: usize, base: f32, period: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let phase = i % period;
            let bump = if phase < period / 4 {
                0.0
            } else {
                2.0 + (phase % 5) as f32 * 0.3
            };
            let jitter = ((i * 7) % 11) as f32 * 0.01;
            base + bump + jitter
        })
        .collect()
}
