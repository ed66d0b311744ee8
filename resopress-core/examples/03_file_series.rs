//! File-Based Recording Example
//!
//! Reads a frequency column from a delimited text export and runs it
//! through the pipeline. Requires the `series-file` feature:
//!
//! ```bash
//! cargo run --example 03_file_series --features series-file -- recording.csv
//! ```
//!
//! The expected layout is the standard recording export: timestamp in
//! the first column, oscillator frequency in the second, one header row.

use std::env;
use std::process;

use resopress_core::{
    series::ColumnReader, AdaptiveWindow, CalibrationTable, PressurePipeline,
    TemperatureCompensator,
};

fn main() {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: 03_file_series <recording.csv>");
            process::exit(2);
        }
    };

    let mut reader = ColumnReader::new().with_skip_lines(1);
    let samples = match reader.read_all(&path) {
        Ok(samples) => samples,
        Err(e) => {
            eprintln!("failed to read {}: {}", path, e);
            process::exit(1);
        }
    };

    let stats = reader.stats();
    println!(
        "{}: {} samples ({} lines, {} bad rows)",
        path, samples.len(), stats.lines_processed, stats.parse_errors
    );

    let pipeline = PressurePipeline::builder()
        .compensator(TemperatureCompensator::ocular(39.0))
        .window(AdaptiveWindow::new(300, 3))
        .calibration(CalibrationTable::reference())
        .build()
        .expect("default configuration is valid");

    let pressures = pipeline.process(&samples);
    println!("{} pressures:", pressures.len());
    for p in &pressures {
        println!("{:.3}", p);
    }
}
