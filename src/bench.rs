// src/bench.rs

//! Wall-clock comparison of the two transforms.

use alloc::vec::Vec;
use core::hint::black_box;
use num_complex::Complex64;
use std::time::Instant;

use crate::accounting::{OpCounts, theoretical_op_counts};
use crate::common::FftError;
use crate::signal::{SignalConfig, generate_signal};
use crate::transform::{StagedFft, direct_transform, staged_fft};

pub const DEFAULT_TRIALS: usize = 5;

/// Median timings and theoretical costs for one configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputationStats {
    pub dft_time_ms: f64,
    pub fft_time_ms: f64,
    pub dft_ops: OpCounts,
    pub fft_ops: OpCounts,
}

/// Everything computed for one configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Analysis {
    pub signal: Vec<Complex64>,
    pub staged: StagedFft,
    pub stats: ComputationStats,
}

/// Sorts `samples` ascending and returns the element at `len / 2`.
///
/// For even lengths this is the upper of the two middle elements.
pub fn median(samples: &mut [f64]) -> Option<f64> {
    samples.sort_by(f64::total_cmp);
    samples.get(samples.len() / 2).copied()
}

/// Runs `f(signal)` `trials` times and returns the median duration in milliseconds.
///
/// Each measurement brackets exactly one call.
pub fn benchmark<F, R>(signal: &[Complex64], mut f: F, trials: usize) -> Result<f64, FftError>
where
    F: FnMut(&[Complex64]) -> R,
{
    if trials == 0 {
        return Err(FftError::NoTrials);
    }

    let mut timings = Vec::with_capacity(trials);
    for _ in 0..trials {
        let start = Instant::now();
        black_box(f(black_box(signal)));
        timings.push(start.elapsed().as_secs_f64() * 1e3);
    }

    let median = median(&mut timings).ok_or(FftError::NoTrials)?;
    verbose!(debug, "median of {} trials over N = {}: {:.6} ms", trials, signal.len(), median);
    Ok(median)
}

/// Generates the configured signal, runs the staged FFT, and benchmarks both
/// transforms against it.
pub fn analyze(config: &SignalConfig, trials: usize) -> Result<Analysis, FftError> {
    let signal = generate_signal(config)?;
    let staged = staged_fft(&signal)?;

    let dft_time_ms = benchmark(&signal, direct_transform, trials)?;
    let fft_time_ms = benchmark(&signal, staged_fft, trials)?;
    let report = theoretical_op_counts(config.n);

    Ok(Analysis {
        signal,
        staged,
        stats: ComputationStats {
            dft_time_ms,
            fft_time_ms,
            dft_ops: report.dft,
            fft_ops: report.fft,
        },
    })
}

#[cfg(test)]
#[path = "bench_tests.rs"]
mod tests;
