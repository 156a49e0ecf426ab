// src/common.rs

use alloc::vec::Vec;
use num_complex::Complex64;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    #[error("Size must be a power of 2, got {0}")]
    NotPowerOfTwo(usize),
    #[error("Size must be at least 2, got {0}")]
    TooShort(usize),
    #[error("Unknown signal preset")]
    UnknownPreset,
    #[error("Benchmark needs at least one trial")]
    NoTrials,
}

/// Validates a transform size and returns `log2(n)`, the bit width of its indices.
pub fn check_size(n: usize) -> Result<u32, FftError> {
    if n < 2 {
        return Err(FftError::TooShort(n));
    }
    if !n.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(n));
    }
    Ok(n.trailing_zeros())
}

/// A forward transform from a time-domain signal to its spectrum.
pub trait Transform {
    fn transform(&self, signal: &[Complex64]) -> Result<Vec<Complex64>, FftError>;
}
