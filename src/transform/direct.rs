// src/transform/direct.rs

use alloc::vec::Vec;
use num_complex::Complex64;

use crate::common::{FftError, Transform};
use crate::math::{add, mul, twiddle};

/// Reference O(N²) DFT: `X[k] = Σ_n x[n] · W_N^(kn)`.
///
/// Used as the correctness oracle for the staged FFT and as the complexity
/// baseline, so it is deliberately left unoptimized. Accepts any length.
pub fn direct_transform(signal: &[Complex64]) -> Vec<Complex64> {
    let n = signal.len();
    verbose!(debug, "direct transform over {} samples", n);

    (0..n)
        .map(|k| {
            signal
                .iter()
                .enumerate()
                .fold(Complex64::default(), |sum, (i, &x)| {
                    add(sum, mul(x, twiddle(k * i, n)))
                })
        })
        .collect()
}

/// [`Transform`] adapter for [`direct_transform`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectDft;

impl Transform for DirectDft {
    fn transform(&self, signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
        Ok(direct_transform(signal))
    }
}

#[cfg(test)]
#[path = "direct_tests.rs"]
mod tests;
