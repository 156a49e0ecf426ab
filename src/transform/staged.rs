// src/transform/staged.rs

//! Radix-2 decimation-in-time FFT that records every intermediate state.
//!
//! The Cooley-Tukey recursion is unrolled iteratively: the input is
//! bit-reverse permuted, then `log2(N)` butterfly stages each double the span
//! of the sub-transforms. Each stage builds a fresh buffer from the previous
//! one, so every snapshot stays available after the transform finishes.

use alloc::vec::Vec;
use core::fmt;
use num_complex::Complex64;

use super::core::bit_reverse_permute;
use crate::common::{FftError, Transform, check_size};
use crate::math::{add, mul, sub, twiddle};

/// One 2-point combine: `a' = a + W·b`, `b' = a - W·b`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Butterfly {
    /// Stage number, starting at 1.
    pub stage: u32,
    pub index_a: usize,
    pub index_b: usize,
    /// `W_m^k` with `k = twiddle_k` and `m = twiddle_n`.
    pub twiddle: Complex64,
    pub twiddle_k: usize,
    pub twiddle_n: usize,
}

impl Butterfly {
    /// Combines the operands at `index_a` and `index_b`.
    pub fn apply(&self, a: Complex64, b: Complex64) -> (Complex64, Complex64) {
        let t = mul(self.twiddle, b);
        (add(a, t), sub(a, t))
    }
}

impl fmt::Display for Butterfly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "stage {}: x[{}], x[{}] with W_{}^{}",
            self.stage, self.index_a, self.index_b, self.twiddle_n, self.twiddle_k
        )
    }
}

/// Output of [`staged_fft`].
///
/// `stages[0]` is the bit-reversed input and `stages[s]` the buffer after
/// stage `s`. `butterflies[s - 1]` holds the N/2 butterflies of stage `s`
/// in execution order: block start ascending, then offset within the block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StagedFft {
    bit_reversed: Vec<Complex64>,
    stages: Vec<Vec<Complex64>>,
    butterflies: Vec<Vec<Butterfly>>,
}

impl StagedFft {
    /// Number of samples N.
    pub fn len(&self) -> usize {
        self.bit_reversed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_reversed.is_empty()
    }

    /// Number of butterfly stages, `log2(N)`.
    pub fn log2_len(&self) -> u32 {
        self.butterflies.len() as u32
    }

    pub fn bit_reversed(&self) -> &[Complex64] {
        &self.bit_reversed
    }

    pub fn stages(&self) -> &[Vec<Complex64>] {
        &self.stages
    }

    pub fn stage(&self, stage: usize) -> Option<&[Complex64]> {
        self.stages.get(stage).map(Vec::as_slice)
    }

    pub fn butterflies(&self) -> &[Vec<Butterfly>] {
        &self.butterflies
    }

    /// Butterflies of `stage` (1-based, matching [`Butterfly::stage`]).
    pub fn stage_butterflies(&self, stage: usize) -> Option<&[Butterfly]> {
        stage
            .checked_sub(1)
            .and_then(|i| self.butterflies.get(i))
            .map(Vec::as_slice)
    }

    /// Total butterflies across all stages, `(N/2) * log2(N)`.
    pub fn butterfly_count(&self) -> usize {
        self.butterflies.iter().map(Vec::len).sum()
    }

    /// The final stage, equal to the DFT of the input.
    pub fn spectrum(&self) -> &[Complex64] {
        self.stages.last().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn into_spectrum(mut self) -> Vec<Complex64> {
        self.stages.pop().unwrap_or_default()
    }

    pub fn into_parts(self) -> (Vec<Complex64>, Vec<Vec<Complex64>>, Vec<Vec<Butterfly>>) {
        (self.bit_reversed, self.stages, self.butterflies)
    }
}

/// Runs the radix-2 DIT FFT over `signal`, keeping every stage.
///
/// `signal.len()` must be a power of two and at least 2.
pub fn staged_fft(signal: &[Complex64]) -> Result<StagedFft, FftError> {
    let bits = check_size(signal.len())?;
    verbose!(debug, "staged fft: N = {}, {} stages", signal.len(), bits);

    let bit_reversed = bit_reverse_permute(signal, bits);

    let mut stages = Vec::with_capacity(bits as usize + 1);
    let mut butterflies = Vec::with_capacity(bits as usize);
    stages.push(bit_reversed.clone());

    for stage in 1..=bits {
        let (next, records) = butterfly_stage(&stages[stage as usize - 1], stage);
        verbose!(trace, "stage {} done with {} butterflies", stage, records.len());
        stages.push(next);
        butterflies.push(records);
    }

    Ok(StagedFft {
        bit_reversed,
        stages,
        butterflies,
    })
}

/// Applies every butterfly of `stage` to `current`, returning the new buffer
/// and the butterflies in the order they were applied.
fn butterfly_stage(current: &[Complex64], stage: u32) -> (Vec<Complex64>, Vec<Butterfly>) {
    let n = current.len();
    let span = 1usize << stage;
    let half = span >> 1;

    let mut next = current.to_vec();
    let mut records = Vec::with_capacity(n / 2);

    for block in (0..n).step_by(span) {
        for j in 0..half {
            let butterfly = Butterfly {
                stage,
                index_a: block + j,
                index_b: block + j + half,
                twiddle: twiddle(j, span),
                twiddle_k: j,
                twiddle_n: span,
            };

            let (a, b) = butterfly.apply(current[butterfly.index_a], current[butterfly.index_b]);
            next[butterfly.index_a] = a;
            next[butterfly.index_b] = b;
            records.push(butterfly);
        }
    }

    (next, records)
}

/// [`Transform`] adapter for [`staged_fft`] that keeps only the spectrum.
#[derive(Debug, Default, Clone, Copy)]
pub struct RadixTwoFft;

impl Transform for RadixTwoFft {
    fn transform(&self, signal: &[Complex64]) -> Result<Vec<Complex64>, FftError> {
        staged_fft(signal).map(StagedFft::into_spectrum)
    }
}

#[cfg(test)]
#[path = "staged_tests.rs"]
mod tests;
