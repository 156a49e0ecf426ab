// src/transform/core.rs

use alloc::vec::Vec;
use num_complex::Complex64;

/// Reverses the low `bits` bits of `index`.
///
/// Bits above `bits` are discarded, so `index` must be below `1 << bits`
/// for the result to be meaningful.
pub fn bit_reverse(index: usize, bits: u32) -> usize {
    let mut n = index;
    let mut reversed = 0;
    for _ in 0..bits {
        reversed = (reversed << 1) | (n & 1);
        n >>= 1;
    }
    reversed
}

/// Returns a copy of `signal` with sample `n` moved to `bit_reverse(n, bits)`.
///
/// `signal.len()` must equal `1 << bits`.
pub fn bit_reverse_permute(signal: &[Complex64], bits: u32) -> Vec<Complex64> {
    let mut reordered = alloc::vec![Complex64::default(); signal.len()];
    for (n, &sample) in signal.iter().enumerate() {
        reordered[bit_reverse(n, bits)] = sample;
    }
    reordered
}

#[cfg(test)]
#[path = "core_tests.rs"]
mod tests;
