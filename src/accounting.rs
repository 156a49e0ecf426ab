// src/accounting.rs

//! Closed-form operation counts.
//!
//! Nothing here counts executed instructions; every figure is the theoretical
//! cost of the algorithm as a function of N.

use crate::math::{log2, round};

/// Complex multiplications and additions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpCounts {
    pub mults: u64,
    pub adds: u64,
}

impl OpCounts {
    pub fn total(&self) -> u64 {
        self.mults.saturating_add(self.adds)
    }
}

/// Theoretical costs of both algorithms at the same N.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplexityReport {
    pub dft: OpCounts,
    pub fft: OpCounts,
}

impl ComplexityReport {
    /// How many times more operations the direct transform needs.
    pub fn speedup(&self) -> f64 {
        self.dft.total() as f64 / self.fft.total() as f64
    }
}

/// DFT: `N²` multiplications and `N(N-1)` additions.
/// FFT: `round(N/2 · log2 N)` multiplications and `round(N · log2 N)` additions.
pub fn theoretical_op_counts(n: usize) -> ComplexityReport {
    let n64 = n as u64;
    let dft = OpCounts {
        mults: n64.saturating_mul(n64),
        adds: n64.saturating_mul(n64.saturating_sub(1)),
    };

    let log_n = log2(n as f64);
    let fft = OpCounts {
        mults: round(n as f64 / 2.0 * log_n) as u64,
        adds: round(n as f64 * log_n) as u64,
    };

    ComplexityReport { dft, fft }
}

/// Operations executed by the staged FFT up to a replay cursor.
///
/// `stage` 0 is the bit-reversal step, where nothing has been computed yet.
/// For `stage >= 1`, stages before it are complete and `butterfly` is the
/// index of the last finished butterfly within `stage`, or `None` if the
/// stage has not started. Each butterfly costs one multiplication and two
/// additions.
pub fn live_op_counts(n: usize, stage: usize, butterfly: Option<usize>) -> OpCounts {
    if stage == 0 {
        return OpCounts::default();
    }

    let n = n as u64;
    let completed = (stage - 1) as u64;
    let done = butterfly.map_or(0, |b| b as u64 + 1);

    OpCounts {
        mults: completed * (n / 2) + done,
        adds: completed * n + 2 * done,
    }
}

#[cfg(test)]
#[path = "accounting_tests.rs"]
mod tests;
