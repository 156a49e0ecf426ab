//! Introspectable discrete Fourier transforms.
//!
//! Computes a reference O(N²) direct DFT and a radix-2 decimation-in-time FFT
//! that keeps every intermediate state: the bit-reversed input, the working
//! buffer after each butterfly stage, and each butterfly's operand indices and
//! twiddle factor. Operation counts and wall-clock medians are provided for
//! comparing the two algorithms.
//!
//! ## Cargo features
//!
//! - `std` (default): native trigonometry, benchmarking and entropy-seeded noise
//! - `serde`: `Serialize`/`Deserialize` for every result type
//! - `verbose-logging`: `log` records for generation, stages and benchmarks

#![no_std]

extern crate alloc;

// Enables the standard library for tests and the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

/// Forwards to `log::$level!` when `verbose-logging` is enabled, expands to nothing otherwise.
macro_rules! verbose {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "verbose-logging")]
        log::$level!($($arg)+);
    };
}

pub mod accounting;
#[cfg(feature = "std")]
pub mod bench;
pub mod common;
pub mod math;
pub mod signal;
pub mod transform;

pub use accounting::{ComplexityReport, OpCounts, live_op_counts, theoretical_op_counts};
#[cfg(feature = "std")]
pub use bench::{Analysis, ComputationStats, analyze, benchmark};
pub use common::{FftError, Transform, check_size};
pub use num_complex::Complex64;
pub use signal::{SUPPORTED_SIZES, SignalConfig, SignalPreset, generate_signal};
pub use transform::{
    Butterfly, DirectDft, RadixTwoFft, SpectrumBin, StagedFft, direct_transform, spectrum_bins,
    staged_fft,
};
