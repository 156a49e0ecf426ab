pub mod direct;
pub mod staged;
mod core;

pub use crate::common::{FftError, Transform};
pub use self::core::{bit_reverse, bit_reverse_permute};
pub use direct::{DirectDft, direct_transform};
pub use staged::{Butterfly, RadixTwoFft, StagedFft, staged_fft};

use alloc::vec::Vec;
use num_complex::Complex64;

use crate::math::{magnitude, phase};

/// One frequency bin in polar form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpectrumBin {
    pub bin: usize,
    pub magnitude: f64,
    pub phase: f64,
}

/// Projects a spectrum onto magnitude and phase per bin.
pub fn spectrum_bins(spectrum: &[Complex64]) -> Vec<SpectrumBin> {
    spectrum
        .iter()
        .enumerate()
        .map(|(bin, &x)| SpectrumBin {
            bin,
            magnitude: magnitude(x),
            phase: phase(x),
        })
        .collect()
}
