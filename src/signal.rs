// src/signal.rs

//! Input signal presets.
//!
//! Every preset is evaluated at normalized time `t = n / N` and produces
//! real-valued samples (the imaginary part is always zero).

use alloc::vec::Vec;
use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

use num_complex::Complex64;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::common::{FftError, check_size};
use crate::math::sin;

/// Sizes offered by the visualization layer. The engine itself accepts any power of two.
pub const SUPPORTED_SIZES: [usize; 5] = [2, 4, 8, 16, 32];

/// Seed used for unseeded noise when no entropy source is linked.
#[cfg(not(feature = "std"))]
const FALLBACK_NOISE_SEED: u64 = 0x5EED_F0F7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SignalPreset {
    SingleTone,
    TwoTones,
    Impulse,
    Step,
    RandomNoise,
    Chirp,
}

impl SignalPreset {
    pub const ALL: [SignalPreset; 6] = [
        SignalPreset::SingleTone,
        SignalPreset::TwoTones,
        SignalPreset::Impulse,
        SignalPreset::Step,
        SignalPreset::RandomNoise,
        SignalPreset::Chirp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignalPreset::SingleTone => "Single Tone",
            SignalPreset::TwoTones => "Two Tones",
            SignalPreset::Impulse => "Impulse",
            SignalPreset::Step => "Step",
            SignalPreset::RandomNoise => "Random Noise",
            SignalPreset::Chirp => "Chirp",
        }
    }

    /// Whether the same configuration always yields the same samples.
    pub fn is_deterministic(self) -> bool {
        self != SignalPreset::RandomNoise
    }
}

impl fmt::Display for SignalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SignalPreset {
    type Err = FftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignalPreset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or(FftError::UnknownPreset)
    }
}

/// Parameters for [`generate_signal`].
///
/// Tone 1 (`f1`, `a1`, `p1`) drives the single tone, two tones and chirp
/// presets; `a1` is also the noise amplitude. Tone 2 only affects two tones.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalConfig {
    pub n: usize,
    pub preset: SignalPreset,
    pub f1: f64,
    pub a1: f64,
    pub p1: f64,
    pub f2: f64,
    pub a2: f64,
    pub p2: f64,
    /// Seeds the random noise preset. `None` draws a fresh stream each call.
    pub seed: Option<u64>,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            n: 16,
            preset: SignalPreset::TwoTones,
            f1: 2.0,
            a1: 1.0,
            p1: 0.0,
            f2: 5.0,
            a2: 0.5,
            p2: 0.0,
            seed: None,
        }
    }
}

impl SignalConfig {
    pub fn new(n: usize, preset: SignalPreset) -> Self {
        Self {
            n,
            preset,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that `n` is a power of two and at least 2.
    pub fn validate(&self) -> Result<(), FftError> {
        check_size(self.n).map(|_| ())
    }

    fn noise_rng(&self) -> SmallRng {
        match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            #[cfg(feature = "std")]
            None => SmallRng::from_entropy(),
            #[cfg(not(feature = "std"))]
            None => SmallRng::seed_from_u64(FALLBACK_NOISE_SEED),
        }
    }
}

fn tone(amplitude: f64, frequency: f64, phase: f64, t: f64) -> f64 {
    amplitude * sin(2.0 * PI * frequency * t + phase)
}

/// Produces `config.n` samples of the configured preset.
pub fn generate_signal(config: &SignalConfig) -> Result<Vec<Complex64>, FftError> {
    config.validate()?;
    let n = config.n;
    verbose!(debug, "generating {} samples of {}", n, config.preset);

    let mut rng: Option<SmallRng> = None;

    let signal = (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            let value = match config.preset {
                SignalPreset::SingleTone => tone(config.a1, config.f1, config.p1, t),
                SignalPreset::TwoTones => {
                    tone(config.a1, config.f1, config.p1, t)
                        + tone(config.a2, config.f2, config.p2, t)
                }
                SignalPreset::Impulse => {
                    if i == 0 { 1.0 } else { 0.0 }
                }
                SignalPreset::Step => {
                    if i >= n / 2 { 1.0 } else { 0.0 }
                }
                SignalPreset::RandomNoise => {
                    let rng = rng.get_or_insert_with(|| config.noise_rng());
                    (rng.r#gen::<f64>() * 2.0 - 1.0) * config.a1
                }
                // Instantaneous frequency sweeps linearly from 0 to f1.
                SignalPreset::Chirp => config.a1 * sin(2.0 * PI * (config.f1 / 2.0) * t * t),
            };
            Complex64::new(value, 0.0)
        })
        .collect();

    Ok(signal)
}

#[cfg(test)]
#[path = "signal_tests.rs"]
mod tests;
