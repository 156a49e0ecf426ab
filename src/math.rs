// src/math.rs

//! Complex arithmetic primitives over [`Complex64`].
//!
//! Every function is pure and returns a new value. NaN and infinities propagate
//! per IEEE 754; nothing here checks for them.

use core::f64::consts::PI;
use num_complex::Complex64;

pub fn add(a: Complex64, b: Complex64) -> Complex64 {
    a + b
}

pub fn sub(a: Complex64, b: Complex64) -> Complex64 {
    a - b
}

/// `re = a.re*b.re - a.im*b.im`, `im = a.re*b.im + a.im*b.re`.
pub fn mul(a: Complex64, b: Complex64) -> Complex64 {
    a * b
}

pub fn magnitude(a: Complex64) -> f64 {
    sqrt(a.norm_sqr())
}

/// Angle of `a` in radians, `atan2(im, re)`.
pub fn phase(a: Complex64) -> f64 {
    atan2(a.im, a.re)
}

/// The point on the unit circle at `angle` radians: `(cos, sin)`.
pub fn unit_exp(angle: f64) -> Complex64 {
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// Twiddle factor `W_n^k = e^(-2πik/n)`.
///
/// The negative exponent is the forward-transform convention; flipping it
/// computes the inverse transform instead.
pub fn twiddle(k: usize, n: usize) -> Complex64 {
    let angle = -2.0 * PI * (k as f64) / (n as f64);
    unit_exp(angle)
}

/// Sum of squared magnitudes.
pub fn energy(samples: &[Complex64]) -> f64 {
    samples.iter().map(|s| s.norm_sqr()).sum()
}

/// Agnostic sin/cos helper
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

pub(crate) fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

pub(crate) fn sqrt(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(not(feature = "std"))]
    return libm::sqrt(x);
}

pub(crate) fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(feature = "std")]
    return y.atan2(x);

    #[cfg(not(feature = "std"))]
    return libm::atan2(y, x);
}

pub(crate) fn log2(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.log2();

    #[cfg(not(feature = "std"))]
    return libm::log2(x);
}

pub(crate) fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round();

    #[cfg(not(feature = "std"))]
    return libm::round(x);
}

#[cfg(test)]
#[path = "math_tests.rs"]
mod tests;
