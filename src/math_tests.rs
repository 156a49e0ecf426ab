use super::*;
use core::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use num_complex::Complex64;

const EPSILON: f64 = 1e-12;

fn assert_feq(a: f64, b: f64) {
    assert!(
        (a - b).abs() < EPSILON,
        "Float mismatch: {} vs {}", a, b
    );
}

fn assert_cplx_eq(a: Complex64, b: Complex64) {
    assert!(
        (a - b).l1_norm() < EPSILON,
        "Complex mismatch: {} vs {}", a, b
    );
}

#[test]
fn test_arithmetic() {
    let a = Complex64::new(1.0, 2.0);
    let b = Complex64::new(3.0, -4.0);

    assert_cplx_eq(add(a, b), Complex64::new(4.0, -2.0));
    assert_cplx_eq(sub(a, b), Complex64::new(-2.0, 6.0));
    // (1 + 2i)(3 - 4i) = 3 - 4i + 6i + 8 = 11 + 2i
    assert_cplx_eq(mul(a, b), Complex64::new(11.0, 2.0));
}

#[test]
fn test_operands_untouched() {
    let a = Complex64::new(1.5, -0.5);
    let b = Complex64::new(-2.0, 0.25);
    let _ = mul(a, b);
    assert_eq!(a, Complex64::new(1.5, -0.5));
    assert_eq!(b, Complex64::new(-2.0, 0.25));
}

#[test]
fn test_magnitude_and_phase() {
    assert_feq(magnitude(Complex64::new(3.0, 4.0)), 5.0);
    assert_feq(phase(Complex64::new(0.0, 1.0)), FRAC_PI_2);
    assert_feq(phase(Complex64::new(-1.0, 0.0)), PI);
    assert_feq(phase(Complex64::new(1.0, -1.0)), -FRAC_PI_4);
}

#[test]
fn test_unit_exp() {
    assert_cplx_eq(unit_exp(0.0), Complex64::new(1.0, 0.0));
    assert_cplx_eq(unit_exp(FRAC_PI_2), Complex64::new(0.0, 1.0));
    assert_feq(magnitude(unit_exp(1.234)), 1.0);
}

#[test]
fn test_twiddle_8() {
    // Twiddles are e^(-j * 2*pi * k / N)
    // k=0: exp(0) = 1
    // k=1: exp(-j * pi/4) = sqrt(2)/2 - j*sqrt(2)/2
    // k=2: exp(-j * pi/2) = -j
    // k=3: -sqrt(2)/2 - j*sqrt(2)/2
    let sqrt2_2 = 2.0f64.sqrt() / 2.0;
    assert_cplx_eq(twiddle(0, 8), Complex64::new(1.0, 0.0));
    assert_cplx_eq(twiddle(1, 8), Complex64::new(sqrt2_2, -sqrt2_2));
    assert_cplx_eq(twiddle(2, 8), Complex64::new(0.0, -1.0));
    assert_cplx_eq(twiddle(3, 8), Complex64::new(-sqrt2_2, -sqrt2_2));
}

#[test]
fn test_twiddle_is_periodic() {
    assert_cplx_eq(twiddle(9, 8), twiddle(1, 8));
    assert_cplx_eq(twiddle(2, 4), twiddle(4, 8));
}

#[test]
fn test_energy() {
    let samples = [Complex64::new(3.0, 4.0), Complex64::new(1.0, 0.0)];
    assert_feq(energy(&samples), 26.0);
    assert_feq(energy(&[]), 0.0);
}

#[test]
fn test_nan_propagates() {
    let nan = Complex64::new(f64::NAN, 0.0);
    assert!(mul(nan, Complex64::new(1.0, 1.0)).re.is_nan());
    assert!(magnitude(nan).is_nan());
}

#[test]
fn test_sin_cos() {
    let (s, c) = sin_cos(FRAC_PI_4);
    let sqrt2_2 = 2.0f64.sqrt() / 2.0;
    assert_feq(s, sqrt2_2);
    assert_feq(c, sqrt2_2);
}
