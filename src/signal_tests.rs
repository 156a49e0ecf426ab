use super::*;
use alloc::string::ToString;
use core::f64::consts::PI;

const EPSILON: f64 = 1e-12;

fn real_parts(signal: &[Complex64]) -> Vec<f64> {
    signal.iter().map(|s| s.re).collect()
}

fn assert_all_real(signal: &[Complex64]) {
    for (n, s) in signal.iter().enumerate() {
        assert_eq!(s.im, 0.0, "sample {} has an imaginary part", n);
    }
}

#[test]
fn test_impulse_8() {
    let signal = generate_signal(&SignalConfig::new(8, SignalPreset::Impulse)).unwrap();
    assert_eq!(real_parts(&signal), [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    assert_all_real(&signal);
}

#[test]
fn test_step_8() {
    let signal = generate_signal(&SignalConfig::new(8, SignalPreset::Step)).unwrap();
    assert_eq!(real_parts(&signal), [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn test_single_tone() {
    let config = SignalConfig {
        f1: 1.0,
        a1: 2.0,
        p1: PI / 2.0,
        ..SignalConfig::new(4, SignalPreset::SingleTone)
    };
    // 2 * sin(2*pi*t + pi/2) = 2 * cos(2*pi*t) at t = 0, 1/4, 1/2, 3/4
    let expected = [2.0, 0.0, -2.0, 0.0];
    let signal = generate_signal(&config).unwrap();
    for (got, want) in signal.iter().zip(expected) {
        assert!((got.re - want).abs() < EPSILON, "{} vs {}", got.re, want);
    }
    assert_all_real(&signal);
}

#[test]
fn test_two_tones_is_sum_of_tones() {
    let config = SignalConfig::default();
    let two = generate_signal(&config).unwrap();
    let first = generate_signal(&SignalConfig {
        preset: SignalPreset::SingleTone,
        ..config
    })
    .unwrap();
    let second = generate_signal(&SignalConfig {
        preset: SignalPreset::SingleTone,
        f1: config.f2,
        a1: config.a2,
        p1: config.p2,
        ..config
    })
    .unwrap();

    for n in 0..config.n {
        assert!((two[n].re - (first[n].re + second[n].re)).abs() < EPSILON);
    }
}

#[test]
fn test_chirp() {
    let config = SignalConfig {
        f1: 4.0,
        a1: 1.5,
        ..SignalConfig::new(16, SignalPreset::Chirp)
    };
    let signal = generate_signal(&config).unwrap();
    assert_eq!(signal[0].re, 0.0);
    for (n, s) in signal.iter().enumerate() {
        let t = n as f64 / 16.0;
        let want = 1.5 * (2.0 * PI * 2.0 * t * t).sin();
        assert!((s.re - want).abs() < EPSILON);
    }
}

#[test]
fn test_noise_bounded_by_amplitude() {
    let config = SignalConfig {
        a1: 0.25,
        ..SignalConfig::new(256, SignalPreset::RandomNoise)
    };
    let signal = generate_signal(&config).unwrap();
    assert_eq!(signal.len(), 256);
    assert_all_real(&signal);
    assert!(signal.iter().all(|s| s.re.abs() <= 0.25));
    assert!(signal.iter().any(|s| s.re != 0.0));
}

#[test]
fn test_seeded_noise_is_reproducible() {
    let config = SignalConfig::new(32, SignalPreset::RandomNoise).with_seed(42);
    let a = generate_signal(&config).unwrap();
    let b = generate_signal(&config).unwrap();
    assert_eq!(a, b);

    let c = generate_signal(&config.with_seed(43)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn test_every_preset_has_n_samples() {
    for preset in SignalPreset::ALL {
        for n in SUPPORTED_SIZES {
            let signal = generate_signal(&SignalConfig::new(n, preset)).unwrap();
            assert_eq!(signal.len(), n, "{} at N={}", preset, n);
        }
    }
}

#[test]
fn test_invalid_sizes() {
    let bad = SignalConfig::new(12, SignalPreset::Impulse);
    assert_eq!(generate_signal(&bad), Err(FftError::NotPowerOfTwo(12)));
    let tiny = SignalConfig::new(1, SignalPreset::Impulse);
    assert_eq!(tiny.validate(), Err(FftError::TooShort(1)));
}

#[test]
fn test_default_config() {
    let config = SignalConfig::default();
    assert_eq!(config.n, 16);
    assert_eq!(config.preset, SignalPreset::TwoTones);
    assert_eq!((config.f1, config.a1, config.p1), (2.0, 1.0, 0.0));
    assert_eq!((config.f2, config.a2, config.p2), (5.0, 0.5, 0.0));
    assert_eq!(config.seed, None);
}

#[test]
fn test_preset_names_round_trip() {
    for preset in SignalPreset::ALL {
        assert_eq!(preset.to_string().parse::<SignalPreset>(), Ok(preset));
    }
    assert_eq!("Square".parse::<SignalPreset>(), Err(FftError::UnknownPreset));
    assert!(!SignalPreset::RandomNoise.is_deterministic());
    assert!(SignalPreset::Chirp.is_deterministic());
}
