//! Prints every stage of a small FFT next to the direct transform.
//!
//! cargo run --example walkthrough --features verbose-logging
use staged_fft::{SignalConfig, SignalPreset, analyze, bench::DEFAULT_TRIALS, live_op_counts, spectrum_bins};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let config = SignalConfig::new(8, SignalPreset::Step);
    let analysis = match analyze(&config, DEFAULT_TRIALS) {
        Ok(analysis) => analysis,
        Err(err) => {
            eprintln!("analysis failed: {err}");
            return;
        }
    };

    println!("input ({}, N = {}):", config.preset, config.n);
    for (n, x) in analysis.signal.iter().enumerate() {
        println!("  x[{n}] = {:.4}", x.re);
    }

    for (s, stage) in analysis.staged.stages().iter().enumerate() {
        println!("stage {s}:");
        for (i, x) in stage.iter().enumerate() {
            println!("  [{i}] {:>8.4} {:+8.4}j", x.re, x.im);
        }
        if let Some(butterflies) = analysis.staged.stage_butterflies(s + 1) {
            for (i, b) in butterflies.iter().enumerate() {
                let ops = live_op_counts(config.n, s + 1, Some(i));
                println!("    {b}  (mults so far {}, adds so far {})", ops.mults, ops.adds);
            }
        }
    }

    println!("spectrum:");
    for bin in spectrum_bins(analysis.staged.spectrum()) {
        println!("  X[{}] |{:.4}| ∠{:.4}", bin.bin, bin.magnitude, bin.phase);
    }

    let stats = analysis.stats;
    println!(
        "direct: {:.4} ms, {} mults, {} adds",
        stats.dft_time_ms, stats.dft_ops.mults, stats.dft_ops.adds
    );
    println!(
        "staged: {:.4} ms, {} mults, {} adds",
        stats.fft_time_ms, stats.fft_ops.mults, stats.fft_ops.adds
    );
}
