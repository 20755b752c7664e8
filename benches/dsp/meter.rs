//! Benchmarks for peak and RMS metering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavekit::dsp::meter::Meter;

use crate::BLOCK_SIZES;

pub fn bench_meter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/meter");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        let mut meter = Meter::new();
        group.bench_with_input(BenchmarkId::new("peak", size), &size, |b, _| {
            b.iter(|| {
                for &sample in &input {
                    meter.update_peak(black_box(sample));
                }
            })
        });

        // Window sized to the block: every block crosses the wrap point and
        // pays the full drift recompute once.
        let mut meter = Meter::new();
        group.bench_with_input(BenchmarkId::new("rms_with_wrap", size), &size, |b, _| {
            b.iter(|| {
                for &sample in &input {
                    meter.update_rms(black_box(sample), size).unwrap();
                }
            })
        });

        // Large window: the wrap recompute amortizes to near zero.
        let mut meter = Meter::new();
        group.bench_with_input(BenchmarkId::new("rms_incremental", size), &size, |b, _| {
            b.iter(|| {
                for &sample in &input {
                    meter.update_rms(black_box(sample), 48_000).unwrap();
                }
            })
        });
    }

    group.finish();
}
