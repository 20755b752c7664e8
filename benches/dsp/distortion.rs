//! Benchmarks for waveshaping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavekit::dsp::distortion;

use crate::BLOCK_SIZES;

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();

        // Hard clip - one validated threshold per block
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("hard_clip", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::hard_clip_buffer(black_box(&mut buffer), black_box(0.5)).unwrap();
            })
        });

        // Cubic soft clip - polynomial only
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("cubic_soft_clip", size), &size, |b, _| {
            b.iter(|| {
                for (slot, &sample) in buffer.iter_mut().zip(&input) {
                    *slot = distortion::cubic_soft_clip(black_box(sample));
                }
            })
        });

        // Arctangent soft clip - one transcendental per sample
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("arctan_soft_clip", size), &size, |b, _| {
            b.iter(|| {
                for (slot, &sample) in buffer.iter_mut().zip(&input) {
                    *slot =
                        distortion::arctan_soft_clip(black_box(sample), black_box(4.0)).unwrap();
                }
            })
        });
    }

    group.finish();
}
