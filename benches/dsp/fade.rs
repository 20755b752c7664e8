//! Benchmarks for fade ramp construction.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavekit::dsp::fade::{FadeDirection, FadeRampBuilder, MAX_RAMP_LEN};

pub fn bench_fade(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fade");

    for &len in &[256usize, 2_048, MAX_RAMP_LEN] {
        let mut builder = FadeRampBuilder::new();
        group.bench_with_input(BenchmarkId::new("build_ramp", len), &len, |b, &len| {
            b.iter(|| {
                builder
                    .build_ramp(black_box(len), FadeDirection::In, black_box(2.0))
                    .unwrap();
            })
        });
    }

    group.finish();
}
