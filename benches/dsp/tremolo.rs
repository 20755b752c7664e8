//! Benchmarks for the tremolo modulator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavekit::dsp::tremolo::Tremolo;
use wavekit::dsp::WaveformKind;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f64 = 48_000.0;

pub fn bench_tremolo(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/tremolo");

    for &size in BLOCK_SIZES {
        let input: Vec<f32> = (0..size).map(|i| (i as f32 * 0.05).sin() * 0.5).collect();
        let mut output = vec![0.0f32; size];

        for kind in [WaveformKind::Square, WaveformKind::Triangle] {
            let mut tremolo = Tremolo::new();
            tremolo.prepare(SAMPLE_RATE).unwrap();
            tremolo.set_frequency(5.0).unwrap();
            tremolo.set_waveform(kind);

            let label = format!("{kind:?}").to_lowercase();
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    for (slot, &sample) in output.iter_mut().zip(&input) {
                        *slot = tremolo.process(black_box(sample), black_box(0.5)).unwrap();
                    }
                })
            });
        }
    }

    group.finish();
}
