//! Benchmarks for additive waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use wavekit::dsp::oscillator::Oscillator;

use crate::BLOCK_SIZES;

const SAMPLE_RATE: f64 = 48_000.0;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - one sin() per sample, no harmonic sum
        let mut osc = Oscillator::new();
        osc.prepare(SAMPLE_RATE).unwrap();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                for slot in buffer.iter_mut() {
                    *slot = osc.process_sine(black_box(440.0), 0.0).unwrap();
                }
            })
        });

        // Square - odd harmonics only
        let mut osc = Oscillator::new();
        osc.prepare(SAMPLE_RATE).unwrap();
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| {
                for slot in buffer.iter_mut() {
                    *slot = osc.process_square(black_box(440.0), 0.0).unwrap();
                }
            })
        });

        // Saw - every harmonic, the densest sum
        let mut osc = Oscillator::new();
        osc.prepare(SAMPLE_RATE).unwrap();
        group.bench_with_input(BenchmarkId::new("saw", size), &size, |b, _| {
            b.iter(|| {
                for slot in buffer.iter_mut() {
                    *slot = osc.process_saw(black_box(440.0), 0.0).unwrap();
                }
            })
        });

        // Triangle - odd harmonics at 1/h^2
        let mut osc = Oscillator::new();
        osc.prepare(SAMPLE_RATE).unwrap();
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |b, _| {
            b.iter(|| {
                for slot in buffer.iter_mut() {
                    *slot = osc.process_triangle(black_box(440.0), 0.0).unwrap();
                }
            })
        });
    }

    // Harmonic count scales inversely with pitch: A1 carries ~436 harmonics
    // at 48 kHz, A7 only ~6.
    for &frequency in &[55.0, 440.0, 3_520.0] {
        let mut osc = Oscillator::new();
        osc.prepare(SAMPLE_RATE).unwrap();
        let mut buffer = vec![0.0f32; 256];
        group.bench_with_input(
            BenchmarkId::new("saw_by_pitch", frequency as u32),
            &frequency,
            |b, &frequency| {
                b.iter(|| {
                    for slot in buffer.iter_mut() {
                        *slot = osc.process_saw(black_box(frequency), 0.0).unwrap();
                    }
                })
            },
        );
    }

    group.finish();
}
