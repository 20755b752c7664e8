//! Benchmarks for low-level DSP primitives.

mod distortion;
mod fade;
mod meter;
mod oscillator;
mod tremolo;

pub use distortion::bench_distortion;
pub use fade::bench_fade;
pub use meter::bench_meter;
pub use oscillator::bench_oscillator;
pub use tremolo::bench_tremolo;
