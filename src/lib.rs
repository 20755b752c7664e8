//! Per-sample, realtime-safe DSP primitives for audio synthesis and analysis.
//!
//! The host supplies a sample rate once via `prepare`, then pulls one output
//! sample per call on its audio thread. Components are mono and composed per
//! channel by the caller, e.g. oscillator -> tremolo -> panner -> meter.

pub mod control;
pub mod dsp;
pub mod error;

pub use error::{DspError, Result};
