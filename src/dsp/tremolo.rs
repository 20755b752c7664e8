//! Tremolo: periodic amplitude modulation.
//!
//! A tremolo multiplies an external sample stream by the rectified output of
//! an embedded oscillator running at a modulation rate (classically 0.5-15
//! Hz). The absolute value keeps the modulation depth from ever inverting
//! the signal's polarity; depth scales how far the gain dips below unity.

use crate::dsp::oscillator::{Oscillator, WaveformKind};
use crate::error::{DspError, Result};

/// Amplitude modulator wrapping one oscillator.
///
/// Call order: `prepare`, then `set_frequency` (and optionally
/// `set_waveform`), then `process` per sample. Both setters may also be
/// driven between blocks from a control thread via the message queue.
#[derive(Debug, Clone, Default)]
pub struct Tremolo {
    osc: Oscillator,
    kind: WaveformKind,
    frequency: Option<f64>,
}

impl Tremolo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward the host sample rate to the embedded oscillator.
    pub fn prepare(&mut self, sample_rate: f64) -> Result<()> {
        self.osc.prepare(sample_rate)
    }

    /// Set the modulation rate in Hz. Required before the first `process`.
    pub fn set_frequency(&mut self, frequency: f64) -> Result<()> {
        if frequency <= 0.0 {
            return Err(DspError::OutOfRange {
                param: "frequency",
                value: frequency,
                expected: "> 0",
            });
        }
        self.frequency = Some(frequency);
        Ok(())
    }

    /// Select the modulation waveform (defaults to sine).
    pub fn set_waveform(&mut self, kind: WaveformKind) {
        self.kind = kind;
    }

    pub fn waveform(&self) -> WaveformKind {
        self.kind
    }

    /// Modulate one sample: `sample * (depth * |osc|)`, depth in [0, 1].
    ///
    /// The sine waveform keeps its audible-range check, so a sine tremolo
    /// below 20 Hz returns an error; use square/saw/triangle for classic
    /// sub-audible rates.
    pub fn process(&mut self, sample: f32, depth: f32) -> Result<f32> {
        if !(0.0..=1.0).contains(&depth) {
            return Err(DspError::OutOfRange {
                param: "depth",
                value: f64::from(depth),
                expected: "0..=1",
            });
        }
        let frequency = self.frequency.ok_or(DspError::FrequencyNotSet)?;
        let modulator = self.osc.process(self.kind, frequency, 0.0)?;
        Ok(sample * (depth * modulator.abs()))
    }
}
