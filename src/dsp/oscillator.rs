#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f64::consts::{PI, TAU};

use crate::dsp::phase::PhaseClock;
use crate::error::{DspError, Result};

/*
Additive Synthesis
==================

Every waveform here is built by summing weighted sine harmonics of a
fundamental frequency. For a fundamental f and phase time t:

    theta = 2*pi*f*t + phase_offset

    Sine:          sin(theta)
    Square:        (4/pi)        * sum over odd h of sin(h*theta) / h
    Saw:           (1/2 - 1/pi)  * sum over all h of sin(h*theta) / h
    Triangle:      (8/pi^2)      * sum over odd h of sin(h*theta) / h^2
    Impulse train: (pi/(2*H))    * sum over all h of sin(h*theta)

Band-limiting / the Nyquist bound
---------------------------------

Harmonics above half the sample rate would alias back into the audible band
as inharmonic garbage, so every sum stops at

    H = floor(sample_rate / (2 * frequency))

A 200 Hz fundamental at 48 kHz gets 120 harmonics; a 2 kHz fundamental gets
12. H depends only on (sample_rate, frequency), so it is cached against the
last frequency instead of recomputed every sample.

Cost
----

The harmonic sum costs one sin() per harmonic per sample, which grows as the
fundamental drops. The criterion benches characterize this across pitches;
at bass frequencies and high sample rates prefer rendering into a wavetable
offline if the budget is tight.

State
-----

Phase is the only state carried between calls. Frequency and waveform are
per-call parameters, so one oscillator can glide or switch shapes freely
without reconfiguration.
*/

/// Waveform selector for `Oscillator::process` and the tremolo modulator.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveformKind {
    #[default]
    Sine,
    Square,
    Saw,
    Triangle,
    ImpulseTrain,
}

/// Lowest frequency the sine generator accepts (Hz).
pub const AUDIBLE_MIN_HZ: f64 = 20.0;
/// Highest frequency the sine generator accepts (Hz).
pub const AUDIBLE_MAX_HZ: f64 = 20_000.0;

/// Additive-synthesis waveform generator.
///
/// `prepare` must run before any `process_*` call; a failed call never
/// advances the phase, so the host can retry after fixing its parameters
/// without a click.
#[derive(Debug, Clone, Default)]
pub struct Oscillator {
    clock: PhaseClock,
    cached_frequency: f64,
    cached_max_harmonic: u32,
}

impl Oscillator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply the host sample rate and reset the phase.
    pub fn prepare(&mut self, sample_rate: f64) -> Result<()> {
        self.clock.prepare(sample_rate)?;
        self.cached_frequency = 0.0;
        self.cached_max_harmonic = 0;
        Ok(())
    }

    fn ensure_prepared(&self) -> Result<()> {
        if self.clock.is_prepared() {
            Ok(())
        } else {
            Err(DspError::NotPrepared {
                component: "oscillator",
            })
        }
    }

    /// Highest harmonic of `frequency` that stays below Nyquist.
    fn max_harmonic(&mut self, frequency: f64) -> Result<u32> {
        if frequency <= 0.0 {
            return Err(DspError::OutOfRange {
                param: "frequency",
                value: frequency,
                expected: "> 0",
            });
        }
        if frequency != self.cached_frequency {
            self.cached_frequency = frequency;
            self.cached_max_harmonic =
                (self.clock.sample_rate() / (2.0 * frequency)).floor() as u32;
        }
        Ok(self.cached_max_harmonic)
    }

    /// Pure sine: `sin(2*pi*f*t + phase_offset)`.
    ///
    /// The only variant that enforces the audible range [20, 20000] Hz; the
    /// harmonic variants accept any positive frequency.
    pub fn process_sine(&mut self, frequency: f64, phase_offset: f64) -> Result<f32> {
        self.ensure_prepared()?;
        if !(AUDIBLE_MIN_HZ..=AUDIBLE_MAX_HZ).contains(&frequency) {
            return Err(DspError::OutOfRange {
                param: "frequency",
                value: frequency,
                expected: "20..=20000 Hz",
            });
        }
        let theta = TAU * frequency * self.clock.tick() + phase_offset;
        Ok(theta.sin() as f32)
    }

    /// Band-limited square: odd harmonics at `1/h`, scaled by `4/pi`.
    pub fn process_square(&mut self, frequency: f64, phase_offset: f64) -> Result<f32> {
        self.ensure_prepared()?;
        let max_harmonic = self.max_harmonic(frequency)?;
        let theta = TAU * frequency * self.clock.tick() + phase_offset;

        let mut sum = 0.0;
        let mut h = 1;
        while h <= max_harmonic {
            sum += (f64::from(h) * theta).sin() / f64::from(h);
            h += 2;
        }
        Ok(((4.0 / PI) * sum) as f32)
    }

    /// Band-limited sawtooth: all harmonics at `1/h`.
    ///
    /// The outer scale is `1/2 - 1/pi`, not the textbook `1/pi`
    /// normalisation; changing it would change the rendered level, so it is
    /// kept as-is.
    pub fn process_saw(&mut self, frequency: f64, phase_offset: f64) -> Result<f32> {
        self.ensure_prepared()?;
        let max_harmonic = self.max_harmonic(frequency)?;
        let theta = TAU * frequency * self.clock.tick() + phase_offset;

        let mut sum = 0.0;
        for h in 1..=max_harmonic {
            sum += (f64::from(h) * theta).sin() / f64::from(h);
        }
        Ok(((0.5 - 1.0 / PI) * sum) as f32)
    }

    /// Band-limited triangle: odd harmonics at `1/h^2`, scaled by `8/pi^2`.
    pub fn process_triangle(&mut self, frequency: f64, phase_offset: f64) -> Result<f32> {
        self.ensure_prepared()?;
        let max_harmonic = self.max_harmonic(frequency)?;
        let theta = TAU * frequency * self.clock.tick() + phase_offset;

        let mut sum = 0.0;
        let mut h = 1;
        while h <= max_harmonic {
            let hf = f64::from(h);
            sum += (hf * theta).sin() / (hf * hf);
            h += 2;
        }
        Ok(((8.0 / (PI * PI)) * sum) as f32)
    }

    /// Impulse train: every harmonic at unit amplitude, scaled by
    /// `pi / (2*H)`.
    ///
    /// A fundamental above Nyquist leaves no representable harmonics; the
    /// generator renders silence instead of dividing by the zero count.
    pub fn process_impulse_train(&mut self, frequency: f64, phase_offset: f64) -> Result<f32> {
        self.ensure_prepared()?;
        let max_harmonic = self.max_harmonic(frequency)?;
        if max_harmonic == 0 {
            self.clock.tick();
            return Ok(0.0);
        }
        let theta = TAU * frequency * self.clock.tick() + phase_offset;

        let mut sum = 0.0;
        for h in 1..=max_harmonic {
            sum += (f64::from(h) * theta).sin();
        }
        Ok(((PI / (2.0 * f64::from(max_harmonic))) * sum) as f32)
    }

    /// Dispatch over the waveform variants.
    pub fn process(
        &mut self,
        kind: WaveformKind,
        frequency: f64,
        phase_offset: f64,
    ) -> Result<f32> {
        match kind {
            WaveformKind::Sine => self.process_sine(frequency, phase_offset),
            WaveformKind::Square => self.process_square(frequency, phase_offset),
            WaveformKind::Saw => self.process_saw(frequency, phase_offset),
            WaveformKind::Triangle => self.process_triangle(frequency, phase_offset),
            WaveformKind::ImpulseTrain => self.process_impulse_train(frequency, phase_offset),
        }
    }
}
