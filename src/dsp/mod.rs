//! Low-level DSP primitives driven one sample at a time.
//!
//! These components are allocation-free once constructed and realtime-safe:
//! no locks, no I/O, no dynamic allocation on the audio path. Each instance
//! is owned and driven by exactly one logical channel's call sequence; the
//! host composes them per channel and pulls one sample per call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Raw-gain / decibel conversions.
pub mod db;
/// Stateless per-sample waveshaping functions.
pub mod distortion;
/// Precomputed fade-in/out gain ramps.
pub mod fade;
/// Running peak and windowed RMS metering.
pub mod meter;
/// Additive-synthesis waveform generation.
pub mod oscillator;
/// Constant-power and constant-amplitude pan laws.
pub mod pan;
/// Normalized phase-time bookkeeping for the oscillators.
pub mod phase;
/// Mid/side codec, stereo width, and goniometer conversions.
pub mod stereo;
/// Amplitude modulation driven by an embedded oscillator.
pub mod tremolo;

pub use fade::FadeDirection;
pub use oscillator::WaveformKind;
pub use pan::PanningLaw;

/// Stereo channel selector.
///
/// The stereo transforms operate on exactly two channels; selecting with an
/// enum instead of an index makes a third channel unrepresentable.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
}
