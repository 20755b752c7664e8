//! Stateless per-sample waveshaping functions.
//!
//! A waveshaper applies a transfer function to each sample independently:
//! every function here is pure, so the same input always produces the same
//! output. The clip-style shapers bound the output; the rectifiers discard
//! or fold polarity; the soft clips round peaks off gradually instead of
//! slicing them flat.

use std::f32::consts::PI;

use crate::error::{DspError, Result};

/// Infinite clip: collapse the signal to its sign.
///
/// The most extreme waveshaper - every nonzero sample becomes full scale,
/// turning any input into a square-like wave.
#[inline]
pub fn infinite_clip(sample: f32) -> f32 {
    if sample > 0.0 {
        1.0
    } else if sample < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Half-wave rectify: clamp negative samples to zero.
#[inline]
pub fn half_wave_rectify(sample: f32) -> f32 {
    sample.max(0.0)
}

/// Full-wave rectify: absolute value.
#[inline]
pub fn full_wave_rectify(sample: f32) -> f32 {
    sample.abs()
}

/// Hard clip to `[-max_thresh, max_thresh]`, `max_thresh` in [0, 1].
#[inline]
pub fn hard_clip(sample: f32, max_thresh: f32) -> Result<f32> {
    if !(0.0..=1.0).contains(&max_thresh) {
        return Err(DspError::OutOfRange {
            param: "max_thresh",
            value: f64::from(max_thresh),
            expected: "0..=1",
        });
    }
    Ok(sample.clamp(-max_thresh, max_thresh))
}

/// Cubic soft clip: `x - x^3/3`.
///
/// Gentle saturation with a smooth knee; unity slope at zero so quiet
/// signals pass untouched.
#[inline]
pub fn cubic_soft_clip(sample: f32) -> f32 {
    sample - (sample * sample * sample) / 3.0
}

/// Arctangent soft clip: `(2/pi) * atan(coefficient * x)`,
/// `coefficient` in [1, 10].
///
/// Higher coefficients push the knee closer to a hard clip.
#[inline]
pub fn arctan_soft_clip(sample: f32, coefficient: f32) -> Result<f32> {
    if !(1.0..=10.0).contains(&coefficient) {
        return Err(DspError::OutOfRange {
            param: "coefficient",
            value: f64::from(coefficient),
            expected: "1..=10",
        });
    }
    Ok((2.0 / PI) * (coefficient * sample).atan())
}

/// Hard clip an entire buffer in place, validating the threshold once.
pub fn hard_clip_buffer(buffer: &mut [f32], max_thresh: f32) -> Result<()> {
    if !(0.0..=1.0).contains(&max_thresh) {
        return Err(DspError::OutOfRange {
            param: "max_thresh",
            value: f64::from(max_thresh),
            expected: "0..=1",
        });
    }
    for sample in buffer.iter_mut() {
        *sample = sample.clamp(-max_thresh, max_thresh);
    }
    Ok(())
}

/// Full-wave rectify an entire buffer in place.
pub fn full_wave_rectify_buffer(buffer: &mut [f32]) {
    for sample in buffer.iter_mut() {
        *sample = sample.abs();
    }
}
