#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::f32::consts::FRAC_PI_2;

use crate::dsp::Channel;
use crate::error::{DspError, Result};

/*
Pan Laws
========

A pan law maps a pan position p in [0, 1] (0 = hard left, 0.5 = center,
1 = hard right) to a per-channel gain. With v = 1-p for the left channel and
v = p for the right:

    Linear           v                     center gain 0.5  (-6 dB)
    PowerSine        sin(v * pi/2)         center gain 0.707 (-3 dB)
    PowerSquare      sqrt(v)               center gain 0.707 (-3 dB)
    ModifiedSine     v^0.75                center gain 0.595 (-4.5 dB)
    ModifiedSquare   sqrt(v * sin(v*pi/2)) center gain 0.652 (-3.7 dB)

The "Power" laws keep left^2 + right^2 constant across the sweep, so
perceived loudness holds steady while panning. Linear keeps left + right
constant instead, which sounds quieter in the middle; the "Modified" laws
sit between the two.
*/

/// Gain law applied by the panner.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanningLaw {
    #[default]
    Linear,
    PowerSine,
    PowerSquare,
    ModifiedSine,
    ModifiedSquare,
}

/// Stereo panner: applies the selected law's gain per channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Panner {
    law: PanningLaw,
}

impl Panner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_law(&mut self, law: PanningLaw) {
        self.law = law;
    }

    pub fn law(&self) -> PanningLaw {
        self.law
    }

    /// Apply the pan gain for `channel` to `sample`. `pan` in [0, 1].
    pub fn process(&self, channel: Channel, sample: f32, pan: f32) -> Result<f32> {
        if !(0.0..=1.0).contains(&pan) {
            return Err(DspError::OutOfRange {
                param: "pan",
                value: f64::from(pan),
                expected: "0..=1",
            });
        }
        let v = match channel {
            Channel::Left => 1.0 - pan,
            Channel::Right => pan,
        };
        let gain = match self.law {
            PanningLaw::Linear => v,
            PanningLaw::PowerSine => (v * FRAC_PI_2).sin(),
            PanningLaw::PowerSquare => v.sqrt(),
            PanningLaw::ModifiedSine => v.powf(0.75),
            PanningLaw::ModifiedSquare => (v * (v * FRAC_PI_2).sin()).sqrt(),
        };
        Ok(sample * gain)
    }
}
