#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DspError, Result};

/// Capacity of the ramp buffer.
pub const MAX_RAMP_LEN: usize = 8_192;

/// Direction of a fade ramp.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeDirection {
    #[default]
    In,
    Out,
}

/// Precomputes a fade-in/out gain curve into a fixed-capacity buffer.
///
/// The ramp is built once (off the audio path if desired) and then read
/// sample-by-sample by the caller:
///
/// ```text
/// ramp[i] = (e^(curve * x) - 1) / (e^curve - 1)
/// ```
///
/// where `x` runs 0 -> 1 for a fade-in and 1 -> 0 for a fade-out. `curve`
/// shapes the contour: values near zero are close to linear, positive values
/// bow exponential (slow start), negative values bow logarithmic (fast
/// start). A curve of exactly 0 would divide by zero, so it is substituted
/// with 0.1.
#[derive(Debug)]
pub struct FadeRampBuilder {
    ramp: Box<[f32]>,
    len: usize,
    direction: FadeDirection,
}

impl Default for FadeRampBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeRampBuilder {
    pub fn new() -> Self {
        Self {
            ramp: vec![0.0; MAX_RAMP_LEN].into_boxed_slice(),
            len: 0,
            direction: FadeDirection::In,
        }
    }

    /// Fill the ramp with `num_samples` gains for the given direction.
    ///
    /// The passed `direction` is authoritative and is stored; the endpoints
    /// never come from a previously stored value.
    pub fn build_ramp(
        &mut self,
        num_samples: usize,
        direction: FadeDirection,
        curve: f32,
    ) -> Result<()> {
        if num_samples == 0 || num_samples > MAX_RAMP_LEN {
            return Err(DspError::OutOfRange {
                param: "num_samples",
                value: num_samples as f64,
                expected: "1..=8192",
            });
        }
        let curve = if curve == 0.0 { 0.1 } else { curve };
        self.direction = direction;

        let (start, end) = match direction {
            FadeDirection::In => (0.0f32, 1.0f32),
            FadeDirection::Out => (1.0, 0.0),
        };
        let denominator = curve.exp() - 1.0;
        for i in 0..num_samples {
            let x = start + (end - start) * (i as f32 / num_samples as f32);
            self.ramp[i] = ((curve * x).exp() - 1.0) / denominator;
        }
        self.len = num_samples;
        Ok(())
    }

    /// The gains built by the last `build_ramp` call.
    pub fn ramp(&self) -> &[f32] {
        &self.ramp[..self.len]
    }

    pub fn direction(&self) -> FadeDirection {
        self.direction
    }
}
