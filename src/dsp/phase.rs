use crate::error::{DspError, Result};

/// Tracks elapsed normalized phase time for a generator.
///
/// `tick()` hands out the current time and advances it by one sample period
/// (`1 / sample_rate`), wrapping to zero at the cycle boundary so long
/// renders never lose precision to an ever-growing accumulator. Every
/// waveform shares this wrap, including the plain sine.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseClock {
    sample_rate: f64,
    time_step: f64,
    current_time: f64,
}

impl PhaseClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the host sample rate and reset the phase.
    ///
    /// Must be called before the first `tick()`.
    pub fn prepare(&mut self, sample_rate: f64) -> Result<()> {
        if sample_rate <= 0.0 {
            return Err(DspError::OutOfRange {
                param: "sample_rate",
                value: sample_rate,
                expected: "> 0",
            });
        }
        self.sample_rate = sample_rate;
        self.time_step = sample_rate.recip();
        self.current_time = 0.0;
        Ok(())
    }

    pub fn is_prepared(&self) -> bool {
        self.sample_rate > 0.0
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Return the current normalized time, then advance by one sample.
    #[inline]
    pub fn tick(&mut self) -> f64 {
        let now = self.current_time;
        self.current_time += self.time_step;
        if self.current_time >= 1.0 {
            self.current_time = 0.0;
        }
        now
    }
}
