//! Running peak and windowed RMS measurement.
//!
//! The RMS window is a ring of the configured size inside a fixed-capacity
//! backing buffer allocated once at construction. Each update is O(1): evict
//! the oldest square, add the newest, take the square root. Incremental
//! updates accumulate floating-point drift, so once per window the sum is
//! recomputed from the live contents - an O(window) pass whose cost is
//! bounded and predictable, keeping the component realtime-safe.

use crate::error::{DspError, Result};

/// Capacity of the RMS ring: one second of audio at 192 kHz.
pub const MAX_RMS_WINDOW: usize = 192_000;

/// Peak and windowed-RMS meter for one sample stream.
#[derive(Debug)]
pub struct Meter {
    peak: f32,
    rms: f32,
    window: Box<[f32]>,
    write_index: usize,
    sum_of_squares: f64,
}

impl Default for Meter {
    fn default() -> Self {
        Self::new()
    }
}

impl Meter {
    pub fn new() -> Self {
        Self {
            peak: 0.0,
            rms: 0.0,
            window: vec![0.0; MAX_RMS_WINDOW].into_boxed_slice(),
            write_index: 0,
            sum_of_squares: 0.0,
        }
    }

    /// Track the largest absolute sample seen since the last `reset`.
    #[inline]
    pub fn update_peak(&mut self, sample: f32) {
        self.peak = sample.abs().max(self.peak);
    }

    /// Largest absolute sample seen since the last `reset`. Monotonic
    /// non-decreasing between resets.
    pub fn peak(&self) -> f32 {
        self.peak
    }

    /// Zero the peak.
    pub fn reset(&mut self) {
        self.peak = 0.0;
    }

    /// Fold `sample` into the RMS window of `window_size` samples.
    ///
    /// `window_size` must stay constant between wraps; changing it mid-window
    /// skews the estimate until a full window has been observed again.
    pub fn update_rms(&mut self, sample: f32, window_size: usize) -> Result<()> {
        if window_size == 0 || window_size >= MAX_RMS_WINDOW {
            return Err(DspError::OutOfRange {
                param: "window_size",
                value: window_size as f64,
                expected: "1..192000",
            });
        }

        let evicted = self.window[self.write_index];
        self.window[self.write_index] = sample;
        self.sum_of_squares +=
            f64::from(sample) * f64::from(sample) - f64::from(evicted) * f64::from(evicted);

        // Incremental eviction can leave a tiny negative residue.
        self.rms = (self.sum_of_squares.max(0.0) / window_size as f64).sqrt() as f32;

        self.write_index += 1;
        if self.write_index >= window_size {
            self.write_index = 0;
            // Recompute from the live window to bound drift.
            self.sum_of_squares = self.window[..window_size]
                .iter()
                .map(|s| f64::from(*s) * f64::from(*s))
                .sum();
        }
        Ok(())
    }

    /// Windowed root mean square as of the last `update_rms`.
    pub fn rms(&self) -> f32 {
        self.rms
    }
}
