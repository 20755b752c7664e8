//! Error handling for fallible component boundaries.
//!
//! A violated precondition never produces a sample, so NaN/Inf can't leak
//! into the audio stream. Hosts should treat any error as "refuse to
//! process" rather than rendering the block.

use thiserror::Error;

/// Result type alias for wavekit operations.
pub type Result<T> = std::result::Result<T, DspError>;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DspError {
    /// A stateful component was used before `prepare()` supplied a sample
    /// rate.
    #[error("{component} used before prepare()")]
    NotPrepared { component: &'static str },

    /// A parameter lies outside its documented bounds.
    #[error("{param} out of range: {value} (expected {expected})")]
    OutOfRange {
        param: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// The tremolo was processed before its modulation frequency was set.
    #[error("modulation frequency not set")]
    FrequencyNotSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_their_context() {
        let err = DspError::OutOfRange {
            param: "pan",
            value: 1.5,
            expected: "0..=1",
        };
        assert_eq!(err.to_string(), "pan out of range: 1.5 (expected 0..=1)");

        let err = DspError::NotPrepared {
            component: "oscillator",
        };
        assert_eq!(err.to_string(), "oscillator used before prepare()");
    }
}
