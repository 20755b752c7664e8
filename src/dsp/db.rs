//! Raw-gain / decibel conversions.
//!
//! Human hearing is logarithmic, so level changes are usually expressed in
//! dBFS: `dB = 20 * log10(gain)`. Unity gain is 0 dB, half amplitude is
//! about -6 dB, and every halving subtracts another ~6 dB.

/// Convert raw gain (0..=1 for attenuation) to dBFS.
///
/// A gain of exactly 0 has no finite dB value; this returns `-inf`, which
/// meters conventionally display as silence.
#[inline]
pub fn gain_to_decibels(gain: f32) -> f32 {
    20.0 * gain.log10()
}

/// Convert dBFS to raw gain.
#[inline]
pub fn decibels_to_gain(decibels: f32) -> f32 {
    10.0f32.powf(decibels / 20.0)
}
