//! Control-thread messaging for the audio thread.
//!
//! Parameter changes originate on a UI or control thread, but the audio
//! thread must never wait on a lock held elsewhere. Messages therefore
//! travel over a wait-free SPSC ring buffer and are drained between blocks;
//! changes are not sample-accurate if sent mid-block.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::dsp::{PanningLaw, WaveformKind};

/// A parameter change for the audio thread. `Copy` so the queue never
/// allocates or drops on the consumer side.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ControlMessage {
    SetModulationFrequency(f64),
    SetModulationWaveform(WaveformKind),
    SetPanningLaw(PanningLaw),
    SetPan(f32),
}

/// Drained by the audio thread at the top of each block.
pub trait ControlReceiver {
    fn pop(&mut self) -> Option<ControlMessage>;
}

#[cfg(feature = "rtrb")]
impl ControlReceiver for Consumer<ControlMessage> {
    fn pop(&mut self) -> Option<ControlMessage> {
        Consumer::pop(self).ok()
    }
}
