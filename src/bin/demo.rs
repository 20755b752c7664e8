//! Stereo demo on the default output device: a 200 Hz saw through a 5 Hz
//! square tremolo and a pan sweep, metered every sample.
//!
//! Run with: cargo run --bin wavekit-demo
//!
//! The audio callback owns all DSP state. Parameter changes go in over a
//! wait-free queue; meter readings come back out as single-word atomics, so
//! neither direction can ever block the audio thread.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

#[cfg(feature = "rtrb")]
use wavekit::control::{ControlMessage, ControlReceiver};
use wavekit::dsp::meter::{Meter, MAX_RMS_WINDOW};
use wavekit::dsp::oscillator::Oscillator;
use wavekit::dsp::pan::Panner;
use wavekit::dsp::tremolo::Tremolo;
use wavekit::dsp::{Channel, PanningLaw, WaveformKind};

const CARRIER_HZ: f64 = 200.0;
const CARRIER_LEVEL: f32 = 0.125;
const TREMOLO_HZ: f64 = 5.0;
const TREMOLO_DEPTH: f32 = 0.5;
const RUN_SECONDS: u64 = 10;

/// One channel's generator chain. Each channel owns its own instances; no
/// DSP state is shared across channels.
struct ChannelStrip {
    osc: Oscillator,
    tremolo: Tremolo,
}

impl ChannelStrip {
    fn prepare(sample_rate: f64) -> wavekit::Result<Self> {
        let mut osc = Oscillator::new();
        osc.prepare(sample_rate)?;
        let mut tremolo = Tremolo::new();
        tremolo.prepare(sample_rate)?;
        tremolo.set_frequency(TREMOLO_HZ)?;
        tremolo.set_waveform(WaveformKind::Square);
        Ok(Self { osc, tremolo })
    }

    fn next_sample(&mut self) -> wavekit::Result<f32> {
        let dry = CARRIER_LEVEL * self.osc.process_saw(CARRIER_HZ, 0.0)?;
        self.tremolo.process(dry, TREMOLO_DEPTH)
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device"))?;
    let supported = device.default_output_config()?;
    if supported.sample_format() != cpal::SampleFormat::F32 {
        return Err(eyre!(
            "demo expects an f32 output stream, got {:?}",
            supported.sample_format()
        ));
    }
    let config: cpal::StreamConfig = supported.into();
    if config.channels != 2 {
        return Err(eyre!(
            "demo expects a stereo output device, got {} channels",
            config.channels
        ));
    }
    let sample_rate = f64::from(config.sample_rate.0);

    let mut strips = [
        ChannelStrip::prepare(sample_rate)?,
        ChannelStrip::prepare(sample_rate)?,
    ];
    let mut panner = Panner::new();
    panner.set_law(PanningLaw::PowerSine);
    let mut meter = Meter::new();
    let mut pan = 0.5f32;

    // Meter readings cross back to the main thread as single words.
    let peak_bits = Arc::new(AtomicU32::new(0));
    let rms_bits = Arc::new(AtomicU32::new(0));
    let callback_peak = Arc::clone(&peak_bits);
    let callback_rms = Arc::clone(&rms_bits);

    #[cfg(feature = "rtrb")]
    let (mut control_tx, mut control_rx) = rtrb::RingBuffer::<ControlMessage>::new(64);

    let stream = device.build_output_stream(
        &config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            #[cfg(feature = "rtrb")]
            while let Some(message) = ControlReceiver::pop(&mut control_rx) {
                match message {
                    ControlMessage::SetModulationFrequency(hz) => {
                        for strip in strips.iter_mut() {
                            let _ = strip.tremolo.set_frequency(hz);
                        }
                    }
                    ControlMessage::SetModulationWaveform(kind) => {
                        for strip in strips.iter_mut() {
                            strip.tremolo.set_waveform(kind);
                        }
                    }
                    ControlMessage::SetPanningLaw(law) => panner.set_law(law),
                    ControlMessage::SetPan(value) => pan = value.clamp(0.0, 1.0),
                }
            }

            let window = (data.len() / 2).clamp(1, MAX_RMS_WINDOW - 1);
            for frame in data.chunks_mut(2) {
                for (slot, channel) in frame.iter_mut().zip([Channel::Left, Channel::Right]) {
                    let strip = match channel {
                        Channel::Left => &mut strips[0],
                        Channel::Right => &mut strips[1],
                    };
                    // A precondition failure renders silence instead of
                    // garbage; the preconditions were all satisfied above.
                    let sample = strip
                        .next_sample()
                        .and_then(|s| panner.process(channel, s, pan))
                        .unwrap_or(0.0);
                    let _ = meter.update_rms(sample, window);
                    meter.update_peak(sample);
                    *slot = sample;
                }
            }
            callback_peak.store(meter.peak().to_bits(), Ordering::Relaxed);
            callback_rms.store(meter.rms().to_bits(), Ordering::Relaxed);
        },
        |err| eprintln!("stream error: {err}"),
        None,
    )?;
    stream.play()?;

    println!("playing {CARRIER_HZ} Hz saw, {TREMOLO_HZ} Hz square tremolo, pan sweep");
    for step in 0..RUN_SECONDS * 4 {
        #[cfg(feature = "rtrb")]
        {
            let sweep = 0.5 + 0.5 * (step as f32 * 0.157).sin();
            let _ = control_tx.push(ControlMessage::SetPan(sweep));
        }
        std::thread::sleep(Duration::from_millis(250));
        if step % 4 == 3 {
            let peak = f32::from_bits(peak_bits.load(Ordering::Relaxed));
            let rms = f32::from_bits(rms_bits.load(Ordering::Relaxed));
            println!("peak {peak:.3}  rms {rms:.3}");
        }
    }
    Ok(())
}
