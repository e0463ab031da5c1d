// src/synth.rs
// Renders a timing sequence into PCM samples and packages them as WAV

use std::f64::consts::PI;
use std::io::Cursor;

use anyhow::Result;
use hound::{SampleFormat, WavSpec, WavWriter};

use crate::timing::{TimingEvent, compile_timing};

/// Sine amplitude relative to full scale, leaving headroom against clipping.
const AMPLITUDE: f64 = 0.4;
/// Below this the tone becomes inaudible or degenerate; lower requests clamp.
const MIN_FREQUENCY: f32 = 100.0;
const DEFAULT_FREQUENCY: f32 = 600.0;
const DEFAULT_SAMPLE_RATE: u32 = 44100;
const DEFAULT_WPM: f32 = 20.0;

/// Playback parameters for synthesis.
#[derive(Debug, Clone, Copy)]
pub struct SynthOptions {
    pub wpm: f32,
    /// Tone frequency in Hz; floored at 100, zero/NaN falls back to 600.
    pub frequency: f32,
    pub sample_rate: u32,
}

impl Default for SynthOptions {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_WPM,
            frequency: DEFAULT_FREQUENCY,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

fn effective_frequency(requested: f32) -> f32 {
    let frequency = if requested == 0.0 || requested.is_nan() {
        DEFAULT_FREQUENCY
    } else {
        requested
    };
    frequency.max(MIN_FREQUENCY)
}

/// Renders a timing sequence into mono float samples.
///
/// Each event contributes `max(1, round(duration * sample_rate))` samples;
/// the buffer length is the running sum of those counts, so per-event
/// rounding never drifts against the total. Tone phase is a function of the
/// absolute sample index, not reset per event, which keeps tone boundaries
/// click-free.
pub fn synthesize_samples(events: &[TimingEvent], frequency: f32, sample_rate: u32) -> Vec<f32> {
    let frequency = effective_frequency(frequency) as f64;
    let rate = sample_rate as f64;

    let mut samples: Vec<f32> = Vec::new();
    let mut cursor: usize = 0;

    for event in events {
        let event_samples = ((event.duration() as f64 * rate).round() as usize).max(1);

        match event {
            TimingEvent::Tone(_) => {
                for i in 0..event_samples {
                    let time = (cursor + i) as f64 / rate;
                    samples.push(((2.0 * PI * frequency * time).sin() * AMPLITUDE) as f32);
                }
            }
            TimingEvent::Silence(_) => {
                samples.resize(samples.len() + event_samples, 0.0);
            }
        }

        cursor += event_samples;
    }

    samples
}

/// Compiles the Morse string and renders it as a complete in-memory WAV
/// file: 16-bit signed little-endian PCM, mono, 44-byte canonical header.
/// Returns `Ok(None)` when there is nothing to render, so callers can treat
/// blank input as "no file" rather than an error.
pub fn synthesize_wav(morse: &str, options: &SynthOptions) -> Result<Option<Vec<u8>>> {
    let events = compile_timing(morse, options.wpm);
    if events.is_empty() {
        return Ok(None);
    }

    let samples = synthesize_samples(&events, options.frequency, options.sample_rate);
    log::debug!(
        "synthesizing {} events into {} samples at {} Hz",
        events.len(),
        samples.len(),
        options.sample_rate
    );

    let spec = WavSpec {
        channels: 1,
        sample_rate: options.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut cursor = Cursor::new(Vec::new());
    let mut writer = WavWriter::new(&mut cursor, spec)?;
    for &sample in &samples {
        writer.write_sample(float_to_i16(sample))?;
    }
    writer.finalize()?;

    Ok(Some(cursor.into_inner()))
}

fn float_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32768.0) as i16
    } else {
        (clamped * 32767.0) as i16
    }
}
