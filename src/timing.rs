// src/timing.rs
// Compiles a Morse string into timed tone/silence events

use crate::codec::{WORD_SEPARATOR, normalize_morse};

/// Slower than this produces absurdly long (or, at zero, infinite) units;
/// out-of-range speeds clamp here instead of failing.
pub const MIN_WPM: f32 = 5.0;

/// One tone or one gap, with its duration in seconds. A single gap carries
/// the full intra-letter, inter-letter or inter-word spacing; adjacent
/// silences never occur in a compiled sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingEvent {
    Tone(f32),
    Silence(f32),
}

impl TimingEvent {
    pub fn duration(self) -> f32 {
        match self {
            TimingEvent::Tone(d) | TimingEvent::Silence(d) => d,
        }
    }

    pub fn is_tone(self) -> bool {
        matches!(self, TimingEvent::Tone(_))
    }
}

/// Base unit in seconds for a given speed, per the PARIS convention:
/// `1.2 / wpm`. Speeds at or below zero (and NaN) clamp to [`MIN_WPM`].
pub fn unit_duration(wpm: f32) -> f32 {
    // f32::max returns the other operand for NaN, so this also covers it.
    let safe_wpm = wpm.max(MIN_WPM);
    1.2 / safe_wpm
}

/// Walks words -> letters -> symbols of the normalized Morse string and
/// emits the standard timing sequence: 1 unit tone per dot, 3 per dash,
/// 1-unit gaps between symbols, 3-unit gaps between letters, 7-unit gaps
/// between words. No gap follows the final tone. Empty or all-invalid
/// input compiles to an empty sequence.
pub fn compile_timing(morse: &str, wpm: f32) -> Vec<TimingEvent> {
    let normalized = normalize_morse(morse);
    if normalized.is_empty() {
        return Vec::new();
    }

    let unit = unit_duration(wpm);
    let words: Vec<&str> = normalized.split(WORD_SEPARATOR).collect();
    let mut events = Vec::new();

    for (word_index, word) in words.iter().enumerate() {
        let letters: Vec<&str> = word.split(' ').collect();

        for (letter_index, letter) in letters.iter().enumerate() {
            let symbols: Vec<char> = letter.chars().collect();

            for (symbol_index, &symbol) in symbols.iter().enumerate() {
                let tone_units = if symbol == '-' { 3.0 } else { 1.0 };
                events.push(TimingEvent::Tone(tone_units * unit));

                if symbol_index < symbols.len() - 1 {
                    events.push(TimingEvent::Silence(unit));
                }
            }

            let is_last_letter = letter_index == letters.len() - 1;
            let is_last_word = word_index == words.len() - 1;

            if !is_last_letter {
                events.push(TimingEvent::Silence(3.0 * unit));
            } else if !is_last_word {
                events.push(TimingEvent::Silence(7.0 * unit));
            }
        }
    }

    events
}

/// Total playback time of a compiled sequence, in seconds.
pub fn total_duration(events: &[TimingEvent]) -> f32 {
    events.iter().map(|e| e.duration()).sum()
}
