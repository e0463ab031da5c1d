// src/lib.rs
// Library interface for morsewave

pub mod alphabet;
pub mod chart;
pub mod codec;
pub mod detect;
pub mod synth;
pub mod timing;

pub use codec::{
    decode, encode, has_morse_content, normalize_morse, normalize_text, sanitize_input, translate,
};
pub use detect::{Direction, Mode, detect_direction};
pub use synth::{SynthOptions, synthesize_samples, synthesize_wav};
pub use timing::{TimingEvent, compile_timing, total_duration, unit_duration};
