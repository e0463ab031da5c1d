// tests/engine_tests.rs
// End-to-end checks of the codec, detector, timing compiler and synthesizer

use std::io::Cursor;

use hound::{SampleFormat, WavReader};
use morsewave::{
    Direction, SynthOptions, compile_timing, decode, detect_direction, encode, normalize_morse,
    normalize_text, synthesize_wav, total_duration, unit_duration,
};

#[test]
fn round_trip_is_lossy_but_stable() {
    // Supported characters with single spaces survive the round trip
    // exactly, modulo normalization.
    for text in [
        "SOS",
        "HELLO WORLD",
        "CQ DE W1AW",
        "ABCDEFGHIJKLMNOPQRSTUVWXYZ 0123456789",
        "WHAT? YES! 3.14",
    ] {
        let normalized = normalize_text(text);
        assert_eq!(decode(&encode(&normalized)), normalized, "text: {text:?}");
    }
}

#[test]
fn round_trip_folds_case_and_diacritics() {
    assert_eq!(decode(&encode("héllo")), "HELLO");
    assert_eq!(decode(&encode("sos")), "SOS");
}

#[test]
fn unsupported_characters_encode_to_placeholder() {
    // '#' has no code; it encodes as the '?' placeholder token, which the
    // decoder's normalization then drops as a non-Morse character.
    assert_eq!(encode("A#B"), ".- ? -...");
    assert_eq!(decode(&encode("A#B")), "AB");
}

#[test]
fn every_alphabet_entry_round_trips() {
    let mut seen_codes = std::collections::HashSet::new();
    for &(symbol, code) in morsewave::alphabet::TABLE {
        let input = symbol.to_string();
        assert_eq!(decode(&encode(&input)), input, "symbol: {symbol:?}");
        assert!(seen_codes.insert(code), "duplicate code {code:?}");
    }
}

#[test]
fn morse_normalization_is_idempotent() {
    for input in [
        "... --- ...",
        "  ..x.. // --  ",
        "abc",
        ". - / . -",
        "",
        "///",
    ] {
        let once = normalize_morse(input);
        assert_eq!(normalize_morse(&once), once, "input: {input:?}");
    }
}

#[test]
fn encoded_output_is_already_normalized() {
    let morse = encode("HELLO WORLD");
    assert_eq!(normalize_morse(&morse), morse);
}

#[test]
fn direction_detection_examples() {
    assert_eq!(detect_direction("HELLO"), Direction::Text);
    assert_eq!(detect_direction("... --- ..."), Direction::Morse);
    assert_eq!(detect_direction(""), Direction::Text);
    assert_eq!(detect_direction("-.-."), Direction::Morse);
}

#[test]
fn timing_of_dot_dash_at_12_wpm() {
    let events = compile_timing(".-", 12.0);
    let durations: Vec<f32> = events.iter().map(|e| e.duration()).collect();

    assert_eq!(durations.len(), 3);
    let expected = [0.1, 0.1, 0.3];
    for (actual, expected) in durations.iter().zip(expected) {
        assert!((actual - expected).abs() < 1e-6);
    }
    assert!((total_duration(&events) - 0.5).abs() < 1e-6);
}

#[test]
fn word_gap_appears_exactly_once() {
    let unit = unit_duration(20.0);
    let events = compile_timing("... / ---", 20.0);

    let word_gaps = events
        .iter()
        .filter(|e| !e.is_tone() && (e.duration() - 7.0 * unit).abs() < 1e-6)
        .count();
    assert_eq!(word_gaps, 1);
    assert!(events.last().unwrap().is_tone());
}

#[test]
fn synthesis_is_deterministic() {
    let options = SynthOptions {
        wpm: 20.0,
        frequency: 600.0,
        sample_rate: 44100,
    };
    let first = synthesize_wav("...", &options).unwrap().unwrap();
    let second = synthesize_wav("...", &options).unwrap().unwrap();
    assert_eq!(first, second);
}

#[test]
fn wav_output_is_canonical_pcm() {
    let options = SynthOptions {
        wpm: 20.0,
        frequency: 600.0,
        sample_rate: 44100,
    };
    let bytes = synthesize_wav("... --- ...", &options).unwrap().unwrap();

    // Canonical RIFF/WAVE layout: 44-byte header followed by raw samples.
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    let data_len = u32::from_le_bytes(bytes[40..44].try_into().unwrap()) as usize;
    assert_eq!(bytes.len(), 44 + data_len);

    let mut reader = WavReader::new(Cursor::new(&bytes)).unwrap();
    let spec = reader.spec();
    assert_eq!(spec.channels, 1);
    assert_eq!(spec.sample_rate, 44100);
    assert_eq!(spec.bits_per_sample, 16);
    assert_eq!(spec.sample_format, SampleFormat::Int);

    let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(samples.len() * 2, data_len);

    // Amplitude headroom: 0.4 of full scale.
    let peak = samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    assert!(peak <= (0.4 * 32768.0) as u16 + 1);
    assert!(peak > (0.3 * 32768.0) as u16);
}

#[test]
fn wav_sample_count_matches_event_timing() {
    let options = SynthOptions {
        wpm: 20.0,
        frequency: 600.0,
        sample_rate: 44100,
    };
    let events = compile_timing("-", options.wpm);
    let expected: usize = events
        .iter()
        .map(|e| ((e.duration() as f64 * 44100.0).round() as usize).max(1))
        .sum();

    let bytes = synthesize_wav("-", &options).unwrap().unwrap();
    let reader = WavReader::new(Cursor::new(&bytes)).unwrap();
    assert_eq!(reader.len() as usize, expected);
}

#[test]
fn empty_input_is_safe_at_every_boundary() {
    let options = SynthOptions::default();

    assert_eq!(encode(""), "");
    assert_eq!(decode(""), "");
    assert!(compile_timing("", 20.0).is_empty());
    assert!(synthesize_wav("", &options).unwrap().is_none());
}

#[test]
fn degenerate_parameters_are_clamped_not_rejected() {
    let options = SynthOptions {
        wpm: 0.0,
        frequency: 0.0,
        sample_rate: 8000,
    };
    // Clamped to 5 wpm / 600 Hz, still renders.
    let bytes = synthesize_wav(".", &options).unwrap().unwrap();
    assert!(bytes.len() > 44);
}
