// src/codec.rs
// Text normalization and the bidirectional text <-> Morse codec

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::alphabet;
use crate::detect::Direction;

/// Placeholder substituted for characters and tokens the alphabet does not
/// cover. Encoding and decoding never fail; the worst case is a string of
/// these.
pub const UNKNOWN_SYMBOL: char = '?';

/// Word separator token in the textual Morse form, spaced as `" / "`.
pub const WORD_SEPARATOR: &str = " / ";

/// Uppercases the input and strips diacritics via NFD decomposition, so
/// "héllo" encodes the same as "HELLO". Pure; empty input yields an empty
/// string.
///
/// Only combining marks are stripped: standalone spacing diacritics such
/// as `^` or `¨` are kept and later encode as the placeholder, since they
/// have no Morse code of their own.
pub fn normalize_text(input: &str) -> String {
    input
        .nfd()
        .filter(|&c| !is_combining_mark(c))
        .collect::<String>()
        .to_uppercase()
}

/// Canonicalizes a Morse string: every character outside `.`, `-`,
/// whitespace and `/` becomes a space, whitespace runs collapse to single
/// spaces, and the word separator ends up as exactly `" / "`. Idempotent;
/// blank input normalizes to the empty string.
pub fn normalize_morse(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let sanitized: String = input
        .chars()
        .map(|c| match c {
            '.' | '-' | '/' => c,
            _ => ' ',
        })
        .collect();
    let collapsed = collapse_whitespace(&sanitized);

    collapse_whitespace(&collapsed.replace('/', " / "))
}

fn collapse_whitespace(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Encodes text into its Morse representation. Unsupported characters map
/// to [`UNKNOWN_SYMBOL`] rather than failing; whitespace splits words.
pub fn encode(text: &str) -> String {
    let normalized = normalize_text(text);

    normalized
        .split_whitespace()
        .map(|word| {
            word.chars()
                .map(|c| {
                    alphabet::morse_for_char(c)
                        .map(str::to_string)
                        .unwrap_or_else(|| UNKNOWN_SYMBOL.to_string())
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(WORD_SEPARATOR)
}

/// Decodes a Morse string back into text. The input is normalized first, so
/// stray punctuation and irregular spacing cannot crash the decoder; tokens
/// with no alphabet entry decode to [`UNKNOWN_SYMBOL`].
pub fn decode(morse: &str) -> String {
    let normalized = normalize_morse(morse);
    if normalized.is_empty() {
        return String::new();
    }

    normalized
        .split(WORD_SEPARATOR)
        .map(|word| {
            word.split(' ')
                .filter(|token| !token.is_empty())
                .map(|token| alphabet::char_for_morse(token).unwrap_or(UNKNOWN_SYMBOL))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Runs the input through the normalizer matching the given direction.
pub fn sanitize_input(input: &str, direction: Direction) -> String {
    match direction {
        Direction::Morse => normalize_morse(input),
        Direction::Text => normalize_text(input),
    }
}

/// Translates in the given direction: `Text` encodes, `Morse` decodes.
pub fn translate(input: &str, direction: Direction) -> String {
    match direction {
        Direction::Morse => decode(input),
        Direction::Text => encode(input),
    }
}

/// True when the input still carries dot/dash content after normalization.
pub fn has_morse_content(input: &str) -> bool {
    !normalize_morse(input).is_empty()
}
