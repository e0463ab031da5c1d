// src/alphabet.rs
// The international Morse alphabet, one table both directions are built from

use std::collections::HashMap;
use std::sync::OnceLock;

/// Forward table mapping uppercase characters to their dot/dash codes.
/// This is the single source of truth; the reverse map is derived from it
/// so the two can never drift apart.
pub const TABLE: &[(char, &str)] = &[
    ('A', ".-"),
    ('B', "-..."),
    ('C', "-.-."),
    ('D', "-.."),
    ('E', "."),
    ('F', "..-."),
    ('G', "--."),
    ('H', "...."),
    ('I', ".."),
    ('J', ".---"),
    ('K', "-.-"),
    ('L', ".-.."),
    ('M', "--"),
    ('N', "-."),
    ('O', "---"),
    ('P', ".--."),
    ('Q', "--.-"),
    ('R', ".-."),
    ('S', "..."),
    ('T', "-"),
    ('U', "..-"),
    ('V', "...-"),
    ('W', ".--"),
    ('X', "-..-"),
    ('Y', "-.--"),
    ('Z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    ('.', ".-.-.-"),
    (',', "--..--"),
    ('?', "..--.."),
    ('!', "-.-.--"),
    (':', "---..."),
    (';', "-.-.-."),
    ('\'', ".----."),
    ('"', ".-..-."),
    ('/', "-..-."),
    ('-', "-....-"),
    ('+', ".-.-."),
    ('=', "-...-"),
    ('@', ".--.-."),
    ('(', "-.--."),
    (')', "-.--.-"),
    ('&', ".-..."),
    ('$', "...-..-"),
    ('_', "..--.-"),
];

fn forward() -> &'static HashMap<char, &'static str> {
    static MAP: OnceLock<HashMap<char, &'static str>> = OnceLock::new();
    MAP.get_or_init(|| TABLE.iter().copied().collect())
}

fn reverse() -> &'static HashMap<&'static str, char> {
    static MAP: OnceLock<HashMap<&'static str, char>> = OnceLock::new();
    MAP.get_or_init(|| TABLE.iter().map(|&(c, code)| (code, c)).collect())
}

/// Looks up the Morse code for an (already uppercased) character.
pub fn morse_for_char(c: char) -> Option<&'static str> {
    forward().get(&c).copied()
}

/// Looks up the character for a dot/dash token.
pub fn char_for_morse(code: &str) -> Option<char> {
    reverse().get(code).copied()
}

/// Whether the character has a Morse code in the table.
pub fn is_supported(c: char) -> bool {
    forward().contains_key(&c)
}
