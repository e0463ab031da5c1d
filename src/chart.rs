// src/chart.rs
// Reference-chart entries derived from the alphabet table

use crate::alphabet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Dot,
    Dash,
}

/// One row of the reference chart: a symbol, its code, and the code broken
/// into dot/dash elements for visual rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub symbol: char,
    pub code: &'static str,
    pub pattern: Vec<Pattern>,
}

const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &[char] = &['.', ',', '?', '!', '/', '@', ':', '\'', '-', '(', ')'];

fn to_pattern(code: &str) -> Vec<Pattern> {
    code.chars()
        .map(|c| if c == '.' { Pattern::Dot } else { Pattern::Dash })
        .collect()
}

fn build_entries(symbols: impl Iterator<Item = char>) -> Vec<ChartEntry> {
    symbols
        .filter_map(|symbol| {
            alphabet::morse_for_char(symbol).map(|code| ChartEntry {
                symbol,
                code,
                pattern: to_pattern(code),
            })
        })
        .collect()
}

pub fn letter_entries() -> Vec<ChartEntry> {
    build_entries(LETTERS.chars())
}

pub fn digit_entries() -> Vec<ChartEntry> {
    build_entries(DIGITS.chars())
}

pub fn punctuation_entries() -> Vec<ChartEntry> {
    build_entries(PUNCTUATION.iter().copied())
}
