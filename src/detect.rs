// src/detect.rs
// Heuristic classification of raw input as text or Morse

/// Which way a translation should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Text,
    Morse,
}

/// Translator mode as exposed to callers: a fixed direction, or automatic
/// detection per input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Auto,
    Text,
    Morse,
}

impl Mode {
    /// Resolves the mode to a concrete direction, consulting the detector
    /// in `Auto` mode.
    pub fn resolve(self, input: &str) -> Direction {
        match self {
            Mode::Auto => detect_direction(input),
            Mode::Text => Direction::Text,
            Mode::Morse => Direction::Morse,
        }
    }
}

fn is_morse_class(c: char) -> bool {
    matches!(c, '.' | '-' | '/') || c.is_whitespace()
}

/// Guesses whether the input is natural text or Morse code.
///
/// Heuristic, in order: blank input is text; if stripping dots, dashes,
/// whitespace and slashes leaves nothing, and dot/dash characters are at
/// least as numerous as alphanumerics, it is Morse; if the trimmed input is
/// entirely Morse-class characters and dots/dashes outnumber alphanumerics,
/// it is Morse; otherwise text.
///
/// This is intentionally approximate and its edge cases are part of the
/// contract: a lone `-` reads as Morse, short numeric strings can read as
/// text. Keep those as-is.
pub fn detect_direction(input: &str) -> Direction {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Direction::Text;
    }

    let non_morse_count = trimmed.chars().filter(|&c| !is_morse_class(c)).count();
    let dot_dash_count = trimmed.chars().filter(|&c| c == '.' || c == '-').count();
    let alnum_count = trimmed.chars().filter(char::is_ascii_alphanumeric).count();

    if non_morse_count == 0 && dot_dash_count > 0 && dot_dash_count >= alnum_count {
        return Direction::Morse;
    }

    if trimmed.chars().all(is_morse_class) && dot_dash_count > alnum_count {
        return Direction::Morse;
    }

    Direction::Text
}
