//! Parsing of textual instruction words, one per line.

use serde::Deserialize;
use std::fmt;

/// Radix of the input words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Hex,
    Binary,
}

impl InputMode {
    pub fn radix(self) -> u32 {
        match self {
            InputMode::Hex => 16,
            InputMode::Binary => 2,
        }
    }
}

/// A line that is not a number in the selected radix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWordError {
    remainder: String,
}

impl ParseWordError {
    fn new(remainder: &str) -> Self {
        ParseWordError {
            remainder: remainder.to_string(),
        }
    }

    /// The text starting at the first character that could not be parsed
    pub fn remainder(&self) -> &str {
        &self.remainder
    }
}

impl fmt::Display for ParseWordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid opcode: {}", self.remainder)
    }
}

impl std::error::Error for ParseWordError {}

/// Parse one line into a 16-bit word.
///
/// Leading whitespace is skipped and, in hex mode, a `0x` prefix is accepted. Values wider
/// than 16 bits keep their low 16 bits.
pub fn parse_word(line: &str, mode: InputMode) -> Result<u16, ParseWordError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let trimmed = line.trim_start();
    let radix = mode.radix();

    let mut digits = trimmed;
    if mode == InputMode::Hex {
        if let Some(rest) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            // A bare "0x" is the number 0 followed by garbage
            if rest.starts_with(|c: char| c.is_digit(radix)) {
                digits = rest;
            }
        }
    }

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(ParseWordError::new(line));
    }
    if end < digits.len() {
        return Err(ParseWordError::new(&digits[end..]));
    }

    let value = digits.chars().fold(0u16, |acc, c| {
        let digit = c.to_digit(radix).unwrap_or(0) as u16;
        acc.wrapping_mul(radix as u16).wrapping_add(digit)
    });
    Ok(value)
}
