//! Hex-data line decoder
//!
//! A hex-data file is line oriented:
//! - `#` starts a comment line
//! - `@<decimal>` sets the current word address
//! - an empty line is a word without content
//! - anything else is a string of hex digits holding one word (or more)
//!
//! Digits are paired from the right: the last two digits of the line form
//! byte 0, so `"01020304"` decodes to `[0x04, 0x03, 0x02, 0x01]`, i.e. the
//! little-endian storage of the word `0x01020304`.

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;

/// How to treat characters that are not valid in their position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeMode {
    /// Non-hex digits decode as 0, directives without digits mean address 0.
    #[default]
    Lenient,
    /// Anything malformed is an error.
    Strict,
}

/// A classified hex-data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Blank line.
    Empty,
    /// `#` comment.
    Comment,
    /// `@` address directive with its word address.
    Address(u64),
    /// Decoded bytes, zero-padded to a whole number of words.
    Data(Vec<u8>),
}

/// Decode one line of a hex-data file.
///
/// `line` is expected to be trimmed already. `word_size` is the number of
/// bytes per word; data lines are padded with zero bytes up to the next
/// multiple of it, so a short line always fills exactly one word.
pub fn decode_line(line: &str, word_size: usize, mode: DecodeMode) -> Result<Line, DecodeError> {
    if line.is_empty() {
        return Ok(Line::Empty);
    }
    if line.starts_with('#') {
        return Ok(Line::Comment);
    }
    if let Some(rest) = line.strip_prefix('@') {
        return parse_address(rest, mode).map(Line::Address);
    }

    if mode == DecodeMode::Strict {
        if let Some((idx, ch)) = line.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit()) {
            return Err(DecodeError::InvalidDigit { ch, column: idx + 1 });
        }
    }

    let mut bytes = decode_digits(line.as_bytes());
    if word_size > 0 {
        let words = bytes.len().div_ceil(word_size).max(1);
        bytes.resize(words * word_size, 0);
    }
    Ok(Line::Data(bytes))
}

/// Pair digits from the right. An unmatched leftmost digit becomes a byte of
/// its own holding the digit value, and is dropped when that value is 0.
fn decode_digits(digits: &[u8]) -> Vec<u8> {
    digits
        .rchunks(2)
        .filter_map(|pair| match *pair {
            [hi, lo] => Some((nibble(hi) << 4) | nibble(lo)),
            [lo] => Some(nibble(lo)).filter(|&value| value != 0),
            _ => None,
        })
        .collect()
}

fn nibble(digit: u8) -> u8 {
    char::from(digit).to_digit(16).unwrap_or(0) as u8
}

/// Parse the remainder of an `@` directive.
///
/// Leading whitespace is skipped and the leading run of decimal digits is
/// taken. In lenient mode trailing garbage is ignored and a directive with no
/// digits is address 0.
fn parse_address(rest: &str, mode: DecodeMode) -> Result<u64, DecodeError> {
    let trimmed = rest.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];

    if mode == DecodeMode::Strict && (digits.is_empty() || end != trimmed.len()) {
        return Err(DecodeError::InvalidAddress(rest.to_string()));
    }
    if digits.is_empty() {
        return Ok(0);
    }

    digits
        .parse::<u64>()
        .map_err(|_| DecodeError::InvalidAddress(rest.to_string()))
}
