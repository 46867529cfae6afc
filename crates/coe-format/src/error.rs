//! Error types for hex-data decoding.

use thiserror::Error;

/// A hex-data line that could not be decoded.
///
/// Only raised in [`DecodeMode::Strict`](crate::DecodeMode::Strict), except
/// for address overflow which is fatal in both modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A data line contains a character that is not a hex digit. `column`
    /// counts characters from 1.
    #[error("invalid hex digit {ch:?} at column {column}")]
    InvalidDigit { ch: char, column: usize },

    /// An `@` directive whose remainder is not a decimal word address.
    #[error("invalid address directive '@{0}'")]
    InvalidAddress(String),
}
