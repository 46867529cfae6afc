//! Word rendering.
//!
//! Every word is written most-significant byte first as two lowercase hex
//! digits per byte. The byte order only says how the stored bytes of a word
//! map onto significance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Order of the bytes of one word in a stored buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    /// Byte 0 is the least significant.
    #[default]
    Little,
    /// Byte 0 is the most significant.
    Big,
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Little => write!(f, "little"),
            Self::Big => write!(f, "big"),
        }
    }
}

/// Render one stored word as `word_size * 2` hex digits.
///
/// `chunk` may be shorter than `word_size` (the tail of a buffer); missing
/// bytes render as `00`. Bytes past `word_size` are ignored.
pub fn render_word(chunk: &[u8], word_size: usize, order: ByteOrder) -> String {
    let mut word = vec![0u8; word_size];
    let stored = &chunk[..chunk.len().min(word_size)];

    match order {
        ByteOrder::Little => {
            for (idx, byte) in stored.iter().enumerate() {
                word[word_size - 1 - idx] = *byte;
            }
        }
        ByteOrder::Big => word[..stored.len()].copy_from_slice(stored),
    }

    hex::encode(word)
}
