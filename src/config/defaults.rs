//! Built-in defaults (layer 1)

use coe_format::{ByteOrder, DecodeMode};
use serde::{Deserialize, Serialize};

/// Built-in default conversion values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Bytes per output word (default: 4)
    pub word_size: usize,

    /// Output depth in words (default: 0 = derive from content)
    pub depth: u64,

    /// Word address of the binary input (default: 0)
    pub bin_addr: u64,

    /// Filler token for uncovered words (default: "0")
    pub default_token: String,

    /// Output path when none is given and no single input names it
    pub output: String,

    /// Byte order of the binary input (default: little)
    pub byte_order: ByteOrder,

    /// Hex-data decoding mode (default: lenient)
    pub decode_mode: DecodeMode,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            word_size: 4,
            depth: 0,
            bin_addr: 0,
            default_token: "0".to_string(),
            output: "output.coe".to_string(),
            byte_order: ByteOrder::Little,
            decode_mode: DecodeMode::Lenient,
        }
    }
}
