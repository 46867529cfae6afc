//! COE Format Types
//!
//! Line-level decoding of hex-data memory files and rendering of the
//! Xilinx COE memory-initialization format.

pub mod coe;
pub mod error;
pub mod hexline;
pub mod word;

pub use coe::CoeWriter;
pub use error::DecodeError;
pub use hexline::{decode_line, DecodeMode, Line};
pub use word::{render_word, ByteOrder};

/// Radix declaration, first header line of every COE file.
pub const RADIX_LINE: &str = "MEMORY_INITIALIZATION_RADIX=16;";

/// Vector-start marker, second header line of every COE file.
pub const VECTOR_LINE: &str = "MEMORY_INITIALIZATION_VECTOR=";

/// Separator written between two consecutive tokens.
pub const TOKEN_SEPARATOR: &str = ",\n";

/// Terminator written after the last token.
pub const TERMINATOR: &str = ";\n";
