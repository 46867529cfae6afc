//! Validated conversion options (layer 2 applied over the defaults)

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use coe_format::{ByteOrder, DecodeMode};
use serde::{Deserialize, Serialize};

use super::defaults::BuiltinDefaults;

/// Parameters of one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Bytes per output word, must be nonzero
    pub word_size: usize,

    /// Declared depth in words (0 = derive from content)
    pub depth: u64,

    /// Word address at which the binary input starts
    pub bin_addr: u64,

    /// Token emitted verbatim for every uncovered word
    pub default_token: String,

    /// Byte order of the binary input
    pub byte_order: ByteOrder,

    /// Hex-data decoding mode
    pub decode_mode: DecodeMode,

    /// Print progress to stderr
    #[serde(skip)]
    pub verbose: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        let defaults = BuiltinDefaults::default();
        Self {
            word_size: defaults.word_size,
            depth: defaults.depth,
            bin_addr: defaults.bin_addr,
            default_token: defaults.default_token,
            byte_order: defaults.byte_order,
            decode_mode: defaults.decode_mode,
            verbose: false,
        }
    }
}

impl ConversionConfig {
    /// Set the word size
    pub fn with_word_size(mut self, word_size: usize) -> Self {
        self.word_size = word_size;
        self
    }

    /// Set the declared depth
    pub fn with_depth(mut self, depth: u64) -> Self {
        self.depth = depth;
        self
    }

    /// Set the binary input's word address
    pub fn with_bin_addr(mut self, bin_addr: u64) -> Self {
        self.bin_addr = bin_addr;
        self
    }

    /// Set the filler token
    pub fn with_default_token(mut self, token: impl Into<String>) -> Self {
        self.default_token = token.into();
        self
    }

    /// Set the binary input's byte order
    pub fn with_byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Set the hex-data decoding mode
    pub fn with_decode_mode(mut self, mode: DecodeMode) -> Self {
        self.decode_mode = mode;
        self
    }

    /// Enable or disable progress output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_size == 0 {
            return Err(ConfigError::ZeroWordSize);
        }
        Ok(())
    }
}

/// Input and output files of one conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInputs {
    /// Raw binary input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary: Option<PathBuf>,

    /// Hex-data text input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PathBuf>,

    /// COE output path
    pub output: PathBuf,
}

impl ConversionInputs {
    /// Inputs with the default output path
    pub fn new(binary: Option<PathBuf>, data: Option<PathBuf>) -> Self {
        Self {
            binary,
            data,
            output: PathBuf::from(BuiltinDefaults::default().output),
        }
    }

    /// Single binary input, output next to it as `<input>.coe`
    pub fn single(input: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let output = Self::coe_path_for(&input);
        Self {
            binary: Some(input),
            data: None,
            output,
        }
    }

    /// Override the output path
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// `<input>.coe`, appended rather than replacing any extension
    pub fn coe_path_for(input: &Path) -> PathBuf {
        let mut name: OsString = input.as_os_str().to_owned();
        name.push(".coe");
        PathBuf::from(name)
    }

    /// At least one input must be given
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.binary.is_none() && self.data.is_none() {
            return Err(ConfigError::NoInput);
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid word size: must be at least 1 byte")]
    ZeroWordSize,

    #[error("no input: a binary file or a data file is required")]
    NoInput,
}
