//! Region loaders
//!
//! Each loader reads one input into the [`RegionStore`](crate::region::RegionStore),
//! validates the declared depth against what the input needs, and reports
//! what it loaded.

mod binary;
mod hexdata;

pub use binary::{load_binary, load_binary_bytes};
pub use hexdata::{load_hex_data, load_hex_data_str};

use sha2::{Digest, Sha256};

/// What one loader contributed to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    /// Raw input size in bytes
    pub bytes: u64,

    /// Minimum output depth this input needs
    pub implied_depth: u64,

    /// Regions written to the store
    pub regions: usize,

    /// SHA-256 of the raw input bytes
    pub digest: String,
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
