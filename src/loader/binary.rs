//! Binary input: the whole file becomes one region at `bin_addr`.

use std::fs;
use std::path::Path;

use super::{sha256_hex, LoadSummary};
use crate::config::ConversionConfig;
use crate::convert::{ConvertError, ConvertResult};
use crate::depth;
use crate::region::{Region, RegionStore};

/// Read a binary file into the store at `config.bin_addr`.
pub fn load_binary(
    path: &Path,
    config: &ConversionConfig,
    store: &mut RegionStore,
) -> ConvertResult<LoadSummary> {
    config.validate()?;
    let bytes = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_binary_bytes(bytes, config, store)
}

/// Store an in-memory binary image at `config.bin_addr`.
///
/// Fails without touching the store when a nonzero declared depth cannot
/// hold `bin_addr + ceil(len / word_size)` words.
pub fn load_binary_bytes(
    bytes: Vec<u8>,
    config: &ConversionConfig,
    store: &mut RegionStore,
) -> ConvertResult<LoadSummary> {
    config.validate()?;
    let file_words = bytes.len().div_ceil(config.word_size) as u64;

    if config.verbose {
        eprintln!(
            "Input file content size = {} bytes ({} words).",
            bytes.len(),
            file_words
        );
    }

    let implied_depth = config.bin_addr.saturating_add(file_words);
    depth::check(config.depth, implied_depth)?;

    let summary = LoadSummary {
        bytes: bytes.len() as u64,
        implied_depth,
        regions: 1,
        digest: sha256_hex(&bytes),
    };
    store.insert(config.bin_addr, Region::new(bytes, config.byte_order));

    Ok(summary)
}
