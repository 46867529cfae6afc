//! Hex-data input: one word per line, `@` directives start new regions.
//!
//! Bytes of consecutive data lines accumulate into a run. A run is flushed
//! into the store, keyed by the address of its first line, when an `@`
//! directive or an empty line interrupts it and at end of input.

use std::fs;
use std::path::Path;

use coe_format::{decode_line, ByteOrder, Line};

use super::{sha256_hex, LoadSummary};
use crate::config::ConversionConfig;
use crate::convert::{ConvertError, ConvertResult};
use crate::depth;
use crate::region::{Region, RegionStore};

/// Read a hex-data file into the store.
///
/// Invalid UTF-8 sequences are replaced before decoding; in lenient mode they
/// end up as zero nibbles like any other non-hex character.
pub fn load_hex_data(
    path: &Path,
    config: &ConversionConfig,
    store: &mut RegionStore,
) -> ConvertResult<LoadSummary> {
    config.validate()?;
    let raw = fs::read(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8_lossy(&raw);
    let mut summary = load_hex_data_str(&text, config, store)?;
    summary.bytes = raw.len() as u64;
    summary.digest = sha256_hex(&raw);
    Ok(summary)
}

/// Decode hex-data text into the store.
pub fn load_hex_data_str(
    content: &str,
    config: &ConversionConfig,
    store: &mut RegionStore,
) -> ConvertResult<LoadSummary> {
    config.validate()?;
    let mut runs = RunAccumulator::new(config.word_size);
    let mut lines = 0usize;

    for (idx, raw_line) in content.lines().enumerate() {
        let line = decode_line(raw_line.trim(), config.word_size, config.decode_mode)
            .map_err(|source| ConvertError::Decode {
                line_no: idx + 1,
                source,
            })?;
        runs.apply(line, store);
        lines += 1;
    }
    runs.flush(store);

    if config.verbose {
        eprintln!(
            "Data file: {} lines, {} regions, {} words.",
            lines, runs.regions, runs.implied_depth
        );
    }

    depth::check(config.depth, runs.implied_depth)?;

    Ok(LoadSummary {
        bytes: content.len() as u64,
        implied_depth: runs.implied_depth,
        regions: runs.regions,
        digest: sha256_hex(content.as_bytes()),
    })
}

/// Running state of one pass over a hex-data input
struct RunAccumulator {
    word_size: usize,
    offset: u64,
    run: Option<(u64, Vec<u8>)>,
    implied_depth: u64,
    regions: usize,
}

impl RunAccumulator {
    fn new(word_size: usize) -> Self {
        Self {
            word_size,
            offset: 0,
            run: None,
            implied_depth: 0,
            regions: 0,
        }
    }

    fn apply(&mut self, line: Line, store: &mut RegionStore) {
        match line {
            Line::Comment => {}
            Line::Address(address) => {
                self.flush(store);
                self.offset = address;
            }
            Line::Empty => {
                self.flush(store);
                self.advance(1);
            }
            Line::Data(bytes) => {
                let words = (bytes.len() / self.word_size) as u64;
                let start = self.offset;
                self.run
                    .get_or_insert_with(|| (start, Vec::new()))
                    .1
                    .extend_from_slice(&bytes);
                self.advance(words);
            }
        }
    }

    fn advance(&mut self, words: u64) {
        self.offset = self.offset.saturating_add(words);
        self.implied_depth = self.implied_depth.max(self.offset);
    }

    fn flush(&mut self, store: &mut RegionStore) {
        if let Some((start, bytes)) = self.run.take() {
            if !bytes.is_empty() {
                // decoder output is little-endian storage
                store.insert(start, Region::new(bytes, ByteOrder::Little));
                self.regions += 1;
            }
        }
    }
}
