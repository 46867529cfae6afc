//! Conversion orchestration
//!
//! A [`ConversionContext`] owns everything one run needs: the validated
//! configuration, the region store and what each loader reported. Loading
//! completes before encoding starts, and the output file is only created
//! once every depth check has passed. The vector is then streamed to it.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use coe_format::DecodeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, ConversionConfig, ConversionInputs};
use crate::depth;
use crate::encode::{self, encode_to_vec, DigestWriter};
use crate::loader::{self, LoadSummary};
use crate::region::{Overlap, RegionStore};
use crate::report::{ConversionReport, RegionSummary, SourceKind, SourceSummary};

/// Process exit code for every failed conversion.
pub const EXIT_FAILURE: i32 = -1;

/// Conversion errors
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("specified depth {declared} too small, should be at least {required}")]
    DepthTooSmall { declared: u64, required: u64 },

    #[error("line {line_no}: {source}")]
    Decode { line_no: usize, source: DecodeError },
}

/// Broad class of a conversion failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Configuration,
    Io,
    Capacity,
    Decode,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Io => write!(f, "io"),
            Self::Capacity => write!(f, "capacity"),
            Self::Decode => write!(f, "decode"),
        }
    }
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Config(_) => ErrorKind::Configuration,
            ConvertError::Read { .. } | ConvertError::Write { .. } => ErrorKind::Io,
            ConvertError::DepthTooSmall { .. } => ErrorKind::Capacity,
            ConvertError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;

/// A rendered COE vector
#[derive(Debug, Clone)]
pub struct Encoded {
    pub bytes: Vec<u8>,
    pub tokens: u64,
}

/// State of one conversion run
#[derive(Debug)]
pub struct ConversionContext {
    config: ConversionConfig,
    store: RegionStore,
    sources: Vec<SourceSummary>,
}

impl ConversionContext {
    /// Create a context, rejecting an invalid configuration up front
    pub fn new(config: ConversionConfig) -> ConvertResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: RegionStore::new(),
            sources: Vec::new(),
        })
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn store(&self) -> &RegionStore {
        &self.store
    }

    /// Inputs loaded so far, in load order
    pub fn sources(&self) -> &[SourceSummary] {
        &self.sources
    }

    /// Load a binary file at the configured word address
    pub fn load_binary(&mut self, path: &Path) -> ConvertResult<&SourceSummary> {
        let summary = loader::load_binary(path, &self.config, &mut self.store)?;
        Ok(self.record(SourceKind::Binary, Some(path), summary))
    }

    /// Load an in-memory binary image at the configured word address
    pub fn load_binary_bytes(&mut self, bytes: Vec<u8>) -> ConvertResult<&SourceSummary> {
        let summary = loader::load_binary_bytes(bytes, &self.config, &mut self.store)?;
        Ok(self.record(SourceKind::Binary, None, summary))
    }

    /// Load a hex-data file
    pub fn load_hex_data(&mut self, path: &Path) -> ConvertResult<&SourceSummary> {
        let summary = loader::load_hex_data(path, &self.config, &mut self.store)?;
        Ok(self.record(SourceKind::Data, Some(path), summary))
    }

    /// Load hex-data text
    pub fn load_hex_data_str(&mut self, content: &str) -> ConvertResult<&SourceSummary> {
        let summary = loader::load_hex_data_str(content, &self.config, &mut self.store)?;
        Ok(self.record(SourceKind::Data, None, summary))
    }

    fn record(&mut self, kind: SourceKind, path: Option<&Path>, summary: LoadSummary) -> &SourceSummary {
        self.sources.push(SourceSummary {
            kind,
            path: path.map(|p| p.display().to_string()),
            bytes: summary.bytes,
            regions: summary.regions,
            implied_depth: summary.implied_depth,
            digest: summary.digest,
        });
        &self.sources[self.sources.len() - 1]
    }

    /// Declared depth, raised to whatever the loaded content needs
    pub fn final_depth(&self) -> u64 {
        depth::resolve(
            self.config.depth,
            self.sources.iter().map(|s| s.implied_depth),
        )
    }

    /// Regions whose word ranges intersect
    pub fn overlaps(&self) -> Vec<Overlap> {
        self.store.overlaps(self.config.word_size)
    }

    fn announce(&self, depth: u64) {
        if !self.config.verbose {
            return;
        }
        eprintln!(
            "Generating COE file: word size = {}, depth = {}, byte order = {}",
            self.config.word_size, depth, self.config.byte_order
        );
        for overlap in self.overlaps() {
            eprintln!(
                "Warning: region at word {} overlaps region {}..{}, written after it",
                overlap.second, overlap.first, overlap.first_end
            );
        }
    }

    /// Render the COE vector into memory
    pub fn encode(&self) -> io::Result<Encoded> {
        let depth = self.final_depth();
        self.announce(depth);

        let (bytes, tokens) = encode_to_vec(
            &self.store,
            depth,
            self.config.word_size,
            &self.config.default_token,
        )?;
        Ok(Encoded { bytes, tokens })
    }

    /// Stream the vector to `output` and report the run
    pub fn write(&self, output: &Path) -> ConvertResult<ConversionReport> {
        let write_error = |source: io::Error| ConvertError::Write {
            path: output.to_path_buf(),
            source,
        };

        let depth = self.final_depth();
        self.announce(depth);

        let file = File::create(output).map_err(write_error)?;
        let (sink, tokens) = encode::encode(
            &self.store,
            depth,
            self.config.word_size,
            &self.config.default_token,
            DigestWriter::new(BufWriter::new(file)),
        )
        .map_err(write_error)?;
        let (_, bytes, digest) = sink.finish().map_err(write_error)?;

        if self.config.verbose {
            eprintln!("Output file: {}", output.display());
        }

        Ok(self.report(output, tokens, bytes, digest))
    }

    fn report(&self, output: &Path, tokens: u64, bytes: u64, digest: String) -> ConversionReport {
        let word_size = self.config.word_size;
        ConversionReport::new(
            output.display().to_string(),
            &self.config,
            self.final_depth(),
        )
        .with_sources(self.sources.clone())
        .with_regions(
            self.store
                .iter()
                .map(|(start, region)| RegionSummary {
                    start,
                    words: region.words(word_size),
                    bytes: region.len() as u64,
                })
                .collect(),
        )
        .with_overlaps(self.overlaps())
        .with_output(tokens, bytes, digest)
    }
}

/// Run a whole conversion: load every supplied input, then write the output.
pub fn convert(
    config: ConversionConfig,
    inputs: &ConversionInputs,
) -> ConvertResult<ConversionReport> {
    let mut context = ConversionContext::new(config)?;
    inputs.validate()?;

    if let Some(ref path) = inputs.binary {
        context.load_binary(path)?;
    }
    if let Some(ref path) = inputs.data {
        context.load_hex_data(path)?;
    }

    context.write(&inputs.output)
}
