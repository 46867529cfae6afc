//! Conversion report
//!
//! Summary of a finished run: where the content came from, which regions
//! were written and what ended up in the output file.

use coe_format::ByteOrder;
use serde::{Deserialize, Serialize};

use crate::config::ConversionConfig;
use crate::region::Overlap;

/// Schema version for the JSON report
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// Kind of input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Binary,
    Data,
}

/// One loaded input
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSummary {
    pub kind: SourceKind,

    /// File path (None for in-memory input)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Raw input size
    pub bytes: u64,

    /// Regions contributed
    pub regions: usize,

    /// Minimum depth this input needs
    pub implied_depth: u64,

    /// SHA-256 of the raw input bytes
    pub digest: String,
}

/// One region as written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionSummary {
    pub start: u64,
    pub words: u64,
    pub bytes: u64,
}

/// Summary of a conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub schema_version: u32,

    /// Output file path
    pub output: String,

    pub word_size: usize,

    /// Final depth in words
    pub depth: u64,

    pub default_token: String,

    /// Byte order applied to the binary input
    pub byte_order: ByteOrder,

    pub sources: Vec<SourceSummary>,

    pub regions: Vec<RegionSummary>,

    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub overlaps: Vec<Overlap>,

    /// Tokens in the written vector
    pub tokens: u64,

    /// Size of the written file
    pub output_bytes: u64,

    /// SHA-256 of the written file
    pub output_digest: String,
}

impl ConversionReport {
    pub fn new(output: String, config: &ConversionConfig, depth: u64) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            output,
            word_size: config.word_size,
            depth,
            default_token: config.default_token.clone(),
            byte_order: config.byte_order,
            sources: Vec::new(),
            regions: Vec::new(),
            overlaps: Vec::new(),
            tokens: 0,
            output_bytes: 0,
            output_digest: String::new(),
        }
    }

    pub fn with_sources(mut self, sources: Vec<SourceSummary>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_regions(mut self, regions: Vec<RegionSummary>) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_overlaps(mut self, overlaps: Vec<Overlap>) -> Self {
        self.overlaps = overlaps;
        self
    }

    /// Record what was written
    pub fn with_output(mut self, tokens: u64, bytes: u64, digest: String) -> Self {
        self.tokens = tokens;
        self.output_bytes = bytes;
        self.output_digest = digest;
        self
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable rendering
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!("Output file: {}\n", self.output));
        out.push_str(&format!(
            "  Word size: {} bytes, depth: {} words, default: {}, byte order: {}\n",
            self.word_size, self.depth, self.default_token, self.byte_order
        ));

        for source in &self.sources {
            let kind = match source.kind {
                SourceKind::Binary => "Binary",
                SourceKind::Data => "Data",
            };
            out.push_str(&format!(
                "  {} input: {} ({} bytes, {} region(s), needs {} words)\n",
                kind,
                source.path.as_deref().unwrap_or("<memory>"),
                source.bytes,
                source.regions,
                source.implied_depth
            ));
        }

        for region in &self.regions {
            out.push_str(&format!(
                "  Region @{}: {} words ({} bytes)\n",
                region.start, region.words, region.bytes
            ));
        }

        for overlap in &self.overlaps {
            out.push_str(&format!(
                "  Overlap: region @{} starts inside {}..{}\n",
                overlap.second, overlap.first, overlap.first_end
            ));
        }

        out.push_str(&format!(
            "  Written: {} tokens, {} bytes, sha256 {}\n",
            self.tokens, self.output_bytes, self.output_digest
        ));

        out
    }
}
