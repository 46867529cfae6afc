//! Region store
//!
//! Loaded memory content as an ordered map from starting word address to a
//! contiguous byte buffer. Inserting at an existing address replaces the
//! earlier buffer; regions at different addresses are never merged or
//! clipped, even when they overlap.

use std::collections::BTreeMap;

use coe_format::ByteOrder;
use serde::{Deserialize, Serialize};

/// A contiguous run of bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Stored bytes, `word_size` bytes per word
    pub bytes: Vec<u8>,

    /// Order of the bytes inside each word
    pub byte_order: ByteOrder,
}

impl Region {
    pub fn new(bytes: Vec<u8>, byte_order: ByteOrder) -> Self {
        Self { bytes, byte_order }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of words covered, the last one possibly partial
    pub fn words(&self, word_size: usize) -> u64 {
        self.bytes.len().div_ceil(word_size) as u64
    }

    /// Iterate over stored words; the last chunk may be short
    pub fn chunks(&self, word_size: usize) -> std::slice::Chunks<'_, u8> {
        self.bytes.chunks(word_size)
    }
}

/// Two regions whose word ranges intersect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlap {
    /// Start of the lower region
    pub first: u64,

    /// One past the last word of the lower region
    pub first_end: u64,

    /// Start of the region that begins inside it
    pub second: u64,
}

/// Ordered collection of regions keyed by word address
#[derive(Debug, Clone, Default)]
pub struct RegionStore {
    regions: BTreeMap<u64, Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a region, returning the one previously stored at `start`
    pub fn insert(&mut self, start: u64, region: Region) -> Option<Region> {
        self.regions.insert(start, region)
    }

    pub fn get(&self, start: u64) -> Option<&Region> {
        self.regions.get(&start)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Regions in ascending address order
    pub fn iter(&self) -> impl Iterator<Item = (u64, &Region)> + '_ {
        self.regions.iter().map(|(start, region)| (*start, region))
    }

    /// One past the highest word covered by any region (0 when empty)
    pub fn end_address(&self, word_size: usize) -> u64 {
        self.iter()
            .map(|(start, region)| start.saturating_add(region.words(word_size)))
            .max()
            .unwrap_or(0)
    }

    /// Regions starting before an earlier region ends, each paired with the
    /// earlier region reaching furthest
    pub fn overlaps(&self, word_size: usize) -> Vec<Overlap> {
        let mut overlaps = Vec::new();
        let mut previous: Option<(u64, u64)> = None;

        for (start, region) in self.iter() {
            let end = start.saturating_add(region.words(word_size));
            if let Some((prev_start, prev_end)) = previous {
                if start < prev_end {
                    overlaps.push(Overlap {
                        first: prev_start,
                        first_end: prev_end,
                        second: start,
                    });
                }
            }
            if previous.map_or(true, |(_, prev_end)| end > prev_end) {
                previous = Some((start, end));
            }
        }

        overlaps
    }
}
