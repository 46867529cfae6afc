//! COE encoder
//!
//! Walks the region store in address order and writes one token per word:
//! the default token for uncovered words, the rendered word otherwise.

use std::io::{self, Write};

use coe_format::CoeWriter;
use sha2::{Digest, Sha256};

use crate::region::RegionStore;

/// Encode `store` as a COE vector of at least `depth` tokens.
///
/// A region starting below the current position (an overlap) is written in
/// full right after the previous one, so overlapping content lengthens the
/// vector. Returns the sink and the number of tokens written.
pub fn encode<W: Write>(
    store: &RegionStore,
    depth: u64,
    word_size: usize,
    default_token: &str,
    out: W,
) -> io::Result<(W, u64)> {
    let mut writer = CoeWriter::new(out, word_size)?;
    let mut position = 0u64;

    for (start, region) in store.iter() {
        if position < start {
            writer.push_default(default_token, start - position)?;
            position = start;
        }
        for chunk in region.chunks(word_size) {
            writer.push_word(chunk, region.byte_order)?;
            position += 1;
        }
    }

    if position < depth {
        writer.push_default(default_token, depth - position)?;
    }

    writer.finish()
}

/// Encode into an in-memory buffer.
pub fn encode_to_vec(
    store: &RegionStore,
    depth: u64,
    word_size: usize,
    default_token: &str,
) -> io::Result<(Vec<u8>, u64)> {
    encode(store, depth, word_size, default_token, Vec::new())
}

/// Sink adapter that counts and hashes everything written through it.
#[derive(Debug)]
pub struct DigestWriter<W> {
    inner: W,
    hasher: Sha256,
    bytes: u64,
}

impl<W: Write> DigestWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
            bytes: 0,
        }
    }

    /// Flush the inner sink and return it with the byte count and hex SHA-256.
    pub fn finish(mut self) -> io::Result<(W, u64, String)> {
        self.inner.flush()?;
        Ok((self.inner, self.bytes, hex::encode(self.hasher.finalize())))
    }
}

impl<W: Write> Write for DigestWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
