//! COE vector writer
//!
//! Writes the radix/vector header on construction, then one token per word
//! position, separated by `,` and a newline, and the `;` terminator on
//! [`CoeWriter::finish`].

use std::io::{self, Write};

use crate::word::{render_word, ByteOrder};
use crate::{RADIX_LINE, TERMINATOR, TOKEN_SEPARATOR, VECTOR_LINE};

/// Streaming writer for a COE memory-initialization vector.
pub struct CoeWriter<W: Write> {
    out: W,
    word_size: usize,
    tokens: u64,
}

impl<W: Write> CoeWriter<W> {
    /// Start a COE file by writing its two header lines.
    pub fn new(mut out: W, word_size: usize) -> io::Result<Self> {
        writeln!(out, "{}", RADIX_LINE)?;
        writeln!(out, "{}", VECTOR_LINE)?;
        Ok(Self {
            out,
            word_size,
            tokens: 0,
        })
    }

    /// Number of tokens written so far.
    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    /// Write a raw token verbatim.
    pub fn push_token(&mut self, token: &str) -> io::Result<()> {
        if self.tokens > 0 {
            self.out.write_all(TOKEN_SEPARATOR.as_bytes())?;
        }
        self.out.write_all(token.as_bytes())?;
        self.tokens += 1;
        Ok(())
    }

    /// Write `count` copies of the filler token.
    pub fn push_default(&mut self, token: &str, count: u64) -> io::Result<()> {
        for _ in 0..count {
            self.push_token(token)?;
        }
        Ok(())
    }

    /// Write one stored word.
    pub fn push_word(&mut self, chunk: &[u8], order: ByteOrder) -> io::Result<()> {
        let rendered = render_word(chunk, self.word_size, order);
        self.push_token(&rendered)
    }

    /// Terminate the vector and hand back the sink with the token count.
    pub fn finish(mut self) -> io::Result<(W, u64)> {
        self.out.write_all(TERMINATOR.as_bytes())?;
        self.out.flush()?;
        Ok((self.out, self.tokens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut CoeWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut writer = CoeWriter::new(Vec::new(), 2).unwrap();
        f(&mut writer).unwrap();
        let (bytes, _) = writer.finish().unwrap();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_empty_vector() {
        let text = render(|_| Ok(()));
        assert_eq!(
            text,
            "MEMORY_INITIALIZATION_RADIX=16;\nMEMORY_INITIALIZATION_VECTOR=\n;\n"
        );
    }

    #[test]
    fn test_separators_between_tokens_only() {
        let text = render(|w| {
            w.push_default("0", 2)?;
            w.push_word(&[0x34, 0x12], ByteOrder::Little)
        });
        assert_eq!(
            text,
            "MEMORY_INITIALIZATION_RADIX=16;\nMEMORY_INITIALIZATION_VECTOR=\n0,\n0,\n1234;\n"
        );
    }

    #[test]
    fn test_token_count() {
        let mut writer = CoeWriter::new(Vec::new(), 4).unwrap();
        writer.push_default("ff", 3).unwrap();
        writer.push_word(&[1, 2, 3, 4], ByteOrder::Big).unwrap();
        assert_eq!(writer.tokens(), 4);
        let (_, tokens) = writer.finish().unwrap();
        assert_eq!(tokens, 4);
    }

    #[test]
    fn test_default_token_is_verbatim() {
        let text = render(|w| w.push_default("DEAD_BEEF", 1));
        assert!(text.contains("\nDEAD_BEEF;\n"));
    }
}
