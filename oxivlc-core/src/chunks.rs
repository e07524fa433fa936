//! Binary chunk packing.
//!
//! A bit sequence is carried as text made of `'0'` and `'1'` characters,
//! most significant bit first. Packing splits it into [`CHUNK_SIZE`]-wide
//! chunks, right-padding the last one with `'0'`, and each chunk maps to
//! exactly one byte.
//!
//! ```text
//! 001000100110100101  ->  00100010 01101001 01000000
//!                                                ^^^^^^ padding
//! ```

use crate::error::{OxiVlcError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of bits per chunk (one byte).
pub const CHUNK_SIZE: usize = 8;

/// One chunk of exactly [`CHUNK_SIZE`] binary digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryChunk(String);

impl BinaryChunk {
    /// Render a byte as its 8-digit binary form (MSB first).
    pub fn from_byte(byte: u8) -> Self {
        Self(format!("{byte:08b}"))
    }

    /// Chunk text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the chunk as an unsigned base-2 byte.
    pub fn to_byte(&self) -> Result<u8> {
        parse_chunk(&self.0)
    }
}

fn parse_chunk(text: &str) -> Result<u8> {
    let mut value = 0u8;
    let mut digits = 0usize;

    for ch in text.chars() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            other => {
                return Err(OxiVlcError::invalid_chunk(
                    text,
                    format!("non-binary character {other:?}"),
                ));
            }
        };
        digits += 1;
        if digits > CHUNK_SIZE {
            break;
        }
        value = (value << 1) | bit;
    }

    if digits != CHUNK_SIZE {
        let actual = text.chars().count();
        return Err(OxiVlcError::invalid_chunk(
            text,
            format!("expected {CHUNK_SIZE} binary digits, got {actual}"),
        ));
    }

    Ok(value)
}

impl FromStr for BinaryChunk {
    type Err = OxiVlcError;

    fn from_str(s: &str) -> Result<Self> {
        parse_chunk(s)?;
        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for BinaryChunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered group of chunks covering a whole bit sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryChunks(Vec<BinaryChunk>);

impl BinaryChunks {
    /// Split a bit string into chunks, zero-padding the last one.
    ///
    /// Produces `ceil(len / CHUNK_SIZE)` chunks, none for an empty string.
    pub fn from_bit_string(bits: &str) -> Self {
        let mut chunks = Vec::with_capacity(bits.len().div_ceil(CHUNK_SIZE));
        let mut buf = String::with_capacity(CHUNK_SIZE);
        let mut filled = 0usize;

        for bit in bits.chars() {
            buf.push(bit);
            filled += 1;

            if filled == CHUNK_SIZE {
                chunks.push(BinaryChunk(std::mem::take(&mut buf)));
                filled = 0;
            }
        }

        if filled != 0 {
            buf.extend(std::iter::repeat_n('0', CHUNK_SIZE - filled));
            chunks.push(BinaryChunk(buf));
        }

        Self(chunks)
    }

    /// One chunk per byte, each rendered MSB first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(bytes.iter().copied().map(BinaryChunk::from_byte).collect())
    }

    /// Convert every chunk to its byte.
    ///
    /// Fails on the first malformed chunk; no partial output is returned.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        self.0.iter().map(BinaryChunk::to_byte).collect()
    }

    /// Number of chunks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no chunks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the chunks in order.
    pub fn iter(&self) -> std::slice::Iter<'_, BinaryChunk> {
        self.0.iter()
    }
}

impl fmt::Display for BinaryChunks {
    /// Concatenates the chunks back into one bit string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in &self.0 {
            f.write_str(&chunk.0)?;
        }
        Ok(())
    }
}

impl FromStr for BinaryChunks {
    type Err = OxiVlcError;

    /// Parse whitespace-separated chunks, e.g. `"00100010 01101001"`.
    fn from_str(s: &str) -> Result<Self> {
        s.split_whitespace()
            .map(BinaryChunk::from_str)
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}

impl From<Vec<BinaryChunk>> for BinaryChunks {
    fn from(chunks: Vec<BinaryChunk>) -> Self {
        Self(chunks)
    }
}

impl<'a> IntoIterator for &'a BinaryChunks {
    type Item = &'a BinaryChunk;
    type IntoIter = std::slice::Iter<'a, BinaryChunk>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
