//! Error types for OxiVLC operations.
//!
//! A single error type covers the whole pipeline: table lookups during
//! encoding, chunk parsing in the bit packer, decode-tree faults, table
//! validation, and the file I/O done by the command-line front end.

use std::io;
use thiserror::Error;

/// The main error type for OxiVLC operations.
#[derive(Debug, Error)]
pub enum OxiVlcError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Character has no code in the encoding table.
    #[error("encoding to binary error, unknown character {ch:?}")]
    UnsupportedCharacter {
        /// The offending character.
        ch: char,
    },

    /// The escape marker appeared as ordinary input text.
    #[error("reserved escape marker {ch:?} found in input at position {position}")]
    ReservedCharacter {
        /// The escape marker.
        ch: char,
        /// Character index in the input text.
        position: usize,
    },

    /// A binary chunk could not be converted to a byte.
    #[error("can't parse binary chunk {chunk:?} to byte: {reason}")]
    InvalidChunk {
        /// The malformed chunk text.
        chunk: String,
        /// Why the chunk was rejected.
        reason: String,
    },

    /// Bit sequence leads to a dead end in the decoding tree.
    #[error("Invalid code at bit position {bit_position}")]
    InvalidCode {
        /// Bit position where no code could be continued.
        bit_position: u64,
    },

    /// Bit sequence ends inside a code that is not padding.
    #[error("Truncated code at bit position {bit_position}")]
    TruncatedCode {
        /// Bit position where the unfinished code starts.
        bit_position: u64,
    },

    /// Encoding table or codec configuration failed validation.
    #[error("Invalid encoding table: {message}")]
    InvalidTable {
        /// Description of the violated invariant.
        message: String,
    },

    /// Input is not acceptable for the requested operation.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of the problem.
        message: String,
    },
}

/// Result type alias for OxiVLC operations.
pub type Result<T> = std::result::Result<T, OxiVlcError>;

impl OxiVlcError {
    /// Create an unsupported character error.
    pub fn unsupported_character(ch: char) -> Self {
        Self::UnsupportedCharacter { ch }
    }

    /// Create a reserved character error.
    pub fn reserved_character(ch: char, position: usize) -> Self {
        Self::ReservedCharacter { ch, position }
    }

    /// Create an invalid chunk error.
    pub fn invalid_chunk(chunk: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidChunk {
            chunk: chunk.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid code error.
    pub fn invalid_code(bit_position: u64) -> Self {
        Self::InvalidCode { bit_position }
    }

    /// Create a truncated code error.
    pub fn truncated_code(bit_position: u64) -> Self {
        Self::TruncatedCode { bit_position }
    }

    /// Create an invalid table error.
    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
