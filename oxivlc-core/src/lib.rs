//! # OxiVLC Core
//!
//! Core components for the OxiVLC variable-length codec.
//!
//! - [`chunks`]: Splitting bit sequences into byte-sized chunks and back
//! - [`traits`]: The [`Packer`]/[`Unpacker`]/[`Codec`] traits
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L4: Interface                                           │
//! │     oxivlc CLI (pack / unpack)                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     Prefix code table, case escaping, decoding tree     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Chunks (this crate)                                 │
//! │     Bit string <-> byte chunks, traits, errors          │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxivlc_core::chunks::BinaryChunks;
//!
//! let chunks = BinaryChunks::from_bit_string("001000100110100101");
//! assert_eq!(chunks.to_bytes().unwrap(), vec![0x22, 0x69, 0x40]);
//! assert_eq!(
//!     BinaryChunks::from_bytes(&[0x22]).to_string(),
//!     "00100010"
//! );
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod chunks;
pub mod error;
pub mod traits;

pub use chunks::{BinaryChunk, BinaryChunks, CHUNK_SIZE};
pub use error::{OxiVlcError, Result};
pub use traits::{Codec, Packer, Unpacker};
