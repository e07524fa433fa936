//! # OxiVLC-VLC: Static Variable-Length Code
//!
//! This crate packs lowercase-alphabet text into bytes with a fixed prefix
//! code and unpacks it again.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Fixed table**: space, `a`-`z`, and the `!` escape marker
//! - **Case escaping**: `T` is stored as `!t`, so uppercase costs one marker
//! - **Byte aligned**: the bit stream is zero-padded to a whole byte
//!
//! ## Format
//!
//! ```text
//! "Ted" -> "!ted" -> 001000 1001 101 00101 -> 00100010 01101001 01000000
//!                    !      t    e   d                          ^^^^^^ padding
//! ```
//!
//! Codes are prefix-free, so no separators are stored. Decoding walks a
//! binary tree built from the same table.
//!
//! ## Example
//!
//! ```rust
//! use oxivlc_vlc::{pack, unpack};
//!
//! let packed = pack("My name is Ted").unwrap();
//! assert_eq!(packed.len(), 9);
//!
//! let text = unpack(&packed).unwrap();
//! assert_eq!(text, "My name is Ted");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codec;
mod config;
mod escape;
mod table;
mod tree;

pub use codec::VlcCodec;
pub use config::VlcConfig;
pub use escape::{escape_upper, unescape_upper};
pub use oxivlc_core::error::{OxiVlcError, Result};
pub use oxivlc_core::traits::{Codec, Packer, Unpacker};
pub use table::EncodingTable;
pub use tree::DecodingTree;

/// Pack text with the standard codec.
///
/// # Example
///
/// ```rust
/// use oxivlc_vlc::pack;
///
/// assert_eq!(pack("Ted").unwrap(), vec![0x22, 0x69, 0x40]);
/// assert!(pack("Ω").is_err());
/// ```
pub fn pack(text: &str) -> Result<Vec<u8>> {
    VlcCodec::standard().pack(text)
}

/// Unpack bytes produced by [`pack`].
///
/// # Example
///
/// ```rust
/// use oxivlc_vlc::unpack;
///
/// assert_eq!(unpack(&[0x22, 0x69, 0x40]).unwrap(), "Ted");
/// ```
pub fn unpack(data: &[u8]) -> Result<String> {
    VlcCodec::standard().unpack(data)
}
