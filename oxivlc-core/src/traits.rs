//! Core traits for text packing and unpacking.
//!
//! Every codec implements [`Packer`] and [`Unpacker`]; anything that does
//! both is a [`Codec`].

use crate::error::Result;

/// Converts text into a packed byte sequence.
pub trait Packer {
    /// Pack `text` into bytes.
    ///
    /// Packing is all-or-nothing: on error no partial output is returned.
    fn pack(&self, text: &str) -> Result<Vec<u8>>;
}

/// Converts a packed byte sequence back into text.
pub trait Unpacker {
    /// Unpack `data` produced by a matching [`Packer`].
    fn unpack(&self, data: &[u8]) -> Result<String>;
}

/// A codec that can both pack and unpack.
pub trait Codec: Packer + Unpacker {
    /// Pack `text` and immediately unpack the result.
    ///
    /// Useful for integrity checks: a lossless codec returns `text` unchanged.
    fn roundtrip(&self, text: &str) -> Result<String> {
        let packed = self.pack(text)?;
        self.unpack(&packed)
    }
}

impl<T: Packer + Unpacker> Codec for T {}
