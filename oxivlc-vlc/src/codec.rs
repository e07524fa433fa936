//! VLC codec facade.
//!
//! Packing: escape uppercase -> table lookup -> chunk into bytes.
//! Unpacking: bytes to bits -> tree walk -> unescape uppercase.

use crate::config::VlcConfig;
use crate::escape::{escape_upper, unescape_upper};
use crate::table::EncodingTable;
use crate::tree::DecodingTree;
use oxivlc_core::chunks::BinaryChunks;
use oxivlc_core::error::{OxiVlcError, Result};
use oxivlc_core::traits::{Packer, Unpacker};
use std::sync::LazyLock;
use tracing::{debug, trace};

static STANDARD: LazyLock<VlcCodec> = LazyLock::new(|| {
    let table = EncodingTable::standard().clone();
    let tree = DecodingTree::new(&table);
    VlcCodec {
        table,
        tree,
        config: VlcConfig::STANDARD,
    }
});

/// Variable-length codec over a fixed prefix code table.
///
/// Read-only after construction, so one instance can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct VlcCodec {
    table: EncodingTable,
    tree: DecodingTree,
    config: VlcConfig,
}

impl VlcCodec {
    /// Codec with the standard table and configuration.
    pub fn new() -> Self {
        Self::standard().clone()
    }

    /// Shared codec with the standard table and configuration.
    pub fn standard() -> &'static VlcCodec {
        &STANDARD
    }

    /// Codec with the standard table and a custom configuration.
    pub fn with_config(config: VlcConfig) -> Result<Self> {
        Self::with_table(EncodingTable::standard().clone(), config)
    }

    /// Codec with a custom table.
    ///
    /// # Errors
    ///
    /// [`OxiVlcError::InvalidTable`] if the escape marker has no code.
    pub fn with_table(table: EncodingTable, config: VlcConfig) -> Result<Self> {
        if !table.contains(config.escape_marker) {
            return Err(OxiVlcError::invalid_table(format!(
                "escape marker {:?} has no code",
                config.escape_marker
            )));
        }
        let tree = DecodingTree::new(&table);
        Ok(Self {
            table,
            tree,
            config,
        })
    }

    /// The encoding table.
    pub fn table(&self) -> &EncodingTable {
        &self.table
    }

    /// The configuration.
    pub fn config(&self) -> VlcConfig {
        self.config
    }
}

impl Default for VlcCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Packer for VlcCodec {
    fn pack(&self, text: &str) -> Result<Vec<u8>> {
        let marker = self.config.escape_marker;
        if self.config.reject_marker_in_input
            && let Some(position) = text.chars().position(|ch| ch == marker)
        {
            return Err(OxiVlcError::reserved_character(marker, position));
        }

        let escaped = escape_upper(text, marker);
        let bits = self.table.encode_binary(&escaped)?;
        trace!(bits = bits.len(), "encoded to binary");

        let packed = BinaryChunks::from_bit_string(&bits).to_bytes()?;
        debug!(input = text.len(), output = packed.len(), "packed text");
        Ok(packed)
    }
}

impl Unpacker for VlcCodec {
    fn unpack(&self, data: &[u8]) -> Result<String> {
        let bits = BinaryChunks::from_bytes(data).to_string();
        let escaped = self.tree.decode_binary(&bits)?;
        trace!(chars = escaped.len(), "decoded binary");

        let text = unescape_upper(&escaped, self.config.escape_marker);
        debug!(input = data.len(), output = text.len(), "unpacked text");
        Ok(text)
    }
}
