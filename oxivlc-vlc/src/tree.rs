//! Decoding tree.
//!
//! A binary tree derived from an [`EncodingTable`]: a `0` bit follows the
//! zero child, a `1` bit the one child, and the node at the end of each code
//! carries that code's character. Nodes live in an arena and refer to their
//! children by index.

use crate::table::EncodingTable;
use oxivlc_core::CHUNK_SIZE;
use oxivlc_core::error::{OxiVlcError, Result};
use tracing::trace;

const ROOT: usize = 0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Node {
    /// Child indices for bit `0` and bit `1`.
    children: [Option<u32>; 2],
    symbol: Option<char>,
}

/// Prefix tree used to turn a bit string back into characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodingTree {
    nodes: Vec<Node>,
}

impl DecodingTree {
    /// Build the tree for every entry of `table`.
    pub fn new(table: &EncodingTable) -> Self {
        let mut tree = Self {
            nodes: vec![Node::default()],
        };

        for (ch, code) in table.iter() {
            tree.insert(code, ch);
        }

        tree
    }

    fn insert(&mut self, code: &str, symbol: char) {
        let mut current = ROOT;

        for bit in code.bytes() {
            let slot = usize::from(bit == b'1');
            current = match self.nodes[current].children[slot] {
                Some(next) => next as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children[slot] = Some(next as u32);
                    next
                }
            };
        }

        self.nodes[current].symbol = Some(symbol);
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Resolve a bit string into characters.
    ///
    /// Trailing zeros that don't complete a code and number fewer than
    /// [`CHUNK_SIZE`] are chunk padding and are ignored.
    ///
    /// # Errors
    ///
    /// - [`OxiVlcError::InvalidCode`] for a character other than `0`/`1`, or a
    ///   bit with no branch in the tree that isn't padding.
    /// - [`OxiVlcError::TruncatedCode`] when the input ends inside a code.
    pub fn decode_binary(&self, bits: &str) -> Result<String> {
        let mut out = String::with_capacity(bits.len() / 4);
        let mut current = ROOT;
        // Bit position where the code being walked started.
        let mut code_start = 0usize;
        let mut walked_one = false;
        let mut position = 0usize;

        for (offset, ch) in bits.char_indices() {
            let slot = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(OxiVlcError::invalid_code(position as u64)),
            };

            let Some(next) = self.nodes[current].children[slot] else {
                let rest = &bits[offset..];
                let pending = position - code_start + rest.chars().count();
                if !walked_one && pending < CHUNK_SIZE && rest.chars().all(|c| c == '0') {
                    trace!(pending, "dead end inside padding");
                    return Ok(out);
                }
                return Err(OxiVlcError::invalid_code(position as u64));
            };

            position += 1;
            current = next as usize;
            walked_one |= slot == 1;

            if let Some(symbol) = self.nodes[current].symbol {
                out.push(symbol);
                current = ROOT;
                code_start = position;
                walked_one = false;
            }
        }

        if current != ROOT && (walked_one || position - code_start >= CHUNK_SIZE) {
            return Err(OxiVlcError::truncated_code(code_start as u64));
        }

        Ok(out)
    }
}
