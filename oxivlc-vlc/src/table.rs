//! Prefix code table.
//!
//! Maps each supported character to a binary code. No code is a prefix of
//! another, so a concatenation of codes decodes without delimiters.

use oxivlc_core::CHUNK_SIZE;
use oxivlc_core::error::{OxiVlcError, Result};
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Codes of the standard table, roughly ordered by English letter frequency.
const STANDARD_CODES: [(char, &str); 28] = [
    (' ', "11"),
    ('e', "101"),
    ('t', "1001"),
    ('a', "011"),
    ('o', "10001"),
    ('i', "01001"),
    ('n', "10000"),
    ('s', "0101"),
    ('h', "0011"),
    ('r', "01000"),
    ('d', "00101"),
    ('l', "001001"),
    ('c', "000101"),
    ('u', "00011"),
    ('m', "000011"),
    ('f', "000100"),
    ('!', "001000"),
    ('g', "0000100"),
    ('p', "0000101"),
    ('w', "0000011"),
    ('y', "0000001"),
    ('b', "0000010"),
    ('v', "00000001"),
    ('k', "0000000001"),
    ('j', "000000001"),
    ('x', "00000000001"),
    ('q', "000000000001"),
    ('z', "000000000000"),
];

static STANDARD: LazyLock<EncodingTable> = LazyLock::new(|| EncodingTable {
    codes: STANDARD_CODES
        .iter()
        .map(|&(ch, code)| (ch, code.to_owned()))
        .collect(),
});

/// Immutable character to binary code mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTable {
    codes: BTreeMap<char, String>,
}

impl EncodingTable {
    /// The fixed table: space, `a`-`z` and the `!` escape marker.
    pub fn standard() -> &'static EncodingTable {
        &STANDARD
    }

    /// Build a custom table.
    ///
    /// # Errors
    ///
    /// Returns [`OxiVlcError::InvalidTable`] when
    /// - a code is empty or contains anything but `'0'` and `'1'`,
    /// - a character is listed twice,
    /// - one code is a prefix of (or equal to) another,
    /// - a code is all zeros and shorter than a chunk, so that padding bits
    ///   could decode as that character.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, S)>,
        S: Into<String>,
    {
        let mut codes = BTreeMap::new();

        for (ch, code) in entries {
            let code = code.into();
            if code.is_empty() {
                return Err(OxiVlcError::invalid_table(format!(
                    "empty code for {ch:?}"
                )));
            }
            if !code.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(OxiVlcError::invalid_table(format!(
                    "code {code:?} for {ch:?} is not binary"
                )));
            }
            if code.len() < CHUNK_SIZE && !code.contains('1') {
                return Err(OxiVlcError::invalid_table(format!(
                    "code {code:?} for {ch:?} is indistinguishable from padding"
                )));
            }
            if codes.insert(ch, code).is_some() {
                return Err(OxiVlcError::invalid_table(format!(
                    "duplicate entry for {ch:?}"
                )));
            }
        }

        // A prefix sorts directly before the codes it prefixes.
        let mut sorted: Vec<(&String, char)> =
            codes.iter().map(|(&ch, code)| (code, ch)).collect();
        sorted.sort();
        for pair in sorted.windows(2) {
            let (short, short_ch) = pair[0];
            let (long, long_ch) = pair[1];
            if long.starts_with(short.as_str()) {
                return Err(OxiVlcError::invalid_table(format!(
                    "code {short:?} for {short_ch:?} is a prefix of {long:?} for {long_ch:?}"
                )));
            }
        }

        Ok(Self { codes })
    }

    /// Code for `ch`.
    pub fn lookup(&self, ch: char) -> Result<&str> {
        self.codes
            .get(&ch)
            .map(String::as_str)
            .ok_or_else(|| OxiVlcError::unsupported_character(ch))
    }

    /// Whether `ch` has a code.
    pub fn contains(&self, ch: char) -> bool {
        self.codes.contains_key(&ch)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entries in character order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.codes.iter().map(|(&ch, code)| (ch, code.as_str()))
    }

    /// Concatenate the codes of every character in `text`.
    ///
    /// All-or-nothing: the first unsupported character fails the whole call.
    pub fn encode_binary(&self, text: &str) -> Result<String> {
        let mut bits = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            bits.push_str(self.lookup(ch)?);
        }
        Ok(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_is_valid() {
        let table = EncodingTable::standard();
        let rebuilt = EncodingTable::new(table.iter()).unwrap();
        assert_eq!(&rebuilt, table);
        assert_eq!(table.len(), 28);
    }

    #[test]
    fn test_standard_table_prefix_free() {
        let table = EncodingTable::standard();
        for (a, code_a) in table.iter() {
            for (b, code_b) in table.iter() {
                if a != b {
                    assert!(
                        !code_b.starts_with(code_a),
                        "{a:?}={code_a} is a prefix of {b:?}={code_b}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_standard_alphabet() {
        let table = EncodingTable::standard();
        assert!(table.contains(' '));
        assert!(table.contains('!'));
        for ch in 'a'..='z' {
            assert!(table.contains(ch), "missing {ch:?}");
        }
        assert!(!table.contains('A'));
        assert!(!table.contains('.'));
        assert!(!table.contains('0'));
    }

    #[test]
    fn test_lookup() {
        let table = EncodingTable::standard();
        assert_eq!(table.lookup(' ').unwrap(), "11");
        assert_eq!(table.lookup('e').unwrap(), "101");
        assert_eq!(table.lookup('!').unwrap(), "001000");
        assert_eq!(table.lookup('z').unwrap(), "000000000000");
    }

    #[test]
    fn test_lookup_unsupported() {
        let err = EncodingTable::standard().lookup('π').unwrap_err();
        assert!(matches!(err, OxiVlcError::UnsupportedCharacter { ch: 'π' }));
    }

    #[test]
    fn test_encode_binary() {
        let table = EncodingTable::standard();
        assert_eq!(table.encode_binary("").unwrap(), "");
        assert_eq!(table.encode_binary("!ted").unwrap(), "001000100110100101");
        assert_eq!(
            table.encode_binary("!my name is !ted").unwrap(),
            "001000000011000000111100000110000111011101001010111001000100110100101"
        );
        assert_eq!(
            table.encode_binary("!some pretty !s!u!bsequence").unwrap(),
            "0010000101100010000111011100001010100010110011001000000111001000010100100000011001000000001001011010000000000010001110110000000101101"
        );
    }

    #[test]
    fn test_encode_binary_errors() {
        let table = EncodingTable::standard();
        for (text, bad) in [("π", 'π'), ("!ted Ω", 'Ω'), ("!my name is ∑", '∑')] {
            let err = table.encode_binary(text).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("encoding to binary error, unknown character {bad:?}")
            );
        }
    }

    #[test]
    fn test_new_rejects_prefix() {
        let err = EncodingTable::new([('a', "1"), ('b', "10")]).unwrap_err();
        assert!(err.to_string().contains("prefix"));

        let err = EncodingTable::new([('a', "01"), ('b', "01")]).unwrap_err();
        assert!(err.to_string().contains("prefix"));
    }

    #[test]
    fn test_new_rejects_malformed_codes() {
        assert!(EncodingTable::new([('a', "")]).is_err());
        assert!(EncodingTable::new([('a', "102")]).is_err());
        assert!(EncodingTable::new([('a', "1"), ('a', "01")]).is_err());
    }

    #[test]
    fn test_new_rejects_padding_lookalike() {
        let err = EncodingTable::new([('a', "1"), ('b', "00")]).unwrap_err();
        assert!(err.to_string().contains("padding"));

        // A full chunk of zeros can't come from padding.
        assert!(EncodingTable::new([('a', "1"), ('b', "00000000")]).is_ok());
    }

    #[test]
    fn test_new_accepts_incomplete_code() {
        let table = EncodingTable::new([('a', "1"), ('b', "01")]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.encode_binary("ab").unwrap(), "101");
    }
}
