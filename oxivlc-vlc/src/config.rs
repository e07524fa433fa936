//! VLC codec configuration.

/// VLC codec configuration parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VlcConfig {
    /// Marker placed before a lowercased letter to mean "uppercase".
    /// Must have a code in the encoding table.
    pub escape_marker: char,
    /// Whether a literal marker in the input is rejected when packing.
    /// Without rejection, text such as `"!a"` unpacks as `"A"`.
    pub reject_marker_in_input: bool,
}

impl VlcConfig {
    /// Standard configuration.
    ///
    /// - `!` escape marker
    /// - Literal `!` in the input is an error
    pub const STANDARD: Self = Self {
        escape_marker: '!',
        reject_marker_in_input: true,
    };

    /// Lenient configuration.
    ///
    /// - `!` escape marker
    /// - Literal `!` is encoded as-is; the round trip is then not guaranteed
    pub const LENIENT: Self = Self {
        escape_marker: '!',
        reject_marker_in_input: false,
    };

    /// Create a configuration with a custom escape marker.
    pub fn new(escape_marker: char) -> Self {
        Self {
            escape_marker,
            reject_marker_in_input: true,
        }
    }
}

impl Default for VlcConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
