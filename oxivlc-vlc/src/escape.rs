//! Case escaping.
//!
//! The code table only has lowercase letters, so an uppercase ASCII letter is
//! written as the escape marker followed by its lowercase form:
//!
//! ```text
//! My name is Ted  ->  !my name is !ted
//! ```

/// Replace every uppercase ASCII letter with `marker` + lowercase letter.
///
/// Total: characters that aren't uppercase ASCII pass through unchanged and
/// are left for the table lookup to accept or reject.
pub fn escape_upper(text: &str, marker: char) -> String {
    let mut buf = String::with_capacity(text.len() + text.len() / 4);

    for ch in text.chars() {
        if ch.is_ascii_uppercase() {
            buf.push(marker);
            buf.push(ch.to_ascii_lowercase());
        } else {
            buf.push(ch);
        }
    }

    buf
}

/// Inverse of [`escape_upper`]: `marker` + letter becomes the uppercase letter.
///
/// A trailing marker with nothing after it is dropped.
pub fn unescape_upper(text: &str, marker: char) -> String {
    let mut buf = String::with_capacity(text.len());
    let mut capitalize = false;

    for ch in text.chars() {
        if capitalize {
            buf.push(ch.to_ascii_uppercase());
            capitalize = false;
        } else if ch == marker {
            capitalize = true;
        } else {
            buf.push(ch);
        }
    }

    buf
}
