//! Byte classification primitives
//!
//! Single-byte predicates and small buffer helpers the matchers are
//! built from. Everything operates on raw bytes; URL decoding happens
//! upstream.

/// Single quote, the literal delimiter.
pub fn is_squote(byte: u8) -> bool {
    byte == b'\''
}

/// Comma, the enum value separator.
pub fn is_comma(byte: u8) -> bool {
    byte == b','
}

/// Dot, the namespace segment separator.
pub fn is_dot(byte: u8) -> bool {
    byte == b'.'
}

/// Leading identifier character class: ASCII letter or underscore.
pub fn is_identifier_leading_char(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Identifier continuation character class: leading class plus digits.
pub fn is_identifier_char(byte: u8) -> bool {
    is_identifier_leading_char(byte) || byte.is_ascii_digit()
}

/// Whether `buffer` contains the bytes of `literal` starting at
/// `index`.
pub fn literal_at(buffer: &[u8], index: usize, literal: &str) -> bool {
    buffer
        .get(index..index + literal.len())
        .map(|window| window == literal.as_bytes())
        .unwrap_or(false)
}

/// Materialize the text of `[start, end)`.
pub fn stringify(buffer: &[u8], start: usize, end: usize) -> String {
    String::from_utf8_lossy(&buffer[start..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_classes() {
        assert!(is_identifier_leading_char(b'A'));
        assert!(is_identifier_leading_char(b'_'));
        assert!(!is_identifier_leading_char(b'5'));
        assert!(is_identifier_char(b'5'));
        assert!(!is_identifier_char(b'.'));
        assert!(is_dot(b'.'));
        assert!(is_comma(b','));
        assert!(is_squote(b'\''));
    }

    #[test]
    fn test_literal_at() {
        let buffer = b"Collection('Edm.String')";
        assert!(literal_at(buffer, 0, "Collection"));
        assert!(literal_at(buffer, 12, "Edm."));
        assert!(!literal_at(buffer, 1, "Collection"));
        // A literal running past the end of the buffer never matches.
        assert!(!literal_at(buffer, 20, "String"));
    }

    #[test]
    fn test_stringify() {
        assert_eq!(stringify(b"NS.Widget", 3, 9), "Widget");
    }
}
