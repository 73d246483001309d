//! Primitive literal matching
//!
//! Only the integer sub-grammar lives here; it is what the enumeration
//! parser falls back to for numeric member values. The full
//! primitive-literal grammar (dates, guids, decimals, ...) belongs to
//! a higher layer.

use crate::lexical;
use crate::tokens::{tokenize, Token, TokenKind, TokenValue};

/// Match a 64-bit signed integer literal: an optional sign followed by
/// one or more ASCII digits.
pub fn int64_value(buffer: &[u8], index: usize) -> Option<Token> {
    let start = index;
    let mut index = index;

    if matches!(buffer.get(index), Some(b'+') | Some(b'-')) {
        index += 1;
    }

    let digits_start = index;
    while index < buffer.len() && buffer[index].is_ascii_digit() {
        index += 1;
    }
    if index == digits_start {
        return None;
    }

    // Reject values outside i64 without consuming a shorter prefix.
    let text = lexical::stringify(buffer, start, index);
    text.parse::<i64>().ok()?;

    Some(tokenize(start, index, TokenValue::Target("Edm.Int64"), TokenKind::Literal))
}
