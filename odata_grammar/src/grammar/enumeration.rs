//! Enumeration literal matching
//!
//! `namespace.enumTypeName'value'` where the quoted value is one or
//! more comma-separated members, each a member name or a 64-bit
//! integer. Matching here is purely lexical; whether a member name is
//! actually declared by the enum type is checked by the layer that
//! owns the metadata snapshot.

use crate::grammar::{identifier, qualified};
use crate::lexical;
use crate::literals;
use crate::tokens::{tokenize, Token, TokenKind, TokenValue};

/// Match a whole enumeration literal: qualified enum type name, a
/// single quote, a value list, and a closing quote. The payload keeps
/// the type token and the value-list token.
pub fn enumeration(buffer: &[u8], index: usize) -> Option<Token> {
    let type_name = qualified::qualified_enum_type_name(buffer, index)?;
    let start = index;
    let mut index = type_name.next();

    if !buffer.get(index).copied().map(lexical::is_squote).unwrap_or(false) {
        return None;
    }
    index += 1;

    let value = enum_value(buffer, index)?;
    index = value.next();

    if !buffer.get(index).copied().map(lexical::is_squote).unwrap_or(false) {
        return None;
    }
    index += 1;

    Some(tokenize(
        start,
        index,
        TokenValue::Enum {
            name: Box::new(type_name),
            value: Box::new(value),
        },
        TokenKind::Enum,
    ))
}

/// Match one or more single values separated by commas. Separators are
/// consumed greedily: after each value, a following comma is consumed
/// before the next value is tried, and the list ends at the first
/// position where no comma follows or no further value matches.
pub fn enum_value(buffer: &[u8], index: usize) -> Option<Token> {
    let start = index;
    let mut index = index;
    let mut values = Vec::new();
    let mut current = Some(single_enum_value(buffer, index)?);

    while let Some(value) = current {
        index = value.next();
        values.push(value);
        if buffer.get(index).copied().map(lexical::is_comma).unwrap_or(false) {
            index += 1;
            current = single_enum_value(buffer, index);
        } else {
            break;
        }
    }

    Some(tokenize(start, index, TokenValue::List(values), TokenKind::EnumValue))
}

/// One value: a member name, or a 64-bit integer member value.
pub fn single_enum_value(buffer: &[u8], index: usize) -> Option<Token> {
    identifier::enumeration_member(buffer, index).or_else(|| enum_member_value(buffer, index))
}

/// A numeric member value: the integer sub-grammar re-tagged for its
/// enumeration role.
pub fn enum_member_value(buffer: &[u8], index: usize) -> Option<Token> {
    let mut token = literals::int64_value(buffer, index)?;
    token.kind = TokenKind::EnumMemberValue;
    Some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crate::utils::Span;

    #[test]
    fn test_enumeration_with_single_member_name() {
        let input = b"NS.Color'Red'";
        let token = enumeration(input, 0).unwrap();
        assert_eq!(token.kind, TokenKind::Enum);
        assert_eq!(token.span, Span::new(0, input.len()));
        assert_matches!(token.value, TokenValue::Enum { ref name, ref value } => {
            assert_matches!(name.value, TokenValue::Target("EnumTypeName"));
            assert_eq!(value.kind, TokenKind::EnumValue);
        });
    }

    #[test]
    fn test_enumeration_requires_quotes_and_qualified_type() {
        assert_eq!(enumeration(b"NS.Color(Red)", 0), None);
        assert_eq!(enumeration(b"NS.Color'Red", 0), None);
        assert_eq!(enumeration(b"Color'Red'", 0), None);
        assert_eq!(enumeration(b"NS.Color''", 0), None);
    }

    #[test]
    fn test_value_list_mixes_names_and_numbers() {
        let token = enum_value(b"Red,2,Blue'", 0).unwrap();
        assert_eq!(token.span, Span::new(0, 10));
        assert_matches!(token.value, TokenValue::List(ref values) => {
            assert_eq!(values.len(), 3);
            assert_eq!(values[0].kind, TokenKind::EnumerationMember);
            assert_eq!(values[1].kind, TokenKind::EnumMemberValue);
            assert_eq!(values[2].kind, TokenKind::EnumerationMember);
        });
    }

    #[test]
    fn test_value_list_consumes_trailing_separator() {
        // A comma not followed by a further value ends the list but is
        // still part of the consumed span.
        let token = enum_value(b"Red,'", 0).unwrap();
        assert_eq!(token.span, Span::new(0, 4));
        assert_matches!(token.value, TokenValue::List(ref values) if values.len() == 1);
    }

    #[test]
    fn test_numeric_values_are_retagged() {
        let token = enum_member_value(b"-3", 0).unwrap();
        assert_eq!(token.kind, TokenKind::EnumMemberValue);
        assert_matches!(token.value, TokenValue::Target("Edm.Int64"));

        // Out-of-range integers do not fall back to a shorter match.
        assert_eq!(enum_member_value(b"9223372036854775808", 0), None);
    }

    #[test]
    fn test_multi_value_enumeration_literal() {
        let input = b"Sales.Pattern'Solid,Striped,4'";
        let token = enumeration(input, 0).unwrap();
        assert_eq!(token.span, Span::new(0, input.len()));
    }
}
