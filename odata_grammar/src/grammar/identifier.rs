//! Bare identifier matching and its named grammar roles

use odata_edm::{Edmx, MemberKind};

use crate::config::constants::compile_time::lexical::MAX_IDENTIFIER_LENGTH;
use crate::grammar::classifier::{self, Constraint, Rule};
use crate::lexical;
use crate::tokens::{tokenize, Token, TokenKind, TokenValue};

/// Match a bare identifier: one leading identifier character followed
/// by identifier characters, capped at [`MAX_IDENTIFIER_LENGTH`]
/// bytes. The returned token carries the matched text as its payload.
pub fn odata_identifier(buffer: &[u8], index: usize, kind: TokenKind) -> Option<Token> {
    let start = index;
    let mut index = index;

    if index < buffer.len() && lexical::is_identifier_leading_char(buffer[index]) {
        index += 1;
        while index < buffer.len()
            && index - start < MAX_IDENTIFIER_LENGTH
            && lexical::is_identifier_char(buffer[index])
        {
            index += 1;
        }
    }

    if index > start {
        let name = lexical::stringify(buffer, start, index);
        Some(tokenize(start, index, TokenValue::Name(name), kind))
    } else {
        None
    }
}

pub fn namespace_part(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::NamespacePart)
}

pub fn entity_set_name(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::EntitySetName)
}

pub fn singleton_entity(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::SingletonEntity)
}

pub fn complex_type_name(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::ComplexTypeName)
}

pub fn type_definition_name(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::TypeDefinitionName)
}

pub fn enumeration_type_name(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::EnumerationTypeName)
}

pub fn enumeration_member(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::EnumerationMember)
}

pub fn term_name(buffer: &[u8], index: usize) -> Option<Token> {
    odata_identifier(buffer, index, TokenKind::TermName)
}

/// Entity type names are the one single-identifier role validated
/// against metadata: the identifier must name a declared entity type.
pub fn entity_type_name(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    const ENTITY_TYPE_NAME: Rule = Rule {
        kind: TokenKind::EntityTypeName,
        member: MemberKind::EntityType,
        constraint: Constraint::Unconstrained,
    };
    classifier::classify(buffer, index, metadata, &ENTITY_TYPE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_matches_identifier_with_payload() {
        let token = odata_identifier(b"Widget.Name", 0, TokenKind::ODataIdentifier).unwrap();
        assert_eq!(token.span.start, 0);
        assert_eq!(token.span.end, 6);
        assert_matches!(token.value, TokenValue::Name(ref name) if name == "Widget");
    }

    #[test]
    fn test_rejects_leading_digit_and_empty_input() {
        assert_eq!(odata_identifier(b"9lives", 0, TokenKind::ODataIdentifier), None);
        assert_eq!(odata_identifier(b"", 0, TokenKind::ODataIdentifier), None);
        assert_eq!(odata_identifier(b".x", 0, TokenKind::ODataIdentifier), None);
    }

    #[test]
    fn test_underscore_leads_and_digits_continue() {
        let token = odata_identifier(b"_tag42,", 0, TokenKind::ODataIdentifier).unwrap();
        assert_eq!(token.span.end, 6);
    }

    #[test]
    fn test_identifier_is_capped_at_128_bytes() {
        let mut input = vec![b'a'; 129];
        input.push(b'!');
        let token = odata_identifier(&input, 0, TokenKind::ODataIdentifier).unwrap();
        assert_eq!(token.span.len(), 128);

        // Exactly 128 valid characters followed by a 129th valid
        // character: only the first 128 are consumed.
        let input = vec![b'a'; 129];
        let token = odata_identifier(&input, 0, TokenKind::ODataIdentifier).unwrap();
        assert_eq!(token.span.end, 128);
    }

    #[test]
    fn test_named_roles_tag_their_kind() {
        assert_eq!(namespace_part(b"NS", 0).unwrap().kind, TokenKind::NamespacePart);
        assert_eq!(entity_set_name(b"People", 0).unwrap().kind, TokenKind::EntitySetName);
        assert_eq!(singleton_entity(b"Me", 0).unwrap().kind, TokenKind::SingletonEntity);
        assert_eq!(term_name(b"Core", 0).unwrap().kind, TokenKind::TermName);
        assert_eq!(
            enumeration_member(b"Red", 0).unwrap().kind,
            TokenKind::EnumerationMember
        );
    }
}
