//! Positioned tokens with kind tags and structured payloads
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::Span;

/// Closed enumeration of every token kind the matchers can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // === TYPE NAMES AND LITERAL STRUCTURE ===
    /// Qualified type name or primitive type name; the payload names
    /// the target sub-kind
    Identifier,
    /// `Collection('...')` wrapper around a single qualified type
    Collection,
    /// Primitive literal (the integer sub-grammar)
    Literal,

    // === BARE IDENTIFIER ROLES ===
    ODataIdentifier,
    NamespacePart,
    EntitySetName,
    SingletonEntity,
    EntityTypeName,
    ComplexTypeName,
    TypeDefinitionName,
    EnumerationTypeName,
    EnumerationMember,
    TermName,

    // === ENUMERATION LITERALS ===
    /// Whole enumeration literal: qualified type plus quoted values
    Enum,
    /// Comma-separated value list inside an enumeration literal
    EnumValue,
    /// Numeric member value inside an enumeration literal
    EnumMemberValue,

    // === METADATA-CLASSIFIED PROPERTIES ===
    PrimitiveProperty,
    PrimitiveKeyProperty,
    PrimitiveNonKeyProperty,
    PrimitiveCollectionProperty,
    ComplexProperty,
    ComplexCollectionProperty,
    StreamProperty,

    // === METADATA-CLASSIFIED NAVIGATION PROPERTIES ===
    NavigationProperty,
    EntityNavigationProperty,
    EntityCollectionNavigationProperty,

    // === METADATA-CLASSIFIED OPERATIONS ===
    Action,
    ActionImport,
    Function,
    EntityFunction,
    EntityCollectionFunction,
    ComplexFunction,
    ComplexCollectionFunction,
    PrimitiveFunction,
    PrimitiveCollectionFunction,
    EntityFunctionImport,
    EntityCollectionFunctionImport,
    ComplexFunctionImport,
    ComplexCollectionFunctionImport,
    PrimitiveFunctionImport,
    PrimitiveCollectionFunctionImport,
}

impl TokenKind {
    /// Check if this kind is a metadata-classified property
    pub fn is_property(&self) -> bool {
        matches!(
            self,
            Self::PrimitiveProperty
                | Self::PrimitiveKeyProperty
                | Self::PrimitiveNonKeyProperty
                | Self::PrimitiveCollectionProperty
                | Self::ComplexProperty
                | Self::ComplexCollectionProperty
                | Self::StreamProperty
        )
    }

    /// Check if this kind is a metadata-classified navigation property
    pub fn is_navigation_property(&self) -> bool {
        matches!(
            self,
            Self::NavigationProperty
                | Self::EntityNavigationProperty
                | Self::EntityCollectionNavigationProperty
        )
    }

    /// Check if this kind is an operation or operation import
    pub fn is_operation(&self) -> bool {
        matches!(
            self,
            Self::Action
                | Self::ActionImport
                | Self::Function
                | Self::EntityFunction
                | Self::EntityCollectionFunction
                | Self::ComplexFunction
                | Self::ComplexCollectionFunction
                | Self::PrimitiveFunction
                | Self::PrimitiveCollectionFunction
                | Self::EntityFunctionImport
                | Self::EntityCollectionFunctionImport
                | Self::ComplexFunctionImport
                | Self::ComplexCollectionFunctionImport
                | Self::PrimitiveFunctionImport
                | Self::PrimitiveCollectionFunctionImport
        )
    }

    /// Check if this kind belongs to an enumeration literal
    pub fn is_enum_literal(&self) -> bool {
        matches!(
            self,
            Self::Enum | Self::EnumValue | Self::EnumMemberValue | Self::EnumerationMember
        )
    }
}

/// Kind-dependent structured payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenValue {
    /// The matched identifier text
    Name(String),
    /// Fixed tag naming the matched target (qualified-name sub-kind,
    /// or the literal's primitive type)
    Target(&'static str),
    /// Enumeration literal: qualified type token plus value-list token
    Enum { name: Box<Token>, value: Box<Token> },
    /// Ordered sub-tokens (enumeration value list)
    List(Vec<Token>),
}

impl TokenValue {
    /// Get the matched name if this payload carries one
    pub fn as_name(&self) -> Option<&str> {
        match self {
            TokenValue::Name(name) => Some(name),
            _ => None,
        }
    }

    /// Get the target tag if this payload carries one
    pub fn as_target(&self) -> Option<&'static str> {
        match self {
            TokenValue::Target(target) => Some(target),
            _ => None,
        }
    }
}

/// A successfully matched token.
///
/// `span.end` is exclusive and equals the next unconsumed position.
/// The raw text is not stored; it is materialized from the buffer on
/// demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub value: TokenValue,
}

impl Token {
    /// Materialize the exact matched substring from the input buffer.
    pub fn raw(&self, buffer: &[u8]) -> String {
        crate::lexical::stringify(buffer, self.span.start, self.span.end)
    }

    /// The next unconsumed position after this token.
    pub fn next(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind, self.span)
    }
}

/// Build a token over `[start, end)`. Construction performs no
/// validation; matchers are responsible for only constructing tokens
/// whose span covers exactly the consumed input.
pub fn tokenize(start: usize, end: usize, value: TokenValue, kind: TokenKind) -> Token {
    Token {
        kind,
        span: Span::new(start, end),
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_are_disjoint() {
        assert!(TokenKind::PrimitiveKeyProperty.is_property());
        assert!(!TokenKind::PrimitiveKeyProperty.is_operation());
        assert!(TokenKind::EntityCollectionFunctionImport.is_operation());
        assert!(!TokenKind::EntityCollectionFunctionImport.is_navigation_property());
        assert!(TokenKind::EnumMemberValue.is_enum_literal());
        assert!(!TokenKind::Identifier.is_property());
    }

    #[test]
    fn test_raw_materializes_from_buffer() {
        let buffer = b"NS.Widget";
        let token = tokenize(3, 9, TokenValue::Name("Widget".to_string()), TokenKind::ODataIdentifier);
        assert_eq!(token.raw(buffer), "Widget");
        assert_eq!(token.next(), 9);
    }

    #[test]
    fn test_payload_accessors() {
        let value = TokenValue::Name("Id".to_string());
        assert_eq!(value.as_name(), Some("Id"));
        assert_eq!(value.as_target(), None);

        let value = TokenValue::Target("EntityTypeName");
        assert_eq!(value.as_target(), Some("EntityTypeName"));
    }
}
