//! Qualified type names and the primitive catalog
//!
//! A qualified name is a resolved namespace, a dot, and a trailing
//! identifier validated for the requested role. On top of that sit the
//! ordered type-name alternation, the quote-framed `Collection('...')`
//! wrapper, and the closed `Edm.*` primitive catalog.

use odata_edm::Edmx;

use crate::config::constants::compile_time::grammar::{COLLECTION_LITERAL, EDM_PREFIX};
use crate::grammar::{identifier, namespace};
use crate::lexical;
use crate::tokens::{tokenize, Token, TokenKind, TokenValue};
use crate::utils::Span;

/// The primitive type-name catalog, without the `Edm.` prefix.
///
/// Matching tries the literals in order and takes the first hit, so
/// `DateTimeOffset` must precede `Date`; otherwise a name would be
/// consumed only up to its shorter sibling.
const PRIMITIVE_TYPE_SUFFIXES: [&str; 31] = [
    "Binary",
    "Boolean",
    "Byte",
    "DateTimeOffset",
    "Date",
    "Decimal",
    "Double",
    "Duration",
    "Guid",
    "Int16",
    "Int32",
    "Int64",
    "SByte",
    "Single",
    "Stream",
    "String",
    "TimeOfDay",
    "GeographyCollection",
    "GeographyLineString",
    "GeographyMultiLineString",
    "GeographyMultiPoint",
    "GeographyMultiPolygon",
    "GeographyPoint",
    "GeographyPolygon",
    "GeometryCollection",
    "GeometryLineString",
    "GeometryMultiLineString",
    "GeometryMultiPoint",
    "GeometryMultiPolygon",
    "GeometryPoint",
    "GeometryPolygon",
];

fn qualified_name<F>(
    buffer: &[u8],
    index: usize,
    target: &'static str,
    trailing: F,
) -> Option<Token>
where
    F: Fn(&[u8], usize) -> Option<Token>,
{
    let boundary = namespace::namespace(buffer, index)?;
    if boundary == index || !buffer.get(boundary).copied().map(lexical::is_dot).unwrap_or(false) {
        return None;
    }

    let name = trailing(buffer, boundary + 1)?;
    if name.next() == boundary + 1 {
        return None;
    }

    Some(tokenize(index, name.next(), TokenValue::Target(target), TokenKind::Identifier))
}

/// Match `namespace.entityTypeName`; the trailing name must be a
/// declared entity type.
pub fn qualified_entity_type_name(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    qualified_name(buffer, index, "EntityTypeName", |buffer, index| {
        identifier::entity_type_name(buffer, index, metadata)
    })
}

pub fn qualified_complex_type_name(buffer: &[u8], index: usize) -> Option<Token> {
    qualified_name(buffer, index, "ComplexTypeName", identifier::complex_type_name)
}

pub fn qualified_type_definition_name(buffer: &[u8], index: usize) -> Option<Token> {
    qualified_name(
        buffer,
        index,
        "TypeDefinitionName",
        identifier::type_definition_name,
    )
}

pub fn qualified_enum_type_name(buffer: &[u8], index: usize) -> Option<Token> {
    qualified_name(
        buffer,
        index,
        "EnumTypeName",
        identifier::enumeration_type_name,
    )
}

/// Ordered alternation over the unwrapped type-name forms: entity,
/// complex, type definition, enumeration, then primitive.
pub fn single_qualified_type_name(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    qualified_entity_type_name(buffer, index, metadata)
        .or_else(|| qualified_complex_type_name(buffer, index))
        .or_else(|| qualified_type_definition_name(buffer, index))
        .or_else(|| qualified_enum_type_name(buffer, index))
        .or_else(|| primitive_type_name(buffer, index))
}

/// Match a type name, either unwrapped or framed as
/// `Collection('<single qualified type name>')`.
///
/// The wrapper re-tags the inner token as [`TokenKind::Collection`]
/// and stretches its span over the whole wrapped form. Nesting is not
/// possible: the inner alternation has no `Collection` arm.
pub fn qualified_type_name(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    if !lexical::literal_at(buffer, index, COLLECTION_LITERAL) {
        return single_qualified_type_name(buffer, index, metadata);
    }

    let start = index;
    let mut index = index + COLLECTION_LITERAL.len();
    if !buffer.get(index).copied().map(lexical::is_squote).unwrap_or(false) {
        return None;
    }
    index += 1;

    let mut token = single_qualified_type_name(buffer, index, metadata)?;
    index = token.next();
    if !buffer.get(index).copied().map(lexical::is_squote).unwrap_or(false) {
        return None;
    }
    index += 1;

    token.kind = TokenKind::Collection;
    token.span = Span::new(start, index);
    Some(token)
}

/// Match a name from the closed primitive catalog: the `Edm.` prefix
/// followed by one of the 31 built-in type names.
pub fn primitive_type_name(buffer: &[u8], index: usize) -> Option<Token> {
    if !lexical::literal_at(buffer, index, EDM_PREFIX) {
        return None;
    }
    let start = index;
    let index = index + EDM_PREFIX.len();

    let suffix = PRIMITIVE_TYPE_SUFFIXES
        .iter()
        .find(|suffix| lexical::literal_at(buffer, index, suffix))?;

    Some(tokenize(
        start,
        index + suffix.len(),
        TokenValue::Target("PrimitiveTypeName"),
        TokenKind::Identifier,
    ))
}
