//! Metadata-validated identifier classification
//!
//! Each classified form matches a bare identifier lexically and then
//! accepts it only when the metadata snapshot declares a member of the
//! right kind under that name whose declared type satisfies the form's
//! constraint. The forms differ only along three axes, the element
//! shape, the cardinality, and the key role, so each is a [`Rule`]
//! driven through one shared [`classify`] routine.

use odata_edm::{Edmx, Member, MemberKind, TypeRef};

use crate::grammar::identifier;
use crate::log_debug;
use crate::tokens::{Token, TokenKind};

// === CLASSIFICATION AXES ===

/// What the declared element type must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One of the built-in `Edm.*` primitive type names
    Primitive,
    /// Anything outside the primitive catalog
    Complex,
    /// A declared entity type in any schema of the snapshot
    Entity,
    /// The `Edm.Stream` primitive exactly
    Stream,
}

impl Shape {
    fn matches(&self, type_ref: &TypeRef<'_>, metadata: &Edmx) -> bool {
        match self {
            Shape::Primitive => type_ref.is_primitive(),
            Shape::Complex => !type_ref.is_primitive(),
            Shape::Entity => metadata.is_entity_type(type_ref.element),
            Shape::Stream => type_ref.element == "Edm.Stream",
        }
    }
}

/// Whether the declared type must be `Collection(...)`-wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Collection,
}

impl Cardinality {
    fn matches(&self, collection: bool) -> bool {
        match self {
            Cardinality::Single => !collection,
            Cardinality::Collection => collection,
        }
    }
}

/// Whether the member must, must not, or may be part of its owning
/// entity type's key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    Any,
    Key,
    NonKey,
}

impl KeyRole {
    fn matches(&self, member: &Member<'_>) -> bool {
        match self {
            KeyRole::Any => true,
            KeyRole::Key => member.is_key_property(),
            KeyRole::NonKey => !member.is_key_property(),
        }
    }
}

/// The type constraint a rule applies to the looked-up member.
///
/// A member without a declared type, or one whose declared type string
/// is malformed, never satisfies a constrained variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// Existence under the member kind is enough
    Unconstrained,
    /// Structural property constraint over the declared property type
    Property {
        shape: Shape,
        cardinality: Cardinality,
        role: KeyRole,
    },
    /// Navigation target constraint; only cardinality is checked
    Navigation { cardinality: Cardinality },
    /// Operation return type constraint
    Return {
        shape: Shape,
        cardinality: Cardinality,
    },
}

impl Constraint {
    fn eval(&self, member: &Member<'_>, metadata: &Edmx) -> bool {
        match self {
            Constraint::Unconstrained => true,
            Constraint::Property {
                shape,
                cardinality,
                role,
            } => self
                .type_ref(member)
                .map(|r| {
                    cardinality.matches(r.collection)
                        && shape.matches(&r, metadata)
                        && role.matches(member)
                })
                .unwrap_or(false),
            Constraint::Navigation { cardinality } => self
                .type_ref(member)
                .map(|r| cardinality.matches(r.collection))
                .unwrap_or(false),
            Constraint::Return { shape, cardinality } => self
                .type_ref(member)
                .map(|r| cardinality.matches(r.collection) && shape.matches(&r, metadata))
                .unwrap_or(false),
        }
    }

    fn type_ref<'a>(&self, member: &Member<'a>) -> Option<TypeRef<'a>> {
        member.declared_type().and_then(TypeRef::parse)
    }
}

/// One classified identifier form: the token kind it produces, the
/// member kind it looks up, and the constraint the member must
/// satisfy.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub kind: TokenKind,
    pub member: MemberKind,
    pub constraint: Constraint,
}

/// Match a bare identifier at `index` and accept it only if the
/// snapshot declares a satisfying member under that name.
pub fn classify(buffer: &[u8], index: usize, metadata: &Edmx, rule: &Rule) -> Option<Token> {
    let token = identifier::odata_identifier(buffer, index, rule.kind)?;
    let name = token.value.as_name()?;

    let declared = metadata
        .find_member_where(rule.member, name, |member, _| {
            rule.constraint.eval(member, metadata)
        })
        .is_some();

    if declared {
        Some(token)
    } else {
        let preferences = crate::config::matcher_preferences();
        if preferences.log_lookup_misses {
            if preferences.include_raw_in_logs {
                log_debug!(
                    "identifier not declared under the requested classification",
                    "name" => name,
                    "kind" => format!("{:?}", rule.kind)
                );
            } else {
                log_debug!(
                    "identifier not declared under the requested classification",
                    "kind" => format!("{:?}", rule.kind)
                );
            }
        }
        None
    }
}

// === RULE TABLE ===

mod rules {
    use super::{Cardinality, Constraint, KeyRole, Rule, Shape};
    use crate::tokens::TokenKind;
    use odata_edm::MemberKind;

    const fn property(kind: TokenKind, shape: Shape, cardinality: Cardinality, role: KeyRole) -> Rule {
        Rule {
            kind,
            member: MemberKind::Property,
            constraint: Constraint::Property {
                shape,
                cardinality,
                role,
            },
        }
    }

    const fn returning(kind: TokenKind, member: MemberKind, shape: Shape, cardinality: Cardinality) -> Rule {
        Rule {
            kind,
            member,
            constraint: Constraint::Return { shape, cardinality },
        }
    }

    pub const PRIMITIVE_PROPERTY: Rule = property(
        TokenKind::PrimitiveProperty,
        Shape::Primitive,
        Cardinality::Single,
        KeyRole::Any,
    );
    pub const PRIMITIVE_KEY_PROPERTY: Rule = property(
        TokenKind::PrimitiveKeyProperty,
        Shape::Primitive,
        Cardinality::Single,
        KeyRole::Key,
    );
    pub const PRIMITIVE_NON_KEY_PROPERTY: Rule = property(
        TokenKind::PrimitiveNonKeyProperty,
        Shape::Primitive,
        Cardinality::Single,
        KeyRole::NonKey,
    );
    pub const PRIMITIVE_COL_PROPERTY: Rule = property(
        TokenKind::PrimitiveCollectionProperty,
        Shape::Primitive,
        Cardinality::Collection,
        KeyRole::Any,
    );
    pub const COMPLEX_PROPERTY: Rule = property(
        TokenKind::ComplexProperty,
        Shape::Complex,
        Cardinality::Single,
        KeyRole::Any,
    );
    // Tests a PRIMITIVE element, exactly as the complex-collection
    // form has always behaved; only the produced kind differs from
    // PRIMITIVE_COL_PROPERTY. See the pinning test below before
    // changing the shape.
    pub const COMPLEX_COL_PROPERTY: Rule = property(
        TokenKind::ComplexCollectionProperty,
        Shape::Primitive,
        Cardinality::Collection,
        KeyRole::Any,
    );
    pub const STREAM_PROPERTY: Rule = property(
        TokenKind::StreamProperty,
        Shape::Stream,
        Cardinality::Single,
        KeyRole::Any,
    );

    pub const NAVIGATION_PROPERTY: Rule = Rule {
        kind: TokenKind::NavigationProperty,
        member: MemberKind::NavigationProperty,
        constraint: Constraint::Navigation {
            cardinality: Cardinality::Single,
        },
    };
    pub const ENTITY_NAVIGATION_PROPERTY: Rule = Rule {
        kind: TokenKind::EntityNavigationProperty,
        member: MemberKind::NavigationProperty,
        constraint: Constraint::Navigation {
            cardinality: Cardinality::Single,
        },
    };
    pub const ENTITY_COL_NAVIGATION_PROPERTY: Rule = Rule {
        kind: TokenKind::EntityCollectionNavigationProperty,
        member: MemberKind::NavigationProperty,
        constraint: Constraint::Navigation {
            cardinality: Cardinality::Collection,
        },
    };

    pub const ACTION: Rule = Rule {
        kind: TokenKind::Action,
        member: MemberKind::Action,
        constraint: Constraint::Unconstrained,
    };
    pub const ACTION_IMPORT: Rule = Rule {
        kind: TokenKind::ActionImport,
        member: MemberKind::ActionImport,
        constraint: Constraint::Unconstrained,
    };

    pub const FUNCTION: Rule = Rule {
        kind: TokenKind::Function,
        member: MemberKind::Function,
        constraint: Constraint::Unconstrained,
    };
    pub const ENTITY_FUNCTION: Rule = returning(
        TokenKind::EntityFunction,
        MemberKind::Function,
        Shape::Entity,
        Cardinality::Single,
    );
    pub const ENTITY_COL_FUNCTION: Rule = returning(
        TokenKind::EntityCollectionFunction,
        MemberKind::Function,
        Shape::Entity,
        Cardinality::Collection,
    );
    pub const COMPLEX_FUNCTION: Rule = returning(
        TokenKind::ComplexFunction,
        MemberKind::Function,
        Shape::Complex,
        Cardinality::Single,
    );
    pub const COMPLEX_COL_FUNCTION: Rule = returning(
        TokenKind::ComplexCollectionFunction,
        MemberKind::Function,
        Shape::Complex,
        Cardinality::Collection,
    );
    pub const PRIMITIVE_FUNCTION: Rule = returning(
        TokenKind::PrimitiveFunction,
        MemberKind::Function,
        Shape::Primitive,
        Cardinality::Single,
    );
    pub const PRIMITIVE_COL_FUNCTION: Rule = returning(
        TokenKind::PrimitiveCollectionFunction,
        MemberKind::Function,
        Shape::Primitive,
        Cardinality::Collection,
    );

    pub const ENTITY_FUNCTION_IMPORT: Rule = returning(
        TokenKind::EntityFunctionImport,
        MemberKind::FunctionImport,
        Shape::Entity,
        Cardinality::Single,
    );
    pub const ENTITY_COL_FUNCTION_IMPORT: Rule = returning(
        TokenKind::EntityCollectionFunctionImport,
        MemberKind::FunctionImport,
        Shape::Entity,
        Cardinality::Collection,
    );
    pub const COMPLEX_FUNCTION_IMPORT: Rule = returning(
        TokenKind::ComplexFunctionImport,
        MemberKind::FunctionImport,
        Shape::Complex,
        Cardinality::Single,
    );
    pub const COMPLEX_COL_FUNCTION_IMPORT: Rule = returning(
        TokenKind::ComplexCollectionFunctionImport,
        MemberKind::FunctionImport,
        Shape::Complex,
        Cardinality::Collection,
    );
    pub const PRIMITIVE_FUNCTION_IMPORT: Rule = returning(
        TokenKind::PrimitiveFunctionImport,
        MemberKind::FunctionImport,
        Shape::Primitive,
        Cardinality::Single,
    );
    pub const PRIMITIVE_COL_FUNCTION_IMPORT: Rule = returning(
        TokenKind::PrimitiveCollectionFunctionImport,
        MemberKind::FunctionImport,
        Shape::Primitive,
        Cardinality::Collection,
    );
}

// === PROPERTY FORMS ===

pub fn primitive_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_PROPERTY)
}

pub fn primitive_key_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_KEY_PROPERTY)
}

pub fn primitive_non_key_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_NON_KEY_PROPERTY)
}

pub fn primitive_col_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_COL_PROPERTY)
}

pub fn complex_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::COMPLEX_PROPERTY)
}

pub fn complex_col_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::COMPLEX_COL_PROPERTY)
}

pub fn stream_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::STREAM_PROPERTY)
}

// === NAVIGATION FORMS ===

/// The role-agnostic navigation form; like the entity-specific form
/// it accepts only single-valued targets.
pub fn navigation_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::NAVIGATION_PROPERTY)
}

pub fn entity_navigation_property(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ENTITY_NAVIGATION_PROPERTY)
}

pub fn entity_col_navigation_property(
    buffer: &[u8],
    index: usize,
    metadata: &Edmx,
) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ENTITY_COL_NAVIGATION_PROPERTY)
}

// === OPERATION FORMS ===

pub fn action(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ACTION)
}

pub fn action_import(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ACTION_IMPORT)
}

/// Function existence under the name; the return type is not
/// constrained here, only by the shaped variants below.
pub fn function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::FUNCTION)
}

pub fn entity_function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ENTITY_FUNCTION)
}

pub fn entity_col_function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ENTITY_COL_FUNCTION)
}

pub fn complex_function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::COMPLEX_FUNCTION)
}

pub fn complex_col_function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::COMPLEX_COL_FUNCTION)
}

pub fn primitive_function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_FUNCTION)
}

pub fn primitive_col_function(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_COL_FUNCTION)
}

pub fn entity_function_import(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ENTITY_FUNCTION_IMPORT)
}

pub fn entity_col_function_import(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::ENTITY_COL_FUNCTION_IMPORT)
}

pub fn complex_function_import(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::COMPLEX_FUNCTION_IMPORT)
}

pub fn complex_col_function_import(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::COMPLEX_COL_FUNCTION_IMPORT)
}

pub fn primitive_function_import(buffer: &[u8], index: usize, metadata: &Edmx) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_FUNCTION_IMPORT)
}

pub fn primitive_col_function_import(
    buffer: &[u8],
    index: usize,
    metadata: &Edmx,
) -> Option<Token> {
    classify(buffer, index, metadata, &rules::PRIMITIVE_COL_FUNCTION_IMPORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> Edmx {
        Edmx::from_json_str(
            r#"{
                "dataServices": {
                    "schemas": [
                        {
                            "namespace": "NS",
                            "entityTypes": [{
                                "name": "Customer",
                                "key": { "propertyRefs": [{ "name": "Id" }] },
                                "properties": [
                                    { "name": "Id", "type": "Edm.Int32" },
                                    { "name": "Name", "type": "Edm.String" },
                                    { "name": "Tags", "type": "Collection(Edm.String)" },
                                    { "name": "Home", "type": "NS.Address" },
                                    { "name": "Offices", "type": "Collection(NS.Address)" },
                                    { "name": "Photo", "type": "Edm.Stream" }
                                ],
                                "navigationProperties": [
                                    { "name": "BestFriend", "type": "NS.Customer" },
                                    { "name": "Orders", "type": "Collection(Other.Order)" }
                                ]
                            }],
                            "complexTypes": [{
                                "name": "Address",
                                "properties": [{ "name": "City", "type": "Edm.String" }]
                            }],
                            "actions": [{ "name": "Reset" }],
                            "functions": [
                                { "name": "Me", "returnType": { "type": "NS.Customer" } },
                                { "name": "TopCustomers", "returnType": { "type": "Collection(NS.Customer)" } },
                                { "name": "HomeOf", "returnType": { "type": "NS.Address" } },
                                { "name": "OfficesOf", "returnType": { "type": "Collection(NS.Address)" } },
                                { "name": "CountOf", "returnType": { "type": "Edm.Int32" } },
                                { "name": "NamesOf", "returnType": { "type": "Collection(Edm.String)" } }
                            ],
                            "entityContainer": {
                                "name": "Service",
                                "actionImports": [{ "name": "ResetAll" }],
                                "functionImports": [
                                    { "name": "Current", "returnType": { "type": "NS.Customer" } },
                                    { "name": "Best", "returnType": { "type": "Collection(NS.Customer)" } },
                                    { "name": "Hq", "returnType": { "type": "NS.Address" } },
                                    { "name": "Sites", "returnType": { "type": "Collection(NS.Address)" } },
                                    { "name": "Total", "returnType": { "type": "Edm.Int64" } },
                                    { "name": "AllNames", "returnType": { "type": "Collection(Edm.String)" } }
                                ]
                            }
                        },
                        {
                            "namespace": "Other",
                            "entityTypes": [{ "name": "Order", "properties": [] }]
                        }
                    ]
                }
            }"#,
        )
        .expect("valid fixture")
    }

    #[test]
    fn test_primitive_property_forms() {
        let edm = metadata();
        assert!(primitive_property(b"Id", 0, &edm).is_some());
        assert!(primitive_property(b"Name", 0, &edm).is_some());
        // Wrong shape or cardinality.
        assert!(primitive_property(b"Home", 0, &edm).is_none());
        assert!(primitive_property(b"Tags", 0, &edm).is_none());
        // Undeclared name.
        assert!(primitive_property(b"Nope", 0, &edm).is_none());
    }

    #[test]
    fn test_key_role_discriminates() {
        let edm = metadata();
        assert!(primitive_key_property(b"Id", 0, &edm).is_some());
        assert!(primitive_key_property(b"Name", 0, &edm).is_none());
        assert!(primitive_non_key_property(b"Name", 0, &edm).is_some());
        assert!(primitive_non_key_property(b"Id", 0, &edm).is_none());
        // A property declared on a complex type has no key role.
        assert!(primitive_non_key_property(b"City", 0, &edm).is_some());
        assert!(primitive_key_property(b"City", 0, &edm).is_none());
    }

    #[test]
    fn test_collection_property_forms() {
        let edm = metadata();
        let token = primitive_col_property(b"Tags", 0, &edm).unwrap();
        assert_eq!(token.kind, TokenKind::PrimitiveCollectionProperty);
        assert!(primitive_col_property(b"Name", 0, &edm).is_none());
    }

    #[test]
    fn test_complex_property_requires_non_primitive_single() {
        let edm = metadata();
        let token = complex_property(b"Home", 0, &edm).unwrap();
        assert_eq!(token.kind, TokenKind::ComplexProperty);
        assert!(complex_property(b"Name", 0, &edm).is_none());
        assert!(complex_property(b"Offices", 0, &edm).is_none());
    }

    #[test]
    fn test_complex_col_property_keeps_primitive_element_acceptance() {
        // Long-standing behavior: the complex-collection property form
        // accepts collections of PRIMITIVE elements and rejects
        // collections of complex elements, mirroring the primitive
        // form apart from the produced kind.
        let edm = metadata();
        let token = complex_col_property(b"Tags", 0, &edm).unwrap();
        assert_eq!(token.kind, TokenKind::ComplexCollectionProperty);
        assert!(complex_col_property(b"Offices", 0, &edm).is_none());
    }

    #[test]
    fn test_stream_property_matches_edm_stream_exactly() {
        let edm = metadata();
        assert!(stream_property(b"Photo", 0, &edm).is_some());
        assert!(stream_property(b"Name", 0, &edm).is_none());
        assert!(stream_property(b"Tags", 0, &edm).is_none());
    }

    #[test]
    fn test_navigation_cardinality() {
        let edm = metadata();
        assert!(entity_navigation_property(b"BestFriend", 0, &edm).is_some());
        assert!(entity_navigation_property(b"Orders", 0, &edm).is_none());
        assert!(entity_col_navigation_property(b"Orders", 0, &edm).is_some());
        assert!(entity_col_navigation_property(b"BestFriend", 0, &edm).is_none());

        // The role-agnostic form is single-valued only and carries its
        // own kind.
        let token = navigation_property(b"BestFriend", 0, &edm).unwrap();
        assert_eq!(token.kind, TokenKind::NavigationProperty);
        assert!(navigation_property(b"Orders", 0, &edm).is_none());
    }

    #[test]
    fn test_actions_and_imports_are_existence_checks() {
        let edm = metadata();
        assert!(action(b"Reset", 0, &edm).is_some());
        assert!(action(b"ResetAll", 0, &edm).is_none());
        assert!(action_import(b"ResetAll", 0, &edm).is_some());
        assert!(action_import(b"Reset", 0, &edm).is_none());
    }

    #[test]
    fn test_function_forms_follow_return_type() {
        let edm = metadata();
        assert!(entity_function(b"Me", 0, &edm).is_some());
        assert!(entity_function(b"TopCustomers", 0, &edm).is_none());
        assert!(entity_col_function(b"TopCustomers", 0, &edm).is_some());
        // A collection of a complex type is not an entity collection.
        assert!(entity_col_function(b"OfficesOf", 0, &edm).is_none());
        assert!(complex_function(b"HomeOf", 0, &edm).is_some());
        assert!(complex_function(b"CountOf", 0, &edm).is_none());
        assert!(complex_col_function(b"OfficesOf", 0, &edm).is_some());
        // Correctly rejects primitive elements, unlike the property
        // counterpart.
        assert!(complex_col_function(b"NamesOf", 0, &edm).is_none());
        assert!(primitive_function(b"CountOf", 0, &edm).is_some());
        assert!(primitive_col_function(b"NamesOf", 0, &edm).is_some());
    }

    #[test]
    fn test_entity_function_resolves_types_across_schemas() {
        let edm = metadata();
        // NS.Customer is declared in schema NS; the qualified return
        // type resolves even though the function lives there too.
        assert!(entity_function(b"Me", 0, &edm).is_some());
        // Complex return types are not entity types anywhere.
        assert!(entity_function(b"HomeOf", 0, &edm).is_none());
    }

    #[test]
    fn test_function_import_forms() {
        let edm = metadata();
        assert!(entity_function_import(b"Current", 0, &edm).is_some());
        assert!(entity_col_function_import(b"Best", 0, &edm).is_some());
        assert!(complex_function_import(b"Hq", 0, &edm).is_some());
        assert!(complex_col_function_import(b"Sites", 0, &edm).is_some());
        assert!(complex_col_function_import(b"AllNames", 0, &edm).is_none());
        assert!(primitive_function_import(b"Total", 0, &edm).is_some());
        assert!(primitive_col_function_import(b"AllNames", 0, &edm).is_some());
        // Function imports never match the function forms.
        assert!(entity_function(b"Current", 0, &edm).is_none());
    }

    #[test]
    fn test_function_form_is_an_existence_check() {
        let edm = metadata();
        // Every declared function matches under the plain kind, whatever
        // its return type.
        let token = function(b"Me", 0, &edm).unwrap();
        assert_eq!(token.kind, TokenKind::Function);
        let token = function(b"NamesOf", 0, &edm).unwrap();
        assert_eq!(token.kind, TokenKind::Function);
        assert!(function(b"Unknown", 0, &edm).is_none());
        // Function imports are a separate member kind.
        assert!(function(b"Current", 0, &edm).is_none());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let edm = metadata();
        let first = primitive_key_property(b"Id", 0, &edm);
        let second = primitive_key_property(b"Id", 0, &edm);
        assert_eq!(first, second);
    }
}
