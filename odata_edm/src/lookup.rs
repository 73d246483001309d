//! Point lookups over a metadata snapshot
//!
//! The grammar layer matches an identifier lexically, then asks the
//! snapshot whether a schema member of a given kind carries that name
//! and satisfies a classification predicate. Lookups scan all schemas
//! and return the first match; they never mutate the snapshot.

use crate::schema::{
    Action, ActionImport, ComplexType, Edmx, EntityType, EnumType, Function, FunctionImport,
    NavigationProperty, Property, TypeDefinition,
};

/// The kinds of schema member a lookup can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Property,
    NavigationProperty,
    Action,
    ActionImport,
    Function,
    FunctionImport,
    EntityType,
    ComplexType,
    EnumType,
    TypeDefinition,
}

/// A borrowed view of one schema member.
///
/// Properties carry their owning entity type so key-role predicates
/// can test the owner's key definition; properties declared on complex
/// types have no owner and are never key properties.
#[derive(Debug, Clone, Copy)]
pub enum Member<'a> {
    Property {
        property: &'a Property,
        owner: Option<&'a EntityType>,
    },
    NavigationProperty(&'a NavigationProperty),
    Action(&'a Action),
    ActionImport(&'a ActionImport),
    Function(&'a Function),
    FunctionImport(&'a FunctionImport),
    EntityType(&'a EntityType),
    ComplexType(&'a ComplexType),
    EnumType(&'a EnumType),
    TypeDefinition(&'a TypeDefinition),
}

impl<'a> Member<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Member::Property { property, .. } => &property.name,
            Member::NavigationProperty(p) => &p.name,
            Member::Action(a) => &a.name,
            Member::ActionImport(a) => &a.name,
            Member::Function(f) => &f.name,
            Member::FunctionImport(f) => &f.name,
            Member::EntityType(t) => &t.name,
            Member::ComplexType(t) => &t.name,
            Member::EnumType(t) => &t.name,
            Member::TypeDefinition(t) => &t.name,
        }
    }

    /// The declared type string this member resolves to, when it has
    /// one: the property type, or the operation return type.
    pub fn declared_type(&self) -> Option<&'a str> {
        match self {
            Member::Property { property, .. } => Some(&property.type_name),
            Member::NavigationProperty(p) => Some(&p.type_name),
            Member::Function(f) => Some(&f.return_type.type_name),
            Member::FunctionImport(f) => Some(&f.return_type.type_name),
            Member::Action(a) => a.return_type.as_ref().map(|r| r.type_name.as_str()),
            _ => None,
        }
    }

    /// Whether this member is a property listed in its owner's key.
    pub fn is_key_property(&self) -> bool {
        match self {
            Member::Property {
                property,
                owner: Some(owner),
            } => owner.is_key_property(&property.name),
            _ => false,
        }
    }
}

impl Edmx {
    /// First member of `kind` across all schemas named `name`.
    pub fn find_member(&self, kind: MemberKind, name: &str) -> Option<Member<'_>> {
        self.find_member_where(kind, name, |_, _| true)
    }

    /// First member of `kind` across all schemas whose name equals
    /// `name` and for which `predicate(member, name)` holds.
    pub fn find_member_where<F>(&self, kind: MemberKind, name: &str, predicate: F) -> Option<Member<'_>>
    where
        F: Fn(&Member<'_>, &str) -> bool,
    {
        self.members_of(kind)
            .find(|m| m.name() == name && predicate(m, name))
    }

    /// Whether `name` names an entity type in any schema. A dotted
    /// name must match namespace plus local name; a bare name matches
    /// in any schema.
    pub fn is_entity_type(&self, name: &str) -> bool {
        self.data_services.schemas.iter().any(|schema| {
            schema
                .entity_types
                .iter()
                .any(|t| qualified_name_matches(&schema.namespace, &t.name, name))
        })
    }

    /// Whether `name` names a complex type in any schema.
    pub fn is_complex_type(&self, name: &str) -> bool {
        self.data_services.schemas.iter().any(|schema| {
            schema
                .complex_types
                .iter()
                .any(|t| qualified_name_matches(&schema.namespace, &t.name, name))
        })
    }

    fn members_of(&self, kind: MemberKind) -> Box<dyn Iterator<Item = Member<'_>> + '_> {
        let schemas = self.data_services.schemas.iter();
        match kind {
            MemberKind::Property => Box::new(schemas.flat_map(|s| {
                let entity_props = s.entity_types.iter().flat_map(|t| {
                    t.properties.iter().map(move |p| Member::Property {
                        property: p,
                        owner: Some(t),
                    })
                });
                let complex_props = s.complex_types.iter().flat_map(|t| {
                    t.properties.iter().map(|p| Member::Property {
                        property: p,
                        owner: None,
                    })
                });
                entity_props.chain(complex_props)
            })),
            MemberKind::NavigationProperty => Box::new(schemas.flat_map(|s| {
                s.entity_types
                    .iter()
                    .flat_map(|t| t.navigation_properties.iter())
                    .chain(
                        s.complex_types
                            .iter()
                            .flat_map(|t| t.navigation_properties.iter()),
                    )
                    .map(Member::NavigationProperty)
            })),
            MemberKind::Action => Box::new(schemas.flat_map(|s| s.actions.iter().map(Member::Action))),
            MemberKind::ActionImport => Box::new(schemas.flat_map(|s| {
                s.entity_container
                    .iter()
                    .flat_map(|c| c.action_imports.iter())
                    .map(Member::ActionImport)
            })),
            MemberKind::Function => {
                Box::new(schemas.flat_map(|s| s.functions.iter().map(Member::Function)))
            }
            MemberKind::FunctionImport => Box::new(schemas.flat_map(|s| {
                s.entity_container
                    .iter()
                    .flat_map(|c| c.function_imports.iter())
                    .map(Member::FunctionImport)
            })),
            MemberKind::EntityType => {
                Box::new(schemas.flat_map(|s| s.entity_types.iter().map(Member::EntityType)))
            }
            MemberKind::ComplexType => {
                Box::new(schemas.flat_map(|s| s.complex_types.iter().map(Member::ComplexType)))
            }
            MemberKind::EnumType => {
                Box::new(schemas.flat_map(|s| s.enum_types.iter().map(Member::EnumType)))
            }
            MemberKind::TypeDefinition => Box::new(
                schemas.flat_map(|s| s.type_definitions.iter().map(Member::TypeDefinition)),
            ),
        }
    }
}

/// Matches `candidate` against a member's local name, either bare or
/// qualified with the declaring schema's namespace.
fn qualified_name_matches(namespace: &str, local: &str, candidate: &str) -> bool {
    if candidate == local {
        return true;
    }
    candidate
        .strip_prefix(namespace)
        .and_then(|rest| rest.strip_prefix('.'))
        .map(|rest| rest == local)
        .unwrap_or(false)
}
