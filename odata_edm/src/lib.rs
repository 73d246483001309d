// Internal modules
pub mod error;
pub mod lookup;
pub mod schema;
pub mod type_ref;

// Re-export key types for library consumers
pub use error::EdmError;
pub use lookup::{Member, MemberKind};
pub use schema::{
    Action, ActionImport, ComplexType, DataServices, Edmx, EntityContainer, EntityType, EnumMember,
    EnumType, Function, FunctionImport, Key, NavigationProperty, Property, PropertyRef, ReturnType,
    Schema, TypeDefinition,
};
pub use type_ref::{is_primitive_type_name, TypeRef, PRIMITIVE_TYPE_NAMES};
