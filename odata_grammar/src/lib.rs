// Internal modules
pub mod config;
pub mod grammar;
pub mod lexical;
pub mod literals;
#[macro_use]
pub mod logging;
pub mod tokens;
pub mod utils;

// Re-export key types for library consumers
pub use tokens::{tokenize, Token, TokenKind, TokenValue};
pub use utils::Span;

// Re-export the matcher entry points upstream grammar layers call
pub use grammar::{
    classifier::{
        action, action_import, complex_col_function, complex_col_function_import,
        complex_col_property, complex_function, complex_function_import, complex_property,
        entity_col_function, entity_col_function_import, entity_col_navigation_property,
        entity_function, entity_function_import, entity_navigation_property, function,
        navigation_property, primitive_col_function, primitive_col_function_import,
        primitive_col_property, primitive_function, primitive_function_import,
        primitive_key_property, primitive_non_key_property, primitive_property, stream_property,
    },
    enumeration::{enum_member_value, enum_value, enumeration, single_enum_value},
    identifier::{
        complex_type_name, entity_set_name, entity_type_name, enumeration_member,
        enumeration_type_name, namespace_part, odata_identifier, singleton_entity, term_name,
        type_definition_name,
    },
    namespace::namespace,
    qualified::{
        primitive_type_name, qualified_complex_type_name, qualified_entity_type_name,
        qualified_enum_type_name, qualified_type_definition_name, qualified_type_name,
        single_qualified_type_name,
    },
};
