//! EDM metadata snapshot object model
//!
//! A deserialized, read-only view of an OData service's Entity Data
//! Model: namespaces with their entity/complex/enum types, type
//! definitions, operations, and the service-level entity container.
//! The grammar layer performs point lookups and membership tests
//! against this graph; nothing here is mutated after loading.
use serde::{Deserialize, Serialize};

use crate::error::EdmError;

/// Root of a metadata document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edmx {
    pub data_services: DataServices,
}

/// All schemas exposed by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataServices {
    #[serde(default)]
    pub schemas: Vec<Schema>,
}

/// A single namespace and its members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub namespace: String,
    #[serde(default)]
    pub entity_types: Vec<EntityType>,
    #[serde(default)]
    pub complex_types: Vec<ComplexType>,
    #[serde(default)]
    pub enum_types: Vec<EnumType>,
    #[serde(default)]
    pub type_definitions: Vec<TypeDefinition>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub functions: Vec<Function>,
    #[serde(default)]
    pub entity_container: Option<EntityContainer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityType {
    pub name: String,
    #[serde(default)]
    pub key: Option<Key>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub navigation_properties: Vec<NavigationProperty>,
}

impl EntityType {
    /// Whether `name` is listed in this type's key definition.
    pub fn is_key_property(&self, name: &str) -> bool {
        self.key
            .as_ref()
            .map(|key| key.property_refs.iter().any(|r| r.name == name))
            .unwrap_or(false)
    }
}

/// Key definition listing the key property names of an entity type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Key {
    #[serde(default)]
    pub property_refs: Vec<PropertyRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexType {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub navigation_properties: Vec<NavigationProperty>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumType {
    pub name: String,
    #[serde(default)]
    pub members: Vec<EnumMember>,
}

impl EnumType {
    pub fn has_member(&self, name: &str) -> bool {
        self.members.iter().any(|m| m.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMember {
    pub name: String,
    #[serde(default)]
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeDefinition {
    pub name: String,
    pub underlying_type: String,
}

/// A structural or stream-valued property. The declared type is kept
/// as the raw metadata string; [`crate::TypeRef`] gives the parsed
/// element/cardinality view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// A relationship to another entity or entity collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub return_type: Option<ReturnType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Function {
    pub name: String,
    pub return_type: ReturnType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnType {
    #[serde(rename = "type")]
    pub type_name: String,
}

/// Service-level container holding the "import" operation variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityContainer {
    pub name: String,
    #[serde(default)]
    pub action_imports: Vec<ActionImport>,
    #[serde(default)]
    pub function_imports: Vec<FunctionImport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionImport {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionImport {
    pub name: String,
    pub return_type: ReturnType,
}

impl Edmx {
    /// Load a snapshot from a JSON metadata document.
    pub fn from_json_str(json: &str) -> Result<Edmx, EdmError> {
        let edmx: Edmx = serde_json::from_str(json)?;
        if edmx.data_services.schemas.is_empty() {
            return Err(EdmError::Invalid {
                reason: "metadata document contains no schemas".to_string(),
            });
        }
        Ok(edmx)
    }

    /// The schema declaring `namespace`, if any.
    pub fn schema(&self, namespace: &str) -> Option<&Schema> {
        self.data_services
            .schemas
            .iter()
            .find(|s| s.namespace == namespace)
    }
}
