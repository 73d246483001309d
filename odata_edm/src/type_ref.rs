//! Structured view of declared type strings
//!
//! Metadata declares member types as strings, either a plain qualified
//! name (`Edm.Int32`, `NS.Address`) or a collection wrapper
//! (`Collection(NS.Address)`). [`TypeRef`] parses that framing once so
//! the grammar layer can do structural checks instead of repeated
//! string slicing.

/// The exact wrapper framing used by metadata type strings.
const COLLECTION_OPEN: &str = "Collection(";
const COLLECTION_CLOSE: char = ')';

/// A parsed type reference: element type name plus cardinality flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRef<'a> {
    /// The element type name with any collection wrapper stripped.
    pub element: &'a str,
    /// Whether the declared type was `Collection(...)`-wrapped.
    pub collection: bool,
}

impl<'a> TypeRef<'a> {
    /// Parse a declared type string.
    ///
    /// A string that opens with `Collection(` but does not close with
    /// `)` is malformed; it yields no reference, and classifier
    /// predicates treat the candidate as unmatched.
    pub fn parse(declared: &'a str) -> Option<TypeRef<'a>> {
        if let Some(rest) = declared.strip_prefix(COLLECTION_OPEN) {
            let element = rest.strip_suffix(COLLECTION_CLOSE)?;
            Some(TypeRef {
                element,
                collection: true,
            })
        } else {
            Some(TypeRef {
                element: declared,
                collection: false,
            })
        }
    }

    /// Whether the element type is one of the built-in `Edm.*` types.
    pub fn is_primitive(&self) -> bool {
        is_primitive_type_name(self.element)
    }
}

/// The closed catalog of built-in primitive type names.
pub const PRIMITIVE_TYPE_NAMES: [&str; 31] = [
    "Edm.Binary",
    "Edm.Boolean",
    "Edm.Byte",
    "Edm.Date",
    "Edm.DateTimeOffset",
    "Edm.Decimal",
    "Edm.Double",
    "Edm.Duration",
    "Edm.Guid",
    "Edm.Int16",
    "Edm.Int32",
    "Edm.Int64",
    "Edm.SByte",
    "Edm.Single",
    "Edm.Stream",
    "Edm.String",
    "Edm.TimeOfDay",
    "Edm.GeographyCollection",
    "Edm.GeographyLineString",
    "Edm.GeographyMultiLineString",
    "Edm.GeographyMultiPoint",
    "Edm.GeographyMultiPolygon",
    "Edm.GeographyPoint",
    "Edm.GeographyPolygon",
    "Edm.GeometryCollection",
    "Edm.GeometryLineString",
    "Edm.GeometryMultiLineString",
    "Edm.GeometryMultiPoint",
    "Edm.GeometryMultiPolygon",
    "Edm.GeometryPoint",
    "Edm.GeometryPolygon",
];

/// Exact containment test against the primitive catalog.
pub fn is_primitive_type_name(name: &str) -> bool {
    PRIMITIVE_TYPE_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_type() {
        let r = TypeRef::parse("Edm.Int32").unwrap();
        assert_eq!(r.element, "Edm.Int32");
        assert!(!r.collection);
        assert!(r.is_primitive());
    }

    #[test]
    fn parses_collection_type() {
        let r = TypeRef::parse("Collection(NS.Address)").unwrap();
        assert_eq!(r.element, "NS.Address");
        assert!(r.collection);
        assert!(!r.is_primitive());
    }

    #[test]
    fn unterminated_collection_is_malformed() {
        assert_eq!(TypeRef::parse("Collection(NS.Address"), None);
    }

    #[test]
    fn catalog_membership_is_exact() {
        assert!(is_primitive_type_name("Edm.GeographyMultiPolygon"));
        assert!(!is_primitive_type_name("Edm.Geography"));
        assert!(!is_primitive_type_name("Edm.Int3"));
        assert!(!is_primitive_type_name("NS.Int32"));
    }
}
