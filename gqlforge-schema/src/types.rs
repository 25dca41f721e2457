//! Schema type definitions.
//!
//! This module contains the data structures decoded from the `__schema.types`
//! array of an introspection response: types, fields and enum values.

use crate::error::SchemaError;
use crate::query::TYPE_REF_DEPTH;
use serde::Deserialize;
use std::fmt;

/// GraphQL type kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeKind {
    /// Scalar type.
    Scalar,
    /// Object type.
    Object,
    /// Interface type.
    Interface,
    /// Union type.
    Union,
    /// Enum type.
    Enum,
    /// Input object type.
    InputObject,
    /// List wrapper.
    List,
    /// Non-null wrapper.
    NonNull,
    /// Kind not known to this crate.
    #[serde(other)]
    Unknown,
}

impl TypeKind {
    /// Returns the introspection name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "SCALAR",
            Self::Object => "OBJECT",
            Self::Interface => "INTERFACE",
            Self::Union => "UNION",
            Self::Enum => "ENUM",
            Self::InputObject => "INPUT_OBJECT",
            Self::List => "LIST",
            Self::NonNull => "NON_NULL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Returns true for `LIST` and `NON_NULL`.
    #[must_use]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, Self::List | Self::NonNull)
    }

    /// Returns true for `OBJECT`, `INTERFACE` and `UNION`.
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self, Self::Object | Self::Interface | Self::Union)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schema type, or a type reference nested in a field, interface list or
/// possible-type list.
///
/// Wrapper kinds carry the wrapped type in `of_type`; named kinds carry the
/// member lists relevant to them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaType {
    /// Type kind.
    pub kind: TypeKind,
    /// Type name (absent for wrappers).
    pub name: Option<String>,
    /// Type description.
    pub description: Option<String>,
    /// Wrapped type (`LIST` and `NON_NULL` only).
    pub of_type: Option<Box<SchemaType>>,
    /// Enum values (`ENUM` only).
    pub enum_values: Option<Vec<SchemaEnumValue>>,
    /// Fields (`OBJECT` and `INTERFACE` only).
    pub fields: Option<Vec<SchemaField>>,
    /// Declared parent interfaces (`OBJECT` and `INTERFACE` only).
    pub interfaces: Option<Vec<SchemaType>>,
    /// Implementing or member types (`INTERFACE` and `UNION` only).
    pub possible_types: Option<Vec<SchemaType>>,
}

impl SchemaType {
    /// Creates a named type reference with no members.
    #[must_use]
    pub fn named(kind: TypeKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: Some(name.into()),
            description: None,
            of_type: None,
            enum_values: None,
            fields: None,
            interfaces: None,
            possible_types: None,
        }
    }

    /// Wraps a type reference in `LIST`.
    #[must_use]
    pub fn list(of_type: SchemaType) -> Self {
        Self::wrapper(TypeKind::List, of_type)
    }

    /// Wraps a type reference in `NON_NULL`.
    #[must_use]
    pub fn non_null(of_type: SchemaType) -> Self {
        Self::wrapper(TypeKind::NonNull, of_type)
    }

    fn wrapper(kind: TypeKind, of_type: SchemaType) -> Self {
        Self {
            kind,
            name: None,
            description: None,
            of_type: Some(Box::new(of_type)),
            enum_values: None,
            fields: None,
            interfaces: None,
            possible_types: None,
        }
    }

    /// Returns the type name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the fields, or an empty slice.
    #[must_use]
    pub fn fields(&self) -> &[SchemaField] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Returns the enum values, or an empty slice.
    #[must_use]
    pub fn enum_values(&self) -> &[SchemaEnumValue] {
        self.enum_values.as_deref().unwrap_or_default()
    }

    /// Returns the declared parent interfaces, or an empty slice.
    #[must_use]
    pub fn interfaces(&self) -> &[SchemaType] {
        self.interfaces.as_deref().unwrap_or_default()
    }

    /// Returns the raw possible types, or an empty slice.
    #[must_use]
    pub fn possible_types(&self) -> &[SchemaType] {
        self.possible_types.as_deref().unwrap_or_default()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields().iter().find(|f| f.name == name)
    }

    /// Unwraps `LIST` and `NON_NULL` layers down to the named type.
    ///
    /// # Errors
    /// Returns `SchemaError::DepthExceeded` if a wrapper has no `of_type`,
    /// which is how a chain deeper than [`TYPE_REF_DEPTH`] arrives, and
    /// `SchemaError::UnnamedType` if the leaf carries no name.
    pub fn named_type(&self) -> Result<&SchemaType, SchemaError> {
        let mut current = self;
        while current.kind.is_wrapper() {
            current = current.wrapped()?;
        }
        if current.name.is_none() {
            return Err(SchemaError::UnnamedType {
                kind: current.kind.to_string(),
            });
        }
        Ok(current)
    }

    /// Returns the wrapped type of a `LIST` or `NON_NULL` reference.
    ///
    /// # Errors
    /// Returns `SchemaError::DepthExceeded` when the wrapped type is missing.
    pub fn wrapped(&self) -> Result<&SchemaType, SchemaError> {
        self.of_type
            .as_deref()
            .ok_or(SchemaError::DepthExceeded {
                depth: TYPE_REF_DEPTH,
            })
    }
}

/// A field of an object or interface type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaField {
    /// Field name.
    pub name: String,
    /// Field description.
    pub description: Option<String>,
    /// Whether the field is deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Deprecation reason.
    pub deprecation_reason: Option<String>,
    /// Field type reference (possibly wrapped).
    #[serde(rename = "type")]
    pub ty: SchemaType,
}

impl SchemaField {
    /// Creates a non-deprecated field without description.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: SchemaType) -> Self {
        Self {
            name: name.into(),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
            ty,
        }
    }
}

/// A value of an enum type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEnumValue {
    /// Value name.
    pub name: String,
    /// Value description.
    pub description: Option<String>,
    /// Whether the value is deprecated.
    #[serde(default)]
    pub is_deprecated: bool,
    /// Deprecation reason.
    pub deprecation_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_json() {
        let kind: TypeKind = serde_json::from_str("\"INPUT_OBJECT\"").expect("kind");
        assert_eq!(kind, TypeKind::InputObject);

        let kind: TypeKind = serde_json::from_str("\"NON_NULL\"").expect("kind");
        assert_eq!(kind, TypeKind::NonNull);

        let kind: TypeKind = serde_json::from_str("\"DIRECTIVE\"").expect("kind");
        assert_eq!(kind, TypeKind::Unknown);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TypeKind::InputObject.to_string(), "INPUT_OBJECT");
        assert!(TypeKind::List.is_wrapper());
        assert!(!TypeKind::Object.is_wrapper());
        assert!(TypeKind::Union.is_composite());
        assert!(TypeKind::Object.is_composite());
        assert!(!TypeKind::Enum.is_composite());
    }

    #[test]
    fn test_type_from_json() {
        let ty: SchemaType = serde_json::from_value(serde_json::json!({
            "kind": "OBJECT",
            "name": "User",
            "description": "A user",
            "fields": [{
                "name": "id",
                "description": null,
                "isDeprecated": false,
                "deprecationReason": null,
                "type": {
                    "kind": "NON_NULL",
                    "name": null,
                    "ofType": { "kind": "SCALAR", "name": "ID", "ofType": null }
                }
            }],
            "interfaces": [{ "kind": "INTERFACE", "name": "Node", "ofType": null }],
            "possibleTypes": null,
            "enumValues": null
        }))
        .expect("type");

        assert_eq!(ty.name(), Some("User"));
        assert_eq!(ty.fields().len(), 1);
        assert_eq!(ty.interfaces()[0].name(), Some("Node"));
        assert!(ty.possible_types().is_empty());
        assert!(ty.field("id").is_some());
        assert!(ty.field("name").is_none());
    }

    #[test]
    fn test_named_type_unwraps() {
        let ty = SchemaType::non_null(SchemaType::list(SchemaType::non_null(
            SchemaType::named(TypeKind::Object, "Order"),
        )));
        let named = ty.named_type().expect("named");
        assert_eq!(named.name(), Some("Order"));
    }

    #[test]
    fn test_named_type_depth_exceeded() {
        let mut truncated = SchemaType::list(SchemaType::named(TypeKind::Scalar, "Int"));
        truncated.of_type = None;
        let ty = SchemaType::non_null(truncated);

        let err = ty.named_type().expect_err("truncated chain");
        assert!(matches!(
            err,
            SchemaError::DepthExceeded {
                depth: TYPE_REF_DEPTH
            }
        ));
    }

    #[test]
    fn test_named_type_unnamed_leaf() {
        let mut ty = SchemaType::named(TypeKind::Scalar, "Int");
        ty.name = None;
        assert!(matches!(
            ty.named_type(),
            Err(SchemaError::UnnamedType { .. })
        ));
    }
}
