//! Enum code generation.

use crate::csharp::names::leaf_name;
use crate::csharp::syntax::{MEMBER_INDENT, doc_comment, obsolete_attribute};
use crate::error::CodegenError;
use gqlforge_schema::SchemaType;

/// Generator for enum declarations.
pub struct EnumGenerator;

impl EnumGenerator {
    /// Creates a new enum generator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Generates an enum declaration with one member per enum value.
    ///
    /// Members keep their GraphQL spelling so the string enum converter
    /// round-trips them unchanged.
    ///
    /// # Errors
    /// Returns `CodegenError` if the type is unnamed or a deprecated value
    /// has no reason.
    pub fn generate(&self, ty: &SchemaType) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = leaf_name(ty)?;

        output.push_str(&doc_comment(ty.description.as_deref(), ""));
        output.push_str("[JsonConverter(typeof(JsonStringEnumConverter))]\n");
        output.push_str(&format!("public enum {name}\n{{\n"));

        for value in ty.enum_values() {
            output.push_str(&doc_comment(value.description.as_deref(), MEMBER_INDENT));
            output.push_str(&obsolete_attribute(
                name,
                &value.name,
                value.is_deprecated,
                value.deprecation_reason.as_deref(),
                MEMBER_INDENT,
            )?);
            output.push_str(&format!("{MEMBER_INDENT}{},\n", value.name));
        }

        output.push_str("}\n\n");

        Ok(output)
    }
}

impl Default for EnumGenerator {
    fn default() -> Self {
        Self::new()
    }
}
