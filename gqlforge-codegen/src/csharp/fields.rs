//! Property code generation.

use crate::csharp::names::NameResolver;
use crate::csharp::syntax::{
    MEMBER_INDENT, doc_comment, obsolete_attribute, string_literal, to_pascal_case,
};
use crate::error::CodegenError;
use gqlforge_schema::SchemaField;
use std::collections::HashSet;

/// Accessors emitted for a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// `{ get; set; }` on a class.
    ReadWrite,
    /// `{ get; }` on an interface.
    ReadOnly,
}

/// Generator for the property declaring a schema field.
pub struct FieldGenerator<'a> {
    resolver: &'a NameResolver,
}

impl<'a> FieldGenerator<'a> {
    /// Creates a new field generator.
    #[must_use]
    pub const fn new(resolver: &'a NameResolver) -> Self {
        Self { resolver }
    }

    /// Generates the properties of several fields, in order.
    ///
    /// A property name already taken by an earlier field, or on a class by
    /// the class itself, gets a numeric suffix; the JSON name is unchanged.
    ///
    /// # Errors
    /// Returns `CodegenError` if a field type cannot be resolved or a
    /// deprecated field has no reason.
    pub fn generate_all<'f>(
        &self,
        owner: &str,
        fields: impl IntoIterator<Item = &'f SchemaField>,
        access: Access,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        let mut taken = HashSet::new();
        if access == Access::ReadWrite {
            taken.insert(owner.to_string());
        }

        for field in fields {
            let property = unique_property(&mut taken, &field.name);
            if property != to_pascal_case(&field.name) {
                tracing::trace!("Renamed field '{}.{}' to {}", owner, field.name, property);
            }
            output.push_str(&self.property(owner, field, &property, access)?);
        }
        Ok(output)
    }

    /// Generates a single property.
    ///
    /// The property type is always nullable, whatever the schema's `NON_NULL`
    /// wrapping says.
    ///
    /// # Errors
    /// Same as [`FieldGenerator::generate_all`].
    pub fn generate(
        &self,
        owner: &str,
        field: &SchemaField,
        access: Access,
    ) -> Result<String, CodegenError> {
        self.property(owner, field, &to_pascal_case(&field.name), access)
    }

    fn property(
        &self,
        owner: &str,
        field: &SchemaField,
        property: &str,
        access: Access,
    ) -> Result<String, CodegenError> {
        let mut output = String::new();
        let csharp_type = self.resolver.resolve(&field.ty)?;

        output.push_str(&doc_comment(field.description.as_deref(), MEMBER_INDENT));
        output.push_str(&obsolete_attribute(
            owner,
            &field.name,
            field.is_deprecated,
            field.deprecation_reason.as_deref(),
            MEMBER_INDENT,
        )?);

        match access {
            Access::ReadWrite => {
                output.push_str(&format!(
                    "{MEMBER_INDENT}[JsonPropertyName({})]\n",
                    string_literal(&field.name)
                ));
                output.push_str(&format!(
                    "{MEMBER_INDENT}public {csharp_type}? {property} {{ get; set; }}\n\n"
                ));
            }
            Access::ReadOnly => {
                output.push_str(&format!(
                    "{MEMBER_INDENT}{csharp_type}? {property} {{ get; }}\n\n"
                ));
            }
        }

        Ok(output)
    }
}

/// Picks the PascalCase name of a field, suffixed until it is unused.
fn unique_property(taken: &mut HashSet<String>, field: &str) -> String {
    let base = to_pascal_case(field);
    let mut property = base.clone();
    let mut suffix = 1;
    while !taken.insert(property.clone()) {
        suffix += 1;
        property = format!("{base}{suffix}");
    }
    property
}
