//! Union code generation.

use crate::csharp::fields::{Access, FieldGenerator};
use crate::csharp::names::{NameResolver, leaf_name, polymorphic_name};
use crate::csharp::syntax::{doc_comment, downcast_declaration, polymorphic_attributes};
use crate::error::CodegenError;
use gqlforge_schema::{SchemaField, SchemaType, TypeIndex};

/// Generator for GraphQL union declarations.
///
/// A union becomes a C# interface implemented by each member class, exposing
/// a downcast helper per member and the fields every member shares.
pub struct UnionGenerator<'a> {
    index: &'a TypeIndex<'a>,
    resolver: &'a NameResolver,
}

impl<'a> UnionGenerator<'a> {
    /// Creates a new union generator.
    #[must_use]
    pub const fn new(index: &'a TypeIndex<'a>, resolver: &'a NameResolver) -> Self {
        Self { index, resolver }
    }

    /// Generates the C# interface for a GraphQL union.
    ///
    /// # Errors
    /// Returns `CodegenError::EmptyUnion` if no possible type is known, or
    /// any error raised while resolving member fields.
    pub fn generate(&self, ty: &SchemaType) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = leaf_name(ty)?;
        let members = self.index.possible_types(ty);
        let member_names = members
            .iter()
            .map(|m| leaf_name(m))
            .collect::<Result<Vec<_>, _>>()?;

        let common = self.common_fields(name, &members)?;

        output.push_str(&doc_comment(ty.description.as_deref(), ""));
        output.push_str(&polymorphic_attributes(member_names.iter().copied()));
        output.push_str(&format!(
            "public partial interface {} : IGraphQLObject\n{{\n",
            polymorphic_name(name)
        ));

        for member in &member_names {
            output.push_str(&downcast_declaration(member));
        }

        output.push_str(&FieldGenerator::new(self.resolver).generate_all(
            name,
            common,
            Access::ReadOnly,
        )?);

        output.push_str("}\n\n");

        Ok(output)
    }

    /// Returns the fields present on every member with the same name and the
    /// same resolved type, in the first member's field order.
    ///
    /// # Errors
    /// Returns `CodegenError::EmptyUnion` when `members` is empty.
    pub fn common_fields(
        &self,
        union: &str,
        members: &[&'a SchemaType],
    ) -> Result<Vec<&'a SchemaField>, CodegenError> {
        let Some((&first, rest)) = members.split_first() else {
            return Err(CodegenError::EmptyUnion {
                union: union.to_string(),
            });
        };

        let mut common = Vec::new();
        'fields: for field in first.fields() {
            let csharp_type = self.resolver.resolve(&field.ty)?;
            for member in rest {
                let Some(other) = member.field(&field.name) else {
                    continue 'fields;
                };
                if self.resolver.resolve(&other.ty)? != csharp_type {
                    continue 'fields;
                }
            }
            common.push(field);
        }

        Ok(common)
    }
}
