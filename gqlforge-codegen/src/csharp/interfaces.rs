//! Interface code generation.

use crate::csharp::fields::{Access, FieldGenerator};
use crate::csharp::names::{NameResolver, leaf_name, polymorphic_name};
use crate::csharp::syntax::{doc_comment, downcast_declaration, polymorphic_attributes};
use crate::error::CodegenError;
use gqlforge_schema::{SchemaType, TypeIndex};
use std::collections::HashSet;

/// Generator for GraphQL interface declarations.
pub struct InterfaceGenerator<'a> {
    index: &'a TypeIndex<'a>,
    resolver: &'a NameResolver,
}

impl<'a> InterfaceGenerator<'a> {
    /// Creates a new interface generator.
    #[must_use]
    pub const fn new(index: &'a TypeIndex<'a>, resolver: &'a NameResolver) -> Self {
        Self { index, resolver }
    }

    /// Generates the C# interface for a GraphQL interface.
    ///
    /// Downcast helpers are declared only on root interfaces; child
    /// interfaces inherit them. Fields already declared on a parent are
    /// skipped.
    ///
    /// # Errors
    /// Returns `CodegenError` if a parent or field type cannot be resolved.
    pub fn generate(&self, ty: &SchemaType) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = leaf_name(ty)?;
        let members = self.index.possible_types(ty);
        let member_names = members
            .iter()
            .map(|m| leaf_name(m))
            .collect::<Result<Vec<_>, _>>()?;

        let parents = ty
            .interfaces()
            .iter()
            .map(|parent| self.resolver.resolve(parent))
            .collect::<Result<Vec<_>, _>>()?;
        let is_root = parents.is_empty();
        let bases = if is_root {
            "IGraphQLObject".to_string()
        } else {
            parents.join(", ")
        };

        output.push_str(&doc_comment(ty.description.as_deref(), ""));
        output.push_str(&polymorphic_attributes(member_names.iter().copied()));
        output.push_str(&format!(
            "public partial interface {} : {bases}\n{{\n",
            polymorphic_name(name)
        ));

        if is_root {
            for member in &member_names {
                output.push_str(&downcast_declaration(member));
            }
        }

        let inherited = self.inherited_fields(ty);
        let own_fields = ty
            .fields()
            .iter()
            .filter(|f| !inherited.contains(f.name.as_str()));
        output.push_str(&FieldGenerator::new(self.resolver).generate_all(
            name,
            own_fields,
            Access::ReadOnly,
        )?);

        output.push_str("}\n\n");

        Ok(output)
    }

    /// Collects the field names declared on the type's parent interfaces.
    fn inherited_fields(&self, ty: &SchemaType) -> HashSet<&'a str> {
        ty.interfaces()
            .iter()
            .filter_map(SchemaType::name)
            .filter_map(|parent| self.index.get(parent))
            .flat_map(|parent| parent.fields().iter().map(|f| f.name.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScalarTable;
    use gqlforge_schema::{SchemaField, TypeKind};

    fn id_field() -> SchemaField {
        SchemaField::new(
            "id",
            SchemaType::non_null(SchemaType::named(TypeKind::Scalar, "ID")),
        )
    }

    fn string_field(name: &str) -> SchemaField {
        SchemaField::new(name, SchemaType::named(TypeKind::Scalar, "String"))
    }

    fn interface(name: &str, parents: &[&str], fields: Vec<SchemaField>, members: &[&str]) -> SchemaType {
        let mut ty = SchemaType::named(TypeKind::Interface, name);
        ty.fields = Some(fields);
        ty.interfaces = Some(
            parents
                .iter()
                .map(|p| SchemaType::named(TypeKind::Interface, *p))
                .collect(),
        );
        ty.possible_types = Some(
            members
                .iter()
                .map(|m| SchemaType::named(TypeKind::Object, *m))
                .collect(),
        );
        ty
    }

    fn object(name: &str, fields: Vec<SchemaField>) -> SchemaType {
        let mut ty = SchemaType::named(TypeKind::Object, name);
        ty.fields = Some(fields);
        ty
    }

    fn schema() -> Vec<SchemaType> {
        vec![
            interface("Node", &[], vec![id_field()], &["X", "Y"]),
            interface(
                "Named",
                &["Node"],
                vec![id_field(), string_field("name")],
                &["X", "Y"],
            ),
            object("X", vec![id_field(), string_field("name")]),
            object("Y", vec![id_field(), string_field("name")]),
        ]
    }

    #[test]
    fn test_root_interface_declares_downcasts() {
        let types = schema();
        let index = TypeIndex::new(&types);
        let resolver = NameResolver::new(ScalarTable::default());
        let output = InterfaceGenerator::new(&index, &resolver)
            .generate(&types[0])
            .expect("interface");

        assert!(output.contains("public partial interface INode : IGraphQLObject\n{\n"));
        assert_eq!(output.matches("{ get; }").count(), 3);
        assert!(output.contains("    X? AsX { get; }\n"));
        assert!(output.contains("    Y? AsY { get; }\n"));
        assert!(output.contains("    string? Id { get; }\n"));
        assert!(output.contains("[JsonDerivedType(typeof(X), typeDiscriminator: \"X\")]"));
    }

    #[test]
    fn test_child_interface_inherits_downcasts_and_fields() {
        let types = schema();
        let index = TypeIndex::new(&types);
        let resolver = NameResolver::new(ScalarTable::default());
        let output = InterfaceGenerator::new(&index, &resolver)
            .generate(&types[1])
            .expect("interface");

        assert!(output.contains("public partial interface INamed : INode\n{\n"));
        assert!(!output.contains(" As"));
        assert!(!output.contains("Id { get; }"));
        assert!(output.contains("    string? Name { get; }\n"));
    }

    #[test]
    fn test_possible_types_are_filtered() {
        let types = vec![
            interface("Node", &[], vec![id_field()], &["X", "Missing", "X"]),
            object("X", vec![id_field()]),
        ];
        let index = TypeIndex::new(&types);
        let resolver = NameResolver::new(ScalarTable::default());
        let output = InterfaceGenerator::new(&index, &resolver)
            .generate(&types[0])
            .expect("interface");

        assert_eq!(output.matches("AsX").count(), 1);
        assert_eq!(output.matches("JsonDerivedType").count(), 1);
        assert!(!output.contains("Missing"));
    }
}
