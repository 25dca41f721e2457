//! Declaration dispatch over the schema types.

use crate::config::GeneratorConfig;
use crate::csharp::{
    EnumGenerator, InterfaceGenerator, NameResolver, ObjectGenerator, UnionGenerator, preamble,
};
use crate::error::CodegenError;
use gqlforge_schema::{SchemaType, TypeIndex, TypeKind};

/// Main code generator: emits the preamble followed by one declaration per
/// eligible schema type, in response order.
pub struct Generator<'a> {
    index: &'a TypeIndex<'a>,
    config: &'a GeneratorConfig,
    resolver: NameResolver,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given index and configuration.
    #[must_use]
    pub fn new(index: &'a TypeIndex<'a>, config: &'a GeneratorConfig) -> Self {
        Self {
            index,
            config,
            resolver: NameResolver::new(config.scalar_table()),
        }
    }

    /// Generates the complete source text.
    ///
    /// # Errors
    /// Returns the first `CodegenError` raised by any declaration.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut output = preamble(&self.config.namespace);
        let mut declarations = 0usize;

        for ty in self.index.types() {
            let duplicate = ty.name().filter(|_| !self.index.is_canonical(ty));
            if let Some(name) = duplicate {
                tracing::trace!("Skipping duplicate definition of {}", name);
                continue;
            }
            if let Some(declaration) = self.generate_type(ty)? {
                output.push_str(&declaration);
                declarations += 1;
            }
        }

        tracing::info!(
            "Generated {} declarations in namespace {}",
            declarations,
            self.config.namespace
        );

        Ok(output)
    }

    /// Generates the declaration for one schema type.
    ///
    /// Scalars and input objects produce no declaration.
    ///
    /// # Errors
    /// Returns `CodegenError::UnexpectedKind` for wrapper or unknown kinds,
    /// or any error raised by the kind-specific generator.
    pub fn generate_type(&self, ty: &SchemaType) -> Result<Option<String>, CodegenError> {
        let name = ty.name().unwrap_or("<unnamed>");

        let declaration = match ty.kind {
            TypeKind::Scalar | TypeKind::InputObject => {
                tracing::trace!("Skipping {} {}", ty.kind, name);
                return Ok(None);
            }
            TypeKind::Enum => EnumGenerator::new().generate(ty)?,
            TypeKind::Object => ObjectGenerator::new(self.index, &self.resolver).generate(ty)?,
            TypeKind::Interface => {
                InterfaceGenerator::new(self.index, &self.resolver).generate(ty)?
            }
            TypeKind::Union => UnionGenerator::new(self.index, &self.resolver).generate(ty)?,
            TypeKind::List | TypeKind::NonNull | TypeKind::Unknown => {
                return Err(CodegenError::unexpected_kind(name, ty.kind));
            }
        };

        tracing::debug!("Generated {} {}", ty.kind, name);
        Ok(Some(declaration))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gqlforge_schema::{SchemaEnumValue, SchemaField};

    fn config() -> GeneratorConfig {
        GeneratorConfig::new("Api.Models")
    }

    #[test]
    fn test_skipped_kinds() {
        let types = vec![
            SchemaType::named(TypeKind::Scalar, "String"),
            SchemaType::named(TypeKind::InputObject, "UserFilter"),
        ];
        let index = TypeIndex::new(&types);
        let config = config();
        let generator = Generator::new(&index, &config);

        for ty in &types {
            assert_eq!(generator.generate_type(ty).expect("skip"), None);
        }
    }

    #[test]
    fn test_unexpected_kinds() {
        let types = vec![
            SchemaType::named(TypeKind::Unknown, "Mystery"),
            SchemaType::list(SchemaType::named(TypeKind::Scalar, "Int")),
        ];
        let index = TypeIndex::new(&types);
        let config = config();
        let generator = Generator::new(&index, &config);

        let err = generator.generate_type(&types[0]).expect_err("unknown kind");
        assert!(matches!(
            err,
            CodegenError::UnexpectedKind { ref type_name, ref kind }
                if type_name == "Mystery" && kind == "UNKNOWN"
        ));
        assert!(matches!(
            generator.generate_type(&types[1]),
            Err(CodegenError::UnexpectedKind { .. })
        ));
    }

    #[test]
    fn test_generate_in_input_order() {
        let mut color = SchemaType::named(TypeKind::Enum, "Color");
        color.enum_values = Some(vec![SchemaEnumValue {
            name: "RED".to_string(),
            description: None,
            is_deprecated: false,
            deprecation_reason: None,
        }]);
        let mut user = SchemaType::named(TypeKind::Object, "User");
        user.fields = Some(vec![SchemaField::new(
            "favorite",
            SchemaType::named(TypeKind::Enum, "Color"),
        )]);

        let types = vec![user, SchemaType::named(TypeKind::Scalar, "String"), color];
        let index = TypeIndex::new(&types);
        let config = config();
        let output = Generator::new(&index, &config).generate().expect("source");

        assert!(output.contains("namespace Api.Models;"));
        let user = output.find("public partial class User").expect("user");
        let color = output.find("public enum Color").expect("color");
        assert!(user < color);
        assert!(output.contains("    public Color? Favorite { get; set; }\n"));
    }

    #[test]
    fn test_duplicate_type_emitted_once() {
        let mut first = SchemaType::named(TypeKind::Object, "User");
        first.fields = Some(vec![SchemaField::new(
            "id",
            SchemaType::named(TypeKind::Scalar, "ID"),
        )]);
        let mut second = first.clone();
        second.fields = Some(vec![SchemaField::new(
            "login",
            SchemaType::named(TypeKind::Scalar, "String"),
        )]);

        let types = vec![first, second];
        let index = TypeIndex::new(&types);
        let config = config();
        let output = Generator::new(&index, &config).generate().expect("source");

        assert_eq!(output.matches("public partial class User ").count(), 1);
        assert!(output.contains("public string? Id { get; set; }"));
        assert!(!output.contains("Login"));
    }

    #[test]
    fn test_unknown_scalar_fails_generation() {
        let mut event = SchemaType::named(TypeKind::Object, "Event");
        event.fields = Some(vec![SchemaField::new(
            "at",
            SchemaType::named(TypeKind::Scalar, "DateTime"),
        )]);
        let types = vec![event];
        let index = TypeIndex::new(&types);
        let config = config();

        let err = Generator::new(&index, &config)
            .generate()
            .expect_err("unknown scalar");
        assert!(matches!(err, CodegenError::UnknownScalar { ref scalar } if scalar == "DateTime"));

        let config = GeneratorConfig::new("Api").scalar("DateTime", "DateTimeOffset");
        let output = Generator::new(&index, &config).generate().expect("source");
        assert!(output.contains("public DateTimeOffset? At { get; set; }"));
    }
}
