//! Type name resolution.

use crate::config::ScalarTable;
use crate::error::CodegenError;
use gqlforge_schema::{SchemaError, SchemaType, TypeKind};

/// Prefix marking the C# interface synthesized for an interface or union.
pub const POLYMORPHIC_PREFIX: &str = "I";

/// Returns the C# interface name of a GraphQL interface or union.
#[must_use]
pub fn polymorphic_name(name: &str) -> String {
    format!("{POLYMORPHIC_PREFIX}{name}")
}

/// Resolves schema type references to C# type names.
///
/// Resolved names never carry nullability; `NON_NULL` is transparent and
/// optionality is applied uniformly at the property level.
#[derive(Debug, Clone)]
pub struct NameResolver {
    scalars: ScalarTable,
}

impl NameResolver {
    /// Creates a resolver over the given scalar table.
    #[must_use]
    pub const fn new(scalars: ScalarTable) -> Self {
        Self { scalars }
    }

    /// Resolves a type reference to a C# type name.
    ///
    /// # Errors
    /// Returns `CodegenError::UnknownScalar` for unmapped scalars and
    /// `CodegenError::Schema` for wrapper chains that end before a named type.
    pub fn resolve(&self, ty: &SchemaType) -> Result<String, CodegenError> {
        match ty.kind {
            TypeKind::NonNull => self.resolve(ty.wrapped()?),
            TypeKind::List => Ok(format!("List<{}>", self.resolve(ty.wrapped()?)?)),
            TypeKind::Interface | TypeKind::Union => Ok(polymorphic_name(leaf_name(ty)?)),
            TypeKind::Scalar => {
                let name = leaf_name(ty)?;
                self.scalars
                    .get(name)
                    .map(str::to_string)
                    .ok_or_else(|| CodegenError::UnknownScalar {
                        scalar: name.to_string(),
                    })
            }
            TypeKind::Object | TypeKind::Enum | TypeKind::InputObject | TypeKind::Unknown => {
                Ok(leaf_name(ty)?.to_string())
            }
        }
    }

    /// Unwraps a reference to its named type and resolves that.
    ///
    /// # Errors
    /// Same as [`NameResolver::resolve`].
    pub fn resolve_named(&self, ty: &SchemaType) -> Result<String, CodegenError> {
        self.resolve(ty.named_type()?)
    }
}

/// Returns the name of a named type reference.
///
/// # Errors
/// Returns `SchemaError::UnnamedType` if the reference has no name.
pub fn leaf_name(ty: &SchemaType) -> Result<&str, SchemaError> {
    ty.name().ok_or_else(|| SchemaError::UnnamedType {
        kind: ty.kind.to_string(),
    })
}
