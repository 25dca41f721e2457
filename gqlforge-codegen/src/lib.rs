//! # gqlforge Codegen
//!
//! C# model generation from GraphQL introspection responses.
//!
//! This crate provides:
//! - Scalar mapping and type name resolution
//! - Enum, class and interface generation per schema type kind
//! - Union synthesis over common member fields
//! - Connection/edge pagination capability inference
//! - An async driver around a caller-supplied query transport

pub mod config;
pub mod csharp;
pub mod driver;
pub mod error;
pub mod generator;

pub use config::{GeneratorConfig, ScalarTable};
pub use driver::{IntrospectionTransport, PassthroughFormatter, SourceFormatter, generate};
pub use error::{BoxError, CodegenError};
pub use generator::Generator;

use gqlforge_schema::{SchemaType, TypeIndex};

/// Generates C# source from already decoded schema types.
///
/// # Arguments
/// * `types` - Schema types in response order
/// * `config` - Namespace and scalar overrides
///
/// # Returns
/// Generated C# source as a string.
///
/// # Errors
/// Returns `CodegenError` if generation fails.
pub fn generate_from_types(
    types: &[SchemaType],
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let index = TypeIndex::new(types);
    let generator = Generator::new(&index, config);
    generator.generate()
}

/// Generates C# source from an introspection response string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str, config: &GeneratorConfig) -> Result<String, CodegenError> {
    let types = gqlforge_schema::parse_response(json)?;
    generate_from_types(&types, config)
}

/// Generates C# source from an introspection response file.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(
    path: &std::path::Path,
    config: &GeneratorConfig,
) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}
