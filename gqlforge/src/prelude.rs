//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use gqlforge::prelude::*;
//! ```

// Schema types
pub use gqlforge_schema::{
    ParseError, SchemaEnumValue, SchemaError, SchemaField, SchemaType, TypeIndex, TypeKind,
    introspection_query, parse_response, parse_value,
};

// Generation
pub use gqlforge_codegen::{
    BoxError, CodegenError, Generator, GeneratorConfig, ScalarTable, generate_from_file,
    generate_from_json, generate_from_types,
};

// Driver
pub use gqlforge_codegen::{
    IntrospectionTransport, PassthroughFormatter, SourceFormatter, generate,
};
