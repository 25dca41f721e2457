//! # gqlforge
//!
//! Generate statically typed C# models from a GraphQL introspection
//! response.
//!
//! ## Features
//!
//! - **Full schema coverage** - Enums, objects, interfaces and unions
//! - **Polymorphic deserialization** - `System.Text.Json` discriminators and
//!   downcast helpers for every interface and union
//! - **Union synthesis** - Fields shared by all union members are exposed on
//!   the union type
//! - **Pagination capabilities** - Connection and edge types implement
//!   generic edge/connection interfaces
//! - **Pluggable transport** - Any async client can send the introspection
//!   query
//!
//! ## Quick Start
//!
//! ```ignore
//! use gqlforge::prelude::*;
//!
//! let config = GeneratorConfig::new("Shop.Api.Models").scalar("DateTime", "DateTimeOffset");
//! let source = generate(&transport, &config, &PassthroughFormatter).await?;
//! std::fs::write("Models.g.cs", source)?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Introspection query, schema model and type index
//! - [`codegen`] - C# generation and the emission driver

pub mod prelude;

/// Introspection query, schema model and type index.
pub mod schema {
    pub use gqlforge_schema::*;
}

/// C# code generation from introspection schemas.
pub mod codegen {
    pub use gqlforge_codegen::*;
}

// Re-export commonly used items at the crate root
pub use gqlforge_codegen::{
    CodegenError, GeneratorConfig, IntrospectionTransport, PassthroughFormatter, SourceFormatter,
    generate, generate_from_file, generate_from_json, generate_from_types,
};
pub use gqlforge_schema::{ParseError, SchemaError, introspection_query};
