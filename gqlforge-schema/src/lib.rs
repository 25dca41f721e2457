//! # gqlforge Schema
//!
//! GraphQL introspection schema model and lookup structures.
//!
//! This crate provides:
//! - The introspection query text sent to a GraphQL endpoint
//! - Type definitions decoded from the introspection response
//! - Response parsing (top-level or `data`-nested documents)
//! - A per-run type index for global name and union-membership lookups

pub mod error;
pub mod index;
pub mod parser;
pub mod query;
pub mod types;

pub use error::{ParseError, SchemaError};
pub use index::TypeIndex;
pub use parser::{parse_response, parse_value};
pub use query::{TYPE_REF_DEPTH, introspection_query};
pub use types::{SchemaEnumValue, SchemaField, SchemaType, TypeKind};
