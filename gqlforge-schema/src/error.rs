//! Error types for introspection parsing and schema traversal.

use thiserror::Error;

/// Error type for introspection response parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// JSON decoding error.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document has no `__schema` object.
    #[error("introspection response has no '__schema' object")]
    MissingSchema,

    /// The `__schema` object has no `types` array.
    #[error("introspection schema has no 'types' array")]
    MissingTypes,

    /// The endpoint answered with GraphQL errors and no data.
    #[error("introspection query failed: {}", messages.join("; "))]
    GraphQl {
        /// Error messages reported by the endpoint.
        messages: Vec<String>,
    },
}

/// Error type for walking schema type references.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A named (non-wrapper) type reference without a name.
    #[error("{kind} type reference has no name")]
    UnnamedType {
        /// Kind of the offending reference.
        kind: String,
    },

    /// A wrapper chain ended before reaching a named type.
    #[error(
        "type reference nests wrappers deeper than the {depth} levels requested by the introspection query"
    )]
    DepthExceeded {
        /// Supported nesting depth.
        depth: usize,
    },
}
