//! Error types for code generation.

use thiserror::Error;

/// Boxed error returned by introspection transports.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Introspection response parsing error.
    #[error("introspection parse error: {0}")]
    Parse(#[from] gqlforge_schema::ParseError),

    /// Type reference error.
    #[error("schema error: {0}")]
    Schema(#[from] gqlforge_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Scalar with no override and no built-in mapping.
    #[error("unknown scalar '{scalar}': add a scalar override for it")]
    UnknownScalar {
        /// GraphQL scalar name.
        scalar: String,
    },

    /// Type kind the declaration dispatch does not handle.
    #[error("unexpected kind {kind} for type '{type_name}'")]
    UnexpectedKind {
        /// Type name.
        type_name: String,
        /// Type kind.
        kind: String,
    },

    /// Deprecated member without a deprecation reason.
    #[error("'{owner}.{member}' is deprecated but has no deprecation reason")]
    MissingDeprecationReason {
        /// Declaring type name.
        owner: String,
        /// Field or enum value name.
        member: String,
    },

    /// Union without any known possible type.
    #[error("union '{union}' has no possible types")]
    EmptyUnion {
        /// Union name.
        union: String,
    },

    /// Introspection query could not be sent.
    #[error("introspection transport error: {0}")]
    Transport(#[source] BoxError),

    /// Formatter rejected the generated source.
    #[error("format error: {message}")]
    Format {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates an unexpected kind error.
    pub fn unexpected_kind(type_name: impl Into<String>, kind: impl ToString) -> Self {
        Self::UnexpectedKind {
            type_name: type_name.into(),
            kind: kind.to_string(),
        }
    }

    /// Creates a format error with the given message.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }
}
