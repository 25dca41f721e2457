//! Introspection response parser.
//!
//! This module extracts the `__schema.types` array from an introspection
//! response, accepting both the raw GraphQL envelope (`{"data": {...}}`) and
//! a bare `{"__schema": {...}}` document.

use crate::error::ParseError;
use crate::types::SchemaType;
use serde_json::Value;

/// Parses an introspection response from a JSON string.
///
/// # Arguments
/// * `json` - Introspection response document
///
/// # Returns
/// The schema types in response order.
///
/// # Errors
/// Returns `ParseError` if the JSON is malformed, carries only GraphQL errors,
/// or has no `__schema.types` array.
pub fn parse_response(json: &str) -> Result<Vec<SchemaType>, ParseError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(value)
}

/// Parses an already decoded introspection response.
///
/// # Errors
/// Returns `ParseError` under the same conditions as [`parse_response`].
pub fn parse_value(mut value: Value) -> Result<Vec<SchemaType>, ParseError> {
    if value.get("__schema").is_none() {
        match value.get_mut("data").map(Value::take) {
            Some(data) if !data.is_null() => value = data,
            _ => return Err(graphql_errors(&value).unwrap_or(ParseError::MissingSchema)),
        }
    }

    let mut schema = match value.get_mut("__schema").map(Value::take) {
        Some(schema) if !schema.is_null() => schema,
        _ => return Err(ParseError::MissingSchema),
    };

    let types = match schema.get_mut("types").map(Value::take) {
        Some(types) if types.is_array() => types,
        _ => return Err(ParseError::MissingTypes),
    };

    let types: Vec<SchemaType> = serde_json::from_value(types)?;
    tracing::debug!("Parsed {} schema types", types.len());
    Ok(types)
}

/// Collects the messages of a GraphQL `errors` array, if present.
fn graphql_errors(value: &Value) -> Option<ParseError> {
    let errors = value.get("errors")?.as_array()?;
    let messages = errors
        .iter()
        .map(|e| {
            e.get("message")
                .and_then(Value::as_str)
                .map_or_else(|| e.to_string(), str::to_string)
        })
        .collect::<Vec<_>>();

    (!messages.is_empty()).then_some(ParseError::GraphQl { messages })
}
