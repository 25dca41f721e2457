//! Emission driver: query, parse, generate, format.

use crate::config::GeneratorConfig;
use crate::error::{BoxError, CodegenError};
use crate::generate_from_types;
use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;

/// Sends the introspection query to a GraphQL endpoint.
///
/// Retries, timeouts and authentication belong to the implementation.
#[async_trait]
pub trait IntrospectionTransport: Send + Sync {
    /// Sends `query` and returns the decoded JSON response.
    ///
    /// # Errors
    /// Returns any error raised while sending or decoding.
    async fn send(&self, query: String) -> Result<Value, BoxError>;
}

#[async_trait]
impl<F, Fut> IntrospectionTransport for F
where
    F: Fn(String) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Value, BoxError>> + Send + 'static,
{
    async fn send(&self, query: String) -> Result<Value, BoxError> {
        self(query).await
    }
}

/// Formatting pass applied to the assembled source text.
pub trait SourceFormatter: Send + Sync {
    /// Formats the generated source.
    ///
    /// # Errors
    /// Returns `CodegenError::Format` if the source cannot be formatted.
    fn format(&self, source: String) -> Result<String, CodegenError>;
}

/// Formatter returning the source unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl SourceFormatter for PassthroughFormatter {
    fn format(&self, source: String) -> Result<String, CodegenError> {
        Ok(source)
    }
}

/// Runs a full generation against a live endpoint.
///
/// The introspection query is sent exactly once and its response is fully
/// materialized before generation starts.
///
/// # Arguments
/// * `transport` - Sends the introspection query
/// * `config` - Namespace and scalar overrides
/// * `formatter` - Formatting pass applied to the result
///
/// # Errors
/// Returns `CodegenError::Transport` if the query cannot be sent, or any
/// parsing, generation or formatting error.
pub async fn generate<T, F>(
    transport: &T,
    config: &GeneratorConfig,
    formatter: &F,
) -> Result<String, CodegenError>
where
    T: IntrospectionTransport + ?Sized,
    F: SourceFormatter + ?Sized,
{
    tracing::info!("Sending introspection query");
    let response = transport
        .send(gqlforge_schema::introspection_query())
        .await
        .map_err(CodegenError::Transport)?;

    let types = gqlforge_schema::parse_value(response)?;
    let source = generate_from_types(&types, config)?;
    let source = formatter.format(source)?;

    tracing::info!(
        "Generated {} bytes of source for {} schema types",
        source.len(),
        types.len()
    );
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn response() -> Value {
        json!({
            "data": {
                "__schema": {
                    "types": [
                        {
                            "kind": "ENUM",
                            "name": "Color",
                            "enumValues": [
                                { "name": "RED", "isDeprecated": false, "deprecationReason": null }
                            ]
                        }
                    ]
                }
            }
        })
    }

    struct StaticTransport {
        response: Value,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl IntrospectionTransport for StaticTransport {
        async fn send(&self, query: String) -> Result<Value, BoxError> {
            assert!(query.contains("__schema"));
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    struct UppercaseFormatter;

    impl SourceFormatter for UppercaseFormatter {
        fn format(&self, source: String) -> Result<String, CodegenError> {
            Ok(source.to_uppercase())
        }
    }

    #[tokio::test]
    async fn test_generate_sends_query_once() {
        let transport = StaticTransport {
            response: response(),
            calls: AtomicUsize::new(0),
        };
        let config = GeneratorConfig::new("Api");

        let source = generate(&transport, &config, &PassthroughFormatter)
            .await
            .expect("source");

        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
        assert!(source.contains("public enum Color"));
    }

    #[tokio::test]
    async fn test_generate_with_closure_transport() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let transport = move |_query: String| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, BoxError>(response()) }
        };
        let config = GeneratorConfig::new("Api");

        let source = generate(&transport, &config, &UppercaseFormatter)
            .await
            .expect("source");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(source.contains("PUBLIC ENUM COLOR"));
    }

    #[tokio::test]
    async fn test_transport_failure_propagates() {
        let transport = |_query: String| async { Err::<Value, BoxError>("connection refused".into()) };
        let config = GeneratorConfig::new("Api");

        let err = generate(&transport, &config, &PassthroughFormatter)
            .await
            .expect_err("transport failure");

        assert!(matches!(err, CodegenError::Transport(_)));
        assert!(err.to_string().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_formatter_failure_propagates() {
        struct RejectingFormatter;

        impl SourceFormatter for RejectingFormatter {
            fn format(&self, _source: String) -> Result<String, CodegenError> {
                Err(CodegenError::format("unbalanced braces"))
            }
        }

        let transport = |_query: String| async { Ok::<_, BoxError>(response()) };
        let config = GeneratorConfig::new("Api");

        let err = generate(&transport, &config, &RejectingFormatter)
            .await
            .expect_err("format failure");
        assert!(matches!(err, CodegenError::Format { .. }));
    }
}
