//! Fixed declarations emitted ahead of the schema types.

/// Shared base declarations: the JSON discriminator constant, the marker
/// interface every generated type implements, and the pagination capability
/// interfaces implemented by connection and edge classes.
const SHARED_DECLARATIONS: &str = r#"/// <summary>
/// JSON conventions shared by the generated types.
/// </summary>
public static class GraphQLJson
{
    /// <summary>
    /// Property carrying the concrete type of a polymorphic value.
    /// </summary>
    public const string TypeDiscriminator = "__typename";
}

/// <summary>
/// Marker implemented by every generated GraphQL output type.
/// </summary>
public interface IGraphQLObject
{
}

/// <summary>
/// A pagination edge: a cursor and the node it points at.
/// </summary>
public interface IEdge<TNode>
    where TNode : class
{
    string? Cursor { get; }

    TNode? Node { get; }
}

/// <summary>
/// A connection exposing its nodes directly.
/// </summary>
public interface INodeConnection<TNode>
    where TNode : class
{
    IReadOnlyList<TNode>? Nodes { get; }
}

/// <summary>
/// A connection exposing its edges.
/// </summary>
public interface IEdgeConnection<TEdge, TNode>
    where TNode : class
{
    IReadOnlyList<TEdge>? Edges { get; }
}

/// <summary>
/// A connection exposing both its nodes and its edges.
/// </summary>
public interface INodeEdgeConnection<TEdge, TNode> : INodeConnection<TNode>, IEdgeConnection<TEdge, TNode>
    where TNode : class
{
}

"#;

/// Generates the file header, namespace declaration and shared declarations.
#[must_use]
pub fn preamble(namespace: &str) -> String {
    let mut output = String::new();

    output.push_str("// <auto-generated />\n");
    output.push_str("#nullable enable\n\n");
    output.push_str("using System;\n");
    output.push_str("using System.Collections.Generic;\n");
    output.push_str("using System.Text.Json.Serialization;\n\n");
    output.push_str(&format!("namespace {namespace};\n\n"));
    output.push_str(SHARED_DECLARATIONS);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_wraps_namespace() {
        let output = preamble("Shop.Api.Models");
        assert!(output.contains("namespace Shop.Api.Models;\n"));
        assert!(output.starts_with("// <auto-generated />\n#nullable enable\n"));
    }

    #[test]
    fn test_preamble_declares_capabilities() {
        let output = preamble("Api");
        for declaration in [
            "public interface IGraphQLObject",
            "public interface IEdge<TNode>",
            "public interface INodeConnection<TNode>",
            "public interface IEdgeConnection<TEdge, TNode>",
            "public interface INodeEdgeConnection<TEdge, TNode>",
            "public const string TypeDiscriminator = \"__typename\";",
        ] {
            assert!(output.contains(declaration), "missing {declaration}");
        }
        assert_eq!(output.matches('{').count(), output.matches('}').count());
        assert_eq!(output.matches("    where TNode : class\n").count(), 4);
    }
}
