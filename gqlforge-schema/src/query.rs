//! Introspection query text.

/// Number of nested `ofType` levels requested for every type reference.
///
/// A field whose type wraps `LIST`/`NON_NULL` deeper than this arrives with a
/// wrapper whose `ofType` is missing, which is reported as
/// [`SchemaError::DepthExceeded`](crate::SchemaError::DepthExceeded).
pub const TYPE_REF_DEPTH: usize = 7;

const FULL_TYPE_FRAGMENT: &str = "\
fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    type {
      ...TypeRef
    }
    isDeprecated
    deprecationReason
  }
  interfaces {
    ...TypeRef
  }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes {
    ...TypeRef
  }
}
";

/// Builds the introspection query sent to the endpoint.
#[must_use]
pub fn introspection_query() -> String {
    let mut query = String::from(
        "query IntrospectionQuery {\n  __schema {\n    types {\n      ...FullType\n    }\n  }\n}\n\n",
    );
    query.push_str(FULL_TYPE_FRAGMENT);
    query.push('\n');
    query.push_str(&type_ref_fragment(TYPE_REF_DEPTH));
    query
}

/// Builds the `TypeRef` fragment with `depth` nested `ofType` selections.
fn type_ref_fragment(depth: usize) -> String {
    let mut output = String::from("fragment TypeRef on __Type {\n");
    for level in 0..=depth {
        let indent = "  ".repeat(level + 1);
        output.push_str(&format!("{indent}kind\n{indent}name\n"));
        if level < depth {
            output.push_str(&format!("{indent}ofType {{\n"));
        }
    }
    for level in (0..depth).rev() {
        let indent = "  ".repeat(level + 1);
        output.push_str(&format!("{indent}}}\n"));
    }
    output.push_str("}\n");
    output
}
