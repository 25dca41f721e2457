//! Object (class) code generation.

use crate::csharp::fields::{Access, FieldGenerator};
use crate::csharp::names::{NameResolver, leaf_name, polymorphic_name};
use crate::csharp::syntax::{MEMBER_INDENT, doc_comment};
use crate::error::CodegenError;
use gqlforge_schema::{SchemaField, SchemaType, TypeIndex};
use std::collections::{HashSet, VecDeque};

/// Name suffix of paginated connection types.
pub const CONNECTION_SUFFIX: &str = "Connection";

/// Name suffix of pagination edge types.
pub const EDGE_SUFFIX: &str = "Edge";

/// Pagination capability inferred from a type's name and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// Single edge: cursor plus node accessor.
    Edge {
        /// Node type name.
        node: String,
        /// Whether a string `cursor` field exists.
        has_cursor: bool,
    },
    /// Connection exposing a node list only.
    Nodes {
        /// Node type name.
        node: String,
    },
    /// Connection exposing an edge list only.
    Edges {
        /// Edge type name.
        edge: String,
        /// Node type name.
        node: String,
    },
    /// Connection exposing both node and edge lists.
    NodesAndEdges {
        /// Edge type name.
        edge: String,
        /// Node type name.
        node: String,
    },
}

impl Capability {
    /// Returns the preamble interface implementing this capability.
    #[must_use]
    pub fn interface(&self) -> String {
        match self {
            Self::Edge { node, .. } => format!("IEdge<{node}>"),
            Self::Nodes { node } => format!("INodeConnection<{node}>"),
            Self::Edges { edge, node } => format!("IEdgeConnection<{edge}, {node}>"),
            Self::NodesAndEdges { edge, node } => format!("INodeEdgeConnection<{edge}, {node}>"),
        }
    }

    /// Generates the explicit members forwarding to the class properties.
    #[must_use]
    pub fn forwarding_members(&self) -> String {
        let nodes = |node: &str| {
            format!("{MEMBER_INDENT}IReadOnlyList<{node}>? INodeConnection<{node}>.Nodes => Nodes;\n")
        };
        let edges = |edge: &str, node: &str| {
            format!(
                "{MEMBER_INDENT}IReadOnlyList<{edge}>? IEdgeConnection<{edge}, {node}>.Edges => Edges;\n"
            )
        };

        match self {
            Self::Edge { node, has_cursor } => {
                let cursor = if *has_cursor { "Cursor" } else { "null" };
                format!(
                    "{MEMBER_INDENT}string? IEdge<{node}>.Cursor => {cursor};\n\
                     {MEMBER_INDENT}{node}? IEdge<{node}>.Node => Node;\n"
                )
            }
            Self::Nodes { node } => nodes(node),
            Self::Edges { edge, node } => edges(edge, node),
            Self::NodesAndEdges { edge, node } => format!("{}{}", nodes(node), edges(edge, node)),
        }
    }
}

/// Generator for concrete class declarations.
pub struct ObjectGenerator<'a> {
    index: &'a TypeIndex<'a>,
    resolver: &'a NameResolver,
}

impl<'a> ObjectGenerator<'a> {
    /// Creates a new object generator.
    #[must_use]
    pub const fn new(index: &'a TypeIndex<'a>, resolver: &'a NameResolver) -> Self {
        Self { index, resolver }
    }

    /// Generates the class for a GraphQL object type.
    ///
    /// The class implements every declared interface, every union listing it
    /// as a possible type, and the pagination capability its name implies.
    ///
    /// # Errors
    /// Returns `CodegenError` if an interface or field type cannot be
    /// resolved, or a deprecated field has no reason.
    pub fn generate(&self, ty: &SchemaType) -> Result<String, CodegenError> {
        let mut output = String::new();
        let name = leaf_name(ty)?;

        let mut bases = vec!["IGraphQLObject".to_string()];
        for parent in ty.interfaces() {
            bases.push(self.resolver.resolve(parent)?);
        }
        for union in self.index.unions_for(name) {
            bases.push(polymorphic_name(union));
        }
        let capability = self.capability(name, ty)?;
        if let Some(capability) = &capability {
            bases.push(capability.interface());
        }

        output.push_str(&doc_comment(ty.description.as_deref(), ""));
        output.push_str(&format!(
            "public partial class {name} : {}\n{{\n",
            bases.join(", ")
        ));

        output.push_str(&FieldGenerator::new(self.resolver).generate_all(
            name,
            ty.fields(),
            Access::ReadWrite,
        )?);
        output.push_str(&self.downcast_members(name, ty)?);
        if let Some(capability) = &capability {
            output.push_str(&capability.forwarding_members());
        }

        output.push_str("}\n\n");

        Ok(output)
    }

    /// Generates the downcast helper implementations for every root
    /// polymorphic supertype of the class.
    fn downcast_members(&self, name: &str, ty: &SchemaType) -> Result<String, CodegenError> {
        let mut output = String::new();

        for supertype in self.downcast_roots(name, ty) {
            let supertype_name = polymorphic_name(leaf_name(supertype)?);
            for member in self.index.possible_types(supertype) {
                let member = leaf_name(member)?;
                let target = if member == name { "this" } else { "null" };
                output.push_str(&format!(
                    "{MEMBER_INDENT}{member}? {supertype_name}.As{member} => {target};\n"
                ));
            }
        }

        Ok(output)
    }

    /// Collects the supertypes declaring downcast helpers: the parentless
    /// interfaces reachable from the declared interfaces, then the unions.
    fn downcast_roots(&self, name: &str, ty: &SchemaType) -> Vec<&'a SchemaType> {
        let mut roots = Vec::new();
        let mut visited = HashSet::new();
        let mut pending: VecDeque<&str> = ty.interfaces().iter().filter_map(SchemaType::name).collect();

        while let Some(interface) = pending.pop_front() {
            if !visited.insert(interface) {
                continue;
            }
            let Some(definition) = self.index.get(interface) else {
                tracing::trace!("Interface '{}' of '{}' not in schema", interface, name);
                continue;
            };
            if definition.interfaces().is_empty() {
                roots.push(definition);
            } else {
                pending.extend(definition.interfaces().iter().filter_map(SchemaType::name));
            }
        }

        roots.extend(
            self.index
                .unions_for(name)
                .iter()
                .filter_map(|union| self.index.get(union)),
        );
        roots
    }

    /// Infers the pagination capability from the naming convention.
    ///
    /// # Errors
    /// Returns `CodegenError` if an inspected field type cannot be resolved.
    pub fn capability(
        &self,
        name: &str,
        ty: &SchemaType,
    ) -> Result<Option<Capability>, CodegenError> {
        if name.ends_with(CONNECTION_SUFFIX) {
            self.connection_capability(name, ty)
        } else if name.ends_with(EDGE_SUFFIX) {
            self.edge_capability(name, ty)
        } else {
            Ok(None)
        }
    }

    fn connection_capability(
        &self,
        name: &str,
        ty: &SchemaType,
    ) -> Result<Option<Capability>, CodegenError> {
        let nodes = match ty.field("nodes") {
            Some(field) => self.list_element(field)?,
            None => None,
        };

        if let Some(edges) = ty.field("edges") {
            if let Some(edge) = self.list_element(edges)? {
                let node_field = edges
                    .ty
                    .named_type()?
                    .name()
                    .and_then(|edge_name| self.index.get(edge_name))
                    .and_then(|edge_type| edge_type.field("node"));

                match node_field {
                    Some(node_field) => {
                        if let Some(node) = self.node_type(node_field)? {
                            return Ok(Some(if nodes.as_deref() == Some(node.as_str()) {
                                Capability::NodesAndEdges { edge, node }
                            } else {
                                Capability::Edges { edge, node }
                            }));
                        }
                    }
                    None => tracing::trace!("Edge type of '{}' has no node field", name),
                }
            }
        }

        Ok(nodes.map(|node| Capability::Nodes { node }))
    }

    fn edge_capability(
        &self,
        name: &str,
        ty: &SchemaType,
    ) -> Result<Option<Capability>, CodegenError> {
        let Some(node_field) = ty.field("node") else {
            tracing::trace!("Edge type '{}' has no node field", name);
            return Ok(None);
        };
        let Some(node) = self.node_type(node_field)? else {
            return Ok(None);
        };

        let has_cursor = match ty.field("cursor") {
            Some(cursor) => self.resolver.resolve(&cursor.ty)? == "string",
            None => false,
        };

        Ok(Some(Capability::Edge { node, has_cursor }))
    }

    /// Returns the node type of a single-node field.
    ///
    /// Nodes must be composite (class or interface) types so the capability
    /// interfaces can constrain them to reference types; lists and leaf types
    /// yield no node.
    fn node_type(&self, field: &SchemaField) -> Result<Option<String>, CodegenError> {
        let named = field.ty.named_type()?;
        if !named.kind.is_composite() {
            tracing::trace!("Node field '{}' has leaf type {}", field.name, named.kind);
            return Ok(None);
        }

        let node = self.resolver.resolve(named)?;
        if self.resolver.resolve(&field.ty)? != node {
            tracing::trace!("Node field '{}' is a list", field.name);
            return Ok(None);
        }
        Ok(Some(node))
    }

    /// Returns the element type of a single-level list of composite types.
    fn list_element(&self, field: &SchemaField) -> Result<Option<String>, CodegenError> {
        let named = field.ty.named_type()?;
        if !named.kind.is_composite() {
            tracing::trace!("List field '{}' has leaf type {}", field.name, named.kind);
            return Ok(None);
        }

        let element = self.resolver.resolve(named)?;
        let resolved = self.resolver.resolve(&field.ty)?;
        Ok((resolved == format!("List<{element}>")).then_some(element))
    }
}
