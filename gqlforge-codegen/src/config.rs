//! Generator configuration and scalar mapping.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Built-in GraphQL scalar to C# type mappings.
pub const BUILTIN_SCALARS: [(&str, &str); 5] = [
    ("String", "string"),
    ("Int", "int"),
    ("Float", "double"),
    ("Boolean", "bool"),
    ("ID", "string"),
];

/// Configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Namespace wrapping the emitted declarations.
    pub namespace: String,
    /// Scalar overrides (GraphQL scalar name to C# type name).
    #[serde(default)]
    pub scalars: BTreeMap<String, String>,
}

impl GeneratorConfig {
    /// Creates a configuration for the given namespace with no overrides.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            scalars: BTreeMap::new(),
        }
    }

    /// Maps a GraphQL scalar to a C# type, replacing any previous mapping.
    #[must_use]
    pub fn scalar(mut self, graphql: impl Into<String>, target: impl Into<String>) -> Self {
        self.scalars.insert(graphql.into(), target.into());
        self
    }

    /// Adds several scalar mappings.
    #[must_use]
    pub fn scalars<I, K, V>(mut self, mappings: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.scalars
            .extend(mappings.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Builds the scalar table for this configuration.
    #[must_use]
    pub fn scalar_table(&self) -> ScalarTable {
        ScalarTable::new(&self.scalars)
    }
}

/// Scalar lookup table: overrides merged over the built-in mappings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarTable {
    entries: HashMap<String, String>,
}

impl ScalarTable {
    /// Creates a table with the given overrides taking precedence.
    #[must_use]
    pub fn new(overrides: &BTreeMap<String, String>) -> Self {
        let mut entries: HashMap<String, String> = BUILTIN_SCALARS
            .iter()
            .map(|(graphql, target)| ((*graphql).to_string(), (*target).to_string()))
            .collect();
        entries.extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { entries }
    }

    /// Looks up the C# type for a GraphQL scalar.
    #[must_use]
    pub fn get(&self, scalar: &str) -> Option<&str> {
        self.entries.get(scalar).map(String::as_str)
    }
}

impl Default for ScalarTable {
    fn default() -> Self {
        Self::new(&BTreeMap::new())
    }
}
