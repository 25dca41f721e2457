//! Type index for code generation.
//!
//! This module provides name-based lookups over the flat type list of an
//! introspection response. The index is built once per generation run and is
//! read-only afterwards.

use crate::types::{SchemaType, TypeKind};
use std::collections::{HashMap, HashSet};

/// Lookup structures over the schema types of one introspection response.
#[derive(Debug, Clone)]
pub struct TypeIndex<'a> {
    /// Types in response order.
    types: &'a [SchemaType],
    /// Types keyed by name.
    by_name: HashMap<&'a str, &'a SchemaType>,
    /// Union names keyed by member object name, in union declaration order.
    unions_by_member: HashMap<&'a str, Vec<&'a str>>,
}

impl<'a> TypeIndex<'a> {
    /// Builds the index from the response type list.
    #[must_use]
    pub fn new(types: &'a [SchemaType]) -> Self {
        let mut by_name = HashMap::with_capacity(types.len());
        for ty in types {
            let Some(name) = ty.name() else {
                continue;
            };
            if by_name.contains_key(name) {
                tracing::warn!("Duplicate type '{}' in schema, keeping first definition", name);
                continue;
            }
            by_name.insert(name, ty);
        }

        let mut unions_by_member: HashMap<&'a str, Vec<&'a str>> = HashMap::new();
        for union in types.iter().filter(|t| t.kind == TypeKind::Union) {
            let Some(union_name) = union.name() else {
                continue;
            };
            if !by_name
                .get(union_name)
                .is_some_and(|first: &&SchemaType| std::ptr::eq(*first, union))
            {
                continue;
            }
            let mut seen = HashSet::new();
            for member in union.possible_types().iter().filter_map(SchemaType::name) {
                if seen.insert(member) {
                    let unions = unions_by_member.entry(member).or_default();
                    if !unions.contains(&union_name) {
                        unions.push(union_name);
                    }
                }
            }
        }

        Self {
            types,
            by_name,
            unions_by_member,
        }
    }

    /// Returns the types in response order.
    #[must_use]
    pub const fn types(&self) -> &'a [SchemaType] {
        self.types
    }

    /// Gets a type by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a SchemaType> {
        self.by_name.get(name).copied()
    }

    /// Returns true if `ty` is the definition kept for its name.
    ///
    /// Unnamed types and later duplicates of a name are not kept.
    #[must_use]
    pub fn is_canonical(&self, ty: &SchemaType) -> bool {
        ty.name()
            .and_then(|name| self.get(name))
            .is_some_and(|kept| std::ptr::eq(kept, ty))
    }

    /// Returns the number of distinct named types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if the index holds no named type.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Returns the unions listing the given object type as a possible type.
    #[must_use]
    pub fn unions_for(&self, object_name: &str) -> &[&'a str] {
        self.unions_by_member
            .get(object_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the full definitions of a type's possible types.
    ///
    /// Entries naming a type absent from the index are dropped, as are
    /// repeated names. Order follows the `possibleTypes` list.
    #[must_use]
    pub fn possible_types(&self, ty: &SchemaType) -> Vec<&'a SchemaType> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::new();

        for name in ty.possible_types().iter().filter_map(SchemaType::name) {
            if !seen.insert(name) {
                tracing::trace!("Skipping duplicate possible type '{}'", name);
                continue;
            }
            match self.get(name) {
                Some(member) => resolved.push(member),
                None => tracing::trace!("Skipping unknown possible type '{}'", name),
            }
        }

        resolved
    }
}
