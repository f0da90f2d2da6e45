//! Name-keyed service dependency graph
//!
//! Keys keep insertion order, which is the order the cycle search tries start
//! nodes in and the order accessors are emitted in. Dependency tokens are stored
//! raw; a token is an edge only if it names another key of the graph.

mod builder;
mod cycle;

pub use builder::{AliasDirective, GraphBuilder};
pub use cycle::{Cycle, CycleFinder};

use crate::descriptor::ServiceDescriptor;
use crate::error::{Result, WireError};
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ServiceGraph {
    services: IndexMap<String, ServiceDescriptor>,
}

impl ServiceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor under its name; a taken name is an error.
    pub fn insert(&mut self, descriptor: ServiceDescriptor) -> Result<()> {
        if let Some(existing) = self.services.get(&descriptor.name) {
            return Err(WireError::DuplicateServiceName {
                name: descriptor.name.clone(),
                first: existing.source_path.clone(),
                second: descriptor.source_path.clone(),
            });
        }
        self.services.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Service names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    /// Descriptors in insertion order
    pub fn services(&self) -> impl Iterator<Item = &ServiceDescriptor> {
        self.services.values()
    }

    /// Dependency tokens of `name` that are themselves graph keys
    pub fn edges<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.services
            .get(name)
            .map(|d| d.dependencies.as_slice())
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .filter(move |dep| self.services.contains_key(*dep))
    }
}
