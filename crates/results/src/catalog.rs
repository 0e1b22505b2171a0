//! Catalog of the named security patterns a run may evaluate
//!
//! Descriptors only: the analyzers implementing these checks live elsewhere.
//! The catalog gives orchestrators and report generators one place to look
//! up what a pattern identifier means and how much weight a violation of it
//! carries. Checks can be added without touching the aggregation
//! infrastructure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{PatternId, Severity};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDescriptor {
    pub id: PatternId,
    pub name: String,
    pub description: String,
    pub severity: Severity,
}

impl PatternDescriptor {
    pub fn new(
        id: PatternId,
        name: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            severity,
        }
    }
}

pub struct PatternCatalog {
    patterns: HashMap<PatternId, PatternDescriptor>,
}

impl PatternCatalog {
    pub fn new() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    pub fn register(&mut self, descriptor: PatternDescriptor) {
        self.patterns.insert(descriptor.id.clone(), descriptor);
    }

    pub fn get(&self, id: &PatternId) -> Option<&PatternDescriptor> {
        self.patterns.get(id)
    }

    pub fn all(&self) -> Vec<&PatternDescriptor> {
        self.patterns.values().collect()
    }

    pub fn by_severity(&self, severity: Severity) -> Vec<&PatternDescriptor> {
        self.patterns
            .values()
            .filter(|p| p.severity == severity)
            .collect()
    }

    pub fn list_ids(&self) -> Vec<PatternId> {
        self.patterns.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PatternCatalogBuilder {
    catalog: PatternCatalog,
}

impl PatternCatalogBuilder {
    pub fn new() -> Self {
        Self {
            catalog: PatternCatalog::new(),
        }
    }

    pub fn with_pattern(mut self, descriptor: PatternDescriptor) -> Self {
        self.catalog.register(descriptor);
        self
    }

    /// Seeds the built-in pattern set.
    pub fn with_defaults(mut self) -> Self {
        for descriptor in builtin_patterns() {
            self.catalog.register(descriptor);
        }
        self
    }

    pub fn build(self) -> PatternCatalog {
        self.catalog
    }
}

impl Default for PatternCatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin(id: &str, name: &str, description: &str, severity: Severity) -> PatternDescriptor {
    // ids here are static literals, so construction cannot fail
    PatternDescriptor::new(
        PatternId::new(id).expect("builtin pattern id"),
        name,
        description,
        severity,
    )
}

fn builtin_patterns() -> Vec<PatternDescriptor> {
    vec![
        builtin(
            "reentrancy",
            "Reentrancy",
            "External call before state update allows reentrant execution",
            Severity::Critical,
        ),
        builtin(
            "integer-overflow",
            "Integer Overflow",
            "Unchecked arithmetic may wrap around",
            Severity::High,
        ),
        builtin(
            "tx-origin",
            "tx.origin Authentication",
            "Authorization via tx.origin is phishable",
            Severity::Medium,
        ),
        builtin(
            "unchecked-return",
            "Unchecked Return Value",
            "Low-level call result is never inspected",
            Severity::Medium,
        ),
        builtin(
            "timestamp-dependence",
            "Timestamp Dependence",
            "Control flow depends on miner-influenced block time",
            Severity::Low,
        ),
        builtin(
            "dos-gas-limit",
            "Gas Limit DoS",
            "Unbounded loop can exceed the block gas limit",
            Severity::Medium,
        ),
        builtin(
            "access-control",
            "Missing Access Control",
            "State-changing function lacks an authorization check",
            Severity::High,
        ),
        builtin(
            "dangerous-delegatecall",
            "Dangerous Delegatecall",
            "Delegatecall target is attacker-influenced",
            Severity::Critical,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_registered_and_addressable() {
        let catalog = PatternCatalogBuilder::new().with_defaults().build();

        assert_eq!(catalog.len(), 8);

        let reentrancy = PatternId::new("reentrancy").unwrap();
        let descriptor = catalog.get(&reentrancy).unwrap();
        assert_eq!(descriptor.severity, Severity::Critical);
    }
}
