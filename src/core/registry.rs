use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::core::boring2d::Boring2D;
use crate::core::definitions::{Error, Result};
use crate::core::engine::RuleSet;
use crate::core::hyperboard::Hyperboard;

pub type RuleSetConstructor = fn() -> Arc<dyn RuleSet>;

/// Name → constructor table used to bring a rule set back from a stored or
/// transmitted name.
///
/// Build one at startup, then share it behind an `Arc`; lookups take `&self`
/// and need no locking. Registering a name twice replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    constructors: HashMap<String, RuleSetConstructor>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Registry knowing every rule set this crate ships.
    pub fn with_defaults() -> Self {
        let mut registry = Registry::new();
        registry.register(Boring2D::NAME, || Arc::new(Boring2D));
        registry.register(Hyperboard::NAME, || Arc::new(Hyperboard));
        registry
    }

    pub fn register(&mut self, name: &str, constructor: RuleSetConstructor) {
        if self.constructors.insert(name.to_string(), constructor).is_some() {
            debug!("Rule set '{}' registered again, previous entry replaced", name);
        } else {
            debug!("Registered rule set '{}'", name);
        }
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn RuleSet>> {
        self.constructors
            .get(name)
            .map(|constructor| constructor())
            .ok_or_else(|| Error::UnknownRuleSet(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
