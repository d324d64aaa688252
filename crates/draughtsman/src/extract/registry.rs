//! Class registry
//!
//! The mutable store of classes discovered during one `process` call. Each
//! entry holds a set of attribute names and a set of method names; insertion
//! order is irrelevant within a set. The registry is cleared at the start of
//! every call, never between rules.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Canonical class name for a lemma: first character uppercased, remainder
/// preserved ("account" becomes "Account", "BankSystem" stays "BankSystem").
pub fn canonical_name(lemma: &str) -> String {
    let mut chars = lemma.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Attribute and method sets of one registered class
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub attributes: BTreeSet<String>,
    pub methods: BTreeSet<String>,
}

impl ClassEntry {
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty() && self.methods.is_empty()
    }
}

/// Registry of discovered classes, keyed by canonical name
#[derive(Debug, Clone, Default)]
pub struct ClassRegistry {
    entries: BTreeMap<String, ClassEntry>,
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class. Idempotent: an existing entry is never overwritten.
    pub fn register(&mut self, name: &str) {
        self.entries.entry(name.to_string()).or_default();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Record an attribute on a registered class. No-op when the class is
    /// absent; callers register endpoints before attaching members.
    pub fn add_attribute(&mut self, class: &str, attribute: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(class) {
            entry.attributes.insert(attribute.into());
        }
    }

    /// Record a method on a registered class. No-op when the class is absent.
    pub fn add_method(&mut self, class: &str, method: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(class) {
            entry.methods.insert(method.into());
        }
    }

    pub fn get(&self, name: &str) -> Option<&ClassEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ClassEntry)> {
        self.entries.iter()
    }

    /// Registered class names, in name order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Drop all entries. Called at the start of each `process` invocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Snapshot the registry as a plain name-to-entry map
    pub fn to_map(&self) -> BTreeMap<String, ClassEntry> {
        self.entries.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name("account"), "Account");
        assert_eq!(canonical_name("BankSystem"), "BankSystem");
        assert_eq!(canonical_name("bankSystem"), "BankSystem");
        assert_eq!(canonical_name(""), "");
    }

    #[test]
    fn test_register_and_contains() {
        let mut registry = ClassRegistry::new();
        registry.register("Account");

        assert!(registry.contains("Account"));
        assert!(!registry.contains("Customer"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = ClassRegistry::new();
        registry.register("Account");
        registry.add_attribute("Account", "balance");
        registry.add_method("Account", "close");

        // Re-registering must not wipe the accumulated members
        registry.register("Account");

        let entry = registry.get("Account").unwrap();
        assert!(entry.attributes.contains("balance"));
        assert!(entry.methods.contains("close"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_member_add_requires_registration() {
        let mut registry = ClassRegistry::new();
        registry.add_attribute("Ghost", "x");
        registry.add_method("Ghost", "y");

        assert!(!registry.contains("Ghost"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_member_sets_deduplicate() {
        let mut registry = ClassRegistry::new();
        registry.register("Car");
        registry.add_attribute("Car", "engine");
        registry.add_attribute("Car", "engine");
        registry.add_method("Car", "drive");
        registry.add_method("Car", "drive");

        let entry = registry.get("Car").unwrap();
        assert_eq!(entry.attributes.len(), 1);
        assert_eq!(entry.methods.len(), 1);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut registry = ClassRegistry::new();
        registry.register("Account");
        registry.register("Customer");
        registry.clear();

        assert!(registry.is_empty());
        assert!(!registry.contains("Account"));
    }

    #[test]
    fn test_names_in_order() {
        let mut registry = ClassRegistry::new();
        registry.register("Customer");
        registry.register("Account");

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Account", "Customer"]);
    }
}
