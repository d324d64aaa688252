//! Lexical sense inventory and the ontology filter
//!
//! Candidate class words are screened against a lexical sense inventory: a
//! word that the inventory knows, but never as a noun, is rejected as a class
//! candidate. Unknown words and failed lookups pass (fail-open): a missing or
//! broken ontology must never block class discovery.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::ModelError;

/// Part of speech of a single lexical sense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensePos {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl SensePos {
    pub fn is_noun(&self) -> bool {
        matches!(self, SensePos::Noun)
    }
}

/// One sense of a word in the lexical inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    pub pos: SensePos,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

impl Sense {
    pub fn new(pos: SensePos) -> Self {
        Self { pos, gloss: None }
    }
}

/// Capability trait for lexical sense lookup
pub trait SenseInventory: Send + Sync {
    /// All senses of `word`; empty when the word is unknown
    fn senses(&self, word: &str) -> Result<Vec<Sense>, ModelError>;

    /// Get the name of this inventory
    fn name(&self) -> &'static str;
}

/// In-memory sense inventory backed by a word-to-senses map
///
/// Stands in for a full lexical database: hosts load the vocabulary they care
/// about from a JSON lexicon (`{"word": ["noun", "verb"], ...}`), and anything
/// outside it passes the filter unexamined.
#[derive(Debug, Clone, Default)]
pub struct StaticSenseInventory {
    entries: HashMap<String, Vec<Sense>>,
}

impl StaticSenseInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the senses of a word
    pub fn insert(&mut self, word: impl Into<String>, senses: Vec<Sense>) {
        self.entries.insert(word.into().to_lowercase(), senses);
    }

    /// Builder-style [`insert`](Self::insert) from bare sense tags
    pub fn with_entry(mut self, word: impl Into<String>, poses: &[SensePos]) -> Self {
        self.insert(word, poses.iter().copied().map(Sense::new).collect());
        self
    }

    /// Load a lexicon from JSON: a map of word to sense-tag list
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let raw: HashMap<String, Vec<SensePos>> = serde_json::from_str(text)
            .map_err(|e| ModelError::parse_error(format!("invalid lexicon JSON: {}", e)))?;

        let mut inventory = Self::new();
        for (word, poses) in raw {
            inventory.insert(word, poses.into_iter().map(Sense::new).collect());
        }
        Ok(inventory)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SenseInventory for StaticSenseInventory {
    fn senses(&self, word: &str) -> Result<Vec<Sense>, ModelError> {
        Ok(self
            .entries
            .get(&word.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Fail-open screen over a sense inventory
///
/// `is_noun_concept` rejects a word only when the inventory positively knows
/// it and none of its senses is a noun sense. Lookup failures are logged and
/// treated as "unknown", which passes.
pub struct OntologyFilter {
    inventory: Box<dyn SenseInventory>,
}

impl OntologyFilter {
    pub fn new(inventory: Box<dyn SenseInventory>) -> Self {
        Self { inventory }
    }

    /// Filter over an empty inventory: every word passes
    pub fn permissive() -> Self {
        Self::new(Box::new(StaticSenseInventory::new()))
    }

    /// Does `word` denote a concrete noun concept?
    pub fn is_noun_concept(&self, word: &str) -> bool {
        match self.inventory.senses(word) {
            Ok(senses) if senses.is_empty() => true,
            Ok(senses) => senses.iter().any(|s| s.pos.is_noun()),
            Err(error) => {
                debug!(word, %error, "sense lookup failed, assuming noun concept");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inventory whose lookups always fail, for exercising the fail-open path
    struct BrokenInventory;

    impl SenseInventory for BrokenInventory {
        fn senses(&self, word: &str) -> Result<Vec<Sense>, ModelError> {
            Err(ModelError::ontology_lookup(word, "backend offline"))
        }

        fn name(&self) -> &'static str {
            "broken"
        }
    }

    #[test]
    fn test_unknown_word_passes() {
        let filter = OntologyFilter::permissive();
        assert!(filter.is_noun_concept("zyzzyva"));
    }

    #[test]
    fn test_noun_sense_passes() {
        let inventory = StaticSenseInventory::new()
            .with_entry("account", &[SensePos::Noun, SensePos::Verb]);
        let filter = OntologyFilter::new(Box::new(inventory));
        assert!(filter.is_noun_concept("account"));
    }

    #[test]
    fn test_non_noun_word_rejected() {
        let inventory = StaticSenseInventory::new().with_entry("quickly", &[SensePos::Adverb]);
        let filter = OntologyFilter::new(Box::new(inventory));
        assert!(!filter.is_noun_concept("quickly"));
    }

    #[test]
    fn test_lookup_failure_is_permissive() {
        let filter = OntologyFilter::new(Box::new(BrokenInventory));
        assert!(filter.is_noun_concept("anything"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let inventory = StaticSenseInventory::new().with_entry("Account", &[SensePos::Noun]);
        assert_eq!(inventory.senses("ACCOUNT").unwrap().len(), 1);
    }

    #[test]
    fn test_lexicon_from_json() {
        let lexicon = r#"{"account": ["noun", "verb"], "quickly": ["adverb"]}"#;
        let inventory = StaticSenseInventory::from_json(lexicon).unwrap();
        assert_eq!(inventory.len(), 2);

        let filter = OntologyFilter::new(Box::new(inventory));
        assert!(filter.is_noun_concept("account"));
        assert!(!filter.is_noun_concept("quickly"));
    }

    #[test]
    fn test_lexicon_rejects_bad_json() {
        let err = StaticSenseInventory::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, ModelError::ParseError { .. }));
    }
}
