//! The extraction engine
//!
//! Owns the injected collaborators (dependency parser, sense inventory) and
//! drives the rule table over parsed documents. Engine state is instance
//! scoped and reset on every `process` entry; one engine must not be shared
//! across concurrent callers without external locking.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, span, Level};

use crate::core::{
    DependencyParser, ModelError, OntologyFilter, ParsedDocument, SenseInventory,
};

use super::registry::{ClassEntry, ClassRegistry};
use super::relationship::Relationship;
use super::rules::{standard_rules, ExtractionRule, ExtractionState, RuleCtx, RulePhase};

/// Snapshot of one extraction run: classes with their members, plus the
/// deduplicated relationship sequence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassModel {
    pub classes: BTreeMap<String, ClassEntry>,
    pub relationships: Vec<Relationship>,
}

impl ClassModel {
    /// Class names in name order
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.relationships.is_empty()
    }
}

/// Rule-driven extractor from parsed requirement text to a [`ClassModel`]
///
/// Collaborators are injected at construction; the engine itself performs no
/// I/O and loads no models. Input that parses but matches no rule yields an
/// empty model, which is a valid result, not an error.
pub struct ExtractionEngine {
    parser: Option<Box<dyn DependencyParser>>,
    filter: OntologyFilter,
    rules: Vec<Box<dyn ExtractionRule>>,
    state: ExtractionState,
}

impl ExtractionEngine {
    /// Engine over a dependency parser and a sense inventory
    pub fn new(parser: Box<dyn DependencyParser>, inventory: Box<dyn SenseInventory>) -> Self {
        Self {
            parser: Some(parser),
            filter: OntologyFilter::new(inventory),
            rules: standard_rules(),
            state: ExtractionState::default(),
        }
    }

    /// Engine without a parser: only [`process_document`](Self::process_document)
    /// is available; [`process`](Self::process) reports the parser as an
    /// unavailable resource.
    pub fn without_parser(inventory: Box<dyn SenseInventory>) -> Self {
        Self {
            parser: None,
            filter: OntologyFilter::new(inventory),
            rules: standard_rules(),
            state: ExtractionState::default(),
        }
    }

    /// Extract a class model from raw requirement text
    ///
    /// Internal state is reset on entry, so a failed call never leaks partial
    /// results into the next one.
    pub fn process(&mut self, text: &str) -> Result<ClassModel, ModelError> {
        let process_span = span!(Level::INFO, "process_requirements", input_len = text.len());
        let _enter = process_span.enter();

        self.state.clear();

        let parser = self.parser.as_ref().ok_or_else(|| {
            ModelError::resource_unavailable("parser", "no dependency parser configured")
        })?;

        let document = parser.parse(text)?;
        debug!(
            parser = parser.name(),
            sentences = document.sentences.len(),
            tokens = document.token_count(),
            "document parsed"
        );

        Ok(self.run(&document))
    }

    /// Extract a class model from an already parsed document
    pub fn process_document(&mut self, document: &ParsedDocument) -> ClassModel {
        let process_span = span!(
            Level::INFO,
            "process_document",
            tokens = document.token_count()
        );
        let _enter = process_span.enter();

        self.state.clear();
        self.run(document)
    }

    /// The classes discovered by the most recent run
    pub fn registry(&self) -> &ClassRegistry {
        &self.state.registry
    }

    /// The deduplicated relationships of the most recent run
    pub fn relationships(&self) -> &[Relationship] {
        &self.state.relationships
    }

    fn run(&mut self, document: &ParsedDocument) -> ClassModel {
        // Pass 1: class discovery over the whole document, so relationship
        // rules see every independently identified class no matter where it
        // appears in the text.
        self.run_phase(document, |phase| phase == RulePhase::Registration);

        // Pass 2: relationship rules; the chain rules are mutually exclusive
        // per token, the independent rules always fire.
        self.run_phase(document, |phase| phase != RulePhase::Registration);

        let relationships = dedup_relationships(std::mem::take(&mut self.state.relationships));
        // The accessors must reflect the deduplicated sequence, not the raw one
        self.state.relationships = relationships.clone();

        let model = ClassModel {
            classes: self.state.registry.to_map(),
            relationships,
        };
        info!(
            classes = model.classes.len(),
            relationships = model.relationships.len(),
            "extraction finished"
        );
        model
    }

    fn run_phase(&mut self, document: &ParsedDocument, include: impl Fn(RulePhase) -> bool) {
        for sentence in &document.sentences {
            for index in 0..sentence.len() {
                let ctx = RuleCtx {
                    sentence,
                    index,
                    filter: &self.filter,
                };
                let mut chain_consumed = false;
                for rule in &self.rules {
                    let phase = rule.phase();
                    if !include(phase) {
                        continue;
                    }
                    if phase == RulePhase::RelationChain && chain_consumed {
                        continue;
                    }
                    if rule.matches(&ctx) {
                        rule.apply(&ctx, &mut self.state);
                        if phase == RulePhase::RelationChain {
                            chain_consumed = true;
                        }
                    }
                }
            }
        }
    }
}

/// Drop exact-duplicate relationships, keeping first-occurrence order
fn dedup_relationships(relationships: Vec<Relationship>) -> Vec<Relationship> {
    let mut seen = HashSet::new();
    relationships
        .into_iter()
        .filter(|rel| seen.insert(rel.clone()))
        .collect()
}
