//! Dependency-parser capability trait
//!
//! The engine is parameterized over an abstract parser so any conformant
//! tagger/dependency-parser can be substituted. Two implementations ship with
//! the library: [`JsonDocParser`] for hosts that run a real analyzer out of
//! process and hand over its output as JSON, and [`FixtureParser`], a canned
//! text-to-document map for deterministic tests.

use std::collections::HashMap;

use super::error::ModelError;
use super::token::ParsedDocument;

/// Capability trait for producing dependency parses of raw text
pub trait DependencyParser: Send + Sync {
    /// Parse raw text into an annotated document
    fn parse(&self, text: &str) -> Result<ParsedDocument, ModelError>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;
}

/// Parser adapter for pre-analyzed input: the "text" it receives is a
/// JSON-serialized [`ParsedDocument`] produced by an external analyzer.
#[derive(Debug, Default)]
pub struct JsonDocParser;

impl JsonDocParser {
    pub fn new() -> Self {
        Self
    }
}

impl DependencyParser for JsonDocParser {
    fn parse(&self, text: &str) -> Result<ParsedDocument, ModelError> {
        serde_json::from_str(text)
            .map_err(|e| ModelError::parse_error(format!("invalid parsed-document JSON: {}", e)))
    }

    fn name(&self) -> &'static str {
        "json-doc"
    }
}

/// Canned parser mapping exact input strings to prebuilt documents
///
/// The test double called for by the parser contract: unit tests register the
/// parses they need and get fully deterministic behavior with no model loading.
#[derive(Debug, Default)]
pub struct FixtureParser {
    documents: HashMap<String, ParsedDocument>,
}

impl FixtureParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned parse for the given input text
    pub fn with_document(mut self, text: impl Into<String>, document: ParsedDocument) -> Self {
        self.documents.insert(text.into(), document);
        self
    }

    pub fn insert(&mut self, text: impl Into<String>, document: ParsedDocument) {
        self.documents.insert(text.into(), document);
    }
}

impl DependencyParser for FixtureParser {
    fn parse(&self, text: &str) -> Result<ParsedDocument, ModelError> {
        self.documents
            .get(text)
            .cloned()
            .ok_or_else(|| ModelError::parse_error(format!("no fixture registered for input: {:?}", text)))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
