//! Draughtsman - Extract UML class models from parsed requirement text
//!
//! A library that turns dependency-parsed natural-language requirement
//! sentences into a UML-style class diagram description: candidate classes,
//! relationships (generalization, composition, association), attributes and
//! methods, emitted as a structured graph or as Graphviz DOT text.
//!
//! Parsing itself is delegated to an external analyzer behind the
//! [`DependencyParser`](core::DependencyParser) capability trait; the engine
//! consumes annotated tokens and never touches raw grammar.
//!
//! # Quick Start
//!
//! ```rust
//! use draughtsman::core::{DepLabel, ParsedDocument, PosTag, SentenceBuilder};
//!
//! // "The Administrator manages the System." as its dependency parse
//! let sentence = SentenceBuilder::new()
//!     .token("Administrator", "administrator", PosTag::Noun, "NN", DepLabel::Nsubj, 1)
//!     .token("manages", "manage", PosTag::Verb, "VBZ", DepLabel::Root, 1)
//!     .token("System", "system", PosTag::Noun, "NN", DepLabel::Dobj, 1)
//!     .build();
//! let doc = ParsedDocument::from_sentences(vec![sentence]);
//!
//! let model = draughtsman::extract_model(&doc);
//! assert_eq!(model.classes.len(), 2);
//! assert_eq!(model.relationships.len(), 1);
//!
//! let dot = draughtsman::extract_to_dot(&doc);
//! assert!(dot.contains("digraph"));
//! ```
//!
//! # Advanced Usage
//!
//! For control over the collaborators, construct the engine explicitly:
//!
//! ```rust
//! use draughtsman::core::{JsonDocParser, SensePos, StaticSenseInventory};
//! use draughtsman::extract::ExtractionEngine;
//!
//! let lexicon = StaticSenseInventory::new()
//!     .with_entry("account", &[SensePos::Noun, SensePos::Verb]);
//! let mut engine = ExtractionEngine::new(Box::new(JsonDocParser::new()), Box::new(lexicon));
//!
//! // `process` takes a JSON-serialized ParsedDocument through JsonDocParser
//! let model = engine.process(r#"{"sentences": []}"#).unwrap();
//! assert!(model.is_empty());
//! ```

pub mod core;
pub mod emit;
pub mod eval;
pub mod extract;

pub use core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        DepLabel, DependencyParser, FixtureParser, JsonDocParser, ModelError, OntologyFilter,
        ParsedDocument, ParsedSentence, PosTag, Sense, SenseInventory, SensePos, SentenceBuilder,
        StaticSenseInventory, Token,
    };
    pub use crate::emit::{DiagramGraph, DotWriter};
    pub use crate::extract::{
        ClassEntry, ClassModel, ClassRegistry, ExtractionEngine, Multiplicity, RelationKind,
        Relationship,
    };
}

/// Extract a class model from a parsed document with a permissive ontology
///
/// This is the simplest way to run the extraction rules: every candidate word
/// passes the ontology filter, as if the sense inventory were empty.
pub fn extract_model(document: &core::ParsedDocument) -> extract::ClassModel {
    let mut engine =
        extract::ExtractionEngine::without_parser(Box::new(core::StaticSenseInventory::new()));
    engine.process_document(document)
}

/// Extract a class model from a parsed document and serialize it as DOT
///
/// Convenience wrapper around [`extract_model`], the diagram emitter, and the
/// DOT writer.
pub fn extract_to_dot(document: &core::ParsedDocument) -> String {
    let model = extract_model(document);
    let graph = emit::DiagramGraph::from_model(&model);
    emit::DotWriter::new().write(&graph)
}
