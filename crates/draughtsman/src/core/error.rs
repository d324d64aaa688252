//! Core error types for model extraction
//!
//! This module defines the common error types used throughout the extraction pipeline.

use thiserror::Error;

/// Core error types for extraction-pipeline operations
#[derive(Error, Debug)]
pub enum ModelError {
    /// A long-lived collaborator (parser, sense inventory) is missing or failed
    /// to initialize. Fatal for the session: `process` refuses to run.
    #[error("Resource unavailable: {resource}: {reason}")]
    ResourceUnavailable { resource: String, reason: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// A sense-inventory lookup failed. Converted to a permissive result inside
    /// the ontology filter and never surfaced through `process`.
    #[error("Ontology lookup failed for '{word}': {reason}")]
    OntologyLookup { word: String, reason: String },

    #[error("Processing error: {message}")]
    ProcessingError { message: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl ModelError {
    /// Create a new resource-unavailable error
    pub fn resource_unavailable(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ResourceUnavailable {
            resource: resource.into(),
            reason: reason.into(),
        }
    }

    /// Create a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// Create a new ontology-lookup error
    pub fn ontology_lookup(word: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::OntologyLookup {
            word: word.into(),
            reason: reason.into(),
        }
    }

    /// Create a new processing error
    pub fn processing_error(message: impl Into<String>) -> Self {
        Self::ProcessingError {
            message: message.into(),
        }
    }
}
