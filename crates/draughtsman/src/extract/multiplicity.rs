//! Multiplicity inference
//!
//! Infers the UML multiplicity of a relationship end from the syntactic
//! children of the object noun. Explicit quantifier words signal "at least
//! one"; bare morphological plurality signals "possibly zero". The quantifier
//! check has priority across the whole child set, not per child.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::ParsedSentence;

/// Quantifier words that force a `1..*` multiplicity
pub const QUANTIFIER_WORDS: [&str; 6] = ["many", "multiple", "list", "set", "all", "collection"];

/// UML multiplicity of a relationship end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplicity {
    /// Exactly one
    #[default]
    #[serde(rename = "1")]
    One,
    /// Zero or more
    #[serde(rename = "0..*")]
    ZeroOrMore,
    /// One or more
    #[serde(rename = "1..*")]
    OneOrMore,
}

impl Multiplicity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Multiplicity::One => "1",
            Multiplicity::ZeroOrMore => "0..*",
            Multiplicity::OneOrMore => "1..*",
        }
    }

    pub fn is_single(&self) -> bool {
        matches!(self, Multiplicity::One)
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Infer the multiplicity of the noun at `index` from its direct children
///
/// First pass: any child whose lowercased surface text is a quantifier word
/// yields `1..*` immediately. Second pass, only if no quantifier was found:
/// any child carrying a plural-noun tag yields `0..*`. Otherwise `1`.
pub fn infer_multiplicity(sentence: &ParsedSentence, index: usize) -> Multiplicity {
    for (_, child) in sentence.children(index) {
        if QUANTIFIER_WORDS.contains(&child.text.to_lowercase().as_str()) {
            return Multiplicity::OneOrMore;
        }
    }

    for (_, child) in sentence.children(index) {
        if child.is_plural_noun() {
            return Multiplicity::ZeroOrMore;
        }
    }

    Multiplicity::One
}
