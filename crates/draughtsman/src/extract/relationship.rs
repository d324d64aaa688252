//! Relationships between extracted classes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Relationship kind between classes
///
/// Composition covers both strict composition and looser aggregation; the
/// rules do not distinguish them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Generalization,
    Composition,
    Association,
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelationKind::Generalization => write!(f, "Generalization"),
            RelationKind::Composition => write!(f, "Composition"),
            RelationKind::Association => write!(f, "Association"),
        }
    }
}

/// A directed relationship between two registered classes
///
/// The label is empty for generalizations, a multiplicity string for
/// compositions (empty when the multiplicity is exactly one), and the verb
/// lemma for associations. Two relationships are the same relationship exactly
/// when all four fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub kind: RelationKind,
    pub target: String,
    #[serde(default)]
    pub label: String,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        kind: RelationKind,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            kind,
            target: target.into(),
            label: label.into(),
        }
    }

    /// Subclass-to-superclass relationship; never labeled
    pub fn generalization(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self::new(source, RelationKind::Generalization, target, "")
    }

    /// Whole-to-part relationship labeled with a multiplicity (or nothing)
    pub fn composition(
        source: impl Into<String>,
        target: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self::new(source, RelationKind::Composition, target, label)
    }

    /// Actor-to-collaborator relationship labeled with the verb lemma
    pub fn association(
        source: impl Into<String>,
        target: impl Into<String>,
        verb: impl Into<String>,
    ) -> Self {
        Self::new(source, RelationKind::Association, target, verb)
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.label.is_empty() {
            write!(f, "{} -{}-> {}", self.source, self.kind, self.target)
        } else {
            write!(
                f,
                "{} -{}({})-> {}",
                self.source, self.kind, self.label, self.target
            )
        }
    }
}
