//! Renderer-agnostic diagram description
//!
//! Converts a [`ClassModel`] into a structured graph: one record-shaped node
//! per class with three compartments, one styled edge per relationship. The
//! external renderer consumes this description; nothing here draws anything.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::extract::{ClassModel, RelationKind};

/// Arrowhead shape at the target end of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowHead {
    None,
    /// Plain open arrow
    Vee,
    /// Open triangle, the UML generalization marker
    HollowTriangle,
}

impl ArrowHead {
    pub fn as_dot(&self) -> &'static str {
        match self {
            ArrowHead::None => "none",
            ArrowHead::Vee => "vee",
            ArrowHead::HollowTriangle => "onormal",
        }
    }
}

/// Arrowtail shape at the source end of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrowTail {
    None,
    /// Filled diamond, the UML whole-part marker
    FilledDiamond,
}

impl ArrowTail {
    pub fn as_dot(&self) -> &'static str {
        match self {
            ArrowTail::None => "none",
            ArrowTail::FilledDiamond => "diamond",
        }
    }
}

/// Which ends of an edge carry decoration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeDirection {
    Forward,
    Both,
}

/// Rank direction of the diagram layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankDirection {
    TopBottom,
    #[default]
    BottomTop,
    LeftRight,
    RightLeft,
}

impl RankDirection {
    pub fn as_dot(&self) -> &'static str {
        match self {
            RankDirection::TopBottom => "TB",
            RankDirection::BottomTop => "BT",
            RankDirection::LeftRight => "LR",
            RankDirection::RightLeft => "RL",
        }
    }
}

impl fmt::Display for RankDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_dot())
    }
}

/// Layout preferences carried with the graph; a rendering hint, not a
/// correctness requirement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutHints {
    pub rank_direction: RankDirection,
    pub orthogonal_edges: bool,
    pub node_separation: f32,
    pub rank_separation: f32,
}

impl Default for LayoutHints {
    fn default() -> Self {
        Self {
            rank_direction: RankDirection::BottomTop,
            orthogonal_edges: true,
            node_separation: 0.8,
            rank_separation: 0.8,
        }
    }
}

/// A record-shaped class node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramNode {
    pub name: String,
    pub attributes: Vec<String>,
    pub methods: Vec<String>,
}

impl DiagramNode {
    /// The three compartments as display text: class name, "- " prefixed
    /// attributes, "+ " prefixed methods with call parentheses. Empty
    /// compartments are empty strings, never omitted.
    pub fn compartments(&self) -> [String; 3] {
        let attributes = self
            .attributes
            .iter()
            .map(|a| format!("- {}", a))
            .collect::<Vec<_>>()
            .join("\n");
        let methods = self
            .methods
            .iter()
            .map(|m| format!("+ {}()", m))
            .collect::<Vec<_>>()
            .join("\n");
        [self.name.clone(), attributes, methods]
    }
}

/// A styled edge between two class nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub from: String,
    pub to: String,
    pub head: ArrowHead,
    pub tail: ArrowTail,
    pub direction: EdgeDirection,
    pub label: String,
}

/// The complete diagram description handed to the renderer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramGraph {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
    pub layout: LayoutHints,
}

impl DiagramGraph {
    /// Build the diagram description from an extracted class model
    ///
    /// Arrow styling is keyed by relationship kind: generalizations get a
    /// hollow triangle head and no label, compositions a filled diamond tail
    /// with the multiplicity as label, associations a vee head with the verb
    /// as label.
    pub fn from_model(model: &ClassModel) -> Self {
        let nodes = model
            .classes
            .iter()
            .map(|(name, entry)| DiagramNode {
                name: name.clone(),
                attributes: entry.attributes.iter().cloned().collect(),
                methods: entry.methods.iter().cloned().collect(),
            })
            .collect();

        let edges = model
            .relationships
            .iter()
            .map(|rel| {
                let (head, tail, direction) = match rel.kind {
                    RelationKind::Generalization => {
                        (ArrowHead::HollowTriangle, ArrowTail::None, EdgeDirection::Forward)
                    }
                    RelationKind::Composition => {
                        (ArrowHead::None, ArrowTail::FilledDiamond, EdgeDirection::Both)
                    }
                    RelationKind::Association => {
                        (ArrowHead::Vee, ArrowTail::None, EdgeDirection::Forward)
                    }
                };
                DiagramEdge {
                    from: rel.source.clone(),
                    to: rel.target.clone(),
                    head,
                    tail,
                    direction,
                    // Generalization edges never carry text
                    label: if rel.kind == RelationKind::Generalization {
                        String::new()
                    } else {
                        rel.label.clone()
                    },
                }
            })
            .collect();

        Self {
            nodes,
            edges,
            layout: LayoutHints::default(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
