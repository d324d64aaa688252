//! Diagram description emission
//!
//! Converts extracted class models into a structured, renderer-agnostic graph
//! description, and serializes that description as Graphviz DOT text.

mod dot;
mod graph;

pub use dot::DotWriter;
pub use graph::{
    ArrowHead, ArrowTail, DiagramEdge, DiagramGraph, DiagramNode, EdgeDirection, LayoutHints,
    RankDirection,
};
