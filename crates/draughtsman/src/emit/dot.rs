//! DOT serialization of the diagram description
//!
//! Writes a [`DiagramGraph`] as a Graphviz digraph so the model can be
//! inspected as text and handed to any DOT-consuming renderer. Class nodes use
//! the record shape with the three compartments separated by `|`.

use std::fmt::Write as _;

use super::graph::{ArrowTail, DiagramGraph, EdgeDirection};

/// Writer from diagram descriptions to DOT source text
#[derive(Debug, Default)]
pub struct DotWriter;

impl DotWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the graph as a Graphviz digraph
    pub fn write(&self, graph: &DiagramGraph) -> String {
        let mut out = String::new();

        out.push_str("digraph model {\n");
        let _ = writeln!(
            out,
            "    rankdir={} splines={} nodesep={} ranksep={};",
            graph.layout.rank_direction.as_dot(),
            if graph.layout.orthogonal_edges {
                "ortho"
            } else {
                "spline"
            },
            graph.layout.node_separation,
            graph.layout.rank_separation,
        );
        out.push_str(
            "    node [shape=record, style=filled, fillcolor=\"#FEFECE\", \
             fontname=\"Helvetica\", fontsize=12];\n",
        );

        for node in &graph.nodes {
            let [name, attributes, methods] = node.compartments();
            let label = format!(
                "{{ {} | {} | {} }}",
                escape_record(&name),
                record_lines(&attributes),
                record_lines(&methods),
            );
            let _ = writeln!(out, "    \"{}\" [label=\"{}\"];", escape_id(&node.name), label);
        }

        for edge in &graph.edges {
            let mut attrs = Vec::new();
            if edge.direction == EdgeDirection::Both {
                attrs.push("dir=both".to_string());
            }
            if edge.tail != ArrowTail::None {
                attrs.push(format!("arrowtail={}", edge.tail.as_dot()));
            }
            attrs.push(format!("arrowhead={}", edge.head.as_dot()));
            attrs.push(format!("label=\"{}\"", escape_id(&edge.label)));

            let _ = writeln!(
                out,
                "    \"{}\" -> \"{}\" [{}];",
                escape_id(&edge.from),
                escape_id(&edge.to),
                attrs.join(", "),
            );
        }

        out.push_str("}\n");
        out
    }
}

/// Convert a newline-joined compartment into left-justified record lines
/// (each line terminated by the DOT `\l` escape); empty compartments stay empty
fn record_lines(compartment: &str) -> String {
    if compartment.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for line in compartment.lines() {
        out.push_str(&escape_record(line));
        out.push_str("\\l");
    }
    out
}

/// Escape text for use inside a double-quoted DOT string
fn escape_id(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape text for use inside a record label, where braces, pipes, and angle
/// brackets are structural
fn escape_record(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '{' | '}' | '|' | '<' | '>' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
