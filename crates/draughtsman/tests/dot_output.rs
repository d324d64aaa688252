//! DOT serialization of extracted models, end to end

mod common;

use draughtsman::core::ParsedDocument;
use draughtsman::emit::{DiagramGraph, DotWriter};
use draughtsman::extract_model;

use common::*;

fn bank_scenario_dot() -> String {
    let doc = ParsedDocument::from_sentences(vec![
        bank_contains_accounts(),
        account_owned_by_customer(),
        administrator_manages_system(),
    ]);
    let model = extract_model(&doc);
    DotWriter::new().write(&DiagramGraph::from_model(&model))
}

#[test]
fn dot_carries_layout_preferences() {
    let dot = bank_scenario_dot();
    assert!(dot.contains("rankdir=BT"));
    assert!(dot.contains("splines=ortho"));
}

#[test]
fn dot_has_one_record_node_per_class() {
    let dot = bank_scenario_dot();
    for class in ["Account", "Administrator", "BankSystem", "Customer", "System"] {
        assert!(
            dot.contains(&format!("\"{}\" [label=", class)),
            "missing node for {}",
            class
        );
    }
    assert!(dot.contains("shape=record"));
}

#[test]
fn dot_styles_edges_by_relationship_kind() {
    let dot = bank_scenario_dot();

    // Composition: diamond tail, no head, multiplicity label
    assert!(dot.contains(
        r#""BankSystem" -> "Account" [dir=both, arrowtail=diamond, arrowhead=none, label="1..*"];"#
    ));
    // Associations: vee head, verb label
    assert!(dot.contains(r#""Customer" -> "Account" [arrowhead=vee, label="own"];"#));
    assert!(dot.contains(r#""Administrator" -> "System" [arrowhead=vee, label="manage"];"#));
}

#[test]
fn dot_keeps_empty_compartments() {
    let dot = bank_scenario_dot();
    // BankSystem has neither attributes nor methods in this scenario
    assert!(dot.contains(r#""BankSystem" [label="{ BankSystem |  |  }"]"#));
    // Customer has a method compartment only
    assert!(dot.contains(r#""Customer" [label="{ Customer |  | + own()\l }"]"#));
}

#[test]
fn generalization_edge_suppresses_label() {
    let doc = ParsedDocument::from_sentences(vec![dog_is_animal(), animal_chases_cat()]);
    let model = extract_model(&doc);
    let dot = DotWriter::new().write(&DiagramGraph::from_model(&model));

    assert!(dot.contains(r#""Dog" -> "Animal" [arrowhead=onormal, label=""];"#));
}
