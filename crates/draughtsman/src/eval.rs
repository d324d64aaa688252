//! Extraction quality metrics
//!
//! Compares detected class names against a ground-truth list and reports
//! precision, recall, and F1. Pure set arithmetic over case-folded names;
//! no part of the extraction engine depends on this module.

use std::collections::BTreeSet;

use serde::Serialize;

/// Precision/recall/F1 report for one extraction run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

/// Score detected class names against the expected set
///
/// Names are trimmed and compared case-insensitively; empty entries are
/// ignored. All scores are zero when either side is empty.
pub fn evaluate_classes<'a, E, D>(expected: E, detected: D) -> EvalReport
where
    E: IntoIterator<Item = &'a str>,
    D: IntoIterator<Item = &'a str>,
{
    let expected: BTreeSet<String> = normalize(expected);
    let detected: BTreeSet<String> = normalize(detected);

    let true_positives = expected.intersection(&detected).count();
    let false_positives = detected.difference(&expected).count();
    let false_negatives = expected.difference(&detected).count();

    let precision = ratio(true_positives, true_positives + false_positives);
    let recall = ratio(true_positives, true_positives + false_negatives);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    EvalReport {
        true_positives,
        false_positives,
        false_negatives,
        precision,
        recall,
        f1,
    }
}

fn normalize<'a>(names: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    names
        .into_iter()
        .map(|n| n.trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_detection() {
        let report = evaluate_classes(
            ["BankSystem", "Account"],
            ["bankSystem", "account"],
        );

        assert_eq!(report.true_positives, 2);
        assert_eq!(report.false_positives, 0);
        assert_eq!(report.false_negatives, 0);
        assert_eq!(report.precision, 1.0);
        assert_eq!(report.recall, 1.0);
        assert_eq!(report.f1, 1.0);
    }

    #[test]
    fn test_partial_detection() {
        let report = evaluate_classes(
            ["BankSystem", "Account", "Customer", "Administrator"],
            ["BankSystem", "Account", "Ledger"],
        );

        assert_eq!(report.true_positives, 2);
        assert_eq!(report.false_positives, 1);
        assert_eq!(report.false_negatives, 2);
        assert!((report.precision - 2.0 / 3.0).abs() < 1e-9);
        assert!((report.recall - 0.5).abs() < 1e-9);
        assert!(report.f1 > 0.0 && report.f1 < 1.0);
    }

    #[test]
    fn test_empty_detection_scores_zero() {
        let report = evaluate_classes(["Account"], []);
        assert_eq!(report.precision, 0.0);
        assert_eq!(report.recall, 0.0);
        assert_eq!(report.f1, 0.0);
    }

    #[test]
    fn test_blank_entries_are_ignored() {
        let report = evaluate_classes(["Account", "  ", ""], ["account"]);
        assert_eq!(report.true_positives, 1);
        assert_eq!(report.false_negatives, 0);
    }
}
