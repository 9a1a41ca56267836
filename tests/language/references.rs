//! Integration tests for global reference extraction

use proptest::prelude::*;
use schemata_language::{extract_globals, is_template_expression};

fn aliases(text: &str) -> Vec<String> {
    extract_globals(text)
        .into_iter()
        .map(|alias| alias.to_string())
        .collect()
}

#[test]
fn extraction_skips_locals_functions_and_radicals() {
    assert_eq!(
        aliases("[α∈ℬ(X1), σ∈R1] card(Pr1(S2)) ∪ F3[α] ∪ D1"),
        vec!["X1", "S2", "F3", "D1"]
    );
}

#[test]
fn extraction_keeps_first_occurrence_order() {
    assert_eq!(aliases("D3 ∩ D1 ∩ D3 ∩ D2 ∩ D1"), vec!["D3", "D1", "D2"]);
}

#[test]
fn template_marker_needs_digits() {
    assert!(is_template_expression("[α∈R1] α"));
    assert!(is_template_expression("F2[R12]"));
    assert!(!is_template_expression("R{ξ:=X1 | ξ}"));
    assert!(!is_template_expression("Pr1(S1)"));
    assert!(!is_template_expression(""));
}

proptest! {
    #[test]
    fn extracted_aliases_are_distinct_and_present(indices in prop::collection::vec(1u32..20, 0..12)) {
        let text = indices
            .iter()
            .map(|i| format!("D{i}"))
            .collect::<Vec<_>>()
            .join(" ∪ ");
        let found = aliases(&text);

        let mut distinct = found.clone();
        distinct.sort();
        distinct.dedup();
        prop_assert_eq!(distinct.len(), found.len());
        for alias in &found {
            prop_assert!(text.contains(alias.as_str()));
        }
        let expected: std::collections::HashSet<u32> = indices.iter().copied().collect();
        prop_assert_eq!(found.len(), expected.len());
    }
}
