//! Behavioural properties of the fact store and matcher over the built-in table.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rx_core::export::{from_csv, to_csv};
use rx_core::matcher::{SELECTION_WARNING, Selection, match_interactions};
use rx_core::{FactStore, InteractionReport, MatchResult, Severity};

fn check(drugs: &[&str]) -> InteractionReport {
    InteractionReport::check(FactStore::global(), drugs.iter().copied())
}

#[test]
fn every_fact_is_found_in_both_orders() {
    let store = FactStore::global();
    for fact in store.facts() {
        for (a, b) in [(&fact.drug_a, &fact.drug_b), (&fact.drug_b, &fact.drug_a)] {
            let found = store.lookup(a, b);
            assert!(
                found.iter().any(|candidate| candidate.severity == fact.severity
                    && candidate.risk == fact.risk
                    && candidate.recommendation == fact.recommendation),
                "lookup({a}, {b}) did not return {fact:?}"
            );
        }
    }
}

#[rstest]
#[case::empty(&[])]
#[case::single(&["warfarin"])]
#[case::blanks(&["warfarin", "", "   "])]
#[case::duplicate(&["warfarin", "Warfarin ", "WARFARIN"])]
fn fewer_than_two_names_take_the_validation_path(#[case] drugs: &[&str]) {
    let selection = Selection::new(drugs.iter().copied());
    assert!(!selection.is_checkable());

    let report = check(drugs);
    assert_eq!(report.warning.as_deref(), Some(SELECTION_WARNING));
    assert!(report.results.is_empty());
}

#[test]
fn warfarin_and_aspirin_give_exactly_one_row() {
    let report = check(&["warfarin", "aspirin"]);
    assert_eq!(
        report.results,
        vec![MatchResult {
            drug_1: "Warfarin".into(),
            drug_2: "Aspirin".into(),
            severity: Severity::High,
            risk: "Increased risk of bleeding".into(),
            recommendation: "Monitor INR and avoid concurrent use unless necessary.".into(),
        }]
    );
}

#[test]
fn three_drugs_find_reverse_registered_fact() {
    let report = check(&["warfarin", "paracetamol", "aspirin"]);
    assert_eq!(report.pairs_checked, 3);

    let rows: Vec<(&str, &str, &Severity)> = report
        .results
        .iter()
        .map(|row| (row.drug_1.as_str(), row.drug_2.as_str(), &row.severity))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Warfarin", "Paracetamol", &Severity::Moderate),
            ("Warfarin", "Aspirin", &Severity::High),
        ]
    );
    assert_eq!(report.results[0].risk, "Increased INR with prolonged use");
}

#[test]
fn unmatched_pair_is_empty_not_an_error() {
    let report = check(&["fexofenadine", "warfarin"]);
    assert!(report.results.is_empty());
    assert!(report.warning.is_none());
    assert_eq!(report.summary(), "No harmful interactions found.");
}

#[test]
fn selection_order_does_not_change_what_is_found() {
    let store = FactStore::global();
    for fact in store.facts() {
        let forward = match_interactions(store, &Selection::new([&fact.drug_a, &fact.drug_b]));
        let backward = match_interactions(store, &Selection::new([&fact.drug_b, &fact.drug_a]));
        let strip = |rows: &[MatchResult]| {
            rows.iter()
                .map(|row| (row.severity.clone(), row.risk.clone(), row.recommendation.clone()))
                .collect::<Vec<_>>()
        };
        assert!(!forward.is_empty());
        assert_eq!(strip(&forward), strip(&backward));
    }
}

#[test]
fn duplicate_facts_emit_one_row_each() {
    let report = check(&["insulin", "beta_blockers"]);
    assert_eq!(report.results.len(), 2);
    assert_eq!(report.results[0].risk, "Masked hypoglycemia");
    assert_eq!(report.results[1].risk, "Masking of hypoglycemia");
}

#[test]
fn csv_export_round_trips() {
    let report = check(&[
        "warfarin",
        "aspirin",
        "ibuprofen",
        "clopidogrel",
        "omeprazole",
        "oral_contraceptives",
        "rifampin",
    ]);
    assert!(report.results.len() > 4);

    let csv = to_csv(&report.results).expect("export");
    assert!(csv.starts_with("Drug 1,Drug 2,Severity,Risk,Recommendation\n"));
    assert_eq!(from_csv(&csv).expect("parse"), report.results);
}
