//! Per-check report: cleaned selection, match rows and severity counts.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::MatchResult;
use crate::enums::Severity;
use crate::matcher::{SELECTION_WARNING, Selection, match_interactions};
use crate::store::FactStore;

/// Counts of match rows per known severity level.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SeverityHistogram {
    pub high: u32,
    pub moderate: u32,
    pub low: u32,
}

impl SeverityHistogram {
    /// Tally rows by severity. Free-form severities are not counted.
    #[must_use]
    pub fn from_results(results: &[MatchResult]) -> Self {
        let mut histogram = Self::default();
        for result in results {
            match result.severity {
                Severity::High => histogram.high += 1,
                Severity::Moderate => histogram.moderate += 1,
                Severity::Low => histogram.low += 1,
                Severity::Other(_) => {}
            }
        }
        histogram
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.high + self.moderate + self.low
    }
}

/// Outcome of one "check" action.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InteractionReport {
    /// Cleaned names that were paired.
    pub selection: Vec<String>,
    /// Cleaned names outside the known vocabulary.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<String>,
    pub pairs_checked: u32,
    pub results: Vec<MatchResult>,
    pub severity: SeverityHistogram,
    /// Set when the selection was too small to check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl InteractionReport {
    /// Clean `drugs`, run the matcher when at least two names remain, and
    /// summarise the result.
    ///
    /// A selection with fewer than two names never reaches the matcher; the
    /// report carries a warning and no rows instead.
    pub fn check<I, S>(store: &FactStore, drugs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selection = Selection::new(drugs);
        let unknown = selection.unknown().into_iter().map(str::to_string).collect();

        if !selection.is_checkable() {
            tracing::debug!(selected = selection.len(), "selection too small to check");
            return Self {
                selection: selection.names().to_vec(),
                unknown,
                warning: Some(SELECTION_WARNING.to_string()),
                ..Self::default()
            };
        }

        let results = match_interactions(store, &selection);
        tracing::debug!(
            selected = selection.len(),
            pairs = selection.pair_count(),
            matches = results.len(),
            "interaction check complete"
        );

        Self {
            selection: selection.names().to_vec(),
            unknown,
            pairs_checked: u32::try_from(selection.pair_count()).unwrap_or(u32::MAX),
            severity: SeverityHistogram::from_results(&results),
            results,
            warning: None,
        }
    }

    /// One-line summary for humans.
    #[must_use]
    pub fn summary(&self) -> String {
        if let Some(warning) = &self.warning {
            return warning.clone();
        }
        if self.results.is_empty() {
            "No harmful interactions found.".to_string()
        } else {
            format!("{} interaction(s) found.", self.results.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn histogram_counts_known_levels_only() {
        let store = FactStore::load();
        let report =
            InteractionReport::check(&store, ["warfarin", "aspirin", "ibuprofen", "paracetamol"]);
        // warfarin+aspirin high, warfarin+ibuprofen high, warfarin+paracetamol moderate,
        // aspirin+ibuprofen moderate
        assert_eq!(
            report.severity,
            SeverityHistogram {
                high: 2,
                moderate: 2,
                low: 0
            }
        );
        assert_eq!(report.severity.total(), 4);
        assert_eq!(report.pairs_checked, 6);
    }

    #[test]
    fn short_selection_warns_without_rows() {
        let report = InteractionReport::check(FactStore::global(), ["warfarin", "", " WARFARIN"]);
        assert_eq!(report.warning.as_deref(), Some(SELECTION_WARNING));
        assert!(report.results.is_empty());
        assert_eq!(report.pairs_checked, 0);
        assert_eq!(report.summary(), SELECTION_WARNING);
    }

    #[test]
    fn summary_lines() {
        let none = InteractionReport::check(FactStore::global(), ["aspirin", "paracetamol"]);
        assert_eq!(none.summary(), "No harmful interactions found.");
        let some = InteractionReport::check(FactStore::global(), ["aspirin", "warfarin"]);
        assert_eq!(some.summary(), "1 interaction(s) found.");
    }

    #[test]
    fn free_form_severity_is_listed_but_not_counted() {
        let store = FactStore::from_facts([crate::InteractionFact::new(
            "x", "y", "severe", "risk", "rec",
        )]);
        let report = InteractionReport::check(&store, ["x", "y"]);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.severity.total(), 0);
    }

    #[test]
    fn severity_case_does_not_affect_counts() {
        let store = FactStore::from_facts([
            crate::InteractionFact::new("x", "y", "HIGH", "risk", "rec"),
            crate::InteractionFact::new("x", "z", "Moderate", "risk", "rec"),
        ]);
        let report = InteractionReport::check(&store, ["x", "y", "z"]);
        assert_eq!(
            report.severity,
            SeverityHistogram {
                high: 1,
                moderate: 1,
                low: 0
            }
        );
    }

    #[test]
    fn warning_is_omitted_from_json_when_absent() {
        let report = InteractionReport::check(FactStore::global(), ["aspirin", "warfarin"]);
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("warning").is_none());
        assert_eq!(value["severity"]["high"], 1);
    }
}
