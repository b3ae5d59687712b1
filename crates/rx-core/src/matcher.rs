//! Pairwise interaction matching.
//!
//! A [`Selection`] cleans raw user input (trim, lowercase, drop blanks and
//! repeats). [`match_interactions`] then walks every unordered pair of the
//! selection in stable order (first element varies slowest) and emits one
//! [`MatchResult`] per matching fact.

use crate::entities::MatchResult;
use crate::store::{FactStore, normalize_name};

/// Minimum number of distinct names needed before pairs can be formed.
pub const MIN_SELECTION: usize = 2;

/// Message surfaced when a selection is too small to check.
pub const SELECTION_WARNING: &str = "Please select at least two drugs.";

/// Cleaned set of drug names chosen for one check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    names: Vec<String>,
}

impl Selection {
    /// Clean raw names: trim, lowercase, drop blanks and repeats.
    ///
    /// First occurrence order is kept.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in raw {
            let cleaned = normalize_name(name.as_ref());
            if cleaned.is_empty() || names.contains(&cleaned) {
                continue;
            }
            names.push(cleaned);
        }
        Self { names }
    }

    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether the selection holds enough names to form a pair.
    #[must_use]
    pub fn is_checkable(&self) -> bool {
        self.names.len() >= MIN_SELECTION
    }

    /// Number of unordered pairs, `n choose 2`.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        let n = self.names.len();
        n * n.saturating_sub(1) / 2
    }

    /// Unordered pairs in combination order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().enumerate().flat_map(move |(i, first)| {
            self.names[i + 1..]
                .iter()
                .map(move |second| (first.as_str(), second.as_str()))
        })
    }

    /// Names outside the known vocabulary. They are still checked but can
    /// only match facts for drugs the selector never offers.
    #[must_use]
    pub fn unknown(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| !FactStore::is_known(name))
            .collect()
    }
}

/// Find every fact covering a pair of the selection.
///
/// Callers are expected to check [`Selection::is_checkable`] first; a
/// selection with fewer than two names simply yields no rows. Facts missing a
/// severity, risk or recommendation are skipped.
#[must_use]
pub fn match_interactions(store: &FactStore, selection: &Selection) -> Vec<MatchResult> {
    let mut results = Vec::new();
    for (first, second) in selection.pairs() {
        for fact in store.lookup(first, second) {
            if !fact.is_complete() {
                tracing::debug!(drug_a = %fact.drug_a, drug_b = %fact.drug_b, "skipping incomplete fact");
                continue;
            }
            results.push(MatchResult::from_fact(
                title_case(first),
                title_case(second),
                fact,
            ));
        }
    }
    results
}

/// Title-case a name: the first letter of every alphabetic run is
/// uppercased and the rest lowercased (`oral_contraceptives` becomes
/// `Oral_Contraceptives`).
#[must_use]
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
