//! Immutable fact store with symmetric pair lookup.
//!
//! Facts are indexed by a normalized unordered pair: both names trimmed,
//! lowercased and sorted. A fact registered as `(A, B)` therefore answers
//! queries for `(A, B)` and `(B, A)` alike. Duplicate and conflicting facts for
//! the same pair are all kept and returned in registration order.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::entities::InteractionFact;
use crate::facts::{KNOWN_DRUGS, SEED_FACTS};

static GLOBAL: LazyLock<FactStore> = LazyLock::new(FactStore::load);

/// Normalized unordered drug pair used as the index key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct PairKey(String, String);

impl PairKey {
    fn new(a: &str, b: &str) -> Self {
        let a = normalize_name(a);
        let b = normalize_name(b);
        if a <= b { Self(a, b) } else { Self(b, a) }
    }
}

/// Read-only collection of interaction facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactStore {
    facts: Vec<InteractionFact>,
    index: HashMap<PairKey, Vec<usize>>,
}

impl FactStore {
    /// Build a store from the built-in interaction table.
    ///
    /// Every call constructs a fresh store; two loads compare equal.
    #[must_use]
    pub fn load() -> Self {
        let store = Self::from_facts(SEED_FACTS.iter().map(
            |&(drug_a, drug_b, severity, risk, recommendation)| {
                InteractionFact::new(drug_a, drug_b, severity, risk, recommendation)
            },
        ));
        tracing::debug!(facts = store.len(), pairs = store.index.len(), "fact store loaded");
        store
    }

    /// Build a store from an arbitrary fact list.
    #[must_use]
    pub fn from_facts(facts: impl IntoIterator<Item = InteractionFact>) -> Self {
        let facts: Vec<InteractionFact> = facts.into_iter().collect();
        let mut index: HashMap<PairKey, Vec<usize>> = HashMap::with_capacity(facts.len());
        for (position, fact) in facts.iter().enumerate() {
            index
                .entry(PairKey::new(&fact.drug_a, &fact.drug_b))
                .or_default()
                .push(position);
        }
        Self { facts, index }
    }

    /// Process-wide store built from the built-in table on first use.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// All facts whose unordered pair equals `{a, b}`, ignoring case.
    ///
    /// Returns an empty vector when nothing matches.
    #[must_use]
    pub fn lookup(&self, a: &str, b: &str) -> Vec<&InteractionFact> {
        self.index
            .get(&PairKey::new(a, b))
            .map(|positions| positions.iter().map(|&i| &self.facts[i]).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn facts(&self) -> &[InteractionFact] {
        &self.facts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// The closed vocabulary users pick from.
    #[must_use]
    pub const fn known_drugs() -> &'static [&'static str] {
        KNOWN_DRUGS
    }

    /// Whether `name` is in the vocabulary, ignoring case and surrounding space.
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        let needle = normalize_name(name);
        KNOWN_DRUGS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(&needle))
    }
}

/// Trim and lowercase a drug name.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
