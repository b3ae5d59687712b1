use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::InteractionFact;
use crate::enums::Severity;

/// One row of matcher output: a queried pair joined with a matching fact.
///
/// Field names serialize as the column headers shown to users and written to
/// CSV (`Drug 1`, `Drug 2`, `Severity`, `Risk`, `Recommendation`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MatchResult {
    #[serde(rename = "Drug 1")]
    pub drug_1: String,
    #[serde(rename = "Drug 2")]
    pub drug_2: String,
    #[serde(rename = "Severity")]
    #[schemars(with = "String")]
    pub severity: Severity,
    #[serde(rename = "Risk")]
    pub risk: String,
    #[serde(rename = "Recommendation")]
    pub recommendation: String,
}

impl MatchResult {
    /// Join display names for a queried pair with the fact that matched it.
    #[must_use]
    pub fn from_fact(drug_1: String, drug_2: String, fact: &InteractionFact) -> Self {
        Self {
            drug_1,
            drug_2,
            severity: fact.severity.clone(),
            risk: fact.risk.clone(),
            recommendation: fact.recommendation.clone(),
        }
    }

    /// Sentence suitable for a text-to-speech engine.
    #[must_use]
    pub fn announcement(&self) -> String {
        format!(
            "Warning: {}. Recommendation: {}",
            self.risk, self.recommendation
        )
    }

    /// Short heading, e.g. `Warfarin + Aspirin (High Severity)`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!(
            "{} + {} ({})",
            self.drug_1,
            self.drug_2,
            self.severity.badge()
        )
    }
}
