use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Severity;

/// One recorded drug-pair interaction.
///
/// The pair is semantically unordered; `drug_a`/`drug_b` keep the order the
/// fact was registered in.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InteractionFact {
    pub drug_a: String,
    pub drug_b: String,
    #[schemars(with = "String")]
    pub severity: Severity,
    pub risk: String,
    pub recommendation: String,
}

impl InteractionFact {
    #[must_use]
    pub fn new(
        drug_a: impl Into<String>,
        drug_b: impl Into<String>,
        severity: impl Into<Severity>,
        risk: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            drug_a: drug_a.into(),
            drug_b: drug_b.into(),
            severity: severity.into(),
            risk: risk.into(),
            recommendation: recommendation.into(),
        }
    }

    /// Whether severity, risk and recommendation all carry text.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.severity.is_blank()
            && !self.risk.trim().is_empty()
            && !self.recommendation.trim().is_empty()
    }
}
