//! Severity levels attached to interaction facts.
//!
//! Severity serializes as its lowercase string. Values outside the three known
//! levels are kept verbatim in [`Severity::Other`] so free-form data survives a
//! round-trip through JSON or CSV.

use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Categorical clinical risk level of an interaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    High,
    Moderate,
    Low,
    Other(String),
}

impl Severity {
    /// Parse a severity label. Matching is case-insensitive and ignores
    /// surrounding whitespace; unknown labels become [`Severity::Other`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "high" => Self::High,
            "moderate" => Self::Moderate,
            "low" => Self::Low,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
            Self::Other(value) => value,
        }
    }

    /// True when the label carries no information.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Edge colour used by graph renderers.
    #[must_use]
    pub const fn color(&self) -> &'static str {
        match self {
            Self::High => "red",
            Self::Moderate => "orange",
            Self::Low => "green",
            Self::Other(_) => "gray",
        }
    }

    /// Human-readable badge, e.g. `High Severity`.
    #[must_use]
    pub fn badge(&self) -> String {
        match self {
            Self::High => "High Severity".to_string(),
            Self::Moderate => "Moderate Severity".to_string(),
            Self::Low => "Low Severity".to_string(),
            Self::Other(value) => capitalize(value),
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First character uppercased, the rest lowercased.
fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
