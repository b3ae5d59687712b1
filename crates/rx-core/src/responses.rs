//! CLI response types returned as JSON by `rxc` commands.
//!
//! `rxc check` returns [`InteractionReport`](crate::report::InteractionReport)
//! and `rxc graph` returns [`InteractionGraph`](crate::graph::InteractionGraph)
//! directly; the shapes below cover the remaining commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Response from `rxc drugs`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DrugListResponse {
    pub drugs: Vec<String>,
    pub total: u32,
}

impl DrugListResponse {
    #[must_use]
    pub fn from_vocabulary(drugs: &[&str]) -> Self {
        Self {
            drugs: drugs.iter().map(|drug| (*drug).to_string()).collect(),
            total: u32::try_from(drugs.len()).unwrap_or(u32::MAX),
        }
    }
}

/// Response from `rxc export --output <path>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExportResponse {
    pub path: String,
    pub rows: u32,
    pub bytes: u64,
}
