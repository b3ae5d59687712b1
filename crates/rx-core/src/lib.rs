//! # rx-core
//!
//! Core types and logic for rxcheck.
//!
//! This crate owns everything between "a list of drug names" and "a list of
//! interaction rows":
//! - Entity structs for interaction facts and match rows
//! - The `Severity` enum and its display helpers
//! - The immutable, process-wide fact store with symmetric pair lookup
//! - The pairwise matcher and selection cleaning
//! - Derived views: severity histogram, CSV export, interaction graph
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod export;
mod facts;
pub mod graph;
pub mod matcher;
pub mod report;
pub mod responses;
pub mod store;

pub use entities::{InteractionFact, MatchResult};
pub use enums::Severity;
pub use errors::CoreError;
pub use facts::KNOWN_DRUGS;
pub use matcher::Selection;
pub use report::{InteractionReport, SeverityHistogram};
pub use store::FactStore;
