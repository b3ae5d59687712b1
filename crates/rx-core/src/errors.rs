//! Error types for rxcheck core logic.
//!
//! The matcher itself never fails: misses and short selections resolve to
//! empty output. Errors here come from the edges (CSV I/O and data that fails
//! validation on the way back in).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Reading or writing comma-separated output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
