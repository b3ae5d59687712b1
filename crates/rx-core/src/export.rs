//! Comma-separated export of match rows.
//!
//! The header row is always written, even for an empty result, so downstream
//! spreadsheets see the same columns every time.

use csv::{ReaderBuilder, WriterBuilder};

use crate::entities::MatchResult;
use crate::errors::CoreError;

/// Column headers, in output order.
pub const CSV_HEADER: [&str; 5] = ["Drug 1", "Drug 2", "Severity", "Risk", "Recommendation"];

/// Default file name offered for downloads.
pub const DEFAULT_FILE_NAME: &str = "drug_interactions.csv";

/// Serialize rows to CSV text with a header line.
///
/// # Errors
///
/// Returns `CoreError::Csv` if a row cannot be written.
pub fn to_csv(results: &[MatchResult]) -> Result<String, CoreError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for result in results {
        writer.serialize(result)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| CoreError::Other(anyhow::anyhow!("flushing CSV buffer: {error}")))?;
    String::from_utf8(bytes)
        .map_err(|error| CoreError::Validation(format!("CSV output is not UTF-8: {error}")))
}

/// Parse CSV text produced by [`to_csv`] back into rows.
///
/// # Errors
///
/// Returns `CoreError::Validation` when the header row does not match
/// [`CSV_HEADER`], and `CoreError::Csv` for malformed records.
pub fn from_csv(text: &str) -> Result<Vec<MatchResult>, CoreError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if !headers.iter().eq(CSV_HEADER.iter().copied()) {
        return Err(CoreError::Validation(format!(
            "unexpected CSV header: {}",
            headers.iter().collect::<Vec<_>>().join(",")
        )));
    }

    reader
        .deserialize::<MatchResult>()
        .map(|row| row.map_err(CoreError::from))
        .collect()
}
