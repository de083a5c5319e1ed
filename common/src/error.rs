use std::path::PathBuf;

use thiserror::Error;

/// The two fatal conditions of a report run. Everything else degrades
/// silently: a missing source file is an empty table, a malformed row is
/// skipped.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Results directory not found: {0}")]
    MissingResultsDir(PathBuf),
    #[error("No benchmark results found")]
    NoResults,
}
