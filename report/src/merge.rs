use common::{error::ReportError, types::ResultTable};
use eyre::Result;

/// Unions the three per-format tables into one. Per library, measurement
/// lists concatenate in fixed source order: Java, then JavaScript, then
/// Rust. Nothing is deduplicated; the harnesses report disjoint parser
/// sets by construction, so any duplicate a caller feeds in survives.
///
/// Three empty inputs are the one fatal case here ([`ReportError::NoResults`]);
/// individual empty inputs merge silently.
pub fn merge(java: ResultTable, javascript: ResultTable, rust: ResultTable) -> Result<ResultTable> {
    let mut merged = ResultTable::new();
    for table in [java, javascript, rust] {
        for (library, measurements) in table {
            merged.entry(library).or_default().extend(measurements);
        }
    }

    if merged.is_empty() {
        return Err(ReportError::NoResults.into());
    }
    Ok(merged)
}
