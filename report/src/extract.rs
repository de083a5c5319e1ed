use std::{fs, io, path::Path};

use common::types::{Measurement, ResultTable};
use eyre::{Context, Result};
use regex::{Captures, Regex};
use tracing::debug;

use crate::{
    format::{LIBRARY_HEADER, ParserName, RowPolicy, SourceFormat},
    normalize::normalize_library_name,
};

/// Extracts one harness report into a per-library measurement table.
///
/// Every library header opens a section that runs to the next header (or end
/// of text); result rows are matched inside that section only. Rows that do
/// not match the format's shape, or that match but fail numeric parse, are
/// skipped. A library whose section yields no rows is left out entirely.
pub fn extract(content: &str, format: &SourceFormat, names: &[(&str, &str)]) -> Result<ResultTable> {
    let header = Regex::new(LIBRARY_HEADER)?;
    let row = Regex::new(format.row_pattern)?;

    let headers: Vec<Captures<'_>> = header.captures_iter(content).collect();
    let mut results = ResultTable::new();

    for (i, caps) in headers.iter().enumerate() {
        let (Some(whole), Some(name), Some(size)) =
            (caps.get(0), caps.name("name"), caps.name("size"))
        else {
            continue;
        };
        let start = whole.end();
        let end = headers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(content.len(), |m| m.start());

        let library = normalize_library_name(name.as_str().trim(), names);

        let mut measurements = Vec::new();
        for row_caps in row.captures_iter(&content[start..end]) {
            if let Some(measurement) = measurement_from_row(&row_caps, format) {
                measurements.push(measurement);
                if format.rows == RowPolicy::Single {
                    break;
                }
            }
        }

        debug!(
            "{library} ({} KB): {} {} rows",
            size.as_str(),
            measurements.len(),
            format.language
        );
        if !measurements.is_empty() {
            results.insert(library, measurements);
        }
    }

    Ok(results)
}

fn measurement_from_row(caps: &Captures<'_>, format: &SourceFormat) -> Option<Measurement> {
    let avg_time_ms = caps.name("time")?.as_str().parse().ok()?;
    let throughput_kb_ms = caps.name("tp")?.as_str().parse().ok()?;
    let parser = match format.parser_name {
        ParserName::Fixed(name) => name.to_owned(),
        ParserName::Captured { strip } => {
            let raw = caps.name("parser")?.as_str().trim();
            match strip {
                Some(decoration) => raw.replace(decoration, ""),
                None => raw.to_owned(),
            }
        }
    };
    Some(Measurement {
        parser,
        language: format.language,
        avg_time_ms,
        throughput_kb_ms,
    })
}

/// Reads and extracts one report file. A missing file is the valid "no data
/// for this source" state and yields an empty table; any other I/O failure
/// propagates.
pub fn read_report(
    path: &Path,
    format: &SourceFormat,
    names: &[(&str, &str)],
) -> Result<ResultTable> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No {} report at {}", format.language, path.display());
            return Ok(ResultTable::new());
        }
        Err(err) => {
            return Err(err).context(format!("Read report {}", path.display()));
        }
    };
    extract(&content, format, names)
}
