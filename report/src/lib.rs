pub mod extract;
pub mod format;
pub mod locate;
pub mod merge;
pub mod normalize;
pub mod output;

use std::path::Path;

use common::types::ResultTable;
use eyre::Result;

use crate::format::SourceFormat;

/// The full parse stage: locate the newest report per source format,
/// extract each, and merge everything into one table. Reports that are
/// absent contribute nothing; a run where all three are absent (or yield
/// no rows) fails with [`common::error::ReportError::NoResults`].
pub fn collect(results_dir: &Path, names: &[(&str, &str)]) -> Result<ResultTable> {
    println!("Parsing benchmark results...");
    let java = collect_format(results_dir, &format::JAVA, names)?;
    let javascript = collect_format(results_dir, &format::JAVASCRIPT, names)?;
    let rust = collect_format(results_dir, &format::RUST, names)?;
    println!();

    merge::merge(java, javascript, rust)
}

fn collect_format(
    results_dir: &Path,
    format: &SourceFormat,
    names: &[(&str, &str)],
) -> Result<ResultTable> {
    match locate::latest_report(results_dir, format)? {
        Some(path) => {
            println!("  {}: {}", format.language, path.display());
            extract::read_report(&path, format, names)
        }
        None => {
            println!("  {}: not found", format.language);
            Ok(ResultTable::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use common::{error::ReportError, types::Language};
    use tempfile::TempDir;

    use super::*;
    use crate::normalize::CANONICAL_NAMES;

    #[test]
    fn single_source_pipeline_end_to_end() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("java_benchmark_2025-08-01.txt"),
            "Library: Foo\nSize: 10.0 KB\n\nOur Java Parser      |        1.5 |     6.7\n",
        )
        .unwrap();

        let table = collect(dir.path(), CANONICAL_NAMES).unwrap();

        assert_eq!(table.len(), 1);
        let foo = &table["Foo"];
        assert_eq!(foo.len(), 1);
        assert_eq!(foo[0].parser, "Harmonica");
        assert_eq!(foo[0].language, Language::Java);
        assert_eq!(foo[0].avg_time_ms, 1.5);
        assert_eq!(foo[0].throughput_kb_ms, 6.7);
    }

    #[test]
    fn all_sources_absent_reports_no_results() {
        let dir = TempDir::new().unwrap();
        let err = collect(dir.path(), CANONICAL_NAMES).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::NoResults)
        ));
    }

    #[test]
    fn three_sources_merge_in_fixed_order_from_latest_files() {
        let dir = TempDir::new().unwrap();
        // A stale Java run that must lose to the newer one.
        fs::write(
            dir.path().join("java_benchmark_2025-07-01.txt"),
            "Library: react.production.min.js\nSize: 10.5 KB\n\nOur Java Parser      |     99.000 |    0.01\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("java_benchmark_2025-08-01.txt"),
            "Library: react.production.min.js\nSize: 10.5 KB\n\nOur Java Parser      |      1.513 |    6.68\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("js_benchmark_2025-08-01.txt"),
            "Library: react.production.min.js\nSize: 10.5 KB\n\n\
             🥇 Meriyah            |           0.295 |            1.00x |         35.5 KB/ms\n\
             🥈 Acorn              |           0.512 |            1.74x |         20.5 KB/ms\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("rust_benchmark_2025-08-01.txt"),
            "Library: react.production.min.js\nSize: 10.5 KB\n\n\
             🥇 OXC (Rust)         |           0.138 |            1.00x |                 76.2\n",
        )
        .unwrap();

        let table = collect(dir.path(), CANONICAL_NAMES).unwrap();

        assert_eq!(table.len(), 1);
        let react = &table["React"];
        let parsers: Vec<&str> = react.iter().map(|m| m.parser.as_str()).collect();
        assert_eq!(parsers, ["Harmonica", "Meriyah", "Acorn", "OXC"]);
        assert_eq!(react[0].avg_time_ms, 1.513);
    }

    #[test]
    fn a_missing_format_degrades_to_the_others() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("rust_benchmark_2025-08-01.txt"),
            "Library: three.js\nSize: 1295.8 KB\n\n\
             🥇 OXC (Rust)         |           9.545 |            1.00x |                135.8\n",
        )
        .unwrap();

        let table = collect(dir.path(), CANONICAL_NAMES).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table["Three.js"][0].parser, "OXC");
    }
}
