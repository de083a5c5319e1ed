use std::{
    fs,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tracing::debug;

use crate::format::SourceFormat;

/// Picks the newest report file for one format: entries matching the
/// format's filename prefix and the `.txt` extension, minus anything
/// carrying an excluded tag, greatest name wins (the timestamp suffix
/// makes lexicographic order chronological). `None` means the format
/// simply contributes no data this run.
pub fn latest_report(results_dir: &Path, format: &SourceFormat) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(results_dir)
        .context(format!("Read results directory {}", results_dir.display()))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if !name.starts_with(format.file_prefix) || !name.ends_with(".txt") {
            continue;
        }
        if format.excluded_tags.iter().any(|tag| name.contains(tag)) {
            debug!("Skipping {name}: excluded category");
            continue;
        }
        candidates.push(entry.path());
    }

    candidates.sort();
    Ok(candidates.pop())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::format;

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), "").unwrap();
    }

    #[test]
    fn newest_matching_file_wins() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "rust_benchmark_2025-01-03_09-00-00.txt");
        touch(&dir, "rust_benchmark_2025-02-14_12-30-00.txt");
        touch(&dir, "rust_benchmark_2024-12-25_23-59-59.txt");

        let found = latest_report(dir.path(), &format::RUST).unwrap().unwrap();
        assert_eq!(
            found.file_name().unwrap(),
            "rust_benchmark_2025-02-14_12-30-00.txt"
        );
    }

    #[test]
    fn excluded_tags_are_filtered_per_format() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "java_benchmark_2025-01-01.txt");
        touch(&dir, "java_realworld_2025-06-01.txt");
        touch(&dir, "java_our_parser_2025-06-01.txt");

        let found = latest_report(dir.path(), &format::JAVA).unwrap().unwrap();
        assert_eq!(found.file_name().unwrap(), "java_benchmark_2025-01-01.txt");
    }

    #[test]
    fn other_formats_and_extensions_are_ignored() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "java_benchmark_2025-01-01.txt");
        touch(&dir, "rust_benchmark_2025-01-01.log");
        touch(&dir, "notes.txt");

        assert!(latest_report(dir.path(), &format::RUST).unwrap().is_none());
        assert!(latest_report(dir.path(), &format::JAVASCRIPT).unwrap().is_none());
    }

    #[test]
    fn empty_directory_yields_none() {
        let dir = TempDir::new().unwrap();
        assert!(latest_report(dir.path(), &format::JAVA).unwrap().is_none());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("gone");
        assert!(latest_report(&missing, &format::JAVA).is_err());
    }
}
