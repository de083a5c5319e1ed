use std::{
    fs,
    path::{Path, PathBuf},
};

use common::types::ResultTable;
use eyre::Result;

/// Dumps the merged table as pretty-printed JSON to
/// `<output_dir>/plot_data/results.json`, the machine-readable record of
/// what the charts were rendered from.
pub fn write_results_json(table: &ResultTable, output_dir: &Path) -> Result<PathBuf> {
    let plot_data_dir = output_dir.join("plot_data");
    if !plot_data_dir.exists() {
        fs::create_dir_all(&plot_data_dir)?;
    }

    let path = plot_data_dir.join("results.json");
    fs::write(&path, serde_json::to_string_pretty(table)?)?;
    Ok(path)
}
