pub mod grouped;
pub mod library;
pub mod palette;

use std::{fs, path::Path};

use common::types::{Language, ResultTable};
use eyre::Result;
use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

pub(crate) const TITLE_FONT_SIZE: u32 = 32;
pub(crate) const PANEL_TITLE_FONT_SIZE: u32 = 22;
pub(crate) const AXIS_LABEL_FONT_SIZE: u32 = 20;
pub(crate) const TICK_LABEL_FONT_SIZE: u32 = 16;
pub(crate) const LEGEND_FONT_SIZE: u32 = 16;
pub(crate) const DATA_LABEL_FONT_SIZE: u32 = 14;

/// Benchmarked bundles ordered smallest to largest. Charts lay libraries out
/// in this order, never in map order.
pub const LIBRARY_SIZE_ORDER: &[&str] = &[
    "React",
    "Vue 3",
    "React DOM",
    "Lodash",
    "Three.js",
    "TypeScript Compiler",
];

/// Renders the full chart set into `output_dir` as one parallel batch. Every
/// job only reads the finished table, so they are free to run concurrently.
pub fn render_all(table: &ResultTable, output_dir: &Path) -> Result<()> {
    let per_library_dir = output_dir.join("per_library");
    fs::create_dir_all(&per_library_dir)?;

    let mut jobs: Vec<Box<dyn Fn() -> Result<()> + Send + Sync + '_>> = vec![
        Box::new(move || {
            grouped::parsing_time_chart(table, &output_dir.join("parsing_time_comparison.svg"))
        }),
        Box::new(move || {
            grouped::throughput_chart(table, &output_dir.join("throughput_comparison.svg"))
        }),
        Box::new(move || {
            library::typescript_detailed_chart(table, &output_dir.join("typescript_detailed.svg"))
        }),
    ];
    for library in LIBRARY_SIZE_ORDER.iter().copied() {
        let dir = per_library_dir.clone();
        jobs.push(Box::new(move || {
            library::library_chart(table, library, &dir)
        }));
    }

    debug!("Running {} render jobs", jobs.len());
    let results = jobs.par_iter().map(|job| job()).collect::<Vec<_>>();
    for item in results {
        item?;
    }
    Ok(())
}

/// Every parser present in the table paired with its language, Rust engines
/// first, then JavaScript, then Java, ties broken by name. Grouped bars and
/// legends share this order.
pub(crate) fn parser_series(table: &ResultTable) -> Vec<(String, Language)> {
    table
        .values()
        .flatten()
        .map(|m| (m.parser.clone(), m.language))
        .unique()
        .sorted_by_key(|(parser, language)| (language.chart_rank(), parser.clone()))
        .collect()
}
