use std::path::Path;

use common::types::{Measurement, ResultTable};
use eyre::Result;
use plotters::prelude::*;

use crate::{
    AXIS_LABEL_FONT_SIZE, LEGEND_FONT_SIZE, LIBRARY_SIZE_ORDER, TICK_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE, palette::parser_color, parser_series,
};

// Bars within a library group share 0.8 of the slot; the gap keeps adjacent
// bars from touching.
const GROUP_WIDTH: f64 = 0.8;
const BAR_GAP: f64 = 0.02;

/// Grouped vertical bars of average parsing time, one bar per parser per
/// library. Log y scale, since the largest bundle parses three orders of
/// magnitude slower than the smallest.
pub fn parsing_time_chart(table: &ResultTable, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (1400, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let libraries = present_libraries(table);
    let parsers = parser_series(table);
    if libraries.is_empty() || parsers.is_empty() {
        root.present()?;
        return Ok(());
    }
    let num_libraries = libraries.len();
    let num_parsers = parsers.len();

    let min_time = table
        .values()
        .flatten()
        .map(|m| m.avg_time_ms)
        .filter(|&v| v > 0.0)
        .fold(f64::MAX, |a, b| a.min(b))
        .max(0.01);
    let max_time = table
        .values()
        .flatten()
        .map(|m| m.avg_time_ms)
        .fold(0.0_f64, |a, b| a.max(b))
        * 2.0;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "JavaScript Parser Performance Comparison (Lower is Better)",
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(
            -0.5..(num_libraries as f64 - 0.5),
            (min_time..max_time).log_scale(),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_libraries)
        .x_label_formatter(&|x| library_tick(&libraries, *x))
        .y_desc("Parsing Time (ms)")
        .x_desc("JavaScript Library")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    let bar_width = GROUP_WIDTH / num_parsers as f64;
    for (parser_idx, (parser, language)) in parsers.iter().enumerate() {
        let color = parser_color(parser, *language);

        for (library_idx, library) in libraries.iter().enumerate() {
            let Some(time) = parser_value(table, library, parser, |m| m.avg_time_ms) else {
                continue;
            };

            let x_center = library_idx as f64
                + (parser_idx as f64 - (num_parsers as f64 - 1.0) / 2.0) * bar_width;
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (x_center - bar_width / 2.0 + BAR_GAP, min_time),
                    (x_center + bar_width / 2.0 - BAR_GAP, time),
                ],
                color.filled(),
            )))?;
        }
    }

    // Zero-radius markers exist only to register label and color with the
    // series legend.
    for (parser, language) in &parsers {
        let color = parser_color(parser, *language);
        chart
            .draw_series(std::iter::once(Circle::new(
                (num_libraries as f64 - 1.0, max_time),
                0,
                color.filled(),
            )))?
            .label(parser.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    root.present()?;
    println!("Saved: {}", path.display());
    Ok(())
}

/// Same grouped layout with throughput on a linear y axis.
pub fn throughput_chart(table: &ResultTable, path: &Path) -> Result<()> {
    let root = SVGBackend::new(path, (1400, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let libraries = present_libraries(table);
    let parsers = parser_series(table);
    if libraries.is_empty() || parsers.is_empty() {
        root.present()?;
        return Ok(());
    }
    let num_libraries = libraries.len();
    let num_parsers = parsers.len();

    let max_throughput = table
        .values()
        .flatten()
        .map(|m| m.throughput_kb_ms)
        .fold(0.0_f64, |a, b| a.max(b))
        * 1.25;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "JavaScript Parser Throughput Comparison (Higher is Better)",
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(
            -0.5..(num_libraries as f64 - 0.5),
            0.0..max_throughput.max(1.0),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(num_libraries)
        .x_label_formatter(&|x| library_tick(&libraries, *x))
        .y_desc("Throughput (KB/ms)")
        .x_desc("JavaScript Library")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    let bar_width = GROUP_WIDTH / num_parsers as f64;
    for (parser_idx, (parser, language)) in parsers.iter().enumerate() {
        let color = parser_color(parser, *language);

        for (library_idx, library) in libraries.iter().enumerate() {
            let Some(throughput) = parser_value(table, library, parser, |m| m.throughput_kb_ms)
            else {
                continue;
            };

            let x_center = library_idx as f64
                + (parser_idx as f64 - (num_parsers as f64 - 1.0) / 2.0) * bar_width;
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (x_center - bar_width / 2.0 + BAR_GAP, 0.0),
                    (x_center + bar_width / 2.0 - BAR_GAP, throughput),
                ],
                color.filled(),
            )))?;
        }
    }

    for (parser, language) in &parsers {
        let color = parser_color(parser, *language);
        chart
            .draw_series(std::iter::once(Circle::new(
                (num_libraries as f64 - 1.0, max_throughput),
                0,
                color.filled(),
            )))?
            .label(parser.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    root.present()?;
    println!("Saved: {}", path.display());
    Ok(())
}

fn present_libraries(table: &ResultTable) -> Vec<&'static str> {
    LIBRARY_SIZE_ORDER
        .iter()
        .copied()
        .filter(|library| table.contains_key(*library))
        .collect()
}

fn library_tick(libraries: &[&str], x: f64) -> String {
    let idx = x.round() as usize;
    if idx < libraries.len() && (x - idx as f64).abs() < 0.3 {
        libraries
            .get(idx)
            .map(|library| library.to_string())
            .unwrap_or_default()
    } else {
        String::new()
    }
}

fn parser_value(
    table: &ResultTable,
    library: &str,
    parser: &str,
    value: impl Fn(&Measurement) -> f64,
) -> Option<f64> {
    table
        .get(library)?
        .iter()
        .find(|m| m.parser == parser)
        .map(value)
        .filter(|&v| v > 0.0)
}

#[cfg(test)]
mod tests {
    use common::types::Language;

    use super::*;

    fn one_row(parser: &str) -> Vec<Measurement> {
        vec![Measurement {
            parser: parser.to_owned(),
            language: Language::Rust,
            avg_time_ms: 0.138,
            throughput_kb_ms: 76.2,
        }]
    }

    #[test]
    fn present_libraries_keeps_size_order_and_drops_absent() {
        let mut table = ResultTable::new();
        for library in ["TypeScript Compiler", "React", "Lodash"] {
            table.insert(library.to_owned(), one_row("OXC"));
        }

        assert_eq!(
            present_libraries(&table),
            ["React", "Lodash", "TypeScript Compiler"]
        );
    }

    #[test]
    fn parser_value_is_none_for_missing_pairs() {
        let mut table = ResultTable::new();
        table.insert("React".to_owned(), one_row("OXC"));

        assert_eq!(
            parser_value(&table, "React", "OXC", |m| m.avg_time_ms),
            Some(0.138)
        );
        assert_eq!(parser_value(&table, "React", "SWC", |m| m.avg_time_ms), None);
        assert_eq!(parser_value(&table, "Vue 3", "OXC", |m| m.avg_time_ms), None);
    }
}
