use std::path::Path;

use common::types::{Measurement, ResultTable};
use eyre::Result;
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};

use crate::{
    AXIS_LABEL_FONT_SIZE, DATA_LABEL_FONT_SIZE, PANEL_TITLE_FONT_SIZE, TICK_LABEL_FONT_SIZE,
    TITLE_FONT_SIZE, palette::parser_color,
};

const BAR_HEIGHT: f64 = 0.6;

/// One horizontal bar chart for a single library, fastest parser on top,
/// parse time labeled at the end of each bar. No file is written when the
/// library has no results.
pub fn library_chart(table: &ResultTable, library: &str, per_library_dir: &Path) -> Result<()> {
    let Some(rows) = table.get(library) else {
        return Ok(());
    };
    let rows = sorted_by_time(rows);
    if rows.is_empty() {
        return Ok(());
    }

    let path = per_library_dir.join(format!("{}_comparison.svg", slug(library)));
    let root = SVGBackend::new(&path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let num_rows = rows.len();
    let max_time = rows
        .iter()
        .map(|m| m.avg_time_ms)
        .fold(0.0_f64, |a, b| a.max(b));

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Parser Performance: {library} (Lower is Better)"),
            ("sans-serif", TITLE_FONT_SIZE),
        )
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(150)
        .build_cartesian_2d(
            0.0..(max_time * 1.25).max(1.0),
            -0.5..(num_rows as f64 - 0.5),
        )?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(num_rows)
        .y_label_formatter(&|y| parser_tick(&rows, *y))
        .x_desc("Parsing Time (ms)")
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for (idx, measurement) in rows.iter().enumerate() {
        let color = parser_color(&measurement.parser, measurement.language);
        let y_center = (num_rows - 1 - idx) as f64;

        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (0.0, y_center - BAR_HEIGHT / 2.0),
                (measurement.avg_time_ms, y_center + BAR_HEIGHT / 2.0),
            ],
            color.filled(),
        )))?;

        chart.draw_series(std::iter::once(Text::new(
            format!("{:.2} ms", measurement.avg_time_ms),
            (measurement.avg_time_ms + max_time * 0.02, y_center),
            ("sans-serif", DATA_LABEL_FONT_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center)),
        )))?;
    }

    root.present()?;
    println!("Saved: {}", path.display());
    Ok(())
}

/// Two-panel deep dive for the largest bundle: parse time on the left,
/// throughput on the right, both ordered by parse time. Skipped when the
/// TypeScript results are absent.
pub fn typescript_detailed_chart(table: &ResultTable, path: &Path) -> Result<()> {
    let Some(rows) = table.get("TypeScript Compiler") else {
        return Ok(());
    };
    let rows = sorted_by_time(rows);
    if rows.is_empty() {
        return Ok(());
    }

    let root = SVGBackend::new(path, (1400, 600)).into_drawing_area();
    root.fill(&WHITE)?;
    let titled = root.titled(
        "TypeScript Compiler (8.8 MB) - Parser Performance",
        ("sans-serif", TITLE_FONT_SIZE),
    )?;
    let panels = titled.split_evenly((1, 2));

    detail_panel(
        &panels[0],
        &rows,
        "Parsing Time (Lower is Better)",
        "Parsing Time (ms)",
        "ms",
        |m| m.avg_time_ms,
    )?;
    detail_panel(
        &panels[1],
        &rows,
        "Throughput (Higher is Better)",
        "Throughput (KB/ms)",
        "KB/ms",
        |m| m.throughput_kb_ms,
    )?;

    root.present()?;
    println!("Saved: {}", path.display());
    Ok(())
}

fn detail_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    rows: &[&Measurement],
    title: &str,
    x_desc: &str,
    unit: &str,
    value: impl Fn(&Measurement) -> f64,
) -> Result<()> {
    let num_rows = rows.len();
    let max_value = rows
        .iter()
        .map(|m| value(m))
        .fold(0.0_f64, |a, b| a.max(b));

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", PANEL_TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(50)
        .y_label_area_size(130)
        .build_cartesian_2d(
            0.0..(max_value * 1.3).max(1.0),
            -0.5..(num_rows as f64 - 0.5),
        )?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(num_rows)
        .y_label_formatter(&|y| parser_tick(rows, *y))
        .x_desc(x_desc)
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for (idx, measurement) in rows.iter().enumerate() {
        let color = parser_color(&measurement.parser, measurement.language);
        let y_center = (num_rows - 1 - idx) as f64;
        let bar_value = value(measurement);

        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (0.0, y_center - BAR_HEIGHT / 2.0),
                (bar_value, y_center + BAR_HEIGHT / 2.0),
            ],
            color.filled(),
        )))?;

        chart.draw_series(std::iter::once(Text::new(
            format!("{bar_value:.1} {unit}"),
            (bar_value + max_value * 0.02, y_center),
            ("sans-serif", DATA_LABEL_FONT_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Left, VPos::Center)),
        )))?;
    }

    Ok(())
}

fn sorted_by_time(rows: &[Measurement]) -> Vec<&Measurement> {
    let mut rows: Vec<&Measurement> = rows.iter().collect();
    rows.sort_by(|a, b| a.avg_time_ms.total_cmp(&b.avg_time_ms));
    rows
}

fn parser_tick(rows: &[&Measurement], y: f64) -> String {
    let idx = y.round() as usize;
    if idx < rows.len() && (y - idx as f64).abs() < 0.3 {
        // Fastest row sits at the top of the axis.
        rows.get(rows.len() - 1 - idx)
            .map(|m| m.parser.clone())
            .unwrap_or_default()
    } else {
        String::new()
    }
}

fn slug(library: &str) -> String {
    library.to_lowercase().replace(' ', "_").replace('.', "")
}
