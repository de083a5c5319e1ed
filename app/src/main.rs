use std::{fs, path::PathBuf};

use clap::Parser;
use common::error::ReportError;
use eyre::Result;
use report::normalize::CANONICAL_NAMES;
use tracing::error;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Generate comparison graphs from cross-language parser benchmark reports.
#[derive(Parser)]
struct Cli {
    /// Directory the benchmark harnesses wrote their reports to
    #[arg(long, default_value = "benchmark-results")]
    results_dir: PathBuf,
    /// Directory the rendered charts are written to
    #[arg(long, default_value = "benchmark-graphs")]
    output_dir: PathBuf,
    #[arg(short, long)]
    log: Vec<String>,
}

fn main() -> Result<()> {
    let modules: &[&str] = &["report", "plots", "common"];
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let args = Cli::parse();
    let file_appender = tracing_appender::rolling::never(".", "log.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let mut env_filter = EnvFilter::new(format!("bench_graphs={log_level}"));

    if !args.log.is_empty() {
        for log in &args.log {
            env_filter = env_filter.add_directive(log.parse()?);
        }
    }

    for module in modules {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .compact(),
        )
        .with(layer().with_writer(non_blocking))
        .init();

    if let Err(err) = run(&args) {
        error!("{err:#?}");
        return Err(err);
    }

    Ok(())
}

fn run(args: &Cli) -> Result<()> {
    if !args.results_dir.exists() {
        println!("Run the benchmarks first with: ./scripts/run-all-benchmarks.sh");
        return Err(ReportError::MissingResultsDir(args.results_dir.clone()).into());
    }
    fs::create_dir_all(&args.output_dir)?;

    let table = report::collect(&args.results_dir, CANONICAL_NAMES)?;

    println!("Found results for {} libraries:", table.len());
    for (library, measurements) in &table {
        let parsers = measurements
            .iter()
            .map(|m| m.parser.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {library}: {parsers}");
    }
    println!();

    println!("Generating graphs...");
    report::output::write_results_json(&table, &args.output_dir)?;
    plots::render_all(&table, &args.output_dir)?;

    println!();
    println!("All graphs saved to: {}", args.output_dir.display());
    Ok(())
}
