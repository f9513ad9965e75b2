//! Rowhouse CLI: classify a property financial CSV export from the command
//! line and print the result as JSON or a short digest.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use rowhouse_classify::{classify_csv, ClassificationResult, ClassifyOptions};
use rowhouse_core::BucketConfig;

#[derive(Parser)]
#[command(name = "rowhouse")]
#[command(about = "Classify property financial CSV exports", long_about = None)]
struct Cli {
    /// Input CSV file (stdin if not provided)
    input: Option<PathBuf>,

    /// Property name used in the analysis summary (defaults to the file stem)
    #[arg(short, long)]
    property: Option<String>,

    /// TOML file with additional bucket definitions
    #[arg(long)]
    buckets: Option<PathBuf>,

    /// Output style
    #[arg(long, value_enum, default_value_t = Output::Json)]
    output: Output,

    /// Minimum similarity for a header to be assigned a bucket
    #[arg(long, default_value_t = 60.0)]
    assign_threshold: f32,

    /// Score below which a header is flagged for confirmation
    #[arg(long, default_value_t = 70.0)]
    confirm_threshold: f32,
}

#[derive(Clone, Copy, ValueEnum)]
enum Output {
    Json,
    Summary,
}

fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = BucketConfig::default();
    if let Some(path) = &cli.buckets {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading bucket config {}", path.display()))?;
        let custom = BucketConfig::from_toml(&content)
            .with_context(|| format!("parsing bucket config {}", path.display()))?;
        config = config.merge(custom);
    }

    let options = ClassifyOptions {
        assign_threshold: cli.assign_threshold,
        confirm_threshold: cli.confirm_threshold,
        ..ClassifyOptions::default()
    };

    let property = cli.property.clone().unwrap_or_else(|| {
        cli.input
            .as_deref()
            .and_then(|p| p.file_stem())
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "stdin".to_string())
    });

    let result = match &cli.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            classify_csv(file, &property, &config, &options)?
        }
        None => classify_csv(io::stdin(), &property, &config, &options)?,
    };

    match cli.output {
        Output::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        Output::Summary => print_summary(&result),
    }

    Ok(())
}

fn print_summary(result: &ClassificationResult) {
    println!("Property: {}", result.property);
    println!("Format:   {}", result.format);
    println!();

    println!("Headers:");
    for matched in &result.header_matches {
        println!(
            "  {:<30} -> {:<18} ({:.0})",
            matched.header, matched.bucket, matched.score
        );
    }
    if result.needs_user_confirmation {
        println!(
            "  {} header(s) below the confirmation threshold",
            result.low_confidence_headers.len()
        );
    }
    println!();

    let analysis = &result.analysis;
    println!(
        "Records: {} ({} unique accounts, {} cells skipped)",
        analysis.total_records, analysis.unique_accounts, result.skipped_cells
    );
    println!("Total:   {}", analysis.total_amount);
    for (category, count) in &analysis.category_counts {
        println!("  {:<14} {}", category.to_string(), count);
    }
    if let Some(revenue) = &analysis.revenue {
        println!(
            "Revenue:  {} over {} records (avg {})",
            revenue.total, revenue.records, revenue.average
        );
    }
    if let Some(expenses) = &analysis.expenses {
        println!(
            "Expenses: {} over {} records (avg {})",
            expenses.total, expenses.records, expenses.average
        );
    }

    for anomaly in &analysis.anomalies {
        println!("[{}] {}", anomaly.severity, anomaly.message);
    }
}
