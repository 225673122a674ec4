use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use transit_priority::{Criterion, FrequencyPolicy, PriorityScorer, WeightSet};

mod catalog;
mod output;

use catalog::load_catalog;
use output::{build_rows, write_json, write_table};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "priority-report",
    author,
    version,
    about = "Rank transit corridor segments by weighted priority",
    long_about = "Scores each segment on frequency (vehicles/hour over 20), reliability \
                  (inverse delay over 10 minutes) and passenger load, combines them with \
                  the given weights, and prints segments from highest to lowest priority.\n\n\
                  Weights are relative: 40/30/30 and 4/3/3 give the same ranking. \
                  Segments with equal scores keep their catalog order."
)]
struct Args {
    /// Weight on service frequency
    #[arg(long, default_value_t = 40.0, conflicts_with = "metric")]
    frequency: f64,

    /// Weight on reliability (low delay)
    #[arg(long, default_value_t = 30.0, conflicts_with = "metric")]
    delay: f64,

    /// Weight on passenger load
    #[arg(long, default_value_t = 30.0, conflicts_with = "metric")]
    load: f64,

    /// Rank by a single criterion instead of the weights (frequency, delay or load)
    #[arg(short, long)]
    metric: Option<Criterion>,

    /// JSON file with an array of segments (defaults to the built-in bus spine)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Cap the frequency criterion at 1 like the delay criterion
    #[arg(long)]
    clamp_frequency: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .format_timestamp(None)
    .init();

    let catalog = load_catalog(args.catalog.as_deref())?;
    log::info!("Loaded {} segments", catalog.len());

    let scorer = PriorityScorer::new(if args.clamp_frequency {
        FrequencyPolicy::Clamped
    } else {
        FrequencyPolicy::Unclamped
    });

    let weights = match args.metric {
        Some(criterion) => {
            log::info!("Ranking by {criterion} only");
            WeightSet::only(criterion)
        }
        None => WeightSet::new(args.frequency, args.delay, args.load).context("Invalid weights")?,
    };

    if weights.is_zero() {
        log::warn!("All weights are zero; every segment scores 0 and catalog order is kept");
    }

    let normalized = weights.normalize();
    log::debug!(
        "Normalized weights: frequency {:.3}, delay {:.3}, load {:.3} ({} frequency)",
        normalized.frequency,
        normalized.delay,
        normalized.load,
        scorer.frequency_policy,
    );

    let ranked = catalog.rank_with(&scorer, &weights);
    let rows = build_rows(&ranked);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Table => write_table(&rows, &mut out),
        Format::Json => write_json(&rows, &mut out),
    }
    .context("Failed to write report")?;
    out.flush()?;

    Ok(())
}
