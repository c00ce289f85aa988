use std::{io, path::PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use warmup_rs::config::PlannerConfig;

#[derive(Parser)]
#[command(version, about = "Plan barbell warmups and the plate changes between them")]
struct Args {
    /// Working weight to build up to
    target: f64,

    /// Bar weight
    #[arg(short, long)]
    bar: Option<f64>,

    /// Plate denominations on hand, e.g. 45,25,10,5,2.5,1.25
    #[arg(short, long, value_delimiter = ',')]
    plates: Option<Vec<f64>>,

    /// Warmup percentages of the working weight
    #[arg(short, long = "warmup", value_delimiter = ',')]
    warmups: Option<Vec<f64>>,

    /// Skip warmups and go straight to the working set
    #[arg(long, conflicts_with = "warmups")]
    no_warmups: bool,

    /// JSON file with bar_weight, plates and warmups
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the plan as JSON
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut config = match &args.config {
        Some(path) => PlannerConfig::from_path(path)?,
        None => PlannerConfig::default(),
    };
    if let Some(bar) = args.bar {
        config.bar_weight = bar;
    }
    if let Some(plates) = args.plates {
        config.plates = plates;
    }
    if let Some(warmups) = args.warmups {
        config.warmups = warmups;
    }
    if args.no_warmups {
        config.warmups.clear();
    }

    let result = config
        .planner()
        .and_then(|planner| planner.plan(args.target, &config.warmups));

    if args.json {
        let json = match result {
            Ok(progression) => serde_json::to_string_pretty(&progression)?,
            Err(err) => serde_json::to_string_pretty(&serde_json::json!({ "error": err.to_string() }))?,
        };
        println!("{json}");
        return Ok(());
    }

    for set in &result? {
        println!("{set}");
    }

    Ok(())
}
