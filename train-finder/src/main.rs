use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use train_finder::cli::{complete_query, write_trains, write_trains_json};
use train_finder::finder::{DEFAULT_MAX_RESULTS, FinderConfig, TrainFinder};

/// Find direct trains between two stations.
///
/// Any of the three query fields left off the command line is prompted for.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Opt {
    /// Departure station number
    departure: Option<String>,

    /// Arrival station number
    arrival: Option<String>,

    /// Sort criterion: price, arrival-time or departure-time
    criterion: Option<String>,

    /// Timetable JSON file
    #[arg(long, env = "TRAIN_FINDER_DATA", default_value = "data.json")]
    data: PathBuf,

    /// Maximum number of trains to show
    #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
    limit: usize,

    /// Print results as JSON records
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let opt = Opt::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let query = complete_query(
        &mut stdin.lock(),
        &mut stdout.lock(),
        opt.departure,
        opt.arrival,
        opt.criterion,
    )
    .context("failed to read query")?;

    let config = FinderConfig::new(opt.data).with_max_results(opt.limit);
    let finder = TrainFinder::from_config(&config);

    let trains = finder.find_trains(&query.departure, &query.arrival, &query.criterion)?;

    let mut out = stdout.lock();
    if opt.json {
        write_trains_json(&mut out, &trains)?;
    } else {
        write_trains(&mut out, &trains)?;
    }
    out.flush()?;

    Ok(())
}
