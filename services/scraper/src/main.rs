//! Well page scraper service.
//!
//! Reads a list of API well numbers, fetches each well's detail page from
//! the OCD permitting site, normalizes it into a typed record and appends it
//! to the well database. Per-well failures are logged and skipped; the run
//! always processes the full list.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use ingestion::{fetch::DEFAULT_BASE_URL, CoordinatePolicy, HttpPageSource, IngestionPipeline, Normalizer};
use storage::WellStore;

#[derive(Parser, Debug)]
#[command(name = "scraper")]
#[command(about = "Scrape OCD well detail pages into the well database")]
struct Args {
    /// File with one API well number per line
    #[arg(short, long, default_value = "apis.csv", env = "SCRAPER_API_LIST")]
    list: PathBuf,

    /// SQLite database path
    #[arg(short, long, default_value = "wells.db", env = "WELLS_DATABASE")]
    database: PathBuf,

    /// Base URL of the well-detail page
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "SCRAPER_BASE_URL")]
    base_url: String,

    /// Per-request fetch timeout in seconds
    #[arg(long, default_value_t = 30, env = "SCRAPER_TIMEOUT_SECS")]
    timeout_secs: u64,

    /// Treat the first line of the list as data instead of a header
    #[arg(long)]
    no_header: bool,

    /// Drop latitude/longitude when the coordinate token has no CRS label
    #[arg(long)]
    strict_coordinates: bool,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt().with_env_filter(filter).with_target(true).init();

    info!(list = %args.list.display(), database = %args.database.display(), "Starting well scraper");

    let contents = fs::read_to_string(&args.list)
        .with_context(|| format!("Failed to read API list {}", args.list.display()))?;
    let apis: Vec<&str> = contents
        .lines()
        .skip(if args.no_header { 0 } else { 1 })
        .collect();

    let store = WellStore::open(&args.database)
        .await
        .context("Failed to open well database")?;

    let source = HttpPageSource::new(&args.base_url, Duration::from_secs(args.timeout_secs))
        .context("Failed to build page fetcher")?;

    let policy = if args.strict_coordinates {
        CoordinatePolicy::Strict
    } else {
        CoordinatePolicy::Preserve
    };

    let pipeline = IngestionPipeline::new(Box::new(source), store.clone(), Normalizer::new(policy));
    let report = pipeline.run(apis).await;

    info!(
        succeeded = report.succeeded,
        failed = report.failed,
        total = report.total(),
        "Scrape finished"
    );

    store.close().await;
    Ok(())
}
