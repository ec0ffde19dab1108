//! Well query API server.
//!
//! Serves exact lookup by API number and polygon containment queries over
//! the well database.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Extension, Router};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use well_api::handlers;
use well_api::state::AppState;

#[derive(Parser, Debug)]
#[command(name = "well-api")]
#[command(about = "Query API for scraped well records")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:5000", env = "WELL_API_LISTEN_ADDR")]
    listen: String,

    /// SQLite database path
    #[arg(short, long, default_value = "wells.db", env = "WELLS_DATABASE")]
    database: PathBuf,

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

    info!("Starting well query API");

    let state = AppState::new(&args.database)
        .await
        .context("Failed to open well database")?;
    let state = Arc::new(state);

    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/well", get(handlers::get_well))
        .route("/polygon", get(handlers::wells_in_polygon))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&args.listen)
        .await
        .with_context(|| format!("Failed to bind {}", args.listen))?;
    info!(addr = %args.listen, "Listening");

    axum::serve(listener, app).await.context("Server failed")?;
    Ok(())
}
