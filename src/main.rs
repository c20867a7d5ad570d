//! Combined static asset service.
//!
//! Serves multiple static text resources (scripts or stylesheets) as a
//! single HTTP response to cut round-trips for a page's assets.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │               ASSET COMBINER                 │
//!                    │                                              │
//!   GET /js/a,b.js   │  ┌────────┐   ┌─────────┐   ┌─────────────┐  │
//!   ─────────────────┼─▶│  http  │──▶│  merge  │──▶│   resolve   │  │
//!                    │  │ server │   │  cache  │   │ (path fold) │  │
//!                    │  └────────┘   └────┬────┘   └──────┬──────┘  │
//!                    │                    │ miss          │         │
//!                    │                    ▼               ▼         │
//!   merged response  │               ┌─────────┐   ┌─────────────┐  │
//!   ◀────────────────┼───────────────│ concat  │◀──│    fetch    │◀─┼── document
//!                    │               └─────────┘   │ (doc root)  │  │     root
//!                    │                             └─────────────┘  │
//!                    │                                              │
//!                    │  cross-cutting: config · observability ·     │
//!                    │  lifecycle · admin                           │
//!                    └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use asset_combiner::config::{self, CombinerConfig};
use asset_combiner::http::HttpServer;
use asset_combiner::lifecycle::Shutdown;
use asset_combiner::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "asset-combiner")]
#[command(about = "Serves comma-combined JS/JSON/CSS resources as one response", version)]
struct Cli {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => CombinerConfig::default(),
    };

    logging::init(&config.observability.log_filter);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        root_dir = %config.assets.root_dir,
        context_path = %config.assets.context_path,
        cache_enabled = config.cache.enabled,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
