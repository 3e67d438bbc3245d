//! templUI documentation server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http (request id, trace, cache policy, timeout, limits)
//!                         │
//!                         ▼
//!                     DeliveryMode ── FullPage | FragmentSwap | StreamUpdate
//!                         │
//!                         ▼
//!                     render (page → document) ──▶ delivery::dispatch ──▶ Client
//!                         ▲
//!                         │ read()
//!                     MetricCache ◀── MetricRefresher ◀── GitHub API (every TTL)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use docs_server::config::load_config;
use docs_server::lifecycle::{signals, Shutdown};
use docs_server::metric::{GitHubStars, MetricCache, MetricRefresher};
use docs_server::observability::{logging, metrics};
use docs_server::DocsServer;

#[derive(Parser)]
#[command(name = "docs-server")]
#[command(about = "Documentation and showcase server", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init(&config.observability, config.runtime);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        runtime = %config.runtime,
        "docs-server starting"
    );
    if config.runtime.is_development() {
        tracing::info!("Development mode: responses are sent with Cache-Control: no-store");
    }

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let shutdown = Shutdown::new();
    let stars = MetricCache::new(config.stars.ttl());

    let refresher = if config.stars.enabled {
        let source = GitHubStars::new(&config.stars)?;
        tracing::info!(
            endpoint = %source.endpoint(),
            ttl_secs = config.stars.ttl_secs,
            "Star count refresh enabled"
        );
        let refresher = MetricRefresher::new(
            stars.clone(),
            source,
            config.stars.ttl(),
            config.stars.request_timeout(),
        );
        Some(refresher.spawn(shutdown.subscribe()))
    } else {
        tracing::info!("Star count refresh disabled");
        None
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = DocsServer::new(config, stars);
    let serve = server.run(listener, shutdown.subscribe());
    tokio::pin!(serve);

    tokio::select! {
        result = &mut serve => result?,
        _ = signals::forward_to(&shutdown) => serve.await?,
    }

    // Stop the refresher when the server exited on its own.
    shutdown.trigger();
    if let Some(handle) = refresher {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Refresh task ended abnormally");
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
