//! href-diff server.
//!
//! Compares two relationship exports (e.g. "following" against "followers")
//! and reports the hrefs present only in the first.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /unique_hrefs
//!     ─────────────────────┐
//!                          ▼
//!     ┌──────────────────────────────────────────────────────┐
//!     │ request id → trace → cors → timeout → body limit     │  http/server.rs
//!     └──────────────────────────┬───────────────────────────┘
//!                                ▼
//!     ┌──────────────────────────────────────────────────────┐
//!     │ parse body, take json1 / json2                       │  http/unique_hrefs.rs
//!     └──────────────────────────┬───────────────────────────┘
//!                                ▼
//!     ┌──────────────────────────────────────────────────────┐
//!     │ extract hrefs → difference → sort + strip ".com/"    │  relationships/
//!     └──────────────────────────┬───────────────────────────┘
//!                                ▼
//!     {"unique_hrefs": [...], "count": n}  or  {"error": "..."}
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use href_diff::config::{load_config, validate_config, ConfigError, ServiceConfig};
use href_diff::http::HttpServer;
use href_diff::lifecycle::Shutdown;
use href_diff::observability::{logging, metrics};

#[derive(Parser, Debug)]
#[command(name = "href-diff")]
#[command(about = "HTTP service that diffs href sets between two relationship exports", long_about = None)]
struct Args {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override observability.log_level.
    #[arg(long)]
    log_level: Option<String>,

    /// Enable debug mode.
    #[arg(long)]
    debug: bool,
}

impl Args {
    fn into_config(self) -> Result<ServiceConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(level) = self.log_level {
            config.observability.log_level = level;
        }
        if self.debug {
            config.debug = true;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Args::parse().into_config()?;

    logging::init_logging(&config)?;

    tracing::info!("href-diff v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        debug = config.debug,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        metrics::init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
