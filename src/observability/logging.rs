//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Pick text or JSON output
//! - Configure log level from config, overridable by `RUST_LOG`

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

use crate::config::ServiceConfig;

/// Default filter directive for a level.
pub fn default_directive(level: &str) -> String {
    let level = level.to_ascii_lowercase();
    format!("href_diff={level},tower_http={level}")
}

/// Install the global subscriber.
pub fn init_logging(config: &ServiceConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(config.effective_log_level()).into());

    let json = config.observability.json_logs;

    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| fmt::layer().json()))
        .with((!json).then(fmt::layer))
        .try_init()
}
