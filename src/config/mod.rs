//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides applied in main.rs
//!     → ServiceConfig (validated, immutable)
//!     → consumed once by HttpServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    CorsConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, TimeoutConfig,
};
pub use validation::{validate_config, ValidationError};
