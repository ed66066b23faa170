//! Href set difference between relationship exports, served over HTTP.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relationships;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relationships::{extract_hrefs, find_unique_hrefs, UniqueHrefsReport};
