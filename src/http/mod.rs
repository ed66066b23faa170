//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → unique_hrefs.rs (parse body, compare documents)
//!     → error.rs / UniqueHrefsReport (JSON response)
//!     → Send to client
//! ```

pub mod request;
pub mod server;
pub mod unique_hrefs;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
