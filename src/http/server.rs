//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the `/unique_hrefs` handler
//! - Wire up middleware (request ID, tracing, CORS, timeout, body limit)
//! - Bind server to listener
//! - Graceful shutdown on signal or coordinator trigger

use std::time::Duration;

use axum::{
    body::Body,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, Request},
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{CorsConfig, ServiceConfig};
use crate::http::request::{request_id_of, MakeRequestUuidV4, X_REQUEST_ID};
use crate::http::unique_hrefs::unique_hrefs_handler;
use crate::lifecycle::signals::wait_for_signal;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Put malformed-document details into 500 bodies.
    pub expose_errors: bool,
}

/// HTTP server for the href-diff service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let state = AppState {
            expose_errors: config.debug,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let request_id_header = HeaderName::from_static(X_REQUEST_ID);

        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(
                request_id_header.clone(),
                MakeRequestUuidV4,
            ))
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request_id_of(request),
                    )
                }),
            )
            .layer(PropagateRequestIdLayer::new(request_id_header))
            .layer(cors_layer(&config.cors))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes));

        Router::new()
            .route("/unique_hrefs", post(unique_hrefs_handler))
            .with_state(state)
            .layer(middleware)
    }

    /// The fully layered router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    ///
    /// Stops on Ctrl+C / SIGTERM or when `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            debug = self.config.debug,
            "HTTP server starting"
        );

        let stop = async move {
            tokio::select! {
                _ = wait_for_signal() => {}
                _ = shutdown.recv() => {
                    tracing::info!("Shutdown requested");
                }
            }
        };

        axum::serve(listener, self.router)
            .with_graceful_shutdown(stop)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Cross-origin policy for browser clients.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    if config.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
