//! Mock Analysis Server
//!
//! A local stand-in for the analysis backend, built with Axum. Useful for
//! driving the front ends without the real image model.
//!
//! # Endpoints
//!
//! - `POST /analyze-image` - multipart upload, answers with the fixture
//! - `GET /health` - liveness
//!
//! # Example
//!
//! ```rust,ignore
//! use macrolens::config::Config;
//! use macrolens::mock::serve;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     serve(&config.mock, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::{MockError, MockResult};
pub use handlers::NO_IMAGE_MESSAGE;
pub use state::{load_fixture, sample_response, MockState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{MockConfig, ServerConfig};

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Build the mock router with the analysis route at `/analyze-image`
pub fn build_router(state: MockState) -> Router {
    build_router_at(state, "/analyze-image")
}

/// Build the mock router with the analysis route at `analyze_path`
pub fn build_router_at(state: MockState, analyze_path: &str) -> Router {
    let analyze_path = format!("/{}", analyze_path.trim_start_matches('/'));

    Router::new()
        .route(&analyze_path, post(handlers::analyze_image))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Start the mock server
pub async fn serve(config: &MockConfig, server: &ServerConfig) -> MockResult<()> {
    let state = MockState::new(config, server.image_field.clone())?;
    let router = build_router_at(state, &server.analyze_path);

    let listener = bind(config).await?;

    tracing::info!(
        "MacroLens mock analysis server listening on {}",
        listener.local_addr()?
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MockError::Serve(e.to_string()))?;

    tracing::info!("Mock server shut down gracefully");
    Ok(())
}

/// Bind the configured host and port. Host names are resolved, so
/// `localhost` works as well as a literal address.
pub async fn bind(config: &MockConfig) -> MockResult<TcpListener> {
    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    Ok(listener)
}

/// Wait for shutdown signal
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
