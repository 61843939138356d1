//! # HTTP Server for Label Editing and Printing
//!
//! Serves the preview page and a JSON API for editing and printing the
//! session's label.
//!
//! ## Usage
//!
//! ```bash
//! doselabel serve --listen 0.0.0.0:8080 --state label-state.json --command lp
//! ```
//!
//! Then open http://localhost:8080 in a browser to see the preview.

mod handlers;
mod state;

pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::error::LabelError;

/// Build the router over `state`.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Preview page
        .route("/", get(handlers::label::index))
        // Label API
        .route("/api/label", get(handlers::label::get))
        .route("/api/label/field", post(handlers::label::update_field))
        .route("/api/label/reset", post(handlers::label::reset))
        .route("/api/label/preview", get(handlers::label::preview))
        .route("/api/label/print", post(handlers::label::print))
        .route(
            "/api/label/mixture-choices",
            get(handlers::label::mixture_choices),
        )
        // Counseling catalog
        .route(
            "/api/counseling/predefined",
            get(handlers::counseling::predefined),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use doselabel::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), doselabel::error::LabelError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:8080".to_string(),
///     ..ServerConfig::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), LabelError> {
    let app_state = Arc::new(AppState::new(config.clone()));
    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .map_err(|e| {
            LabelError::Server(format!("Failed to bind to {}: {}", config.listen_addr, e))
        })?;

    tracing::info!(
        listen = %config.listen_addr,
        print_target = %config.print_target,
        state = ?config.state_path,
        "doselabel server started"
    );
    tracing::info!("Open http://{}/ in your browser to preview", config.listen_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| LabelError::Server(format!("Server error: {}", e)))?;

    Ok(())
}
