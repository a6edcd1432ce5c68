//! FireRisk Server - prediction form and API
//!
//! Serves the HTML form that collects the nine readings, plus a JSON
//! endpoint for programmatic callers.

pub mod config;
pub mod http;
pub mod pages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use firerisk_core::RiskPredictor;

use crate::config::ServerConfig;

/// Shared application state
///
/// Read-only after startup; requests never take a lock.
pub struct AppState {
    pub predictor: RiskPredictor,
}

impl AppState {
    pub fn new(predictor: RiskPredictor) -> Self {
        Self { predictor }
    }

    /// Load artifacts from the configured models directory
    ///
    /// A failed load leaves the state without a model; it does not abort
    /// startup.
    pub fn from_config(config: &ServerConfig) -> Self {
        let predictor = firerisk_core::load_predictor(
            &config.models.dir,
            &config.models.scaler_file,
            &config.models.model_file,
        );
        if !predictor.is_available() {
            tracing::warn!("Serving without a model; predictions will be refused");
        }
        Self::new(predictor)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RiskPredictor::unavailable())
    }
}

/// Create the router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Form pages
        .route("/", get(http::index))
        .route("/home", get(http::home))
        .route(
            "/predictdata",
            get(http::home).post(http::predict_datapoint),
        )
        // JSON API
        .route("/api/predict", post(http::api_predict))
        .route("/status", get(http::get_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the server
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("FireRisk server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
