//! FireRisk Server Binary
//!
//! Loads the fitted artifacts once and serves the prediction form.

use std::sync::Arc;

use firerisk_server::config::ServerConfig;
use firerisk_server::{serve, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "firerisk_server=info,firerisk_core=info,tower_http=info".into()
            }),
        )
        .init();

    let config = ServerConfig::load()?;
    tracing::debug!("Resolved configuration: {:?}", config);

    let state = Arc::new(AppState::from_config(&config));
    serve(&config.server.addr, state).await
}
