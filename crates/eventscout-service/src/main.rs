//! Event discovery proxy service binary.
//!
//! # Configuration
//!
//! - `TICKETMASTER_API_KEY` - Discovery API key (required)
//! - `TICKETMASTER_BASE_URL` - Discovery API base URL override (optional)
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - log level (default: info)
//! - `LOG_FORMAT` - log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use eventscout_lib::DiscoveryConfig;
use eventscout_service::{build_router, init_logging, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::from_env());

    let config = DiscoveryConfig::from_env().map_err(|e| {
        error!(error = %e, "configuration is incomplete");
        e
    })?;

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(base_url = %config.base_url, port = port, "starting eventscout service");

    let state = AppState::from_config(config)?;
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
