//! Trendcast API Server
//!
//! Serves `/predict/{symbol}` trend guesses plus health and metrics endpoints.
//! The service is stateless apart from the symbol list cache and can be
//! horizontally scaled.

use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use trendcast::config::{get_environment, AppConfig};
use trendcast::core::http::start_server;
use trendcast::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let config = AppConfig::from_env();
    let port = config.port;

    info!("Starting Trendcast API Server");
    info!(environment = %get_environment(), "Environment");
    info!(port = port, "HTTP Server: http://0.0.0.0:{}", port);

    let server_handle = tokio::spawn(async move {
        if let Err(e) = start_server(config).await {
            error!(error = %e, "HTTP server error");
        }
    });

    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutting down API server...");
        }
        _ = server_handle => {
            error!("HTTP server stopped");
        }
    }

    Ok(())
}
