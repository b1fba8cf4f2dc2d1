pub mod api;
pub mod config;
pub mod db;
pub mod error;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::load().expect("Failed to load configuration");

    info!("Starting CWSMS auth backend");
    info!("Available endpoints:");
    info!("  GET  /test");
    info!("  POST /api/login");
    info!("  POST /api/register");

    api::server::start_server(config).await;
}
