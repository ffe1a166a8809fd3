//! User Service HTTP API
//!
//! A small user-registration service: create a user, fetch it back by id,
//! and report liveness. Users are kept in memory for the lifetime of the
//! server process.

pub mod error;
pub mod extractor;
pub mod handlers;
pub mod models;
pub mod registry;
pub mod routes;
pub mod server;

use server::{ServerConfig, start_server};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over `default_level` when set. Calling this twice is harmless.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_err()
    {
        debug!("Tracing subscriber already installed");
    }
}

/// Start the user service with the default configuration
pub async fn start() -> anyhow::Result<()> {
    start_with_config(ServerConfig::default()).await
}

/// Start the user service with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> anyhow::Result<()> {
    // Initialize tracing for logging
    init_tracing(&config.log_level);

    start_server(config).await
}
