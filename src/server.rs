use anyhow::Context;
use axum::Router;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::registry::{UserRegistry, UserStore};
use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Default log filter, used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    /// User storage
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(store: impl UserStore + 'static) -> Self {
        Self {
            users: Arc::new(store),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(UserRegistry::new())
    }
}

/// Build the application with all routes and layers
pub fn create_app(state: AppState) -> Router {
    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve on an already bound listener until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Start the HTTP server and run until Ctrl-C
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    // The registry lives exactly as long as the server
    let state = AppState::default();
    info!("Initialized user registry");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Starting server on {}", listener.local_addr()?);

    serve(listener, state, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
