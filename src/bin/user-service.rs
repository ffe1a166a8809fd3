use clap::{Parser, Subcommand};
use std::path::PathBuf;
use user_service::{self, server::ServerConfig};

/// User Service HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, env = "USER_SERVICE_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, env = "USER_SERVICE_LOG", default_value = "info")]
    log_level: String,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server with a specific configuration file
    Config {
        /// Path to the JSON configuration file
        #[arg(short, long)]
        file: PathBuf,
    },
}

impl Cli {
    fn server_config(&self) -> anyhow::Result<ServerConfig> {
        match &self.command {
            Some(Commands::Config { file }) => ServerConfig::from_file(file),
            None => Ok(ServerConfig {
                host: self.host.clone(),
                port: self.port,
                log_level: self.log_level.clone(),
            }),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.server_config()?;

    // Tracing is initialized by the library from config.log_level
    user_service::start_with_config(config).await
}
