use clap::Parser;
use history_postgres::PoolSettings;
use std::path::PathBuf;
use std::time::Duration;

use crate::app::StaticAssets;

#[derive(Parser, Clone)]
#[command(name = "history-server", about = "Saves and serves the latest history document")]
pub struct ServerConfig {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: String,

    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    #[arg(long, default_value_t = 3000, env = "PORT")]
    pub port: u16,

    /// Directory served at `/` (index.html, scripts, styles)
    #[arg(long, default_value = "public", env = "PUBLIC_DIR")]
    pub public_dir: PathBuf,

    /// Directory served under `/input`
    #[arg(long, default_value = "input", env = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Directory served under `/output`
    #[arg(long, default_value = "output", env = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    #[arg(long, default_value_t = 10, env = "DATABASE_MAX_CONNECTIONS")]
    pub max_connections: u32,

    #[arg(long, default_value_t = 30, env = "DATABASE_ACQUIRE_TIMEOUT_SECS")]
    pub acquire_timeout_secs: u64,

    /// Largest accepted request body, in bytes
    #[arg(long, default_value_t = 100 * 1024, env = "BODY_LIMIT")]
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: Duration::from_secs(self.acquire_timeout_secs),
        }
    }

    pub fn static_assets(&self) -> StaticAssets {
        StaticAssets {
            public_dir: self.public_dir.clone(),
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
        }
    }
}
