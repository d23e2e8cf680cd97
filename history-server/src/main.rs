mod app;
mod config;
mod error;
mod routes;
mod serve;

use clap::Parser;
use config::ServerConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = ServerConfig::parse();
    if let Err(e) = serve::run(config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
