use std::sync::Arc;

use history_db::service::HistoryServiceImpl;
use history_postgres::PostgresRepositories;
use sqlx::Postgres;
use tokio::net::TcpListener;

use crate::app::{self, AppState};
use crate::config::ServerConfig;
use crate::error::ServerError;

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    tracing::info!("history-server starting");

    // --- Store ---
    let repos = PostgresRepositories::connect(&config.database_url, config.pool_settings()).await?;
    let history_repository = repos.create_history_repository();

    // Schema setup failure is fatal: no listener is bound.
    let service = HistoryServiceImpl::<Postgres, _>::initialize(history_repository).await?;

    // --- HTTP ---
    let assets = config.static_assets();
    let app = app::router(AppState::new(Arc::new(service)), &assets, config.body_limit);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!(
        addr = %addr,
        public = %assets.public_dir.display(),
        input = %assets.input_dir.display(),
        output = %assets.output_dir.display(),
        "server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    repos.close().await;
    tracing::info!("shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down...");
}
