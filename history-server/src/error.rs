use history_db::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("history store: {0}")]
    Store(#[from] StoreError),

    #[error("bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serve: {0}")]
    Io(#[from] std::io::Error),
}
