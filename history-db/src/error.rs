use thiserror::Error;

/// Failures raised by a history store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend connection, statement or schema setup failed.
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    #[error("refusing to store an empty document")]
    EmptyDocument,

    #[error("failed to decode history row: {0}")]
    Decode(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
