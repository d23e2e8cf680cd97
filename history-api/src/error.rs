use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),
}

impl ApiError {
    /// True when the failure was caused by the caller's payload rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ApiError::ValidationError(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
