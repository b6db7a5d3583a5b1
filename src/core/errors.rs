use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Error, Debug, Serialize)]
pub enum DtMoneyError {
    /// The request never produced a response (connection refused, reset, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The backend answered with a non-success status
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body could not be decoded
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The request could not be built or encoded
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    #[error("Transaction {0} not found")]
    TransactionNotFound(u64),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl DtMoneyError {
    pub fn invalid_input(field: &str, title: &str, description: impl Into<String>) -> Self {
        DtMoneyError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }

    /// True for every failure of a call against the backend: transport errors,
    /// non-success statuses and malformed bodies.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            DtMoneyError::RequestFailed(_)
                | DtMoneyError::UnexpectedStatus { .. }
                | DtMoneyError::InvalidResponse(_)
                | DtMoneyError::InvalidRequest(_)
        )
    }
}
