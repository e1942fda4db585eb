use thiserror::Error;

/// Error type for Zora coins API operations
#[derive(Debug, Error)]
pub enum ZoraClientError {
    /// Error from the reqwest HTTP client
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// Non-success status from the API
    #[error("API error: {0}")]
    ApiError(String),
    /// Body could not be decoded into the expected shape
    #[error("Response error: {0}")]
    ResponseError(String),
    /// The API answered but has no such record
    #[error("{0}")]
    NotFound(String),
    /// Caller supplied an address or amount we cannot build a call from
    #[error("{0}")]
    InvalidInput(String),
}
