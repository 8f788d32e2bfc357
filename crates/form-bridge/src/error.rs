//! Bridge Errors
//!
//! Everything that can make a handler fall back to its fixed error text.

use thiserror::Error;

/// Common result type for bridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Failures caught by the handlers
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Request never produced a response (connection refused, CORS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Response body was not the JSON shape we expected
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A field the handler cannot do without was absent
    #[error("Missing field in response: {0}")]
    MissingField(&'static str),

    /// The browser form could not be read into a payload
    #[error("Form error: {0}")]
    Form(String),
}

impl From<reqwest::Error> for BridgeError {
    fn from(err: reqwest::Error) -> Self {
        BridgeError::Network(err.to_string())
    }
}
