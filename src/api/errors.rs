//! Error types for backend calls

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unexpected HTTP status {status}: {body}")]
    StatusError { status: u16, body: String },

    #[error("Backend rejected the request (code {code}): {message}")]
    Rejected { code: i32, message: String },

    #[error("Session token expired, log in again")]
    TokenExpired,

    #[error("Backend reported success without data")]
    MissingData,

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl ApiError {
    /// The backend answered, but with a non-success envelope
    pub fn is_application_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Rejected { .. } | ApiError::TokenExpired | ApiError::MissingData
        )
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
