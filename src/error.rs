//! Unified SDK error types.

use thiserror::Error;

/// Message shown when a failure carries no usable detail.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unprocessable request: {0}")]
    Unprocessable(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Timeout")]
    Timeout,
}

/// Client-side validation failures. Never reach the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Address must start with 0x and be 42 characters long: {0:?}")]
    InvalidAddress(String),

    #[error("Field is required: {0}")]
    EmptyField(&'static str),

    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    #[error("Page {page} is out of range (1..={total_pages})")]
    PageOutOfRange { page: u32, total_pages: u32 },

    #[error("Page size must be between 1 and {max}, got {got}")]
    InvalidPageSize { got: u32, max: u32 },

    #[error("Spot price must be positive")]
    InvalidPrice,

    #[error("Point count must be positive")]
    InvalidPointCount,

    #[error("No wallet selected")]
    NoAddress,
}

/// The single human-readable failure a view shows in place of its content.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct FetchError {
    pub message: String,
}

impl FetchError {
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return Self {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            };
        }
        Self { message }
    }
}

impl From<&SdkError> for FetchError {
    fn from(err: &SdkError) -> Self {
        match err {
            SdkError::Http(http) => FetchError::from(http),
            SdkError::Validation(v) => FetchError::new(v.to_string()),
            SdkError::Serde(_) => FetchError::new("Unexpected response from server"),
            SdkError::Other(msg) => FetchError::new(msg.clone()),
        }
    }
}

impl From<SdkError> for FetchError {
    fn from(err: SdkError) -> Self {
        FetchError::from(&err)
    }
}

impl From<&HttpError> for FetchError {
    fn from(err: &HttpError) -> Self {
        match err {
            HttpError::NotFound(detail)
            | HttpError::BadRequest(detail)
            | HttpError::Unprocessable(detail) => FetchError::new(detail.clone()),
            HttpError::ServerError { body, .. } | HttpError::UnexpectedStatus { body, .. } => {
                FetchError::new(body.clone())
            }
            HttpError::Timeout => FetchError::new("Request timed out"),
            #[cfg(feature = "http")]
            HttpError::Reqwest(_) => FetchError::new(GENERIC_FAILURE_MESSAGE),
        }
    }
}
