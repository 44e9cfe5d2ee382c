use std::result;

use thiserror::Error;

/// Error types for PubMed client operations
#[derive(Error, Debug)]
pub enum PubMedError {
    /// Caller input rejected before any request was sent
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// E-utilities answered with a non-success HTTP status
    #[error("HTTP error {status}: {message}")]
    HttpError { status: u16, message: String },

    /// HTTP request failed at the transport level (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    pub(crate) fn empty_id_list() -> Self {
        PubMedError::InvalidArgument {
            message: "identifier list is empty".to_string(),
        }
    }

    /// Build an `HttpError` from a response status
    pub(crate) fn from_status(status: reqwest::StatusCode) -> Self {
        PubMedError::HttpError {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        }
    }

    /// True for errors raised locally before any network activity
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, PubMedError::InvalidArgument { .. })
    }

    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            PubMedError::HttpError { status, .. } => Some(*status),
            PubMedError::RequestError(err) => err.status().map(|s| s.as_u16()),
            PubMedError::InvalidArgument { .. } | PubMedError::JsonError(_) => None,
        }
    }
}
