//! Query failure kinds
//!
//! Every variant renders the message shown to the end user, so "no answer"
//! stays distinguishable from "the service could not be reached".

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("WOLFRAM_APP_ID environment variable is required")]
    MissingCredential,

    #[error("Bad request - missing or invalid input parameter")]
    BadRequest,

    #[error("Invalid App ID")]
    InvalidAppId { status: u16 },

    #[error("App ID missing")]
    MissingAppId { status: u16 },

    #[error("Authentication error")]
    Authentication { status: u16 },

    #[error("Input could not be interpreted")]
    NotInterpretable { suggestion: Option<String> },

    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Request timed out after {secs} seconds")]
    Timeout { secs: u64 },

    #[error("Network error: {0}")]
    Network(String),
}

impl QueryError {
    /// HTTP status behind this failure, when one was received
    pub fn status_code(&self) -> Option<u16> {
        match self {
            QueryError::BadRequest => Some(400),
            QueryError::InvalidAppId { status }
            | QueryError::MissingAppId { status }
            | QueryError::Authentication { status }
            | QueryError::UnexpectedStatus { status, .. } => Some(*status),
            QueryError::NotInterpretable { .. } => Some(501),
            QueryError::MissingCredential
            | QueryError::Timeout { .. }
            | QueryError::Network(_) => None,
        }
    }
}
