//! Error types for the Holidaze API client

use thiserror::Error;

/// Errors that can occur when talking to the Holidaze API
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required configuration environment variable is missing
    #[error("Missing {0} environment variable")]
    MissingConfig(&'static str),

    /// HTTP request failed before a response was received
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be parsed as the expected type
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// The API answered with a non-success status
    ///
    /// `message` carries the server-provided error message when one could
    /// be extracted from the response body, else a generic fallback.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API, or the generic fallback
        message: String,
    },
}

impl ApiError {
    /// The message to show a user for this failure.
    ///
    /// Server-provided messages are surfaced verbatim; transport and parse
    /// failures collapse to their display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
