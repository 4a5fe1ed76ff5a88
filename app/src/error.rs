//! Error types for view-model workflows.

use holidaze_api::ApiError;
use thiserror::Error;

/// Result type alias for workflow operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure modes surfaced to the presentation layer.
///
/// Every workflow resolves to exactly one of these; nothing is retried and
/// no failure is fatal. Paging safety-ceiling stops are deliberately absent:
/// a truncated catalog load is a silent partial result, not an error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The action requires a logged-in session.
    ///
    /// Raised before any network call is issued; the view routes to a
    /// login prompt.
    #[error("You need to be logged in")]
    NotAuthenticated,

    /// Local validation rejected the input before any network call.
    #[error("{0}")]
    Validation(String),

    /// The remote service rejected or failed the request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AppError {
    /// The message to render for this failure.
    ///
    /// Server-provided messages win when available; everything else uses
    /// the display form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(api) => api.user_message(),
            other => other.to_string(),
        }
    }

    /// Returns `true` if this failure should route the user to login.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_surfaces_server_message() {
        let err = AppError::Api(ApiError::Api {
            status: 400,
            message: "Venue not found".to_string(),
        });
        assert_eq!(err.user_message(), "Venue not found");
        assert!(!err.requires_login());
    }

    #[test]
    fn test_unauthenticated_routes_to_login() {
        let err = AppError::NotAuthenticated;
        assert!(err.requires_login());
        assert_eq!(err.user_message(), "You need to be logged in");
    }
}
