//! Auth endpoints: registration and login
//!
//! The authentication protocol itself lives server-side; these calls only
//! exchange credentials for a bearer token and a profile snapshot.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::Envelope;
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/register`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Profile name (unique)
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
    /// Register as a venue manager
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue_manager: Option<bool>,
}

/// Request body for `POST /auth/login`
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Profile snapshot returned by register and login
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthProfile {
    /// Profile name
    pub name: String,
    /// Email address
    pub email: String,
    /// Bearer credential for subsequent calls; absent on registration
    #[serde(default)]
    pub access_token: Option<String>,
    /// Whether the profile manages venues
    #[serde(default)]
    pub venue_manager: Option<bool>,
}

impl ApiClient {
    /// Register a new profile.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn register(&self, body: &RegisterRequest) -> Result<Envelope<AuthProfile>, ApiError> {
        let request = self.request(Method::POST, "/auth/register", None).json(body);
        self.execute(request).await
    }

    /// Log in, asking for the holidaze-scoped profile (`?_holidaze=true`).
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn login(&self, body: &LoginRequest) -> Result<Envelope<AuthProfile>, ApiError> {
        let request = self
            .request(Method::POST, "/auth/login?_holidaze=true", None)
            .json(body);
        self.execute(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_register_request_omits_unset_manager_flag() {
        let body = RegisterRequest {
            name: "guest".to_string(),
            email: "guest@stud.noroff.no".to_string(),
            password: "secret".to_string(),
            venue_manager: None,
        };

        let json = serde_json::to_string(&body).unwrap();
        assert!(!json.contains("venueManager"));
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_auth_profile_deserializes_without_manager_flag() {
        let json = r#"{"name": "guest", "email": "guest@stud.noroff.no", "accessToken": "tok"}"#;

        let profile: AuthProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.access_token.as_deref(), Some("tok"));
        assert_eq!(profile.venue_manager, None);
    }
}
