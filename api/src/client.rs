//! Holidaze API client implementation

use crate::error::ApiError;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

/// Header carrying the fixed deployment API key
const API_KEY_HEADER: &str = "X-Noroff-API-Key";

/// Fallback message when the error body yields nothing usable
const GENERIC_FAILURE: &str = "API request failed";

/// Holidaze API client
///
/// One request per call: no retries, no timeouts, no circuit breaking.
/// Failures surface the server-provided message when one can be extracted
/// from the error body.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl ApiClient {
    /// Create a client from `HOLIDAZE_API_BASE_URL` and `HOLIDAZE_API_KEY`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingConfig` when either variable is not set
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("HOLIDAZE_API_BASE_URL")
            .map_err(|_| ApiError::MissingConfig("HOLIDAZE_API_BASE_URL"))?;
        let api_key = std::env::var("HOLIDAZE_API_KEY")
            .map_err(|_| ApiError::MissingConfig("HOLIDAZE_API_KEY"))?;

        Ok(Self::new(base_url, api_key))
    }

    /// Create a client with an explicit base URL and API key
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Base URL this client targets
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request against `path`, attaching the API key always and a
    /// bearer authorization only when a credential is supplied.
    pub(crate) fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{path}", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .header("content-type", "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        request
    }

    /// Send a request and parse the successful body as `T`.
    ///
    /// No runtime shape validation beyond deserialization; callers trust
    /// the declared type.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::ResponseParseFailed(e.to_string()))
    }

    /// Send a request and discard the successful body.
    ///
    /// DELETE endpoints answer 204 with no content, so there is nothing to
    /// parse on success.
    pub(crate) async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(())
    }
}

/// Extract the user-facing message from an error response body.
///
/// Precedence: first entry of the `errors` array, then a top-level
/// `message` field, then the generic fallback. Parse failures of the error
/// body itself never propagate.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .as_ref()
        .and_then(|value| {
            value
                .get("errors")
                .and_then(|errors| errors.get(0))
                .and_then(|entry| entry.get("message"))
                .or_else(|| value.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| GENERIC_FAILURE.to_string())
}
