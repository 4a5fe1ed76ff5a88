//! Profile endpoints: lookup and avatar update

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Envelope, Media, Profile};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct AvatarUpdate {
    avatar: Media,
}

impl ApiClient {
    /// Fetch a profile by name.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn get_profile(&self, name: &str, token: &str) -> Result<Envelope<Profile>, ApiError> {
        let request = self.request(Method::GET, &format!("/holidaze/profiles/{name}"), Some(token));
        self.execute(request).await
    }

    /// Replace a profile's avatar image.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn update_avatar(
        &self,
        name: &str,
        avatar_url: &str,
        token: &str,
    ) -> Result<Envelope<Profile>, ApiError> {
        let body = AvatarUpdate {
            avatar: Media::new(avatar_url, "User avatar"),
        };
        let request = self
            .request(Method::PUT, &format!("/holidaze/profiles/{name}"), Some(token))
            .json(&body);
        self.execute(request).await
    }
}
