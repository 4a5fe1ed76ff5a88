//! Venue endpoints: catalog listing, detail with bookings, and management

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Envelope, Media, Venue, VenueAmenities, VenueLocation};
use reqwest::Method;
use serde::Serialize;

/// Request body for creating or updating a venue
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueUpsert {
    /// Venue name
    pub name: String,
    /// Venue description
    pub description: String,
    /// Gallery images; an empty list clears existing media
    pub media: Vec<Media>,
    /// Nightly price
    pub price: f64,
    /// Maximum guest count
    pub max_guests: u32,
    /// Amenity flags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<VenueAmenities>,
    /// Geographic attributes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<VenueLocation>,
}

impl VenueUpsert {
    /// Create an upsert body with the required fields
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        max_guests: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            media: Vec::new(),
            price,
            max_guests,
            meta: None,
            location: None,
        }
    }

    /// Builder: attach gallery media
    #[must_use]
    pub fn with_media(mut self, media: Vec<Media>) -> Self {
        self.media = media;
        self
    }

    /// Builder: set amenity flags
    #[must_use]
    pub const fn with_amenities(mut self, meta: VenueAmenities) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Builder: set geographic attributes
    #[must_use]
    pub fn with_location(mut self, location: VenueLocation) -> Self {
        self.location = Some(location);
        self
    }
}

impl ApiClient {
    /// Fetch one page of the venue catalog.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn list_venues(&self, limit: u32, page: u32) -> Result<Envelope<Vec<Venue>>, ApiError> {
        let request = self
            .request(Method::GET, "/holidaze/venues", None)
            .query(&[("limit", limit), ("page", page)]);
        self.execute(request).await
    }

    /// Fetch a single venue with its bookings embedded.
    ///
    /// The endpoint is public; a credential is attached only when supplied.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn get_venue_with_bookings(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<Envelope<Venue>, ApiError> {
        let request = self.request(
            Method::GET,
            &format!("/holidaze/venues/{id}?_bookings=true"),
            token,
        );
        self.execute(request).await
    }

    /// Fetch the venues owned by a profile.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn venues_by_profile(
        &self,
        profile_name: &str,
        token: &str,
    ) -> Result<Envelope<Vec<Venue>>, ApiError> {
        let request = self.request(
            Method::GET,
            &format!("/holidaze/profiles/{profile_name}/venues"),
            Some(token),
        );
        self.execute(request).await
    }

    /// Create a venue.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn create_venue(
        &self,
        body: &VenueUpsert,
        token: &str,
    ) -> Result<Envelope<Venue>, ApiError> {
        let request = self
            .request(Method::POST, "/holidaze/venues", Some(token))
            .json(body);
        self.execute(request).await
    }

    /// Update an existing venue.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn update_venue(
        &self,
        id: &str,
        body: &VenueUpsert,
        token: &str,
    ) -> Result<Envelope<Venue>, ApiError> {
        let request = self
            .request(Method::PUT, &format!("/holidaze/venues/{id}"), Some(token))
            .json(body);
        self.execute(request).await
    }

    /// Delete a venue.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or API errors
    pub async fn delete_venue(&self, id: &str, token: &str) -> Result<(), ApiError> {
        let request = self.request(Method::DELETE, &format!("/holidaze/venues/{id}"), Some(token));
        self.execute_empty(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_upsert_serializes_camel_case() {
        let body = VenueUpsert::new("Cabin", "Cosy", 150.0, 3);
        let json = serde_json::to_string(&body).unwrap();

        assert!(json.contains(r#""maxGuests":3"#));
        assert!(json.contains(r#""media":[]"#));
        assert!(!json.contains("location"));
    }

    #[test]
    #[allow(clippy::unwrap_used)] // Test code
    fn test_upsert_builder_attaches_optionals() {
        let body = VenueUpsert::new("Cabin", "Cosy", 150.0, 3)
            .with_media(vec![Media::new("https://img.example/1.jpg", "Cabin")])
            .with_amenities(VenueAmenities {
                wifi: true,
                ..VenueAmenities::default()
            });

        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains(r#""wifi":true"#));
        assert!(json.contains("img.example"));
    }
}
