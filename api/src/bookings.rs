//! Booking endpoints: creation, cancellation, and per-profile listing

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Booking, Envelope};
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Serialize;

/// Request body for creating a booking
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// First day of the stay
    pub date_from: DateTime<Utc>,
    /// Last day of the stay
    pub date_to: DateTime<Utc>,
    /// Number of guests (1..=venue max)
    pub guests: u32,
    /// Venue being booked
    pub venue_id: String,
}

impl ApiClient {
    /// Create a booking.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn create_booking(
        &self,
        body: &BookingRequest,
        token: &str,
    ) -> Result<Envelope<Booking>, ApiError> {
        let request = self
            .request(Method::POST, "/holidaze/bookings", Some(token))
            .json(body);
        self.execute(request).await
    }

    /// Delete a booking (cancellation).
    ///
    /// # Errors
    ///
    /// Returns errors for network failures or API errors
    pub async fn delete_booking(&self, id: &str, token: &str) -> Result<(), ApiError> {
        let request = self.request(
            Method::DELETE,
            &format!("/holidaze/bookings/{id}"),
            Some(token),
        );
        self.execute_empty(request).await
    }

    /// Fetch a profile's bookings with venues embedded.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn bookings_by_profile(
        &self,
        profile_name: &str,
        token: &str,
    ) -> Result<Envelope<Vec<Booking>>, ApiError> {
        let request = self.request(
            Method::GET,
            &format!("/holidaze/profiles/{profile_name}/bookings?_venue=true"),
            Some(token),
        );
        self.execute(request).await
    }
}
