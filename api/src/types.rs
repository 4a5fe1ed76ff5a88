//! Wire types for the Holidaze API
//!
//! Every endpoint wraps its payload in an [`Envelope`] of `data` plus
//! `meta`. The meta block is present even for singular resources, where its
//! pagination fields carry no meaning; only the catalog loader reads it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Response envelope common to all Holidaze endpoints
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// The payload
    pub data: T,
    /// Page metadata; meaningful only on paginated collection responses
    #[serde(default)]
    pub meta: Option<PageMeta>,
}

/// Pagination metadata for one page of a collection response
///
/// Singular resources return an empty meta object, so every field defaults.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PageMeta {
    /// Whether this is the first page
    pub is_first_page: bool,
    /// Whether this is the last page
    pub is_last_page: bool,
    /// The current page number (1-based)
    pub current_page: u32,
    /// The previous page number, if any
    pub previous_page: Option<u32>,
    /// The next page number, if any
    pub next_page: Option<u32>,
    /// Total number of pages
    pub page_count: u32,
    /// Total number of items across all pages
    pub total_count: u32,
}

/// An image with alt text
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Media {
    /// Image URL
    pub url: String,
    /// Alternative text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Media {
    /// Create media from a URL and alt text
    #[must_use]
    pub fn new(url: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: Some(alt.into()),
        }
    }
}

/// Amenity flags for a venue
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct VenueAmenities {
    /// Wifi available
    pub wifi: bool,
    /// Parking available
    pub parking: bool,
    /// Breakfast included
    pub breakfast: bool,
    /// Pets allowed
    pub pets: bool,
}

/// Geographic attributes of a venue
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct VenueLocation {
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// City
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Country
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Continent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<String>,
    /// Latitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    /// Longitude
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// A rentable venue listing
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    /// Opaque venue identifier
    pub id: String,
    /// Venue name
    pub name: String,
    /// Venue description; the API may omit it entirely
    #[serde(default)]
    pub description: String,
    /// Gallery images
    #[serde(default)]
    pub media: Vec<Media>,
    /// Nightly price (non-negative)
    pub price: f64,
    /// Maximum guest count (positive)
    pub max_guests: u32,
    /// Average rating, if rated
    #[serde(default)]
    pub rating: Option<f64>,
    /// Geographic attributes
    #[serde(default)]
    pub location: Option<VenueLocation>,
    /// Amenity flags
    #[serde(default)]
    pub meta: Option<VenueAmenities>,
    /// Embedded bookings, present only when requested with `_bookings=true`
    #[serde(default)]
    pub bookings: Option<Vec<Booking>>,
}

/// A reservation of a venue for a date range
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Opaque booking identifier
    pub id: String,
    /// First day of the stay
    pub date_from: DateTime<Utc>,
    /// Last day of the stay; always >= `date_from` (enforced server-side)
    pub date_to: DateTime<Utc>,
    /// Number of guests
    pub guests: u32,
    /// Creation timestamp
    pub created: DateTime<Utc>,
    /// Last update timestamp
    pub updated: DateTime<Utc>,
    /// Embedded venue, present only when requested with `_venue=true`
    #[serde(default)]
    pub venue: Option<Venue>,
}

/// A user account
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Profile name; unique and used as the API path key
    pub name: String,
    /// Email address
    pub email: String,
    /// Avatar image
    #[serde(default)]
    pub avatar: Option<Media>,
    /// Whether this profile manages venues
    #[serde(default)]
    pub venue_manager: bool,
}
