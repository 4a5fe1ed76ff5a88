//! # Holidaze API Client
//!
//! Rust client library for the Holidaze booking-marketplace REST API:
//! venue catalog, bookings, profiles, and credential exchange.
//!
//! ## Example
//!
//! ```no_run
//! use holidaze_api::ApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from HOLIDAZE_API_BASE_URL / HOLIDAZE_API_KEY
//!     let client = ApiClient::from_env()?;
//!
//!     // Fetch the first catalog page
//!     let page = client.list_venues(100, 1).await?;
//!     println!("{} venues on page 1", page.data.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - One network attempt per call; no retries, timeouts, or circuit breaking
//! - Every response arrives in a `{data, meta}` envelope; meta is present
//!   even for singular resources and only paginated callers read it
//! - Non-success responses surface the server's error message when the body
//!   carries one (`errors[0].message`, then `message`), else a generic
//!   fallback; error-body parse failures never propagate

pub mod auth;
pub mod bookings;
pub mod client;
pub mod error;
pub mod profiles;
pub mod types;
pub mod venues;

// Re-export main types for convenience
pub use auth::{AuthProfile, LoginRequest, RegisterRequest};
pub use bookings::BookingRequest;
pub use client::ApiClient;
pub use error::ApiError;
pub use types::{Booking, Envelope, Media, PageMeta, Profile, Venue, VenueAmenities, VenueLocation};
pub use venues::VenueUpsert;
