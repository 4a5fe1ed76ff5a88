//! # Holidaze View-Model Layer
//!
//! The in-memory layer between the Holidaze REST API and a presentation
//! shell: session state and authorization gating, the aggregated catalog
//! loader, the pure view derivation engine, and the mutation workflows.
//!
//! ## Architecture
//!
//! ```text
//! catalog loader → raw snapshot → view derivation → rendered view
//!        ↑                               ↑
//!   ApiClient                    filter/sort config
//!        ↑
//!  mutation workflows (gated on session, write then reload)
//! ```
//!
//! - **Derivation is pure**: [`views::derive_venue_view`] and
//!   [`views::derive_booking_view`] never touch the network, the session,
//!   or an ambient clock; `now` is always an explicit parameter.
//! - **Gating is explicit**: every workflow calls
//!   [`session::SessionContext::require`] before its first network call, so
//!   an unauthenticated action resolves without any request being issued.
//! - **Loading is bounded**: [`catalog::load_all_venues`] follows server
//!   pagination to exhaustion or a safety ceiling, never unbounded.
//!
//! ## Example
//!
//! ```no_run
//! use holidaze_api::ApiClient;
//! use holidaze_app::catalog::load_all_venues;
//! use holidaze_app::views::{derive_venue_view, VenueFilter, VenueSort};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::from_env()?;
//!     let venues = load_all_venues(&client).await?;
//!
//!     let filter = VenueFilter {
//!         query: "cabin".to_string(),
//!         sort: VenueSort::PriceAsc,
//!         max_price: Some(1500.0),
//!         ..VenueFilter::default()
//!     };
//!     for venue in derive_venue_view(&venues, &filter) {
//!         println!("{} — {}", venue.name, venue.price);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod session;
pub mod views;
pub mod workflows;

// Re-export main types for convenience
pub use error::{AppError, Result};
pub use session::{MemorySessionStore, Session, SessionContext, SessionStore};
pub use views::{BookingViewConfig, DisplayLimit, VenueFilter, VenueSort};
