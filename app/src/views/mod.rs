//! View Derivation Engine.
//!
//! Pure functions from a raw fetched snapshot plus a filter/sort
//! configuration to the sequence actually displayed. Nothing here touches
//! the network, ambient clocks, or session state; everything is
//! deterministic for a fixed input.

pub mod bookings;
pub mod collate;
pub mod venues;

pub use bookings::{derive_booking_view, is_upcoming, BookingSort, BookingViewConfig, DisplayLimit};
pub use venues::{derive_venue_view, DisplayWindow, VenueFilter, VenueSort, WINDOW_STEP};
