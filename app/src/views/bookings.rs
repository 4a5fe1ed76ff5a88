//! Booking view derivation: temporal filter, sort, and display limit.
//!
//! "Upcoming" depends on the current instant, so `now` is always an
//! explicit parameter and the classification is recomputed on every
//! render rather than cached.

use chrono::{DateTime, Utc};
use holidaze_api::Booking;
use serde::{Deserialize, Serialize};

/// Sort key for booking views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingSort {
    /// Soonest start date first.
    #[default]
    FromAsc,
    /// Latest start date first.
    FromDesc,
}

/// How many bookings to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayLimit {
    /// Show 5.
    Five,
    /// Show 10.
    #[default]
    Ten,
    /// Show 20.
    Twenty,
    /// Show 50.
    Fifty,
}

impl DisplayLimit {
    /// The numeric count this limit truncates to.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        match self {
            Self::Five => 5,
            Self::Ten => 10,
            Self::Twenty => 20,
            Self::Fifty => 50,
        }
    }

    /// Parse a limit from the selector value, if it is one of the
    /// enumerated counts.
    #[must_use]
    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            5 => Some(Self::Five),
            10 => Some(Self::Ten),
            20 => Some(Self::Twenty),
            50 => Some(Self::Fifty),
            _ => None,
        }
    }
}

/// Filter and sort configuration for booking views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingViewConfig {
    /// Retain only bookings that have not yet ended.
    pub upcoming_only: bool,
    /// Sort key over the start date.
    pub sort: BookingSort,
    /// Display truncation.
    pub limit: DisplayLimit,
}

impl Default for BookingViewConfig {
    fn default() -> Self {
        Self {
            upcoming_only: true,
            sort: BookingSort::FromAsc,
            limit: DisplayLimit::Ten,
        }
    }
}

/// Whether a booking counts as upcoming at `now`.
///
/// Inclusive boundary: a booking ending exactly at `now` is still upcoming.
#[must_use]
pub fn is_upcoming(booking: &Booking, now: DateTime<Utc>) -> bool {
    booking.date_to >= now
}

/// Derive the displayed booking list from a raw snapshot, a config, and an
/// explicit `now`.
///
/// Stable sort by start date; ties keep input order. Output truncates to
/// the configured display limit.
#[must_use]
pub fn derive_booking_view(
    bookings: &[Booking],
    config: &BookingViewConfig,
    now: DateTime<Utc>,
) -> Vec<Booking> {
    let mut view: Vec<Booking> = bookings
        .iter()
        .filter(|booking| !config.upcoming_only || is_upcoming(booking, now))
        .cloned()
        .collect();

    match config.sort {
        BookingSort::FromAsc => view.sort_by(|a, b| a.date_from.cmp(&b.date_from)),
        BookingSort::FromDesc => view.sort_by(|a, b| b.date_from.cmp(&a.date_from)),
    }

    view.truncate(config.limit.as_usize());
    view
}
