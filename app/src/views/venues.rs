//! Venue view derivation: filter, sort, and display windowing.
//!
//! Pure over its inputs: the raw venue collection is never mutated and the
//! derived view is a fresh sequence, so deriving twice from the same
//! snapshot and config yields the same result.

use super::collate;
use holidaze_api::Venue;
use serde::{Deserialize, Serialize};

/// Sort key for the venue catalog view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueSort {
    /// Name A to Z.
    #[default]
    NameAsc,
    /// Name Z to A.
    NameDesc,
    /// Price low to high.
    PriceAsc,
    /// Price high to low.
    PriceDesc,
}

impl VenueSort {
    /// The string code used by the presentation layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
        }
    }
}

/// Filter and sort configuration for the venue catalog view.
///
/// All active predicates are conjunctive. Defaults match a freshly reset
/// filter panel: empty query, name ascending, no ceilings or floors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueFilter {
    /// Free-text query matched against name and description.
    pub query: String,
    /// Sort key.
    pub sort: VenueSort,
    /// Inclusive nightly-price ceiling.
    pub max_price: Option<f64>,
    /// Inclusive guest-capacity floor.
    pub min_guests: Option<u32>,
}

/// Derive the displayed venue list from a raw snapshot and a filter config.
///
/// Filters conjunctively, then sorts stably per the configured key; ties
/// keep their relative input order.
#[must_use]
pub fn derive_venue_view(venues: &[Venue], filter: &VenueFilter) -> Vec<Venue> {
    let query = filter.query.trim().to_lowercase();

    let mut view: Vec<Venue> = venues
        .iter()
        .filter(|venue| {
            let matches_query = query.is_empty()
                || venue.name.to_lowercase().contains(&query)
                || venue.description.to_lowercase().contains(&query);

            let matches_price = filter.max_price.is_none_or(|max| venue.price <= max);
            let matches_guests = filter.min_guests.is_none_or(|min| venue.max_guests >= min);

            matches_query && matches_price && matches_guests
        })
        .cloned()
        .collect();

    match filter.sort {
        VenueSort::NameAsc => view.sort_by(|a, b| collate::compare_names(&a.name, &b.name)),
        VenueSort::NameDesc => view.sort_by(|a, b| collate::compare_names(&b.name, &a.name)),
        VenueSort::PriceAsc => view.sort_by(|a, b| a.price.total_cmp(&b.price)),
        VenueSort::PriceDesc => view.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }

    view
}

/// Step by which the display window grows.
pub const WINDOW_STEP: usize = 24;

/// Display-only prefix window over a derived list.
///
/// Independent from server paging: the whole derived sequence is in memory
/// and the window only bounds how much of its prefix is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayWindow {
    shown: usize,
}

impl DisplayWindow {
    /// A fresh window showing the first [`WINDOW_STEP`] items.
    #[must_use]
    pub const fn new() -> Self {
        Self { shown: WINDOW_STEP }
    }

    /// Grow the window by one step.
    pub const fn show_more(&mut self) {
        self.shown += WINDOW_STEP;
    }

    /// The visible prefix of `items`, clamped to its length.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.shown.min(items.len())]
    }

    /// Whether more items exist beyond the window.
    #[must_use]
    pub const fn has_more(&self, total: usize) -> bool {
        total > self.shown
    }
}

impl Default for DisplayWindow {
    fn default() -> Self {
        Self::new()
    }
}
