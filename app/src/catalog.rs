//! Aggregated Listing Loader.
//!
//! The server only exposes the venue catalog page-by-page, so the loader
//! follows pagination until the server reports the last page or a safety
//! ceiling is reached, then deduplicates by venue id. A ceiling stop is
//! not an error: whatever was accumulated is shown.

use crate::error::Result;
use holidaze_api::{ApiClient, Venue};
use std::collections::HashMap;

/// Items requested per catalog page.
pub const PAGE_SIZE: u32 = 100;
/// Hard ceiling on accumulated items.
pub const MAX_ITEMS: usize = 1000;
/// Hard ceiling on pages fetched.
pub const MAX_PAGES: u32 = 15;

/// Why paging stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagingStop {
    /// The server reported the last page.
    LastPage,
    /// The accumulated item count reached [`MAX_ITEMS`].
    ItemCeiling,
    /// The page counter exceeded [`MAX_PAGES`].
    PageCeiling,
}

/// Bounded catalog pager.
///
/// Produces pages one at a time with the three termination conditions as
/// explicit exit branches, so the loop can never run unbounded even when
/// the server never reports a last page.
#[derive(Debug, Clone)]
pub struct CatalogPager {
    next_page: u32,
    fetched: usize,
    stopped: Option<PagingStop>,
}

impl CatalogPager {
    /// Start paging from page 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_page: 1,
            fetched: 0,
            stopped: None,
        }
    }

    /// Fetch the next page, or `None` once paging has stopped.
    ///
    /// When the page metadata carries no next page number the counter
    /// advances by one anyway, so a server that omits `nextPage` cannot
    /// stall the loop.
    ///
    /// # Errors
    ///
    /// Any single page failure aborts the whole load with that page's
    /// error; nothing partial survives.
    pub async fn fetch_next(&mut self, client: &ApiClient) -> Result<Option<Vec<Venue>>> {
        if self.stopped.is_some() {
            return Ok(None);
        }
        if self.fetched >= MAX_ITEMS {
            self.stopped = Some(PagingStop::ItemCeiling);
            return Ok(None);
        }
        if self.next_page > MAX_PAGES {
            self.stopped = Some(PagingStop::PageCeiling);
            return Ok(None);
        }

        let page = self.next_page;
        let envelope = client.list_venues(PAGE_SIZE, page).await?;
        let meta = envelope.meta.unwrap_or_default();
        let items = envelope.data;

        self.fetched += items.len();
        self.next_page = meta.next_page.unwrap_or(page + 1);
        if meta.is_last_page {
            self.stopped = Some(PagingStop::LastPage);
        }

        tracing::debug!(page, items = items.len(), total = self.fetched, "fetched catalog page");
        Ok(Some(items))
    }

    /// The stop condition, once paging has ended.
    #[must_use]
    pub const fn stop_reason(&self) -> Option<PagingStop> {
        self.stopped
    }
}

impl Default for CatalogPager {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble an approximately-complete catalog snapshot.
///
/// Pages through the listing endpoint to exhaustion or a safety ceiling,
/// then deduplicates by id. A ceiling stop logs a warning and returns the
/// partial accumulation; it is not a failure.
///
/// # Errors
///
/// Returns the first page fetch failure; accumulated data is discarded.
pub async fn load_all_venues(client: &ApiClient) -> Result<Vec<Venue>> {
    let mut pager = CatalogPager::new();
    let mut all = Vec::new();

    while let Some(items) = pager.fetch_next(client).await? {
        all.extend(items);
    }

    match pager.stop_reason() {
        Some(PagingStop::ItemCeiling | PagingStop::PageCeiling) => {
            tracing::warn!(
                items = all.len(),
                "catalog paging stopped at safety ceiling; showing partial catalog"
            );
        }
        _ => {}
    }

    let venues = dedupe_by_id(all);
    tracing::info!(venues = venues.len(), "catalog loaded");
    Ok(venues)
}

/// Deduplicate venues by id.
///
/// First-seen position, last-seen value: a repeat id overwrites the earlier
/// entry in place, matching insertion-ordered map semantics.
#[must_use]
pub fn dedupe_by_id(venues: Vec<Venue>) -> Vec<Venue> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(venues.len());
    let mut deduped: Vec<Venue> = Vec::with_capacity(venues.len());

    for venue in venues {
        if let Some(&at) = positions.get(&venue.id) {
            deduped[at] = venue;
        } else {
            positions.insert(venue.id.clone(), deduped.len());
            deduped.push(venue);
        }
    }

    deduped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: &str, price: f64) -> Venue {
        Venue {
            id: id.to_string(),
            name: format!("Venue {id}"),
            description: String::new(),
            media: Vec::new(),
            price,
            max_guests: 2,
            rating: None,
            location: None,
            meta: None,
            bookings: None,
        }
    }

    #[test]
    fn test_dedupe_keeps_last_value_at_first_position() {
        let venues = vec![
            venue("v1", 100.0),
            venue("v2", 50.0),
            venue("v1", 80.0),
            venue("v3", 60.0),
        ];

        let deduped = dedupe_by_id(venues);
        let ids: Vec<&str> = deduped.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["v1", "v2", "v3"]);
        // Later page entry wins.
        assert!((deduped[0].price - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dedupe_preserves_order_without_duplicates() {
        let venues = vec![venue("b", 1.0), venue("a", 2.0), venue("c", 3.0)];

        let deduped = dedupe_by_id(venues);
        let ids: Vec<&str> = deduped.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_pager_starts_unstopped() {
        let pager = CatalogPager::new();
        assert_eq!(pager.stop_reason(), None);
    }
}
