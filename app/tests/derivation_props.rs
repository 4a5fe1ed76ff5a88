//! Property tests for the view derivation engine.

#![allow(clippy::unwrap_used)] // Test code

use chrono::{DateTime, Duration, TimeZone, Utc};
use holidaze_api::{Booking, Venue};
use holidaze_app::views::{
    derive_booking_view, derive_venue_view, BookingSort, BookingViewConfig, DisplayLimit,
    VenueFilter, VenueSort,
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap()
}

fn venue_strategy() -> impl Strategy<Value = Venue> {
    (
        "[a-z0-9]{1,8}",
        "[A-Za-z0-9 '\"]{0,16}",
        0.0f64..5000.0,
        1u32..12,
    )
        .prop_map(|(id, name, price, max_guests)| Venue {
            id,
            name,
            description: String::new(),
            media: Vec::new(),
            price,
            max_guests,
            rating: None,
            location: None,
            meta: None,
            bookings: None,
        })
}

fn filter_strategy() -> impl Strategy<Value = VenueFilter> {
    (
        "[a-z ]{0,4}",
        prop_oneof![
            Just(VenueSort::NameAsc),
            Just(VenueSort::NameDesc),
            Just(VenueSort::PriceAsc),
            Just(VenueSort::PriceDesc),
        ],
        proptest::option::of(0.0f64..5000.0),
        proptest::option::of(1u32..12),
    )
        .prop_map(|(query, sort, max_price, min_guests)| VenueFilter {
            query,
            sort,
            max_price,
            min_guests,
        })
}

fn booking_strategy() -> impl Strategy<Value = Booking> {
    ("[a-z0-9]{1,8}", -100i64..100, 0i64..30).prop_map(|(id, start_offset, length)| {
        let date_from = now() + Duration::days(start_offset);
        Booking {
            id,
            date_from,
            date_to: date_from + Duration::days(length),
            guests: 2,
            created: now(),
            updated: now(),
            venue: None,
        }
    })
}

fn config_strategy() -> impl Strategy<Value = BookingViewConfig> {
    (
        any::<bool>(),
        prop_oneof![Just(BookingSort::FromAsc), Just(BookingSort::FromDesc)],
        prop_oneof![
            Just(DisplayLimit::Five),
            Just(DisplayLimit::Ten),
            Just(DisplayLimit::Twenty),
            Just(DisplayLimit::Fifty),
        ],
    )
        .prop_map(|(upcoming_only, sort, limit)| BookingViewConfig {
            upcoming_only,
            sort,
            limit,
        })
}

proptest! {
    /// Deriving an already-derived view changes nothing.
    #[test]
    fn venue_derivation_is_idempotent(
        venues in proptest::collection::vec(venue_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let once = derive_venue_view(&venues, &filter);
        let twice = derive_venue_view(&once, &filter);
        prop_assert_eq!(once, twice);
    }

    /// Every retained venue satisfies every active predicate.
    #[test]
    fn venue_filters_are_conjunctive(
        venues in proptest::collection::vec(venue_strategy(), 0..40),
        filter in filter_strategy(),
    ) {
        let view = derive_venue_view(&venues, &filter);
        let query = filter.query.trim().to_lowercase();

        for venue in &view {
            if !query.is_empty() {
                prop_assert!(
                    venue.name.to_lowercase().contains(&query)
                        || venue.description.to_lowercase().contains(&query)
                );
            }
            if let Some(max) = filter.max_price {
                prop_assert!(venue.price <= max);
            }
            if let Some(min) = filter.min_guests {
                prop_assert!(venue.max_guests >= min);
            }
        }
        prop_assert!(view.len() <= venues.len());
    }

    /// Price ordering holds over the whole derived sequence.
    #[test]
    fn venue_price_sort_is_monotonic(
        venues in proptest::collection::vec(venue_strategy(), 0..40),
    ) {
        let filter = VenueFilter { sort: VenueSort::PriceAsc, ..VenueFilter::default() };
        let view = derive_venue_view(&venues, &filter);

        for pair in view.windows(2) {
            prop_assert!(pair[0].price <= pair[1].price);
        }
    }

    /// The booking view is bounded, temporally filtered, and ordered.
    #[test]
    fn booking_view_respects_config(
        bookings in proptest::collection::vec(booking_strategy(), 0..80),
        config in config_strategy(),
    ) {
        let at = now();
        let view = derive_booking_view(&bookings, &config, at);

        prop_assert!(view.len() <= config.limit.as_usize());

        if config.upcoming_only {
            for booking in &view {
                prop_assert!(booking.date_to >= at);
            }
        }

        for pair in view.windows(2) {
            match config.sort {
                BookingSort::FromAsc => prop_assert!(pair[0].date_from <= pair[1].date_from),
                BookingSort::FromDesc => prop_assert!(pair[0].date_from >= pair[1].date_from),
            }
        }
    }

    /// Booking derivation is idempotent for any fixed `now`.
    #[test]
    fn booking_derivation_is_idempotent(
        bookings in proptest::collection::vec(booking_strategy(), 0..80),
        config in config_strategy(),
    ) {
        let at = now();
        let once = derive_booking_view(&bookings, &config, at);
        let twice = derive_booking_view(&once, &config, at);
        prop_assert_eq!(once, twice);
    }
}
