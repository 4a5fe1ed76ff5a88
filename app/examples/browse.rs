//! Browse the venue catalog from the terminal.
//!
//! ```sh
//! HOLIDAZE_API_BASE_URL=https://v2.api.noroff.dev \
//! HOLIDAZE_API_KEY=... \
//! cargo run -p holidaze-app --example browse -- cabin
//! ```

use holidaze_api::ApiClient;
use holidaze_app::catalog::load_all_venues;
use holidaze_app::views::{derive_venue_view, DisplayWindow, VenueFilter, VenueSort};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let query = std::env::args().nth(1).unwrap_or_default();

    let client = ApiClient::from_env()?;
    let venues = load_all_venues(&client).await?;

    let filter = VenueFilter {
        query,
        sort: VenueSort::PriceAsc,
        ..VenueFilter::default()
    };
    let view = derive_venue_view(&venues, &filter);
    let window = DisplayWindow::new();

    for venue in window.visible(&view) {
        println!("{:>8.2}  {} (max {} guests)", venue.price, venue.name, venue.max_guests);
    }
    if window.has_more(view.len()) {
        println!("… and {} more", view.len() - window.visible(&view).len());
    }

    Ok(())
}
