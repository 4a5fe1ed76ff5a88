//! Mutation workflows.
//!
//! Every workflow gates on the session before touching the network, runs
//! any local validation next, then performs the write and the explicitly
//! sequenced follow-up read. Errors propagate to the caller as
//! [`AppError`]; nothing is retried and no failure crosses into a sibling
//! view.

use crate::error::{AppError, Result};
use crate::session::{Session, SessionContext, SessionStore};
use holidaze_api::{
    ApiClient, Booking, BookingRequest, LoginRequest, Profile, RegisterRequest, Venue, VenueUpsert,
};

/// Required email domain for registration.
const REGISTRATION_DOMAIN: &str = "@stud.noroff.no";

/// Register a new profile.
///
/// The email domain is validated locally first; an invalid domain
/// short-circuits with zero network calls. Registration does not establish
/// a session; the user logs in afterwards.
///
/// # Errors
///
/// Returns `AppError::Validation` for a rejected email domain, or the API
/// failure otherwise.
pub async fn register(client: &ApiClient, request: &RegisterRequest) -> Result<()> {
    if !request.email.to_lowercase().ends_with(REGISTRATION_DOMAIN) {
        return Err(AppError::Validation(format!(
            "Email must end with {REGISTRATION_DOMAIN}"
        )));
    }

    client.register(request).await?;
    tracing::info!(name = %request.name, "profile registered");
    Ok(())
}

/// Log in and establish the session.
///
/// All four session fields are written atomically from the returned
/// profile snapshot.
///
/// # Errors
///
/// Returns the API failure, or `AppError::Validation` when the server
/// response carries no access token.
pub async fn login<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    request: &LoginRequest,
) -> Result<Session> {
    let profile = client.login(request).await?.data;

    let token = profile
        .access_token
        .ok_or_else(|| AppError::Validation("Login response carried no access token".to_string()))?;
    let venue_manager = profile.venue_manager.unwrap_or(false);

    session.login(&token, &profile.name, &profile.email, venue_manager);

    Ok(Session {
        token,
        name: profile.name,
        email: profile.email,
        venue_manager,
    })
}

/// Book a venue, then reload it with bookings.
///
/// The reload is strictly ordered after the write so the returned venue
/// reflects the new booking.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn book_venue<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    request: &BookingRequest,
) -> Result<Venue> {
    let auth = session.require()?;

    client.create_booking(request, &auth.token).await?;
    tracing::info!(venue_id = %request.venue_id, guests = request.guests, "booking created");

    let reloaded = client
        .get_venue_with_bookings(&request.venue_id, Some(&auth.token))
        .await?;
    Ok(reloaded.data)
}

/// Cancel a booking and remove it from the local view.
///
/// No full reload: after a successful delete the booking is dropped from
/// `bookings` in place.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn cancel_booking<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    bookings: &mut Vec<Booking>,
    booking_id: &str,
) -> Result<()> {
    let auth = session.require()?;

    client.delete_booking(booking_id, &auth.token).await?;
    bookings.retain(|booking| booking.id != booking_id);

    tracing::info!(booking_id = %booking_id, "booking cancelled");
    Ok(())
}

/// Load the session profile's bookings, venues embedded.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn load_my_bookings<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
) -> Result<Vec<Booking>> {
    let auth = session.require()?;
    Ok(client.bookings_by_profile(&auth.name, &auth.token).await?.data)
}

/// Load the venues owned by the session profile.
///
/// Reachable by any authenticated profile: the manager flag is not
/// enforced client-side, the remote service decides what management this
/// profile may actually perform.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn load_my_venues<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
) -> Result<Vec<Venue>> {
    let auth = session.require()?;
    Ok(client.venues_by_profile(&auth.name, &auth.token).await?.data)
}

/// Create a venue, then reload the profile's venue list.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn create_venue<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    body: &VenueUpsert,
) -> Result<Vec<Venue>> {
    let auth = session.require()?;

    let created = client.create_venue(body, &auth.token).await?.data;
    tracing::info!(venue_id = %created.id, "venue created");

    Ok(client.venues_by_profile(&auth.name, &auth.token).await?.data)
}

/// Update a venue, then reload the profile's venue list.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn update_venue<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    venue_id: &str,
    body: &VenueUpsert,
) -> Result<Vec<Venue>> {
    let auth = session.require()?;

    client.update_venue(venue_id, body, &auth.token).await?;
    tracing::info!(venue_id = %venue_id, "venue updated");

    Ok(client.venues_by_profile(&auth.name, &auth.token).await?.data)
}

/// Delete a venue, then reload the profile's venue list.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn delete_venue<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    venue_id: &str,
) -> Result<Vec<Venue>> {
    let auth = session.require()?;

    client.delete_venue(venue_id, &auth.token).await?;
    tracing::info!(venue_id = %venue_id, "venue deleted");

    Ok(client.venues_by_profile(&auth.name, &auth.token).await?.data)
}

/// Refresh one venue in a local list with its bookings embedded.
///
/// Used when a manager inspects bookings for one of their venues: the
/// fresh venue replaces the matching entry in place.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn load_venue_bookings<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    venues: &mut [Venue],
    venue_id: &str,
) -> Result<()> {
    let auth = session.require()?;

    let fresh = client
        .get_venue_with_bookings(venue_id, Some(&auth.token))
        .await?
        .data;

    if let Some(slot) = venues.iter_mut().find(|v| v.id == venue_id) {
        *slot = fresh;
    }
    Ok(())
}

/// Replace the session profile's avatar.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn update_avatar<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
    avatar_url: &str,
) -> Result<Profile> {
    let auth = session.require()?;
    Ok(client.update_avatar(&auth.name, avatar_url, &auth.token).await?.data)
}

/// Reload the session profile from the server.
///
/// The session snapshot itself is not refreshed automatically; this is the
/// explicit reload that resolves staleness.
///
/// # Errors
///
/// Returns `AppError::NotAuthenticated` before any network call when no
/// session is present, or the API failure otherwise.
pub async fn load_my_profile<S: SessionStore>(
    client: &ApiClient,
    session: &SessionContext<S>,
) -> Result<Profile> {
    let auth = session.require()?;
    Ok(client.get_profile(&auth.name, &auth.token).await?.data)
}
