//! Session state and authorization gating.
//!
//! The session is a read-only snapshot of the logged-in identity backed by
//! an injectable key-value store (the browser original keeps these four
//! entries in `localStorage`). It is read by every gated component but
//! written only by the login and logout workflows, and it can go stale
//! relative to the server's profile record until an explicit reload.

use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Store key for the bearer credential.
pub const TOKEN_KEY: &str = "holidaze_token";
/// Store key for the display name.
pub const NAME_KEY: &str = "holidaze_name";
/// Store key for the email address.
pub const EMAIL_KEY: &str = "holidaze_email";
/// Store key for the manager flag, stored as the literal `"true"`.
pub const MANAGER_KEY: &str = "holidaze_venueManager";

/// Persisted session store collaborator.
///
/// String keys to string values, localStorage semantics: synchronous,
/// last-write-wins, absent keys read as `None`.
pub trait SessionStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any existing entry.
    fn set(&self, key: &str, value: &str);

    /// Remove the entry under `key`, if present.
    fn remove(&self, key: &str);
}

/// In-memory session store.
///
/// The default store for tests and non-browser hosts.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Snapshot of the current authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Bearer credential for API calls.
    pub token: String,
    /// Display name; also the API path key for profile endpoints.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Whether the profile registered as a venue manager.
    ///
    /// Informational only: venue management is NOT hard-gated on this flag
    /// client-side. Any authenticated profile may attempt management
    /// operations; the remote service enforces ownership and authorization.
    pub venue_manager: bool,
}

/// Process-wide session context.
///
/// Wraps a [`SessionStore`] with the login/logout transitions and the
/// gating rule consumed by every view: an action is permitted only when
/// both a credential and a display name are present. There is no partial
/// session state observable through this API.
#[derive(Debug, Clone, Default)]
pub struct SessionContext<S: SessionStore> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    /// Wrap a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Establish a session: all four fields written in one transition.
    pub fn login(&self, token: &str, name: &str, email: &str, venue_manager: bool) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(NAME_KEY, name);
        self.store.set(EMAIL_KEY, email);
        self.store
            .set(MANAGER_KEY, if venue_manager { "true" } else { "false" });

        tracing::info!(name = %name, venue_manager, "session established");
    }

    /// Clear the session: all four fields removed in one transition.
    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(NAME_KEY);
        self.store.remove(EMAIL_KEY);
        self.store.remove(MANAGER_KEY);

        tracing::info!("session cleared");
    }

    /// The current session, if both credential and display name are present.
    ///
    /// A missing email reads as empty rather than invalidating the session;
    /// gating only ever depends on token and name.
    pub fn current(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let name = self.store.get(NAME_KEY)?;

        Some(Session {
            token,
            name,
            email: self.store.get(EMAIL_KEY).unwrap_or_default(),
            venue_manager: self.is_venue_manager(),
        })
    }

    /// Whether the stored manager flag is the literal `"true"`.
    pub fn is_venue_manager(&self) -> bool {
        self.store.get(MANAGER_KEY).as_deref() == Some("true")
    }

    /// Gate an action on a present session.
    ///
    /// # Errors
    ///
    /// Returns `AppError::NotAuthenticated` when no session is established,
    /// so callers short-circuit before issuing any network call.
    pub fn require(&self) -> Result<Session> {
        self.current().ok_or(AppError::NotAuthenticated)
    }
}
