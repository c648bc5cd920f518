//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use dioxus::prelude::*;

use arkiv_core::session::{Session, SessionManager};

use crate::session::SecretTokenStore;

/// Navigator-facing shell state.
///
/// The two logged-in roles stay inside [`Session`]; the navigator
/// dispatches on them with an exhaustive match.
#[derive(Clone, PartialEq)]
pub enum ShellSession {
    /// Silent re-entry still in flight.
    Booting,
    LoggedOut,
    LoggedIn(Session),
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Session manager wrapping the API client; `None` when client
    /// construction failed at startup.
    pub api: Signal<Option<SessionManager<SecretTokenStore>>>,
    /// Current navigator state.
    pub session: Signal<ShellSession>,
}

impl AppState {
    /// The session manager, when the client came up.
    #[must_use]
    pub fn manager(&self) -> Option<SessionManager<SecretTokenStore>> {
        self.api.read().clone()
    }

    /// Bearer token of the active session, if any.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match &*self.session.read() {
            ShellSession::LoggedIn(session) => Some(session.token.clone()),
            ShellSession::Booting | ShellSession::LoggedOut => None,
        }
    }
}
