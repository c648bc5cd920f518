//! Application shell: session bootstrap and role-gated navigation.

use dioxus::prelude::*;

use arkiv_core::session::SessionState;
use arkiv_core::Role;

use crate::session::session_manager_from_config;
use crate::state::{AppState, ShellSession};
use crate::ui::MOBILE_UI_STYLES;
use crate::views::{AdminPanel, LoginScreen, UserPanel};

#[component]
pub fn App() -> Element {
    let api = use_signal(|| match session_manager_from_config() {
        Ok(manager) => Some(manager),
        Err(error) => {
            tracing::error!("Failed to construct API client: {}", error);
            None
        }
    });
    let session = use_signal(|| ShellSession::Booting);
    use_context_provider(|| AppState { api, session });

    rsx! {
        style { "{MOBILE_UI_STYLES}" }
        AppShell {}
    }
}

#[component]
fn AppShell() -> Element {
    let state = use_context::<AppState>();
    let mut session = state.session;

    // Silent re-entry: validate any persisted token before showing login.
    use_future(move || async move {
        let Some(manager) = state.manager() else {
            session.set(ShellSession::LoggedOut);
            return;
        };

        match manager.restore().await {
            SessionState::LoggedIn(restored) => {
                tracing::info!("Restored session with role {}", restored.role);
                session.set(ShellSession::LoggedIn(restored));
            }
            SessionState::LoggedOut => session.set(ShellSession::LoggedOut),
        }
    });

    match session() {
        ShellSession::Booting => rsx! {
            BootIndicator {}
        },
        ShellSession::LoggedOut => rsx! {
            LoginScreen {}
        },
        ShellSession::LoggedIn(active) => match active.role {
            Role::Admin => rsx! {
                AdminPanel {}
            },
            Role::User => rsx! {
                UserPanel {}
            },
        },
    }
}

#[component]
fn BootIndicator() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                height: 100vh;
                align-items: center;
                justify-content: center;
                color: #808080;
                font-size: 14px;
            ",
            "Checking session..."
        }
    }
}
