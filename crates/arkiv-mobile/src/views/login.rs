//! Login screen with "remember me" and the anonymous about modal.

use dioxus::prelude::*;

use arkiv_core::Error;

use crate::state::{AppState, ShellSession};
use crate::ui::{ButtonVariant, UiButton, UiCheckbox, UiInput};

use super::{AboutModal, StatusBanner};

#[component]
pub fn LoginScreen() -> Element {
    let state = use_context::<AppState>();
    let username = use_signal(String::new);
    let password = use_signal(String::new);
    let remember_me = use_signal(|| false);
    let mut status = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut about_open = use_signal(|| false);
    let mut about_content = use_signal(String::new);

    let submit = move |_| {
        let mut session = state.session;
        spawn(async move {
            let Some(manager) = state.manager() else {
                status.set(Some("The app is not configured; restart it.".to_string()));
                return;
            };

            busy.set(true);
            status.set(None);
            match manager
                .sign_in(&username(), &password(), remember_me())
                .await
            {
                Ok(active) => {
                    tracing::info!("Logged in with role {}", active.role);
                    session.set(ShellSession::LoggedIn(active));
                }
                Err(error) => status.set(Some(login_error_message(&error))),
            }
            busy.set(false);
        });
    };

    let open_about = move |_| {
        spawn(async move {
            let Some(manager) = state.manager() else {
                return;
            };
            match manager.client().fetch_about().await {
                Ok(content) => {
                    about_content.set(content);
                    about_open.set(true);
                }
                Err(error) => {
                    tracing::warn!("Failed to fetch about text: {}", error);
                    status.set(Some("Could not load the about text.".to_string()));
                }
            }
        });
    };

    rsx! {
        div { class: "screen", style: "justify-content: center;",
            p { class: "screen-title", style: "text-align: center; font-size: 26px;",
                "Arkiv"
            }
            StatusBanner { message: status() }
            div { style: "display: flex; flex-direction: column; gap: 12px;",
                UiInput {
                    placeholder: "Username",
                    value: "{username}",
                    oninput: {
                        let mut username = username;
                        move |event: FormEvent| username.set(event.value())
                    },
                }
                UiInput {
                    r#type: "password",
                    placeholder: "Password",
                    value: "{password}",
                    oninput: {
                        let mut password = password;
                        move |event: FormEvent| password.set(event.value())
                    },
                }
                UiCheckbox {
                    label: "Remember me",
                    checked: remember_me(),
                    onchange: {
                        let mut remember_me = remember_me;
                        move |event: FormEvent| remember_me.set(event.checked())
                    },
                }
                UiButton {
                    block: true,
                    disabled: busy(),
                    onclick: submit,
                    if busy() { "Signing in..." } else { "Login" }
                }
                UiButton {
                    variant: ButtonVariant::Ghost,
                    block: true,
                    onclick: open_about,
                    "About us"
                }
            }
        }
        AboutModal {
            open: about_open(),
            content: about_content(),
            onclose: move |_| about_open.set(false),
        }
    }
}

/// One user-facing line per failure class; transport details stay in logs.
fn login_error_message(error: &Error) -> String {
    match error {
        Error::Validation(validation) => validation.to_string(),
        Error::Auth(_) => "Invalid username or password.".to_string(),
        other => {
            tracing::error!("Login failed: {}", other);
            "Could not reach the server. Please try again.".to_string()
        }
    }
}
