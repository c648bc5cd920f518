//! Screen components for the mobile shell.
//!
//! Shared list/form building blocks live here; each screen owns its own
//! fetch and mutation calls.

mod about;
mod admin_panel;
mod all_articles;
mod article_feed;
mod articles;
mod categories;
mod login;
mod my_articles;
mod user_panel;
mod users;

pub use admin_panel::AdminPanel;
pub use login::LoginScreen;
pub use user_panel::UserPanel;

use dioxus::prelude::*;

/// Generic alert line shown above a list or inside a modal. Every error
/// taxonomy collapses into this one surface.
#[component]
pub(crate) fn StatusBanner(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };
    rsx! {
        p { class: "status-banner", "{message}" }
    }
}

/// Search box recomputing the filtered list on every keystroke.
#[component]
pub(crate) fn SearchField(
    placeholder: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        input {
            class: "ui-input",
            style: "margin-bottom: 12px;",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| oninput.call(event),
        }
    }
}

/// Modal dialog container; renders nothing while closed.
#[component]
pub(crate) fn ModalShell(open: bool, children: Element) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal-card", {children} }
        }
    }
}

/// The shared about text in a closable modal, used from the login screen
/// and the user panel.
#[component]
pub(crate) fn AboutModal(
    open: bool,
    content: String,
    onclose: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        ModalShell { open,
            p { class: "screen-title", style: "text-align: center;", "About Us" }
            p { style: "margin: 0; color: #333333; font-size: 14px; white-space: pre-wrap;",
                "{content}"
            }
            crate::ui::UiButton {
                variant: crate::ui::ButtonVariant::Danger,
                block: true,
                onclick: move |event| onclose.call(event),
                "Close"
            }
        }
    }
}

/// Empty-list placeholder card.
#[component]
pub(crate) fn EmptyListCard(message: String) -> Element {
    rsx! {
        div {
            style: "
                margin-top: 24px;
                padding: 20px;
                background: #ffffff;
                border: 1px solid #cccccc;
                border-radius: 5px;
                text-align: center;
                color: #808080;
            ",
            "{message}"
        }
    }
}
