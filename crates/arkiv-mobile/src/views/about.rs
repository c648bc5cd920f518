//! Admin editor for the shared about text.

use dioxus::prelude::*;

use crate::state::AppState;
use crate::ui::{UiButton, UiTextarea};

use super::StatusBanner;

#[component]
pub(crate) fn AboutEditorScreen() -> Element {
    let state = use_context::<AppState>();
    let mut content = use_signal(String::new);
    let mut status = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    use_future(move || async move {
        let Some(manager) = state.manager() else {
            return;
        };
        match manager.client().fetch_about().await {
            Ok(text) => content.set(text),
            Err(error) => {
                tracing::error!("Failed to fetch about text: {}", error);
                status.set(Some("Could not load the about text.".to_string()));
            }
        }
    });

    let save = move |_| {
        spawn(async move {
            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };
            saving.set(true);
            match manager.client().save_about(&token, &content()).await {
                Ok(()) => status.set(Some("About text updated.".to_string())),
                Err(error) => {
                    tracing::error!("Failed to save about text: {}", error);
                    status.set(Some("Could not save the about text.".to_string()));
                }
            }
            saving.set(false);
        });
    };

    rsx! {
        div { class: "screen",
            p { class: "screen-title", "About Us" }
            StatusBanner { message: status() }
            UiTextarea {
                style: "flex: 1;",
                value: "{content}",
                oninput: move |event: FormEvent| content.set(event.value()),
            }
            div { style: "margin-top: 12px;",
                UiButton {
                    block: true,
                    disabled: saving(),
                    onclick: save,
                    if saving() { "Saving..." } else { "Save" }
                }
            }
        }
    }
}
