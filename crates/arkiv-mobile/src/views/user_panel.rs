//! Regular-user navigation: browse and liked-article tabs plus the
//! floating about button.

use dioxus::prelude::*;

use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton};

use super::all_articles::AllArticlesScreen;
use super::my_articles::MyArticlesScreen;
use super::AboutModal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UserTab {
    AllArticles,
    MyArticles,
}

impl UserTab {
    const ALL: [Self; 2] = [Self::AllArticles, Self::MyArticles];

    const fn label(self) -> &'static str {
        match self {
            Self::AllArticles => "All Articles",
            Self::MyArticles => "My Articles",
        }
    }
}

#[component]
pub fn UserPanel() -> Element {
    let state = use_context::<AppState>();
    let mut active_tab = use_signal(|| UserTab::AllArticles);
    let mut about_open = use_signal(|| false);
    let mut about_content = use_signal(String::new);

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
                Err(error) => tracing::warn!("Failed to fetch about text: {}", error),
            }
        });
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh;",
            div { style: "flex: 1; overflow: hidden;",
                match active_tab() {
                    UserTab::AllArticles => rsx! {
                        AllArticlesScreen {}
                    },
                    UserTab::MyArticles => rsx! {
                        MyArticlesScreen {}
                    },
                }
            }
            UiButton {
                variant: ButtonVariant::Outline,
                class: "info-button",
                onclick: open_about,
                "i"
            }
            div { class: "tab-bar",
                for tab in UserTab::ALL {
                    button {
                        class: if active_tab() == tab {
                            "tab-button tab-button--active"
                        } else {
                            "tab-button"
                        },
                        onclick: move |_| active_tab.set(tab),
                        "{tab.label()}"
                    }
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
