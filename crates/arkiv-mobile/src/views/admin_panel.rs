//! Admin navigation: a bottom tab bar over the four management screens.

use dioxus::prelude::*;

use super::about::AboutEditorScreen;
use super::articles::ArticlesScreen;
use super::categories::CategoriesScreen;
use super::users::UsersScreen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Users,
    Categories,
    Articles,
    About,
}

impl AdminTab {
    const ALL: [Self; 4] = [Self::Users, Self::Categories, Self::Articles, Self::About];

    const fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Categories => "Categories",
            Self::Articles => "Articles",
            Self::About => "About",
        }
    }
}

#[component]
pub fn AdminPanel() -> Element {
    let mut active_tab = use_signal(|| AdminTab::Users);

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh;",
            div { style: "flex: 1; overflow: hidden;",
                match active_tab() {
                    AdminTab::Users => rsx! {
                        UsersScreen {}
                    },
                    AdminTab::Categories => rsx! {
                        CategoriesScreen {}
                    },
                    AdminTab::Articles => rsx! {
                        ArticlesScreen {}
                    },
                    AdminTab::About => rsx! {
                        AboutEditorScreen {}
                    },
                }
            }
            div { class: "tab-bar",
                for tab in AdminTab::ALL {
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
    }
}
