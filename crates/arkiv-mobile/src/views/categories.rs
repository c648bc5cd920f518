//! Admin category management.

use dioxus::prelude::*;

use arkiv_core::models::Category;
use arkiv_core::search::filter_categories;
use arkiv_core::validate::validate_category_form;

use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton, UiInput};

use super::{EmptyListCard, ModalShell, SearchField, StatusBanner};

#[component]
pub(crate) fn CategoriesScreen() -> Element {
    let state = use_context::<AppState>();
    let refresh_version = use_signal(|| 0u64);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut status = use_signal(|| None::<String>);
    let query = use_signal(String::new);

    let mut form_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form_name = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    use_future(move || async move {
        let _version = refresh_version();
        let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
            return;
        };

        match manager.client().list_categories(&token).await {
            Ok(fetched) => {
                categories.set(fetched);
                status.set(None);
            }
            Err(error) => {
                tracing::error!("Failed to fetch categories: {}", error);
                status.set(Some("Could not load categories.".to_string()));
            }
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        form_name.set(String::new());
        form_error.set(None);
        form_open.set(true);
    };

    let mut open_edit = move |category: &Category| {
        editing_id.set(Some(category.id));
        form_name.set(category.name.clone());
        form_error.set(None);
        form_open.set(true);
    };

    let save = move |_| {
        let mut refresh_version = refresh_version;
        spawn(async move {
            let name = form_name();
            if let Err(error) = validate_category_form(&name) {
                form_error.set(Some(error.to_string()));
                return;
            }
            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };

            let result = match editing_id() {
                None => manager.client().create_category(&token, &name).await,
                Some(id) => manager.client().update_category(&token, id, &name).await,
            };
            match result {
                Ok(()) => {
                    form_open.set(false);
                    refresh_version += 1;
                }
                Err(error) => {
                    tracing::error!("Failed to save category: {}", error);
                    form_error.set(Some("Could not save the category.".to_string()));
                }
            }
        });
    };

    let delete = move |id: i64| {
        let mut refresh_version = refresh_version;
        spawn(async move {
            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };
            match manager.client().delete_category(&token, id).await {
                Ok(()) => refresh_version += 1,
                Err(error) => {
                    tracing::error!("Failed to delete category: {}", error);
                    status.set(Some("Could not delete the category.".to_string()));
                }
            }
        });
    };

    let visible = filter_categories(&categories(), &query());
    let editing = editing_id().is_some();

    rsx! {
        div { class: "screen",
            p { class: "screen-title", "Categories" }
            StatusBanner { message: status() }
            SearchField {
                placeholder: "Search categories...",
                value: query(),
                oninput: {
                    let mut query = query;
                    move |event: FormEvent| query.set(event.value())
                },
            }
            div { class: "list-scroll",
                if visible.is_empty() {
                    EmptyListCard { message: "No categories found." }
                }
                for category in visible {
                    div { class: "list-card", key: "{category.id}",
                        p { style: "margin: 0; font-weight: 700; color: #333333;",
                            "{category.name}"
                        }
                        div { class: "list-card-actions",
                            UiButton {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let category = category.clone();
                                    move |_| open_edit(&category)
                                },
                                "Edit"
                            }
                            UiButton {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let id = category.id;
                                    move |_| delete(id)
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
            UiButton { class: "fab", onclick: move |_| open_create(), "+" }
        }
        ModalShell { open: form_open(),
            p { class: "screen-title", style: "margin-bottom: 0;",
                if editing { "Edit Category" } else { "Add Category" }
            }
            StatusBanner { message: form_error() }
            UiInput {
                placeholder: "Category name",
                value: "{form_name}",
                oninput: move |event: FormEvent| form_name.set(event.value()),
            }
            div { class: "modal-buttons",
                UiButton {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| form_open.set(false),
                    "Cancel"
                }
                UiButton { onclick: save, "Save" }
            }
        }
    }
}
