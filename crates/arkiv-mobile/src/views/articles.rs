//! Admin article management: list, search, and the add/edit modal with
//! the in-memory file pick.

use dioxus::prelude::*;

use arkiv_core::models::{Article, ArticleDraft, Category, FileUpload};
use arkiv_core::search::filter_articles;
use arkiv_core::validate::validate_article_form;

use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton, UiInput, UiSelect, UiTextarea};

use super::{EmptyListCard, ModalShell, SearchField, StatusBanner};

#[component]
pub(crate) fn ArticlesScreen() -> Element {
    let state = use_context::<AppState>();
    let refresh_version = use_signal(|| 0u64);
    let mut articles = use_signal(Vec::<Article>::new);
    let mut categories = use_signal(Vec::<Category>::new);
    let mut status = use_signal(|| None::<String>);
    let query = use_signal(String::new);

    let mut form_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form_name = use_signal(String::new);
    let mut form_author = use_signal(String::new);
    let mut form_category = use_signal(String::new);
    let mut form_description = use_signal(String::new);
    let mut form_file = use_signal(|| None::<FileUpload>);
    let mut form_error = use_signal(|| None::<String>);

    // One future feeds both the article list and the category choices for
    // the form's picker.
    use_future(move || async move {
        let _version = refresh_version();
        let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
            return;
        };

        match manager.client().list_articles(&token).await {
            Ok(fetched) => {
                articles.set(fetched);
                status.set(None);
            }
            Err(error) => {
                tracing::error!("Failed to fetch articles: {}", error);
                status.set(Some("Could not load articles.".to_string()));
            }
        }
        match manager.client().list_categories(&token).await {
            Ok(fetched) => categories.set(fetched),
            Err(error) => tracing::error!("Failed to fetch categories: {}", error),
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        form_name.set(String::new());
        form_author.set(String::new());
        form_category.set(String::new());
        form_description.set(String::new());
        form_file.set(None);
        form_error.set(None);
        form_open.set(true);
    };

    let mut open_edit = move |article: &Article| {
        editing_id.set(Some(article.id));
        form_name.set(article.name.clone());
        form_author.set(article.author.clone());
        form_category.set(article.category.clone());
        form_description.set(article.description.clone());
        // The stored file never comes back down; a fresh pick is required
        // even when only the metadata changed.
        form_file.set(None);
        form_error.set(None);
        form_open.set(true);
    };

    let pick_file = move |event: Event<FormData>| {
        let mut files = event.files();
        let Some(file) = files.pop() else {
            return;
        };
        let file_name = file.name();
        if file_name.trim().is_empty() {
            form_error.set(Some("Selected file has no name.".to_string()));
            return;
        }

        spawn(async move {
            match file.read_bytes().await {
                Ok(bytes) => {
                    form_file.set(Some(FileUpload {
                        file_name,
                        bytes: bytes.to_vec(),
                    }));
                    form_error.set(None);
                }
                Err(error) => {
                    form_error.set(Some(format!("Failed to read selected file: {error}")));
                }
            }
        });
    };

    let save = move |_| {
        let mut refresh_version = refresh_version;
        spawn(async move {
            let draft = ArticleDraft {
                name: form_name(),
                author: form_author(),
                category: form_category(),
                description: form_description(),
                file: form_file(),
            };
            if let Err(error) = validate_article_form(&draft) {
                form_error.set(Some(error.to_string()));
                return;
            }
            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };

            let result = match editing_id() {
                None => manager.client().create_article(&token, &draft).await,
                Some(id) => manager.client().update_article(&token, id, &draft).await,
            };
            match result {
                Ok(()) => {
                    form_open.set(false);
                    refresh_version += 1;
                }
                Err(error) => {
                    tracing::error!("Failed to save article: {}", error);
                    form_error.set(Some("Could not save the article.".to_string()));
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
            match manager.client().delete_article(&token, id).await {
                Ok(()) => refresh_version += 1,
                Err(error) => {
                    tracing::error!("Failed to delete article: {}", error);
                    status.set(Some("Could not delete the article.".to_string()));
                }
            }
        });
    };

    let visible = filter_articles(&articles(), &query());
    let editing = editing_id().is_some();
    let picked = form_file();

    rsx! {
        div { class: "screen",
            p { class: "screen-title", "Articles" }
            StatusBanner { message: status() }
            SearchField {
                placeholder: "Search articles...",
                value: query(),
                oninput: {
                    let mut query = query;
                    move |event: FormEvent| query.set(event.value())
                },
            }
            div { class: "list-scroll",
                if visible.is_empty() {
                    EmptyListCard { message: "No articles found." }
                }
                for article in visible {
                    div { class: "list-card", key: "{article.id}",
                        p { style: "margin: 0; font-weight: 700; color: #333333;",
                            "{article.name}"
                        }
                        p { style: "margin: 2px 0 0 0; color: #808080; font-size: 13px;",
                            "{article.author} · {article.category}"
                        }
                        p { style: "margin: 6px 0 0 0; color: #333333; font-size: 13px;",
                            "{article.description}"
                        }
                        if let Some(file) = &article.file {
                            p { style: "margin: 6px 0 0 0; color: #808080; font-size: 12px;",
                                "File: {file}"
                            }
                        }
                        p { style: "margin: 6px 0 0 0; color: #808080; font-size: 12px;",
                            "♥ {article.likes}   ⬇ {article.downloads}"
                        }
                        div { class: "list-card-actions",
                            UiButton {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let article = article.clone();
                                    move |_| open_edit(&article)
                                },
                                "Edit"
                            }
                            UiButton {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let id = article.id;
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
                if editing { "Edit Article" } else { "Add Article" }
            }
            StatusBanner { message: form_error() }
            UiInput {
                placeholder: "Name",
                value: "{form_name}",
                oninput: move |event: FormEvent| form_name.set(event.value()),
            }
            UiInput {
                placeholder: "Author",
                value: "{form_author}",
                oninput: move |event: FormEvent| form_author.set(event.value()),
            }
            UiSelect {
                value: "{form_category}",
                onchange: move |event: FormEvent| form_category.set(event.value()),
                option { value: "", disabled: true, "Select category" }
                for category in categories() {
                    option { value: "{category.name}", "{category.name}" }
                }
            }
            UiTextarea {
                placeholder: "Description",
                style: "min-height: 90px;",
                value: "{form_description}",
                oninput: move |event: FormEvent| form_description.set(event.value()),
            }
            label { class: "ui-button ui-button--outline", style: "text-align: center;",
                if let Some(file) = &picked {
                    "{file.file_name} ({file.size_kib():.1} KiB)"
                } else {
                    "Choose file"
                }
                input {
                    r#type: "file",
                    style: "display: none;",
                    onchange: pick_file,
                }
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
