//! Admin user management: list, search, and the add/edit modal.

use std::str::FromStr;

use dioxus::prelude::*;

use arkiv_core::models::{NewUser, Role, User, UserUpdate};
use arkiv_core::search::filter_users;
use arkiv_core::validate::{validate_user_form, ValidationError};

use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton, UiInput, UiSelect};

use super::{EmptyListCard, ModalShell, SearchField, StatusBanner};

#[component]
pub(crate) fn UsersScreen() -> Element {
    let state = use_context::<AppState>();
    let refresh_version = use_signal(|| 0u64);
    let mut users = use_signal(Vec::<User>::new);
    let mut status = use_signal(|| None::<String>);
    let query = use_signal(String::new);

    let mut form_open = use_signal(|| false);
    let mut editing_id = use_signal(|| None::<i64>);
    let mut form_name = use_signal(String::new);
    let mut form_username = use_signal(String::new);
    let mut form_email = use_signal(String::new);
    let mut form_role = use_signal(String::new);
    let mut form_password = use_signal(String::new);
    let mut form_error = use_signal(|| None::<String>);

    // Single fetch path; mutations bump `refresh_version` instead of
    // refetching on their own.
    use_future(move || async move {
        let _version = refresh_version();
        let Some(manager) = state.manager() else {
            return;
        };
        let Some(token) = state.token() else {
            return;
        };

        match manager.client().list_users(&token).await {
            Ok(fetched) => {
                users.set(fetched);
                status.set(None);
            }
            Err(error) => {
                tracing::error!("Failed to fetch users: {}", error);
                status.set(Some("Could not load users.".to_string()));
            }
        }
    });

    let mut open_create = move || {
        editing_id.set(None);
        form_name.set(String::new());
        form_username.set(String::new());
        form_email.set(String::new());
        form_role.set(String::new());
        form_password.set(String::new());
        form_error.set(None);
        form_open.set(true);
    };

    let mut open_edit = move |user: &User| {
        editing_id.set(Some(user.id));
        form_name.set(user.name.clone());
        form_username.set(user.username.clone());
        form_email.set(user.email.clone());
        form_role.set(user.role.as_str().to_string());
        form_password.set(String::new());
        form_error.set(None);
        form_open.set(true);
    };

    let save = move |_| {
        let mut refresh_version = refresh_version;
        spawn(async move {
            let password = form_password();
            let editing = editing_id();

            // Blank password on edit means "keep the stored one".
            let password_field = if editing.is_some() && password.trim().is_empty() {
                None
            } else {
                Some(password.as_str())
            };
            // An unselected role is the same required-field failure as a
            // blank text field.
            let Ok(role) = Role::from_str(&form_role()) else {
                form_error.set(Some(ValidationError::MissingRequiredField.to_string()));
                return;
            };
            if let Err(error) = validate_user_form(
                &form_name(),
                &form_username(),
                &form_email(),
                Some(role),
                password_field,
            ) {
                form_error.set(Some(error.to_string()));
                return;
            }

            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };

            let result = match editing {
                None => {
                    manager
                        .client()
                        .create_user(
                            &token,
                            &NewUser {
                                name: form_name(),
                                username: form_username(),
                                email: form_email(),
                                password,
                                role,
                            },
                        )
                        .await
                }
                Some(id) => {
                    manager
                        .client()
                        .update_user(
                            &token,
                            id,
                            &UserUpdate {
                                name: form_name(),
                                username: form_username(),
                                email: form_email(),
                                password: password_field.map(ToString::to_string),
                                role,
                            },
                        )
                        .await
                }
            };

            match result {
                Ok(()) => {
                    form_open.set(false);
                    refresh_version += 1;
                }
                Err(error) => {
                    tracing::error!("Failed to save user: {}", error);
                    form_error.set(Some("Could not save the user.".to_string()));
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
            match manager.client().delete_user(&token, id).await {
                Ok(()) => refresh_version += 1,
                Err(error) => {
                    tracing::error!("Failed to delete user: {}", error);
                    status.set(Some("Could not delete the user.".to_string()));
                }
            }
        });
    };

    let visible = filter_users(&users(), &query());
    let editing = editing_id().is_some();

    rsx! {
        div { class: "screen",
            p { class: "screen-title", "Users" }
            StatusBanner { message: status() }
            SearchField {
                placeholder: "Search users...",
                value: query(),
                oninput: {
                    let mut query = query;
                    move |event: FormEvent| query.set(event.value())
                },
            }
            div { class: "list-scroll",
                if visible.is_empty() {
                    EmptyListCard { message: "No users found." }
                }
                for user in visible {
                    div { class: "list-card", key: "{user.id}",
                        p { style: "margin: 0; font-weight: 700; color: #333333;",
                            "{user.name}"
                        }
                        p { style: "margin: 2px 0 0 0; color: #808080; font-size: 13px;",
                            "@{user.username} · {user.email} · {user.role}"
                        }
                        div { class: "list-card-actions",
                            UiButton {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let user = user.clone();
                                    move |_| open_edit(&user)
                                },
                                "Edit"
                            }
                            UiButton {
                                variant: ButtonVariant::Danger,
                                onclick: {
                                    let id = user.id;
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
                if editing { "Edit User" } else { "Add User" }
            }
            StatusBanner { message: form_error() }
            UiInput {
                placeholder: "Name",
                value: "{form_name}",
                oninput: move |event: FormEvent| form_name.set(event.value()),
            }
            UiInput {
                placeholder: "Username",
                value: "{form_username}",
                oninput: move |event: FormEvent| form_username.set(event.value()),
            }
            UiInput {
                placeholder: "Email",
                value: "{form_email}",
                oninput: move |event: FormEvent| form_email.set(event.value()),
            }
            UiSelect {
                value: "{form_role}",
                onchange: move |event: FormEvent| form_role.set(event.value()),
                option { value: "", disabled: true, "Select role" }
                option { value: "admin", "Admin" }
                option { value: "user", "User" }
            }
            UiInput {
                r#type: "password",
                placeholder: if editing { "New password (leave blank to keep)" } else { "Password" },
                value: "{form_password}",
                oninput: move |event: FormEvent| form_password.set(event.value()),
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
