//! Shared article feed backing both consumption tabs.
//!
//! The two tabs differ only in which listing endpoint they hit; liking,
//! downloading, and search behave identically.

use dioxus::prelude::*;

use arkiv_core::models::Article;
use arkiv_core::search::filter_articles_by_name;

use crate::article_state::LikeStates;
use crate::downloads::{resolved_download_file_name, DownloadsDirTarget, SaveTarget};
use crate::state::AppState;
use crate::ui::{ButtonVariant, UiButton};

use super::{EmptyListCard, SearchField, StatusBanner};

/// Which listing the feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FeedScope {
    /// Every article in the archive.
    All,
    /// Only the articles the caller has liked.
    Liked,
}

impl FeedScope {
    const fn title(self) -> &'static str {
        match self {
            Self::All => "All Articles",
            Self::Liked => "My Articles",
        }
    }
}

#[component]
pub(crate) fn ArticleFeed(scope: FeedScope) -> Element {
    let state = use_context::<AppState>();
    let refresh_version = use_signal(|| 0u64);
    let mut articles = use_signal(Vec::<Article>::new);
    let mut like_states = use_signal(LikeStates::new);
    let mut status = use_signal(|| None::<String>);
    let query = use_signal(String::new);

    // Fetches the listing, then fills the like flags one side query per
    // article. The payload itself never carries the caller's flag.
    use_future(move || async move {
        let _version = refresh_version();
        let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
            return;
        };
        let client = manager.client();

        let listing = match scope {
            FeedScope::All => client.list_all_articles(&token).await,
            FeedScope::Liked => client.list_my_articles(&token).await,
        };
        let fetched = match listing {
            Ok(fetched) => fetched,
            Err(error) => {
                tracing::error!("Failed to fetch articles: {}", error);
                status.set(Some("Could not load articles.".to_string()));
                return;
            }
        };

        like_states.write().clear();
        for article in &fetched {
            match client.is_liked(&token, article.id).await {
                Ok(flag) => like_states.write().set(article.id, flag),
                Err(error) => {
                    tracing::warn!("Like check failed for article {}: {}", article.id, error);
                }
            }
        }
        articles.set(fetched);
        status.set(None);
    });

    // Toggle is fire-then-requery: the backend does not return the new
    // state, so the flag comes from a fresh side query.
    let toggle_like = move |id: i64| {
        let mut refresh_version = refresh_version;
        spawn(async move {
            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };
            let client = manager.client();

            if let Err(error) = client.toggle_like(&token, id).await {
                tracing::error!("Failed to toggle like on article {}: {}", id, error);
                status.set(Some("Could not update the like.".to_string()));
                return;
            }
            match client.is_liked(&token, id).await {
                Ok(flag) => like_states.write().set(id, flag),
                Err(error) => {
                    tracing::warn!("Like check failed for article {}: {}", id, error);
                }
            }
            // Membership of the liked listing changed; counters moved too.
            refresh_version += 1;
        });
    };

    let download = move |article: Article| {
        let mut refresh_version = refresh_version;
        spawn(async move {
            let (Some(manager), Some(token)) = (state.manager(), state.token()) else {
                return;
            };

            match manager.client().download_article(&token, article.id).await {
                Ok(payload) => {
                    let file_name = resolved_download_file_name(
                        payload.file_name.as_deref(),
                        &article.name,
                    );
                    match DownloadsDirTarget.save(&file_name, &payload.bytes) {
                        Ok(path) => {
                            status.set(Some(format!("Saved to {}", path.display())));
                            refresh_version += 1;
                        }
                        Err(error) => {
                            tracing::error!("Failed to save download: {}", error);
                            status.set(Some("Could not save the file.".to_string()));
                        }
                    }
                }
                Err(error) => {
                    tracing::error!("Failed to download article {}: {}", article.id, error);
                    status.set(Some("Could not download the file.".to_string()));
                }
            }
        });
    };

    let visible = filter_articles_by_name(&articles(), &query());

    rsx! {
        div { class: "screen",
            p { class: "screen-title", "{scope.title()}" }
            StatusBanner { message: status() }
            SearchField {
                placeholder: "Search by name...",
                value: query(),
                oninput: {
                    let mut query = query;
                    move |event: FormEvent| query.set(event.value())
                },
            }
            div { class: "list-scroll",
                if visible.is_empty() {
                    EmptyListCard {
                        message: match scope {
                            FeedScope::All => "No articles yet.".to_string(),
                            FeedScope::Liked => "You have not liked any articles yet.".to_string(),
                        },
                    }
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
                        p { style: "margin: 6px 0 0 0; color: #808080; font-size: 12px;",
                            "♥ {article.likes}   ⬇ {article.downloads}"
                        }
                        div { class: "list-card-actions",
                            UiButton {
                                variant: if like_states.read().is_liked(article.id) {
                                    ButtonVariant::Danger
                                } else {
                                    ButtonVariant::Outline
                                },
                                onclick: {
                                    let id = article.id;
                                    move |_| toggle_like(id)
                                },
                                if like_states.read().is_liked(article.id) { "♥ Liked" } else { "♡ Like" }
                            }
                            UiButton {
                                onclick: {
                                    let article = article.clone();
                                    move |_| download(article.clone())
                                },
                                "Download"
                            }
                        }
                    }
                }
            }
        }
    }
}
