//! Liked-articles tab.

use dioxus::prelude::*;

use super::article_feed::{ArticleFeed, FeedScope};

#[component]
pub(crate) fn MyArticlesScreen() -> Element {
    rsx! {
        ArticleFeed { scope: FeedScope::Liked }
    }
}
