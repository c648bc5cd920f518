//! Browse tab over every article.

use dioxus::prelude::*;

use super::article_feed::{ArticleFeed, FeedScope};

#[component]
pub(crate) fn AllArticlesScreen() -> Element {
    rsx! {
        ArticleFeed { scope: FeedScope::All }
    }
}
