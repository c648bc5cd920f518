//! Per-article like-state tracking for the consumption screens.
//!
//! The backend never embeds the caller's like flag in article payloads;
//! each screen fills this map through one side query per listed article
//! and re-queries after every toggle.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::collections::HashMap;

/// Like flags keyed by article id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeStates {
    states: HashMap<i64, bool>,
}

impl LikeStates {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer of a like-state side query.
    pub fn set(&mut self, article_id: i64, is_liked: bool) {
        self.states.insert(article_id, is_liked);
    }

    /// An article reads as not-liked until its side query answers.
    #[must_use]
    pub fn is_liked(&self, article_id: i64) -> bool {
        self.states.get(&article_id).copied().unwrap_or(false)
    }

    /// Drops every cached flag, e.g. before a full list reload.
    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Stand-in for the backend's per-user like toggle.
    #[derive(Default)]
    struct FakeLikeBackend {
        liked: bool,
    }

    impl FakeLikeBackend {
        fn toggle(&mut self) {
            self.liked = !self.liked;
        }

        const fn is_liked(&self) -> bool {
            self.liked
        }
    }

    #[test]
    fn unknown_articles_read_as_not_liked() {
        let states = LikeStates::new();
        assert!(!states.is_liked(42));
    }

    #[test]
    fn toggle_then_requery_flips_the_flag() {
        // Backend starts with {is_liked: false} for article 1.
        let mut backend = FakeLikeBackend::default();
        let mut states = LikeStates::new();
        states.set(1, backend.is_liked());
        assert!(!states.is_liked(1));

        // Tap: POST the toggle, then re-query the state.
        backend.toggle();
        states.set(1, backend.is_liked());
        assert!(states.is_liked(1));
    }

    #[test]
    fn double_toggle_returns_to_the_original_state() {
        let mut backend = FakeLikeBackend::default();
        let mut states = LikeStates::new();
        states.set(7, backend.is_liked());
        let original = states.is_liked(7);

        for _ in 0..2 {
            backend.toggle();
            states.set(7, backend.is_liked());
        }

        assert_eq!(states.is_liked(7), original);
    }

    #[test]
    fn clear_forgets_cached_flags() {
        let mut states = LikeStates::new();
        states.set(3, true);
        states.clear();
        assert!(!states.is_liked(3));
    }
}
