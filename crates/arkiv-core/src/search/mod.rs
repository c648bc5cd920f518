//! Client-side substring filters for the list screens.
//!
//! Every list screen re-filters the last fetched collection on each
//! keystroke; nothing here touches the network. Matching is a
//! case-insensitive substring test over the fields each screen designates,
//! and an empty query returns the fetched list unchanged.

use crate::models::{Article, Category, User};

/// Filter users by name, username, or email.
#[must_use]
pub fn filter_users(users: &[User], query: &str) -> Vec<User> {
    let query = normalize_query(query);
    users
        .iter()
        .filter(|user| {
            matches_any(
                &[&user.name, &user.username, &user.email],
                &query,
            )
        })
        .cloned()
        .collect()
}

/// Filter categories by name.
#[must_use]
pub fn filter_categories(categories: &[Category], query: &str) -> Vec<Category> {
    let query = normalize_query(query);
    categories
        .iter()
        .filter(|category| matches_any(&[&category.name], &query))
        .cloned()
        .collect()
}

/// Filter articles by name, author, or description (admin listing).
#[must_use]
pub fn filter_articles(articles: &[Article], query: &str) -> Vec<Article> {
    let query = normalize_query(query);
    articles
        .iter()
        .filter(|article| {
            matches_any(
                &[&article.name, &article.author, &article.description],
                &query,
            )
        })
        .cloned()
        .collect()
}

/// Filter articles by name only (consumption listings).
#[must_use]
pub fn filter_articles_by_name(articles: &[Article], query: &str) -> Vec<Article> {
    let query = normalize_query(query);
    articles
        .iter()
        .filter(|article| matches_any(&[&article.name], &query))
        .cloned()
        .collect()
}

fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn matches_any(fields: &[&str], query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::Role;

    fn users_fixture() -> Vec<User> {
        vec![
            User {
                id: 1,
                name: "Ada Lovelace".to_string(),
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Admin,
            },
            User {
                id: 2,
                name: "Grace Hopper".to_string(),
                username: "ghopper".to_string(),
                email: "grace@navy.mil".to_string(),
                role: Role::User,
            },
        ]
    }

    fn articles_fixture() -> Vec<Article> {
        vec![
            Article {
                id: 1,
                name: "Compiler Notes".to_string(),
                author: "Grace".to_string(),
                category: "Tech".to_string(),
                description: "flow-matic history".to_string(),
                file: None,
                likes: 0,
                downloads: 0,
            },
            Article {
                id: 2,
                name: "Engine Sketches".to_string(),
                author: "Ada".to_string(),
                category: "Math".to_string(),
                description: "analytical engine".to_string(),
                file: None,
                likes: 3,
                downloads: 1,
            },
        ]
    }

    #[test]
    fn empty_query_returns_full_list_unchanged() {
        let users = users_fixture();
        assert_eq!(filter_users(&users, ""), users);
        assert_eq!(filter_users(&users, "   "), users);
    }

    #[test]
    fn user_filter_matches_across_designated_fields() {
        let users = users_fixture();
        assert_eq!(filter_users(&users, "LOVELACE").len(), 1);
        assert_eq!(filter_users(&users, "ghopper").len(), 1);
        assert_eq!(filter_users(&users, "navy.mil").len(), 1);
        assert_eq!(filter_users(&users, "example.org").len(), 0);
    }

    #[test]
    fn article_filter_spans_name_author_description() {
        let articles = articles_fixture();
        assert_eq!(filter_articles(&articles, "compiler").len(), 1);
        assert_eq!(filter_articles(&articles, "ada").len(), 1);
        assert_eq!(filter_articles(&articles, "engine").len(), 2);
    }

    #[test]
    fn consumption_filter_matches_name_only() {
        let articles = articles_fixture();
        // "analytical engine" only appears in a description.
        assert_eq!(filter_articles_by_name(&articles, "analytical").len(), 0);
        assert_eq!(filter_articles_by_name(&articles, "sketches").len(), 1);
    }

    #[test]
    fn filtered_list_is_exact_matching_subset() {
        let articles = articles_fixture();
        let filtered = filter_articles_by_name(&articles, "engine");
        assert_eq!(filtered, vec![articles[1].clone()]);
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let categories = vec![
            Category {
                id: 1,
                name: "Tech".to_string(),
            },
            Category {
                id: 2,
                name: "Math".to_string(),
            },
        ];
        assert_eq!(filter_categories(&categories, "tEcH").len(), 1);
    }
}
