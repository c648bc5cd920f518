//! User accounts managed from the admin panel.

use serde::{Deserialize, Serialize};

use super::Role;

/// A user account as returned by the backend.
///
/// The password is write-only and never present in fetched payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
}

/// Payload for creating a user; the password is mandatory here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewUser {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Payload for updating a user.
///
/// The password field is omitted from the JSON body entirely when left
/// unchanged, so the backend keeps the stored hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserUpdate {
    pub name: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_update_omits_unchanged_password() {
        let update = UserUpdate {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: None,
            role: Role::User,
        };

        let body = serde_json::to_value(&update).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["role"], "user");
    }

    #[test]
    fn user_update_includes_replacement_password() {
        let update = UserUpdate {
            name: "Ada".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            password: Some("hunter2".to_string()),
            role: Role::Admin,
        };

        let body = serde_json::to_value(&update).unwrap();
        assert_eq!(body["password"], "hunter2");
    }

    #[test]
    fn user_payload_roundtrips_without_password() {
        let raw = r#"{"id":3,"name":"Ada","username":"ada","email":"ada@example.com","role":"admin"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.role, Role::Admin);
    }
}
