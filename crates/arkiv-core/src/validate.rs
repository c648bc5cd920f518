//! Client-side required-field checks.
//!
//! Validation runs before any network call: a form that fails here must
//! not issue a request, and the error message doubles as the generic
//! user-facing alert. Server-side validation remains authoritative.

use thiserror::Error;

use crate::models::{ArticleDraft, Role};

/// A required field was missing at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingRequiredField,
    #[error("Name is required.")]
    MissingName,
    #[error("Please choose a file before adding or updating an article.")]
    MissingFile,
    #[error("Username and password are required.")]
    MissingCredentials,
}

/// Required-field check for the user form.
///
/// `password` carries `Some` on create, where a value is mandatory; pass
/// `None` on update, where leaving it blank keeps the stored password.
pub fn validate_user_form(
    name: &str,
    username: &str,
    email: &str,
    role: Option<Role>,
    password: Option<&str>,
) -> Result<(), ValidationError> {
    let text_fields = [name, username, email];
    if text_fields.iter().any(|field| field.trim().is_empty()) || role.is_none() {
        return Err(ValidationError::MissingRequiredField);
    }
    if password.is_some_and(|value| value.trim().is_empty()) {
        return Err(ValidationError::MissingRequiredField);
    }
    Ok(())
}

/// Required-field check for the category form.
pub fn validate_category_form(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    Ok(())
}

/// Required-field check for the article form.
///
/// A chosen file is required for both create and update, matching the
/// behavior of the submitting screen rather than the wire contract
/// (update without a file is accepted by the backend, but the screen
/// never sends one).
pub fn validate_article_form(draft: &ArticleDraft) -> Result<(), ValidationError> {
    let text_fields = [
        draft.name.as_str(),
        draft.author.as_str(),
        draft.category.as_str(),
        draft.description.as_str(),
    ];
    if text_fields.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::MissingRequiredField);
    }
    if draft.file.is_none() {
        return Err(ValidationError::MissingFile);
    }
    Ok(())
}

/// Required-field check for the login form.
pub fn validate_login_form(username: &str, password: &str) -> Result<(), ValidationError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FileUpload;

    fn complete_draft() -> ArticleDraft {
        ArticleDraft {
            name: "Doc".to_string(),
            author: "A".to_string(),
            category: "Tech".to_string(),
            description: "x".to_string(),
            file: Some(FileUpload {
                file_name: "doc.pdf".to_string(),
                bytes: vec![1, 2, 3],
            }),
        }
    }

    #[test]
    fn user_form_requires_every_field_on_create() {
        assert_eq!(
            validate_user_form("", "ada", "a@b.c", Some(Role::User), Some("pw")),
            Err(ValidationError::MissingRequiredField)
        );
        assert_eq!(
            validate_user_form("Ada", "ada", "a@b.c", None, Some("pw")),
            Err(ValidationError::MissingRequiredField)
        );
        assert_eq!(
            validate_user_form("Ada", "ada", "a@b.c", Some(Role::User), Some("  ")),
            Err(ValidationError::MissingRequiredField)
        );
        assert!(validate_user_form("Ada", "ada", "a@b.c", Some(Role::User), Some("pw")).is_ok());
    }

    #[test]
    fn user_form_allows_blank_password_on_update() {
        assert!(validate_user_form("Ada", "ada", "a@b.c", Some(Role::Admin), None).is_ok());
    }

    #[test]
    fn category_form_requires_name() {
        assert_eq!(
            validate_category_form("   "),
            Err(ValidationError::MissingName)
        );
        assert!(validate_category_form("Tech").is_ok());
    }

    #[test]
    fn article_form_requires_file() {
        let mut draft = complete_draft();
        draft.file = None;
        assert_eq!(
            validate_article_form(&draft),
            Err(ValidationError::MissingFile)
        );
        assert!(validate_article_form(&complete_draft()).is_ok());
    }

    #[test]
    fn article_form_requires_text_fields() {
        let mut draft = complete_draft();
        draft.category = String::new();
        assert_eq!(
            validate_article_form(&draft),
            Err(ValidationError::MissingRequiredField)
        );
    }

    #[test]
    fn login_form_requires_both_credentials() {
        assert_eq!(
            validate_login_form("ada", ""),
            Err(ValidationError::MissingCredentials)
        );
        assert_eq!(
            validate_login_form(" ", "pw"),
            Err(ValidationError::MissingCredentials)
        );
        assert!(validate_login_form("ada", "pw").is_ok());
    }
}
