//! REST client for the Arkiv backend service.
//!
//! Every screen goes through one `ArchiveClient` configured with a single
//! normalized base URL, and the bearer token is passed explicitly per
//! request. There is no shared default header and no retry policy: each
//! call is one request/response exchange whose failure is reported to the
//! initiating screen.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    Article, ArticleDraft, Category, LikeState, NewUser, Role, User, UserUpdate,
};
use crate::util::{compact_text, is_http_url};

/// HTTP client for the Arkiv document-archive backend.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    base_url: String,
    client: Client,
}

/// Successful credential exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: String,
    pub role: Role,
}

/// Downloaded article payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download {
    pub bytes: Vec<u8>,
    /// File name parsed from the Content-Disposition header, when present.
    pub file_name: Option<String>,
}

impl ArchiveClient {
    /// Builds a client for an explicit backend base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let base_url = normalize_base_url(base_url.into().as_str())?;
        let client = Client::builder().build()?;
        Ok(Self { base_url, client })
    }

    /// Returns the normalized base URL this client was configured with.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchanges credentials for a token and role.
    ///
    /// A 401 or a success payload missing either field maps to
    /// [`Error::Auth`], matching the backend's invalid-credentials answer.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<LoginOutcome> {
        #[derive(Deserialize)]
        struct LoginResponse {
            token: Option<String>,
            role: Option<Role>,
        }

        let response = self
            .client
            .post(self.endpoint("/login"))
            .json(&serde_json::json!({
                "username": username,
                "password": password,
                "remember_me": remember_me,
            }))
            .send()
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(Error::Auth("Invalid credentials".to_string()));
        }

        let payload: LoginResponse = Self::expect_json(response).await?;
        match (payload.token, payload.role) {
            (Some(token), Some(role)) => Ok(LoginOutcome { token, role }),
            _ => Err(Error::Auth(
                "Login response did not include a token and role".to_string(),
            )),
        }
    }

    /// Validates a persisted token, yielding the role the server still
    /// associates with it.
    pub async fn check_session(&self, token: &str) -> Result<Role> {
        #[derive(Deserialize)]
        struct SessionResponse {
            role: Role,
        }

        let response = self
            .authorized(self.client.get(self.endpoint("/check_session")), token)
            .send()
            .await?;
        let payload: SessionResponse = Self::expect_json(response).await?;
        Ok(payload.role)
    }

    /// Reads the shared about text. Anonymous: the login screen shows it
    /// before any session exists.
    pub async fn fetch_about(&self) -> Result<String> {
        let response = self
            .client
            .get(self.endpoint("/about"))
            .header("Accept", "application/json")
            .send()
            .await?;
        let payload: AboutPayload = Self::expect_json(response).await?;
        Ok(payload.content)
    }

    /// Overwrites the shared about text. Last writer wins; there is no
    /// versioning or concurrent-edit detection.
    pub async fn save_about(&self, token: &str, content: &str) -> Result<()> {
        let response = self
            .authorized(self.client.post(self.endpoint("/about")), token)
            .json(&AboutPayload {
                content: content.to_string(),
            })
            .send()
            .await?;
        Self::expect_success(response).await
    }

    // --- users (admin) ---

    pub async fn list_users(&self, token: &str) -> Result<Vec<User>> {
        self.get_json(token, "/users").await
    }

    pub async fn create_user(&self, token: &str, user: &NewUser) -> Result<()> {
        let response = self
            .authorized(self.client.post(self.endpoint("/users")), token)
            .json(user)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn update_user(&self, token: &str, id: i64, update: &UserUpdate) -> Result<()> {
        let response = self
            .authorized(
                self.client.put(self.endpoint(&format!("/users/{id}"))),
                token,
            )
            .json(update)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn delete_user(&self, token: &str, id: i64) -> Result<()> {
        let response = self
            .authorized(
                self.client.delete(self.endpoint(&format!("/users/{id}"))),
                token,
            )
            .send()
            .await?;
        Self::expect_success(response).await
    }

    // --- categories (admin) ---

    pub async fn list_categories(&self, token: &str) -> Result<Vec<Category>> {
        self.get_json(token, "/categories").await
    }

    pub async fn create_category(&self, token: &str, name: &str) -> Result<()> {
        let response = self
            .authorized(self.client.post(self.endpoint("/categories")), token)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn update_category(&self, token: &str, id: i64, name: &str) -> Result<()> {
        let response = self
            .authorized(
                self.client.put(self.endpoint(&format!("/categories/{id}"))),
                token,
            )
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn delete_category(&self, token: &str, id: i64) -> Result<()> {
        let response = self
            .authorized(
                self.client
                    .delete(self.endpoint(&format!("/categories/{id}"))),
                token,
            )
            .send()
            .await?;
        Self::expect_success(response).await
    }

    // --- articles (admin CRUD) ---

    pub async fn list_articles(&self, token: &str) -> Result<Vec<Article>> {
        self.get_json(token, "/articles").await
    }

    /// Creates an article as a multipart form: name, author, category,
    /// description, plus the file bytes.
    pub async fn create_article(&self, token: &str, draft: &ArticleDraft) -> Result<()> {
        let response = self
            .authorized(self.client.post(self.endpoint("/articles")), token)
            .multipart(article_form(draft))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Updates an article. The file part is optional on the wire; when it
    /// is absent the backend keeps the stored file.
    pub async fn update_article(&self, token: &str, id: i64, draft: &ArticleDraft) -> Result<()> {
        let response = self
            .authorized(
                self.client.put(self.endpoint(&format!("/articles/{id}"))),
                token,
            )
            .multipart(article_form(draft))
            .send()
            .await?;
        Self::expect_success(response).await
    }

    pub async fn delete_article(&self, token: &str, id: i64) -> Result<()> {
        let response = self
            .authorized(
                self.client.delete(self.endpoint(&format!("/articles/{id}"))),
                token,
            )
            .send()
            .await?;
        Self::expect_success(response).await
    }

    // --- articles (consumption) ---

    /// Lists every article for the browse screen.
    pub async fn list_all_articles(&self, token: &str) -> Result<Vec<Article>> {
        self.get_json(token, "/all_articles").await
    }

    /// Lists the caller's liked articles.
    pub async fn list_my_articles(&self, token: &str) -> Result<Vec<Article>> {
        self.get_json(token, "/my_articles").await
    }

    /// Side query for the per-user like flag on one article.
    pub async fn is_liked(&self, token: &str, id: i64) -> Result<bool> {
        let state: LikeState = self
            .get_json(token, &format!("/articles/{id}/is_liked"))
            .await?;
        Ok(state.is_liked)
    }

    /// Toggles the caller's like on an article. The new state is not
    /// returned; callers re-query [`Self::is_liked`] afterwards.
    pub async fn toggle_like(&self, token: &str, id: i64) -> Result<()> {
        let response = self
            .authorized(
                self.client
                    .post(self.endpoint(&format!("/articles/{id}/like"))),
                token,
            )
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Fetches the article file as raw bytes, with the server-suggested
    /// file name when a Content-Disposition header is present.
    pub async fn download_article(&self, token: &str, id: i64) -> Result<Download> {
        let response = self
            .authorized(
                self.client
                    .post(self.endpoint(&format!("/articles/{id}/download"))),
                token,
            )
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let file_name = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(filename_from_content_disposition);
        let bytes = response.bytes().await?;
        Ok(Download {
            bytes: bytes.to_vec(),
            file_name,
        })
    }

    // --- plumbing ---

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder, token: &str) -> RequestBuilder {
        request.bearer_auth(token).header("Accept", "application/json")
    }

    async fn get_json<T: DeserializeOwned>(&self, token: &str, path: &str) -> Result<T> {
        let response = self
            .authorized(self.client.get(self.endpoint(path)), token)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    async fn expect_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(response.json::<T>().await?)
    }

    async fn expect_success(response: Response) -> Result<()> {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }
        Ok(())
    }

    async fn error_from_response(response: Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = compact_text(&body);
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Error::Auth(message)
        } else {
            Error::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AboutPayload {
    content: String,
}

fn article_form(draft: &ArticleDraft) -> Form {
    let mut form = Form::new()
        .text("name", draft.name.clone())
        .text("author", draft.author.clone())
        .text("category", draft.category.clone())
        .text("description", draft.description.clone());
    if let Some(file) = &draft.file {
        form = form.part(
            "file",
            Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
        );
    }
    form
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let base = raw.trim().trim_end_matches('/').to_string();
    if base.is_empty() {
        return Err(Error::Api {
            status: 0,
            message: "API base URL must not be empty".to_string(),
        });
    }
    if !is_http_url(&base) {
        return Err(Error::Api {
            status: 0,
            message: "API base URL must include http:// or https://".to_string(),
        });
    }
    Ok(base)
}

/// Extracts the `filename` parameter from a Content-Disposition header.
///
/// Handles both quoted (`filename="report.pdf"`) and bare
/// (`filename=report.pdf`) forms; returns `None` when the parameter is
/// missing or empty.
#[must_use]
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let (_, parameter) = header.split_once("filename=")?;
    let parameter = parameter.trim();
    let name = if let Some(quoted) = parameter.strip_prefix('"') {
        quoted.split('"').next()?
    } else {
        parameter.split(';').next()?.trim()
    };
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(ArchiveClient::new("").is_err());
        assert!(ArchiveClient::new("archive.example.com").is_err());
    }

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            ArchiveClient::new("http://127.0.0.1:5000/")
                .unwrap()
                .base_url(),
            "http://127.0.0.1:5000"
        );
    }

    #[test]
    fn filename_parses_quoted_parameter() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"report.pdf\"").as_deref(),
            Some("report.pdf")
        );
    }

    #[test]
    fn filename_parses_bare_parameter() {
        assert_eq!(
            filename_from_content_disposition("attachment; filename=notes.txt").as_deref(),
            Some("notes.txt")
        );
        assert_eq!(
            filename_from_content_disposition("attachment; filename=notes.txt; size=12").as_deref(),
            Some("notes.txt")
        );
    }

    #[test]
    fn filename_absent_or_empty_yields_none() {
        assert_eq!(filename_from_content_disposition("attachment"), None);
        assert_eq!(
            filename_from_content_disposition("attachment; filename=\"\""),
            None
        );
    }
}
