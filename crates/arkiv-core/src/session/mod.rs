//! Session state machine and the silent re-entry flow.
//!
//! Three states exist: logged out, logged in as admin, logged in as user -
//! the latter two collapse into [`SessionState::LoggedIn`] carrying the
//! [`Role`]. The token is held in the session value and handed to the API
//! client per request; no process-global header exists. There is no
//! in-app logout transition: the original product has none, and that gap
//! is preserved as an open product question rather than silently fixed.

use std::fmt;

use crate::api::{ArchiveClient, LoginOutcome};
use crate::error::Result;
use crate::models::Role;
use crate::validate::validate_login_form;

/// An authenticated session: opaque bearer token plus the backend role.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: Role,
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("token", &"[REDACTED]")
            .field("role", &self.role)
            .finish()
    }
}

/// Navigator-facing session state, matched exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Session),
}

impl SessionState {
    /// The role to dispatch screens on, when logged in.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn(session) => Some(session.role),
        }
    }
}

/// Where the "remember me" token lives across app restarts.
pub trait TokenPersistence: Clone + Send + Sync + 'static {
    fn load_token(&self) -> Result<Option<String>>;
    fn save_token(&self, token: &str) -> Result<()>;
    fn clear_token(&self) -> Result<()>;
}

/// Pairs the API client with a token store and drives the login and
/// silent re-entry flows.
#[derive(Clone)]
pub struct SessionManager<S: TokenPersistence> {
    client: ArchiveClient,
    store: S,
}

impl<S: TokenPersistence> SessionManager<S> {
    pub const fn new(client: ArchiveClient, store: S) -> Self {
        Self { client, store }
    }

    /// The API client screens should issue their requests through.
    #[must_use]
    pub const fn client(&self) -> &ArchiveClient {
        &self.client
    }

    /// Attempts silent re-entry from a persisted token.
    ///
    /// Yields `LoggedIn` only when the backend still honors the token.
    /// Any failure - missing token, storage error, rejected session check -
    /// lands in `LoggedOut` with nothing shown to the user beyond a log
    /// line. The stale token is deliberately left in storage, matching
    /// the original client.
    pub async fn restore(&self) -> SessionState {
        let token = match self.store.load_token() {
            Ok(Some(token)) => token,
            Ok(None) => return SessionState::LoggedOut,
            Err(error) => {
                tracing::warn!("Failed to read persisted token: {}", error);
                return SessionState::LoggedOut;
            }
        };

        match self.client.check_session(&token).await {
            Ok(role) => SessionState::LoggedIn(Session { token, role }),
            Err(error) => {
                tracing::warn!("Session check failed: {}", error);
                SessionState::LoggedOut
            }
        }
    }

    /// Exchanges credentials for a session, persisting the token only
    /// when the user opted into "remember me".
    pub async fn sign_in(
        &self,
        username: &str,
        password: &str,
        remember_me: bool,
    ) -> Result<Session> {
        validate_login_form(username, password)?;

        let LoginOutcome { token, role } = self
            .client
            .login(username, password, remember_me)
            .await?;

        if remember_me {
            self.store.save_token(&token)?;
        }

        Ok(Session { token, role })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    use super::*;
    use crate::error::Error;

    #[derive(Clone, Default)]
    struct MemoryTokenStore {
        token: Arc<Mutex<Option<String>>>,
        fail_reads: bool,
    }

    impl TokenPersistence for MemoryTokenStore {
        fn load_token(&self) -> Result<Option<String>> {
            if self.fail_reads {
                return Err(Error::SecureStorage("store unavailable".to_string()));
            }
            Ok(self.token.lock().unwrap().clone())
        }

        fn save_token(&self, token: &str) -> Result<()> {
            *self.token.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn clear_token(&self) -> Result<()> {
            *self.token.lock().unwrap() = None;
            Ok(())
        }
    }

    fn manager_with_store(store: MemoryTokenStore) -> SessionManager<MemoryTokenStore> {
        // Nothing listens here; tests below never reach the network or
        // treat transport failure as logged-out, which is the contract.
        let client = ArchiveClient::new("http://127.0.0.1:59991").unwrap();
        SessionManager::new(client, store)
    }

    /// Answers exactly one request with a canned response, then goes away.
    async fn spawn_one_shot_server(body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let Ok((mut stream, _)) = listener.accept().await else {
                return;
            };
            let mut request = [0u8; 2048];
            let _ = stream.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        });
        format!("http://{address}")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn restore_without_persisted_token_stays_logged_out() {
        let manager = manager_with_store(MemoryTokenStore::default());
        assert_eq!(manager.restore().await, SessionState::LoggedOut);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn restore_swallows_storage_errors() {
        let store = MemoryTokenStore {
            fail_reads: true,
            ..MemoryTokenStore::default()
        };
        let manager = manager_with_store(store);
        assert_eq!(manager.restore().await, SessionState::LoggedOut);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn restore_keeps_stale_token_when_backend_rejects_it() {
        let store = MemoryTokenStore::default();
        store.save_token("stale-token").unwrap();
        let manager = manager_with_store(store.clone());

        assert_eq!(manager.restore().await, SessionState::LoggedOut);
        // The token is left in place; only a successful login overwrites it.
        assert_eq!(store.load_token().unwrap().as_deref(), Some("stale-token"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sign_in_with_remember_me_persists_the_token() {
        let base_url = spawn_one_shot_server(r#"{"token":"fresh-token","role":"user"}"#).await;
        let store = MemoryTokenStore::default();
        let manager = SessionManager::new(ArchiveClient::new(base_url).unwrap(), store.clone());

        let session = manager.sign_in("ada", "pw", true).await.unwrap();
        assert_eq!(session.role, Role::User);
        assert_eq!(store.load_token().unwrap().as_deref(), Some("fresh-token"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sign_in_without_remember_me_leaves_no_token() {
        let base_url = spawn_one_shot_server(r#"{"token":"fresh-token","role":"admin"}"#).await;
        let store = MemoryTokenStore::default();
        let manager = SessionManager::new(ArchiveClient::new(base_url).unwrap(), store.clone());

        let session = manager.sign_in("ada", "pw", false).await.unwrap();
        assert_eq!(session.role, Role::Admin);
        // A relaunch would find nothing to restore.
        assert_eq!(store.load_token().unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn sign_in_validates_before_issuing_a_request() {
        let store = MemoryTokenStore::default();
        let manager = manager_with_store(store.clone());

        let error = manager.sign_in("", "secret", true).await.unwrap_err();
        assert!(error.is_validation());
        assert_eq!(store.load_token().unwrap(), None);
    }

    #[test]
    fn session_debug_redacts_the_token() {
        let session = Session {
            token: "very-secret".to_string(),
            role: Role::Admin,
        };
        let rendered = format!("{session:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("very-secret"));
    }

    #[test]
    fn session_state_exposes_role_only_when_logged_in() {
        assert_eq!(SessionState::LoggedOut.role(), None);
        let state = SessionState::LoggedIn(Session {
            token: "t".to_string(),
            role: Role::User,
        });
        assert_eq!(state.role(), Some(Role::User));
    }
}
