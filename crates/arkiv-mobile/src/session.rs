//! Session wiring: keyring-backed token persistence plus the shared
//! session manager.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use arkiv_core::api::ArchiveClient;
use arkiv_core::session::{SessionManager, TokenPersistence};
use arkiv_core::{Error, Result};

use crate::config::{resolve_api_config, ResolvedApiConfig};
use crate::secret_store;

/// Keyring-backed persistence for the "remember me" token.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecretTokenStore;

impl TokenPersistence for SecretTokenStore {
    fn load_token(&self) -> Result<Option<String>> {
        secret_store::read_secret(secret_store::SECRET_AUTH_TOKEN).map_err(Error::SecureStorage)
    }

    fn save_token(&self, token: &str) -> Result<()> {
        secret_store::write_secret(secret_store::SECRET_AUTH_TOKEN, token)
            .map_err(Error::SecureStorage)
    }

    fn clear_token(&self) -> Result<()> {
        secret_store::delete_secret(secret_store::SECRET_AUTH_TOKEN).map_err(Error::SecureStorage)
    }
}

/// Builds the session manager from the resolved runtime configuration.
pub fn session_manager_from_config() -> Result<SessionManager<SecretTokenStore>> {
    session_manager_from(resolve_api_config())
}

fn session_manager_from(resolved: ResolvedApiConfig) -> Result<SessionManager<SecretTokenStore>> {
    tracing::info!(
        "Using API base URL {} ({:?})",
        resolved.base_url,
        resolved.source
    );
    let client = ArchiveClient::new(resolved.base_url)?;
    Ok(SessionManager::new(client, SecretTokenStore))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve_api_config_from, MobileRuntimeConfig};

    #[test]
    fn secret_token_store_roundtrip() {
        let store = SecretTokenStore;
        store.clear_token().unwrap();
        assert_eq!(store.load_token().unwrap(), None);

        store.save_token("remembered-token").unwrap();
        assert_eq!(
            store.load_token().unwrap().as_deref(),
            Some("remembered-token")
        );

        store.clear_token().unwrap();
        assert_eq!(store.load_token().unwrap(), None);
    }

    #[test]
    fn session_manager_builds_from_default_config() {
        // Resolve with no settings and no environment, so a host with
        // ARKIV_API_BASE_URL exported cannot change the outcome.
        let resolved = resolve_api_config_from(&MobileRuntimeConfig::default(), None);
        let manager = session_manager_from(resolved).unwrap();
        assert!(manager.client().base_url().starts_with("http://"));
    }
}
