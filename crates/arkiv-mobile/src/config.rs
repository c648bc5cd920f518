//! Runtime configuration handling for mobile.
//!
//! The original client hard-coded two different backend hosts across its
//! screens; every request here instead goes through one resolved base URL.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::path::{Path, PathBuf};

use arkiv_core::util::normalize_text_option;
use arkiv_core::Result;
use serde::{Deserialize, Serialize};

const RUNTIME_CONFIG_FILE: &str = "mobile-config.json";
const API_BASE_URL_ENV: &str = "ARKIV_API_BASE_URL";

/// Development default, used when neither settings nor environment
/// provide a base URL.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the active base URL came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiConfigSource {
    RuntimeSettings,
    Environment,
    BuiltInDefault,
}

/// The single resolved backend endpoint for this launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApiConfig {
    pub base_url: String,
    pub source: ApiConfigSource,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MobileRuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

impl MobileRuntimeConfig {
    pub fn from_raw(api_base_url: Option<String>) -> Self {
        Self {
            api_base_url: normalize_text_option(api_base_url),
        }
    }
}

pub fn default_runtime_config_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arkiv")
        .join(RUNTIME_CONFIG_FILE)
}

pub fn load_runtime_config() -> MobileRuntimeConfig {
    load_runtime_config_from_path(&default_runtime_config_path())
}

pub fn load_runtime_config_from_path(path: &Path) -> MobileRuntimeConfig {
    if !path.exists() {
        return MobileRuntimeConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<MobileRuntimeConfig>(&content) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(
                    "Failed to parse mobile runtime config at {}: {}",
                    path.display(),
                    error
                );
                MobileRuntimeConfig::default()
            }
        },
        Err(error) => {
            tracing::warn!(
                "Failed to read mobile runtime config at {}: {}",
                path.display(),
                error
            );
            MobileRuntimeConfig::default()
        }
    }
}

pub fn save_runtime_config(config: &MobileRuntimeConfig) -> Result<()> {
    save_runtime_config_to_path(config, &default_runtime_config_path())
}

pub fn save_runtime_config_to_path(config: &MobileRuntimeConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let normalized = MobileRuntimeConfig::from_raw(config.api_base_url.clone());
    let content = serde_json::to_string_pretty(&normalized)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Resolution order: runtime settings file, then environment, then the
/// built-in default.
pub fn resolve_api_config() -> ResolvedApiConfig {
    resolve_api_config_from(&load_runtime_config(), std::env::var(API_BASE_URL_ENV).ok())
}

pub fn resolve_api_config_from(
    runtime_config: &MobileRuntimeConfig,
    env_value: Option<String>,
) -> ResolvedApiConfig {
    if let Some(base_url) = normalize_text_option(runtime_config.api_base_url.clone()) {
        return ResolvedApiConfig {
            base_url,
            source: ApiConfigSource::RuntimeSettings,
        };
    }

    if let Some(base_url) = normalize_text_option(env_value) {
        return ResolvedApiConfig {
            base_url,
            source: ApiConfigSource::Environment,
        };
    }

    ResolvedApiConfig {
        base_url: DEFAULT_API_BASE_URL.to_string(),
        source: ApiConfigSource::BuiltInDefault,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn runtime_settings_take_priority_over_environment() {
        let runtime = MobileRuntimeConfig::from_raw(Some(" http://10.0.2.2:5000 ".to_string()));
        let resolved =
            resolve_api_config_from(&runtime, Some("http://env.example.com".to_string()));

        assert_eq!(resolved.base_url, "http://10.0.2.2:5000");
        assert_eq!(resolved.source, ApiConfigSource::RuntimeSettings);
    }

    #[test]
    fn environment_beats_built_in_default() {
        let resolved = resolve_api_config_from(
            &MobileRuntimeConfig::default(),
            Some(" http://env.example.com ".to_string()),
        );

        assert_eq!(resolved.base_url, "http://env.example.com");
        assert_eq!(resolved.source, ApiConfigSource::Environment);
    }

    #[test]
    fn falls_back_to_built_in_default() {
        let resolved = resolve_api_config_from(&MobileRuntimeConfig::default(), None);

        assert_eq!(resolved.base_url, DEFAULT_API_BASE_URL);
        assert_eq!(resolved.source, ApiConfigSource::BuiltInDefault);
    }

    #[test]
    fn blank_settings_value_is_ignored() {
        let runtime = MobileRuntimeConfig::from_raw(Some("   ".to_string()));
        assert_eq!(runtime.api_base_url, None);

        let resolved = resolve_api_config_from(&runtime, None);
        assert_eq!(resolved.source, ApiConfigSource::BuiltInDefault);
    }

    #[test]
    fn save_and_load_runtime_config_roundtrip() {
        let test_dir = std::env::temp_dir().join(format!(
            "arkiv-mobile-config-test-{}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let config_path = test_dir.join("mobile-config.json");

        let config = MobileRuntimeConfig::from_raw(Some(" http://192.168.1.20:5000 ".to_string()));
        save_runtime_config_to_path(&config, &config_path).unwrap();

        let loaded = load_runtime_config_from_path(&config_path);
        assert_eq!(
            loaded.api_base_url.as_deref(),
            Some("http://192.168.1.20:5000")
        );

        let _ = std::fs::remove_file(config_path);
        let _ = std::fs::remove_dir_all(test_dir);
    }
}
