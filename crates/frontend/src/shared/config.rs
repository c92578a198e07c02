//! Настройки клиента.
//!
//! Значения по умолчанию зашиты в код; переопределение в формате TOML можно
//! положить в localStorage под ключом [`CONFIG_STORAGE_KEY`].

use crate::shared::list_controller::InvalidationStrategy;
use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_STORAGE_KEY: &str = "admin_list_config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub notifications: NotificationConfig,
    pub bulk: BulkConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Базовый URL API; если не задан, берётся из `window.location`
    pub base_url: Option<String>,
    /// Таймаут запросов в миллисекундах; без значения запросы не ограничены
    pub request_timeout_ms: Option<u32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub auto_close_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { auto_close_ms: 3000 }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BulkConfig {
    pub delete_invalidation: InvalidationStrategy,
}

impl Config {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Базовый URL для запросов к API
    pub fn api_base(&self) -> String {
        match &self.api.base_url {
            Some(url) if !url.trim().is_empty() => url.trim_end_matches('/').to_string(),
            _ => crate::shared::api_utils::api_base(),
        }
    }
}

/// Загружает конфигурацию: сначала localStorage, потом значения по умолчанию
pub fn load_config() -> Config {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match stored {
        Some(contents) => match Config::from_toml(&contents) {
            Ok(config) => {
                log::info!("Loaded config from localStorage `{}`", CONFIG_STORAGE_KEY);
                config
            }
            Err(e) => {
                log::warn!("{}; falling back to defaults", e);
                Config::default()
            }
        },
        None => {
            log::debug!("Using default configuration");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.notifications.auto_close_ms, 3000);
        assert_eq!(config.bulk.delete_invalidation, InvalidationStrategy::HardReload);
        assert_eq!(config.api.request_timeout_ms, None);
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml(
            r#"
            [api]
            base_url = "https://admin.example.com/"
            request_timeout_ms = 15000

            [bulk]
            delete_invalidation = "refetch"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_base(), "https://admin.example.com");
        assert_eq!(config.api.request_timeout_ms, Some(15000));
        assert_eq!(config.bulk.delete_invalidation, InvalidationStrategy::Refetch);
        assert_eq!(config.notifications.auto_close_ms, 3000);
    }

    #[test]
    fn test_invalid_strategy_is_an_error() {
        let result = Config::from_toml("[bulk]\ndelete_invalidation = \"nuke\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
