//! Конфигурация клиента.
//!
//! Встроенный TOML по умолчанию; администратор может переопределить его,
//! положив свой TOML в `localStorage["master_data_config"]`.

use contracts::shared::list::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Полный адрес API; если не задан, строится от адреса страницы
    pub base_url: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_debounce")]
    pub search_debounce_ms: u32,
}

fn default_port() -> u16 {
    3000
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_debounce() -> u32 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            port: default_port(),
            prefix: default_prefix(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            search_debounce_ms: default_debounce(),
        }
    }
}

impl ListConfig {
    /// Размер страницы из конфигурации, если он есть среди допустимых
    pub fn page_size(&self) -> usize {
        if PAGE_SIZE_OPTIONS.contains(&self.default_page_size) {
            self.default_page_size
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/api"

[list]
default_page_size = 10
search_debounce_ms = 300
"#;

const STORAGE_KEY: &str = "master_data_config";

pub fn parse_config(text: &str) -> anyhow::Result<AppConfig> {
    Ok(toml::from_str(text)?)
}

/// Load configuration
///
/// Search order:
/// 1. `localStorage["master_data_config"]`
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<AppConfig> {
    if let Some(text) = stored_override() {
        match parse_config(&text) {
            Ok(config) => {
                log::info!("Using config from localStorage[{}]", STORAGE_KEY);
                return Ok(config);
            }
            Err(e) => log::warn!("Ignoring invalid config in localStorage: {}", e),
        }
    }

    log::debug!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn stored_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(STORAGE_KEY)
        .ok()
        .flatten()
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        log::error!("Failed to load config: {}", e);
        AppConfig::default()
    })
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, None);
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.list.search_debounce_ms, 300);
    }

    #[test]
    fn test_partial_override() {
        let config = parse_config(
            r#"
            [api]
            base_url = "https://admin.example.org/api"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.api.base_url.as_deref(),
            Some("https://admin.example.org/api")
        );
        assert_eq!(config.api.prefix, "/api");
        assert_eq!(config.list.page_size(), 10);
    }

    #[test]
    fn test_unsupported_page_size_falls_back() {
        let config = parse_config("[list]\ndefault_page_size = 7\n").unwrap();
        assert_eq!(config.list.page_size(), DEFAULT_PAGE_SIZE);

        let config = parse_config("[list]\ndefault_page_size = 50\n").unwrap();
        assert_eq!(config.list.page_size(), 50);

        assert!(parse_config("[list]\ndefault_page_size = \"many\"\n").is_err());
    }
}
