//! # Console configuration — `geoadmin.toml`
//!
//! Defines the TOML configuration consumed by the web binary (filename:
//! [`ConsoleConfig::filename`] = `"geoadmin.toml"`). The file is embedded at
//! build time, so these values are constants of a given build.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5114"   # REST service root, no trailing slash
//!
//! [table]
//! default_page_size = 10
//! page_sizes = [5, 10, 25]
//!
//! [session]
//! storage_key = "isAuthenticated"
//!
//! [toast]
//! auto_close_ms = 5000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ConsoleConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base address of the REST service. |
//! | [`TableConfig`] | Enumerated page sizes and the initial page size of every table. |
//! | [`SessionConfig`] | Storage key of the persisted authentication flag. |
//! | [`ToastConfig`] | Auto-dismiss delay for notifications. |
//!
//! All structs derive or implement `Default` so that a missing or empty config
//! file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::session::AUTH_FLAG_KEY;

/// Top-level configuration stored in `geoadmin.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub toast: ToastConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5114".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
    #[serde(default = "default_page_sizes")]
    pub page_sizes: Vec<usize>,
}

fn default_page_size() -> usize {
    10
}

fn default_page_sizes() -> Vec<usize> {
    vec![5, 10, 25]
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_sizes: default_page_sizes(),
        }
    }
}

impl TableConfig {
    /// Make the page-size settings usable: zero sizes are dropped, an empty
    /// list falls back to the defaults, and the default size is always one of
    /// the offered sizes.
    pub fn normalized(mut self) -> Self {
        self.page_sizes.retain(|size| *size > 0);
        if self.page_sizes.is_empty() {
            self.page_sizes = default_page_sizes();
        }
        if self.default_page_size == 0 {
            self.default_page_size = default_page_size();
        }
        if !self.page_sizes.contains(&self.default_page_size) {
            self.page_sizes.push(self.default_page_size);
        }
        self.page_sizes.sort_unstable();
        self.page_sizes.dedup();
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    AUTH_FLAG_KEY.to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToastConfig {
    /// Milliseconds before a notification disappears. 0 keeps it until clicked.
    #[serde(default = "default_auto_close_ms")]
    pub auto_close_ms: u32,
}

fn default_auto_close_ms() -> u32 {
    5000
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_close_ms: default_auto_close_ms(),
        }
    }
}

impl ConsoleConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "geoadmin.toml"
    }

    /// Parse from TOML string. Table settings are normalized.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(s)?;
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
        config.table = config.table.normalized();
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to point at another REST service.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ConsoleConfig::from_toml("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5114");
        assert_eq!(config.table.default_page_size, 10);
        assert_eq!(config.table.page_sizes, vec![5, 10, 25]);
        assert_eq!(config.session.storage_key, "isAuthenticated");
        assert_eq!(config.toast.auto_close_ms, 5000);
    }

    #[test]
    fn test_partial_sections() {
        let config = ConsoleConfig::from_toml(
            r#"
            [api]
            base_url = "https://geo.example.com/"

            [table]
            default_page_size = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://geo.example.com");
        assert_eq!(config.table.default_page_size, 50);
        assert_eq!(config.table.page_sizes, vec![5, 10, 25, 50]);
        assert_eq!(config.session, SessionConfig::default());
    }

    #[test]
    fn test_empty_page_sizes_fall_back() {
        let config = ConsoleConfig::from_toml(
            r#"
            [table]
            page_sizes = []
            "#,
        )
        .unwrap();
        assert_eq!(config.table.page_sizes, vec![5, 10, 25]);
    }

    #[test]
    fn test_malformed_toml_is_error() {
        assert!(ConsoleConfig::from_toml("[api\nbase_url = 3").is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ConsoleConfig::default().with_base_url("http://10.0.0.2:8080/");
        let text = config.to_toml().unwrap();
        assert_eq!(ConsoleConfig::from_toml(&text).unwrap(), config);
    }
}
