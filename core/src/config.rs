//! Client configuration.
//!
//! # Design
//! The upstream base URL and bearer credential are injected into
//! `CatalogClient` at construction instead of living in process-wide
//! constants, so tests point the client at a mock server and a rotated token
//! needs no rebuild. Every field has a default, so an empty TOML file is a
//! valid configuration.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::search::FilterMode;

/// Environment variable that overrides `api.bearer_token`.
pub const TOKEN_ENV: &str = "TMDB_BEARER_TOKEN";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub bearer_token: String,
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bearer_token: String::new(),
            language: default_language(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}
fn default_language() -> String {
    "es-ES".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default)]
    pub filter_mode: FilterMode,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            filter_mode: FilterMode::default(),
        }
    }
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

fn default_debounce_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: Option<String>,
}

impl CatalogConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| CatalogError::Config(e.to_string()))
    }

    /// Read a TOML file and apply the `TMDB_BEARER_TOKEN` override.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Config(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&raw)?;
        config.override_token(std::env::var(TOKEN_ENV).ok());
        Ok(config)
    }

    /// Defaults plus the `TMDB_BEARER_TOKEN` override, for running without a file.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.override_token(std::env::var(TOKEN_ENV).ok());
        config
    }

    /// Replace the bearer token when `token` is present and non-blank.
    pub fn override_token(&mut self, token: Option<String>) {
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.api.bearer_token = token;
        }
    }
}
