//! Configuration for the product search client
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/product-search/config.toml)
//! 3. Built-in defaults (lowest priority)
//!
//! CLI flags (`--api-url`, `--demo`) are applied on top by main.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod logging;
mod serialization;

#[cfg(test)]
mod tests;

pub use logging::{LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "https://dummyjson.com";
const DEFAULT_DEBOUNCE_MS: u64 = 300;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Catalog API base URL (endpoints are `{api_url}/products[/search]`)
    pub api_url: String,

    /// Quiet period before a typed query is sent
    pub debounce_ms: u64,

    /// Per-request timeout for catalog calls
    pub request_timeout_secs: u64,

    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Demo mode: serve the built-in catalog locally and search that
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme: DEFAULT_THEME.to_string(),
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure; every key is optional
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub debounce_ms: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub theme: Option<String>,

    /// Optional [logging] section; missing keys keep their defaults
    pub logging: Option<LoggingConfig>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/product-search/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("product-search").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        if let Err(e) = std::fs::write(&path, Self::default().to_toml()) {
            tracing::debug!("Could not write config template {}: {}", path.display(), e);
        }
    }

    /// Parse a config file. A missing file yields defaults; a file that exists
    /// but can't be read or parsed is an error.
    pub(crate) fn read_file_config(path: &Path) -> Result<FileConfig> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FileConfig::default()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Cannot read configuration file {}", path.display()))
            }
        };

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))
    }

    /// Load configuration: env vars > file > defaults
    pub fn load() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::read_file_config(&path)?,
            None => FileConfig::default(),
        };
        Ok(Self::from_sources(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        // API URL: env > file > default
        let api_url = env("PRODUCT_SEARCH_API_URL")
            .or(file.api_url)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        // Debounce: env > file > default (unparseable env values are ignored)
        let debounce_ms = env("PRODUCT_SEARCH_DEBOUNCE_MS")
            .and_then(|v| v.parse().ok())
            .or(file.debounce_ms)
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        let request_timeout_secs = env("PRODUCT_SEARCH_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let theme = env("PRODUCT_SEARCH_THEME")
            .or(file.theme)
            .unwrap_or_else(|| DEFAULT_THEME.to_string());

        // Demo mode: env only (runtime flag)
        let demo_mode = env("PRODUCT_SEARCH_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let logging = file.logging.unwrap_or_default();

        Self {
            api_url,
            debounce_ms,
            request_timeout_secs,
            theme,
            demo_mode,
            logging,
        }
    }
}
