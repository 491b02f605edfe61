//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (used for the first-run template and --reset)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# product-search configuration
#
# Environment variables override these values:
#   PRODUCT_SEARCH_API_URL, PRODUCT_SEARCH_DEBOUNCE_MS, PRODUCT_SEARCH_TIMEOUT_SECS,
#   PRODUCT_SEARCH_THEME, PRODUCT_SEARCH_DEMO=1, RUST_LOG

# Catalog API base URL (requests go to {{api_url}}/products and {{api_url}}/products/search)
api_url = "{api_url}"

# Quiet period after the last keystroke before searching (milliseconds)
debounce_ms = {debounce_ms}

# Per-request timeout (seconds)
request_timeout_secs = {timeout}

# Theme: dark, light
theme = "{theme}"

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# JSON file logging (in addition to the TUI buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            api_url = self.api_url,
            debounce_ms = self.debounce_ms,
            timeout = self.request_timeout_secs,
            theme = self.theme,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
