//! `[logging]` section: filter level and the optional JSON log file

use serde::Deserialize;
use std::path::PathBuf;
use tracing_appender::rolling::Rotation;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, never rolled
    Never,
}

impl LogRotation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Rotation::HOURLY,
            LogRotation::Daily => Rotation::DAILY,
            LogRotation::Never => Rotation::NEVER,
        }
    }
}

/// Logging settings. Read straight from the config file; absent keys keep
/// their defaults, unknown keys and bad rotation names are parse errors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Filter level for this crate (`RUST_LOG` replaces the whole filter)
    pub level: String,
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name prefix; rolled files get a date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "product-search".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Default `EnvFilter` directive: this crate at `level`, dependencies at warn
    pub fn filter_directive(&self) -> String {
        format!("product_search={},warn", self.level)
    }
}
