//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_config_roundtrip() {
    // Serialize default config to TOML, then parse it back
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: FileConfig = toml::from_str(&toml_str).expect("Failed to parse generated TOML");
    let reloaded = Config::from_sources(parsed, no_env);

    assert_eq!(reloaded, config);
}

#[test]
fn test_empty_file_yields_defaults() {
    let parsed: FileConfig = toml::from_str("").unwrap();
    let config = Config::from_sources(parsed, no_env);

    assert_eq!(config.api_url, "https://dummyjson.com");
    assert_eq!(config.debounce(), Duration::from_millis(300));
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
    assert_eq!(config.theme, "dark");
    assert!(!config.demo_mode);
    assert_eq!(config.logging, LoggingConfig::default());
}

#[test]
fn test_env_overrides_file() {
    let parsed: FileConfig = toml::from_str(
        r#"
api_url = "http://file.example"
debounce_ms = 150
theme = "light"
"#,
    )
    .unwrap();

    let config = Config::from_sources(
        parsed,
        env_of(&[
            ("PRODUCT_SEARCH_API_URL", "http://env.example"),
            ("PRODUCT_SEARCH_DEMO", "1"),
        ]),
    );

    assert_eq!(config.api_url, "http://env.example");
    assert_eq!(config.debounce_ms, 150);
    assert_eq!(config.theme, "light");
    assert!(config.demo_mode);
}

#[test]
fn test_unparseable_env_number_is_ignored() {
    let parsed: FileConfig = toml::from_str("debounce_ms = 500").unwrap();
    let config = Config::from_sources(
        parsed,
        env_of(&[
            ("PRODUCT_SEARCH_DEBOUNCE_MS", "soon"),
            ("PRODUCT_SEARCH_TIMEOUT_SECS", "-3"),
        ]),
    );

    assert_eq!(config.debounce_ms, 500);
    assert_eq!(config.request_timeout_secs, 30);
}

#[test]
fn test_demo_flag_values() {
    for (value, expected) in [("1", true), ("true", true), ("TRUE", true), ("0", false), ("yes", false)] {
        let config = Config::from_sources(
            FileConfig::default(),
            env_of(&[("PRODUCT_SEARCH_DEMO", value)]),
        );
        assert_eq!(config.demo_mode, expected, "PRODUCT_SEARCH_DEMO={}", value);
    }
}

#[test]
fn test_logging_section() {
    let parsed: FileConfig = toml::from_str(
        r#"
[logging]
level = "debug"
file_enabled = true
file_rotation = "hourly"
"#,
    )
    .unwrap();
    let config = Config::from_sources(parsed, no_env);

    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(config.logging.file_prefix, "product-search");
}

#[test]
fn test_partial_logging_section_keeps_defaults() {
    let parsed: FileConfig = toml::from_str("[logging]\nfile_prefix = \"search\"").unwrap();
    let logging = Config::from_sources(parsed, no_env).logging;

    assert_eq!(logging.file_prefix, "search");
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_rotation, LogRotation::Daily);
    assert_eq!(logging.filter_directive(), "product_search=info,warn");
}

#[test]
fn test_unknown_rotation_is_rejected() {
    let err = toml::from_str::<FileConfig>("[logging]\nfile_rotation = \"weekly\"").unwrap_err();
    assert!(err.to_string().contains("weekly"));

    // Variant names are lowercase only
    assert!(toml::from_str::<FileConfig>("[logging]\nfile_rotation = \"Hourly\"").is_err());
}

#[test]
fn test_unknown_logging_key_is_rejected() {
    assert!(toml::from_str::<FileConfig>("[logging]\nfile_rotate = \"never\"").is_err());
}

#[test]
fn test_unknown_key_is_rejected() {
    assert!(toml::from_str::<FileConfig>("api_uri = \"typo\"").is_err());
}

#[test]
fn test_missing_file_yields_defaults() {
    let path = std::env::temp_dir().join("product-search-test-does-not-exist.toml");
    let file = Config::read_file_config(&path).unwrap();
    assert_eq!(Config::from_sources(file, no_env), Config::default());
}

#[test]
fn test_malformed_file_is_an_error() {
    let path = std::env::temp_dir().join(format!(
        "product-search-malformed-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "debounce_ms = \"fast\"").unwrap();

    let err = Config::read_file_config(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);

    assert!(err.to_string().contains("Failed to parse configuration file"));
}
