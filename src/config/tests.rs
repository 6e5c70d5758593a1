//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Serialized defaults must parse back into the same config.
#[test]
fn test_config_roundtrip_default() {
    let toml_str = Config::default().to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let reloaded = Config::from_sources(parsed.unwrap(), env_from(&[]));
    assert_eq!(reloaded.api_url, Config::default().api_url);
    assert_eq!(reloaded.logging, LoggingConfig::default());
}

#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.api_url = "https://portal.example:8444".to_string();
    config.request_timeout_secs = 5;
    config.initial_panel = "ClusterAlerts".to_string();
    config.theme = "light".to_string();
    config.demo_mode = true;
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    let reloaded = Config::from_sources(file, env_from(&[]));

    assert_eq!(reloaded.api_url, config.api_url);
    assert_eq!(reloaded.request_timeout_secs, 5);
    assert_eq!(reloaded.initial_panel, "ClusterAlerts");
    assert_eq!(reloaded.theme, "light");
    assert!(reloaded.demo_mode);
    assert_eq!(reloaded.logging, config.logging);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "https://from-file"
request_timeout_secs = 10
demo_mode = false
"#,
    )
    .unwrap();

    let config = Config::from_sources(
        file,
        env_from(&[
            ("CLUSTER_ALERTS_API_URL", "https://from-env"),
            ("CLUSTER_ALERTS_TIMEOUT", "3"),
            ("CLUSTER_ALERTS_DEMO", "TRUE"),
        ]),
    );

    assert_eq!(config.api_url, "https://from-env");
    assert_eq!(config.request_timeout_secs, 3);
    assert!(config.demo_mode);
}

#[test]
fn test_invalid_env_timeout_falls_back_to_file() {
    let file: FileConfig = toml::from_str("request_timeout_secs = 12").unwrap();
    let config = Config::from_sources(file, env_from(&[("CLUSTER_ALERTS_TIMEOUT", "soon")]));
    assert_eq!(config.request_timeout_secs, 12);
}

#[test]
fn test_partial_file_uses_defaults() {
    let file: FileConfig = toml::from_str("[logging]\nlevel = \"debug\"").unwrap();
    let config = Config::from_sources(file, env_from(&[]));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
    assert_eq!(config.initial_panel, "overview");
    assert!(!config.demo_mode);
}

#[test]
fn test_zero_timeout_is_clamped() {
    let config = Config {
        request_timeout_secs: 0,
        ..Config::default()
    };
    assert_eq!(config.request_timeout(), Duration::from_secs(1));
}

#[test]
fn test_log_rotation_parse() {
    assert_eq!(LogRotation::parse("HOURLY"), LogRotation::Hourly);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
}
