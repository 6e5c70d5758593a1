//! Configuration for the cluster alerts dashboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/cluster-alerts/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod serialization;

#[cfg(test)]
mod tests;

pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_API_URL: &str = "https://localhost:8444";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_PANEL: &str = "overview";
const DEFAULT_THEME: &str = "dark";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the cluster portal API
    pub api_url: String,

    /// Per-request timeout for portal calls
    pub request_timeout_secs: u64,

    /// Detail panel shown at startup: "overview", "clusteralerts"
    pub initial_panel: String,

    /// Color theme: "dark" or "light"
    pub theme: String,

    /// Serve canned clusters and alerts instead of calling the portal
    pub demo_mode: bool,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            initial_panel: DEFAULT_PANEL.to_string(),
            theme: DEFAULT_THEME.to_string(),
            demo_mode: false,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub api_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub initial_panel: Option<String>,
    pub theme: Option<String>,
    pub demo_mode: Option<bool>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("cluster-alerts").join("config.toml"))
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

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file yields defaults. An unparsable file is reported and
    /// ignored so the dashboard still starts.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        let Ok(contents) = std::fs::read_to_string(&path) else {
            return FileConfig::default();
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring invalid config {}: {}", path.display(), e);
                FileConfig::default()
            }
        }
    }

    /// Load configuration: env > file > defaults
    pub fn from_env() -> Self {
        Self::from_sources(Self::load_file_config(), |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn from_sources(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = env("CLUSTER_ALERTS_API_URL")
            .or(file.api_url)
            .unwrap_or(defaults.api_url);

        let request_timeout_secs = env("CLUSTER_ALERTS_TIMEOUT")
            .and_then(|v| v.parse().ok())
            .or(file.request_timeout_secs)
            .unwrap_or(defaults.request_timeout_secs);

        let demo_mode = env("CLUSTER_ALERTS_DEMO")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(file.demo_mode)
            .unwrap_or(defaults.demo_mode);

        Self {
            api_url,
            request_timeout_secs,
            initial_panel: file.initial_panel.unwrap_or(defaults.initial_panel),
            theme: file.theme.unwrap_or(defaults.theme),
            demo_mode,
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
