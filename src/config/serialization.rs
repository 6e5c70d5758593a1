//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        format!(
            r#"# cluster-alerts configuration
# Precedence: environment variables > this file > built-in defaults

# Portal API base URL (env: CLUSTER_ALERTS_API_URL)
api_url = {api_url:?}

# Per-request timeout in seconds (env: CLUSTER_ALERTS_TIMEOUT)
request_timeout_secs = {timeout}

# Detail panel at startup: "overview", "clusteralerts"
initial_panel = {panel:?}

# Color theme: "dark" or "light"
theme = {theme:?}

# Serve canned clusters and alerts (env: CLUSTER_ALERTS_DEMO=1)
demo_mode = {demo}

[logging]
# trace, debug, info, warn, error (RUST_LOG overrides)
level = {level:?}
file_enabled = {file_enabled}
file_dir = {file_dir:?}
# hourly, daily, never
file_rotation = {rotation:?}
"#,
            api_url = self.api_url,
            timeout = self.request_timeout_secs,
            panel = self.initial_panel,
            theme = self.theme,
            demo = self.demo_mode,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display().to_string(),
            rotation = self.logging.file_rotation.as_str(),
        )
    }
}
