//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Badge policy configuration for ranking reports.
    #[serde(default)]
    pub badges: BadgeConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Badge policy configuration.
///
/// The policy itself lives in the core crate; this only carries the knobs.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BadgeConfig {
    /// Number of top ranks that receive a distinct badge.
    #[serde(default = "default_top_count")]
    pub top_count: usize,
    /// Entity count from which the last two ranks (instead of one) are warned.
    #[serde(default = "default_two_bottom_from")]
    pub two_bottom_from: usize,
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
            two_bottom_from: default_two_bottom_from(),
        }
    }
}

fn default_top_count() -> usize {
    3
}

fn default_two_bottom_from() -> usize {
    6
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("KINERJA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
