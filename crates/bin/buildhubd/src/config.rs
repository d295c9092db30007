//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `buildhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use buildhub_domain::building::{Building, DEFAULT_FLOOR_COUNT, DEFAULT_FLOOR_PREFIX};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Start-up shape of the building.
    pub building: BuildingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Building created at start-up.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BuildingConfig {
    /// Display name, empty by default.
    pub name: String,
    /// Postal address, unset by default.
    pub address: Option<String>,
    /// Floor ids are `{floor_prefix}0 … {floor_prefix}{floor_count - 1}`.
    pub floor_prefix: String,
    /// Number of floors.
    pub floor_count: usize,
}

impl BuildingConfig {
    /// Build the initial, device-less building.
    #[must_use]
    pub fn bootstrap(&self) -> Building {
        let mut builder = Building::builder()
            .name(self.name.as_str())
            .floors(&self.floor_prefix, self.floor_count);
        if let Some(address) = &self.address {
            builder = builder.address(address.as_str());
        }
        builder.build()
    }
}

impl Config {
    /// Load configuration from `buildhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("buildhub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("BUILDHUB_HOST") {
            self.server.host = val;
        }
        if let Some(port) = var("BUILDHUB_PORT").and_then(|val| val.parse().ok()) {
            self.server.port = port;
        }
        if let Some(val) = var("BUILDHUB_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var("BUILDHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("BUILDHUB_BUILDING_NAME") {
            self.building.name = val;
        }
        if let Some(val) = var("BUILDHUB_BUILDING_ADDRESS") {
            self.building.address = Some(val);
        }
        if let Some(val) = var("BUILDHUB_FLOOR_PREFIX") {
            self.building.floor_prefix = val;
        }
        if let Some(count) = var("BUILDHUB_FLOOR_COUNT").and_then(|val| val.parse().ok()) {
            self.building.floor_count = count;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.building.floor_prefix.is_empty() {
            return Err(ConfigError::Validation(
                "floor prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "buildhubd=info,buildhub=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for BuildingConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: None,
            floor_prefix: DEFAULT_FLOOR_PREFIX.to_string(),
            floor_count: DEFAULT_FLOOR_COUNT,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.building.floor_prefix, "piano");
        assert_eq!(config.building.floor_count, 15);
        assert!(config.building.address.is_none());
    }

    #[test]
    fn should_bootstrap_default_building() {
        let building = Config::default().building.bootstrap();
        assert_eq!(building, Building::bootstrap());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [logging]
            filter = 'debug'

            [building]
            name = 'Office Building A'
            address = '123 Main Street'
            floor_prefix = 'level'
            floor_count = 3
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.logging.filter, "debug");

        let building = config.building.bootstrap();
        assert_eq!(building.name, "Office Building A");
        assert_eq!(building.address.as_deref(), Some("123 Main Street"));
        let ids: Vec<&str> = building.floors().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, ["level0", "level1", "level2"]);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn should_apply_overrides_over_file_values() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("BUILDHUB_BIND", "127.0.0.1:9000"),
            ("BUILDHUB_FLOOR_COUNT", "4"),
            ("BUILDHUB_BUILDING_ADDRESS", "Via Roma 1"),
            ("RUST_LOG", "trace"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
        assert_eq!(config.building.floor_count, 4);
        assert_eq!(config.building.address.as_deref(), Some("Via Roma 1"));
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_ignore_unparsable_numeric_overrides() {
        let mut config = Config::default();
        config.apply_overrides(env(&[
            ("BUILDHUB_PORT", "http"),
            ("BUILDHUB_FLOOR_COUNT", "many"),
        ]));
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.building.floor_count, 15);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_empty_floor_prefix() {
        let mut config = Config::default();
        config.building.floor_prefix = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
