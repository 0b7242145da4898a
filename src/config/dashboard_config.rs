//! Dashboard Configuration - server, dataset and initial control values
//!
//! Each section implements `Default` with the values the dashboard has always
//! used, so a missing file or a partial file behaves like the built-in setup.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults;
use crate::dataset::ControlOptions;
use crate::types::ReadingFilter;

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration.
///
/// Load with `DashboardConfig::load()` which searches:
/// 1. `$WEARWATCH_CONFIG` env var
/// 2. `./wearwatch.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Dataset location
    #[serde(default)]
    pub data: DataConfig,

    /// Initial control selection
    #[serde(default)]
    pub controls: ControlsConfig,
}

impl DashboardConfig {
    /// Load configuration using the standard search order:
    /// 1. `$WEARWATCH_CONFIG` environment variable
    /// 2. `./wearwatch.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// A file that fails to load is logged and skipped.
    pub fn load() -> Self {
        let env_path = std::env::var(defaults::ENV_CONFIG).ok().map(PathBuf::from);
        Self::load_from_search(env_path.as_deref(), Path::new(defaults::LOCAL_CONFIG_FILE))
    }

    /// The search behind [`DashboardConfig::load`], with the env var value
    /// and the local file passed in.
    pub fn load_from_search(env_path: Option<&Path>, local: &Path) -> Self {
        // 1. Env var
        if let Some(p) = env_path {
            if p.exists() {
                match Self::load_from_file(p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded dashboard config from {}", defaults::ENV_CONFIG);
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {}, falling back", defaults::ENV_CONFIG);
                    }
                }
            } else {
                warn!(path = %p.display(), "{} points to non-existent file, falling back", defaults::ENV_CONFIG);
            }
        }

        // 2. Local file
        if local.exists() {
            match Self::load_from_file(local) {
                Ok(config) => {
                    info!(path = %local.display(), "Loaded dashboard config");
                    return config;
                }
                Err(e) => {
                    warn!(path = %local.display(), error = %e, "Failed to load config, using defaults");
                }
            }
        }

        // 3. Defaults
        info!("No config file found, using built-in defaults");
        Self::default()
    }

    /// Apply command-line overrides on top of a loaded config and validate
    /// the result. An override always beats the file value.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        if let Some(addr) = &overrides.addr {
            self.server.addr.clone_from(addr);
        }
        if let Some(data) = &overrides.data {
            self.data.path.clone_from(data);
        }
        self.validate()?;
        Ok(self)
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;

        // Two-pass: check for unknown keys first (warnings only)
        for w in super::validation::validate_unknown_keys(&contents) {
            warn!("{}", w);
        }

        let config: Self = toml::from_str(&contents)
            .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Check values that would otherwise only fail once the server starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if !is_host_port(&self.server.addr) {
            errors.push(format!(
                "server.addr = '{}' is not a HOST:PORT address",
                self.server.addr
            ));
        }
        if self.data.path.as_os_str().is_empty() {
            errors.push("data.path must not be empty".to_string());
        }
        if self.controls.default_product_type.trim().is_empty() {
            errors.push("controls.default_product_type must not be empty".to_string());
        }
        if self.controls.default_failure_type.trim().is_empty() {
            errors.push("controls.default_failure_type must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// `HOST:PORT` where the port is a u16. Hostnames are resolved at bind time.
fn is_host_port(addr: &str) -> bool {
    if addr.parse::<SocketAddr>().is_ok() {
        return true;
    }
    addr.rsplit_once(':').is_some_and(|(host, port)| {
        !host.trim().is_empty() && !host.contains(char::is_whitespace) && port.parse::<u16>().is_ok()
    })
}

/// Values given on the command line (or their env fallbacks).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub addr: Option<String>,
    pub data: Option<PathBuf>,
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address, e.g. "127.0.0.1:8050"
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: defaults::SERVER_ADDR.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// CSV dataset loaded at startup
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(defaults::DATA_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub default_product_type: String,
    pub default_failure_type: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            default_product_type: defaults::DEFAULT_PRODUCT_TYPE.to_string(),
            default_failure_type: defaults::DEFAULT_FAILURE_TYPE.to_string(),
        }
    }
}

impl ControlsConfig {
    /// The filter the page starts with: configured categories over the
    /// dataset's full tool-wear range.
    ///
    /// A configured category the dataset does not contain is replaced by the
    /// first known value so the first render is not empty by accident.
    pub fn initial_filter(&self, options: &ControlOptions) -> ReadingFilter {
        let product_type = pick_known(
            &self.default_product_type,
            options.has_product_type(&self.default_product_type),
            &options.product_types,
            "controls.default_product_type",
        );
        let failure_type = pick_known(
            &self.default_failure_type,
            options.has_failure_type(&self.default_failure_type),
            &options.failure_types,
            "controls.default_failure_type",
        );
        ReadingFilter::new(
            product_type,
            failure_type,
            options.tool_wear_min,
            options.tool_wear_max,
        )
    }
}

fn pick_known(configured: &str, present: bool, known: &[String], field: &str) -> String {
    if present {
        return configured.to_string();
    }
    match known.first() {
        Some(first) => {
            warn!(field, configured, fallback = %first, "Configured default not present in dataset");
            first.clone()
        }
        None => configured.to_string(),
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("Config validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ControlOptions {
        ControlOptions {
            product_types: vec!["L".to_string(), "M".to_string(), "H".to_string()],
            failure_types: vec!["No Failure".to_string(), "Power Failure".to_string()],
            tool_wear_min: 0,
            tool_wear_max: 253,
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = DashboardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.addr, "127.0.0.1:8050");
        assert_eq!(config.data.path, PathBuf::from("predictive_maintenance.csv"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: DashboardConfig = toml::from_str(
            r#"
[server]
addr = "0.0.0.0:9000"
"#,
        )
        .unwrap();
        assert_eq!(config.server.addr, "0.0.0.0:9000");
        assert_eq!(config.data, DataConfig::default());
        assert_eq!(config.controls, ControlsConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = DashboardConfig::default();
        let text = config.to_toml().unwrap();
        let parsed: DashboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = DashboardConfig::default();
        config.server.addr = "localhost".to_string();
        config.data.path = PathBuf::new();
        config.controls.default_failure_type = "  ".to_string();

        match config.validate() {
            Err(ConfigError::Validation(errors)) => assert_eq!(errors.len(), 3),
            other => panic!("expected validation errors, got {other:?}"),
        }
    }

    #[test]
    fn test_addr_accepts_hostnames_with_port() {
        for addr in ["localhost:8050", "0.0.0.0:80", "[::1]:8050", "dashboard.local:9000"] {
            let mut config = DashboardConfig::default();
            config.server.addr = addr.to_string();
            assert!(config.validate().is_ok(), "{addr} should be valid");
        }
        for addr in ["localhost", "host:notaport", ":8050", "localhost:70000", "a b:80"] {
            let mut config = DashboardConfig::default();
            config.server.addr = addr.to_string();
            assert!(config.validate().is_err(), "{addr} should be rejected");
        }
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let overrides = ConfigOverrides {
            addr: Some("localhost:9100".to_string()),
            data: None,
        };
        let config = DashboardConfig::default().with_overrides(&overrides).unwrap();
        assert_eq!(config.server.addr, "localhost:9100");
        assert_eq!(config.data, DataConfig::default());
    }

    #[test]
    fn test_initial_filter_uses_configured_values() {
        let filter = ControlsConfig::default().initial_filter(&options());
        assert_eq!(filter, ReadingFilter::new("M", "No Failure", 0, 253));
    }

    #[test]
    fn test_initial_filter_falls_back_to_first_known() {
        let controls = ControlsConfig {
            default_product_type: "X".to_string(),
            default_failure_type: "Overstrain Failure".to_string(),
        };
        let filter = controls.initial_filter(&options());
        assert_eq!(filter.product_type, "L");
        assert_eq!(filter.failure_type, "No Failure");
    }
}
