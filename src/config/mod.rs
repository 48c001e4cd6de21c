//! Configuration management
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `UAPROBE_<SECTION>__<KEY>` environment variables.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "UAPROBE_CONFIG";

/// File looked up in the working directory when `UAPROBE_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "uaprobe.toml";

const ENV_PREFIX: &str = "UAPROBE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Source(#[from] config::ConfigError),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Configuration serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ua: UaConfig,
    pub log: LogConfig,
}

/// Settings handed to the user-agent endpoint on create
///
/// These are not range-checked here. The endpoint rejects bad values on
/// create, which is exactly the failure the probe exists to report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UaConfig {
    pub endpoint_name: String,
    pub max_calls: u32,
    /// Initial memory pool size in bytes
    pub pool_capacity: usize,
    /// Growth step once the initial pool is exhausted, 0 disables growth
    pub pool_increment: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ua: UaConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for UaConfig {
    fn default() -> Self {
        Self {
            endpoint_name: "uaprobe".to_string(),
            max_calls: 4,
            pool_capacity: 4000,
            pool_increment: 4000,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "off".to_string(),
        }
    }
}

impl Config {
    /// Load from `UAPROBE_CONFIG` (or `uaprobe.toml` when present) plus environment
    pub fn load() -> Result<Self, ConfigError> {
        let file = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::NotFound(path));
                }
                Some(path)
            }
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        Self::build(file.as_deref(), true)
    }

    /// Load from an explicit TOML file, without environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        Self::build(Some(path), false)
    }

    fn build(file: Option<&Path>, with_env: bool) -> Result<Self, ConfigError> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Config::default())?);

        if let Some(path) = file {
            builder = builder.add_source(
                config::File::from(path.to_path_buf()).format(config::FileFormat::Toml),
            );
        }

        if with_env {
            // Maps UAPROBE_UA__MAX_CALLS to ua.max_calls
            builder = builder.add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("uaprobe-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, contents).expect("write temp config");
        path
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ua.endpoint_name, "uaprobe");
        assert_eq!(config.ua.max_calls, 4);
        assert_eq!(config.ua.pool_capacity, 4000);
        assert_eq!(config.log.level, "off");
    }

    #[test]
    fn test_from_file_overrides_only_given_keys() {
        let path = write_temp("[ua]\nmax_calls = 16\n");
        let config = Config::from_file(&path).expect("load config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.ua.max_calls, 16);
        assert_eq!(config.ua.endpoint_name, "uaprobe");
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_from_file_keeps_out_of_range_values() {
        let path = write_temp("[ua]\nmax_calls = 0\npool_capacity = 0\n");
        let config = Config::from_file(&path).expect("load config");
        std::fs::remove_file(&path).ok();

        assert_eq!(config.ua.max_calls, 0);
        assert_eq!(config.ua.pool_capacity, 0);
    }

    #[test]
    fn test_from_file_missing() {
        let path = std::env::temp_dir().join("uaprobe-does-not-exist.toml");
        assert!(matches!(
            Config::from_file(&path),
            Err(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_toml_output_loads_back() {
        let mut config = Config::default();
        config.ua.endpoint_name = "probe-host".to_string();
        config.log.level = "debug".to_string();

        let path = write_temp(&config.to_toml_string().expect("serialize"));
        let loaded = Config::from_file(&path).expect("load config");
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, config);
    }
}
