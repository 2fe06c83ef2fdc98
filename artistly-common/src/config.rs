//! Bootstrap configuration
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is not an error: a warning is logged and the
//! remaining tiers apply. A TOML file that exists but cannot be parsed is
//! reported as [`Error::Config`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

pub const ENV_CONFIG: &str = "ARTISTLY_CONFIG";
pub const ENV_HOST: &str = "ARTISTLY_HOST";
pub const ENV_PORT: &str = "ARTISTLY_PORT";
pub const ENV_DATA_DIR: &str = "ARTISTLY_DATA_DIR";

/// Settings read from `config.toml`; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    /// Directory holding `artists.json` and `categories.json` overrides
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Artificial delay of the simulated application submission
    #[serde(default)]
    pub submission_delay_ms: Option<u64>,

    /// Onboarding sessions untouched for this long are discarded
    #[serde(default)]
    pub session_idle_timeout_secs: Option<u64>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level or tracing filter directive (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values used when no other tier supplies a setting
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub host: String,
    pub port: u16,
    pub submission_delay_ms: u64,
    pub session_idle_timeout_secs: u64,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5780,
            submission_delay_ms: 2000,
            session_idle_timeout_secs: 30 * 60,
            log_level: default_log_level(),
        }
    }
}

/// Command-line values; `None` means "not given"
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data_dir: Option<PathBuf>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: Option<PathBuf>,
    pub submission_delay: Duration,
    pub session_idle_timeout: Duration,
    pub log_level: String,
}

impl ServiceConfig {
    /// Resolve every setting across CLI → ENV → TOML → defaults
    pub fn resolve(overrides: &ConfigOverrides) -> Result<Self> {
        let toml = match config_file_path(overrides.config_file.as_deref()) {
            Some(path) => load_toml_config(&path)?,
            None => {
                warn!("No config file found, using defaults");
                TomlConfig::default()
            }
        };
        Self::merge(overrides, &toml)
    }

    fn merge(overrides: &ConfigOverrides, toml: &TomlConfig) -> Result<Self> {
        let defaults = CompiledDefaults::default();

        let host = overrides
            .host
            .clone()
            .or_else(|| env_var(ENV_HOST))
            .or_else(|| toml.host.clone())
            .unwrap_or(defaults.host);

        let port = match overrides.port {
            Some(port) => port,
            None => match env_var(ENV_PORT) {
                Some(raw) => raw.parse::<u16>().map_err(|e| {
                    Error::Config(format!("{} is not a valid port ({}): {}", ENV_PORT, raw, e))
                })?,
                None => toml.port.unwrap_or(defaults.port),
            },
        };

        let data_dir = overrides
            .data_dir
            .clone()
            .or_else(|| env_var(ENV_DATA_DIR).map(PathBuf::from))
            .or_else(|| toml.data_dir.clone());

        let submission_delay = Duration::from_millis(
            toml.submission_delay_ms
                .unwrap_or(defaults.submission_delay_ms),
        );

        let session_idle_timeout = Duration::from_secs(
            toml.session_idle_timeout_secs
                .unwrap_or(defaults.session_idle_timeout_secs),
        );

        Ok(Self {
            host,
            port,
            data_dir,
            submission_delay,
            session_idle_timeout,
            log_level: toml.logging.level.clone(),
        })
    }

    /// `host:port` for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Locate the TOML config file
///
/// An explicit path (CLI or `ARTISTLY_CONFIG`) is returned even if it does
/// not exist so that loading reports it; the platform default
/// (`<config dir>/artistly/config.toml`) is only returned when present.
pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_var(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|d| d.join("artistly").join("config.toml"))
        .filter(|p| p.exists())
}

/// Parse a TOML config file
///
/// A missing file yields defaults with a warning.
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    if !path.exists() {
        warn!("Config file not found: {}, using defaults", path.display());
        return Ok(TomlConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("Read TOML failed: {}", e)))?;
    let config: TomlConfig = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;

    info!("Loaded config file: {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        for name in [ENV_CONFIG, ENV_HOST, ENV_PORT, ENV_DATA_DIR] {
            env::remove_var(name);
        }
    }

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    #[serial]
    fn test_defaults_when_nothing_configured() {
        clear_env();
        let config = ServiceConfig::merge(&ConfigOverrides::default(), &TomlConfig::default()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5780);
        assert!(config.data_dir.is_none());
        assert_eq!(config.submission_delay, Duration::from_millis(2000));
        assert_eq!(config.session_idle_timeout, Duration::from_secs(1800));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.bind_address(), "127.0.0.1:5780");
    }

    #[test]
    #[serial]
    fn test_toml_values_apply() {
        clear_env();
        let (_dir, path) = write_config(
            r#"
            host = "0.0.0.0"
            port = 8080
            data_dir = "/srv/artistly"
            submission_delay_ms = 0
            session_idle_timeout_secs = 60

            [logging]
            level = "debug"
            "#,
        );
        let overrides = ConfigOverrides {
            config_file: Some(path),
            ..Default::default()
        };
        let config = ServiceConfig::resolve(&overrides).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.data_dir, Some(PathBuf::from("/srv/artistly")));
        assert_eq!(config.submission_delay, Duration::ZERO);
        assert_eq!(config.session_idle_timeout, Duration::from_secs(60));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_env_beats_toml_and_cli_beats_env() {
        clear_env();
        let toml = TomlConfig {
            port: Some(8080),
            host: Some("10.0.0.1".to_string()),
            ..Default::default()
        };

        env::set_var(ENV_PORT, "9090");
        let config = ServiceConfig::merge(&ConfigOverrides::default(), &toml).unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "10.0.0.1");

        let overrides = ConfigOverrides {
            port: Some(7070),
            ..Default::default()
        };
        let config = ServiceConfig::merge(&overrides, &toml).unwrap();
        assert_eq!(config.port, 7070);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_port_is_config_error() {
        clear_env();
        env::set_var(ENV_PORT, "not-a-port");
        let err = ServiceConfig::merge(&ConfigOverrides::default(), &TomlConfig::default()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_falls_back_to_defaults() {
        clear_env();
        let overrides = ConfigOverrides {
            config_file: Some(PathBuf::from("/nonexistent/artistly/config.toml")),
            ..Default::default()
        };
        let config = ServiceConfig::resolve(&overrides).unwrap();
        assert_eq!(config.port, 5780);
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let (_dir, path) = write_config("port = \"eighty\"");
        let err = load_toml_config(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        let (_dir, path) = write_config("prot = 80");
        assert!(load_toml_config(&path).is_err());
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        clear_env();
        env::set_var(ENV_CONFIG, "/etc/artistly.toml");
        assert_eq!(config_file_path(None), Some(PathBuf::from("/etc/artistly.toml")));
        assert_eq!(
            config_file_path(Some(Path::new("/tmp/cli.toml"))),
            Some(PathBuf::from("/tmp/cli.toml"))
        );
        clear_env();
    }
}
