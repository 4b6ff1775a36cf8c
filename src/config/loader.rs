//! Startup configuration loading with precedence handling.
//!
//! Resolution order, lowest to highest: built-in defaults → TOML config
//! file → environment variables → CLI flags. Missing config files are
//! not errors; the resolved values still pass through
//! [`Settings::new`](crate::config::Settings::new) validation at
//! startup.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the config file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// The config file contains invalid TOML.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional; unset fields fall back to defaults.
/// Corresponds to `~/.config/calcula/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial decimal precision (0-10).
    #[serde(default)]
    pub precision: Option<u8>,

    /// Initial numbers-per-operation limit (2-100).
    #[serde(default)]
    pub max_operands: Option<usize>,

    /// Directory where history exports are written.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,

    /// Path to the tracing log file.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial decimal precision.
    pub precision: u8,
    /// Initial numbers-per-operation limit.
    pub max_operands: usize,
    /// Directory where history exports are written.
    pub export_dir: PathBuf,
    /// Path to the tracing log file.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            precision: 2,
            max_operands: 10,
            export_dir: PathBuf::from("."),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve the default log file path.
///
/// `~/.local/state/calcula/calcula.log` on Unix-like systems, the
/// platform equivalent elsewhere. Falls back to the working directory
/// when no state directory can be determined.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("calcula").join("calcula.log")
    } else {
        PathBuf::from("calcula.log")
    }
}

/// Resolve the default config file path
/// (`~/.config/calcula/config.toml`), or `None` when the platform
/// config directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("calcula").join("config.toml"))
}

/// Load a configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist; that is not an error,
/// defaults apply.
///
/// # Errors
///
/// Returns an error only if the file exists but cannot be read or
/// parsed.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Locate and load the configuration file.
///
/// Path precedence (highest to lowest):
/// 1. explicit `config_path` argument (the `--config` flag);
/// 2. `CALCULA_CONFIG` environment variable;
/// 3. default path `~/.config/calcula/config.toml`.
///
/// # Errors
///
/// Returns an error only if a located file cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CALCULA_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge a loaded config file over the defaults.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        precision: config.precision.unwrap_or(defaults.precision),
        max_operands: config.max_operands.unwrap_or(defaults.max_operands),
        export_dir: config.export_dir.unwrap_or(defaults.export_dir),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to a resolved config.
///
/// Recognized variables: `CALCULA_PRECISION`, `CALCULA_MAX_OPERANDS`.
/// Values that fail to parse as integers are ignored; range validation
/// happens later, when the resolved values build the runtime
/// [`Settings`](crate::config::Settings).
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(precision) = env_parse("CALCULA_PRECISION") {
        config.precision = precision;
    }
    if let Some(max_operands) = env_parse("CALCULA_MAX_OPERANDS") {
        config.max_operands = max_operands;
    }

    config
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

/// Apply CLI flag overrides to a resolved config.
///
/// CLI flags have the highest precedence. Only explicitly provided
/// flags override; `None` leaves the merged value in place.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    precision: Option<u8>,
    max_operands: Option<usize>,
    export_dir: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(precision) = precision {
        config.precision = precision;
    }
    if let Some(max_operands) = max_operands {
        config.max_operands = max_operands;
    }
    if let Some(export_dir) = export_dir {
        config.export_dir = export_dir;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
