//! Configuration loading for the binary, with precedence handling.
//!
//! Precedence (later wins): hardcoded defaults → TOML config file →
//! environment variables → CLI arguments.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
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
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tailview/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Read the whole file instead of the tail window.
    #[serde(default)]
    pub full_view: Option<bool>,

    /// Tail window size in bytes.
    #[serde(default)]
    pub view_size_bytes: Option<u64>,

    /// Follow new content (autoscroll).
    #[serde(default)]
    pub follow: Option<bool>,

    /// Highlight lines by prefix category.
    #[serde(default)]
    pub colorize: Option<bool>,

    /// Poll interval in milliseconds.
    #[serde(default)]
    pub interval_ms: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Full-file view.
    pub full_view: bool,
    /// Tail window size in bytes.
    pub view_size_bytes: u64,
    /// Follow new content.
    pub follow: bool,
    /// Highlight lines.
    pub colorize: bool,
    /// Poll interval in milliseconds.
    pub interval_ms: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            full_view: false,
            view_size_bytes: 16 * 1024,
            follow: true,
            colorize: true,
            interval_ms: 500,
            log_file_path: default_log_path(),
        }
    }
}

/// Default tracing log location: the platform state dir, falling back to
/// the temp dir when none exists.
fn default_log_path() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::cache_dir)
        .unwrap_or_else(std::env::temp_dir)
        .join("tailview")
        .join("tailview.log")
}

/// Default config file location: `<config dir>/tailview/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tailview").join("config.toml"))
}

/// Load the config file, preferring an explicitly given path.
///
/// An explicit path that cannot be read or parsed is an error; a missing
/// file at the default location is not (returns `None`).
pub fn load_config_with_precedence(
    explicit: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(None),
        },
    };

    if !path.exists() {
        if required {
            return Err(ConfigError::ReadError {
                reason: "file does not exist".to_string(),
                path,
            });
        }
        return Ok(None);
    }

    let raw = std::fs::read_to_string(&path).map_err(|err| ConfigError::ReadError {
        reason: err.to_string(),
        path: path.clone(),
    })?;
    let parsed = toml::from_str(&raw).map_err(|err| ConfigError::ParseError {
        reason: err.to_string(),
        path,
    })?;
    Ok(Some(parsed))
}

/// Merge an optional config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    if let Some(file) = file {
        if let Some(full_view) = file.full_view {
            config.full_view = full_view;
        }
        if let Some(view_size_bytes) = file.view_size_bytes {
            config.view_size_bytes = view_size_bytes;
        }
        if let Some(follow) = file.follow {
            config.follow = follow;
        }
        if let Some(colorize) = file.colorize {
            config.colorize = colorize;
        }
        if let Some(interval_ms) = file.interval_ms {
            config.interval_ms = interval_ms;
        }
        if let Some(log_file_path) = file.log_file_path {
            config.log_file_path = log_file_path;
        }
    }
    config
}

/// Apply environment variable overrides.
///
/// Recognized: `TAILVIEW_VIEW_SIZE` (bytes), `TAILVIEW_INTERVAL_MS`.
/// Unparseable values are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(size) = env_u64("TAILVIEW_VIEW_SIZE") {
        config.view_size_bytes = size;
    }
    if let Some(interval) = env_u64("TAILVIEW_INTERVAL_MS") {
        config.interval_ms = interval;
    }
    config
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.parse().ok()
}

/// CLI flag overrides, applied last.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    /// `--full`
    pub full_view: Option<bool>,
    /// `--view-size`
    pub view_size_bytes: Option<u64>,
    /// `--no-follow`
    pub follow: Option<bool>,
    /// `--interval`
    pub interval_ms: Option<u64>,
}

/// Apply CLI argument overrides.
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(full_view) = cli.full_view {
        config.full_view = full_view;
    }
    if let Some(view_size_bytes) = cli.view_size_bytes {
        config.view_size_bytes = view_size_bytes;
    }
    if let Some(follow) = cli.follow {
        config.follow = follow;
    }
    if let Some(interval_ms) = cli.interval_ms {
        config.interval_ms = interval_ms;
    }
    config
}
