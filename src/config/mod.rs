//! Configuration file loading with precedence handling.
//!
//! Precedence: built-in defaults → config file → CLI flags. The config file
//! lives at `<config-dir>/scrollsel/config.toml` unless an explicit path is
//! given; the default location is optional, an explicit one must exist.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::model::params::{ParamsError, SelectionParams};

/// Errors while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("Invalid TOML in {path}: {reason}")]
    Parse {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },
}

/// On-disk configuration. Every field is optional; missing ones fall back
/// to built-in defaults. Unknown fields are rejected so typos surface
/// instead of being silently ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// `[selection]` table mirroring [`SelectionParams`].
    #[serde(default)]
    pub selection: Option<SelectionParams>,

    /// Path for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// CLI flag overrides applied on top of the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `--mid`.
    pub mid: Option<f64>,
    /// `--stiffness`.
    pub stiffness: Option<f64>,
    /// `--top-range`.
    pub top_range: Option<i32>,
    /// `--bottom-range`.
    pub bottom_range: Option<i32>,
    /// `--log-file`.
    pub log_file: Option<PathBuf>,
}

/// Fully resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Validated solver parameters.
    pub params: SelectionParams,
    /// Tracing output path.
    pub log_file_path: PathBuf,
}

/// Default config file location; `None` when the platform exposes no
/// config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("scrollsel").join("config.toml"))
}

/// Load the config file.
///
/// An explicit `path` must exist and parse. The default location is
/// optional: a missing file there resolves to `Ok(None)`.
pub fn load(path: Option<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => match default_config_path() {
            Some(path) => (path, false),
            None => return Ok(None),
        },
    };

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) if !required && source.kind() == std::io::ErrorKind::NotFound => {
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    let file: ConfigFile = toml::from_str(&raw).map_err(|err| ConfigError::Parse {
        path,
        reason: err.to_string(),
    })?;
    Ok(Some(file))
}

/// Merge defaults, file, and CLI overrides into a validated configuration.
pub fn resolve(file: Option<ConfigFile>, cli: CliOverrides) -> Result<ResolvedConfig, ParamsError> {
    let file = file.unwrap_or_default();

    let mut params = file.selection.unwrap_or_default();
    if let Some(mid) = cli.mid {
        params.selection_y_mid = mid;
    }
    if let Some(stiffness) = cli.stiffness {
        params.stiffness = stiffness;
    }
    if let Some(range) = cli.top_range {
        params.top_perception_range_px = range;
    }
    if let Some(range) = cli.bottom_range {
        params.bottom_perception_range_px = range;
    }
    params.validate()?;

    let log_file_path = cli
        .log_file
        .or(file.log_file_path)
        .or_else(|| dirs::cache_dir().map(|dir| dir.join("scrollsel").join("scrollsel.log")))
        .unwrap_or_else(|| PathBuf::from("scrollsel.log"));

    Ok(ResolvedConfig {
        params,
        log_file_path,
    })
}
