// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration loading and saving.

use crate::error::{CommitlintError, ConfigError, Result};
use std::path::{Path, PathBuf};

use super::default::default_config;
use super::schema::LintConfig;

/// Environment variable pointing at a configuration file.
pub const CONFIG_ENV: &str = "COMMITLINT_CONFIG";

/// Configuration file names to search for, in order of priority.
pub const CONFIG_FILES: &[&str] = &[".commitlint.toml", "commitlint.toml"];

/// Find the configuration file from the environment or the current directory.
pub fn find_config_file() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
        tracing::warn!("{} points at missing file {:?}, ignoring", CONFIG_ENV, path);
    }

    let current_dir = std::env::current_dir().ok()?;
    find_config_file_in(&current_dir)
}

/// Find the configuration file in a specific directory.
pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load configuration from the default locations.
pub fn load_config() -> Result<LintConfig> {
    match find_config_file() {
        Some(path) => load_config_from(&path),
        None => {
            tracing::debug!("No configuration file found, using defaults");
            Ok(default_config(false))
        }
    }
}

/// Load configuration from a specific path.
pub fn load_config_from(path: &Path) -> Result<LintConfig> {
    tracing::debug!("Loading configuration from: {:?}", path);

    if !path.exists() {
        return Err(CommitlintError::Config(ConfigError::NotFound {
            path: path.to_path_buf(),
        }));
    }

    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<LintConfig> {
    let config: LintConfig = toml::from_str(content).map_err(|e| {
        CommitlintError::Config(ConfigError::ParseError {
            message: format!("failed to parse TOML: {}", e),
        })
    })?;

    if config.formatter.is_empty() {
        return Err(CommitlintError::Config(ConfigError::MissingFormatter));
    }

    Ok(config)
}

/// Serialize a configuration to TOML.
pub fn config_to_string(config: &LintConfig) -> Result<String> {
    toml::to_string(config).map_err(|e| {
        CommitlintError::Config(ConfigError::ParseError {
            message: format!("failed to serialize TOML: {}", e),
        })
    })
}

/// Write a configuration to a file.
pub fn write_config(path: &Path, config: &LintConfig) -> Result<()> {
    let content = config_to_string(config)?;
    std::fs::write(path, content)?;
    tracing::debug!("Wrote configuration to: {:?}", path);
    Ok(())
}
