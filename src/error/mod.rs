// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for commitlint.
//!
//! Errors fall in two camps. Configuration problems ([`ConfigError`]) are
//! fatal and stop execution before any message is linted. Grammar problems
//! ([`ParseError`]) are turned into lint findings by the linter and never
//! abort a run.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commitlint operations.
#[derive(Error, Debug)]
pub enum CommitlintError {
    // Configuration errors
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    // Commit message grammar errors
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    // Hook errors
    #[error("hook error: {0}")]
    Hook(#[from] HookError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Formatting errors
    #[error("format error: {0}")]
    Format(String),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("formatter is empty")]
    MissingFormatter,

    #[error("unknown formatter '{name}'")]
    UnknownFormatter { name: String },

    #[error("unknown rule '{name}'")]
    UnknownRule { name: String },

    #[error("unknown severity level '{severity}' for rule '{rule}'")]
    UnknownSeverity { rule: String, severity: String },

    #[error("invalid argument for rule '{rule}': {reason}")]
    InvalidArgument { rule: String, reason: String },

    #[error("invalid min-version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("min version required is {required}, you have {current}; upgrade commitlint")]
    VersionTooOld { required: String, current: String },
}

/// Commit message grammar violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("commit message is empty")]
    EmptyMessage,

    #[error("commit header is not in valid format: '{header}'")]
    HeaderFormat { header: String },

    #[error("commit message should have exactly one blank line after {section}")]
    MissingBlankLine { section: &'static str },
}

impl ParseError {
    /// Whether this error comes from the header grammar.
    pub fn is_header_error(&self) -> bool {
        matches!(self, ParseError::HeaderFormat { .. })
    }
}

/// Hook-related errors.
#[derive(Error, Debug)]
pub enum HookError {
    #[error("hook already exists: {hook}")]
    AlreadyExists { hook: String },

    #[error("failed to install hook '{hook}': {message}")]
    InstallFailed { hook: String, message: String },

    #[error("failed to render hook '{hook}': {message}")]
    RenderFailed { hook: String, message: String },

    #[error("failed to update git config: {message}")]
    GitConfig { message: String },
}

impl From<git2::Error> for HookError {
    fn from(err: git2::Error) -> Self {
        HookError::GitConfig {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias for commitlint operations.
pub type Result<T> = std::result::Result<T, CommitlintError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CommitlintError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
