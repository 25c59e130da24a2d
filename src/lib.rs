// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commitlint - Conventional Commits message linter
//!
//! Parses commit messages against the Conventional Commits grammar and runs
//! a configurable set of rules over the parsed parts.
//!
//! # Features
//!
//! - **Grammar Parser**: Splits a message into header, body and footers
//! - **Rules**: Length, enum and charset checks on every commit part
//! - **Configuration**: TOML file choosing rules, severities and arguments
//! - **Formatters**: Human readable or JSON output
//! - **Git Hooks**: Generated `commit-msg` hook wired through `core.hooksPath`
//!
//! # Example
//!
//! ```no_run
//! use commitlint::config::{default_config, new_linter};
//! use commitlint::rules::Registry;
//!
//! let config = default_config(true);
//! let linter = new_linter(&config, &Registry::builtin()).unwrap();
//!
//! let result = linter.lint("feat(parser): support footers").unwrap();
//! assert!(!result.has_error());
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod format;
pub mod hooks;
pub mod rules;

// Re-exports for convenience
pub use commit::Commit;
pub use config::LintConfig;
pub use error::{CommitlintError, Result};
pub use rules::{LintResult, Linter, Registry};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commitlint.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match GIT_SHA {
            Some(sha) => format!("{} ({})", VERSION, &sha[..7.min(sha.len())]),
            None => VERSION.to_string(),
        }
    }

}
