// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// commitlint - Conventional Commits message linter
#[derive(Parser, Debug)]
#[command(name = "commitlint")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Lint commit messages against the Conventional Commits grammar", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Lint a commit message
    Lint(LintArgs),

    /// Install the commit-msg hook and point git at it
    Init(InitArgs),

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Manage hook scripts
    Hook {
        #[command(subcommand)]
        action: HookAction,
    },

    /// Print version information
    Version,
}

/// Arguments for the lint command.
#[derive(Parser, Debug, Default, Clone)]
pub struct LintArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File holding the commit message, read when stdin is not piped (default: .git/COMMIT_EDITMSG)
    #[arg(short, long)]
    pub message: Option<PathBuf>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Default, Clone)]
pub struct InitArgs {
    /// Configuration file the hook should use
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Install for every repository of the current user
    #[arg(short, long)]
    pub global: bool,

    /// Overwrite existing hooks
    #[arg(short, long)]
    pub replace: bool,
}

/// Configuration actions.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Write the default configuration to .commitlint.toml
    Create {
        /// Only write rules that are enabled by default
        #[arg(short, long)]
        enabled: bool,

        /// Overwrite an existing file
        #[arg(short, long)]
        replace: bool,
    },

    /// Check a configuration for errors
    Check {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Hook actions.
#[derive(Subcommand, Debug, Clone)]
pub enum HookAction {
    /// Write hook scripts to .commitlint/hooks
    Create {
        /// Configuration file the hook should use
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overwrite existing hooks
        #[arg(short, long)]
        replace: bool,
    },
}
