// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{
    default_config, get_formatter, load_config, load_config_from, new_linter, validate_config,
    write_config, LintConfig, CONFIG_FILES,
};
use crate::error::{CommitlintError, ConfigError, Result, ResultExt};
use crate::hooks::HookManager;
use crate::rules::Registry;

use super::args::{Cli, Commands, ConfigAction, HookAction, InitArgs, LintArgs};

/// Message file git leaves behind for the commit being written.
const COMMIT_EDITMSG: &str = ".git/COMMIT_EDITMSG";

/// Hooks directory used by `hook create`.
const LOCAL_HOOKS_DIR: &str = ".commitlint/hooks";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Lint(args) => run_lint(args),
        Commands::Init(args) => run_init(args),
        Commands::Config { action } => run_config(action),
        Commands::Hook { action } => run_hook(action),
        Commands::Version => run_version(),
    }
}

fn load(config: Option<&Path>) -> Result<LintConfig> {
    match config {
        Some(path) => load_config_from(path),
        None => load_config(),
    }
}

/// Run the lint command.
fn run_lint(args: LintArgs) -> Result<ExitCode> {
    tracing::debug!("Running lint command with args: {:?}", args);

    let config = load(args.config.as_deref())?;
    let registry = Registry::builtin();
    let formatter = get_formatter(&config, &registry)?;
    let linter = new_linter(&config, &registry)?;

    let message = read_message(args.message.as_deref())?;
    let result = linter.lint(&message)?;
    let output = formatter.format(&result)?;

    if result.has_error() {
        eprintln!("{}", output);
        Ok(ExitCode::FAILURE)
    } else {
        println!("{}", output);
        Ok(ExitCode::SUCCESS)
    }
}

/// Read the message from piped stdin, the given file, or git's edit file.
fn read_message(path: Option<&Path>) -> Result<String> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut message = String::new();
        stdin.lock().read_to_string(&mut message)?;
        if !message.trim().is_empty() {
            tracing::debug!("Read message from stdin");
            return Ok(message);
        }
    }

    let path = path.unwrap_or(Path::new(COMMIT_EDITMSG));
    tracing::debug!("Reading message from {:?}", path);
    read_file(path)
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).context(format!("failed to read {}", path.display()))
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<ExitCode> {
    tracing::debug!("Running init command with args: {:?}", args);

    let config = args.config.as_deref().map(absolute).transpose()?;
    let hooks_dir = crate::hooks::init(args.global, args.replace, config.as_deref())?;

    println!("✓ Installed hooks in {}", hooks_dir.display());
    Ok(ExitCode::SUCCESS)
}

/// Run a config action.
fn run_config(action: ConfigAction) -> Result<ExitCode> {
    match action {
        ConfigAction::Create { enabled, replace } => {
            let path = Path::new(CONFIG_FILES[0]);
            if path.exists() && !replace {
                return Err(CommitlintError::WithContext {
                    context: "config create".to_string(),
                    message: format!("{} already exists, use --replace", path.display()),
                });
            }

            write_config(path, &default_config(enabled))?;
            println!("✓ Created {}", path.display());
            Ok(ExitCode::SUCCESS)
        }
        ConfigAction::Check { config } => {
            let config = load(config.as_deref())?;
            let errors = validate_config(&config, &Registry::builtin());

            if errors.is_empty() {
                println!("✓ config is valid");
                return Ok(ExitCode::SUCCESS);
            }

            print_config_errors(&errors);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_config_errors(errors: &[ConfigError]) {
    eprintln!("{}", console::style("Config Errors:").red().bold());
    for err in errors {
        eprintln!("  {} {}", console::style("✗").red(), err);
    }
    eprintln!();
    eprintln!("Total {} error(s)", errors.len());
}

/// Run a hook action.
fn run_hook(action: HookAction) -> Result<ExitCode> {
    match action {
        HookAction::Create { config, replace } => {
            let config = config.as_deref().map(absolute).transpose()?;
            let manager = HookManager::new(LOCAL_HOOKS_DIR);
            manager.create_hooks(config.as_deref(), replace)?;

            println!("✓ Created hooks in {}", manager.hooks_dir().display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Run the version command.
fn run_version() -> Result<ExitCode> {
    println!("commitlint {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(ExitCode::SUCCESS)
}

/// Hooks run from the repository root, so pinned config paths are made absolute.
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()?.join(path))
}
