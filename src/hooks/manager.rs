// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for writing hook scripts and pointing git at them.

use crate::error::{CommitlintError, HookError, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::HookTemplate;

/// Git configuration key holding the hooks directory.
pub const HOOKS_PATH_KEY: &str = "core.hooksPath";

/// Writes hook scripts into a hooks directory.
#[derive(Debug, Clone)]
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a hook manager for the given directory.
    pub fn new(hooks_dir: impl Into<PathBuf>) -> Self {
        Self {
            hooks_dir: hooks_dir.into(),
        }
    }

    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Write every hook script, creating the directory when needed.
    ///
    /// Existing scripts are only overwritten with `replace`.
    pub fn create_hooks(&self, config: Option<&Path>, replace: bool) -> Result<()> {
        fs::create_dir_all(&self.hooks_dir).map_err(|e| {
            CommitlintError::Hook(HookError::InstallFailed {
                hook: "all".to_string(),
                message: format!("failed to create hooks directory: {}", e),
            })
        })?;

        for template in HookTemplate::all() {
            self.install_template(template, config, replace)?;
        }
        Ok(())
    }

    fn install_template(
        &self,
        template: &HookTemplate,
        config: Option<&Path>,
        replace: bool,
    ) -> Result<()> {
        let hook_path = self.hooks_dir.join(template.filename());

        if hook_path.exists() && !replace {
            return Err(CommitlintError::Hook(HookError::AlreadyExists {
                hook: hook_path.display().to_string(),
            }));
        }

        let script = template.generate(config)?;
        fs::write(&hook_path, script).map_err(|e| {
            CommitlintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("failed to write hook: {}", e),
            })
        })?;

        make_executable(&hook_path).map_err(|e| {
            CommitlintError::Hook(HookError::InstallFailed {
                hook: template.filename().to_string(),
                message: format!("failed to set permissions: {}", e),
            })
        })?;

        tracing::debug!("Installed hook: {:?}", hook_path);
        Ok(())
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// `.commitlint/hooks` at the root of the current repository.
pub fn local_hooks_dir() -> Result<PathBuf> {
    let repo = git2::Repository::discover(".").map_err(HookError::from)?;
    let root = repo
        .workdir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| repo.path().to_path_buf());
    Ok(root.join(".commitlint").join("hooks"))
}

/// `commitlint/hooks` under the user's configuration directory.
pub fn global_hooks_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("commitlint").join("hooks"))
        .ok_or_else(|| {
            CommitlintError::Hook(HookError::InstallFailed {
                hook: "all".to_string(),
                message: "could not determine user config directory".to_string(),
            })
        })
}

/// Write the hooks and point git's `core.hooksPath` at them.
///
/// Returns the hooks directory.
pub fn init(global: bool, replace: bool, config: Option<&Path>) -> Result<PathBuf> {
    let hooks_dir = if global {
        global_hooks_dir()?
    } else {
        local_hooks_dir()?
    };

    HookManager::new(&hooks_dir).create_hooks(config, replace)?;
    set_hooks_path(global, &hooks_dir)?;

    Ok(hooks_dir)
}

fn set_hooks_path(global: bool, hooks_dir: &Path) -> Result<()> {
    let value = hooks_dir.display().to_string();

    let mut git_config = if global {
        git2::Config::open_default()
            .and_then(|mut config| config.open_global())
            .map_err(HookError::from)?
    } else {
        let repo = git2::Repository::discover(".").map_err(HookError::from)?;
        repo.config().map_err(HookError::from)?
    };

    git_config
        .set_str(HOOKS_PATH_KEY, &value)
        .map_err(HookError::from)?;

    tracing::debug!("Set {} to {}", HOOKS_PATH_KEY, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hooks::templates::HOOK_MARKER;

    #[test]
    fn test_create_hooks() {
        let dir = tempfile::tempdir().unwrap();
        let hooks_dir = dir.path().join(".commitlint").join("hooks");
        let manager = HookManager::new(&hooks_dir);

        manager.create_hooks(None, false).unwrap();

        let script = fs::read_to_string(hooks_dir.join("commit-msg")).unwrap();
        assert!(script.contains(HOOK_MARKER));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(hooks_dir.join("commit-msg"))
                .unwrap()
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o755);
        }
    }

    #[test]
    fn test_existing_hook_needs_replace() {
        let dir = tempfile::tempdir().unwrap();
        let manager = HookManager::new(dir.path());
        fs::write(dir.path().join("commit-msg"), "#!/bin/sh\nexit 0\n").unwrap();

        let err = manager.create_hooks(None, false).unwrap_err();
        assert!(matches!(
            err,
            CommitlintError::Hook(HookError::AlreadyExists { .. })
        ));

        manager.create_hooks(None, true).unwrap();
        let script = fs::read_to_string(dir.path().join("commit-msg")).unwrap();
        assert!(script.contains(HOOK_MARKER));
    }
}
