// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook script templates.

use std::path::Path;

use handlebars::Handlebars;
use serde_json::json;

use crate::error::HookError;

/// Marker line identifying scripts written by commitlint.
pub const HOOK_MARKER: &str = "# Generated by commitlint";

const COMMIT_MSG_TEMPLATE: &str = r#"#!/bin/sh
{{marker}} {{version}}. Do not edit.

commitlint lint{{#if config}} --config "{{config}}"{{/if}} --message "$1"
"#;

/// Git hooks commitlint can install.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookTemplate {
    /// Lints the message file git passes as `$1`.
    CommitMsg,
}

impl HookTemplate {
    /// Get all hook templates.
    pub fn all() -> &'static [HookTemplate] {
        &[HookTemplate::CommitMsg]
    }

    /// File name inside the hooks directory.
    pub fn filename(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => "commit-msg",
        }
    }

    fn source(&self) -> &'static str {
        match self {
            HookTemplate::CommitMsg => COMMIT_MSG_TEMPLATE,
        }
    }

    /// Render the hook script, pinning `config` when given.
    pub fn generate(&self, config: Option<&Path>) -> Result<String, HookError> {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);

        let data = json!({
            "marker": HOOK_MARKER,
            "version": crate::version::VERSION,
            "config": config.map(|p| p.display().to_string()),
        });

        handlebars
            .render_template(self.source(), &data)
            .map_err(|e| HookError::RenderFailed {
                hook: self.filename().to_string(),
                message: e.to_string(),
            })
    }
}

impl std::str::FromStr for HookTemplate {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "commit-msg" => Ok(HookTemplate::CommitMsg),
            _ => Err(()),
        }
    }
}
