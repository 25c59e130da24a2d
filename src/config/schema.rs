// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration schema definitions.
//!
//! Defines the structures loaded from `.commitlint.toml`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::rules::{RuleArgument, RuleSetting, Severity};

/// The main configuration structure for commitlint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Oldest commitlint version able to read this file, in semver format.
    #[serde(
        default,
        rename = "min-version",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_version: Option<String>,

    /// Name of the formatter used to render results.
    #[serde(default = "default_formatter")]
    pub formatter: String,

    /// Rule settings keyed by rule name. Rules run in declaration order.
    #[serde(default)]
    pub rules: IndexMap<String, RuleConfig>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            min_version: None,
            formatter: default_formatter(),
            rules: IndexMap::new(),
        }
    }
}

impl LintConfig {
    /// Load configuration from the default locations.
    pub fn load() -> crate::error::Result<Self> {
        super::loader::load_config()
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &std::path::Path) -> crate::error::Result<Self> {
        super::loader::load_config_from(path)
    }

    /// Enabled rule names in run order.
    pub fn enabled_rule_names(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.enabled)
            .map(|(name, _)| name.as_str())
    }
}

fn default_formatter() -> String {
    "default".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_severity() -> String {
    Severity::Error.as_str().to_string()
}

/// Settings for a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleConfig {
    /// Whether the rule runs.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// `error` or `warn`.
    #[serde(default = "default_severity")]
    pub severity: String,

    /// Rule-defined argument.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<RuleArgument>,

    /// Rule-defined boolean flags.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub flags: BTreeMap<String, bool>,
}

impl RuleConfig {
    /// An enabled rule with the given severity and argument.
    pub fn new(severity: &str, argument: impl Into<RuleArgument>) -> Self {
        Self {
            enabled: true,
            severity: severity.to_string(),
            argument: Some(argument.into()),
            flags: BTreeMap::new(),
        }
    }

    /// Same settings, disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Add a flag.
    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.to_string(), value);
        self
    }

    /// The parsed severity.
    pub fn severity(&self, rule: &str) -> Result<Severity, ConfigError> {
        self.severity
            .parse()
            .map_err(|_| ConfigError::UnknownSeverity {
                rule: rule.to_string(),
                severity: self.severity.clone(),
            })
    }

    /// The settings handed to the rule.
    pub fn setting(&self) -> RuleSetting {
        RuleSetting {
            argument: self.argument.clone(),
            flags: self.flags.clone(),
        }
    }
}
