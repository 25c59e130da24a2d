// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Catalog of known rules and formatters.
//!
//! The registry is built once and then only read. It is passed explicitly to
//! the configuration functions instead of living in a global.

use std::collections::HashMap;

use crate::format::{builtin_formatters, Formatter};

use super::builtin::builtin_rules;
use super::rule::Rule;

/// Rule prototypes and formatters keyed by name.
#[derive(Debug, Default)]
pub struct Registry {
    rules: HashMap<&'static str, Box<dyn Rule>>,
    formatters: HashMap<&'static str, Box<dyn Formatter>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in rule and formatter.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for rule in builtin_rules() {
            registry.register_rule(rule);
        }
        for formatter in builtin_formatters() {
            registry.register_formatter(formatter);
        }
        registry
    }

    /// Register a rule prototype, replacing any rule with the same name.
    pub fn register_rule(&mut self, rule: Box<dyn Rule>) {
        if self.rules.insert(rule.name(), rule).is_some() {
            tracing::warn!("Rule registered twice, keeping the latest");
        }
    }

    /// Register a formatter, replacing any formatter with the same name.
    pub fn register_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatters.insert(formatter.name(), formatter);
    }

    /// A fresh, unconfigured instance of the named rule.
    pub fn get_rule(&self, name: &str) -> Option<Box<dyn Rule>> {
        self.rules.get(name).cloned()
    }

    pub fn get_formatter(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Registered rule names, sorted.
    pub fn rule_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.rules.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered formatter names, sorted.
    pub fn formatter_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.formatters.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
