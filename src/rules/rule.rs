// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The rule abstraction and typed rule arguments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::commit::Commit;
use crate::error::ConfigError;

/// A configurable validation rule.
///
/// A rule is configured once through [`Rule::apply`] and then validates any
/// number of commits. `validate` must not change the rule's state.
pub trait Rule: RuleClone + std::fmt::Debug + Send + Sync {
    /// Stable identifier used in configuration and diagnostics.
    fn name(&self) -> &'static str;

    /// Validate and store the rule's configuration.
    fn apply(&mut self, setting: &RuleSetting) -> Result<(), ConfigError>;

    /// Check the commit, returning the issue message on failure.
    fn validate(&self, commit: &Commit) -> Option<String>;
}

/// Object-safe cloning for boxed rules.
pub trait RuleClone {
    fn clone_box(&self) -> Box<dyn Rule>;
}

impl<T> RuleClone for T
where
    T: Rule + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Rule> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Rule> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// A rule argument as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleArgument {
    Int(i64),
    Text(String),
    List(Vec<String>),
}

impl RuleArgument {
    fn kind(&self) -> &'static str {
        match self {
            RuleArgument::Int(_) => "an integer",
            RuleArgument::Text(_) => "a string",
            RuleArgument::List(_) => "a list of strings",
        }
    }
}

impl From<i64> for RuleArgument {
    fn from(value: i64) -> Self {
        RuleArgument::Int(value)
    }
}

impl From<&str> for RuleArgument {
    fn from(value: &str) -> Self {
        RuleArgument::Text(value.to_string())
    }
}

impl From<Vec<&str>> for RuleArgument {
    fn from(value: Vec<&str>) -> Self {
        RuleArgument::List(value.into_iter().map(String::from).collect())
    }
}

/// The settings handed to [`Rule::apply`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSetting {
    pub argument: Option<RuleArgument>,
    pub flags: BTreeMap<String, bool>,
}

impl RuleSetting {
    /// A setting with only an argument.
    pub fn with_argument(argument: impl Into<RuleArgument>) -> Self {
        Self {
            argument: Some(argument.into()),
            flags: BTreeMap::new(),
        }
    }

    /// Add a flag.
    pub fn with_flag(mut self, name: impl Into<String>, value: bool) -> Self {
        self.flags.insert(name.into(), value);
        self
    }

    /// The argument as an integer.
    pub fn int_arg(&self, rule: &str) -> Result<i64, ConfigError> {
        match &self.argument {
            Some(RuleArgument::Int(value)) => Ok(*value),
            other => Err(wrong_shape(rule, "an integer", other.as_ref())),
        }
    }

    /// The argument as a string.
    pub fn string_arg(&self, rule: &str) -> Result<&str, ConfigError> {
        match &self.argument {
            Some(RuleArgument::Text(value)) => Ok(value),
            other => Err(wrong_shape(rule, "a string", other.as_ref())),
        }
    }

    /// The argument as a list of strings.
    pub fn string_list_arg(&self, rule: &str) -> Result<Vec<String>, ConfigError> {
        match &self.argument {
            Some(RuleArgument::List(values)) => Ok(values.clone()),
            other => Err(wrong_shape(rule, "a list of strings", other.as_ref())),
        }
    }

    /// A boolean flag, `false` when unset.
    pub fn flag(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// Reject flags the rule does not understand.
    pub fn check_flags(&self, rule: &str, known: &[&str]) -> Result<(), ConfigError> {
        match self.flags.keys().find(|k| !known.contains(&k.as_str())) {
            Some(unknown) => Err(ConfigError::InvalidArgument {
                rule: rule.to_string(),
                reason: format!("unknown flag '{}'", unknown),
            }),
            None => Ok(()),
        }
    }
}

fn wrong_shape(rule: &str, expected: &str, got: Option<&RuleArgument>) -> ConfigError {
    let got = got.map(RuleArgument::kind).unwrap_or("nothing");
    ConfigError::InvalidArgument {
        rule: rule.to_string(),
        reason: format!("expected {}, got {}", expected, got),
    }
}

/// A part of the commit a rule inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Header,
    Body,
    Footer,
    Type,
    Scope,
    Description,
}

impl Field {
    /// The text of this field in the commit.
    pub fn text<'a>(&self, commit: &'a Commit) -> &'a str {
        match self {
            Field::Header => commit.header().full_header(),
            Field::Body => commit.body(),
            Field::Footer => commit.footer(),
            Field::Type => commit.commit_type(),
            Field::Scope => commit.scope(),
            Field::Description => commit.description(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Header => "header",
            Field::Body => "body",
            Field::Footer => "footer",
            Field::Type => "type",
            Field::Scope => "scope",
            Field::Description => "description",
        }
    }
}
