// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Linter: runs configured rules against commit messages.

use crate::commit::Commit;
use crate::config::LintConfig;
use crate::error::{ConfigError, ParseError, Result};

use super::rule::Rule;
use super::validator::{Issue, LintResult, Severity};

/// Rule name used for grammar failures.
pub const PARSER_RULE: &str = "parser";

const HEADER_FORMAT_MESSAGE: &str = "commit header is not in valid format";

/// Lints commit messages with a fixed, configured set of rules.
///
/// The linter keeps no state between calls, so the same instance can lint
/// any number of messages.
#[derive(Debug, Clone)]
pub struct Linter {
    rules: Vec<(Box<dyn Rule>, Severity)>,
}

impl Linter {
    /// Create a linter from already configured rules.
    ///
    /// Each rule's severity comes from its entry in `config`; rules without an
    /// entry report as errors.
    pub fn new(config: &LintConfig, rules: Vec<Box<dyn Rule>>) -> Result<Self> {
        let rules = rules
            .into_iter()
            .map(|rule| {
                let severity = match config.rules.get(rule.name()) {
                    Some(rule_config) => rule_config.severity(rule.name())?,
                    None => Severity::Error,
                };
                Ok((rule, severity))
            })
            .collect::<std::result::Result<Vec<_>, ConfigError>>()?;

        tracing::debug!("Linter created with {} rule(s)", rules.len());
        Ok(Self { rules })
    }

    /// Names of the rules this linter runs, in order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|(rule, _)| rule.name()).collect()
    }

    /// Parse and lint a raw commit message.
    ///
    /// A message that does not parse yields a result with a single
    /// [`PARSER_RULE`] error rather than an `Err`.
    pub fn lint(&self, message: &str) -> Result<LintResult> {
        match Commit::parse(message) {
            Ok(commit) => self.lint_commit(&commit),
            Err(err) => {
                tracing::debug!("Commit message failed to parse: {}", err);
                Ok(parser_failure(message, &err))
            }
        }
    }

    /// Lint an already parsed commit. Every rule runs; none short-circuits.
    pub fn lint_commit(&self, commit: &Commit) -> Result<LintResult> {
        let issues = self
            .rules
            .iter()
            .filter_map(|(rule, severity)| {
                let message = rule.validate(commit)?;
                tracing::debug!("Rule '{}' failed: {}", rule.name(), message);
                Some(Issue::new(rule.name(), message, *severity))
            })
            .collect();

        Ok(LintResult::new(commit.full_text(), issues))
    }
}

fn parser_failure(message: &str, err: &ParseError) -> LintResult {
    let text = if err.is_header_error() {
        HEADER_FORMAT_MESSAGE.to_string()
    } else {
        err.to_string()
    };

    LintResult::new(
        message.trim(),
        vec![Issue::new(PARSER_RULE, text, Severity::Error)],
    )
}
