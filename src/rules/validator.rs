// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Lint result types.

use serde::{Deserialize, Serialize};

/// How a rule violation affects the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Fails the lint.
    Error,
    /// Reported, but the lint still passes.
    Warn,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(Severity::Error),
            "warn" => Ok(Severity::Warn),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    rule_name: String,
    message: String,
    severity: Severity,
}

impl Issue {
    pub fn new(rule_name: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            rule_name: rule_name.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

/// Outcome of linting one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintResult {
    input: String,
    issues: Vec<Issue>,
}

impl LintResult {
    /// Create a result from the linted text and its issues.
    pub fn new(input: impl Into<String>, issues: Vec<Issue>) -> Self {
        Self {
            input: input.into(),
            issues,
        }
    }

    /// The commit message that was linted.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Issues in rule order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Issues with error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// Issues with warn severity.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Warn)
    }

    /// True when at least one issue is an error.
    pub fn has_error(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Get a summary string.
    pub fn summary(&self) -> String {
        format!(
            "{} error(s), {} warning(s)",
            self.errors().count(),
            self.warnings().count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_passes() {
        let result = LintResult::new("feat: test", Vec::new());
        assert!(!result.has_error());
        assert!(result.issues().is_empty());
        assert_eq!(result.summary(), "0 error(s), 0 warning(s)");
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let result = LintResult::new(
            "feat: test",
            vec![Issue::new("header-max-length", "too long", Severity::Warn)],
        );
        assert!(!result.has_error());
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn test_errors_fail() {
        let result = LintResult::new(
            "feat: test",
            vec![
                Issue::new("header-max-length", "too long", Severity::Warn),
                Issue::new("type-enum", "not allowed", Severity::Error),
            ],
        );
        assert!(result.has_error());
        assert_eq!(result.summary(), "1 error(s), 1 warning(s)");
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("error".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("warn".parse::<Severity>(), Ok(Severity::Warn));
        assert!("warning".parse::<Severity>().is_err());
        assert!("ERROR".parse::<Severity>().is_err());
    }
}
