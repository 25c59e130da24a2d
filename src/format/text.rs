// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Human-readable output.

use console::style;

use crate::error::Result;
use crate::rules::{Issue, LintResult, Severity};

use super::Formatter;

/// Terminal output with one line per issue and a summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl DefaultFormatter {
    fn format_issue(issue: &Issue) -> String {
        let prefix = match issue.severity() {
            Severity::Error => style("✗").red().bold(),
            Severity::Warn => style("⚠").yellow().bold(),
        };

        let rule = match issue.severity() {
            Severity::Error => style(issue.rule_name()).red(),
            Severity::Warn => style(issue.rule_name()).yellow(),
        };

        format!("  {} {}: {}", prefix, rule, issue.message())
    }
}

impl Formatter for DefaultFormatter {
    fn name(&self) -> &'static str {
        "default"
    }

    fn format(&self, result: &LintResult) -> Result<String> {
        let first_line = result.input().lines().next().unwrap_or("");

        if result.issues().is_empty() {
            return Ok(format!("{} commit message is valid", style("✓").green().bold()));
        }

        let mut output = format!("commitlint\n\n→ input: {}\n", style(first_line).dim());

        let errors: Vec<_> = result.errors().collect();
        if !errors.is_empty() {
            output.push_str("\nErrors:\n");
            for issue in errors {
                output.push_str(&Self::format_issue(issue));
                output.push('\n');
            }
        }

        let warnings: Vec<_> = result.warnings().collect();
        if !warnings.is_empty() {
            output.push_str("\nWarnings:\n");
            for issue in warnings {
                output.push_str(&Self::format_issue(issue));
                output.push('\n');
            }
        }

        output.push_str(&format!("\nTotal {}", result.summary()));
        Ok(output)
    }
}
