// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Machine-readable JSON output.

use crate::error::{CommitlintError, Result};
use crate::rules::LintResult;

use super::Formatter;

/// Pretty-printed JSON document describing the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn format(&self, result: &LintResult) -> Result<String> {
        let json = serde_json::json!({
            "input": result.input(),
            "valid": !result.has_error(),
            "issues": result.issues(),
            "errors": result.errors().count(),
            "warnings": result.warnings().count(),
        });

        serde_json::to_string_pretty(&json).map_err(|e| CommitlintError::Format(e.to_string()))
    }
}
