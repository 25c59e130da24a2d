// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Length rules: `*-min-length`, `*-max-length` and `*-max-line-length`.
//!
//! Lengths are counted in characters. A negative bound disables the check.

use crate::commit::Commit;
use crate::error::ConfigError;

use super::rule::{Field, Rule, RuleSetting};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Min,
    Max,
    MaxLine,
}

/// A length limit on one commit field.
#[derive(Debug, Clone)]
pub struct LengthRule {
    name: &'static str,
    field: Field,
    bound: Bound,
    limit: i64,
}

impl LengthRule {
    /// Fails when the field is shorter than the limit.
    pub fn min(name: &'static str, field: Field) -> Self {
        Self::new(name, field, Bound::Min)
    }

    /// Fails when the field is longer than the limit.
    pub fn max(name: &'static str, field: Field) -> Self {
        Self::new(name, field, Bound::Max)
    }

    /// Fails when any line of the field is longer than the limit.
    pub fn max_line(name: &'static str, field: Field) -> Self {
        Self::new(name, field, Bound::MaxLine)
    }

    fn new(name: &'static str, field: Field, bound: Bound) -> Self {
        Self {
            name,
            field,
            bound,
            limit: -1,
        }
    }
}

impl Rule for LengthRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&mut self, setting: &RuleSetting) -> Result<(), ConfigError> {
        setting.check_flags(self.name, &[])?;
        self.limit = setting.int_arg(self.name)?;
        Ok(())
    }

    fn validate(&self, commit: &Commit) -> Option<String> {
        let text = self.field.text(commit);
        let label = self.field.label();

        match self.bound {
            Bound::Min => check_min_len(label, self.limit, text),
            Bound::Max => check_max_len(label, self.limit, text),
            Bound::MaxLine => text.lines().enumerate().find_map(|(i, line)| {
                check_max_len(&format!("{} line {}", label, i + 1), self.limit, line)
            }),
        }
    }
}

fn check_max_len(label: &str, limit: i64, text: &str) -> Option<String> {
    if limit < 0 {
        return None;
    }
    let actual = text.chars().count();
    if actual as i64 > limit {
        Some(format!(
            "{} length is {}, should have at most {} chars",
            label, actual, limit
        ))
    } else {
        None
    }
}

fn check_min_len(label: &str, limit: i64, text: &str) -> Option<String> {
    if limit < 0 {
        return None;
    }
    let actual = text.chars().count();
    if (actual as i64) < limit {
        Some(format!(
            "{} length is {}, should have at least {} chars",
            label, actual, limit
        ))
    } else {
        None
    }
}
