// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Charset rules: every character of a field must be in an allowed set.

use regex::Regex;

use crate::commit::Commit;
use crate::error::ConfigError;

use super::rule::{Field, Rule, RuleSetting};

/// Restricts a field to a character class such as `a-z-`.
#[derive(Debug, Clone)]
pub struct CharsetRule {
    name: &'static str,
    field: Field,
    charset: String,
    disallowed: Option<Regex>,
}

impl CharsetRule {
    pub fn new(name: &'static str, field: Field) -> Self {
        Self {
            name,
            field,
            charset: String::new(),
            disallowed: None,
        }
    }
}

impl Rule for CharsetRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&mut self, setting: &RuleSetting) -> Result<(), ConfigError> {
        setting.check_flags(self.name, &[])?;
        let charset = setting.string_arg(self.name)?;
        if charset.is_empty() {
            return Err(ConfigError::InvalidArgument {
                rule: self.name.to_string(),
                reason: "charset is empty".to_string(),
            });
        }

        if closes_class(charset) {
            return Err(ConfigError::InvalidArgument {
                rule: self.name.to_string(),
                reason: format!("charset '{}' contains an unescaped ']'", charset),
            });
        }

        let disallowed =
            Regex::new(&format!("[^{}]", charset)).map_err(|e| ConfigError::InvalidArgument {
                rule: self.name.to_string(),
                reason: format!("invalid charset '{}': {}", charset, e),
            })?;

        self.charset = charset.to_string();
        self.disallowed = Some(disallowed);
        Ok(())
    }

    fn validate(&self, commit: &Commit) -> Option<String> {
        let disallowed = self.disallowed.as_ref()?;
        let found = disallowed.find(self.field.text(commit))?;
        Some(format!(
            "{} contains invalid char '{}', allowed chars are [{}]",
            self.field.label(),
            found.as_str(),
            self.charset
        ))
    }
}

/// Whether the charset would end the `[^...]` class early.
fn closes_class(charset: &str) -> bool {
    let mut chars = charset.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            ']' => return true,
            _ => {}
        }
    }
    false
}
