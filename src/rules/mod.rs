// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule engine module for commit validation.
//!
//! This module provides the [`Rule`] abstraction, the built-in rule set, the
//! [`Registry`] catalog and the [`Linter`] that runs configured rules against
//! commit messages.

mod builtin;
mod charset;
mod engine;
mod enums;
mod length;
mod registry;
mod rule;
mod validator;

pub use builtin::builtin_rules;
pub use charset::CharsetRule;
pub use engine::{Linter, PARSER_RULE};
pub use enums::EnumRule;
pub use length::LengthRule;
pub use registry::Registry;
pub use rule::{Field, Rule, RuleArgument, RuleClone, RuleSetting};
pub use validator::{Issue, LintResult, Severity};
