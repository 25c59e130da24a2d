// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in rule set.

use super::charset::CharsetRule;
use super::enums::EnumRule;
use super::length::LengthRule;
use super::rule::{Field, Rule};

/// Fresh, unconfigured instances of every built-in rule.
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        // Length rules
        Box::new(LengthRule::min("header-min-length", Field::Header)),
        Box::new(LengthRule::max("header-max-length", Field::Header)),
        Box::new(LengthRule::min("body-min-length", Field::Body)),
        Box::new(LengthRule::max("body-max-length", Field::Body)),
        Box::new(LengthRule::min("footer-min-length", Field::Footer)),
        Box::new(LengthRule::max("footer-max-length", Field::Footer)),
        Box::new(LengthRule::min("type-min-length", Field::Type)),
        Box::new(LengthRule::max("type-max-length", Field::Type)),
        Box::new(LengthRule::min("scope-min-length", Field::Scope)),
        Box::new(LengthRule::max("scope-max-length", Field::Scope)),
        Box::new(LengthRule::min("description-min-length", Field::Description)),
        Box::new(LengthRule::max("description-max-length", Field::Description)),
        // Line length rules
        Box::new(LengthRule::max_line("body-max-line-length", Field::Body)),
        Box::new(LengthRule::max_line("footer-max-line-length", Field::Footer)),
        // Enum rules
        Box::new(EnumRule::types()),
        Box::new(EnumRule::scopes()),
        Box::new(EnumRule::footer_tokens()),
        // Charset rules
        Box::new(CharsetRule::new("type-charset", Field::Type)),
        Box::new(CharsetRule::new("scope-charset", Field::Scope)),
    ]
}
