// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of lint results.

mod json;
mod text;

pub use json::JsonFormatter;
pub use text::DefaultFormatter;

use crate::error::Result;
use crate::rules::LintResult;

/// Renders a [`LintResult`] to a string.
pub trait Formatter: std::fmt::Debug + Send + Sync {
    /// Name used in the `formatter` configuration key.
    fn name(&self) -> &'static str;

    /// Render every issue with its rule name, message and severity.
    fn format(&self, result: &LintResult) -> Result<String>;
}

/// Every built-in formatter.
pub fn builtin_formatters() -> Vec<Box<dyn Formatter>> {
    vec![Box::new(DefaultFormatter), Box::new(JsonFormatter)]
}
