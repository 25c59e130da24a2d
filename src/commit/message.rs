// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure.

use crate::error::ParseError;

/// The first line of a conventional commit: `type(scope)!: description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub(crate) full_header: String,
    pub(crate) commit_type: String,
    pub(crate) scope: Option<String>,
    pub(crate) is_breaking: bool,
    pub(crate) description: String,
}

impl Header {
    /// The complete header line.
    pub fn full_header(&self) -> &str {
        &self.full_header
    }

    /// Commit type (feat, fix, etc.).
    pub fn commit_type(&self) -> &str {
        &self.commit_type
    }

    /// Optional scope.
    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Whether the header carries the `!` marker.
    pub fn is_breaking(&self) -> bool {
        self.is_breaking
    }

    /// Text after `": "`.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A single trailer such as `Refs: #42` or `BREAKING CHANGE: ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub(crate) token: String,
    pub(crate) value: String,
    pub(crate) is_breaking: bool,
}

impl Footer {
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Footer value; continuation lines are joined with `\n`.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True for `BREAKING CHANGE` and `BREAKING-CHANGE` tokens.
    pub fn is_breaking(&self) -> bool {
        self.is_breaking
    }
}

/// A parsed conventional commit. Immutable once built by [`Commit::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub(crate) full_text: String,
    pub(crate) header: Header,
    pub(crate) body: String,
    pub(crate) full_footer: String,
    pub(crate) footers: Vec<Footer>,
}

impl Commit {
    /// Parse a commit message from a string.
    pub fn parse(message: &str) -> Result<Self, ParseError> {
        super::parser::parse(message)
    }

    /// The trimmed input message.
    pub fn full_text(&self) -> &str {
        &self.full_text
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn commit_type(&self) -> &str {
        self.header.commit_type()
    }

    /// The scope, or an empty string when the header has none.
    pub fn scope(&self) -> &str {
        self.header.scope().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.header.description()
    }

    /// Body text; empty when the message has no body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The whole footer block as written, including continuation lines.
    pub fn footer(&self) -> &str {
        &self.full_footer
    }

    /// Footers in declaration order.
    pub fn footers(&self) -> &[Footer] {
        &self.footers
    }

    /// True when the header has `!` or any footer is a breaking change.
    pub fn is_breaking(&self) -> bool {
        self.header.is_breaking || self.footers.iter().any(Footer::is_breaking)
    }
}

impl std::str::FromStr for Commit {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Commit::parse(s)
    }
}
