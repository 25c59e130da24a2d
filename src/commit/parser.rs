// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Line-oriented parser for the conventional commit grammar.
//!
//! ```text
//! type(scope)!: description
//!
//! body paragraphs ...
//!
//! Token: value
//! Token #value
//! BREAKING CHANGE: value
//!   indented continuation
//! ```
//!
//! Footers are detected positionally: only the trailing block of footer-shaped
//! lines is treated as footers. A `Token: value` line earlier in the message
//! stays part of the body.

use crate::error::ParseError;
use lazy_static::lazy_static;
use regex::Regex;

use super::message::{Commit, Footer, Header};

lazy_static! {
    /// Regex for the header line.
    static ref HEADER_REGEX: Regex = Regex::new(
        r"^(?P<type>[^\s():!]+)(?:\((?P<scope>[^()\r\n]+)\))?(?P<breaking>!)?: (?P<description>.*)$"
    )
    .expect("header regex is valid");

    /// Regex for a footer line, either `Token: value` or `Token #value`.
    static ref FOOTER_REGEX: Regex = Regex::new(
        r"^(?P<token>BREAKING CHANGE|[\w-]+)(?:: | #)(?P<value>.*\S.*)$"
    )
    .expect("footer regex is valid");
}

const BREAKING_TOKENS: &[&str] = &["BREAKING CHANGE", "BREAKING-CHANGE"];

/// Parse a raw commit message into a [`Commit`].
///
/// Either a full commit or an error is returned, never a partial result.
pub fn parse(message: &str) -> Result<Commit, ParseError> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ParseError::EmptyMessage);
    }

    let lines: Vec<&str> = message.lines().collect();
    let header = parse_header(lines[0])?;

    // Exactly one blank line separates the header from what follows.
    let content = match &lines[1..] {
        [] => &[][..],
        [separator, rest @ ..] => {
            if !is_blank(separator) || rest.first().is_some_and(|l| is_blank(l)) {
                return Err(ParseError::MissingBlankLine { section: "header" });
            }
            rest
        }
    };

    let footer_start = find_footer_block(content);
    let (body_lines, footer_lines) = match footer_start {
        Some(start) => {
            let separated = start == 0
                || (is_blank(content[start - 1]) && (start < 2 || !is_blank(content[start - 2])));
            if !separated {
                return Err(ParseError::MissingBlankLine { section: "body" });
            }
            content.split_at(start)
        }
        None => (content, &[][..]),
    };

    let body = body_lines.join("\n").trim_end().to_string();
    let footers = parse_footers(footer_lines);

    Ok(Commit {
        full_text: message.to_string(),
        header,
        body,
        full_footer: footer_lines.join("\n"),
        footers,
    })
}

fn parse_header(line: &str) -> Result<Header, ParseError> {
    let header_err = || ParseError::HeaderFormat {
        header: line.to_string(),
    };

    let captures = HEADER_REGEX.captures(line).ok_or_else(header_err)?;

    let description = captures
        .name("description")
        .map(|m| m.as_str())
        .unwrap_or_default();
    if description.trim().is_empty() {
        return Err(header_err());
    }

    Ok(Header {
        full_header: line.to_string(),
        commit_type: captures["type"].to_string(),
        scope: captures.name("scope").map(|m| m.as_str().to_string()),
        is_breaking: captures.name("breaking").is_some(),
        description: description.to_string(),
    })
}

/// Index of the first line of the trailing footer block, if any.
///
/// The block is a run of footer lines, each optionally followed by indented
/// continuation lines, that reaches the end of the message. A blank line or a
/// non-footer line resets the run.
fn find_footer_block(lines: &[&str]) -> Option<usize> {
    let mut start = None;

    for (i, line) in lines.iter().enumerate() {
        if FOOTER_REGEX.is_match(line) {
            if start.is_none() {
                start = Some(i);
            }
        } else if start.is_some() && is_continuation(line) {
            continue;
        } else {
            start = None;
        }
    }

    start
}

fn parse_footers(lines: &[&str]) -> Vec<Footer> {
    let mut footers: Vec<Footer> = Vec::new();

    for line in lines {
        if let Some(captures) = FOOTER_REGEX.captures(line) {
            let token = captures["token"].to_string();
            footers.push(Footer {
                is_breaking: BREAKING_TOKENS.contains(&token.as_str()),
                token,
                value: captures["value"].trim().to_string(),
            });
        } else if let Some(last) = footers.last_mut() {
            last.value.push('\n');
            last.value.push_str(line.trim());
        }
    }

    footers
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_continuation(line: &str) -> bool {
    !is_blank(line) && line.starts_with([' ', '\t'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only() {
        let commit = parse("feat: add new feature").unwrap();
        assert_eq!(commit.header().full_header(), "feat: add new feature");
        assert_eq!(commit.commit_type(), "feat");
        assert!(commit.header().scope().is_none());
        assert!(!commit.header().is_breaking());
        assert_eq!(commit.description(), "add new feature");
        assert_eq!(commit.body(), "");
        assert!(commit.footers().is_empty());
    }

    #[test]
    fn test_header_fields_round_trip() {
        let cases = [
            ("fix(parser)!: handle crlf", "fix", Some("parser"), true, "handle crlf"),
            ("docs(readme): typo", "docs", Some("readme"), false, "typo"),
            ("chore!: drop msrv", "chore", None, true, "drop msrv"),
            ("build: bump deps", "build", None, false, "bump deps"),
        ];

        for (input, ty, scope, breaking, desc) in cases {
            let commit = parse(input).unwrap();
            assert_eq!(commit.commit_type(), ty, "{}", input);
            assert_eq!(commit.header().scope(), scope, "{}", input);
            assert_eq!(commit.header().is_breaking(), breaking, "{}", input);
            assert_eq!(commit.description(), desc, "{}", input);
        }
    }

    #[test]
    fn test_input_is_trimmed() {
        let commit = parse("\n\n  feat: trim me  \n\n").unwrap();
        assert_eq!(commit.full_text(), "feat: trim me");
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(parse("   \n\t\n").unwrap_err(), ParseError::EmptyMessage);
    }

    #[test]
    fn test_invalid_headers() {
        for header in [
            "fixed a bug",
            "feat:missing space",
            ": no type",
            "feat(): empty scope",
            "feat(scope: unclosed",
            "feat:   ",
            "feat !: space before marker",
            "fe at: space in type",
        ] {
            let err = parse(header).unwrap_err();
            assert!(err.is_header_error(), "expected header error for {:?}", header);
        }
    }

    #[test]
    fn test_header_error_carries_line() {
        let err = parse("fixed a bug\n\nbody").unwrap_err();
        assert_eq!(
            err,
            ParseError::HeaderFormat {
                header: "fixed a bug".to_string()
            }
        );
    }

    #[test]
    fn test_missing_blank_line_after_header() {
        let err = parse("feat: x\nbody right away").unwrap_err();
        assert_eq!(err, ParseError::MissingBlankLine { section: "header" });
    }

    #[test]
    fn test_extra_blank_lines_after_header() {
        let err = parse("feat: x\n\n\n\nbody").unwrap_err();
        assert_eq!(err, ParseError::MissingBlankLine { section: "header" });

        let err = parse("feat: x\n\n  \nRefs: #1").unwrap_err();
        assert_eq!(err, ParseError::MissingBlankLine { section: "header" });
    }

    #[test]
    fn test_multi_paragraph_body() {
        let commit = parse("fix: x\n\nfirst paragraph\nstill first\n\nsecond paragraph").unwrap();
        assert_eq!(
            commit.body(),
            "first paragraph\nstill first\n\nsecond paragraph"
        );
        assert!(commit.footers().is_empty());
    }

    #[test]
    fn test_body_and_footers() {
        let msg = "feat(api): add endpoint\n\nExplain the change.\n\nRefs: #12\nReviewed-by: Jane";
        let commit = parse(msg).unwrap();
        assert_eq!(commit.body(), "Explain the change.");
        assert_eq!(commit.footer(), "Refs: #12\nReviewed-by: Jane");

        let footers = commit.footers();
        assert_eq!(footers.len(), 2);
        assert_eq!(footers[0].token(), "Refs");
        assert_eq!(footers[0].value(), "#12");
        assert_eq!(footers[1].token(), "Reviewed-by");
        assert_eq!(footers[1].value(), "Jane");
    }

    #[test]
    fn test_hash_footer() {
        let commit = parse("fix: x\n\nCloses #42").unwrap();
        assert_eq!(commit.footers()[0].token(), "Closes");
        assert_eq!(commit.footers()[0].value(), "42");
        assert_eq!(commit.body(), "");
    }

    #[test]
    fn test_breaking_change_footer() {
        let msg = "feat: x\n\nRefs: #1\nBREAKING CHANGE: config format changed\nAcked-by: Bob";
        let commit = parse(msg).unwrap();
        let breaking: Vec<_> = commit.footers().iter().filter(|f| f.is_breaking()).collect();
        assert_eq!(breaking.len(), 1);
        assert_eq!(breaking[0].value(), "config format changed");
        assert!(!commit.header().is_breaking());
    }

    #[test]
    fn test_breaking_change_hyphen_token() {
        let commit = parse("feat: x\n\nBREAKING-CHANGE: removed flag").unwrap();
        assert!(commit.footers()[0].is_breaking());
    }

    #[test]
    fn test_footer_continuation_lines() {
        let msg = "feat: x\n\nBREAKING CHANGE: first line\n  second line\n\tthird line\nRefs: #3";
        let commit = parse(msg).unwrap();
        assert_eq!(commit.footers().len(), 2);
        assert_eq!(
            commit.footers()[0].value(),
            "first line\nsecond line\nthird line"
        );
        assert_eq!(commit.footers()[1].value(), "#3");
    }

    #[test]
    fn test_footer_like_line_inside_body_stays_body() {
        let msg = "docs: x\n\nNote: see also the guide\nmore prose here\n\nRefs: #7";
        let commit = parse(msg).unwrap();
        assert_eq!(commit.body(), "Note: see also the guide\nmore prose here");
        assert_eq!(commit.footers().len(), 1);
        assert_eq!(commit.footers()[0].token(), "Refs");
    }

    #[test]
    fn test_footer_paragraph_before_prose_is_body() {
        let msg = "docs: x\n\nRefs: #1\n\nclosing prose";
        let commit = parse(msg).unwrap();
        assert_eq!(commit.body(), "Refs: #1\n\nclosing prose");
        assert!(commit.footers().is_empty());
    }

    #[test]
    fn test_missing_blank_line_before_footers() {
        let err = parse("fix: x\n\nbody text\nRefs: #9").unwrap_err();
        assert_eq!(err, ParseError::MissingBlankLine { section: "body" });
    }

    #[test]
    fn test_extra_blank_lines_before_footers() {
        let err = parse("fix: x\n\nbody text\n\n\nRefs: #9").unwrap_err();
        assert_eq!(err, ParseError::MissingBlankLine { section: "body" });
    }

    #[test]
    fn test_crlf_line_endings() {
        let commit = parse("fix(io): crlf\r\n\r\nbody\r\n\r\nRefs: #5\r\n").unwrap();
        assert_eq!(commit.description(), "crlf");
        assert_eq!(commit.body(), "body");
        assert_eq!(commit.footers()[0].value(), "#5");
    }

    #[test]
    fn test_result_is_commit_or_error() {
        for input in ["", "feat: ok", "bad header", "feat: a\nb", "feat: a\n\nb\n\nRefs: 1"] {
            let outcome = parse(input);
            assert!(outcome.is_ok() != outcome.is_err());
        }
    }

    #[test]
    fn test_long_single_line() {
        let description = "x".repeat(100_000);
        let commit = parse(&format!("feat: {}", description)).unwrap();
        assert_eq!(commit.description().len(), 100_000);
    }
}
