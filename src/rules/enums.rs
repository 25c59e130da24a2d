// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Enum rules: membership of a field value in an allowed set.

use crate::commit::Commit;
use crate::error::ConfigError;

use super::rule::{Rule, RuleSetting};

const ALLOW_EMPTY: &str = "allow-empty";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Type,
    Scope,
    FooterToken,
}

/// Checks a field against a case-sensitive list of allowed values.
#[derive(Debug, Clone)]
pub struct EnumRule {
    name: &'static str,
    target: Target,
    allowed: Vec<String>,
    allow_empty: bool,
}

impl EnumRule {
    /// `type-enum`
    pub fn types() -> Self {
        Self::new("type-enum", Target::Type)
    }

    /// `scope-enum`, honours the `allow-empty` flag.
    pub fn scopes() -> Self {
        Self::new("scope-enum", Target::Scope)
    }

    /// `footer-enum`, checks every footer token.
    pub fn footer_tokens() -> Self {
        Self::new("footer-enum", Target::FooterToken)
    }

    fn new(name: &'static str, target: Target) -> Self {
        Self {
            name,
            target,
            allowed: Vec::new(),
            allow_empty: false,
        }
    }

    fn is_allowed(&self, value: &str) -> bool {
        self.allowed
            .binary_search_by(|probe| probe.as_str().cmp(value))
            .is_ok()
    }

    fn not_allowed(&self, what: &str, value: &str) -> String {
        format!(
            "{} '{}' is not allowed, you can use one of [{}]",
            what,
            value,
            self.allowed.join(", ")
        )
    }
}

impl Rule for EnumRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&mut self, setting: &RuleSetting) -> Result<(), ConfigError> {
        let known: &[&str] = match self.target {
            Target::Scope => &[ALLOW_EMPTY],
            _ => &[],
        };
        setting.check_flags(self.name, known)?;

        let mut allowed = setting.string_list_arg(self.name)?;
        allowed.sort();
        allowed.dedup();
        self.allowed = allowed;
        self.allow_empty = setting.flag(ALLOW_EMPTY);
        Ok(())
    }

    fn validate(&self, commit: &Commit) -> Option<String> {
        match self.target {
            Target::Type => {
                let ty = commit.commit_type();
                (!self.is_allowed(ty)).then(|| self.not_allowed("type", ty))
            }
            Target::Scope => match commit.header().scope() {
                None if self.allow_empty => None,
                None => Some("empty scope is not allowed".to_string()),
                Some(scope) => (!self.is_allowed(scope)).then(|| self.not_allowed("scope", scope)),
            },
            Target::FooterToken => commit
                .footers()
                .iter()
                .find(|f| !self.is_allowed(f.token()))
                .map(|f| self.not_allowed("footer token", f.token())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured(mut rule: EnumRule, values: Vec<&str>) -> EnumRule {
        rule.apply(&RuleSetting::with_argument(values)).unwrap();
        rule
    }

    #[test]
    fn test_type_enum() {
        let rule = configured(EnumRule::types(), vec!["fix", "feat"]);

        let ok = Commit::parse("feat: add x").unwrap();
        assert!(rule.validate(&ok).is_none());

        let bad = Commit::parse("chore: tidy").unwrap();
        let message = rule.validate(&bad).unwrap();
        assert!(message.contains("'chore'"));
        assert!(message.contains("feat"));
        assert!(message.contains("fix"));
    }

    #[test]
    fn test_type_enum_is_case_sensitive() {
        let rule = configured(EnumRule::types(), vec!["feat"]);
        let commit = Commit::parse("Feat: add x").unwrap();
        assert!(rule.validate(&commit).is_some());
    }

    #[test]
    fn test_scope_enum_empty_scope() {
        let commit = Commit::parse("feat: no scope").unwrap();

        let strict = configured(EnumRule::scopes(), vec!["core"]);
        assert_eq!(
            strict.validate(&commit).as_deref(),
            Some("empty scope is not allowed")
        );

        let mut lenient = EnumRule::scopes();
        lenient
            .apply(&RuleSetting::with_argument(vec!["core"]).with_flag(ALLOW_EMPTY, true))
            .unwrap();
        assert!(lenient.validate(&commit).is_none());
    }

    #[test]
    fn test_scope_enum_membership() {
        let rule = configured(EnumRule::scopes(), vec!["core", "cli"]);
        assert!(rule
            .validate(&Commit::parse("fix(cli): x").unwrap())
            .is_none());
        assert!(rule
            .validate(&Commit::parse("fix(web): x").unwrap())
            .unwrap()
            .contains("scope 'web'"));
    }

    #[test]
    fn test_footer_enum() {
        let rule = configured(EnumRule::footer_tokens(), vec!["Refs", "BREAKING CHANGE"]);
        let ok = Commit::parse("feat: x\n\nRefs: #1\nBREAKING CHANGE: gone").unwrap();
        assert!(rule.validate(&ok).is_none());

        let bad = Commit::parse("feat: x\n\nRefs: #1\nSigned-off-by: me").unwrap();
        assert!(rule.validate(&bad).unwrap().contains("Signed-off-by"));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let mut rule = EnumRule::types();
        assert!(rule.apply(&RuleSetting::with_argument(3i64)).is_err());

        let mut rule = EnumRule::types();
        let setting = RuleSetting::with_argument(vec!["feat"]).with_flag(ALLOW_EMPTY, true);
        assert!(rule.apply(&setting).is_err());
    }
}
