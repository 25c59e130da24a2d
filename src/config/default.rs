// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::{LintConfig, RuleConfig};

/// Commit types allowed by the default `type-enum`.
pub const DEFAULT_TYPES: &[&str] = &[
    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build", "ci", "chore", "revert",
];

/// Get the default configuration.
///
/// Every built-in rule is listed; only a standard subset is enabled. With
/// `only_enabled` the disabled entries are left out.
pub fn default_config(only_enabled: bool) -> LintConfig {
    let entries = [
        // Enabled
        ("header-min-length", RuleConfig::new("error", 10i64)),
        ("header-max-length", RuleConfig::new("error", 50i64)),
        ("body-max-line-length", RuleConfig::new("error", 72i64)),
        ("footer-max-line-length", RuleConfig::new("error", 72i64)),
        (
            "type-enum",
            RuleConfig::new("error", DEFAULT_TYPES.to_vec()),
        ),
        // Disabled
        ("body-min-length", RuleConfig::new("error", 0i64).disabled()),
        ("body-max-length", RuleConfig::new("error", -1i64).disabled()),
        ("footer-min-length", RuleConfig::new("error", 0i64).disabled()),
        ("footer-max-length", RuleConfig::new("error", -1i64).disabled()),
        ("type-min-length", RuleConfig::new("error", 0i64).disabled()),
        ("type-max-length", RuleConfig::new("error", -1i64).disabled()),
        ("scope-min-length", RuleConfig::new("error", 0i64).disabled()),
        ("scope-max-length", RuleConfig::new("error", -1i64).disabled()),
        ("description-min-length", RuleConfig::new("error", 0i64).disabled()),
        ("description-max-length", RuleConfig::new("error", -1i64).disabled()),
        (
            "scope-enum",
            RuleConfig::new("error", Vec::<&str>::new())
                .with_flag("allow-empty", true)
                .disabled(),
        ),
        (
            "footer-enum",
            RuleConfig::new("error", Vec::<&str>::new()).disabled(),
        ),
        ("type-charset", RuleConfig::new("error", "a-z").disabled()),
        ("scope-charset", RuleConfig::new("error", "a-z/-").disabled()),
    ];

    let rules = entries
        .into_iter()
        .filter(|(_, rule)| rule.enabled || !only_enabled)
        .map(|(name, rule)| (name.to_string(), rule))
        .collect();

    LintConfig {
        min_version: Some(crate::version::VERSION.to_string()),
        rules,
        ..LintConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Registry;

    #[test]
    fn test_default_config() {
        let config = default_config(false);
        assert_eq!(config.formatter, "default");
        assert!(config.rules["header-max-length"].enabled);
        assert!(!config.rules["body-min-length"].enabled);
        assert_eq!(config.min_version.as_deref(), Some(crate::version::VERSION));
    }

    #[test]
    fn test_enabled_rules_come_first() {
        let config = default_config(false);
        let names: Vec<_> = config.rules.keys().take(5).map(String::as_str).collect();
        assert_eq!(
            names,
            vec![
                "header-min-length",
                "header-max-length",
                "body-max-line-length",
                "footer-max-line-length",
                "type-enum",
            ]
        );
    }

    #[test]
    fn test_default_config_lists_every_builtin_rule() {
        let config = default_config(false);
        for name in Registry::builtin().rule_names() {
            assert!(config.rules.contains_key(name), "missing {}", name);
        }
    }

    #[test]
    fn test_only_enabled() {
        let config = default_config(true);
        assert!(config.rules.values().all(|r| r.enabled));
        assert_eq!(config.rules.len(), 5);
    }
}
