// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Turning a configuration into a linter and a formatter.

use crate::error::{ConfigError, Result};
use crate::format::Formatter;
use crate::rules::{Linter, Registry, Rule};

use super::schema::LintConfig;
use super::version::check_min_version;

/// Check a configuration, collecting every problem instead of stopping at
/// the first.
pub fn validate_config(config: &LintConfig, registry: &Registry) -> Vec<ConfigError> {
    let mut errors = Vec::new();

    if let Err(err) = check_min_version(config) {
        errors.push(err);
    }

    if config.formatter.is_empty() {
        errors.push(ConfigError::MissingFormatter);
    } else if registry.get_formatter(&config.formatter).is_none() {
        errors.push(ConfigError::UnknownFormatter {
            name: config.formatter.clone(),
        });
    }

    for (name, rule_config) in &config.rules {
        if let Err(err) = rule_config.severity(name) {
            errors.push(err);
        }

        let Some(mut rule) = registry.get_rule(name) else {
            errors.push(ConfigError::UnknownRule { name: name.clone() });
            continue;
        };

        if let Err(err) = rule.apply(&rule_config.setting()) {
            errors.push(err);
        }
    }

    errors
}

/// Configured instances of every enabled rule, in configuration order.
pub fn enabled_rules(
    config: &LintConfig,
    registry: &Registry,
) -> std::result::Result<Vec<Box<dyn Rule>>, ConfigError> {
    let mut rules = Vec::new();

    for name in config.enabled_rule_names() {
        let mut rule = registry
            .get_rule(name)
            .ok_or_else(|| ConfigError::UnknownRule {
                name: name.to_string(),
            })?;
        rule.apply(&config.rules[name].setting())?;
        rules.push(rule);
    }

    Ok(rules)
}

/// Build a linter for the configuration.
pub fn new_linter(config: &LintConfig, registry: &Registry) -> Result<Linter> {
    check_min_version(config)?;
    let rules = enabled_rules(config, registry)?;
    Linter::new(config, rules)
}

/// The formatter named by the configuration.
pub fn get_formatter<'r>(config: &LintConfig, registry: &'r Registry) -> Result<&'r dyn Formatter> {
    check_min_version(config)?;

    if config.formatter.is_empty() {
        return Err(ConfigError::MissingFormatter.into());
    }

    registry.get_formatter(&config.formatter).ok_or_else(|| {
        ConfigError::UnknownFormatter {
            name: config.formatter.clone(),
        }
        .into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_config, RuleConfig};
    use crate::error::CommitlintError;

    #[test]
    fn test_default_config_is_valid() {
        let errors = validate_config(&default_config(false), &Registry::builtin());
        assert!(errors.is_empty(), "{:?}", errors);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let mut config = LintConfig {
            formatter: "xml".to_string(),
            ..LintConfig::default()
        };
        config
            .rules
            .insert("no-such-rule".to_string(), RuleConfig::new("error", 1i64));
        config
            .rules
            .insert("header-max-length".to_string(), RuleConfig::new("fatal", "72"));

        let errors = validate_config(&config, &Registry::builtin());
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ConfigError::UnknownFormatter {
            name: "xml".to_string()
        }));
        assert!(errors.contains(&ConfigError::UnknownRule {
            name: "no-such-rule".to_string()
        }));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::UnknownSeverity { .. })));
        assert!(errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidArgument { .. })));
    }

    #[test]
    fn test_validate_checks_disabled_rules() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "type-enum".to_string(),
            RuleConfig::new("error", 3i64).disabled(),
        );
        assert_eq!(validate_config(&config, &Registry::builtin()).len(), 1);
    }

    #[test]
    fn test_enabled_rules_skip_disabled() {
        let rules = enabled_rules(&default_config(false), &Registry::builtin()).unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
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
    fn test_new_linter_rejects_bad_argument() {
        let mut config = LintConfig::default();
        config.rules.insert(
            "header-max-length".to_string(),
            RuleConfig::new("error", vec!["72"]),
        );
        let err = new_linter(&config, &Registry::builtin()).unwrap_err();
        assert!(matches!(
            err,
            CommitlintError::Config(ConfigError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_new_linter_rejects_unknown_rule() {
        let mut config = LintConfig::default();
        config
            .rules
            .insert("subject-case".to_string(), RuleConfig::new("error", 1i64));
        let err = new_linter(&config, &Registry::builtin()).unwrap_err();
        assert!(matches!(
            err,
            CommitlintError::Config(ConfigError::UnknownRule { .. })
        ));
    }

    #[test]
    fn test_new_linter_rejects_unknown_severity() {
        let mut config = LintConfig::default();
        config
            .rules
            .insert("header-max-length".to_string(), RuleConfig::new("info", 72i64));
        let err = new_linter(&config, &Registry::builtin()).unwrap_err();
        assert!(matches!(
            err,
            CommitlintError::Config(ConfigError::UnknownSeverity { .. })
        ));
    }

    #[test]
    fn test_get_formatter() {
        let registry = Registry::builtin();
        let config = LintConfig {
            formatter: "json".to_string(),
            ..LintConfig::default()
        };
        assert_eq!(get_formatter(&config, &registry).unwrap().name(), "json");

        let config = LintConfig {
            formatter: "xml".to_string(),
            ..LintConfig::default()
        };
        assert!(get_formatter(&config, &registry).is_err());
    }

    #[test]
    fn test_min_version_gate() {
        let registry = Registry::builtin();
        let config = LintConfig {
            min_version: Some("999.0.0".to_string()),
            ..default_config(true)
        };

        let too_old = |err: CommitlintError| {
            matches!(err, CommitlintError::Config(ConfigError::VersionTooOld { .. }))
        };
        assert!(too_old(new_linter(&config, &registry).unwrap_err()));
        assert!(too_old(get_formatter(&config, &registry).unwrap_err()));

        let errors = validate_config(&config, &registry);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("999.0.0"));
    }

    #[test]
    fn test_invalid_min_version_is_reported() {
        let config = LintConfig {
            min_version: Some("latest".to_string()),
            ..LintConfig::default()
        };
        let errors = validate_config(&config, &Registry::builtin());
        assert!(matches!(
            errors.as_slice(),
            [ConfigError::InvalidVersion { .. }]
        ));
    }
}
