// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The `min-version` gate.

use semver::Version;

use crate::error::ConfigError;

use super::schema::LintConfig;

/// Parse a `min-version` value. A leading `v` is accepted.
fn parse_version(version: &str) -> Result<Version, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidVersion {
        version: version.to_string(),
        reason,
    };

    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(invalid("version is empty".to_string()));
    }

    Version::parse(trimmed.strip_prefix('v').unwrap_or(trimmed))
        .map_err(|e| invalid(format!("should be in semver format ({})", e)))
}

/// Check that `required` is valid and not newer than `current`.
pub fn check_version(required: &str, current: &str) -> Result<(), ConfigError> {
    let required_version = parse_version(required)?;
    let current_version = parse_version(current)?;

    if current_version < required_version {
        return Err(ConfigError::VersionTooOld {
            required: required.to_string(),
            current: current.to_string(),
        });
    }
    Ok(())
}

/// Check the configuration's `min-version` against this build.
///
/// A configuration without the key is accepted.
pub fn check_min_version(config: &LintConfig) -> Result<(), ConfigError> {
    match &config.min_version {
        Some(required) => check_version(required, crate::version::VERSION),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_older_or_equal_requirement_passes() {
        assert!(check_version("0.9.0", "1.0.0").is_ok());
        assert!(check_version("1.0.0", "1.0.0").is_ok());
        assert!(check_version("v0.10.0", "1.0.0").is_ok());
    }

    #[test]
    fn test_newer_requirement_fails() {
        let err = check_version("1.2.0", "1.0.0").unwrap_err();
        assert_eq!(
            err,
            ConfigError::VersionTooOld {
                required: "1.2.0".to_string(),
                current: "1.0.0".to_string(),
            }
        );
        let message = err.to_string();
        assert!(message.contains("1.2.0"));
        assert!(message.contains("1.0.0"));
    }

    #[test]
    fn test_invalid_requirement() {
        assert!(matches!(
            check_version("", "1.0.0"),
            Err(ConfigError::InvalidVersion { .. })
        ));
        assert!(matches!(
            check_version("one.two", "1.0.0"),
            Err(ConfigError::InvalidVersion { .. })
        ));
    }

    #[test]
    fn test_missing_key_is_accepted() {
        assert!(check_min_version(&LintConfig::default()).is_ok());

        let config = LintConfig {
            min_version: Some(crate::version::VERSION.to_string()),
            ..LintConfig::default()
        };
        assert!(check_min_version(&config).is_ok());
    }
}
