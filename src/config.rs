//! Configuration for the command-line entry points.
//!
//! Each entry point takes one configuration struct, built once in `main`
//! and passed by value. Every key can be given as a flag or through the
//! `INPUT_<KEY>` environment variable that GitHub Actions sets for action
//! inputs (e.g. `INPUT_SEMVER`, `INPUT_ENFORCEPINNING`).

use std::path::PathBuf;

use clap::{ArgAction, Args};
use serde_json::Value;

use crate::manifest::SemverPart;

/// Configuration for `manifix version-update`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct VersionUpdateConfig {
    /// Copy the version from this dependency instead of incrementing
    #[arg(long, env = "INPUT_VERSIONFROMPACKAGE")]
    pub version_from_package: Option<String>,

    /// Literal text prepended to the computed version
    #[arg(long, env = "INPUT_VERSIONPREFIX", default_value = "")]
    pub version_prefix: String,

    /// Literal text appended to the computed version
    #[arg(long, env = "INPUT_VERSIONSUFFIX", default_value = "")]
    pub version_suffix: String,

    /// Version part to increment (major, minor, patch)
    #[arg(long, env = "INPUT_SEMVER", default_value = "minor")]
    pub semver: SemverPart,

    /// Directory containing package.json
    #[arg(short = 'C', long, env = "INPUT_PWD", default_value = ".")]
    pub working_directory: PathBuf,
}

impl VersionUpdateConfig {
    /// The dependency to copy the version from, ignoring an empty value.
    pub fn source_package(&self) -> Option<&str> {
        self.version_from_package
            .as_deref()
            .filter(|name| !name.is_empty())
    }
}

/// Configuration for `manifix fix-dependencies`.
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct FixDependenciesConfig {
    /// Whitespace-separated scopes to pin, e.g. "@acme my-lib"
    #[arg(long, env = "INPUT_SCOPES", default_value = "")]
    pub scopes: ScopeList,

    /// Strip range operators from dependencies within the scopes
    #[arg(long, env = "INPUT_ENFORCEPINNING", default_value = "false",
        action = ArgAction::Set, value_parser = parse_flag)]
    pub enforce_pinning: bool,

    /// Sync peerDependencies with the declared dependency ranges
    #[arg(long, env = "INPUT_UPDATEPEERDEPENDENCIES", default_value = "false",
        action = ArgAction::Set, value_parser = parse_flag)]
    pub update_peer_dependencies: bool,

    /// Directory containing package.json
    #[arg(short = 'C', long, env = "INPUT_PWD", default_value = ".")]
    pub working_directory: PathBuf,
}

/// A whitespace-separated list of dependency scopes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeList(pub Vec<String>);

impl ScopeList {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl std::str::FromStr for ScopeList {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ScopeList(s.split_whitespace().map(str::to_string).collect()))
    }
}

impl std::fmt::Display for ScopeList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

/// Parses a flag value as a JSON literal and applies JSON truthiness.
///
/// `true`, `1`, `"yes"` and `[]` are truthy; `false`, `0`, `""` and `null`
/// are falsy, as is blank input. Text that is not JSON is rejected.
pub fn parse_flag(s: &str) -> Result<bool, String> {
    if s.trim().is_empty() {
        return Ok(false);
    }
    let value: Value = serde_json::from_str(s.trim())
        .map_err(|e| format!("expected a JSON literal such as true or false, got '{}': {}", s, e))?;

    Ok(match value {
        Value::Null => false,
        Value::Bool(flag) => flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct VersionUpdateCli {
        #[command(flatten)]
        config: VersionUpdateConfig,
    }

    #[derive(Parser)]
    struct FixDependenciesCli {
        #[command(flatten)]
        config: FixDependenciesConfig,
    }

    #[test]
    fn test_parse_flag_truthiness() {
        assert_eq!(parse_flag("true"), Ok(true));
        assert_eq!(parse_flag("false"), Ok(false));
        assert_eq!(parse_flag("1"), Ok(true));
        assert_eq!(parse_flag("0"), Ok(false));
        assert_eq!(parse_flag("null"), Ok(false));
        assert_eq!(parse_flag("\"\""), Ok(false));
        assert_eq!(parse_flag(" true "), Ok(true));
        assert_eq!(parse_flag(""), Ok(false));
        assert!(parse_flag("yes").is_err());
    }

    #[test]
    fn test_scope_list_from_str() {
        let scopes: ScopeList = "  @acme\tmy-lib\n@other ".parse().unwrap();
        assert_eq!(scopes.as_slice(), ["@acme", "my-lib", "@other"]);
        assert_eq!(scopes.to_string(), "@acme my-lib @other");

        let empty: ScopeList = "".parse().unwrap();
        assert!(empty.as_slice().is_empty());
    }

    #[test]
    fn test_version_update_flags() {
        let cli = VersionUpdateCli::parse_from([
            "manifix",
            "--semver",
            "patch",
            "--version-prefix",
            "v",
            "--version-suffix=-rc",
            "-C",
            "packages/app",
        ]);

        assert_eq!(cli.config.semver, SemverPart::Patch);
        assert_eq!(cli.config.version_prefix, "v");
        assert_eq!(cli.config.version_suffix, "-rc");
        assert_eq!(cli.config.working_directory, PathBuf::from("packages/app"));
        assert!(cli.config.source_package().is_none());
    }

    #[test]
    fn test_version_update_rejects_unknown_semver() {
        assert!(VersionUpdateCli::try_parse_from(["manifix", "--semver", "build"]).is_err());
    }

    #[test]
    fn test_source_package_ignores_empty() {
        let config = VersionUpdateConfig {
            version_from_package: Some(String::new()),
            ..VersionUpdateConfig::default()
        };
        assert!(config.source_package().is_none());

        let config = VersionUpdateConfig {
            version_from_package: Some("@acme/core".to_string()),
            ..VersionUpdateConfig::default()
        };
        assert_eq!(config.source_package(), Some("@acme/core"));
    }

    #[test]
    fn test_fix_dependencies_flags() {
        let cli = FixDependenciesCli::parse_from([
            "manifix",
            "--scopes",
            "@acme my-lib",
            "--enforce-pinning",
            "true",
            "--update-peer-dependencies",
            "0",
        ]);

        assert_eq!(cli.config.scopes.as_slice(), ["@acme", "my-lib"]);
        assert!(cli.config.enforce_pinning);
        assert!(!cli.config.update_peer_dependencies);
        assert_eq!(cli.config.working_directory, PathBuf::from("."));
    }

    #[test]
    fn test_fix_dependencies_rejects_non_json_flag() {
        assert!(
            FixDependenciesCli::try_parse_from(["manifix", "--enforce-pinning", "yes"]).is_err()
        );
    }
}
