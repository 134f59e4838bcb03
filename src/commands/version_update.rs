//! `manifix version-update`: derive and store a new package version.

use crate::config::VersionUpdateConfig;
use crate::manifest::{ManifestError, ManifestResult, PackageFile};

/// Computes the new version, writes it to `package.json` and returns it.
///
/// The version is either copied from the dependency named by
/// `version_from_package` (range operator stripped) or obtained by
/// incrementing the configured semver part. Prefix and suffix are wrapped
/// around the result verbatim.
pub fn run(config: VersionUpdateConfig) -> ManifestResult<String> {
    let mut package = PackageFile::from_dir(&config.working_directory, None)?;

    let version = match config.source_package() {
        Some(name) => package
            .manifest
            .dependency_version(name)
            .filter(|version| !version.is_empty())
            .ok_or_else(|| ManifestError::MissingDependency {
                name: name.to_string(),
            })?,
        None => package.manifest.increase(config.semver)?,
    };
    let version = format!("{}{}{}", config.version_prefix, version, config.version_suffix);

    tracing::info!(
        previous = package.manifest.version.as_deref().unwrap_or_default(),
        %version,
        "updating package version"
    );
    package.manifest.version = Some(version.clone());
    package.write()?;

    Ok(version)
}
