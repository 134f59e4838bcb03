//! `manifix fix-dependencies`: pin scoped ranges and sync peer dependencies.

use crate::config::FixDependenciesConfig;
use crate::manifest::{DependencyField, ManifestResult, PackageFile};

/// Rewrites the dependency maps of `package.json` as configured.
///
/// With `enforce_pinning`, `dependencies` and `devDependencies` (when
/// present) have range operators stripped from entries inside the
/// configured scopes. With `update_peer_dependencies`, `peerDependencies`
/// (when present) take the ranges declared in the other two maps. The file
/// is written back even when nothing changed.
pub fn run(config: FixDependenciesConfig) -> ManifestResult<()> {
    let mut package = PackageFile::from_dir(&config.working_directory, None)?;
    let manifest = &mut package.manifest;

    if config.enforce_pinning {
        tracing::debug!(scopes = %config.scopes, "enforcing pinned versions");
        for field in [DependencyField::Dependencies, DependencyField::DevDependencies] {
            if manifest.dependency_map(field).is_some() {
                let pinned = manifest.pinned_dependencies(config.scopes.as_slice(), Some(field));
                manifest.set_dependency_map(field, pinned);
            }
        }
    }

    if config.update_peer_dependencies && manifest.peer_dependencies.is_some() {
        tracing::debug!("syncing peer dependencies");
        let peers = manifest.updated_peer_dependencies();
        manifest.set_dependency_map(DependencyField::PeerDependencies, peers);
    }

    package.write()
}
