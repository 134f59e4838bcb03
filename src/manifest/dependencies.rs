//! Dependency map derivations.
//!
//! Every operation here is a pure function of the manifest: it returns a
//! freshly built [`DependencyMap`] and leaves the manifest as it was. The
//! caller decides which field, if any, receives the result.

use super::types::{DependencyField, DependencyMap, Manifest};

/// Removes any leading run of `^` and `~` range operators.
///
/// ```
/// use manifix::manifest::strip_range_operator;
///
/// assert_eq!(strip_range_operator("^1.2.3"), "1.2.3");
/// assert_eq!(strip_range_operator("~2.3.4"), "2.3.4");
/// assert_eq!(strip_range_operator(">=3.0.0"), ">=3.0.0");
/// ```
pub fn strip_range_operator(version: &str) -> &str {
    version.trim_start_matches(['^', '~'])
}

/// Returns true if `name` is `scope` itself or lives under `scope/`.
pub fn scope_matches(scope: &str, name: &str) -> bool {
    if scope.is_empty() {
        return false;
    }
    name == scope
        || name
            .strip_prefix(scope)
            .is_some_and(|rest| rest.starts_with('/'))
}

impl Manifest {
    /// Merges `dependencies` and `devDependencies` into one map.
    ///
    /// On a name collision the `devDependencies` range wins, while the entry
    /// keeps the position it had in `dependencies`.
    pub fn merged_dependencies(&self) -> DependencyMap {
        let mut merged = self.dependencies.clone().unwrap_or_default();
        if let Some(dev) = &self.dev_dependencies {
            merged.extend(dev.iter().map(|(name, version)| (name.clone(), version.clone())));
        }
        merged
    }

    /// Looks up the version of `name` with its range operator stripped.
    pub fn dependency_version(&self, name: &str) -> Option<String> {
        self.merged_dependencies()
            .get(name)
            .map(|version| strip_range_operator(version).to_string())
    }

    /// Returns the map stored under `field` (default `dependencies`) with the
    /// range operator stripped from every entry matching one of `scopes`.
    ///
    /// # Arguments
    ///
    /// * `scopes` - Bare names or `@org` prefixes whose entries get pinned
    /// * `field` - Dependency map to read, `None` for `dependencies`
    ///
    /// # Returns
    ///
    /// A `DependencyMap` in the field's original order. A missing field
    /// yields an empty map.
    ///
    /// # Example
    ///
    /// ```
    /// use manifix::manifest::package_json::parse_str;
    ///
    /// let manifest = parse_str(r#"{
    ///     "dependencies": {"@foo/a": "^1.0.0", "@bar/b": "~2.0.0"}
    /// }"#).unwrap();
    ///
    /// let pinned = manifest.pinned_dependencies(&["@foo"], None);
    /// assert_eq!(pinned["@foo/a"], "1.0.0");
    /// assert_eq!(pinned["@bar/b"], "~2.0.0");
    /// ```
    pub fn pinned_dependencies<S: AsRef<str>>(
        &self,
        scopes: &[S],
        field: Option<DependencyField>,
    ) -> DependencyMap {
        let field = field.unwrap_or_default();
        let Some(map) = self.dependency_map(field) else {
            return DependencyMap::new();
        };

        map.iter()
            .map(|(name, version)| {
                let pinned = if scopes.iter().any(|scope| scope_matches(scope.as_ref(), name)) {
                    strip_range_operator(version)
                } else {
                    version.as_str()
                };
                if pinned != version.as_str() {
                    tracing::debug!(%field, %name, from = %version, to = %pinned, "pinned dependency");
                }
                (name.clone(), pinned.to_string())
            })
            .collect()
    }

    /// Returns `peerDependencies` with every entry that is also declared in
    /// `dependencies`/`devDependencies` set to that declared range.
    ///
    /// A missing `peerDependencies` field yields an empty map.
    pub fn updated_peer_dependencies(&self) -> DependencyMap {
        let Some(peers) = &self.peer_dependencies else {
            return DependencyMap::new();
        };
        let resolved = self.merged_dependencies();

        peers
            .iter()
            .map(|(name, version)| match resolved.get(name) {
                Some(declared) => {
                    tracing::debug!(%name, from = %version, to = %declared, "synced peer dependency");
                    (name.clone(), declared.clone())
                }
                None => (name.clone(), version.clone()),
            })
            .collect()
    }
}
