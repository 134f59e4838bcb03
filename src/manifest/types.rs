//! Shared types for manifest manipulation.
//!
//! This module defines the typed view of a package.json file. Fields the
//! tool rewrites get named slots; everything else rides along untouched in
//! a catch-all map so that a load/store cycle is lossless.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::package_json::{ManifestError, ManifestResult};

/// Insertion-ordered mapping from package name to version range.
pub type DependencyMap = IndexMap<String, String>;

/// Represents the structure of a package.json file.
///
/// The top-level key order of the source document is remembered and
/// reproduced on serialization. Typed fields that were not present in the
/// source are emitted after the original keys, followed by any catch-all
/// fields added later.
///
/// # Example
///
/// ```
/// use manifix::manifest::Manifest;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let manifest: Manifest = serde_json::from_str(json).unwrap();
/// assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
/// assert_eq!(manifest.other["name"], "my-app");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Manifest {
    /// The version of the package, e.g. `v1.2.3` or `1.0.0-beta1`.
    pub version: Option<String>,

    /// Production dependencies required at runtime.
    pub dependencies: Option<DependencyMap>,

    /// Development-only dependencies (testing, building, etc.).
    pub dev_dependencies: Option<DependencyMap>,

    /// Peer dependencies that the host package must provide.
    pub peer_dependencies: Option<DependencyMap>,

    /// Optional dependencies that enhance functionality if available.
    pub optional_dependencies: Option<DependencyMap>,

    /// Every other top-level field, kept verbatim.
    pub other: Map<String, Value>,

    field_order: Vec<String>,
}

/// The dependency maps a manifest can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DependencyField {
    /// `dependencies`
    #[default]
    Dependencies,
    /// `devDependencies`
    DevDependencies,
    /// `peerDependencies`
    PeerDependencies,
    /// `optionalDependencies`
    OptionalDependencies,
}

impl DependencyField {
    /// All dependency fields in canonical package.json order.
    pub const ALL: [DependencyField; 4] = [
        DependencyField::Dependencies,
        DependencyField::DevDependencies,
        DependencyField::PeerDependencies,
        DependencyField::OptionalDependencies,
    ];

    /// Returns the JSON key of this field.
    pub fn key(&self) -> &'static str {
        match self {
            DependencyField::Dependencies => "dependencies",
            DependencyField::DevDependencies => "devDependencies",
            DependencyField::PeerDependencies => "peerDependencies",
            DependencyField::OptionalDependencies => "optionalDependencies",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for DependencyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for DependencyField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| {
            format!(
                "Unknown dependency field: '{}'. Valid fields: dependencies, devDependencies, peerDependencies, optionalDependencies",
                s
            )
        })
    }
}

/// The part of a `major.minor.patch` version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SemverPart {
    Major,
    #[default]
    Minor,
    Patch,
}

impl SemverPart {
    /// Position of this part in the dot-separated version.
    pub fn index(&self) -> usize {
        match self {
            SemverPart::Major => 0,
            SemverPart::Minor => 1,
            SemverPart::Patch => 2,
        }
    }
}

impl std::str::FromStr for SemverPart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(SemverPart::Major),
            "minor" => Ok(SemverPart::Minor),
            "patch" => Ok(SemverPart::Patch),
            _ => Err(format!(
                "Unknown semver part: '{}'. Valid parts: major, minor, patch",
                s
            )),
        }
    }
}

impl fmt::Display for SemverPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemverPart::Major => write!(f, "major"),
            SemverPart::Minor => write!(f, "minor"),
            SemverPart::Patch => write!(f, "patch"),
        }
    }
}

impl Manifest {
    #[cfg(test)]
    pub(crate) fn from_value(value: Value) -> ManifestResult<Self> {
        match value {
            Value::Object(map) => Self::try_from(map),
            _ => Err(ManifestError::InvalidField {
                field: "<root>".to_string(),
                expected: "an object",
            }),
        }
    }

    /// Returns the dependency map stored under `field`, if present.
    pub fn dependency_map(&self, field: DependencyField) -> Option<&DependencyMap> {
        match field {
            DependencyField::Dependencies => self.dependencies.as_ref(),
            DependencyField::DevDependencies => self.dev_dependencies.as_ref(),
            DependencyField::PeerDependencies => self.peer_dependencies.as_ref(),
            DependencyField::OptionalDependencies => self.optional_dependencies.as_ref(),
        }
    }

    /// Replaces the dependency map stored under `field`.
    pub fn set_dependency_map(&mut self, field: DependencyField, map: DependencyMap) {
        *self.slot_mut(field) = Some(map);
    }

    fn slot_mut(&mut self, field: DependencyField) -> &mut Option<DependencyMap> {
        match field {
            DependencyField::Dependencies => &mut self.dependencies,
            DependencyField::DevDependencies => &mut self.dev_dependencies,
            DependencyField::PeerDependencies => &mut self.peer_dependencies,
            DependencyField::OptionalDependencies => &mut self.optional_dependencies,
        }
    }

    /// Removes the value serialized under `key`, typed or not.
    fn take_field(&mut self, key: &str) -> Option<Value> {
        if key == "version" {
            return self.version.take().map(Value::String);
        }
        match DependencyField::from_key(key) {
            Some(field) => self.slot_mut(field).take().map(dependency_map_to_value),
            None => self.other.shift_remove(key),
        }
    }
}

fn dependency_map_to_value(map: DependencyMap) -> Value {
    Value::Object(
        map.into_iter()
            .map(|(name, version)| (name, Value::String(version)))
            .collect(),
    )
}

fn dependency_map_from_value(field: DependencyField, value: Value) -> ManifestResult<DependencyMap> {
    let invalid = || ManifestError::InvalidField {
        field: field.key().to_string(),
        expected: "an object of version strings",
    };

    let Value::Object(entries) = value else {
        return Err(invalid());
    };

    entries
        .into_iter()
        .map(|(name, version)| match version {
            Value::String(version) => Ok((name, version)),
            _ => Err(invalid()),
        })
        .collect()
}

impl TryFrom<Map<String, Value>> for Manifest {
    type Error = ManifestError;

    fn try_from(content: Map<String, Value>) -> ManifestResult<Self> {
        let mut manifest = Manifest::default();

        for (key, value) in content {
            manifest.field_order.push(key.clone());

            if key == "version" {
                match value {
                    Value::String(version) => manifest.version = Some(version),
                    _ => {
                        return Err(ManifestError::InvalidField {
                            field: key,
                            expected: "a string",
                        })
                    }
                }
            } else if let Some(field) = DependencyField::from_key(&key) {
                let map = dependency_map_from_value(field, value)?;
                manifest.set_dependency_map(field, map);
            } else {
                manifest.other.insert(key, value);
            }
        }

        Ok(manifest)
    }
}

impl From<Manifest> for Map<String, Value> {
    fn from(mut manifest: Manifest) -> Self {
        let order = std::mem::take(&mut manifest.field_order);
        let typed_keys =
            std::iter::once("version").chain(DependencyField::ALL.into_iter().map(|f| f.key()));

        let mut content = Map::new();
        for key in order.iter().map(String::as_str).chain(typed_keys) {
            if content.contains_key(key) {
                continue;
            }
            if let Some(value) = manifest.take_field(key) {
                content.insert(key.to_string(), value);
            }
        }

        for (key, value) in manifest.other {
            content.entry(key).or_insert(value);
        }

        content
    }
}
