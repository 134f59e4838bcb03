//! Manifest module for manifix.
//!
//! This module models an npm package.json and provides the derivations the
//! command-line entry points apply to it: version increments, scoped range
//! pinning and peer-dependency syncing. Every derivation returns a new value
//! and leaves the manifest untouched; callers assign the result to whichever
//! field they intend to rewrite.
//!
//! # Example
//!
//! ```
//! use manifix::manifest::{parse_str, DependencyField, SemverPart};
//!
//! let mut manifest = parse_str(r#"{
//!     "version": "1.4.0",
//!     "dependencies": {"@acme/ui": "^2.1.0", "lodash": "^4.17.21"}
//! }"#).unwrap();
//!
//! manifest.version = Some(manifest.increase(SemverPart::Minor).unwrap());
//! let pinned = manifest.pinned_dependencies(&["@acme"], None);
//! manifest.set_dependency_map(DependencyField::Dependencies, pinned);
//!
//! assert_eq!(manifest.version.as_deref(), Some("1.5.0"));
//! assert_eq!(manifest.dependency_version("@acme/ui").as_deref(), Some("2.1.0"));
//! ```

pub mod dependencies;
pub mod package_json;
pub mod types;
pub mod version;

// Re-export commonly used types for convenience
pub use dependencies::{scope_matches, strip_range_operator};
pub use package_json::{
    parse_file, parse_str, to_json_string, ManifestError, ManifestResult, PackageFile,
    DEFAULT_FILE_NAME,
};
pub use types::{DependencyField, DependencyMap, Manifest, SemverPart};
pub use version::VersionPart;
