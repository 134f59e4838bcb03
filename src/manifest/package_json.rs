//! Loading and storing npm package.json files.
//!
//! This module provides the file-backed side of the manifest model: reading
//! a package.json from a directory, and writing it back with 2-space
//! indentation and its original key order.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::types::{Manifest, SemverPart};

/// Default manifest file name inside a package directory.
pub const DEFAULT_FILE_NAME: &str = "package.json";

/// Errors that can occur while reading, deriving or writing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// A dependency was requested by name but is not declared.
    #[error("Missing dependency version {name}")]
    MissingDependency { name: String },

    /// A field the operation needs is absent from the manifest.
    #[error("package.json has no '{0}' field")]
    MissingField(&'static str),

    /// The version has fewer dot-separated segments than the requested part needs.
    #[error("Version '{version}' has no {part} segment")]
    MissingVersionSegment { version: String, part: SemverPart },

    /// A version segment contains no digits to increment.
    #[error("Version segment '{segment}' has no numeric component")]
    MalformedVersion { segment: String },

    /// A version segment's number does not fit, or would overflow when incremented.
    #[error("Version segment '{segment}' is out of range")]
    VersionOverflow { segment: String },

    /// A known field holds a value of the wrong JSON type.
    #[error("Invalid package.json: field '{field}' must be {expected}")]
    InvalidField {
        field: String,
        expected: &'static str,
    },

    /// Failed to read or write the manifest file.
    #[error("Failed to access {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse or serialize JSON content.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for manifest operations.
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Parses a package.json file from a file path.
///
/// # Arguments
///
/// * `path` - Path to the package.json file
///
/// # Returns
///
/// A `ManifestResult` containing the parsed `Manifest`, or `FileAccess` if the
/// file cannot be read and `Json`/`InvalidField` if its content is not a manifest.
///
/// # Example
///
/// ```ignore
/// use std::path::Path;
/// use manifix::manifest::package_json::parse_file;
///
/// let manifest = parse_file(Path::new("package.json")).unwrap();
/// println!("Version: {:?}", manifest.version);
/// ```
pub fn parse_file(path: &Path) -> ManifestResult<Manifest> {
    let content = fs::read_to_string(path).map_err(|source| ManifestError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(&content)
}

/// Parses a package.json from a string.
///
/// # Arguments
///
/// * `content` - JSON string content of the package.json
///
/// # Returns
///
/// A `ManifestResult` containing the parsed `Manifest` or an error.
///
/// # Example
///
/// ```
/// use manifix::manifest::package_json::parse_str;
///
/// let json = r#"{"name": "my-app", "version": "1.0.0"}"#;
/// let manifest = parse_str(json).unwrap();
/// assert_eq!(manifest.version.as_deref(), Some("1.0.0"));
/// ```
pub fn parse_str(content: &str) -> ManifestResult<Manifest> {
    let content: Map<String, Value> = serde_json::from_str(content)?;
    Manifest::try_from(content)
}

/// Serializes a manifest with 2-space indentation and no trailing newline.
///
/// Numbers are written with the exact text they were parsed from.
pub fn to_json_string(manifest: &Manifest) -> ManifestResult<String> {
    Ok(serde_json::to_string_pretty(manifest)?)
}

/// A manifest bound to the file it was loaded from.
#[derive(Debug, Clone)]
pub struct PackageFile {
    /// Absolute or working-directory-relative path of the file.
    pub path: PathBuf,

    /// The parsed content.
    pub manifest: Manifest,
}

impl PackageFile {
    /// Loads `file` (default `package.json`) from `directory`.
    ///
    /// # Arguments
    ///
    /// * `directory` - Directory holding the manifest
    /// * `file` - File name inside `directory`, `None` for `package.json`
    pub fn from_dir(directory: &Path, file: Option<&str>) -> ManifestResult<Self> {
        let path = directory.join(file.unwrap_or(DEFAULT_FILE_NAME));
        let manifest = parse_file(&path)?;
        tracing::debug!(path = %path.display(), "loaded manifest");
        Ok(Self { path, manifest })
    }

    /// Overwrites the file with the current manifest content.
    pub fn write(&self) -> ManifestResult<()> {
        let content = to_json_string(&self.manifest)?;
        fs::write(&self.path, content).map_err(|source| ManifestError::FileAccess {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), "wrote manifest");
        Ok(())
    }
}
