//! Version-part arithmetic.
//!
//! A version segment such as `v1-alpha1` is split on its first run of
//! digits into a prefix (`v`), a number (`1`) and a suffix (`-alpha1`).
//! This is not a semver grammar: only the first numeric run of a segment
//! is ever touched, so `1a2b3` bumps to `2a2b3`.

use std::fmt;

use super::package_json::{ManifestError, ManifestResult};
use super::types::{Manifest, SemverPart};

/// One dot-separated segment of a version, decomposed around its first
/// numeric run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionPart<'a> {
    /// Leading non-digit characters.
    pub prefix: &'a str,
    /// The first run of digits.
    pub value: u64,
    /// Everything after the first run of digits.
    pub suffix: &'a str,
}

impl<'a> VersionPart<'a> {
    /// Decomposes `segment` around its first run of ASCII digits.
    ///
    /// # Example
    ///
    /// ```
    /// use manifix::manifest::VersionPart;
    ///
    /// let part = VersionPart::parse("v1-alpha1").unwrap();
    /// assert_eq!(part.prefix, "v");
    /// assert_eq!(part.value, 1);
    /// assert_eq!(part.suffix, "-alpha1");
    /// ```
    pub fn parse(segment: &'a str) -> ManifestResult<Self> {
        let start = segment
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| ManifestError::MalformedVersion {
                segment: segment.to_string(),
            })?;
        let end = segment[start..]
            .find(|c: char| !c.is_ascii_digit())
            .map_or(segment.len(), |offset| start + offset);

        let value = segment[start..end]
            .parse()
            .map_err(|_| ManifestError::VersionOverflow {
                segment: segment.to_string(),
            })?;

        Ok(Self {
            prefix: &segment[..start],
            value,
            suffix: &segment[end..],
        })
    }

    /// Returns this part with its number incremented by one.
    pub fn bumped(self) -> ManifestResult<Self> {
        let value = self
            .value
            .checked_add(1)
            .ok_or_else(|| ManifestError::VersionOverflow {
                segment: self.to_string(),
            })?;
        Ok(Self { value, ..self })
    }
}

impl fmt::Display for VersionPart<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.value, self.suffix)
    }
}

impl Manifest {
    /// Computes the version obtained by incrementing `part` of the
    /// manifest's `version` field. The manifest itself is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use manifix::manifest::{package_json::parse_str, SemverPart};
    ///
    /// let manifest = parse_str(r#"{"version": "v0.1.2"}"#).unwrap();
    /// assert_eq!(manifest.increase(SemverPart::Major).unwrap(), "v1.1.2");
    /// assert_eq!(manifest.increase(SemverPart::Patch).unwrap(), "v0.1.3");
    /// ```
    pub fn increase(&self, part: SemverPart) -> ManifestResult<String> {
        let version = self
            .version
            .as_deref()
            .ok_or(ManifestError::MissingField("version"))?;

        let mut segments: Vec<String> = version.split('.').map(str::to_string).collect();
        let segment = segments
            .get_mut(part.index())
            .ok_or_else(|| ManifestError::MissingVersionSegment {
                version: version.to_string(),
                part,
            })?;

        let bumped = VersionPart::parse(segment)?.bumped()?.to_string();
        tracing::debug!(%version, %part, from = %segment, to = %bumped, "increased version part");
        *segment = bumped;

        Ok(segments.join("."))
    }
}
