//! Entry points behind the `manifix` subcommands.
//!
//! Each command loads the manifest once, derives new field values through
//! the [`crate::manifest`] model, and writes the file back exactly once at
//! the end. An error anywhere before the write leaves the file untouched.

pub mod fix_dependencies;
pub mod version_update;
