//! manifix - Bump package.json versions and normalize dependency ranges
//!
//! This crate provides a typed package.json model with version-increment,
//! range-pinning and peer-dependency-sync derivations, plus the two
//! command-line entry points built on top of it.

pub mod commands;
pub mod config;
pub mod manifest;
