//! Version compatibility module
//!
//! Some attributes only exist in newer platform releases. Setting one against
//! an older release is a plan-time error rather than an opaque API failure.
//!
//! # Overview
//!
//! The compat module provides:
//! - `classify_version` - Free-form version string → known release
//! - `AttributeVersionCompatibility` - The static restriction table
//! - `validate_attribute_compatibility` / `validate_attributes` - Diagnostics for a block

mod checker;
mod matrix;
mod version;

pub use checker::{validate_attribute_compatibility, validate_attributes, MaybeEmpty};
pub use matrix::{compatibility_table, lookup, unsupported_attributes, AttributeVersionCompatibility};
pub use version::{classify_version, supported_versions_text, PlatformVersion, VersionClass};

#[cfg(test)]
mod tests;
