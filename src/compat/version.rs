//! Platform version classification
//!
//! Version strings are free-form ("Saviynt 25.Brisbane Patch 3"). A single
//! classifier maps them to a known release or reports them as unrecognized;
//! every compatibility decision goes through it.

use serde::Serialize;
use std::fmt;

/// Platform releases the compatibility table knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PlatformVersion {
    /// 24.10
    V24_10,
    /// 25.Amsterdam
    V25A,
    /// 25.Brisbane
    V25B,
}

impl PlatformVersion {
    pub const ALL: [PlatformVersion; 3] = [
        PlatformVersion::V25B,
        PlatformVersion::V25A,
        PlatformVersion::V24_10,
    ];

    /// Display label, e.g. `25.Brisbane`
    pub fn label(self) -> &'static str {
        match self {
            PlatformVersion::V25B => "25.Brisbane",
            PlatformVersion::V25A => "25.Amsterdam",
            PlatformVersion::V24_10 => "24.10",
        }
    }

    /// Lowercase tokens that identify this release inside a version string
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            PlatformVersion::V25B => &["25.brisbane", "25.b"],
            PlatformVersion::V25A => &["25.amsterdam", "25.a"],
            PlatformVersion::V24_10 => &["24.10"],
        }
    }
}

impl fmt::Display for PlatformVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a version string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionClass {
    /// No version given
    Unspecified,
    /// Matches a known release
    Known(PlatformVersion),
    /// Non-empty but matches no known release
    Unrecognized(String),
}

impl VersionClass {
    pub fn known(&self) -> Option<PlatformVersion> {
        match self {
            VersionClass::Known(version) => Some(*version),
            _ => None,
        }
    }
}

/// Classify a free-form version string by case-insensitive substring match
///
/// Only the empty string is unspecified; whitespace-only input is unrecognized.
pub fn classify_version(version: &str) -> VersionClass {
    if version.is_empty() {
        return VersionClass::Unspecified;
    }

    let lowered = version.to_lowercase();
    PlatformVersion::ALL
        .into_iter()
        .find(|v| v.tokens().iter().any(|token| lowered.contains(token)))
        .map_or_else(
            || VersionClass::Unrecognized(version.to_string()),
            VersionClass::Known,
        )
}

/// Human-readable list of recognized versions, for messages
pub fn supported_versions_text() -> String {
    PlatformVersion::ALL
        .iter()
        .map(|v| v.label())
        .collect::<Vec<_>>()
        .join(", ")
}
