//! Error category buckets

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Two-digit category bucket embedded in every error code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Plan, state or provider configuration could not be read
    Configuration,
    /// Duplicate names, immutable field changes, invalid combinations
    BusinessLogic,
    /// Downstream API call failed
    ApiOperation,
    /// Terraform state could not be written
    StateManagement,
    /// Unexpected internal failure
    Internal,
}

impl ErrorCategory {
    pub const ALL: [ErrorCategory; 5] = [
        ErrorCategory::Configuration,
        ErrorCategory::BusinessLogic,
        ErrorCategory::ApiOperation,
        ErrorCategory::StateManagement,
        ErrorCategory::Internal,
    ];

    /// Two-digit bucket code
    pub fn bucket(self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "00",
            ErrorCategory::BusinessLogic => "10",
            ErrorCategory::ApiOperation => "20",
            ErrorCategory::StateManagement => "30",
            ErrorCategory::Internal => "99",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::BusinessLogic => "business_logic",
            ErrorCategory::ApiOperation => "api_operation",
            ErrorCategory::StateManagement => "state_management",
            ErrorCategory::Internal => "internal",
        }
    }

    /// Category embedded in an error code such as `AD_CONN_201`
    ///
    /// Only the `00`/`10`/`20`/`30` buckets are recognized; anything else
    /// (including malformed codes) is treated as a configuration error.
    pub fn from_code(code: &str) -> Self {
        let suffix = code.rsplit('_').next().unwrap_or_default();
        match suffix.get(..2) {
            Some("10") => ErrorCategory::BusinessLogic,
            Some("20") => ErrorCategory::ApiOperation,
            Some("30") => ErrorCategory::StateManagement,
            _ => ErrorCategory::Configuration,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "config" | "configuration" | "00" => Ok(ErrorCategory::Configuration),
            "business" | "business_logic" | "10" => Ok(ErrorCategory::BusinessLogic),
            "api" | "api_operation" | "20" => Ok(ErrorCategory::ApiOperation),
            "state" | "state_management" | "30" => Ok(ErrorCategory::StateManagement),
            "internal" | "99" => Ok(ErrorCategory::Internal),
            _ => Err(Error::unknown_category(s)),
        }
    }
}
