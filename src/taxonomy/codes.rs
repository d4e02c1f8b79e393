//! Error code generation and standard messages
//!
//! Codes have the shape `{PREFIX}_{CATEGORY}{SEQUENCE}`: `AD_CONN_201` is the
//! first API-operation error of an AD connection. Sequences are assigned per
//! error site; the standard message for a code is keyed by its
//! `{CATEGORY}{SEQUENCE}` suffix.

use super::category::ErrorCategory;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Message for codes with no table entry
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Prefix used by security system error codes
pub const SECURITY_SYSTEM_PREFIX: &str = "SECSYS";

/// Builds error codes for one entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCodeGenerator {
    prefix: String,
}

impl ErrorCodeGenerator {
    /// Generator for a connector type: `AD` → `AD_CONN_…`
    pub fn for_connector(connector_type: &str) -> Self {
        Self {
            prefix: format!("{}_CONN", connector_type.trim().to_ascii_uppercase()),
        }
    }

    /// Generator for security systems: `SECSYS_…`
    pub fn for_security_system() -> Self {
        Self::with_prefix(SECURITY_SYSTEM_PREFIX)
    }

    /// Generator with an explicit prefix
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Code for the `sequence`-th error site of `category`
    pub fn generate(&self, category: ErrorCategory, sequence: u32) -> String {
        format!("{}_{}{}", self.prefix, category.bucket(), sequence)
    }
}

static CONNECTION_MESSAGES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Configuration
        ("001", "Failed to read plan data"),
        ("002", "Failed to read state data"),
        ("003", "Failed to read provider configuration"),
        ("004", "Provider client is not configured"),
        ("005", "Invalid connection configuration"),
        // Business logic
        ("101", "A connection with this name already exists"),
        ("102", "Connection name cannot be changed"),
        ("103", "Connection type cannot be changed"),
        ("104", "Invalid attribute combination"),
        ("105", "Connection not found"),
        // API operation
        ("201", "Create connection API call failed"),
        ("202", "Update connection API call failed"),
        ("203", "Read connection API call failed"),
        ("204", "Delete connection API call failed"),
        ("205", "API returned an error response"),
        // State management
        ("301", "Failed to set state"),
        ("302", "Failed to update state"),
        ("303", "Failed to remove resource from state"),
        ("304", "Failed to import state"),
        // Internal
        ("991", "Unexpected internal error"),
    ])
});

static SECURITY_SYSTEM_MESSAGES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        HashMap::from([
            ("001", "Failed to read plan data"),
            ("002", "Failed to read state data"),
            ("003", "Failed to read provider configuration"),
            ("101", "A security system with this name already exists"),
            ("102", "Security system name cannot be changed"),
            ("103", "Security system not found"),
            ("104", "Invalid provisioning configuration"),
            ("201", "Create security system API call failed"),
            ("202", "Update security system API call failed"),
            ("203", "Read security system API call failed"),
            ("204", "Delete security system API call failed"),
            ("205", "API returned an error response"),
            ("301", "Failed to set state"),
            ("302", "Failed to update state"),
            ("303", "Failed to remove resource from state"),
            ("304", "Failed to import state"),
        ])
    });

fn code_suffix(code: &str) -> &str {
    code.rsplit('_').next().unwrap_or_default()
}

/// Standard message for a connection error code
pub fn connection_message(code: &str) -> &'static str {
    CONNECTION_MESSAGES
        .get(code_suffix(code))
        .copied()
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
}

/// Standard message for a security system error code
pub fn security_system_message(code: &str) -> &'static str {
    SECURITY_SYSTEM_MESSAGES
        .get(code_suffix(code))
        .copied()
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
}
