//! Standard errors surfaced by resource handlers

use super::category::ErrorCategory;
use super::codes::{connection_message, security_system_message};
use super::sanitize::sanitize_error;
use crate::diag::Diagnostic;
use std::fmt;

/// Boxed original error carried as the source
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A failed connection operation
#[derive(Debug)]
pub struct StandardError {
    pub code: String,
    pub message: &'static str,
    pub operation: String,
    pub connector_type: String,
    pub connection_name: String,
    pub category: ErrorCategory,
    source: Option<BoxError>,
}

impl StandardError {
    /// Build an error for `code`, deriving category and message from it
    pub fn new(
        connector_type: impl Into<String>,
        code: impl Into<String>,
        operation: impl Into<String>,
        connection_name: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self {
            category: ErrorCategory::from_code(&code),
            message: connection_message(&code),
            code,
            operation: operation.into(),
            connector_type: connector_type.into(),
            connection_name: connection_name.into(),
            source: None,
        }
    }

    /// Attach the underlying error
    #[must_use]
    pub fn with_source(mut self, err: impl Into<BoxError>) -> Self {
        self.source = Some(err.into());
        self
    }

    /// Error diagnostic carrying the rendered (sanitized) message
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(format!("[{}] {}", self.code, self.message), self.to_string())
    }
}

impl fmt::Display for StandardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} during {} operation for {} connection '{}'",
            self.code, self.message, self.operation, self.connector_type, self.connection_name
        )?;
        if let Some(ref source) = self.source {
            write!(f, ": {}", sanitize_error(&**source))?;
        }
        Ok(())
    }
}

impl std::error::Error for StandardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}

/// Build a [`StandardError`], optionally wrapping the original failure
pub fn create_standard_error(
    connector_type: &str,
    code: &str,
    operation: &str,
    connection_name: &str,
    original: Option<BoxError>,
) -> StandardError {
    let err = StandardError::new(connector_type, code, operation, connection_name);
    match original {
        Some(source) => err.with_source(source),
        None => err,
    }
}

/// A failed security system operation
#[derive(Debug)]
pub struct SecuritySystemStandardError {
    pub code: String,
    pub message: &'static str,
    pub operation: String,
    pub security_system: String,
    pub category: ErrorCategory,
    source: Option<BoxError>,
}

impl SecuritySystemStandardError {
    pub fn new(
        code: impl Into<String>,
        operation: impl Into<String>,
        security_system: impl Into<String>,
    ) -> Self {
        let code = code.into();
        Self {
            category: ErrorCategory::from_code(&code),
            message: security_system_message(&code),
            code,
            operation: operation.into(),
            security_system: security_system.into(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_source(mut self, err: impl Into<BoxError>) -> Self {
        self.source = Some(err.into());
        self
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(format!("[{}] {}", self.code, self.message), self.to_string())
    }
}

impl fmt::Display for SecuritySystemStandardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} during {} operation for security system '{}'",
            self.code, self.message, self.operation, self.security_system
        )?;
        if let Some(ref source) = self.source {
            write!(f, ": {}", sanitize_error(&**source))?;
        }
        Ok(())
    }
}

impl std::error::Error for SecuritySystemStandardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| &**e as &(dyn std::error::Error + 'static))
    }
}
