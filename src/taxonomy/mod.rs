//! Error taxonomy
//!
//! Structured error codes, standard messages, sanitization of upstream error
//! text and per-operation logging context.

mod api;
mod category;
mod codes;
mod context;
mod sanitize;
mod standard;

pub use api::{check_api_response, ApiFailure};
pub use category::ErrorCategory;
pub use codes::{
    connection_message, security_system_message, ErrorCodeGenerator, SECURITY_SYSTEM_PREFIX,
    UNKNOWN_ERROR_MESSAGE,
};
pub use context::{OperationContext, RESERVED_FIELDS};
pub use sanitize::{
    contains_sensitive_data, sanitize_error, sanitize_message, REDACTED_MESSAGE,
    SENSITIVE_KEYWORDS,
};
pub use standard::{create_standard_error, BoxError, SecuritySystemStandardError, StandardError};
