//! Redaction of sensitive text
//!
//! Upstream responses may echo credentials back. A message that mentions any
//! sensitive keyword is replaced as a whole; nothing is partially redacted.

use regex::Regex;
use std::sync::LazyLock;

/// Replacement for any message that mentions sensitive data
pub const REDACTED_MESSAGE: &str = "[REDACTED] error details withheld because they may contain sensitive data";

/// Keywords that trigger redaction, matched case-insensitively anywhere
pub const SENSITIVE_KEYWORDS: [&str; 7] = [
    "password",
    "token",
    "secret",
    "key",
    "credential",
    "auth",
    "bearer",
];

static SENSITIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("(?i)({})", SENSITIVE_KEYWORDS.join("|"))).unwrap()
});

/// Whether `message` mentions any sensitive keyword
pub fn contains_sensitive_data(message: &str) -> bool {
    SENSITIVE_PATTERN.is_match(message)
}

/// `message` unchanged, or the redaction notice when it mentions sensitive data
pub fn sanitize_message(message: &str) -> &str {
    if contains_sensitive_data(message) {
        REDACTED_MESSAGE
    } else {
        message
    }
}

/// Display text of an error, redacted as a whole if needed
pub fn sanitize_error(err: &(dyn std::error::Error + '_)) -> String {
    sanitize_message(&err.to_string()).to_string()
}
