//! Upstream API failure descriptions
//!
//! The platform reports failures either as a non-200 status or as a 200 with
//! a non-zero `errorCode` in the body. Messages are enriched from the JSON
//! body when it parses and always sanitized before they leave this module.

use super::sanitize::sanitize_message;
use crate::types::JsonValue;
use serde::Deserialize;
use thiserror::Error;

/// Error fields the platform puts in response bodies
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "errorCode")]
    error_code: Option<JsonValue>,
}

impl ApiErrorBody {
    fn text(&self) -> Option<&str> {
        [self.msg.as_deref(), self.message.as_deref()]
            .into_iter()
            .flatten()
            .find(|m| !m.is_empty())
    }

    fn code(&self) -> Option<String> {
        match self.error_code.as_ref()? {
            JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

fn is_success_code(code: &str) -> bool {
    code.trim() == "0"
}

/// A failed API call, ready to show to a user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiFailure {
    pub status: u16,
    pub error_code: Option<String>,
    pub message: String,
}

impl ApiFailure {
    /// Describe a response, using the JSON body when possible and the status line otherwise
    pub fn from_response(status: u16, reason: &str, body: &str) -> Self {
        let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
        let error_code = parsed.as_ref().and_then(ApiErrorBody::code);
        let text = parsed.as_ref().and_then(ApiErrorBody::text);

        let status_line = if reason.is_empty() {
            format!("HTTP {status}")
        } else {
            format!("HTTP {status} {reason}")
        };

        let message = match (text, &error_code) {
            (Some(text), Some(code)) => format!("{status_line} (errorCode {code}): {text}"),
            (Some(text), None) => format!("{status_line}: {text}"),
            (None, Some(code)) => format!("{status_line} (errorCode {code})"),
            (None, None) => status_line,
        };

        Self {
            status,
            error_code,
            message: sanitize_message(&message).to_string(),
        }
    }
}

/// Inspect a response: non-200 status or a non-zero `errorCode` is a failure
pub fn check_api_response(status: u16, reason: &str, body: &str) -> Result<(), ApiFailure> {
    if status != 200 {
        return Err(ApiFailure::from_response(status, reason, body));
    }

    let code = serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.code());
    match code {
        Some(code) if !is_success_code(&code) => Err(ApiFailure::from_response(status, reason, body)),
        _ => Ok(()),
    }
}
