//! Per-operation logging context
//!
//! Every resource operation gets a fresh correlation id. Start, end and
//! failure events share the same base fields so they can be joined in logs.

use super::sanitize::sanitize_error;
use super::standard::{SecuritySystemStandardError, StandardError};
use crate::canonical::to_canonical_string;
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::{error, info};
use uuid::Uuid;

/// Field names owned by the context; extras cannot override them
pub const RESERVED_FIELDS: [&str; 6] = [
    "correlation_id",
    "resource",
    "operation",
    "connector_type",
    "connection_name",
    "duration_ms",
];

/// Context for one resource operation
#[derive(Debug, Clone)]
pub struct OperationContext {
    correlation_id: Uuid,
    resource: String,
    operation: String,
    connector_type: String,
    connection_name: Option<String>,
    started_at: DateTime<Utc>,
    start: Instant,
}

impl OperationContext {
    pub fn new(
        resource: impl Into<String>,
        operation: impl Into<String>,
        connector_type: impl Into<String>,
    ) -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
            resource: resource.into(),
            operation: operation.into(),
            connector_type: connector_type.into(),
            connection_name: None,
            started_at: Utc::now(),
            start: Instant::now(),
        }
    }

    #[must_use]
    pub fn with_connection_name(mut self, name: impl Into<String>) -> Self {
        self.connection_name = Some(name.into());
        self
    }

    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn connector_type(&self) -> &str {
        &self.connector_type
    }

    pub fn connection_name(&self) -> Option<&str> {
        self.connection_name.as_deref()
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Milliseconds since the context was created
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Base fields merged with `extra`; base fields win on collision
    pub fn fields(&self, extra: &BTreeMap<String, JsonValue>) -> BTreeMap<String, JsonValue> {
        let mut fields: BTreeMap<String, JsonValue> = extra
            .iter()
            .filter(|(k, _)| !RESERVED_FIELDS.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        fields.insert(
            "correlation_id".into(),
            JsonValue::String(self.correlation_id.to_string()),
        );
        fields.insert("resource".into(), JsonValue::String(self.resource.clone()));
        fields.insert("operation".into(), JsonValue::String(self.operation.clone()));
        fields.insert(
            "connector_type".into(),
            JsonValue::String(self.connector_type.clone()),
        );
        if let Some(ref name) = self.connection_name {
            fields.insert("connection_name".into(), JsonValue::String(name.clone()));
        }
        fields
    }

    /// Merged field set rendered as canonical JSON
    pub(crate) fn fields_json(&self, extra: &BTreeMap<String, JsonValue>) -> String {
        let fields: serde_json::Map<String, JsonValue> = self.fields(extra).into_iter().collect();
        to_canonical_string(&JsonValue::Object(fields)).unwrap_or_else(|_| "{}".to_string())
    }

    /// Log the start of the operation
    pub fn log_operation_start(&self, extra: &BTreeMap<String, JsonValue>) {
        info!(
            correlation_id = %self.correlation_id,
            started_at = %self.started_at.to_rfc3339(),
            fields = %self.fields_json(extra),
            "Starting operation"
        );
    }

    /// Log successful completion with the elapsed time
    pub fn log_operation_end(&self, extra: &BTreeMap<String, JsonValue>) {
        info!(
            correlation_id = %self.correlation_id,
            duration_ms = self.elapsed_ms(),
            fields = %self.fields_json(extra),
            "Operation completed"
        );
    }

    /// Log a failed operation. Standard errors also contribute their code and category.
    pub fn log_operation_error(
        &self,
        err: &(dyn std::error::Error + 'static),
        extra: &BTreeMap<String, JsonValue>,
    ) {
        let (code, category) = if let Some(e) = err.downcast_ref::<StandardError>() {
            (e.code.as_str(), e.category.as_str())
        } else if let Some(e) = err.downcast_ref::<SecuritySystemStandardError>() {
            (e.code.as_str(), e.category.as_str())
        } else {
            ("", "")
        };

        error!(
            correlation_id = %self.correlation_id,
            duration_ms = self.elapsed_ms(),
            error_code = code,
            category = category,
            error = %sanitize_error(err),
            fields = %self.fields_json(extra),
            "Operation failed"
        );
    }
}
