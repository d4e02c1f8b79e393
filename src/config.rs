//! Resource-check documents
//!
//! A resource-check document describes one Terraform resource block so it can
//! be validated offline, without a plan:
//!
//! ```yaml
//! resource: connection
//! connection_type: REST
//! platform_version: "25.B"
//! attributes:
//!   connection_name: my-rest
//!   application_discovery_json: '{"a":1}'
//! ```
//!
//! JSON documents are accepted as well since YAML is a superset.

use crate::compat::validate_attributes;
use crate::diag::Diagnostics;
use crate::error::{Error, Result};
use crate::types::{JsonValue, OptionStringExt};
use crate::validate::{rules_for, AttrValue, ResourceKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Document as written on disk, before validation
#[derive(Debug, Default, Deserialize)]
struct RawResourceCheck {
    #[serde(default)]
    resource: Option<String>,
    #[serde(default)]
    connection_type: Option<String>,
    #[serde(default)]
    platform_version: Option<String>,
    #[serde(default)]
    attributes: JsonValue,
}

/// One resource block to check
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceCheck {
    pub resource: ResourceKind,
    /// Connector type, e.g. `REST` or `AD`; only meaningful for connections
    pub connection_type: Option<String>,
    pub platform_version: Option<String>,
    /// Top-level attributes of the block
    pub attributes: BTreeMap<String, AttrValue>,
}

impl ResourceCheck {
    /// Resource type used for compatibility lookups
    ///
    /// Connections are keyed by connector type; every other resource by its
    /// kind (`SecuritySystem`, `Endpoint`, …).
    pub fn compat_resource_type(&self) -> String {
        if let Some(ref connection_type) = self.connection_type {
            return connection_type.clone();
        }
        self.resource
            .as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect()
    }

    /// Platform version to check against: the override when given, else the document's
    pub fn effective_version<'a>(&'a self, override_version: Option<&'a str>) -> &'a str {
        override_version
            .or(self.platform_version.as_deref())
            .unwrap_or_default()
    }

    /// Run the resource's rule preset and the compatibility check on every
    /// top-level attribute
    pub fn check(&self, override_version: Option<&str>) -> Diagnostics {
        let mut diags = rules_for(self.resource).validate(&self.attributes);

        let version = self.effective_version(override_version);
        let resource_type = self.compat_resource_type();
        diags.extend(validate_attributes(
            version,
            &resource_type,
            self.attributes.iter().map(|(name, value)| (name.as_str(), value)),
        ));

        debug!(
            resource = %self.resource,
            resource_type = %resource_type,
            version = version,
            attributes = self.attributes.len(),
            errors = diags.error_count(),
            warnings = diags.warning_count(),
            "Checked resource"
        );
        diags
    }
}

/// Load a resource-check document from a file
pub fn load_resource_check(path: impl AsRef<Path>) -> Result<ResourceCheck> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;

    parse_document(&content).map_err(|e| match e {
        Error::YamlParse(inner) => Error::config(format!(
            "Failed to parse resource check '{}': {}",
            path.display(),
            inner
        )),
        other => other,
    })
}

/// Load a resource-check document from a YAML or JSON string
pub fn load_resource_check_from_str(content: &str) -> Result<ResourceCheck> {
    parse_document(content).map_err(|e| match e {
        Error::YamlParse(inner) => {
            Error::config(format!("Failed to parse resource check: {inner}"))
        }
        other => other,
    })
}

fn parse_document(content: &str) -> Result<ResourceCheck> {
    let raw: RawResourceCheck = serde_yaml::from_str(content)?;

    let resource = raw
        .resource
        .none_if_empty()
        .ok_or_else(|| Error::missing_field("resource"))?
        .parse::<ResourceKind>()?;

    let attributes = match AttrValue::from(raw.attributes) {
        AttrValue::Null => BTreeMap::new(),
        AttrValue::Object(fields) => fields,
        other => {
            return Err(Error::invalid_value(
                "attributes",
                format!("expected a mapping, got {}", other.type_name()),
            ))
        }
    };

    Ok(ResourceCheck {
        resource,
        connection_type: raw.connection_type.none_if_empty(),
        platform_version: raw.platform_version.none_if_empty(),
        attributes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REST_DOC: &str = r#"
resource: connection
connection_type: REST
platform_version: "25.Amsterdam"
attributes:
  connection_name: hr-rest
  application_discovery_json: '{"a":1}'
  password: secret-one
  password_wo: secret-two
"#;

    #[test]
    fn test_load_from_str() {
        let check = load_resource_check_from_str(REST_DOC).unwrap();
        assert_eq!(check.resource, ResourceKind::Connection);
        assert_eq!(check.connection_type.as_deref(), Some("REST"));
        assert_eq!(check.platform_version.as_deref(), Some("25.Amsterdam"));
        assert_eq!(check.attributes.len(), 4);
        assert_eq!(
            check.attributes["connection_name"],
            AttrValue::from("hr-rest")
        );
    }

    #[test]
    fn test_check_reports_rules_and_compat() {
        let check = load_resource_check_from_str(REST_DOC).unwrap();
        let diags = check.check(None);

        let summaries: Vec<_> = diags.iter().map(|d| d.summary.as_str()).collect();
        assert_eq!(diags.error_count(), 2);
        assert!(summaries.contains(&"Conflicting Attributes"));
        assert!(summaries.contains(&"Attribute Not Supported"));
    }

    #[test]
    fn test_version_override() {
        let check = load_resource_check_from_str(REST_DOC).unwrap();
        assert_eq!(check.effective_version(Some("25.B")), "25.B");
        assert_eq!(check.effective_version(None), "25.Amsterdam");

        // 25.B supports discovery JSON; only the password conflict remains
        assert_eq!(check.check(Some("25.B")).error_count(), 1);
    }

    #[test]
    fn test_json_document() {
        let check = load_resource_check_from_str(
            r#"{"resource": "endpoint", "attributes": {"endpoint_name": "sap"}}"#,
        )
        .unwrap();
        assert_eq!(check.resource, ResourceKind::Endpoint);
        assert_eq!(check.compat_resource_type(), "Endpoint");

        let diags = check.check(None);
        assert_eq!(diags.error_count(), 1);
        assert_eq!(diags.iter().next().unwrap().summary, "Missing Required Attribute");
    }

    #[test]
    fn test_default_resource_type() {
        let check = load_resource_check_from_str("resource: security-system").unwrap();
        assert_eq!(check.resource, ResourceKind::SecuritySystem);
        assert_eq!(check.compat_resource_type(), "SecuritySystem");
        assert!(check.attributes.is_empty());
    }

    #[test]
    fn test_missing_resource() {
        let err = load_resource_check_from_str("attributes: {}").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "resource"));

        let err = load_resource_check_from_str("resource: ''").unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { .. }));
    }

    #[test]
    fn test_unknown_resource_kind() {
        let err = load_resource_check_from_str("resource: widget").unwrap_err();
        assert!(err.to_string().contains("unknown resource kind 'widget'"));
    }

    #[test]
    fn test_attributes_must_be_mapping() {
        let err = load_resource_check_from_str("resource: role\nattributes: [1, 2]").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(REST_DOC.as_bytes()).unwrap();

        let check = load_resource_check(file.path()).unwrap();
        assert_eq!(check.compat_resource_type(), "REST");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_resource_check("/nonexistent/check.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_load_unreadable_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_resource_check(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_invalid_yaml_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"resource: [unclosed").unwrap();

        let err = load_resource_check(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));
    }
}
