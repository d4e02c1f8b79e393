//! Integration tests for resource checks
//!
//! Tests the full flow: resource-check file → rule presets + version compatibility → diagnostics

use pretty_assertions::assert_eq;
use saviynt_provider_core::compat::validate_attribute_compatibility;
use saviynt_provider_core::validate::{rules_for, AttrValue, ResourceKind};
use saviynt_provider_core::{load_resource_check, load_resource_check_from_str, Severity};
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// Connection Checks
// ============================================================================

#[test]
fn test_rest_connection_on_older_release() {
    let yaml = r#"
resource: connection
connection_type: REST
platform_version: "24.10"
attributes:
  connection_name: hr-rest
  create_entitlement_json: '{"call":[]}'
  application_discovery_json: '{"a":1}'
  client_secret: null
"#;
    let check = load_resource_check_from_str(yaml).unwrap();
    let diags = check.check(None);

    assert_eq!(diags.error_count(), 2);
    let attributes: Vec<String> = diags
        .errors()
        .filter_map(|d| d.attribute.as_ref().map(ToString::to_string))
        .collect();
    assert_eq!(
        attributes,
        vec!["application_discovery_json", "create_entitlement_json"]
    );
}

#[test]
fn test_connection_clean_on_latest_release() {
    let yaml = r#"
resource: connection
connection_type: AD
attributes:
  connection_name: corp-ad
  pam_config: '{"Connection":"AD"}'
  enable_group_management: "true"
"#;
    let check = load_resource_check_from_str(yaml).unwrap();
    assert!(check.check(Some("25.Brisbane")).is_empty());

    // Amsterdam lacks group management
    let diags = check.check(Some("25.A"));
    assert_eq!(diags.error_count(), 1);
    assert!(diags
        .to_string()
        .contains("Attribute 'enable_group_management' is not supported in Saviynt version 25.Amsterdam"));
}

#[test]
fn test_unrecognized_version_single_warning() {
    let yaml = r#"
resource: connection
connection_type: EntraID
attributes:
  pam_config: '{}'
  entitlement_filter_json: '{}'
"#;
    let check = load_resource_check_from_str(yaml).unwrap();
    let diags = check.check(Some("unknown.version"));

    assert_eq!(diags.len(), 1);
    let warning = diags.iter().next().unwrap();
    assert_eq!(warning.severity, Severity::Warning);
    assert_eq!(warning.summary, "Unsupported Saviynt Version");
    assert!(!diags.has_error());
}

// ============================================================================
// Owner Block Checks
// ============================================================================

#[test]
fn test_role_owner_rules_from_file() {
    let mut owners = String::new();
    for rank in ["1", "2", "3", "4", "5", "6"] {
        owners.push_str(&format!("    - owner_name: alice\n      rank: \"{rank}\"\n"));
    }
    owners.push_str("    - owner_name: bob\n      rank: \"0\"\n");

    let mut file = NamedTempFile::new().unwrap();
    write!(file, "resource: role\nattributes:\n  role_name: auditors\n  owners:\n{owners}").unwrap();

    let check = load_resource_check(file.path()).unwrap();
    assert_eq!(check.resource, ResourceKind::Role);

    let diags = check.check(None);
    let summaries: Vec<&str> = diags.iter().map(|d| d.summary.as_str()).collect();
    assert_eq!(summaries, vec!["Value Out of Range", "Too Many Entries"]);
    assert!(diags.to_string().contains("'alice' appears 6 times"));
}

#[test]
fn test_presets_share_one_accessor_shape() {
    let config = AttrValue::from(serde_json::json!({
        "endpoint_key": 42,
        "endpoint": "sap-endpoint"
    }));
    let diags = rules_for(ResourceKind::DynamicAttribute).validate(&config);
    assert_eq!(diags.error_count(), 1);
    assert_eq!(diags.iter().next().unwrap().summary, "Conflicting Attributes");
}

// ============================================================================
// Single-attribute Compatibility
// ============================================================================

#[test]
fn test_single_attribute_compatibility() {
    let diags =
        validate_attribute_compatibility("24.10", "SecuritySystem", "InstantProvision", "true");
    assert_eq!(diags.error_count(), 1);

    let diags =
        validate_attribute_compatibility("24.10", "SecuritySystem", "InstantProvision", "");
    assert!(diags.is_empty());

    let diags = validate_attribute_compatibility("", "SecuritySystem", "InstantProvision", "true");
    assert!(diags.is_empty());
}
