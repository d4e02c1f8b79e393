//! Tests for compat module

use super::*;
use crate::diag::Severity;
use crate::validate::AttrValue;
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Version Classification Tests
// ============================================================================

#[test_case("25.Brisbane", PlatformVersion::V25B ; "brisbane full name")]
#[test_case("25.B", PlatformVersion::V25B ; "brisbane short")]
#[test_case("Saviynt 25.Brisbane Patch 3", PlatformVersion::V25B ; "embedded in text")]
#[test_case("25.AMSTERDAM", PlatformVersion::V25A ; "amsterdam upper")]
#[test_case("25.a", PlatformVersion::V25A ; "amsterdam short")]
#[test_case("v24.10-hotfix", PlatformVersion::V24_10 ; "24.10 with suffix")]
fn test_classify_known(input: &str, expected: PlatformVersion) {
    assert_eq!(classify_version(input), VersionClass::Known(expected));
}

#[test]
fn test_classify_unspecified_and_unrecognized() {
    assert_eq!(classify_version(""), VersionClass::Unspecified);
    assert_eq!(
        classify_version("   "),
        VersionClass::Unrecognized("   ".to_string())
    );
    assert_eq!(
        classify_version("unknown.version"),
        VersionClass::Unrecognized("unknown.version".to_string())
    );
    assert_eq!(classify_version("23.9").known(), None);
}

#[test]
fn test_every_token_classifies_to_its_version() {
    for version in PlatformVersion::ALL {
        for token in version.tokens() {
            assert_eq!(classify_version(token).known(), Some(version), "{token}");
        }
    }
}

// ============================================================================
// Single Attribute Tests
// ============================================================================

#[test]
fn test_supported_in_25b() {
    let diags =
        validate_attribute_compatibility("25.Brisbane", "REST", "ApplicationDiscoveryJSON", "somevalue");
    assert!(diags.is_empty());
}

#[test]
fn test_unsupported_in_24_10() {
    let diags =
        validate_attribute_compatibility("24.10", "REST", "ApplicationDiscoveryJSON", "somevalue");
    assert_eq!(diags.error_count(), 1);
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.summary, "Attribute Not Supported");
    assert!(diag.detail.contains("ApplicationDiscoveryJSON"));
    assert!(diag.detail.contains("24.10"));
    assert!(diag.detail.contains("REST"));
}

#[test]
fn test_empty_version_short_circuits() {
    let diags = validate_attribute_compatibility("", "REST", "ApplicationDiscoveryJSON", "x");
    assert!(diags.is_empty());
}

#[test]
fn test_whitespace_version_is_unrecognized() {
    let diags = validate_attribute_compatibility("   ", "REST", "ApplicationDiscoveryJSON", "x");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.warning_count(), 1);

    let attrs = [("ApplicationDiscoveryJSON", "a")];
    let diags = validate_attributes("  ", "REST", attrs.iter().map(|(n, v)| (*n, *v)));
    assert_eq!(diags.warning_count(), 1);
    assert_eq!(diags.error_count(), 0);
}

#[test]
fn test_unrecognized_version_warns_once() {
    let diags =
        validate_attribute_compatibility("unknown.version", "REST", "ApplicationDiscoveryJSON", "x");
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.warning_count(), 1);
    assert_eq!(diags.error_count(), 0);
    assert!(diags.iter().next().unwrap().detail.contains("25.Brisbane"));
}

#[test]
fn test_empty_values_are_never_checked() {
    assert!(validate_attribute_compatibility("24.10", "REST", "ApplicationDiscoveryJSON", "").is_empty());
    assert!(validate_attribute_compatibility(
        "24.10",
        "REST",
        "ApplicationDiscoveryJSON",
        &None::<String>
    )
    .is_empty());
    assert!(validate_attribute_compatibility(
        "24.10",
        "REST",
        "ApplicationDiscoveryJSON",
        &AttrValue::Unknown
    )
    .is_empty());
}

#[test]
fn test_non_string_values_count_as_set() {
    let diags = validate_attribute_compatibility("25.A", "AD", "EnableGroupManagement", &false);
    assert_eq!(diags.error_count(), 1);
}

#[test]
fn test_unlisted_attribute_is_supported() {
    let diags = validate_attribute_compatibility("24.10", "REST", "ConnectionJSON", "{}");
    assert!(diags.is_empty());
}

#[test_case("application_discovery_json" ; "terraform snake case")]
#[test_case("applicationdiscoveryjson" ; "lowercase")]
fn test_attribute_name_normalization(name: &str) {
    let diags = validate_attribute_compatibility("25.A", "rest", name, "x");
    assert_eq!(diags.error_count(), 1);
}

#[test_case(PlatformVersion::V25B, true)]
#[test_case(PlatformVersion::V25A, true)]
#[test_case(PlatformVersion::V24_10, false)]
fn test_table_flags(version: PlatformVersion, expected: bool) {
    let entry = lookup("PamConfig", "AD").unwrap();
    assert_eq!(entry.supported_in(version), expected);
}

// ============================================================================
// Block Tests
// ============================================================================

#[test]
fn test_validate_attributes_block() {
    let attrs = [
        ("ApplicationDiscoveryJSON", AttrValue::from("{}")),
        ("CreateEntitlementJSON", AttrValue::from("{}")),
        ("UpdateEntitlementJSON", AttrValue::Null),
        ("ConnectionJSON", AttrValue::from("{}")),
    ];
    let diags = validate_attributes(
        "24.10",
        "REST",
        attrs.iter().map(|(name, value)| (*name, value)),
    );
    assert_eq!(diags.error_count(), 2);
    assert!(diags.iter().all(|d| d.severity == Severity::Error));
}

#[test]
fn test_validate_attributes_single_warning_for_unknown_version() {
    let attrs = [
        ("ApplicationDiscoveryJSON", "a"),
        ("CreateEntitlementJSON", "b"),
    ];
    let diags = validate_attributes("99.z", "REST", attrs.iter().map(|(n, v)| (*n, *v)));
    assert_eq!(diags.len(), 1);
    assert_eq!(diags.warning_count(), 1);
}

#[test]
fn test_unsupported_attributes_listing() {
    let names: Vec<_> = unsupported_attributes(PlatformVersion::V25A, "REST")
        .iter()
        .map(|e| e.attribute_name)
        .collect();
    assert_eq!(names, vec!["ApplicationDiscoveryJSON"]);
    assert!(unsupported_attributes(PlatformVersion::V25B, "REST").is_empty());
}

#[test]
fn test_table_has_no_duplicate_entries() {
    let table = compatibility_table();
    for (i, a) in table.iter().enumerate() {
        for b in &table[i + 1..] {
            assert!(
                !(a.attribute_name == b.attribute_name && a.resource_type == b.resource_type),
                "duplicate entry {} / {}",
                a.attribute_name,
                a.resource_type
            );
        }
    }
}
