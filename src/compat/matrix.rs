//! Attribute version compatibility table
//!
//! Only attributes with some version restriction are listed. Anything absent
//! is supported everywhere.

use super::version::PlatformVersion;
use serde::Serialize;

/// Which releases support an attribute of a resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttributeVersionCompatibility {
    pub attribute_name: &'static str,
    pub resource_type: &'static str,
    pub supported_in_25b: bool,
    pub supported_in_25a: bool,
    pub supported_in_24_10: bool,
}

impl AttributeVersionCompatibility {
    const fn new(
        attribute_name: &'static str,
        resource_type: &'static str,
        supported_in_25b: bool,
        supported_in_25a: bool,
        supported_in_24_10: bool,
    ) -> Self {
        Self {
            attribute_name,
            resource_type,
            supported_in_25b,
            supported_in_25a,
            supported_in_24_10,
        }
    }

    pub fn supported_in(&self, version: PlatformVersion) -> bool {
        match version {
            PlatformVersion::V25B => self.supported_in_25b,
            PlatformVersion::V25A => self.supported_in_25a,
            PlatformVersion::V24_10 => self.supported_in_24_10,
        }
    }
}

const COMPATIBILITY_TABLE: &[AttributeVersionCompatibility] = &[
    // REST connections
    AttributeVersionCompatibility::new("ApplicationDiscoveryJSON", "REST", true, false, false),
    AttributeVersionCompatibility::new("CreateEntitlementJSON", "REST", true, true, false),
    AttributeVersionCompatibility::new("UpdateEntitlementJSON", "REST", true, true, false),
    AttributeVersionCompatibility::new("DeleteEntitlementJSON", "REST", true, true, false),
    AttributeVersionCompatibility::new("CreateServiceAccountJSON", "REST", true, true, false),
    AttributeVersionCompatibility::new("UpdateServiceAccountJSON", "REST", true, true, false),
    AttributeVersionCompatibility::new("RemoveServiceAccountJSON", "REST", true, true, false),
    // Active Directory connections
    AttributeVersionCompatibility::new("PamConfig", "AD", true, true, false),
    AttributeVersionCompatibility::new("EnableGroupManagement", "AD", true, false, false),
    // ADSI connections
    AttributeVersionCompatibility::new("PamConfig", "ADSI", true, true, false),
    AttributeVersionCompatibility::new("CreateUpdateMappings", "ADSI", true, true, false),
    // Entra ID connections
    AttributeVersionCompatibility::new("PamConfig", "EntraID", true, true, false),
    AttributeVersionCompatibility::new("EntitlementFilterJSON", "EntraID", true, false, false),
    // Database connections
    AttributeVersionCompatibility::new("CreateEntitlementJSON", "DB", true, true, false),
    AttributeVersionCompatibility::new("UpdateEntitlementJSON", "DB", true, true, false),
    AttributeVersionCompatibility::new("DeleteEntitlementJSON", "DB", true, true, false),
    // Salesforce connections
    AttributeVersionCompatibility::new("PamConfig", "Salesforce", true, false, false),
    // Security systems
    AttributeVersionCompatibility::new("InstantProvision", "SecuritySystem", true, true, false),
    AttributeVersionCompatibility::new("ExternalRiskConnectionJSON", "SecuritySystem", true, false, false),
    // Endpoints
    AttributeVersionCompatibility::new("AccountNameValidatorRegex", "Endpoint", true, true, false),
    AttributeVersionCompatibility::new("AllowChangePasswordSQLQuery", "Endpoint", true, true, false),
    AttributeVersionCompatibility::new("ChangePasswordAccessQuery", "Endpoint", true, false, false),
];

/// Every restricted (attribute, resource type) pair
pub fn compatibility_table() -> &'static [AttributeVersionCompatibility] {
    COMPATIBILITY_TABLE
}

/// Compare attribute names ignoring case and underscores, so the Terraform
/// name `application_discovery_json` matches `ApplicationDiscoveryJSON`.
fn same_attribute(a: &str, b: &str) -> bool {
    let mut left = a.chars().filter(|c| *c != '_');
    let mut right = b.chars().filter(|c| *c != '_');
    loop {
        match (left.next(), right.next()) {
            (None, None) => return true,
            (Some(l), Some(r)) if l.eq_ignore_ascii_case(&r) => {}
            _ => return false,
        }
    }
}

/// Table entry for an attribute of a resource type, if it is restricted
pub fn lookup(
    attribute_name: &str,
    resource_type: &str,
) -> Option<&'static AttributeVersionCompatibility> {
    COMPATIBILITY_TABLE.iter().find(|entry| {
        entry.resource_type.eq_ignore_ascii_case(resource_type)
            && same_attribute(entry.attribute_name, attribute_name)
    })
}

/// Restricted attributes of a resource type that `version` does not support
pub fn unsupported_attributes(
    version: PlatformVersion,
    resource_type: &str,
) -> Vec<&'static AttributeVersionCompatibility> {
    COMPATIBILITY_TABLE
        .iter()
        .filter(|entry| {
            entry.resource_type.eq_ignore_ascii_case(resource_type) && !entry.supported_in(version)
        })
        .collect()
}
