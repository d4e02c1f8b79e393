//! Static translation tables
//!
//! Every table is built once on first use and never mutated. Tables are only
//! reachable through [`TranslationTable::map`] and the accessor functions below.

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Immutable mapping from a canonical key to its display/API value
#[derive(Debug)]
pub struct TranslationMap {
    name: &'static str,
    entries: BTreeMap<&'static str, &'static str>,
}

impl TranslationMap {
    fn new(name: &'static str, pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            name,
            entries: pairs.iter().copied().collect(),
        }
    }

    /// Table name used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Mapped value for an exact, case-sensitive key
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    /// First key (in key order) whose value equals `value`
    pub fn key_for(&self, value: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(k, _)| *k)
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.entries.values().any(|v| *v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Values mapped from more than one key. Reverse lookups on these are ambiguous.
    pub fn duplicate_values(&self) -> Vec<&'static str> {
        let mut seen: BTreeMap<&'static str, usize> = BTreeMap::new();
        for value in self.entries.values() {
            *seen.entry(*value).or_default() += 1;
        }
        seen.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(value, _)| value)
            .collect()
    }
}

// ============================================================================
// Tables
// ============================================================================

static ATTRIBUTE_TYPES: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "attribute_type",
        &[
            ("STRING", "STRING"),
            ("NUMBER", "NUMBER"),
            ("ENUM", "ENUM"),
            ("BOOLEAN", "BOOLEAN"),
            ("DATE", "DATE"),
            ("PASSWORD", "PASSWORD"),
            ("CHECKBOX", "CHECK BOX"),
            ("LARGE_TEXT", "LARGE TEXT"),
            ("SINGLE", "SINGLE SELECT FROM LIST"),
            ("MULTIPLE", "MULTIPLE SELECT FROM LIST"),
            ("SINGLE_SQL", "SINGLE SELECT FROM SQL QUERY"),
            ("MULTIPLE_SQL", "MULTIPLE SELECT FROM SQL QUERY"),
        ],
    )
});

static PRIVILEGE_ATTRIBUTE_TYPES: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "privilege_attribute_type",
        &[
            ("BOOLEAN", "Boolean"),
            ("CHECKBOX", "Check Box"),
            ("DATE", "Date"),
            ("LIST", "List"),
            ("MULTIPLE_SELECT", "Multiple select from list"),
            ("MULTIPLE_SQL", "Multiple select from SQL query"),
            ("NUMBER", "Number"),
            ("PASSWORD", "Password"),
            ("SINGLE_SQL", "Single select from SQL query"),
            ("STRING", "String"),
        ],
    )
});

static OWNER_TYPES: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new("owner_type", &[("USER", "1"), ("USERGROUP", "2")])
});

static ROLE_TYPES: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "role_type",
        &[
            ("ENABLER", "1"),
            ("TRANSACTIONAL", "2"),
            ("FIREFIGHTERID", "3"),
            ("FIREFIGHTER INSTANCE", "4"),
            ("ENTERPRISE", "5"),
            ("APPLICATION", "6"),
            ("ENTITLEMENT", "7"),
        ],
    )
});

static RISK_LEVELS: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "risk_level",
        &[
            ("NONE", "0"),
            ("VERY_LOW", "1"),
            ("LOW", "2"),
            ("MEDIUM", "3"),
            ("HIGH", "4"),
            ("VERY_HIGH", "5"),
        ],
    )
});

static SOD_CRITICALITY: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "sod_criticality",
        &[
            ("NONE", "0"),
            ("LOW", "1"),
            ("MEDIUM", "2"),
            ("HIGH", "3"),
            ("CRITICAL", "4"),
        ],
    )
});

static CONFIDENTIALITY: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "confidentiality",
        &[
            ("NONE", "0"),
            ("VERY_LOW", "1"),
            ("LOW", "2"),
            ("MEDIUM", "3"),
            ("HIGH", "4"),
            ("CRITICAL", "5"),
        ],
    )
});

static REQUEST_FORM_DISPLAY: LazyLock<TranslationMap> = LazyLock::new(|| {
    TranslationMap::new(
        "request_form_display",
        &[
            ("CREATE_USER", "Create New User"),
            ("MODIFY_USER", "Modify Existing User"),
            ("REQUEST_ACCESS", "Request Access"),
            ("REMOVE_ACCESS", "Remove Access"),
            ("REQUEST_ROLE", "Request Role"),
            ("SERVICE_ACCOUNT", "Request Service Account"),
        ],
    )
});

// ============================================================================
// Table Catalog
// ============================================================================

/// Named translation tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationTable {
    AttributeType,
    PrivilegeAttributeType,
    OwnerType,
    RoleType,
    RiskLevel,
    SodCriticality,
    Confidentiality,
    RequestFormDisplay,
}

impl TranslationTable {
    pub const ALL: [TranslationTable; 8] = [
        TranslationTable::AttributeType,
        TranslationTable::PrivilegeAttributeType,
        TranslationTable::OwnerType,
        TranslationTable::RoleType,
        TranslationTable::RiskLevel,
        TranslationTable::SodCriticality,
        TranslationTable::Confidentiality,
        TranslationTable::RequestFormDisplay,
    ];

    /// The table's contents
    pub fn map(self) -> &'static TranslationMap {
        match self {
            TranslationTable::AttributeType => &*ATTRIBUTE_TYPES,
            TranslationTable::PrivilegeAttributeType => &*PRIVILEGE_ATTRIBUTE_TYPES,
            TranslationTable::OwnerType => &*OWNER_TYPES,
            TranslationTable::RoleType => &*ROLE_TYPES,
            TranslationTable::RiskLevel => &*RISK_LEVELS,
            TranslationTable::SodCriticality => &*SOD_CRITICALITY,
            TranslationTable::Confidentiality => &*CONFIDENTIALITY,
            TranslationTable::RequestFormDisplay => &*REQUEST_FORM_DISPLAY,
        }
    }

    pub fn name(self) -> &'static str {
        self.map().name()
    }
}

impl fmt::Display for TranslationTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TranslationTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        TranslationTable::ALL
            .into_iter()
            .find(|t| t.name() == normalized)
            .ok_or_else(|| Error::unknown_table(s))
    }
}

/// Dynamic attribute and endpoint attribute types
pub fn attribute_types() -> &'static TranslationMap {
    &ATTRIBUTE_TYPES
}

/// Entitlement privilege attribute types
pub fn privilege_attribute_types() -> &'static TranslationMap {
    &PRIVILEGE_ATTRIBUTE_TYPES
}

/// Entitlement and role owner types
pub fn owner_types() -> &'static TranslationMap {
    &OWNER_TYPES
}

pub fn role_types() -> &'static TranslationMap {
    &ROLE_TYPES
}

pub fn risk_levels() -> &'static TranslationMap {
    &RISK_LEVELS
}

pub fn sod_criticality() -> &'static TranslationMap {
    &SOD_CRITICALITY
}

pub fn confidentiality() -> &'static TranslationMap {
    &CONFIDENTIALITY
}

/// Request form display strings
pub fn request_form_display() -> &'static TranslationMap {
    &REQUEST_FORM_DISPLAY
}
