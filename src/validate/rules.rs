//! Rule presets applied by each resource handler at plan time

use super::validators::{
    at_most_one_of, bounded_number, count_limit_per_key, exactly_one_of, required_when_true,
    ValidatorSet,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowest owner rank accepted by the platform
pub const MIN_OWNER_RANK: i64 = 1;

/// Highest owner rank accepted by the platform
pub const MAX_OWNER_RANK: i64 = 27;

/// How many owner entries may share one owner name
pub const MAX_ENTRIES_PER_OWNER: usize = 5;

/// Resource kinds with plan-time rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Connection,
    SecuritySystem,
    Endpoint,
    Entitlement,
    Role,
    DynamicAttribute,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 6] = [
        ResourceKind::Connection,
        ResourceKind::SecuritySystem,
        ResourceKind::Endpoint,
        ResourceKind::Entitlement,
        ResourceKind::Role,
        ResourceKind::DynamicAttribute,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Connection => "connection",
            ResourceKind::SecuritySystem => "security_system",
            ResourceKind::Endpoint => "endpoint",
            ResourceKind::Entitlement => "entitlement",
            ResourceKind::Role => "role",
            ResourceKind::DynamicAttribute => "dynamic_attribute",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| {
                Error::invalid_value(
                    "resource",
                    format!(
                        "unknown resource kind '{s}', expected one of: {}",
                        ResourceKind::ALL.map(|k| k.as_str()).join(", ")
                    ),
                )
            })
    }
}

/// Owner block rules shared by entitlements and roles
fn owner_rules(set: ValidatorSet) -> ValidatorSet {
    set.with(bounded_number(
        "owners",
        "rank",
        MIN_OWNER_RANK,
        MAX_OWNER_RANK,
    ))
    .with(count_limit_per_key(
        "owners",
        "owner_name",
        MAX_ENTRIES_PER_OWNER,
    ))
}

/// The rules a handler evaluates before planning a resource of `kind`
pub fn rules_for(kind: ResourceKind) -> ValidatorSet {
    let set = ValidatorSet::new();
    match kind {
        ResourceKind::Connection => set
            .with(at_most_one_of(["password", "password_wo"]))
            .with(at_most_one_of(["client_secret", "client_secret_wo"])),
        ResourceKind::SecuritySystem => set.with(required_when_true(
            "automated_provisioning",
            "provisioning_workflow",
        )),
        ResourceKind::Endpoint => {
            set.with(exactly_one_of(["security_system", "security_system_key"]))
        }
        ResourceKind::Entitlement | ResourceKind::Role => owner_rules(set),
        ResourceKind::DynamicAttribute => set.with(exactly_one_of(["endpoint", "endpoint_key"])),
    }
}
