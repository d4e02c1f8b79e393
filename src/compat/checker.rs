//! Attribute compatibility checks against the platform version

use super::matrix::lookup;
use super::version::{classify_version, supported_versions_text, PlatformVersion, VersionClass};
use crate::diag::{Diagnostic, Diagnostics};
use crate::types::JsonValue;
use crate::validate::{AttrPath, AttrValue};
use tracing::{debug, warn};

/// Whether a value counts as unset for compatibility purposes
///
/// Strings are empty when zero-length, optional values when absent or empty.
/// Every other type is never empty.
pub trait MaybeEmpty {
    fn is_empty_value(&self) -> bool;
}

impl MaybeEmpty for str {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl MaybeEmpty for String {
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T: MaybeEmpty> MaybeEmpty for Option<T> {
    fn is_empty_value(&self) -> bool {
        self.as_ref().map_or(true, MaybeEmpty::is_empty_value)
    }
}

impl<T: MaybeEmpty + ?Sized> MaybeEmpty for &T {
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

impl MaybeEmpty for AttrValue {
    fn is_empty_value(&self) -> bool {
        AttrValue::is_empty_value(self)
    }
}

impl MaybeEmpty for JsonValue {
    fn is_empty_value(&self) -> bool {
        match self {
            JsonValue::Null => true,
            JsonValue::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

macro_rules! never_empty {
    ($($t:ty),*) => {
        $(impl MaybeEmpty for $t {
            fn is_empty_value(&self) -> bool {
                false
            }
        })*
    };
}

never_empty!(bool, i32, i64, u32, u64, f64);

fn unrecognized_version(version: &str) -> Diagnostic {
    warn!(version, "unrecognized platform version, skipping attribute compatibility checks");
    Diagnostic::warning(
        "Unsupported Saviynt Version",
        format!(
            "Version '{version}' is not recognized. Supported versions: {}. \
             Attribute compatibility checks were skipped.",
            supported_versions_text()
        ),
    )
}

fn check_known(
    version: PlatformVersion,
    resource_type: &str,
    attribute_name: &str,
    diags: &mut Diagnostics,
) {
    let Some(entry) = lookup(attribute_name, resource_type) else {
        return;
    };

    if entry.supported_in(version) {
        debug!(
            attribute = attribute_name,
            resource_type,
            version = version.label(),
            "attribute supported"
        );
        return;
    }

    diags.push(
        Diagnostic::error(
            "Attribute Not Supported",
            format!(
                "Attribute '{attribute_name}' is not supported in Saviynt version {} for {resource_type} resources",
                version.label()
            ),
        )
        .at(AttrPath::root(attribute_name)),
    );
}

/// Check that a set attribute is usable with the given platform version
///
/// - empty version or empty value: nothing to check
/// - unrecognized version: one warning, no attribute checks
/// - attribute absent from the table: supported
/// - attribute unsupported in the version: one error
pub fn validate_attribute_compatibility<V: MaybeEmpty + ?Sized>(
    version: &str,
    resource_type: &str,
    attribute_name: &str,
    value: &V,
) -> Diagnostics {
    let mut diags = Diagnostics::new();
    if version.is_empty() || value.is_empty_value() {
        return diags;
    }

    match classify_version(version) {
        VersionClass::Unspecified => {}
        VersionClass::Unrecognized(raw) => diags.push(unrecognized_version(&raw)),
        VersionClass::Known(v) => check_known(v, resource_type, attribute_name, &mut diags),
    }
    diags
}

/// Check every `(name, value)` pair of a resource block
///
/// An unrecognized version produces a single warning for the whole block.
pub fn validate_attributes<'a, V, I>(version: &str, resource_type: &str, attributes: I) -> Diagnostics
where
    V: MaybeEmpty + ?Sized + 'a,
    I: IntoIterator<Item = (&'a str, &'a V)>,
{
    let mut diags = Diagnostics::new();
    let set: Vec<&str> = attributes
        .into_iter()
        .filter(|(_, value)| !value.is_empty_value())
        .map(|(name, _)| name)
        .collect();
    if set.is_empty() {
        return diags;
    }

    match classify_version(version) {
        VersionClass::Unspecified => {}
        VersionClass::Unrecognized(raw) => diags.push(unrecognized_version(&raw)),
        VersionClass::Known(v) => {
            for name in set {
                check_known(v, resource_type, name, &mut diags);
            }
        }
    }
    diags
}
