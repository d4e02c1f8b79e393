//! Read access to a configuration tree
//!
//! Validators never resolve paths themselves: they ask an accessor, which
//! keeps the fields a rule inspects explicit and lets tests supply any tree.

use super::path::{AttrPath, PathStep};
use super::value::AttrValue;
use std::collections::BTreeMap;

/// Lookup of attribute values by path
pub trait ConfigAccessor {
    /// The value at `path`, or `None` when the path does not exist
    fn get_attribute(&self, path: &AttrPath) -> Option<&AttrValue>;

    /// The value at `path` when it is neither missing, null nor unknown
    fn get_known(&self, path: &AttrPath) -> Option<&AttrValue> {
        self.get_attribute(path).filter(|v| v.is_known())
    }

    /// Whether the value at `path` is unknown at plan time
    fn is_unknown_at(&self, path: &AttrPath) -> bool {
        self.get_attribute(path).is_some_and(AttrValue::is_unknown)
    }
}

impl ConfigAccessor for AttrValue {
    fn get_attribute(&self, path: &AttrPath) -> Option<&AttrValue> {
        self.resolve(path)
    }
}

impl ConfigAccessor for BTreeMap<String, AttrValue> {
    fn get_attribute(&self, path: &AttrPath) -> Option<&AttrValue> {
        match path.steps().split_first()? {
            (PathStep::Attr(name), rest) => self.get(name)?.resolve_steps(rest),
            (PathStep::Index(_), _) => None,
        }
    }
}
