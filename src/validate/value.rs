//! Attribute values as seen during plan validation
//!
//! Terraform attributes can be null (unset) or unknown (computed later in the
//! apply) in addition to holding a concrete value.

use super::path::{AttrPath, PathStep};
use crate::types::JsonValue;
use serde_json::Number;
use std::collections::BTreeMap;

/// A possibly-unresolved configuration value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AttrValue {
    /// Not set in configuration
    #[default]
    Null,
    /// Set, but not known until apply
    Unknown,
    String(String),
    Bool(bool),
    Number(Number),
    List(Vec<AttrValue>),
    Object(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    /// Build an object value from `(name, value)` pairs
    pub fn object<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<AttrValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Neither null nor unknown
    pub fn is_known(&self) -> bool {
        !self.is_null() && !self.is_unknown()
    }

    /// Empty for compatibility purposes: null, unknown or an empty string.
    /// Every other value, including `false` and empty lists, counts as set.
    pub fn is_empty_value(&self) -> bool {
        match self {
            Self::Null | Self::Unknown => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Known and carrying content: non-empty strings, lists and objects
    pub fn has_content(&self) -> bool {
        match self {
            Self::Null | Self::Unknown => false,
            Self::String(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Object(fields) => !fields.is_empty(),
            Self::Bool(_) | Self::Number(_) => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Field of an object value
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        match self {
            Self::Object(fields) => fields.get(name),
            _ => None,
        }
    }

    /// Follow a path from this value
    pub fn resolve(&self, path: &AttrPath) -> Option<&AttrValue> {
        self.resolve_steps(path.steps())
    }

    pub(crate) fn resolve_steps(&self, steps: &[PathStep]) -> Option<&AttrValue> {
        let mut current = self;
        for step in steps {
            current = match (step, current) {
                (PathStep::Attr(name), Self::Object(fields)) => fields.get(name)?,
                (PathStep::Index(index), Self::List(items)) => items.get(*index)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Short type label used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Unknown => "unknown",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::List(_) => "list",
            Self::Object(_) => "object",
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<AttrValue>> From<Vec<T>> for AttrValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<JsonValue> for AttrValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => Self::Number(n),
            JsonValue::String(s) => Self::String(s),
            JsonValue::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            JsonValue::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}
