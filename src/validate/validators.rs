//! Cross-field validation rules
//!
//! Each rule inspects a configuration through a [`ConfigAccessor`] and appends
//! findings to [`Diagnostics`]. Null and unknown values count as absent; a rule
//! that cannot decide because a value is still unknown reports nothing and
//! leaves the decision to apply time.

use super::accessor::ConfigAccessor;
use super::path::AttrPath;
use super::value::AttrValue;
use crate::diag::{Diagnostic, Diagnostics};
use std::collections::BTreeMap;

/// A plan-time validation rule
pub trait ConfigValidator: Send + Sync {
    /// Human-readable description of the rule
    fn description(&self) -> String;

    /// Check the configuration and append findings
    fn validate(&self, config: &dyn ConfigAccessor, diags: &mut Diagnostics);
}

fn join_paths(paths: &[AttrPath]) -> String {
    paths
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Paths among `paths` that hold a known value
fn set_paths<'a>(paths: &'a [AttrPath], config: &dyn ConfigAccessor) -> Vec<&'a AttrPath> {
    paths
        .iter()
        .filter(|p| config.get_known(p).is_some())
        .collect()
}

fn conflict_diagnostic(paths: &[AttrPath], set: &[&AttrPath]) -> Diagnostic {
    let names = set
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Diagnostic::error(
        "Conflicting Attributes",
        format!(
            "Only one of [{}] can be specified, but found: {}",
            join_paths(paths),
            names
        ),
    )
}

// ============================================================================
// Exactly One Of
// ============================================================================

/// Exactly one of the given attributes must be set
#[derive(Debug, Clone)]
pub struct ExactlyOneOf {
    paths: Vec<AttrPath>,
}

impl ExactlyOneOf {
    pub fn new(paths: Vec<AttrPath>) -> Self {
        Self { paths }
    }
}

impl ConfigValidator for ExactlyOneOf {
    fn description(&self) -> String {
        format!("exactly one of [{}] must be set", join_paths(&self.paths))
    }

    fn validate(&self, config: &dyn ConfigAccessor, diags: &mut Diagnostics) {
        let set = set_paths(&self.paths, config);
        match set.len() {
            0 => {
                if self.paths.iter().any(|p| config.is_unknown_at(p)) {
                    return;
                }
                diags.push(Diagnostic::error(
                    "Missing Required Attribute",
                    format!(
                        "Exactly one of [{}] must be specified",
                        join_paths(&self.paths)
                    ),
                ));
            }
            1 => {}
            _ => diags.push(conflict_diagnostic(&self.paths, &set)),
        }
    }
}

// ============================================================================
// At Most One Of
// ============================================================================

/// At most one of the given attributes may be set
#[derive(Debug, Clone)]
pub struct AtMostOneOf {
    paths: Vec<AttrPath>,
}

impl AtMostOneOf {
    pub fn new(paths: Vec<AttrPath>) -> Self {
        Self { paths }
    }
}

impl ConfigValidator for AtMostOneOf {
    fn description(&self) -> String {
        format!("at most one of [{}] may be set", join_paths(&self.paths))
    }

    fn validate(&self, config: &dyn ConfigAccessor, diags: &mut Diagnostics) {
        let set = set_paths(&self.paths, config);
        if set.len() > 1 {
            diags.push(conflict_diagnostic(&self.paths, &set));
        }
    }
}

// ============================================================================
// Conditional Requirement
// ============================================================================

/// `required` must be set whenever the boolean at `condition` is true
#[derive(Debug, Clone)]
pub struct ConditionalRequirement {
    condition: AttrPath,
    required: AttrPath,
}

impl ConditionalRequirement {
    pub fn new(condition: AttrPath, required: AttrPath) -> Self {
        Self {
            condition,
            required,
        }
    }
}

impl ConfigValidator for ConditionalRequirement {
    fn description(&self) -> String {
        format!(
            "{} is required when {} is true",
            self.required, self.condition
        )
    }

    fn validate(&self, config: &dyn ConfigAccessor, diags: &mut Diagnostics) {
        let enabled = config
            .get_known(&self.condition)
            .and_then(AttrValue::as_bool)
            .unwrap_or(false);
        if !enabled || config.is_unknown_at(&self.required) {
            return;
        }

        let satisfied = config
            .get_attribute(&self.required)
            .is_some_and(AttrValue::has_content);
        if !satisfied {
            diags.push(
                Diagnostic::error(
                    "Missing Required Attribute",
                    format!(
                        "'{}' must be set when '{}' is true",
                        self.required, self.condition
                    ),
                )
                .at(self.required.clone()),
            );
        }
    }
}

// ============================================================================
// Bounded Numeric Field
// ============================================================================

/// A string-typed numeric field inside a repeated block must lie in `min..=max`
#[derive(Debug, Clone)]
pub struct BoundedNumericField {
    block: AttrPath,
    field: String,
    min: i64,
    max: i64,
}

impl BoundedNumericField {
    pub fn new(block: AttrPath, field: impl Into<String>, min: i64, max: i64) -> Self {
        Self {
            block,
            field: field.into(),
            min,
            max,
        }
    }

    fn check_element(&self, element_path: AttrPath, value: &AttrValue, diags: &mut Diagnostics) {
        let path = element_path.attr(self.field.clone());
        let parsed = match value {
            AttrValue::String(raw) => raw.trim().parse::<i64>().map_err(|_| raw.clone()),
            AttrValue::Number(n) => n.as_i64().ok_or_else(|| n.to_string()),
            other => Err(other.type_name().to_string()),
        };

        match parsed {
            Err(raw) => diags.push(
                Diagnostic::error(
                    "Invalid Number Format",
                    format!("'{path}' must be a whole number, got \"{raw}\""),
                )
                .at(path),
            ),
            Ok(n) if n < self.min || n > self.max => diags.push(
                Diagnostic::error(
                    "Value Out of Range",
                    format!(
                        "'{path}' must be between {} and {}, got {n}",
                        self.min, self.max
                    ),
                )
                .at(path),
            ),
            Ok(_) => {}
        }
    }
}

impl ConfigValidator for BoundedNumericField {
    fn description(&self) -> String {
        format!(
            "{}[*].{} must be between {} and {}",
            self.block, self.field, self.min, self.max
        )
    }

    fn validate(&self, config: &dyn ConfigAccessor, diags: &mut Diagnostics) {
        let Some(elements) = config.get_known(&self.block).and_then(AttrValue::as_list) else {
            return;
        };

        for (i, element) in elements.iter().enumerate() {
            match element.get(&self.field) {
                Some(value) if value.is_known() => {
                    self.check_element(self.block.clone().index(i), value, diags);
                }
                _ => {}
            }
        }
    }
}

// ============================================================================
// Count Limit Per Group Key
// ============================================================================

/// No value of `key_field` may appear more than `limit` times in a repeated block
#[derive(Debug, Clone)]
pub struct CountLimitPerGroupKey {
    block: AttrPath,
    key_field: String,
    limit: usize,
}

impl CountLimitPerGroupKey {
    pub fn new(block: AttrPath, key_field: impl Into<String>, limit: usize) -> Self {
        Self {
            block,
            key_field: key_field.into(),
            limit,
        }
    }
}

impl ConfigValidator for CountLimitPerGroupKey {
    fn description(&self) -> String {
        format!(
            "each {} may appear at most {} times in {}",
            self.key_field, self.limit, self.block
        )
    }

    fn validate(&self, config: &dyn ConfigAccessor, diags: &mut Diagnostics) {
        let Some(elements) = config.get_known(&self.block).and_then(AttrValue::as_list) else {
            return;
        };

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for element in elements {
            if let Some(key) = element
                .get(&self.key_field)
                .and_then(AttrValue::as_str)
                .filter(|k| !k.is_empty())
            {
                *counts.entry(key).or_default() += 1;
            }
        }

        for (key, count) in counts {
            if count > self.limit {
                let detail = format!(
                    "{} '{key}' appears {count} times in {}; at most {} entries may share the same {}",
                    self.key_field, self.block, self.limit, self.key_field
                );
                diags.push(Diagnostic::error("Too Many Entries", detail).at(self.block.clone()));
            }
        }
    }
}

// ============================================================================
// Factories
// ============================================================================

fn to_paths<P: Into<AttrPath>>(paths: impl IntoIterator<Item = P>) -> Vec<AttrPath> {
    paths.into_iter().map(Into::into).collect()
}

/// Exactly one of `paths` must be set
pub fn exactly_one_of<P: Into<AttrPath>>(paths: impl IntoIterator<Item = P>) -> ExactlyOneOf {
    ExactlyOneOf::new(to_paths(paths))
}

/// At most one of `paths` may be set
pub fn at_most_one_of<P: Into<AttrPath>>(paths: impl IntoIterator<Item = P>) -> AtMostOneOf {
    AtMostOneOf::new(to_paths(paths))
}

/// `required` must be set when `condition` is true
pub fn required_when_true(
    condition: impl Into<AttrPath>,
    required: impl Into<AttrPath>,
) -> ConditionalRequirement {
    ConditionalRequirement::new(condition.into(), required.into())
}

/// `block[*].field` must parse as a number in `min..=max`
pub fn bounded_number(
    block: impl Into<AttrPath>,
    field: impl Into<String>,
    min: i64,
    max: i64,
) -> BoundedNumericField {
    BoundedNumericField::new(block.into(), field, min, max)
}

/// No `block[*].key_field` value may repeat more than `limit` times
pub fn count_limit_per_key(
    block: impl Into<AttrPath>,
    key_field: impl Into<String>,
    limit: usize,
) -> CountLimitPerGroupKey {
    CountLimitPerGroupKey::new(block.into(), key_field, limit)
}

// ============================================================================
// Validator Set
// ============================================================================

/// An ordered collection of rules evaluated together
#[derive(Default)]
pub struct ValidatorSet {
    validators: Vec<Box<dyn ConfigValidator>>,
}

impl ValidatorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule (builder style)
    #[must_use]
    pub fn with(mut self, validator: impl ConfigValidator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    pub fn push(&mut self, validator: impl ConfigValidator + 'static) {
        self.validators.push(Box::new(validator));
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Descriptions of every rule, in evaluation order
    pub fn descriptions(&self) -> Vec<String> {
        self.validators.iter().map(|v| v.description()).collect()
    }

    /// Run every rule and collect the findings
    pub fn validate(&self, config: &dyn ConfigAccessor) -> Diagnostics {
        let mut diags = Diagnostics::new();
        for validator in &self.validators {
            validator.validate(config, &mut diags);
        }
        diags
    }
}

impl std::fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.descriptions()).finish()
    }
}
