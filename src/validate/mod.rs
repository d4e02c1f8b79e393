//! Plan-time structural validation
//!
//! Cross-field rules evaluated before any API call is made.
//!
//! # Overview
//!
//! The validate module provides:
//! - `AttrValue` / `AttrPath` - A configuration tree with null and unknown values
//! - `ConfigAccessor` - Explicit lookup interface rules read through
//! - `ConfigValidator` - One implementation per rule (exactly-one-of, at-most-one-of,
//!   conditional requirement, bounded number, count limit per key)
//! - `rules_for` - The rule set each resource kind applies

mod accessor;
mod path;
mod rules;
mod validators;
mod value;

pub use accessor::ConfigAccessor;
pub use path::{AttrPath, PathStep};
pub use rules::{
    rules_for, ResourceKind, MAX_ENTRIES_PER_OWNER, MAX_OWNER_RANK, MIN_OWNER_RANK,
};
pub use validators::{
    at_most_one_of, bounded_number, count_limit_per_key, exactly_one_of, required_when_true,
    AtMostOneOf, BoundedNumericField, ConditionalRequirement, ConfigValidator,
    CountLimitPerGroupKey, ExactlyOneOf, ValidatorSet,
};
pub use value::AttrValue;
