//! Value translation module
//!
//! Bidirectional maps between the labels users write in configuration and the
//! codes or display strings the platform API speaks.
//!
//! # Overview
//!
//! The translate module provides:
//! - `TranslationMap` - An immutable key → value table
//! - `TranslationTable` - The catalog of built-in tables
//! - `translate` / `reverse_translate` - Lookups with identity fallback

mod maps;
mod translator;

pub use maps::{
    attribute_types, confidentiality, owner_types, privilege_attribute_types,
    request_form_display, risk_levels, role_types, sod_criticality, TranslationMap,
    TranslationTable,
};
pub use translator::{reverse_translate, reverse_translate_in, translate, translate_in};
