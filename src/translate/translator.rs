//! Best-effort value translation
//!
//! Unmapped input passes through unchanged so that values the upstream API
//! added after a table was written still round-trip. Misses are logged so an
//! incomplete table shows up in provider logs.

use super::maps::{TranslationMap, TranslationTable};
use tracing::{debug, warn};

/// Translate a canonical key to its mapped value
///
/// - empty input returns empty output without a lookup
/// - a known key returns its mapped value
/// - anything else is returned unchanged
pub fn translate<'a>(input: &'a str, table: &TranslationMap) -> &'a str {
    if input.is_empty() {
        return input;
    }

    if let Some(value) = table.get(input) {
        return value;
    }

    if table.contains_value(input) {
        debug!(table = table.name(), input, "value already translated");
    } else {
        warn!(
            table = table.name(),
            input, "no translation for value, passing it through unchanged"
        );
    }
    input
}

/// Translate a mapped value back to its canonical key
///
/// Same empty and pass-through policy as [`translate`]. When two keys share a
/// value the first key in key order wins.
pub fn reverse_translate<'a>(input: &'a str, table: &TranslationMap) -> &'a str {
    if input.is_empty() {
        return input;
    }

    if let Some(key) = table.key_for(input) {
        return key;
    }

    if table.get(input).is_some() {
        debug!(table = table.name(), input, "value is already a key");
    } else {
        warn!(
            table = table.name(),
            input, "no reverse translation for value, passing it through unchanged"
        );
    }
    input
}

/// [`translate`] against a named table
pub fn translate_in(input: &str, table: TranslationTable) -> &str {
    translate(input, table.map())
}

/// [`reverse_translate`] against a named table
pub fn reverse_translate_in(input: &str, table: TranslationTable) -> &str {
    reverse_translate(input, table.map())
}
