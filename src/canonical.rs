//! Deterministic JSON encoding
//!
//! State comparison needs byte-stable output: the same logical content must
//! always encode to the same string regardless of insertion order. Keys are
//! sorted lexicographically (byte order) at every depth before encoding.

use crate::error::{Error, Result};
use crate::types::{JsonValue, StringMap};
use std::collections::BTreeMap;

/// Encode a string map as compact JSON with keys in byte order
pub fn marshal_deterministic(map: &StringMap) -> Result<String> {
    let sorted: BTreeMap<&str, &str> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
    Ok(serde_json::to_string(&sorted)?)
}

/// Compact canonical encoding of a JSON value
pub fn to_canonical_string(value: &JsonValue) -> Result<String> {
    let mut out = String::new();
    write_canonical(value, &mut out)?;
    Ok(out)
}

/// Writes objects key by key in sorted order, independent of the map
/// implementation `serde_json` was built with.
fn write_canonical(value: &JsonValue, out: &mut String) -> Result<()> {
    match value {
        JsonValue::Object(fields) => {
            let mut entries: Vec<(&String, &JsonValue)> = fields.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push('{');
            for (i, (key, field)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(key)?);
                out.push(':');
                write_canonical(field, out)?;
            }
            out.push('}');
        }
        JsonValue::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out)?;
            }
            out.push(']');
        }
        scalar => out.push_str(&serde_json::to_string(scalar)?),
    }
    Ok(())
}

/// Re-encode a JSON document canonically, so JSON-valued attributes written
/// with different whitespace or key order compare equal
pub fn normalize_json_string(input: &str) -> Result<String> {
    let value: JsonValue = serde_json::from_str(input)
        .map_err(|e| Error::invalid_value("json", format!("not a valid JSON document: {e}")))?;
    to_canonical_string(&value)
}

/// Whether two JSON documents hold the same content. Unparseable input
/// compares by exact text.
pub fn json_strings_equivalent(a: &str, b: &str) -> bool {
    match (normalize_json_string(a), normalize_json_string(b)) {
        (Ok(left), Ok(right)) => left == right,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_marshal_is_deterministic() {
        let mut map = StringMap::new();
        map.insert("b".to_string(), "2".to_string());
        map.insert("a".to_string(), "1".to_string());
        map.insert("c".to_string(), "3".to_string());

        let first = marshal_deterministic(&map).unwrap();
        let second = marshal_deterministic(&map).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, r#"{"a":"1","b":"2","c":"3"}"#);
    }

    #[test]
    fn test_insertion_order_does_not_matter() {
        let keys = ["zeta", "Alpha", "beta", "_x", "10", "9"];

        let mut forward = StringMap::new();
        for k in keys {
            forward.insert(k.to_string(), k.to_uppercase());
        }
        let mut backward = StringMap::new();
        for k in keys.iter().rev() {
            backward.insert((*k).to_string(), k.to_uppercase());
        }

        let a = marshal_deterministic(&forward).unwrap();
        let b = marshal_deterministic(&backward).unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert!(a.starts_with(r#"{"10":"10","9":"9","Alpha""#));
    }

    #[test]
    fn test_marshal_empty_map() {
        assert_eq!(marshal_deterministic(&StringMap::new()).unwrap(), "{}");
    }

    #[test]
    fn test_marshal_escapes() {
        let mut map = StringMap::new();
        map.insert("q".to_string(), "say \"hi\"".to_string());
        assert_eq!(
            marshal_deterministic(&map).unwrap(),
            r#"{"q":"say \"hi\""}"#
        );
    }

    #[test]
    fn test_canonical_string_nested() {
        let value = json!({"b": {"y": 1, "x": [ {"d": true, "c": null} ]}, "a": "s"});
        assert_eq!(
            to_canonical_string(&value).unwrap(),
            r#"{"a":"s","b":{"x":[{"c":null,"d":true}],"y":1}}"#
        );
    }

    #[test]
    fn test_normalize_json_string() {
        let normalized = normalize_json_string("{ \"b\" : 1,\n \"a\": [1, 2] }").unwrap();
        assert_eq!(normalized, r#"{"a":[1,2],"b":1}"#);
        assert!(normalize_json_string("{not json").is_err());
    }

    #[test]
    fn test_json_strings_equivalent() {
        assert!(json_strings_equivalent(r#"{"a":1,"b":2}"#, "{ \"b\": 2, \"a\": 1 }"));
        assert!(!json_strings_equivalent(r#"{"a":1}"#, r#"{"a":2}"#));
        assert!(json_strings_equivalent("plain", "plain"));
        assert!(!json_strings_equivalent("plain", "other"));
    }
}
