//! Canonicalization: normalize a value tree under the active equivalence
//! options and serialize it to a stable textual form.
//!
//! Two values that are equivalent under the options serialize identically,
//! which is what lets the textual adapter run a plain line diff over the
//! output. The canonical form is always JSON with 2-space indent, even for
//! YAML input; YAML has several equivalent encodings of the same value and
//! serializing back to it would reintroduce spurious text differences.

use crate::error::ParseError;
use crate::options::DiffOptions;
use crate::parser::{parse_text, FormatHint};
use crate::value::Value;
use indexmap::IndexMap;

/// Returns a copy with every object's entries reordered by ascending key.
///
/// Applied bottom-up; arrays are walked but their element order is left
/// alone.
pub fn sort_keys_deep(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map
                .iter()
                .map(|(k, v)| (k.clone(), sort_keys_deep(v)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(entries.into_iter().collect::<IndexMap<String, Value>>())
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_keys_deep).collect()),
        other => other.clone(),
    }
}

/// Returns a copy with every array's elements sorted by the lexical order
/// of their own compact serialization.
///
/// Elements are processed recursively before sorting, so nested arrays are
/// already in sorted form when their serialization is used as the sort key.
/// Objects are walked but their key order is left alone.
pub fn sort_arrays_deep(value: &Value) -> Value {
    match value {
        Value::Array(arr) => {
            let mut elements: Vec<Value> = arr.iter().map(sort_arrays_deep).collect();
            elements.sort_by_key(canonical_sort_key);
            Value::Array(elements)
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), sort_arrays_deep(v)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Compact serialization used as a total order over values.
///
/// Deterministic for any value the parser can produce, so comparing these
/// strings is a stable tie-break for array sorting.
pub(crate) fn canonical_sort_key(value: &Value) -> String {
    serde_json::to_string(&value.to_json()).unwrap_or_default()
}

/// Normalizes a string leaf: whitespace first (trim and collapse runs to a
/// single space), then case folding.
pub fn normalize_scalar(s: &str, options: &DiffOptions) -> String {
    let normalized = if options.ignore_whitespace {
        s.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        s.to_string()
    };

    if options.ignore_case {
        normalized.to_lowercase()
    } else {
        normalized
    }
}

pub(crate) fn normalize_strings_deep(value: &Value, options: &DiffOptions) -> Value {
    match value {
        Value::String(s) => Value::String(normalize_scalar(s, options)),
        Value::Array(arr) => Value::Array(
            arr.iter()
                .map(|v| normalize_strings_deep(v, options))
                .collect(),
        ),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(k, v)| (k.clone(), normalize_strings_deep(v, options)))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Serializes a value to its canonical text form under the options.
///
/// Key sorting runs before array sorting so the serializations used as
/// array sort keys are themselves order-stable. String leaves are
/// normalized last; numbers, bools and null pass through unchanged.
///
/// # Examples
///
/// ```
/// use structdiff::{canonicalize, parse_json, DiffOptions};
///
/// let options = DiffOptions {
///     ignore_key_order: true,
///     ..Default::default()
/// };
/// let a = parse_json(r#"{"b": 1, "a": 2}"#).unwrap();
/// let b = parse_json(r#"{"a": 2, "b": 1}"#).unwrap();
/// assert_eq!(canonicalize(&a, &options), canonicalize(&b, &options));
/// ```
pub fn canonicalize(value: &Value, options: &DiffOptions) -> String {
    let mut current = value.clone();
    if options.ignore_key_order {
        current = sort_keys_deep(&current);
    }
    if options.ignore_array_order {
        current = sort_arrays_deep(&current);
    }
    let normalized = normalize_strings_deep(&current, options);
    serde_json::to_string_pretty(&normalized.to_json()).unwrap_or_default()
}

/// Parses and canonicalizes a raw text buffer.
///
/// An absent document (empty or whitespace-only) canonicalizes to the empty
/// string. If the text does not parse, it is treated as already canonical:
/// the raw lines are kept, with whitespace/case normalization applied per
/// line so the textual diff of unparseable content still lines up.
pub fn canonicalize_text(text: &str, hint: FormatHint, options: &DiffOptions) -> String {
    match parse_text(text, hint) {
        Ok(Some(value)) => canonicalize(&value, options),
        Ok(None) => String::new(),
        Err(ParseError::Json { .. })
        | Err(ParseError::Yaml { .. })
        | Err(ParseError::UnknownFormat) => text
            .lines()
            .map(|line| normalize_scalar(line, options))
            .collect::<Vec<_>>()
            .join("\n"),
        // File errors cannot occur for in-memory text
        Err(_) => String::new(),
    }
}
