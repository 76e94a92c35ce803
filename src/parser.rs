//! Parsing JSON and YAML text into the `Value` tree.
//!
//! Raw text comes from the host (editor buffers, files); this module turns
//! it into `Option<Value>`. Empty or whitespace-only input parses to `None`
//! ("absent document"), which is distinct from a document whose content is
//! `null`. Syntax errors carry the line/column reported by the underlying
//! parser.

use crate::error::ParseError;
use crate::value::Value;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Declared or auto-detected input format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatHint {
    Json,
    Yaml,
    /// Try JSON first, then YAML.
    Auto,
}

/// Parses a text buffer into a `Value` tree.
///
/// Returns `Ok(None)` for empty or whitespace-only input. With
/// `FormatHint::Auto`, JSON is attempted first and YAML second; if both
/// fail the error is `ParseError::UnknownFormat`.
///
/// # Examples
///
/// ```
/// use structdiff::{parse_text, FormatHint, Value};
///
/// let value = parse_text(r#"{"name": "Alice"}"#, FormatHint::Json).unwrap();
/// assert!(matches!(value, Some(Value::Object(_))));
///
/// assert!(parse_text("   \n  ", FormatHint::Auto).unwrap().is_none());
/// ```
pub fn parse_text(content: &str, hint: FormatHint) -> Result<Option<Value>, ParseError> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let value = match hint {
        FormatHint::Json => parse_json(content).map_err(ParseError::json)?,
        FormatHint::Yaml => parse_yaml(content).map_err(ParseError::yaml)?,
        FormatHint::Auto => parse_json(content)
            .map(Ok)
            .unwrap_or_else(|_| parse_yaml(content))
            .map_err(|_| ParseError::UnknownFormat)?,
    };

    Ok(Some(value))
}

/// Parses a file, detecting the format by extension.
///
/// `.json` files parse as JSON, `.yaml`/`.yml` as YAML; anything else goes
/// through auto detection.
pub fn parse_file(path: &Path) -> Result<Option<Value>, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(
            path.to_string_lossy().to_string(),
        ));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy().to_string(), e))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());

    let hint = match extension.as_deref() {
        Some("json") => FormatHint::Json,
        Some("yaml") | Some("yml") => FormatHint::Yaml,
        _ => FormatHint::Auto,
    };

    parse_text(&content, hint)
}

/// Parses a JSON string into a `Value`.
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a YAML string into a `Value`.
pub fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_value(value))
}

fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            // preserve_order keeps the source key order here
            let map: IndexMap<String, Value> = obj
                .into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}

/// Converts a `serde_yaml::Value`, coercing non-string keys to strings and
/// unwrapping tagged values.
fn yaml_to_value(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                Value::Number(f)
            } else if let Some(i) = n.as_i64() {
                Value::Number(i as f64)
            } else if let Some(u) = n.as_u64() {
                Value::Number(u as f64)
            } else {
                Value::Number(0.0)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_value).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            let index_map: IndexMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Null => "null".to_string(),
                        other => format!("{:?}", other),
                    };
                    (key, yaml_to_value(v))
                })
                .collect();
            Value::Object(index_map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value),
    }
}
