//! Parsed value tree for structured documents.

use indexmap::IndexMap;

/// A value in a parsed JSON or YAML document.
///
/// Object entries keep their source order (`IndexMap`); keys are unique
/// within an object. Key order never affects comparison, only canonical
/// serialization and the order in which change records are emitted.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(IndexMap<String, Value>),
}

impl Value {
    /// The kind name used in type-change records and output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// True when `self` and `other` are the same kind of value.
    pub fn same_kind(&self, other: &Value) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Converts to a `serde_json::Value`, preserving object key order.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(arr) => {
                serde_json::Value::Array(arr.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => {
                let obj: serde_json::Map<String, serde_json::Value> =
                    map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect();
                serde_json::Value::Object(obj)
            }
        }
    }

    /// Returns a short preview of the value, truncated to max_len.
    pub fn preview(&self, max_len: usize) -> String {
        let preview = match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            Value::String(s) => format!("\"{}\"", s),
            Value::Object(map) => {
                let count = map.len();
                if count == 0 {
                    "{}".to_string()
                } else if count == 1 {
                    format!("{{ {} key }}", count)
                } else {
                    format!("{{ {} keys }}", count)
                }
            }
            Value::Array(arr) => {
                let count = arr.len();
                if count == 0 {
                    "[]".to_string()
                } else if count == 1 {
                    format!("[ {} item ]", count)
                } else {
                    format!("[ {} items ]", count)
                }
            }
        };

        if preview.len() > max_len {
            format!("{}...", &preview[..max_len.saturating_sub(3)])
        } else {
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_name() {
        assert_eq!(Value::Null.kind_name(), "null");
        assert_eq!(Value::Bool(true).kind_name(), "boolean");
        assert_eq!(Value::Number(42.0).kind_name(), "number");
        assert_eq!(Value::String("x".to_string()).kind_name(), "string");
        assert_eq!(Value::Array(vec![]).kind_name(), "array");
        assert_eq!(Value::Object(IndexMap::new()).kind_name(), "object");
    }

    #[test]
    fn test_same_kind() {
        assert!(Value::Number(1.0).same_kind(&Value::Number(2.0)));
        assert!(!Value::Number(1.0).same_kind(&Value::String("1".to_string())));
        assert!(!Value::Null.same_kind(&Value::Bool(false)));
    }

    #[test]
    fn test_to_json_preserves_key_order() {
        let mut map = IndexMap::new();
        map.insert("z".to_string(), Value::Number(1.0));
        map.insert("a".to_string(), Value::Number(2.0));
        let json = Value::Object(map).to_json();
        let text = serde_json::to_string(&json).unwrap();
        assert_eq!(text, r#"{"z":1.0,"a":2.0}"#);
    }

    #[test]
    fn test_preview_truncation() {
        let long = Value::String("a".repeat(100));
        let preview = long.preview(20);
        assert!(preview.len() <= 23);
        assert!(preview.ends_with("..."));
    }
}
