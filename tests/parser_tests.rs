use std::fs;
use std::io::Write;
use structdiff::{parse_file, parse_json, parse_text, parse_yaml, FormatHint, ParseError, Value};
use tempfile::NamedTempFile;

#[test]
fn test_parse_json_primitives() {
    assert_eq!(parse_json("null").unwrap(), Value::Null);
    assert_eq!(parse_json("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_json("false").unwrap(), Value::Bool(false));
    assert_eq!(parse_json("42").unwrap(), Value::Number(42.0));
    assert_eq!(parse_json("3.15").unwrap(), Value::Number(3.15));
    assert_eq!(
        parse_json(r#""hello""#).unwrap(),
        Value::String("hello".to_string())
    );
}

#[test]
fn test_parse_json_nested() {
    let json = r#"{"user": {"name": "Bob", "scores": [10, 20, 30]}}"#;
    let value = parse_json(json).unwrap();
    match value {
        Value::Object(map) => match map.get("user").unwrap() {
            Value::Object(user) => {
                assert_eq!(
                    user.get("name").unwrap(),
                    &Value::String("Bob".to_string())
                );
                match user.get("scores").unwrap() {
                    Value::Array(scores) => assert_eq!(scores.len(), 3),
                    _ => panic!("Expected scores to be array"),
                }
            }
            _ => panic!("Expected user to be object"),
        },
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_parse_json_invalid() {
    assert!(parse_json("{invalid json}").is_err());
    assert!(parse_json("[1, 2,]").is_err());
}

#[test]
fn test_json_key_order_is_source_order() {
    let value = parse_json(r#"{"c": 1, "a": 2, "b": 3}"#).unwrap();
    match value {
        Value::Object(map) => {
            let keys: Vec<&str> = map.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["c", "a", "b"]);
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_parse_yaml_primitives() {
    assert_eq!(parse_yaml("null").unwrap(), Value::Null);
    assert_eq!(parse_yaml("~").unwrap(), Value::Null);
    assert_eq!(parse_yaml("true").unwrap(), Value::Bool(true));
    assert_eq!(parse_yaml("42").unwrap(), Value::Number(42.0));
    assert_eq!(
        parse_yaml("hello").unwrap(),
        Value::String("hello".to_string())
    );
}

#[test]
fn test_parse_yaml_nested() {
    let yaml = "user:\n  name: Bob\n  scores:\n    - 10\n    - 20\n    - 30";
    let value = parse_yaml(yaml).unwrap();
    match value {
        Value::Object(map) => match map.get("user").unwrap() {
            Value::Object(user) => {
                assert_eq!(
                    user.get("name").unwrap(),
                    &Value::String("Bob".to_string())
                );
            }
            _ => panic!("Expected user to be object"),
        },
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_parse_yaml_invalid() {
    assert!(parse_yaml("key: value: invalid").is_err());
    assert!(parse_yaml("[1, 2,").is_err());
}

#[test]
fn test_parse_text_whitespace_only_is_absent() {
    assert!(parse_text("", FormatHint::Json).unwrap().is_none());
    assert!(parse_text("\n\n\t  ", FormatHint::Yaml).unwrap().is_none());
}

#[test]
fn test_parse_text_hint_mismatch_is_error() {
    // Valid YAML, but the declared format is JSON.
    let result = parse_text("name: Alice", FormatHint::Json);
    assert!(matches!(result, Err(ParseError::Json { .. })));
}

#[test]
fn test_parse_text_auto_detection() {
    let json = parse_text(r#"{"a": 1}"#, FormatHint::Auto).unwrap().unwrap();
    assert!(matches!(json, Value::Object(_)));

    let yaml = parse_text("a: 1", FormatHint::Auto).unwrap().unwrap();
    assert!(matches!(yaml, Value::Object(_)));
}

#[test]
fn test_parse_file_json() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"key": "value"}}"#).unwrap();
    let path = file.path().with_extension("json");
    fs::copy(file.path(), &path).unwrap();

    let value = parse_file(&path).unwrap().unwrap();
    match value {
        Value::Object(map) => {
            assert_eq!(
                map.get("key").unwrap(),
                &Value::String("value".to_string())
            );
        }
        _ => panic!("Expected object"),
    }

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_parse_file_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "key: value").unwrap();
    let path = file.path().with_extension("yaml");
    fs::copy(file.path(), &path).unwrap();

    let value = parse_file(&path).unwrap().unwrap();
    assert!(matches!(value, Value::Object(_)));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_parse_file_not_found() {
    let result = parse_file(std::path::Path::new("/nonexistent/file.json"));
    assert!(matches!(result, Err(ParseError::FileNotFound { .. })));
}

#[test]
fn test_parse_file_unknown_extension_auto_detects() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"key": "value"}}"#).unwrap();
    let path = file.path().with_extension("txt");
    fs::copy(file.path(), &path).unwrap();

    let value = parse_file(&path).unwrap().unwrap();
    assert!(matches!(value, Value::Object(_)));

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_yaml_non_string_keys_coerced() {
    let yaml = "1: first\n2: second\ntrue: third";
    let value = parse_yaml(yaml).unwrap();
    match value {
        Value::Object(map) => {
            assert_eq!(map.len(), 3);
            assert_eq!(map.get("1").unwrap(), &Value::String("first".to_string()));
            assert_eq!(
                map.get("true").unwrap(),
                &Value::String("third".to_string())
            );
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_yaml_tagged_values_unwrap() {
    let yaml = "value: !Custom 42";
    let value = parse_yaml(yaml).unwrap();
    match value {
        Value::Object(map) => {
            assert_eq!(map.get("value").unwrap(), &Value::Number(42.0));
        }
        _ => panic!("Expected object"),
    }
}
