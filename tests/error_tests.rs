use structdiff::{OutputError, ParseError, StructdiffError};

#[test]
fn test_parse_error_display() {
    let err = ParseError::file_not_found("test.json");
    assert_eq!(err.to_string(), "File not found: test.json");
}

#[test]
fn test_json_error_carries_position() {
    let source = serde_json::from_str::<serde_json::Value>("[1,\n2,]").unwrap_err();
    let err = ParseError::json(source);
    let (line, column) = err.position().unwrap();
    assert_eq!(line, 2);
    assert!(column > 0);
}

#[test]
fn test_yaml_error_display() {
    let source = serde_yaml::from_str::<serde_yaml::Value>("a: b: c").unwrap_err();
    let err = ParseError::yaml(source);
    assert!(err.to_string().starts_with("Invalid YAML at line"));
}

#[test]
fn test_unknown_format_display() {
    let err = ParseError::UnknownFormat;
    assert!(err.to_string().contains("neither valid JSON nor valid YAML"));
    assert!(err.position().is_none());
}

#[test]
fn test_output_error_display() {
    let err = OutputError::UnknownFormat {
        format: "xml".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown output format: xml");
}

#[test]
fn test_umbrella_error_conversions() {
    let err: StructdiffError = ParseError::file_not_found("a.json").into();
    assert!(matches!(err, StructdiffError::Parse(_)));

    let err: StructdiffError = OutputError::UnknownFormat {
        format: "csv".to_string(),
    }
    .into();
    assert!(matches!(err, StructdiffError::Output(_)));
}
