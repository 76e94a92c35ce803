use structdiff::{
    compare_documents, compare_values, parse_json, ChangeKind, DiffOptions, FormatHint, Value,
};

fn compare(left: &str, right: &str, options: &DiffOptions) -> structdiff::SemanticDiff {
    compare_documents(left, right, FormatHint::Json, FormatHint::Json, options)
}

#[test]
fn test_identity_for_arbitrary_document() {
    let text = r#"
    {
        "name": "Alice",
        "tags": ["a", "b", null],
        "profile": {"age": 30, "active": true},
        "scores": [1.5, 2.5]
    }
    "#;
    let value = parse_json(text).unwrap();
    let diff = compare_values(Some(&value), Some(&value), &DiffOptions::default());
    assert!(diff.is_identical);
    assert_eq!(diff.summary.total, 0);
}

#[test]
fn test_absent_documents_are_identical() {
    let diff = compare("", "", &DiffOptions::default());
    assert!(diff.is_identical);
    assert!(diff.changes.is_empty());
}

#[test]
fn test_absent_left_is_single_root_added() {
    let diff = compare("", r#"{"a": 1}"#, &DiffOptions::default());
    assert_eq!(diff.summary.added, 1);
    assert_eq!(diff.summary.total, 1);
    assert!(diff.changes[0].path.is_empty());
    assert!(matches!(
        diff.changes[0].new_value,
        Some(Value::Object(_))
    ));
}

#[test]
fn test_absent_vs_null_is_type_distinct() {
    // A document containing null is not an absent document.
    let diff = compare("", "null", &DiffOptions::default());
    assert_eq!(diff.summary.added, 1);
    assert_eq!(diff.changes[0].new_value, Some(Value::Null));
}

#[test]
fn test_type_changed_at_root() {
    let diff = compare(r#""5""#, "5", &DiffOptions::default());
    assert_eq!(diff.summary.type_changed, 1);
    assert_eq!(diff.summary.total, 1);
    assert_eq!(diff.changes[0].old_kind, Some("string"));
    assert_eq!(diff.changes[0].new_kind, Some("number"));
}

#[test]
fn test_type_changed_does_not_recurse() {
    // Array to object: one record, nothing below it.
    let diff = compare(
        r#"{"data": [1, 2, 3]}"#,
        r#"{"data": {"a": 1, "b": 2}}"#,
        &DiffOptions::default(),
    );
    assert_eq!(diff.summary.total, 1);
    assert_eq!(diff.changes[0].kind, ChangeKind::TypeChanged);
    assert_eq!(diff.changes[0].path, vec!["data"]);
}

#[test]
fn test_key_order_never_affects_object_comparison() {
    // The flag controls canonical serialization only; the comparison is
    // key-set based either way.
    for ignore_key_order in [false, true] {
        let options = DiffOptions {
            ignore_key_order,
            ..Default::default()
        };
        let diff = compare(r#"{"a": 1, "b": 2}"#, r#"{"b": 2, "a": 1}"#, &options);
        assert!(diff.is_identical, "ignore_key_order={}", ignore_key_order);
    }
}

#[test]
fn test_array_order_matters_by_default() {
    let diff = compare("[1, 2, 3]", "[3, 2, 1]", &DiffOptions::default());
    assert_eq!(diff.summary.modified, 2);
    assert_eq!(diff.changes[0].path, vec!["[0]"]);
    assert_eq!(diff.changes[1].path, vec!["[2]"]);
}

#[test]
fn test_array_order_ignored() {
    let options = DiffOptions {
        ignore_array_order: true,
        ..Default::default()
    };
    let diff = compare("[1, 2, 3]", "[3, 2, 1]", &options);
    assert!(diff.is_identical);
}

#[test]
fn test_middle_insertion_cascade_is_preserved_behavior() {
    // Index pairing means a middle insertion is reported as a cascade of
    // modifications plus a trailing addition, not a single insertion.
    let diff = compare(r#"["a", "b", "c"]"#, r#"["a", "x", "b", "c"]"#, &DiffOptions::default());
    assert_eq!(diff.summary.modified, 2);
    assert_eq!(diff.summary.added, 1);
}

#[test]
fn test_added_and_removed_at_depth() {
    let diff = compare(
        r#"{"a": {"x": 1, "old": true}}"#,
        r#"{"a": {"x": 1, "y": 2}}"#,
        &DiffOptions::default(),
    );
    assert_eq!(diff.summary.added, 1);
    assert_eq!(diff.summary.removed, 1);

    let removed = diff
        .changes
        .iter()
        .find(|c| c.kind == ChangeKind::Removed)
        .unwrap();
    assert_eq!(removed.path, vec!["a", "old"]);

    let added = diff
        .changes
        .iter()
        .find(|c| c.kind == ChangeKind::Added)
        .unwrap();
    assert_eq!(added.path, vec!["a", "y"]);
    assert_eq!(added.new_value, Some(Value::Number(2.0)));
}

#[test]
fn test_count_symmetry_over_mixed_documents() {
    let cases = [
        (r#"{"a": 1}"#, r#"{"b": 2}"#),
        (r#"[1, 2, 3]"#, r#"[1, 2]"#),
        (r#"{"a": {"b": [1]}}"#, r#"{"a": {"b": "one"}}"#),
        (r#"{"x": 1, "y": 2, "z": 3}"#, r#"{"x": 9}"#),
    ];

    for (left, right) in cases {
        let forward = compare(left, right, &DiffOptions::default());
        let backward = compare(right, left, &DiffOptions::default());
        assert_eq!(forward.summary.added, backward.summary.removed);
        assert_eq!(forward.summary.removed, backward.summary.added);
        assert_eq!(forward.summary.modified, backward.summary.modified);
        assert_eq!(forward.summary.type_changed, backward.summary.type_changed);
    }
}

#[test]
fn test_whitespace_and_case_combined() {
    let options = DiffOptions {
        ignore_whitespace: true,
        ignore_case: true,
        ..Default::default()
    };
    let diff = compare(r#"{"msg": "  Hello   WORLD "}"#, r#"{"msg": "hello world"}"#, &options);
    assert!(diff.is_identical);
}

#[test]
fn test_yaml_against_json_documents() {
    let diff = compare_documents(
        "name: Alice\nage: 30\n",
        r#"{"name": "Alice", "age": 31}"#,
        FormatHint::Yaml,
        FormatHint::Json,
        &DiffOptions::default(),
    );
    assert_eq!(diff.summary.modified, 1);
    assert_eq!(diff.changes[0].path, vec!["age"]);
}

#[test]
fn test_parse_failure_yields_sentinel_not_panic() {
    let diff = compare(r#"{"a": 1}"#, "{not json", &DiffOptions::default());
    assert_eq!(diff.summary.modified, 1);
    assert_eq!(diff.summary.total, 1);
    assert!(!diff.is_identical);
    assert!(diff.changes[0].path.is_empty());
}

#[test]
fn test_ignored_array_order_with_unequal_lengths() {
    let options = DiffOptions {
        ignore_array_order: true,
        ..Default::default()
    };
    let diff = compare("[3, 1]", "[1, 2, 3]", &options);
    // Sorted: [1, 3] vs [1, 2, 3]; index 1 pairs 3 with 2, index 2 is added.
    assert_eq!(diff.summary.modified, 1);
    assert_eq!(diff.summary.added, 1);
}

#[test]
fn test_pre_order_output_ordering() {
    let diff = compare(
        r#"{"first": {"inner": 1}, "second": [1, 2], "third": 3}"#,
        r#"{"first": {"inner": 2}, "second": [2, 2], "third": 4}"#,
        &DiffOptions::default(),
    );
    let paths: Vec<String> = diff.changes.iter().map(|c| c.path.join(".")).collect();
    assert_eq!(paths, vec!["first.inner", "second.[0]", "third"]);
}
