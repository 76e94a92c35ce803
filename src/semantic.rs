//! Core semantic diff algorithm.
//!
//! Walks two value trees in lock-step and produces a flat, pre-order list
//! of structural change records. Object comparison is key-set based; array
//! comparison pairs elements by index, optionally after reordering both
//! sides when array order is ignored.
//!
//! Index pairing is a deliberate simplification: without
//! `ignore_array_order`, inserting an element in the middle of an array
//! shows up as a cascade of per-index modifications rather than a single
//! insertion. There is no LCS alignment of array elements.
//!
//! # Examples
//!
//! ```
//! use structdiff::{compare_documents, DiffOptions, FormatHint};
//!
//! let diff = compare_documents(
//!     r#"{"age": 30}"#,
//!     r#"{"age": 31}"#,
//!     FormatHint::Json,
//!     FormatHint::Json,
//!     &DiffOptions::default(),
//! );
//! assert_eq!(diff.summary.modified, 1);
//! assert!(!diff.is_identical);
//! ```

use crate::canon::{normalize_scalar, normalize_strings_deep, sort_arrays_deep, sort_keys_deep};
use crate::error::ParseError;
use crate::options::DiffOptions;
use crate::parser::{parse_text, FormatHint};
use crate::value::Value;
use indexmap::IndexMap;

/// Recursion ceiling for the tree walk. Nesting depth is user controlled;
/// past the ceiling the two subtrees are compared wholesale and collapse
/// into at most one Modified record. The parsers reject input nested
/// anywhere near this deep, so the ceiling only matters for
/// programmatically built values.
const MAX_DEPTH: usize = 128;

/// The kind of structural change at one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    /// Present in the right document but not the left.
    Added,
    /// Present in the left document but not the right.
    Removed,
    /// Present on both sides with different values of the same kind.
    Modified,
    /// Present on both sides with different value kinds; the subtree is
    /// treated as fully replaced and not recursed into.
    TypeChanged,
}

/// A single change in the diff.
///
/// The path is a vector of segments: object keys (e.g. "user") and array
/// indices (e.g. "\[0\]"). The empty path addresses the document root.
/// Modified records carry the original values even when the comparison
/// that produced them used normalized forms.
#[derive(Debug, Clone)]
pub struct Change {
    pub path: Vec<String>,
    pub kind: ChangeKind,
    /// Old value (None for Added changes).
    pub old_value: Option<Value>,
    /// New value (None for Removed changes).
    pub new_value: Option<Value>,
    /// Value kind names, set only on TypeChanged records.
    pub old_kind: Option<&'static str>,
    pub new_kind: Option<&'static str>,
}

impl Change {
    fn added(path: Vec<String>, value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Added,
            old_value: None,
            new_value: Some(value),
            old_kind: None,
            new_kind: None,
        }
    }

    fn removed(path: Vec<String>, value: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Removed,
            old_value: Some(value),
            new_value: None,
            old_kind: None,
            new_kind: None,
        }
    }

    fn modified(path: Vec<String>, old: Value, new: Value) -> Self {
        Self {
            path,
            kind: ChangeKind::Modified,
            old_value: Some(old),
            new_value: Some(new),
            old_kind: None,
            new_kind: None,
        }
    }

    fn type_changed(path: Vec<String>, old: Value, new: Value) -> Self {
        let old_kind = old.kind_name();
        let new_kind = new.kind_name();
        Self {
            path,
            kind: ChangeKind::TypeChanged,
            old_value: Some(old),
            new_value: Some(new),
            old_kind: Some(old_kind),
            new_kind: Some(new_kind),
        }
    }
}

/// Tallies of change records by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub type_changed: usize,
    pub total: usize,
}

impl DiffSummary {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// The complete result of one semantic comparison.
#[derive(Debug, Clone)]
pub struct SemanticDiff {
    /// All changes, in pre-order traversal order.
    pub changes: Vec<Change>,
    pub summary: DiffSummary,
    /// True when the documents are equivalent under the options.
    pub is_identical: bool,
}

impl SemanticDiff {
    fn from_changes(changes: Vec<Change>) -> Self {
        let mut summary = DiffSummary::default();
        for change in &changes {
            match change.kind {
                ChangeKind::Added => summary.added += 1,
                ChangeKind::Removed => summary.removed += 1,
                ChangeKind::Modified => summary.modified += 1,
                ChangeKind::TypeChanged => summary.type_changed += 1,
            }
        }
        summary.total = changes.len();

        let is_identical = changes.is_empty();
        Self {
            changes,
            summary,
            is_identical,
        }
    }
}

/// Compares two parsed documents.
///
/// `None` means "absent document" (empty input), which is distinct from a
/// document containing `null`. Both absent compares as identical; exactly
/// one absent produces a single Added or Removed record at the root
/// carrying the present side's whole value.
pub fn compare_values(
    left: Option<&Value>,
    right: Option<&Value>,
    options: &DiffOptions,
) -> SemanticDiff {
    let mut changes = Vec::new();

    match (left, right) {
        (None, None) => {}
        (None, Some(value)) => changes.push(Change::added(Vec::new(), value.clone())),
        (Some(value), None) => changes.push(Change::removed(Vec::new(), value.clone())),
        (Some(l), Some(r)) => walk(l, r, Vec::new(), 0, &mut changes, options),
    }

    SemanticDiff::from_changes(changes)
}

/// Parses and compares two raw text buffers.
///
/// If either side fails to parse, the structural walk is skipped and the
/// result is a single synthetic Modified record at the root carrying the
/// parse-error text, so the caller always receives a well-formed result.
/// A user mid-edit frequently has momentarily invalid syntax; the diff
/// result must stay usable rather than turning into an error.
pub fn compare_documents(
    left_text: &str,
    right_text: &str,
    left_hint: FormatHint,
    right_hint: FormatHint,
    options: &DiffOptions,
) -> SemanticDiff {
    let left = match parse_text(left_text, left_hint) {
        Ok(value) => value,
        Err(err) => return parse_failure(err),
    };
    let right = match parse_text(right_text, right_hint) {
        Ok(value) => value,
        Err(err) => return parse_failure(err),
    };

    compare_values(left.as_ref(), right.as_ref(), options)
}

fn parse_failure(err: ParseError) -> SemanticDiff {
    let change = Change {
        path: Vec::new(),
        kind: ChangeKind::Modified,
        old_value: Some(Value::String(err.to_string())),
        new_value: None,
        old_kind: None,
        new_kind: None,
    };
    SemanticDiff::from_changes(vec![change])
}

fn walk(
    left: &Value,
    right: &Value,
    path: Vec<String>,
    depth: usize,
    changes: &mut Vec<Change>,
    options: &DiffOptions,
) {
    if depth >= MAX_DEPTH {
        if left != right {
            changes.push(Change::modified(path, left.clone(), right.clone()));
        }
        return;
    }

    match (left, right) {
        (Value::Null, Value::Null) => {}
        (Value::Bool(a), Value::Bool(b)) => {
            if a != b {
                changes.push(Change::modified(path, left.clone(), right.clone()));
            }
        }
        (Value::Number(a), Value::Number(b)) => {
            if a != b {
                changes.push(Change::modified(path, left.clone(), right.clone()));
            }
        }
        (Value::String(a), Value::String(b)) => {
            if normalize_scalar(a, options) != normalize_scalar(b, options) {
                changes.push(Change::modified(path, left.clone(), right.clone()));
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            walk_arrays(a, b, path, depth, changes, options);
        }
        (Value::Object(a), Value::Object(b)) => {
            walk_objects(a, b, path, depth, changes, options);
        }
        // Different kinds: the subtree is fully replaced, no recursion
        _ => changes.push(Change::type_changed(path, left.clone(), right.clone())),
    }
}

/// Key-set comparison over the union of both sides' keys.
///
/// Emission order: left's keys in left order (recurse, or Removed when the
/// key is gone), then right-only keys in right order (Added). Key order
/// itself is never compared, regardless of `ignore_key_order`; that flag
/// only affects canonical serialization.
fn walk_objects(
    left: &IndexMap<String, Value>,
    right: &IndexMap<String, Value>,
    path: Vec<String>,
    depth: usize,
    changes: &mut Vec<Change>,
    options: &DiffOptions,
) {
    for (key, left_value) in left {
        let mut key_path = path.clone();
        key_path.push(key.clone());

        match right.get(key) {
            Some(right_value) => {
                walk(left_value, right_value, key_path, depth + 1, changes, options);
            }
            None => changes.push(Change::removed(key_path, left_value.clone())),
        }
    }

    for (key, right_value) in right {
        if !left.contains_key(key) {
            let mut key_path = path.clone();
            key_path.push(key.clone());
            changes.push(Change::added(key_path, right_value.clone()));
        }
    }
}

/// Index pairing up to the longer side's length, after optional reordering.
fn walk_arrays(
    left: &[Value],
    right: &[Value],
    path: Vec<String>,
    depth: usize,
    changes: &mut Vec<Change>,
    options: &DiffOptions,
) {
    let (left_items, right_items) = if options.ignore_array_order {
        (reorder(left, options), reorder(right, options))
    } else {
        (left.iter().collect(), right.iter().collect())
    };

    let max_len = left_items.len().max(right_items.len());
    for i in 0..max_len {
        let mut item_path = path.clone();
        item_path.push(format!("[{}]", i));

        match (left_items.get(i), right_items.get(i)) {
            (Some(l), Some(r)) => walk(l, r, item_path, depth + 1, changes, options),
            (Some(l), None) => changes.push(Change::removed(item_path, (*l).clone())),
            (None, Some(r)) => changes.push(Change::added(item_path, (*r).clone())),
            (None, None) => {}
        }
    }
}

/// Sorts element references by each element's canonical serialization
/// under the active options, so equivalent elements land at matching
/// indices on both sides. The records still carry the original elements.
fn reorder<'a>(items: &'a [Value], options: &DiffOptions) -> Vec<&'a Value> {
    let mut refs: Vec<&Value> = items.iter().collect();
    refs.sort_by_cached_key(|item| pairing_key(item, options));
    refs
}

fn pairing_key(value: &Value, options: &DiffOptions) -> String {
    let mut current = value.clone();
    if options.ignore_key_order {
        current = sort_keys_deep(&current);
    }
    current = sort_arrays_deep(&current);
    if options.ignore_whitespace || options.ignore_case {
        current = normalize_strings_deep(&current, options);
    }
    serde_json::to_string(&current.to_json()).unwrap_or_default()
}
