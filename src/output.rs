//! Output formatting for diff results.
//!
//! Renders a `SemanticDiff` as colored terminal text, plain text, or JSON,
//! and a `TextDiffResult` as a side-by-side listing. Hosts embedding the
//! library render results themselves; these formatters back the CLI.

use crate::error::OutputError;
use crate::semantic::{Change, ChangeKind, DiffSummary, SemanticDiff};
use crate::textual::{DiffLine, TextChangeKind, TextDiffResult};
use crate::value::Value;
use colored::*;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored terminal output with ANSI escape codes
    Terminal,
    /// JSON representation of the diff
    Json,
    /// Plain text, no colors (suitable for piping)
    Plain,
}

/// Options for controlling output formatting.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    /// Maximum length for displayed values (truncate if longer)
    pub max_value_length: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            max_value_length: 80,
        }
    }
}

/// Formats a semantic diff according to the specified format and options.
///
/// # Examples
///
/// ```
/// use structdiff::{compare_documents, format_diff, DiffOptions, FormatHint};
/// use structdiff::{OutputFormat, OutputOptions};
///
/// let diff = compare_documents(
///     r#"{"age": 30}"#,
///     r#"{"age": 31}"#,
///     FormatHint::Json,
///     FormatHint::Json,
///     &DiffOptions::default(),
/// );
/// let output = format_diff(&diff, &OutputFormat::Plain, &OutputOptions::default()).unwrap();
/// assert!(output.contains("age"));
/// ```
pub fn format_diff(
    diff: &SemanticDiff,
    format: &OutputFormat,
    options: &OutputOptions,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Terminal => Ok(format_terminal(diff, options)),
        OutputFormat::Json => format_json(diff),
        OutputFormat::Plain => Ok(format_plain(diff, options)),
    }
}

fn format_terminal(diff: &SemanticDiff, options: &OutputOptions) -> String {
    if diff.changes.is_empty() {
        return "No changes detected.".dimmed().to_string();
    }

    let mut output = String::new();
    for change in &diff.changes {
        output.push_str(&format_change_terminal(change, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&diff.summary));
    output
}

fn format_change_terminal(change: &Change, options: &OutputOptions) -> String {
    let path = format_path(&change.path);

    match change.kind {
        ChangeKind::Added => {
            let value = preview(&change.new_value, options.max_value_length);
            format!("{} {}: {}", "+".bright_green(), path.green(), value.green())
        }
        ChangeKind::Removed => {
            let value = preview(&change.old_value, options.max_value_length);
            format!("{} {}: {}", "-".bright_red(), path.red(), value.red())
        }
        ChangeKind::Modified => {
            let old_value = preview(&change.old_value, options.max_value_length);
            let new_value = preview(&change.new_value, options.max_value_length);
            format!(
                "{} {}: {} {} {}",
                "•".bright_yellow(),
                path.yellow(),
                old_value.yellow(),
                "→".bright_yellow(),
                new_value.yellow()
            )
        }
        ChangeKind::TypeChanged => {
            let old_value = preview(&change.old_value, options.max_value_length);
            let new_value = preview(&change.new_value, options.max_value_length);
            format!(
                "{} {}: {} ({}) {} {} ({})",
                "±".bright_magenta(),
                path.magenta(),
                old_value.magenta(),
                change.old_kind.unwrap_or("unknown"),
                "→".bright_magenta(),
                new_value.magenta(),
                change.new_kind.unwrap_or("unknown")
            )
        }
    }
}

fn format_plain(diff: &SemanticDiff, options: &OutputOptions) -> String {
    if diff.changes.is_empty() {
        return "No changes detected.".to_string();
    }

    let mut output = String::new();
    for change in &diff.changes {
        output.push_str(&format_change_plain(change, options));
        output.push('\n');
    }

    output.push('\n');
    output.push_str(&format_summary(&diff.summary));
    output
}

fn format_change_plain(change: &Change, options: &OutputOptions) -> String {
    let path = format_path(&change.path);

    match change.kind {
        ChangeKind::Added => {
            let value = preview(&change.new_value, options.max_value_length);
            format!("+ {}: {}", path, value)
        }
        ChangeKind::Removed => {
            let value = preview(&change.old_value, options.max_value_length);
            format!("- {}: {}", path, value)
        }
        ChangeKind::Modified => {
            let old_value = preview(&change.old_value, options.max_value_length);
            let new_value = preview(&change.new_value, options.max_value_length);
            format!("• {}: {} → {}", path, old_value, new_value)
        }
        ChangeKind::TypeChanged => {
            let old_value = preview(&change.old_value, options.max_value_length);
            let new_value = preview(&change.new_value, options.max_value_length);
            format!(
                "± {}: {} ({}) → {} ({})",
                path,
                old_value,
                change.old_kind.unwrap_or("unknown"),
                new_value,
                change.new_kind.unwrap_or("unknown")
            )
        }
    }
}

fn format_json(diff: &SemanticDiff) -> Result<String, OutputError> {
    use serde_json::json;

    let changes: Vec<serde_json::Value> = diff
        .changes
        .iter()
        .map(|c| {
            json!({
                "path": format_path(&c.path),
                "segments": c.path,
                "kind": kind_label(c.kind),
                "old_value": c.old_value.as_ref().map(Value::to_json),
                "new_value": c.new_value.as_ref().map(Value::to_json),
                "old_kind": c.old_kind,
                "new_kind": c.new_kind,
            })
        })
        .collect();

    let output = json!({
        "changes": changes,
        "summary": {
            "added": diff.summary.added,
            "removed": diff.summary.removed,
            "modified": diff.summary.modified,
            "type_changed": diff.summary.type_changed,
            "total": diff.summary.total,
        },
        "is_identical": diff.is_identical,
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn kind_label(kind: ChangeKind) -> &'static str {
    match kind {
        ChangeKind::Added => "added",
        ChangeKind::Removed => "removed",
        ChangeKind::Modified => "modified",
        ChangeKind::TypeChanged => "type_changed",
    }
}

/// Converts a path vector to a readable string.
///
/// Object keys join with dots, array indices keep their bracket notation,
/// and the empty path (the document root) renders as `$`.
///
/// - `["user", "name"]` → `"user.name"`
/// - `["items", "[0]", "id"]` → `"items[0].id"`
/// - `[]` → `"$"`
pub fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        return "$".to_string();
    }

    let mut result = String::new();
    for (i, component) in path.iter().enumerate() {
        if component.starts_with('[') {
            result.push_str(component);
        } else {
            if i > 0 {
                result.push('.');
            }
            result.push_str(component);
        }
    }
    result
}

fn preview(value: &Option<Value>, max_length: usize) -> String {
    value
        .as_ref()
        .map(|v| v.preview(max_length))
        .unwrap_or_else(|| "(absent)".to_string())
}

fn format_summary(summary: &DiffSummary) -> String {
    if summary.is_empty() {
        return "Summary: No changes".to_string();
    }

    let mut parts = Vec::new();
    if summary.added > 0 {
        parts.push(format!("{} added", summary.added));
    }
    if summary.removed > 0 {
        parts.push(format!("{} removed", summary.removed));
    }
    if summary.modified > 0 {
        parts.push(format!("{} modified", summary.modified));
    }
    if summary.type_changed > 0 {
        parts.push(format!("{} type changed", summary.type_changed));
    }

    format!("Summary: {}", parts.join(", "))
}

/// Formats a side-by-side text diff.
///
/// Terminal and Plain render aligned two-column rows; Json emits the line
/// lists (including word spans) for machine consumption.
pub fn format_text_diff(
    result: &TextDiffResult,
    format: &OutputFormat,
) -> Result<String, OutputError> {
    match format {
        OutputFormat::Json => text_diff_json(result),
        OutputFormat::Terminal => Ok(text_diff_columns(result, true)),
        OutputFormat::Plain => Ok(text_diff_columns(result, false)),
    }
}

fn text_diff_json(result: &TextDiffResult) -> Result<String, OutputError> {
    use serde_json::json;

    let side = |lines: &[DiffLine]| -> Vec<serde_json::Value> {
        lines
            .iter()
            .map(|line| {
                json!({
                    "line_number": line.line_number,
                    "text": line.text,
                    "kind": text_kind_label(line.kind),
                    "word_spans": line.word_spans.as_ref().map(|spans| {
                        spans
                            .iter()
                            .map(|s| json!({"text": s.text, "kind": text_kind_label(s.kind)}))
                            .collect::<Vec<_>>()
                    }),
                })
            })
            .collect()
    };

    let output = json!({
        "left": side(&result.left),
        "right": side(&result.right),
        "has_differences": result.has_differences,
        "added_count": result.added_count,
        "removed_count": result.removed_count,
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| OutputError::JsonSerializationError { source: e })
}

fn text_kind_label(kind: TextChangeKind) -> &'static str {
    match kind {
        TextChangeKind::Unchanged => "unchanged",
        TextChangeKind::Added => "added",
        TextChangeKind::Removed => "removed",
    }
}

const COLUMN_WIDTH: usize = 48;

fn text_diff_columns(result: &TextDiffResult, color: bool) -> String {
    if !result.has_differences && result.left.is_empty() {
        let message = "No differences.";
        return if color {
            message.dimmed().to_string()
        } else {
            message.to_string()
        };
    }

    let mut rows = Vec::new();
    let mut left_iter = result.left.iter().peekable();
    let mut right_iter = result.right.iter().peekable();

    loop {
        // Drain one-sided lines first so unchanged lines stay aligned.
        while left_iter
            .peek()
            .is_some_and(|l| l.kind == TextChangeKind::Removed)
        {
            rows.push(render_row(left_iter.next(), None, color));
        }
        while right_iter
            .peek()
            .is_some_and(|l| l.kind == TextChangeKind::Added)
        {
            rows.push(render_row(None, right_iter.next(), color));
        }

        match (left_iter.next(), right_iter.next()) {
            (None, None) => break,
            (left, right) => rows.push(render_row(left, right, color)),
        }
    }

    rows.join("\n")
}

fn render_row(left: Option<&DiffLine>, right: Option<&DiffLine>, color: bool) -> String {
    let left_cell = cell(left);
    let right_cell = cell(right);
    let row = format!("{:<width$} │ {}", left_cell, right_cell, width = COLUMN_WIDTH);

    if !color {
        return row;
    }

    match (left.map(|l| l.kind), right.map(|r| r.kind)) {
        (Some(TextChangeKind::Removed), _) => row.red().to_string(),
        (_, Some(TextChangeKind::Added)) => row.green().to_string(),
        _ => row,
    }
}

fn cell(line: Option<&DiffLine>) -> String {
    match line {
        Some(line) => {
            let marker = match line.kind {
                TextChangeKind::Unchanged => ' ',
                TextChangeKind::Added => '+',
                TextChangeKind::Removed => '-',
            };
            let mut text = format!("{:>4} {} {}", line.line_number, marker, line.text);
            if text.len() > COLUMN_WIDTH {
                text.truncate(COLUMN_WIDTH.saturating_sub(3));
                text.push_str("...");
            }
            text
        }
        None => String::new(),
    }
}
