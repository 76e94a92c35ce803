//! Side-by-side textual diff over canonicalized documents.
//!
//! Both sides are canonicalized (§`canon`), split on line boundaries, and
//! run through the `similar` crate's Myers line diff. Hunks are expanded
//! into per-line records with independently incrementing line numbers for
//! the left (unchanged + removed) and right (unchanged + added) sequences.
//!
//! With `show_word_diff`, the k-th removed left line is paired with the
//! k-th added right line and a word-level diff is attached to both. The
//! pairing is greedy in traversal order, not an optimal alignment across
//! candidate pairs; this is a deliberate limitation, kept for parity with
//! the established behavior.

use crate::canon::canonicalize_text;
use crate::options::DiffOptions;
use crate::parser::FormatHint;
use similar::{ChangeTag, TextDiff};

/// Classification shared by whole lines and word spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextChangeKind {
    Unchanged,
    Added,
    Removed,
}

/// A word-level region inside a modified line pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSpan {
    pub text: String,
    pub kind: TextChangeKind,
}

/// One rendered line on either side of the diff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    /// 1-based line number within this side's sequence.
    pub line_number: usize,
    pub text: String,
    pub kind: TextChangeKind,
    /// Word-level detail; set only on lines that belong to a modified
    /// removed/added pair when `show_word_diff` is on.
    pub word_spans: Option<Vec<WordSpan>>,
}

/// The side-by-side result consumed by rendering.
#[derive(Debug, Clone, Default)]
pub struct TextDiffResult {
    pub left: Vec<DiffLine>,
    pub right: Vec<DiffLine>,
    pub has_differences: bool,
    pub added_count: usize,
    pub removed_count: usize,
}

/// Canonicalizes two raw text buffers and diffs them line by line.
///
/// Unparseable input falls back to raw-text lines (see
/// [`canonicalize_text`]), so the result is always well-formed.
///
/// # Examples
///
/// ```
/// use structdiff::{compare_text, DiffOptions, FormatHint};
///
/// let result = compare_text(
///     r#"{"a": 1}"#,
///     r#"{"a": 2}"#,
///     FormatHint::Json,
///     FormatHint::Json,
///     &DiffOptions::default(),
/// );
/// assert!(result.has_differences);
/// ```
pub fn compare_text(
    left_text: &str,
    right_text: &str,
    left_hint: FormatHint,
    right_hint: FormatHint,
    options: &DiffOptions,
) -> TextDiffResult {
    let left_canonical = canonicalize_text(left_text, left_hint, options);
    let right_canonical = canonicalize_text(right_text, right_hint, options);
    diff_lines(&left_canonical, &right_canonical, options)
}

/// Line diff over two already-canonical texts.
pub fn diff_lines(left: &str, right: &str, options: &DiffOptions) -> TextDiffResult {
    if left.is_empty() && right.is_empty() {
        return TextDiffResult::default();
    }

    let text_diff = TextDiff::from_lines(left, right);

    let mut left_lines = Vec::new();
    let mut right_lines = Vec::new();
    let mut left_number = 0usize;
    let mut right_number = 0usize;
    let mut added_count = 0usize;
    let mut removed_count = 0usize;

    for change in text_diff.iter_all_changes() {
        let text = change.value().trim_end_matches('\n').to_string();
        match change.tag() {
            ChangeTag::Equal => {
                left_number += 1;
                right_number += 1;
                left_lines.push(DiffLine {
                    line_number: left_number,
                    text: text.clone(),
                    kind: TextChangeKind::Unchanged,
                    word_spans: None,
                });
                right_lines.push(DiffLine {
                    line_number: right_number,
                    text,
                    kind: TextChangeKind::Unchanged,
                    word_spans: None,
                });
            }
            ChangeTag::Delete => {
                left_number += 1;
                removed_count += 1;
                left_lines.push(DiffLine {
                    line_number: left_number,
                    text,
                    kind: TextChangeKind::Removed,
                    word_spans: None,
                });
            }
            ChangeTag::Insert => {
                right_number += 1;
                added_count += 1;
                right_lines.push(DiffLine {
                    line_number: right_number,
                    text,
                    kind: TextChangeKind::Added,
                    word_spans: None,
                });
            }
        }
    }

    if options.show_word_diff {
        attach_word_spans(&mut left_lines, &mut right_lines);
    }

    TextDiffResult {
        left: left_lines,
        right: right_lines,
        has_differences: added_count + removed_count > 0,
        added_count,
        removed_count,
    }
}

/// Pairs removed/added lines greedily in traversal order and attaches
/// word-level spans to each pair. Unpaired lines keep `word_spans: None`.
fn attach_word_spans(left_lines: &mut [DiffLine], right_lines: &mut [DiffLine]) {
    let removed: Vec<usize> = left_lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.kind == TextChangeKind::Removed)
        .map(|(i, _)| i)
        .collect();
    let added: Vec<usize> = right_lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.kind == TextChangeKind::Added)
        .map(|(i, _)| i)
        .collect();

    for (&left_idx, &right_idx) in removed.iter().zip(added.iter()) {
        let (left_spans, right_spans) =
            word_spans(&left_lines[left_idx].text, &right_lines[right_idx].text);
        left_lines[left_idx].word_spans = Some(left_spans);
        right_lines[right_idx].word_spans = Some(right_spans);
    }
}

/// Word-level LCS between the two lines of a modified pair. The left line
/// gets Unchanged/Removed spans, the right line Unchanged/Added spans.
fn word_spans(old: &str, new: &str) -> (Vec<WordSpan>, Vec<WordSpan>) {
    let diff = TextDiff::from_words(old, new);

    let mut left = Vec::new();
    let mut right = Vec::new();
    for change in diff.iter_all_changes() {
        let text = change.value().to_string();
        match change.tag() {
            ChangeTag::Equal => {
                left.push(WordSpan {
                    text: text.clone(),
                    kind: TextChangeKind::Unchanged,
                });
                right.push(WordSpan {
                    text,
                    kind: TextChangeKind::Unchanged,
                });
            }
            ChangeTag::Delete => left.push(WordSpan {
                text,
                kind: TextChangeKind::Removed,
            }),
            ChangeTag::Insert => right.push(WordSpan {
                text,
                kind: TextChangeKind::Added,
            }),
        }
    }

    (left, right)
}
