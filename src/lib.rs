//! structdiff - structural comparison engine for JSON and YAML.
//!
//! Compares two structured documents two ways, both driven by the same
//! [`DiffOptions`] so their results agree:
//!
//! - **Semantic diff** ([`compare_documents`] / [`compare_values`]): walks
//!   the parsed value trees and emits a flat list of change records
//!   (added / removed / modified / type changed) addressed by path.
//! - **Textual diff** ([`compare_text`]): canonicalizes both sides to a
//!   stable JSON form and runs a line diff (optionally with word-level
//!   detail) for side-by-side display.
//!
//! # Example
//!
//! ```
//! use structdiff::{compare_documents, DiffOptions, FormatHint};
//!
//! let diff = compare_documents(
//!     r#"{"name": "Alice", "age": 30}"#,
//!     r#"{"name": "Alice", "age": 31}"#,
//!     FormatHint::Json,
//!     FormatHint::Json,
//!     &DiffOptions::default(),
//! );
//!
//! assert!(!diff.is_identical);
//! assert_eq!(diff.summary.modified, 1);
//! ```

pub mod canon;
pub mod error;
pub mod filter;
pub mod options;
pub mod output;
pub mod parser;
pub mod semantic;
pub mod textual;
pub mod value;

// Re-export commonly used types for convenience
pub use canon::{canonicalize, canonicalize_text, normalize_scalar, sort_arrays_deep, sort_keys_deep};
pub use error::{OutputError, ParseError, StructdiffError};
pub use filter::{filter_diff, FilterConfig, PathPattern};
pub use options::DiffOptions;
pub use output::{format_diff, format_path, format_text_diff, OutputFormat, OutputOptions};
pub use parser::{parse_file, parse_json, parse_text, parse_yaml, FormatHint};
pub use semantic::{
    compare_documents, compare_values, Change, ChangeKind, DiffSummary, SemanticDiff,
};
pub use textual::{compare_text, diff_lines, DiffLine, TextChangeKind, TextDiffResult, WordSpan};
pub use value::Value;
