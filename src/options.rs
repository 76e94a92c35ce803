//! Equivalence options shared by the canonicalizer and both diff engines.

/// Controls which differences between two documents count as changes.
///
/// Each toggle is independent. The same options value must be passed to the
/// semantic engine and the textual adapter so their results agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffOptions {
    /// Sort object keys before canonical serialization.
    ///
    /// Object comparison in the semantic engine is key-set based regardless
    /// of this flag; it only affects the canonical text form.
    pub ignore_key_order: bool,
    /// Trim strings and collapse internal whitespace runs before comparing.
    pub ignore_whitespace: bool,
    /// Lowercase strings before comparing (applied after whitespace
    /// normalization).
    pub ignore_case: bool,
    /// Treat arrays as unordered: both sides are sorted by each element's
    /// canonical serialization before pairing.
    pub ignore_array_order: bool,
    /// Attach word-level spans to modified line pairs in the textual diff.
    pub show_word_diff: bool,
    /// Presentation-only: hosts use this to synchronize pane scrolling.
    /// Has no effect on comparison results.
    pub sync_scroll: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_key_order: false,
            ignore_whitespace: false,
            ignore_case: false,
            ignore_array_order: false,
            show_word_diff: false,
            sync_scroll: true,
        }
    }
}
