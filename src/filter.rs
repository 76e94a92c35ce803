//! Path filtering for diff results.
//!
//! Glob-style pattern matching over change paths, so hosts can ignore
//! volatile fields (timestamps, build ids) or focus on one subtree.
//!
//! # Pattern Syntax
//!
//! - `foo` - matches literal segment "foo"
//! - `*` - matches any single path segment
//! - `**` - matches any number of path segments (including zero)
//! - `foo.bar` - matches nested path "foo.bar"
//! - `**.version` - matches "version" at any depth
//!
//! # Examples
//!
//! ```
//! use structdiff::filter::PathPattern;
//!
//! let pattern = PathPattern::parse("metadata.timestamp");
//! assert!(pattern.matches(&["metadata".to_string(), "timestamp".to_string()]));
//!
//! let pattern = PathPattern::parse("**.version");
//! assert!(pattern.matches(&["package".to_string(), "version".to_string()]));
//! ```

use crate::semantic::{Change, ChangeKind, DiffSummary, SemanticDiff};

/// A single segment in a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegment {
    /// Matches an exact string
    Literal(String),
    /// Matches any single path segment (*)
    SingleWildcard,
    /// Matches any number of path segments (**)
    DoubleWildcard,
}

/// A compiled path pattern for matching against change paths.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pub segments: Vec<PatternSegment>,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('.')
            .map(|s| match s {
                "**" => PatternSegment::DoubleWildcard,
                "*" => PatternSegment::SingleWildcard,
                _ => PatternSegment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    pub fn matches(&self, path: &[String]) -> bool {
        Self::matches_recursive(&self.segments, path)
    }

    fn matches_recursive(pattern: &[PatternSegment], path: &[String]) -> bool {
        match (pattern.first(), path.first()) {
            (None, None) => true,
            (None, Some(_)) => false,
            (Some(_), None) => pattern
                .iter()
                .all(|s| matches!(s, PatternSegment::DoubleWildcard)),
            (Some(segment), Some(path_segment)) => match segment {
                PatternSegment::Literal(lit) => {
                    lit == path_segment && Self::matches_recursive(&pattern[1..], &path[1..])
                }
                PatternSegment::SingleWildcard => {
                    Self::matches_recursive(&pattern[1..], &path[1..])
                }
                PatternSegment::DoubleWildcard => {
                    Self::matches_recursive(&pattern[1..], path)
                        || Self::matches_recursive(pattern, &path[1..])
                }
            },
        }
    }
}

/// Configuration for filtering diff results.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Patterns for paths to ignore (exclude from output)
    pub ignore_patterns: Vec<PathPattern>,
    /// Patterns for paths to include (if non-empty, only these are shown)
    pub only_patterns: Vec<PathPattern>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore(mut self, pattern: &str) -> Self {
        self.ignore_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn only(mut self, pattern: &str) -> Self {
        self.only_patterns.push(PathPattern::parse(pattern));
        self
    }

    pub fn has_filters(&self) -> bool {
        !self.ignore_patterns.is_empty() || !self.only_patterns.is_empty()
    }

    pub fn should_include(&self, path: &[String]) -> bool {
        for pattern in &self.ignore_patterns {
            if pattern.matches(path) {
                return false;
            }
        }

        // If only patterns are specified, at least one must match
        if !self.only_patterns.is_empty() {
            return self.only_patterns.iter().any(|p| p.matches(path));
        }

        true
    }
}

/// Filters a diff, recomputing the summary from the surviving changes.
pub fn filter_diff(diff: &SemanticDiff, config: &FilterConfig) -> SemanticDiff {
    if !config.has_filters() {
        return diff.clone();
    }

    let changes: Vec<Change> = diff
        .changes
        .iter()
        .filter(|change| config.should_include(&change.path))
        .cloned()
        .collect();

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
    SemanticDiff {
        changes,
        summary,
        is_identical,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_double_wildcard_matches_empty_tail() {
        let pattern = PathPattern::parse("foo.**");
        assert!(pattern.matches(&["foo".to_string()]));
        assert!(pattern.matches(&["foo".to_string(), "bar".to_string()]));
        assert!(!pattern.matches(&["baz".to_string()]));
    }

    #[test]
    fn test_should_include_only_wins_over_nothing() {
        let config = FilterConfig::new().only("a.*");
        assert!(config.should_include(&["a".to_string(), "b".to_string()]));
        assert!(!config.should_include(&["c".to_string()]));
    }
}
