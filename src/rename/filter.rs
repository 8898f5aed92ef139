//! Skip rules for the rename walk

use std::ffi::OsStr;

use glob::Pattern;

use super::segments::SegmentedPath;

/// Directory name that is never descended into or renamed.
pub const ALWAYS_SKIPPED: &str = "node_modules";

/// A single user-supplied ignore rule.
#[derive(Debug, Clone)]
struct IgnoreRule {
    name: String,
    pattern: Option<Pattern>,
}

impl IgnoreRule {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pattern: Pattern::new(name).ok(),
        }
    }

    fn matches(&self, segment: &str) -> bool {
        segment == self.name || self.pattern.as_ref().is_some_and(|p| p.matches(segment))
    }
}

/// Decides which paths are left alone.
///
/// A path is skipped when any of its segments, at any depth, is
/// `node_modules` or matches one of the ignore patterns. Every path is
/// checked on its own; results are never cached.
#[derive(Debug, Clone, Default)]
pub struct SkipFilter {
    rules: Vec<IgnoreRule>,
}

impl SkipFilter {
    /// Build a filter from extra names or glob patterns.
    /// Patterns that fail to compile still match by exact name.
    pub fn new(ignore_patterns: &[String]) -> Self {
        Self {
            rules: ignore_patterns.iter().map(|p| IgnoreRule::new(p)).collect(),
        }
    }

    /// Check a single segment.
    pub fn is_skipped_segment(&self, segment: &OsStr) -> bool {
        if segment == ALWAYS_SKIPPED {
            return true;
        }
        match segment.to_str() {
            Some(s) => self.rules.iter().any(|rule| rule.matches(s)),
            None => false,
        }
    }

    /// Check every segment of a path.
    pub fn is_skipped(&self, path: &SegmentedPath) -> bool {
        path.segments()
            .iter()
            .any(|segment| self.is_skipped_segment(segment))
    }
}
