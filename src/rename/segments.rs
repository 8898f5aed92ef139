//! Segment-level view of a path, used to compute trimmed rename targets

use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::string_utils::trim_name;

/// A path split into its anchor, a leading `./` marker, and named segments.
///
/// Trimming works segment by segment on this form rather than on the
/// on-disk path, so a target can be computed for an entry whose ancestors
/// have not been renamed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedPath {
    /// Root directory and/or drive prefix; empty for relative paths.
    anchor: PathBuf,
    /// Whether the original path started with `./`.
    relative: bool,
    segments: Vec<OsString>,
}

impl SegmentedPath {
    /// Decompose a path into segments.
    pub fn parse(path: &Path) -> Self {
        let mut anchor = PathBuf::new();
        let mut relative = false;
        let mut segments = Vec::new();

        for (index, component) in path.components().enumerate() {
            match component {
                Component::Prefix(_) | Component::RootDir => anchor.push(component.as_os_str()),
                Component::CurDir => relative |= index == 0,
                Component::ParentDir | Component::Normal(_) => {
                    segments.push(component.as_os_str().to_os_string())
                }
            }
        }

        Self {
            anchor,
            relative,
            segments,
        }
    }

    pub fn segments(&self) -> &[OsString] {
        &self.segments
    }

    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// The last segment, if any.
    pub fn name(&self) -> Option<&OsStr> {
        self.segments.last().map(OsString::as_os_str)
    }

    /// The same path with one more segment appended.
    pub fn child(&self, name: &OsStr) -> Self {
        let mut child = self.clone();
        child.segments.push(name.to_os_string());
        child
    }

    /// Every segment trimmed independently. Anchor and `./` marker are kept.
    ///
    /// A segment made up entirely of whitespace stays as it is: that
    /// directory can never be renamed, so its contents stay below it.
    pub fn trimmed(&self) -> Self {
        Self {
            anchor: self.anchor.clone(),
            relative: self.relative,
            segments: self
                .segments
                .iter()
                .map(|s| match trim_name(s) {
                    t if t.is_empty() => s.clone(),
                    t => t.to_os_string(),
                })
                .collect(),
        }
    }

    /// Rebuild a filesystem path. An empty relative path becomes `.`.
    pub fn to_path_buf(&self) -> PathBuf {
        let mut path = self.anchor.clone();
        if self.relative {
            path.push(".");
        }
        for segment in &self.segments {
            path.push(segment);
        }
        if path.as_os_str().is_empty() {
            path.push(".");
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(path: &SegmentedPath) -> Vec<&str> {
        path.segments()
            .iter()
            .map(|s| s.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_parse_relative_marker() {
        let path = SegmentedPath::parse(Path::new("./ a /b "));
        assert!(path.is_relative());
        assert_eq!(names(&path), vec![" a ", "b "]);
        assert_eq!(path.to_path_buf(), PathBuf::from("./ a /b "));
    }

    #[test]
    fn test_parse_plain_relative() {
        let path = SegmentedPath::parse(Path::new("a/b"));
        assert!(!path.is_relative());
        assert_eq!(path.to_path_buf(), PathBuf::from("a/b"));
    }

    #[test]
    fn test_current_dir_alone() {
        let path = SegmentedPath::parse(Path::new("."));
        assert!(path.is_relative());
        assert!(path.segments().is_empty());
        assert_eq!(path.to_path_buf(), PathBuf::from("."));
        assert_eq!(path.child(OsStr::new(" x ")).to_path_buf(), PathBuf::from("./ x "));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolute_path_keeps_root() {
        let path = SegmentedPath::parse(Path::new("/tmp/ work /x"));
        assert!(!path.is_relative());
        assert_eq!(path.trimmed().to_path_buf(), PathBuf::from("/tmp/work/x"));
    }

    #[test]
    fn test_trimmed_trims_every_segment() {
        let path = SegmentedPath::parse(Path::new("./ outer / inner /leaf"));
        let trimmed = path.trimmed();
        assert!(trimmed.is_relative());
        assert_eq!(names(&trimmed), vec!["outer", "inner", "leaf"]);
        assert_eq!(trimmed.to_path_buf(), PathBuf::from("./outer/inner/leaf"));
        assert_ne!(trimmed, path);
    }

    #[test]
    fn test_trimmed_clean_path_is_equal() {
        let path = SegmentedPath::parse(Path::new("./src/lib"));
        assert_eq!(path.trimmed(), path);
    }

    #[test]
    fn test_trimmed_keeps_whitespace_only_segment() {
        let path = SegmentedPath::parse(Path::new("./   / x "));
        assert_eq!(names(&path.trimmed()), vec!["   ", "x"]);
    }

    #[test]
    fn test_trailing_separator_ignored() {
        let with = SegmentedPath::parse(Path::new("foo/"));
        let without = SegmentedPath::parse(Path::new("foo"));
        assert_eq!(with, without);
    }

    #[test]
    fn test_name_is_last_segment() {
        let path = SegmentedPath::parse(Path::new("a/ b "));
        assert_eq!(path.name(), Some(OsStr::new(" b ")));
        assert_eq!(SegmentedPath::parse(Path::new(".")).name(), None);
    }
}
