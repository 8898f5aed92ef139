//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::string_utils::needs_trim;

/// A temporary directory tree for testing.
///
/// Paths passed to the helpers are relative to the tree root and may contain
/// leading or trailing spaces in any segment. The tree is removed on drop.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory, creating parent directories as needed.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Check whether an entry exists, without following symlinks.
    pub fn exists(&self, path: &str) -> bool {
        fs::symlink_metadata(self.dir.path().join(path)).is_ok()
    }

    /// Read a file's content.
    pub fn read(&self, path: &str) -> String {
        fs::read_to_string(self.dir.path().join(path)).expect("Failed to read file")
    }

    /// All entries below the root as sorted `/`-separated relative paths.
    /// Symlinked directories are listed but not descended into.
    pub fn entries(&self) -> Vec<String> {
        let mut entries = Vec::new();
        visit_entries(self.dir.path(), "", &mut |relative, _| {
            entries.push(relative.to_string())
        });
        entries.sort();
        entries
    }

    /// Entries whose own name still has leading or trailing whitespace.
    pub fn untrimmed_entries(&self) -> Vec<String> {
        let mut untrimmed = Vec::new();
        visit_entries(self.dir.path(), "", &mut |relative, name| {
            if needs_trim(OsStr::new(name)) {
                untrimmed.push(relative.to_string());
            }
        });
        untrimmed.sort();
        untrimmed
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

fn visit_entries(dir: &Path, prefix: &str, f: &mut dyn FnMut(&str, &str)) {
    let Ok(read) = fs::read_dir(dir) else {
        return;
    };
    for entry in read.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        let relative = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}/{}", prefix, name)
        };
        f(&relative, &name);
        let is_real_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        if is_real_dir {
            visit_entries(&entry.path(), &relative, f);
        }
    }
}
