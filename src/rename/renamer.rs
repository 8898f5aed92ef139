//! Renamer - bottom-up walk that trims whitespace from entry names

use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::output::{ActionKind, RenameEvent, RenameOutput};
use crate::string_utils::{needs_trim, trim_name};

use super::config::RenamerConfig;
use super::error::{RenameError, Result};
use super::filter::SkipFilter;
use super::segments::SegmentedPath;

/// Counts for a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameSummary {
    /// Renames reported in dry-run mode
    pub planned: usize,
    /// Renames performed
    pub moved: usize,
    /// Renames blocked by an existing target
    pub conflicts: usize,
    /// Entries left alone by the skip filter
    pub skipped: usize,
}

/// A subdirectory as recorded by the visit of its parent.
#[derive(Debug)]
struct Subdir {
    name: OsString,
    is_symlink: bool,
}

/// Directory contents as read at the start of a visit.
#[derive(Debug)]
struct DirVisit {
    files: Vec<OsString>,
    /// Updated in place when a subdirectory is renamed.
    subdirs: Vec<Subdir>,
}

/// Trims leading and trailing whitespace from every file and directory name
/// under a root.
///
/// The walk is bottom-up: a directory's contents are handled under its old
/// path before the directory itself is renamed by its parent's visit. The
/// root directory itself is never renamed.
pub struct Renamer {
    config: RenamerConfig,
    filter: SkipFilter,
}

impl Renamer {
    pub fn new(config: RenamerConfig) -> Self {
        let filter = SkipFilter::new(&config.ignore_patterns);
        Self { config, filter }
    }

    /// Walk `root` and report (dry run) or perform every rename.
    ///
    /// A root that does not exist or cannot be listed produces no actions.
    /// The first filesystem failure aborts the run; renames already applied
    /// stay applied.
    pub fn process<O: RenameOutput>(&self, root: &Path, output: &mut O) -> Result<RenameSummary> {
        let mut run = RenameRun {
            renamer: self,
            output,
            summary: RenameSummary::default(),
            created_dirs: HashMap::new(),
        };

        if self.filter.is_skipped(&SegmentedPath::parse(root)) {
            debug!("root '{}' is inside a skipped directory", root.display());
            run.summary.skipped += 1;
            return Ok(run.summary);
        }

        run.visit(root, 0)?;

        let summary = run.summary;
        info!(
            planned = summary.planned,
            moved = summary.moved,
            conflicts = summary.conflicts,
            skipped = summary.skipped,
            "rename run finished"
        );
        Ok(summary)
    }
}

/// State owned by a single `process` call.
struct RenameRun<'a, O> {
    renamer: &'a Renamer,
    output: &'a mut O,
    summary: RenameSummary,
    /// Directories this run created to receive relocated files, mapped to
    /// the untrimmed directory whose contents they received.
    created_dirs: HashMap<PathBuf, PathBuf>,
}

impl<O: RenameOutput> RenameRun<'_, O> {
    fn dry_run(&self) -> bool {
        self.renamer.config.dry_run
    }

    fn is_skipped(&self, path: &SegmentedPath) -> bool {
        self.renamer.filter.is_skipped(path)
    }

    fn visit(&mut self, dirpath: &Path, depth: usize) -> Result<()> {
        let segmented = SegmentedPath::parse(dirpath);
        if self.is_skipped(&segmented) {
            return Ok(());
        }

        let Some(mut node) = read_visit(dirpath, depth) else {
            return Ok(());
        };

        // Descendants first
        for subdir in node.subdirs.iter().filter(|s| !s.is_symlink) {
            let child = dirpath.join(&subdir.name);
            if self.is_skipped(&segmented.child(&subdir.name)) {
                debug!("not descending into '{}'", child.display());
                continue;
            }
            self.visit(&child, depth + 1)?;
        }

        let trimmed_dir = segmented.trimmed();
        let dir_changed = trimmed_dir != segmented;
        let new_dir = trimmed_dir.to_path_buf();

        for name in &node.files {
            if self.is_skipped(&segmented.child(name)) {
                self.summary.skipped += 1;
                continue;
            }
            let new_name = trim_name(name);
            if !dir_changed && new_name == name.as_os_str() {
                continue;
            }
            let old_path = dirpath.join(name);
            let new_path = new_dir.join(new_name);
            // An empty name would point at the directory itself
            if new_name.is_empty() || entry_exists(&new_path) {
                self.emit(ActionKind::Conflict, &old_path, &new_path)?;
                continue;
            }
            self.emit_rename(&old_path, &new_path)?;
            if !self.dry_run() {
                self.create_target_dir(&segmented, &new_dir)?;
                move_entry(&old_path, &new_path)?;
            }
        }

        for index in 0..node.subdirs.len() {
            let name = node.subdirs[index].name.clone();
            if self.is_skipped(&segmented.child(&name)) {
                self.summary.skipped += 1;
                continue;
            }
            let new_name = trim_name(&name);
            if new_name == name.as_os_str() {
                continue;
            }
            let old_path = dirpath.join(&name);
            let new_path = dirpath.join(new_name);
            if new_name.is_empty() {
                self.emit(ActionKind::Conflict, &old_path, &new_path)?;
                continue;
            }
            let relocated = new_dir.join(new_name);
            let sibling_free = new_path == relocated || !entry_exists(&new_path);
            if sibling_free && self.absorb_relocated_dir(&old_path, &relocated)? {
                self.emit(ActionKind::Moved, &old_path, &new_path)?;
                node.subdirs[index].name = new_name.to_os_string();
                continue;
            }
            if entry_exists(&new_path) {
                self.emit(ActionKind::Conflict, &old_path, &new_path)?;
                continue;
            }
            self.emit_rename(&old_path, &new_path)?;
            if !self.dry_run() {
                move_entry(&old_path, &new_path)?;
            }
            node.subdirs[index].name = new_name.to_os_string();
        }

        if depth > 0 && dir_changed {
            self.remove_if_relocated(dirpath, &segmented, &new_dir)?;
        }

        Ok(())
    }

    fn emit(&mut self, kind: ActionKind, from: &Path, to: &Path) -> Result<()> {
        match kind {
            ActionKind::Planned => self.summary.planned += 1,
            ActionKind::Moved => self.summary.moved += 1,
            ActionKind::Conflict => self.summary.conflicts += 1,
        }
        self.output.report(&RenameEvent::new(kind, from, to))?;
        Ok(())
    }

    fn emit_rename(&mut self, from: &Path, to: &Path) -> Result<()> {
        let kind = if self.dry_run() {
            ActionKind::Planned
        } else {
            ActionKind::Moved
        };
        self.emit(kind, from, to)
    }

    /// `create_dir_all` for the trimmed form of `source`, remembering every
    /// directory that did not exist yet together with the untrimmed
    /// directory it stands in for.
    fn create_target_dir(&mut self, source: &SegmentedPath, dir: &Path) -> Result<()> {
        let source = source.to_path_buf();
        // Both paths have the same number of segments
        let missing: Vec<(PathBuf, PathBuf)> = dir
            .ancestors()
            .zip(source.ancestors())
            .take_while(|(p, _)| !p.as_os_str().is_empty() && !entry_exists(p))
            .map(|(p, s)| (p.to_path_buf(), s.to_path_buf()))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        fs::create_dir_all(dir).map_err(|source| RenameError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
        self.created_dirs.extend(missing);
        Ok(())
    }

    /// Whether this run created `target` for the contents of `source`.
    fn created_for(&self, target: &Path, source: &Path) -> bool {
        self.created_dirs.get(target).is_some_and(|s| s == source)
    }

    /// Finish a directory rename whose trimmed counterpart was created by
    /// this run for the contents of `old`.
    ///
    /// Files below `old` were already relocated under `relocated`. Whatever
    /// is left in `old` is moved across one level deep, but only when every
    /// name is free; `old` is then removed and the rename counts as done.
    /// Always false in dry-run mode, since nothing was relocated.
    fn absorb_relocated_dir(&mut self, old: &Path, relocated: &Path) -> Result<bool> {
        if self.dry_run() || !self.created_for(relocated, old) || !is_real_dir(old) {
            return Ok(false);
        }
        let names = sorted_names(old);
        let taken = names
            .iter()
            .map(|name| relocated.join(name))
            .find(|to| entry_exists(to));
        if let Some(taken) = taken {
            debug!("not merging '{}', '{}' exists", old.display(), taken.display());
            return Ok(false);
        }
        for name in &names {
            move_entry(&old.join(name), &relocated.join(name))?;
        }
        if !is_empty_dir(old) {
            return Ok(false);
        }
        remove_dir(old)?;
        Ok(true)
    }

    /// Drop a directory emptied by relocating its own contents.
    ///
    /// Applies to directories whose own name is clean but which sit below an
    /// untrimmed ancestor; directories with an untrimmed name of their own are
    /// handled by their parent's rename step instead. A directory whose
    /// counterpart was created for some other source is left alone.
    fn remove_if_relocated(
        &mut self,
        dirpath: &Path,
        segmented: &SegmentedPath,
        new_dir: &Path,
    ) -> Result<()> {
        if self.dry_run() || segmented.name().is_none_or(needs_trim) {
            return Ok(());
        }
        if self.created_for(new_dir, dirpath) && is_empty_dir(dirpath) {
            debug!(
                "removing '{}', contents relocated to '{}'",
                dirpath.display(),
                new_dir.display()
            );
            remove_dir(dirpath)?;
        }
        Ok(())
    }
}

/// Read and classify directory entries, sorted by name.
///
/// Symlinks to directories count as subdirectories so they get renamed, but
/// are flagged so the walk does not follow them.
fn read_visit(dirpath: &Path, depth: usize) -> Option<DirVisit> {
    let entries = match fs::read_dir(dirpath) {
        Ok(e) => e,
        Err(e) if depth == 0 => {
            debug!("nothing to do for '{}': {}", dirpath.display(), e);
            return None;
        }
        Err(e) => {
            warn!("cannot read directory '{}': {}", dirpath.display(), e);
            return None;
        }
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|a| a.file_name());

    let mut visit = DirVisit {
        files: Vec::new(),
        subdirs: Vec::new(),
    };
    for entry in entries {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            visit.subdirs.push(Subdir {
                name: entry.file_name(),
                is_symlink: false,
            });
        } else if file_type.is_symlink() && entry.path().is_dir() {
            visit.subdirs.push(Subdir {
                name: entry.file_name(),
                is_symlink: true,
            });
        } else {
            visit.files.push(entry.file_name());
        }
    }
    Some(visit)
}

fn sorted_names(dir: &Path) -> Vec<OsString> {
    let mut names: Vec<OsString> = match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.file_name()).collect(),
        Err(_) => Vec::new(),
    };
    names.sort();
    names
}

/// Existence check that does not follow symlinks, so a dangling link blocks
/// a rename like any other entry.
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn is_real_dir(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok_and(|m| m.is_dir())
}

fn is_empty_dir(path: &Path) -> bool {
    fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_none())
}

fn move_entry(from: &Path, to: &Path) -> Result<()> {
    fs::rename(from, to).map_err(|source| RenameError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn remove_dir(path: &Path) -> Result<()> {
    fs::remove_dir(path).map_err(|source| RenameError::RemoveDir {
        path: path.to_path_buf(),
        source,
    })
}
