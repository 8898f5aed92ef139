//! Error types for rename runs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A filesystem failure that aborts a rename run.
///
/// Conflicts are not errors; they are reported and skipped.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("cannot create directory '{}': {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("cannot move '{}' -> '{}': {source}", from.display(), to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("cannot remove directory '{}': {source}", path.display())]
    RemoveDir { path: PathBuf, source: io::Error },

    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RenameError>;
