//! Whitespace-trimming rename walk
//!
//! `Renamer` visits a directory tree bottom-up and trims leading and
//! trailing whitespace from every file and directory name, skipping
//! `node_modules` and any configured ignore patterns.

mod config;
mod error;
mod filter;
mod renamer;
mod segments;

pub use config::RenamerConfig;
pub use error::{RenameError, Result};
pub use filter::{ALWAYS_SKIPPED, SkipFilter};
pub use renamer::{RenameSummary, Renamer};
pub use segments::SegmentedPath;
