//! Trimnames - strip stray leading and trailing whitespace from file and directory names

pub mod output;
pub mod rename;
pub mod string_utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use output::{ActionKind, ConsoleFormatter, RenameEvent, RenameOutput};
pub use rename::{RenameError, RenameSummary, Renamer, RenamerConfig, SegmentedPath, SkipFilter};
pub use string_utils::trim_name;
