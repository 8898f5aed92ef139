//! Rename action records

use std::fmt;
use std::path::PathBuf;

use termcolor::Color;

/// What happened to a rename candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Dry run: the rename would happen
    Planned,
    /// The rename was performed
    Moved,
    /// The target already exists; the entry was left alone
    Conflict,
}

impl ActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Planned => "DRY:",
            ActionKind::Moved => "MOVED:",
            ActionKind::Conflict => "CONFLICT:",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ActionKind::Planned => Color::Yellow,
            ActionKind::Moved => Color::Green,
            ActionKind::Conflict => Color::Red,
        }
    }
}

/// A single reported rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEvent {
    pub kind: ActionKind,
    pub from: PathBuf,
    pub to: PathBuf,
}

impl RenameEvent {
    pub fn new(kind: ActionKind, from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }

    /// The line without its label.
    pub fn detail(&self) -> String {
        match self.kind {
            ActionKind::Conflict => format!(
                "{} -> {} (exists) -- skipped",
                self.from.display(),
                self.to.display()
            ),
            _ => format!("{} -> {}", self.from.display(), self.to.display()),
        }
    }
}

impl fmt::Display for RenameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label(), self.detail())
    }
}
