//! Configuration types for the renamer

/// Configuration for a rename run.
#[derive(Debug, Clone)]
pub struct RenamerConfig {
    /// Only report planned renames, never touch the filesystem
    pub dry_run: bool,
    /// Extra segment names or glob patterns to skip, in addition to `node_modules`
    pub ignore_patterns: Vec<String>,
}

impl RenamerConfig {
    /// Configuration that performs renames.
    pub fn apply() -> Self {
        Self {
            dry_run: false,
            ..Default::default()
        }
    }
}

impl Default for RenamerConfig {
    fn default() -> Self {
        Self {
            dry_run: true, // nothing is renamed unless asked for
            ignore_patterns: Vec::new(),
        }
    }
}
