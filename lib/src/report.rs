use std::path::PathBuf;

use serde::Serialize;

/// One validation failure attached to a file.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    /// File the failure was found in.
    pub file: PathBuf,
    /// Human-readable description; messages are the primary interface of
    /// this tool, not structured codes.
    pub message: String,
}

/// Outcome of linting an election directory.
#[derive(Debug, Clone, Serialize)]
pub struct LintReport {
    /// Number of candidate files examined.
    pub checked: usize,
    /// Accumulated failures across all files, ordered by file path.
    pub errors: Vec<ValidationError>,
}

impl LintReport {
    /// True when every file passed every check.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}
