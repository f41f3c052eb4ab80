use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use ignore::WalkBuilder;
use regex::Regex;

use crate::error::BioLintError;

static CANDIDATE_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^candidate-[a-zA-Z0-9_-]+\.md$").expect("valid regex"));

/// True when `name` looks like `candidate-<id>.md`.
pub fn is_candidate_file_name(name: &str) -> bool {
    CANDIDATE_FILE_RE.is_match(name)
}

/// Recursively collects candidate bio files under `root`.
///
/// Results are sorted by path so downstream reports stay reproducible.
/// Zero matches is not an error here; callers decide how to treat an
/// empty election.
///
/// ## Errors
/// Returns an error when the directory walk fails (for example an
/// unreadable directory).
pub fn find_candidate_files(root: &Path) -> Result<Vec<PathBuf>, BioLintError> {
    let walker = WalkBuilder::new(root).standard_filters(false).build();
    let mut files = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| BioLintError::Discovery {
            path: root.to_path_buf(),
            source,
        })?;

        let is_file = entry
            .file_type()
            .map(|kind| kind.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if is_candidate_file_name(&name) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    tracing::debug!("found {} candidate file(s) under {}", files.len(), root.display());

    Ok(files)
}
