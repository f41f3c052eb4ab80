pub mod checks;
pub mod config;
pub mod discover;
pub mod document;
pub mod error;
pub mod header;
pub mod report;

pub use checks::{LintOptions, count_words, run_checks};
pub use config::ElectionConfig;
pub use discover::find_candidate_files;
pub use document::CandidateDocument;
pub use error::{BioLintError, HeaderError};
pub use header::{CandidateHeader, IdField, extract_header};
pub use report::{LintReport, ValidationError};

use std::path::Path;

/// Lints every candidate bio under `root` and aggregates the failures.
///
/// Files are processed in path order; a file that cannot be read
/// contributes a single `error reading file` entry and the run continues.
///
/// ## Errors
/// Returns an error when the directory walk fails or when no candidate
/// files exist at all.
pub fn lint_election(
    root: &Path,
    config: &ElectionConfig,
    options: &LintOptions,
) -> Result<LintReport, BioLintError> {
    let files = find_candidate_files(root)?;
    if files.is_empty() {
        return Err(BioLintError::NoCandidateFiles {
            path: root.to_path_buf(),
        });
    }

    let mut errors = Vec::new();
    for file in &files {
        let doc = match CandidateDocument::load(file) {
            Ok(doc) => doc,
            Err(BioLintError::Io { source, .. }) => {
                tracing::warn!("skipping checks for {}: {source}", file.display());
                errors.push(ValidationError {
                    file: file.clone(),
                    message: format!("error reading file: {source}"),
                });
                continue;
            }
            Err(err) => return Err(err),
        };

        tracing::debug!("checking {}", doc.path.display());
        errors.extend(
            run_checks(&doc, config, options)
                .into_iter()
                .map(|message| ValidationError {
                    file: file.clone(),
                    message,
                }),
        );
    }

    Ok(LintReport {
        checked: files.len(),
        errors,
    })
}
