use std::path::Path;

use serde::Deserialize;

use crate::error::BioLintError;

/// Election-wide settings read from `election.yaml`.
///
/// Only `show_candidate_fields` matters to the linter; the rest of the
/// election metadata is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ElectionConfig {
    /// Info fields every candidate header must carry.
    #[serde(default)]
    pub show_candidate_fields: Vec<String>,
}

impl ElectionConfig {
    /// Reads `election.yaml` from the election root.
    ///
    /// ## Errors
    /// Returns an error when the file is unreadable or fails to parse.
    /// Callers are expected to fall back to an empty configuration and
    /// warn rather than abort.
    pub fn load(root: &Path) -> Result<Self, BioLintError> {
        let path = root.join("election.yaml");
        let content = std::fs::read_to_string(&path).map_err(|source| BioLintError::Io {
            path: path.clone(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| BioLintError::Config { path, source })
    }
}
