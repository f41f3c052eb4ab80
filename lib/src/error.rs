use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by bio linting operations.
#[derive(Debug, Error)]
pub enum BioLintError {
    #[error("Failed to read `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan `{path}`: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: ignore::Error,
    },

    #[error("Failed to parse `{path}`: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("No candidate files found in `{path}`")]
    NoCandidateFiles { path: PathBuf },
}

/// Failures while pulling the YAML header out of a candidate bio.
#[derive(Debug, Error)]
pub enum HeaderError {
    /// The opening 61-dash line or the closing `---` line is absent.
    #[error("could not find YAML header between dashes")]
    NotFound,

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
