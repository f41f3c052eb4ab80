use std::path::{Path, PathBuf};

use crate::error::{BioLintError, HeaderError};
use crate::header::{CandidateHeader, extract_header};

/// One candidate bio file loaded into memory.
#[derive(Debug, Clone)]
pub struct CandidateDocument {
    /// Path the file was discovered under.
    pub path: PathBuf,
    /// Raw file contents, header included.
    pub raw: String,
}

impl CandidateDocument {
    /// Reads a candidate bio from disk.
    ///
    /// ## Errors
    /// Returns an error when the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, BioLintError> {
        let path = path.as_ref().to_path_buf();
        let raw = std::fs::read_to_string(&path).map_err(|source| BioLintError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, raw })
    }

    /// Extracts and parses the YAML header from the raw contents.
    ///
    /// Parsing happens on demand so each checker can report header
    /// failures independently.
    pub fn header(&self) -> Result<CandidateHeader, HeaderError> {
        let block = extract_header(&self.raw)?;
        CandidateHeader::parse(&block)
    }
}
