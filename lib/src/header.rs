use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::error::HeaderError;

/// The opening delimiter is a line of exactly this many dashes.
const OPEN_DELIMITER_LEN: usize = 61;

fn is_open_delimiter(line: &str) -> bool {
    let line = line.trim_end();
    line.len() == OPEN_DELIMITER_LEN && line.bytes().all(|byte| byte == b'-')
}

/// Extracts the YAML block sitting between the 61-dash opening line and the
/// next `---` line.
///
/// Trailing whitespace on either delimiter line is ignored. The captured
/// block is trimmed at the edges with its interior preserved.
///
/// ## Errors
/// Returns `HeaderError::NotFound` when either delimiter is absent or
/// malformed (for example 60 or 62 dashes).
pub fn extract_header(content: &str) -> Result<String, HeaderError> {
    let lines: Vec<&str> = content.lines().collect();

    let open = lines
        .iter()
        .position(|line| is_open_delimiter(line))
        .ok_or(HeaderError::NotFound)?;

    let close = lines
        .iter()
        .skip(open + 1)
        .position(|line| line.trim_end() == "---")
        .map(|idx| idx + open + 1)
        .ok_or(HeaderError::NotFound)?;

    Ok(lines[open + 1..close].join("\n").trim().to_string())
}

/// Parsed candidate header. Only the fields this tool validates are
/// modeled; anything else in the header is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateHeader {
    #[serde(default)]
    pub name: Option<String>,
    /// Kept untyped so a missing key and a wrong-typed value stay
    /// distinguishable. Classify through [`CandidateHeader::id`].
    #[serde(rename = "ID", default, deserialize_with = "id_value")]
    id: Option<serde_yaml::Value>,
    #[serde(default)]
    pub info: Vec<BTreeMap<String, String>>,
}

/// Keeps an explicit `ID:` null distinguishable from an absent key, which
/// plain `Option` deserialization would collapse.
fn id_value<'de, D>(deserializer: D) -> Result<Option<serde_yaml::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_yaml::Value::deserialize(deserializer).map(Some)
}

/// Presence and type of the header's `ID` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdField<'a> {
    /// The key is absent from the header.
    Missing,
    /// The key is present but its value is not a string scalar.
    NotAString,
    /// The key holds a string scalar.
    Value(&'a str),
}

impl CandidateHeader {
    /// Deserializes a header block produced by [`extract_header`].
    ///
    /// An empty block yields the all-default header so downstream checks
    /// report missing fields instead of a parse failure.
    pub fn parse(yaml: &str) -> Result<Self, HeaderError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Classifies the `ID` field without conflating an absent key with a
    /// non-string value.
    pub fn id(&self) -> IdField<'_> {
        match &self.id {
            None => IdField::Missing,
            Some(serde_yaml::Value::String(value)) => IdField::Value(value),
            Some(_) => IdField::NotAString,
        }
    }

    /// True when `key` appears in any entry of the `info` list. The first
    /// occurrence wins when a key is duplicated.
    pub fn has_info_field(&self, key: &str) -> bool {
        self.info.iter().any(|entry| entry.contains_key(key))
    }
}
