use std::sync::LazyLock;

use regex::Regex;

use crate::config::ElectionConfig;
use crate::document::CandidateDocument;
use crate::error::HeaderError;
use crate::header::IdField;

static CANDIDATE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^candidate-([a-zA-Z0-9_-]+)\.md$").expect("valid regex"));

/// Knobs for a lint run, built once from the parsed CLI arguments.
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    /// Maximum word count; 0 disables the check.
    pub max_words: usize,
    /// Strings that must appear verbatim in every bio.
    pub required_sections: Vec<String>,
}

/// Counts whitespace-separated tokens across `text`, header included.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Flags bios whose total word count exceeds the configured maximum.
pub fn check_word_count(doc: &CandidateDocument, max_words: usize) -> Option<String> {
    if max_words == 0 {
        return None;
    }
    let count = count_words(&doc.raw);
    (count > max_words).then(|| format!("has {count} words"))
}

fn header_failure(err: &HeaderError, parse_prefix: &str) -> String {
    match err {
        HeaderError::NotFound => format!("error extracting YAML header: {err}"),
        HeaderError::Yaml(source) => format!("{parse_prefix}: {source}"),
    }
}

/// Checks that the filename follows `candidate-<id>.md` and that the id
/// segment matches the header's `ID` field after trimming.
pub fn check_filename_id(doc: &CandidateDocument) -> Option<String> {
    let base = doc
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let expected = match CANDIDATE_ID_RE.captures(&base) {
        Some(captures) => captures[1].to_string(),
        None => return Some("filename must follow format 'candidate-username.md'".to_string()),
    };

    let header = match doc.header() {
        Ok(header) => header,
        Err(err) => return Some(header_failure(&err, "error parsing YAML header")),
    };

    match header.id() {
        IdField::Missing => Some("missing 'ID' field in header".to_string()),
        IdField::NotAString => Some("'ID' field must be a string".to_string()),
        IdField::Value(actual) => {
            let actual = actual.trim();
            (actual != expected).then(|| {
                format!("filename username '{expected}' does not match ID '{actual}' in header")
            })
        }
    }
}

/// Checks that `name` and `ID` are present and non-empty, and that every
/// configured info field appears as a key in the header's `info` list.
pub fn check_required_fields(doc: &CandidateDocument, config: &ElectionConfig) -> Option<String> {
    let header = match doc.header() {
        Ok(header) => header,
        Err(err) => return Some(header_failure(&err, "invalid YAML header format")),
    };

    if header.name.as_deref().unwrap_or("").is_empty() {
        return Some("missing required field: name".to_string());
    }

    match header.id() {
        IdField::Value(id) if !id.is_empty() => {}
        IdField::NotAString => return Some("'ID' field must be a string".to_string()),
        _ => return Some("missing required field: ID".to_string()),
    }

    config
        .show_candidate_fields
        .iter()
        .find(|field| !header.has_info_field(field))
        .map(|field| format!("missing required info field: {field}"))
}

/// Reports every configured section string missing from the raw bio text.
pub fn check_required_sections(doc: &CandidateDocument, sections: &[String]) -> Vec<String> {
    sections
        .iter()
        .filter(|section| !doc.raw.contains(section.as_str()))
        .map(|section| format!("missing required section: {section}"))
        .collect()
}

/// Runs every checker against one document and collects the messages.
pub fn run_checks(
    doc: &CandidateDocument,
    config: &ElectionConfig,
    options: &LintOptions,
) -> Vec<String> {
    let mut messages = Vec::new();
    messages.extend(check_word_count(doc, options.max_words));
    messages.extend(check_filename_id(doc));
    messages.extend(check_required_fields(doc, config));
    messages.extend(check_required_sections(doc, &options.required_sections));
    messages
}
