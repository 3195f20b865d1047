//! Post file extraction: front-matter + body splitting and YAML parsing.

use crate::errors::ExtractError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The line that opens and closes the front-matter block.
pub const METADATA_DELIMITER: &str = "---";

/// A single front-matter value: either one scalar or an ordered list of scalars.
///
/// Non-string scalars (numbers, booleans) are carried as their string form so
/// that checkers only ever deal with text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Scalar(String),
    List(Vec<String>),
}

impl MetadataValue {
    /// Views the value as a slice of strings, a scalar being a one-element slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            MetadataValue::Scalar(value) => std::slice::from_ref(value),
            MetadataValue::List(values) => values,
        }
    }
}

/// The parsed unit the rule checkers consume.
///
/// Constructed once per file per run by [`PostDataExtractor`] and immutable
/// afterwards. `metadata` always reflects a successfully parsed front-matter
/// block; extraction failure prevents construction entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostData {
    /// Originating file name, used as a stable key and in messages.
    pub identifier: String,
    /// Body lines after the front-matter block, in original order.
    pub body: Vec<String>,
    /// Parsed front-matter. Keys not present in the source are absent here.
    pub metadata: BTreeMap<String, MetadataValue>,
}

impl PostData {
    /// The post's tags, if it has a `tags` entry.
    pub fn tags(&self) -> Option<&[String]> {
        self.metadata.get("tags").map(MetadataValue::as_slice)
    }
}

/// Classification state for lines following the opening delimiter.
///
/// Held as a local value per extraction call, never as extractor state, so
/// repeated or interleaved calls cannot contaminate each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    InMetadata,
    MetadataClosed,
    InContent,
}

/// Splits a post file into front-matter metadata and body content.
///
/// The extractor itself is stateless and freely reusable across files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostDataExtractor;

impl PostDataExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts [`PostData`] from the file at `path`.
    ///
    /// Fails when the first line is not the `---` delimiter, when no second
    /// delimiter closes the block before end-of-file, or when the block
    /// between the delimiters is not valid YAML key/value data. The checks
    /// apply in that order.
    pub fn extract(&self, path: &Path) -> Result<PostData, ExtractError> {
        let raw = fs::read_to_string(path).map_err(|e| ExtractError::Io(path.to_path_buf(), e))?;
        let identifier = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut lines = raw.lines();
        match lines.next() {
            Some(first) if first.starts_with(METADATA_DELIMITER) => {}
            _ => return Err(ExtractError::MissingStartDelimiter(path.to_path_buf())),
        }

        let mut section = Section::InMetadata;
        let mut metadata_lines: Vec<&str> = Vec::new();
        let mut body: Vec<String> = Vec::new();

        for line in lines {
            section = match section {
                Section::InMetadata if line.starts_with(METADATA_DELIMITER) => {
                    Section::MetadataClosed
                }
                Section::MetadataClosed => Section::InContent,
                other => other,
            };

            match section {
                Section::InMetadata => metadata_lines.push(line),
                Section::InContent => body.push(line.to_string()),
                // The closing delimiter itself belongs to neither block.
                Section::MetadataClosed => {}
            }
        }

        if section == Section::InMetadata {
            return Err(ExtractError::UnclosedMetadata(path.to_path_buf()));
        }

        let metadata = parse_metadata(&metadata_lines.join("\n"), path)?;
        debug!(
            "Extracted {} metadata key(s) and {} body line(s) from '{identifier}'",
            metadata.len(),
            body.len()
        );

        Ok(PostData {
            identifier,
            body,
            metadata,
        })
    }
}

/// Parses the accumulated front-matter text as a YAML mapping and normalizes
/// it into [`MetadataValue`] entries. A `tags` entry written as a single
/// scalar is promoted to a one-element list.
fn parse_metadata(
    text: &str,
    path: &Path,
) -> Result<BTreeMap<String, MetadataValue>, ExtractError> {
    // An empty block is a present-but-empty front matter, not a parse failure.
    if text.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let parsed: BTreeMap<String, serde_yaml::Value> = serde_yaml::from_str(text)
        .map_err(|e| ExtractError::InvalidMetadata(path.to_path_buf(), e.to_string()))?;

    let mut metadata = BTreeMap::new();
    for (key, value) in parsed {
        let converted = convert_value(value).ok_or_else(|| {
            ExtractError::InvalidMetadata(
                path.to_path_buf(),
                format!("unsupported nested value under key `{key}`"),
            )
        })?;
        metadata.insert(key, converted);
    }

    if let Some(MetadataValue::Scalar(tag)) = metadata.get("tags") {
        let tag = tag.clone();
        metadata.insert("tags".to_string(), MetadataValue::List(vec![tag]));
    }

    Ok(metadata)
}

/// Converts a YAML value into a [`MetadataValue`], rejecting nested mappings.
fn convert_value(value: serde_yaml::Value) -> Option<MetadataValue> {
    match value {
        serde_yaml::Value::Sequence(items) => {
            let mut list = Vec::with_capacity(items.len());
            for item in items {
                list.push(convert_scalar(item)?);
            }
            Some(MetadataValue::List(list))
        }
        other => Some(MetadataValue::Scalar(convert_scalar(other)?)),
    }
}

fn convert_scalar(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Null => Some(String::new()),
        _ => None,
    }
}
