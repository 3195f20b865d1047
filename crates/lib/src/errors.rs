use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while extracting post data from a source file.
///
/// Extraction is fail-fast: any of these prevents `PostData` construction
/// entirely, there is no partial post.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("File {0} does not have starting metadata section in first line")]
    MissingStartDelimiter(PathBuf),
    #[error("File {0} metadata could not be parsed: file does not close its metadata section")]
    UnclosedMetadata(PathBuf),
    #[error("File {0} metadata could not be parsed: metadata is invalid ({1})")]
    InvalidMetadata(PathBuf, String),
    #[error("I/O error reading {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
}

/// Errors raised while loading the key tag registry from configuration.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("I/O error reading key tag registry {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),
    #[error("Key tag registry {0} is not valid JSON: {1}")]
    Parse(PathBuf, #[source] serde_json::Error),
}

/// Top-level error for a rule verification run.
#[derive(Error, Debug)]
pub enum RuleKeeperError {
    #[error("Post extraction failed: {0}")]
    Extract(#[from] ExtractError),
}
