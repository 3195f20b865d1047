//! The curated key-tag registry used for keyword-based recommendations.

use crate::errors::RegistryError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// The two shapes the external JSON configuration may take: a flat list of
/// key tags, or a mapping of parent tag to related keywords.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRegistry {
    Grouped(BTreeMap<String, Vec<String>>),
    Flat(Vec<String>),
}

/// Canonical tag → trigger keywords. A canonical tag is recommended when the
/// tag itself or any of its triggers shows up in a post's body or existing
/// tags. Immutable after loading.
#[derive(Debug, Clone, Default)]
pub struct KeyTagRegistry {
    entries: BTreeMap<String, Vec<String>>,
}

impl KeyTagRegistry {
    /// Builds a registry from a flat list of key tags, each its own trigger.
    pub fn from_key_tags<I: IntoIterator<Item = String>>(tags: I) -> Self {
        Self {
            entries: tags.into_iter().map(|tag| (tag, Vec::new())).collect(),
        }
    }

    /// Builds a registry from a parent-tag → related-keywords mapping.
    pub fn from_groups(groups: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries: groups }
    }

    /// Loads the registry from a JSON file, accepting either configured shape.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let raw = fs::read_to_string(path).map_err(|e| RegistryError::Io(path.to_path_buf(), e))?;
        let parsed: RawRegistry = serde_json::from_str(&raw)
            .map_err(|e| RegistryError::Parse(path.to_path_buf(), e))?;

        let registry = match parsed {
            RawRegistry::Flat(tags) => Self::from_key_tags(tags),
            RawRegistry::Grouped(groups) => Self::from_groups(groups),
        };
        debug!(
            "Loaded {} key tag(s) from '{}'",
            registry.entries.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Iterates `(canonical tag, trigger keywords)` pairs in a stable order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(tag, triggers)| (tag.as_str(), triggers.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
