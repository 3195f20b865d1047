//! The corpus of tags already used across the unmodified post collection.

use crate::post::PostDataExtractor;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// A set of previously used tag strings, the baseline for similarity
/// recommendations.
///
/// Built once per run from the posts NOT in the currently checked set, so a
/// post is never compared against itself or its sibling changes. Ordered
/// iteration keeps recommendation output deterministic. Blank tags are
/// dropped on insert; a sentinel like an empty string would otherwise match
/// against everything.
#[derive(Debug, Clone, Default)]
pub struct TagCorpus {
    tags: BTreeSet<String>,
}

impl TagCorpus {
    pub fn insert(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !tag.trim().is_empty() {
            self.tags.insert(tag);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl FromIterator<String> for TagCorpus {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut corpus = Self::default();
        for tag in iter {
            corpus.insert(tag);
        }
        corpus
    }
}

/// Sweeps the given post files and gathers every tag they declare.
///
/// The corpus is advisory input, not the checked set, so a malformed post
/// here is logged and skipped rather than failing the sweep.
pub fn collect_existing_tags<P: AsRef<Path>>(
    extractor: &PostDataExtractor,
    paths: &[P],
) -> TagCorpus {
    let mut corpus = TagCorpus::default();

    for path in paths {
        let path = path.as_ref();
        match extractor.extract(path) {
            Ok(post) => {
                if let Some(tags) = post.tags() {
                    for tag in tags {
                        corpus.insert(tag.clone());
                    }
                }
            }
            Err(e) => {
                warn!("Skipping unparsable post while collecting tags: {e}");
            }
        }
    }

    debug!("Collected {} existing tag(s) into the corpus", corpus.len());
    corpus
}
