//! Keyword-driven tag recommendations from the curated key-tag registry.

use crate::checker::RuleChecker;
use crate::post::PostData;
use crate::registry::KeyTagRegistry;
use crate::results::RuleCheckResults;
use std::collections::HashSet;

/// Recommends registry tags whose keywords show up in a post's body (or, for
/// grouped registries, among its existing tags) while the tag itself is
/// missing from the post.
pub struct KeyTagsRecommender {
    key_tags: KeyTagRegistry,
}

impl KeyTagsRecommender {
    pub fn new(key_tags: KeyTagRegistry) -> Self {
        Self { key_tags }
    }
}

impl RuleChecker for KeyTagsRecommender {
    fn check(&self, post: &PostData) -> RuleCheckResults {
        // A post without a tags entry is still eligible for recommendations.
        let post_tags: &[String] = post.tags().unwrap_or(&[]);

        // Unique whitespace-delimited body tokens, case-sensitive to match
        // the registry's keyword casing.
        let unique_content_words: HashSet<&str> = post
            .body
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect();

        let mut tags_to_recommend = Vec::new();
        for (key_tag, related_keywords) in self.key_tags.entries() {
            if post_tags.iter().any(|tag| tag == key_tag) {
                continue;
            }

            let triggered = unique_content_words.contains(key_tag)
                || related_keywords.iter().any(|keyword| {
                    unique_content_words.contains(keyword.as_str())
                        || post_tags.iter().any(|tag| tag == keyword)
                });

            // Each key tag lands at most once, however often its keywords occur.
            if triggered {
                tags_to_recommend.push(key_tag.to_string());
            }
        }

        if tags_to_recommend.is_empty() {
            return RuleCheckResults::default();
        }
        RuleCheckResults::recommendations(vec![format!(
            "Following tags would be recommended to add to the post: \n- {}",
            tags_to_recommend.join("\n- ")
        )])
    }
}
