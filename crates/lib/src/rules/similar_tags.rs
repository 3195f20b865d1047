//! Tag similarity recommendations against the existing tag corpus.

use crate::checker::RuleChecker;
use crate::corpus::TagCorpus;
use crate::post::PostData;
use crate::results::RuleCheckResults;

/// Minimum case-insensitive Jaro similarity for two tags to count as
/// near-duplicates.
const SIMILARITY_THRESHOLD: f64 = 0.90;

/// Flags new tags that look like near-duplicates of tags already used in the
/// unmodified post collection.
///
/// Advisory only: every finding goes to the `recommendations` category.
pub struct ExistingTagsRecommender {
    existing_tags: TagCorpus,
}

impl ExistingTagsRecommender {
    pub fn new(existing_tags: TagCorpus) -> Self {
        Self { existing_tags }
    }

    /// Similar when the case-insensitive Jaro score clears the threshold and
    /// the pair is not an exact case-sensitive match. "Low-code" vs "lowcode"
    /// flags; "Low-code" vs "Low-code" does not.
    fn are_tags_similar(existing_tag: &str, new_tag: &str) -> bool {
        if existing_tag == new_tag {
            return false;
        }
        strsim::jaro(&new_tag.to_lowercase(), &existing_tag.to_lowercase())
            >= SIMILARITY_THRESHOLD
    }
}

impl RuleChecker for ExistingTagsRecommender {
    fn check(&self, post: &PostData) -> RuleCheckResults {
        let Some(new_tags) = post.tags() else {
            return RuleCheckResults::default();
        };

        let mut tags_recommendations = Vec::new();
        for new_tag in new_tags {
            // Blank tags are sentinels, never candidates for a match.
            if new_tag.trim().is_empty() {
                continue;
            }
            for existing_tag in self.existing_tags.iter() {
                if Self::are_tags_similar(existing_tag, new_tag) {
                    tags_recommendations.push(format!(
                        "Tag \"{new_tag}\" looks similar to existing tag \"{existing_tag}\". \
                         Consider changing it to the existing one"
                    ));
                }
            }
        }

        if tags_recommendations.is_empty() {
            return RuleCheckResults::default();
        }
        RuleCheckResults::recommendations(tags_recommendations)
    }
}
