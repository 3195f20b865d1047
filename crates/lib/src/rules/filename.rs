//! The filename convention rule.

use crate::post::PostData;
use crate::results::RuleCheckResults;
use regex::Regex;

/// Requires the post identifier to start with an ISO-like date prefix
/// (`YYYY-MM-DD`); anything after the date is unrestricted.
///
/// This is the only rule that emits the `errors` category and therefore the
/// only one that can fail a run.
pub fn filename_starts_with_a_date(post: &PostData) -> RuleCheckResults {
    let date_prefix = Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap();

    if date_prefix.is_match(&post.identifier) {
        return RuleCheckResults::default();
    }

    RuleCheckResults::error("Filename must start with a date")
}
