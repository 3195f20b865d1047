//! The rule-checker and reporter contracts.

use crate::post::PostData;
use crate::results::RuleCheckResults;

/// The uniform contract every editorial rule implements.
///
/// A checker maps a post to categorized findings. It must not mutate the post
/// and must treat every invocation as independent; any precomputed state (a
/// tag corpus, a keyword registry) is captured at construction time and read
/// only afterwards.
pub trait RuleChecker {
    fn check(&self, post: &PostData) -> RuleCheckResults;
}

/// Adapts a plain function or closure into a [`RuleChecker`], so simple
/// rules register without a dedicated type.
pub struct CheckerFn<F>(pub F);

impl<F> RuleChecker for CheckerFn<F>
where
    F: Fn(&PostData) -> RuleCheckResults,
{
    fn check(&self, post: &PostData) -> RuleCheckResults {
        (self.0)(post)
    }
}

/// Receives the merged results for one processed file.
///
/// The orchestrator calls this exactly once per file, whether or not any
/// findings exist; suppressing empty output is the reporter's decision.
pub trait ResultsReporter {
    fn report(&self, identifier: &str, results: &RuleCheckResults);
}
