//! The orchestrator that drives extraction, rule checking, and reporting.

use crate::checker::{ResultsReporter, RuleChecker};
use crate::errors::RuleKeeperError;
use crate::post::PostDataExtractor;
use crate::results::RuleCheckResults;
use std::path::Path;
use tracing::{debug, info};

/// Files without this extension are skipped without being extracted.
pub const POST_FILE_EXTENSION: &str = "md";

/// What to do when a checked file has malformed front-matter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPostPolicy {
    /// Propagate the extraction error and end the run (fail-fast).
    #[default]
    Abort,
    /// Report the extraction failure as an error for that file, mark the run
    /// failed, and continue with the remaining files.
    SkipAndReport,
}

/// Runs every registered checker over each changed post file, merges their
/// findings per file, forwards them to the reporter, and aggregates the
/// overall failure signal.
pub struct RuleKeeper {
    post_data_extractor: PostDataExtractor,
    rule_checkers: Vec<Box<dyn RuleChecker>>,
    results_reporter: Box<dyn ResultsReporter>,
    malformed_post_policy: MalformedPostPolicy,
}

impl RuleKeeper {
    pub fn new(
        post_data_extractor: PostDataExtractor,
        rule_checkers: Vec<Box<dyn RuleChecker>>,
        results_reporter: Box<dyn ResultsReporter>,
    ) -> Self {
        Self {
            post_data_extractor,
            rule_checkers,
            results_reporter,
            malformed_post_policy: MalformedPostPolicy::default(),
        }
    }

    pub fn with_malformed_post_policy(mut self, policy: MalformedPostPolicy) -> Self {
        self.malformed_post_policy = policy;
        self
    }

    /// Checks every `.md` file in `files`, in order.
    ///
    /// The reporter is called exactly once per processed file with the merged
    /// results, whether or not any findings exist. Returns `true` when at
    /// least one file produced a non-empty `errors` category.
    pub fn check_rules_for_files<P: AsRef<Path>>(
        &self,
        files: &[P],
    ) -> Result<bool, RuleKeeperError> {
        let mut error_found = false;

        for file in files {
            let path = file.as_ref();
            if path.extension().and_then(|ext| ext.to_str()) != Some(POST_FILE_EXTENSION) {
                debug!("Skipping non-post file: {}", path.display());
                continue;
            }

            info!("Checking file: {}", path.display());
            let post = match self.post_data_extractor.extract(path) {
                Ok(post) => post,
                Err(e) => match self.malformed_post_policy {
                    MalformedPostPolicy::Abort => return Err(e.into()),
                    MalformedPostPolicy::SkipAndReport => {
                        error_found = true;
                        let identifier = path
                            .file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        self.results_reporter
                            .report(&identifier, &RuleCheckResults::error(e.to_string()));
                        continue;
                    }
                },
            };

            // Registration order, so earlier checkers' findings come first.
            let mut merged = RuleCheckResults::default();
            for checker in &self.rule_checkers {
                merged.merge(checker.check(&post));
            }

            if merged.has_errors() {
                error_found = true;
            }
            self.results_reporter.report(&post.identifier, &merged);
        }

        Ok(error_found)
    }
}
