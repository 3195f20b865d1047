//! # `rulekeeper`: Editorial Rule Checking for Blog Posts
//!
//! This crate contains the core pipeline for validating blog-post source files
//! (YAML front-matter + Markdown body) against a set of editorial rules, and
//! for recommending tag improvements based on similarity to previously used
//! tags and on curated keyword lists.
//!
//! The pipeline has three stages:
//! 1. [`PostDataExtractor`] splits a post file into structured metadata and
//!    body lines, failing fast on malformed front-matter.
//! 2. Every registered [`RuleChecker`] maps the extracted [`PostData`] to a
//!    categorized [`RuleCheckResults`].
//! 3. [`RuleKeeper`] drives the run over a changed-file set, merges results
//!    per file, hands them to a [`ResultsReporter`], and aggregates the
//!    overall pass/fail signal.

pub mod checker;
pub mod corpus;
pub mod errors;
pub mod keeper;
pub mod post;
pub mod registry;
pub mod results;
pub mod rules;

pub use checker::{CheckerFn, ResultsReporter, RuleChecker};
pub use corpus::{collect_existing_tags, TagCorpus};
pub use errors::{ExtractError, RegistryError, RuleKeeperError};
pub use keeper::{MalformedPostPolicy, RuleKeeper, POST_FILE_EXTENSION};
pub use post::{MetadataValue, PostData, PostDataExtractor};
pub use registry::KeyTagRegistry;
pub use results::RuleCheckResults;
pub use rules::filename::filename_starts_with_a_date;
pub use rules::key_tags::KeyTagsRecommender;
pub use rules::similar_tags::ExistingTagsRecommender;
