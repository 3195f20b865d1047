//! # `rulekeeper-cli` Library Crate
//!
//! This crate contains the command-line surface for the `rulekeeper` tool:
//! argument parsing, changed-file discovery, corpus collection, and colored
//! console reporting. The core checking pipeline lives in the `rulekeeper`
//! library crate.

mod changes;
mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rulekeeper::{
    collect_existing_tags, filename_starts_with_a_date, CheckerFn, ExistingTagsRecommender,
    KeyTagRegistry, KeyTagsRecommender, MalformedPostPolicy, PostDataExtractor, RuleChecker,
    RuleKeeper, TagCorpus,
};
use std::path::PathBuf;
use tracing::{info, warn};

use report::ConsoleReporter;

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check changed posts against the editorial rules
    Check(CheckArgs),
    /// List every tag used across the post collection
    Tags(TagsArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Directory holding the post files
    #[arg(long, default_value = "_posts")]
    posts_dir: PathBuf,
    /// Explicit post files to check; bypasses git discovery
    #[arg(long, num_args = 1..)]
    files: Vec<PathBuf>,
    /// Repository to diff for changed posts when --files is not given
    #[arg(long, default_value = ".")]
    repo: PathBuf,
    /// Branch to diff the working head against
    #[arg(long, default_value = "master")]
    base_branch: String,
    /// Path to the key tag registry JSON (flat list or parent -> keywords map)
    #[arg(long)]
    key_tags: Option<PathBuf>,
    /// Report malformed posts and keep checking instead of aborting the run
    #[arg(long)]
    keep_going: bool,
}

#[derive(Parser, Debug)]
pub struct TagsArgs {
    /// Directory holding the post files
    #[arg(long, default_value = "_posts")]
    posts_dir: PathBuf,
}

// --- Public Entrypoint ---

/// Runs the selected command. Returns `true` when at least one checked post
/// had an error-category finding, which the binary maps to a non-zero exit.
pub fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check(args) => handle_check(args),
        Commands::Tags(args) => {
            handle_tags(args)?;
            Ok(false)
        }
    }
}

// --- Command Handlers ---

/// Handles the `rulekeeper check` command logic.
fn handle_check(args: CheckArgs) -> Result<bool> {
    let changed_posts = if args.files.is_empty() {
        changes::find_changed_posts(&args.repo, &args.base_branch, &args.posts_dir)
            .context("failed to discover changed posts from git")?
    } else {
        args.files.clone()
    };

    if changed_posts.is_empty() {
        info!("No changed posts to check");
        return Ok(false);
    }
    info!("Checking {} changed post(s)", changed_posts.len());

    let extractor = PostDataExtractor::new();

    // The similarity baseline: tags from every post NOT in the checked set.
    let unchanged_posts = if args.posts_dir.is_dir() {
        changes::list_post_files(&args.posts_dir, &changed_posts)?
    } else {
        warn!(
            "Posts directory '{}' not found; checking without a tag corpus",
            args.posts_dir.display()
        );
        Vec::new()
    };
    let existing_tags = collect_existing_tags(&extractor, &unchanged_posts);
    info!("Collected {} existing tag(s)", existing_tags.len());

    let mut rule_checkers: Vec<Box<dyn RuleChecker>> = vec![
        Box::new(CheckerFn(filename_starts_with_a_date)),
        Box::new(ExistingTagsRecommender::new(existing_tags)),
    ];
    if let Some(path) = &args.key_tags {
        let registry = KeyTagRegistry::load(path)
            .with_context(|| format!("failed to load key tags from {}", path.display()))?;
        rule_checkers.push(Box::new(KeyTagsRecommender::new(registry)));
    }

    let policy = if args.keep_going {
        MalformedPostPolicy::SkipAndReport
    } else {
        MalformedPostPolicy::Abort
    };

    let keeper = RuleKeeper::new(extractor, rule_checkers, Box::new(ConsoleReporter))
        .with_malformed_post_policy(policy);

    let error_found = keeper.check_rules_for_files(&changed_posts)?;
    Ok(error_found)
}

/// Handles the `rulekeeper tags` command logic: prints every tag used across
/// the collection, sorted case-insensitively, with a total count.
fn handle_tags(args: TagsArgs) -> Result<()> {
    let posts = changes::list_post_files(&args.posts_dir, &[] as &[PathBuf])?;
    let corpus: TagCorpus = collect_existing_tags(&PostDataExtractor::new(), &posts);

    let mut tags: Vec<&str> = corpus.iter().collect();
    tags.sort_by_key(|tag| tag.to_lowercase());

    for tag in &tags {
        println!("{tag}");
    }
    println!("{} tag(s) in use", tags.len());
    Ok(())
}
