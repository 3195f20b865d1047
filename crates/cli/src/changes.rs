//! Changed-post discovery and post-collection listing.

use anyhow::{Context, Result};
use git2::{Delta, Repository};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Finds posts added or modified on the current head relative to
/// `base_branch`.
///
/// Diffs the base branch tree against the head tree and keeps repo paths
/// under `posts_dir` that end in `.md`, resolved against the repository work
/// directory. Deletions and renames-away are not checkable content and are
/// ignored.
pub fn find_changed_posts(
    repo_path: &Path,
    base_branch: &str,
    posts_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let repo = Repository::open(repo_path)
        .with_context(|| format!("not a git repository: {}", repo_path.display()))?;
    let base_tree = repo
        .revparse_single(base_branch)
        .with_context(|| format!("unknown base branch `{base_branch}`"))?
        .peel_to_commit()?
        .tree()?;
    let head_tree = repo.head()?.peel_to_commit()?.tree()?;
    let diff = repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

    let workdir = repo.workdir().unwrap_or(repo_path).to_path_buf();
    let mut changed = Vec::new();
    for delta in diff.deltas() {
        if !matches!(delta.status(), Delta::Added | Delta::Modified) {
            continue;
        }
        let Some(path) = delta.new_file().path() else {
            continue;
        };
        if path.starts_with(posts_dir) && is_post_file(path) {
            changed.push(workdir.join(path));
        }
    }

    debug!("Found {} changed post(s) via git diff", changed.len());
    Ok(changed)
}

/// Lists the `.md` files in `posts_dir`, excluding the given paths.
///
/// Exclusion compares canonicalized paths so relative and absolute spellings
/// of the same file match. Output is sorted for deterministic processing.
pub fn list_post_files<P: AsRef<Path>>(posts_dir: &Path, exclude: &[P]) -> Result<Vec<PathBuf>> {
    let excluded: BTreeSet<PathBuf> = exclude
        .iter()
        .filter_map(|p| fs::canonicalize(p.as_ref()).ok())
        .collect();

    let entries = fs::read_dir(posts_dir)
        .with_context(|| format!("cannot list posts directory {}", posts_dir.display()))?;

    let mut posts = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if !is_post_file(&path) {
            continue;
        }
        let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
        if !excluded.contains(&canonical) {
            posts.push(path);
        }
    }

    posts.sort();
    Ok(posts)
}

fn is_post_file(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some("md")
}
