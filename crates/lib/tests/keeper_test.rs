//! # Orchestrator Tests
//!
//! Covers file filtering, result merging across checkers, the failure
//! signal, reporter invocation, and the malformed-post policies.

use anyhow::Result;
use rulekeeper::{
    CheckerFn, MalformedPostPolicy, PostData, PostDataExtractor, ResultsReporter, RuleChecker,
    RuleCheckResults, RuleKeeper,
};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Records every `(identifier, results)` pair the orchestrator reports.
#[derive(Default)]
struct RecordingReporter {
    calls: Rc<RefCell<Vec<(String, RuleCheckResults)>>>,
}

impl RecordingReporter {
    fn new() -> (Self, Rc<RefCell<Vec<(String, RuleCheckResults)>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }
}

impl ResultsReporter for RecordingReporter {
    fn report(&self, identifier: &str, results: &RuleCheckResults) {
        self.calls
            .borrow_mut()
            .push((identifier.to_string(), results.clone()));
    }
}

fn write_post(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("failed to write fixture post");
    path
}

const WELL_FORMED: &str = "---\ntags:\n  - Test\n---\nBody line.\n";

#[test]
fn test_merge_concatenates_categories_in_order() {
    let mut merged = RuleCheckResults::default();
    merged.merge(RuleCheckResults::error("A"));
    merged.merge(RuleCheckResults::default());
    merged.merge(RuleCheckResults {
        errors: vec!["B".to_string()],
        warnings: vec!["C".to_string()],
        ..Default::default()
    });

    assert_eq!(merged.errors, vec!["A", "B"]);
    assert_eq!(merged.warnings, vec!["C"]);
    assert!(merged.recommendations.is_empty());
}

#[test]
fn test_only_markdown_files_are_processed() -> Result<()> {
    let dir = TempDir::new()?;
    let md1 = write_post(&dir, "2020-01-01-file1.md", WELL_FORMED);
    let md2 = write_post(&dir, "2021-01-01-file2.md", WELL_FORMED);
    // Deliberately malformed: if the keeper tried to extract it, the run
    // would abort.
    let txt = write_post(&dir, "2022-01-01-file3.txt", "no front matter");

    let (reporter, calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), vec![], Box::new(reporter));

    let error_found = keeper.check_rules_for_files(&[md1, md2, txt])?;

    assert!(!error_found);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "2020-01-01-file1.md");
    assert_eq!(calls[1].0, "2021-01-01-file2.md");
    Ok(())
}

#[test]
fn test_checker_results_are_merged_in_registration_order() -> Result<()> {
    let dir = TempDir::new()?;
    let post = write_post(&dir, "2020-01-01-file1.md", WELL_FORMED);

    let checkers: Vec<Box<dyn RuleChecker>> = vec![
        Box::new(CheckerFn(|_: &PostData| RuleCheckResults::default())),
        Box::new(CheckerFn(|_: &PostData| {
            RuleCheckResults::recommendations(vec![
                "Recommendation1".to_string(),
                "Recommendation2".to_string(),
            ])
        })),
        Box::new(CheckerFn(|_: &PostData| RuleCheckResults {
            recommendations: vec!["Recommendation3".to_string()],
            warnings: vec!["Warning1".to_string()],
            ..Default::default()
        })),
        Box::new(CheckerFn(|_: &PostData| RuleCheckResults {
            warnings: vec!["Warning2".to_string()],
            errors: vec!["Error1".to_string(), "Error2".to_string()],
            ..Default::default()
        })),
    ];

    let (reporter, calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), checkers, Box::new(reporter));

    let error_found = keeper.check_rules_for_files(&[post])?;

    assert!(error_found);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    let results = &calls[0].1;
    assert_eq!(results.errors, vec!["Error1", "Error2"]);
    assert_eq!(results.warnings, vec!["Warning1", "Warning2"]);
    assert_eq!(
        results.recommendations,
        vec!["Recommendation1", "Recommendation2", "Recommendation3"]
    );
    Ok(())
}

#[test]
fn test_reporter_is_called_even_without_findings() -> Result<()> {
    let dir = TempDir::new()?;
    let post = write_post(&dir, "2020-01-01-file1.md", WELL_FORMED);

    let (reporter, calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), vec![], Box::new(reporter));

    keeper.check_rules_for_files(&[post])?;

    let calls = calls.borrow();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].1.is_empty());
    Ok(())
}

#[test]
fn test_advisory_findings_do_not_fail_the_run() -> Result<()> {
    let dir = TempDir::new()?;
    let post = write_post(&dir, "2020-01-01-file1.md", WELL_FORMED);

    let checkers: Vec<Box<dyn RuleChecker>> =
        vec![Box::new(CheckerFn(|_: &PostData| RuleCheckResults {
            warnings: vec!["Warning".to_string()],
            recommendations: vec!["Recommendation".to_string()],
            ..Default::default()
        }))];

    let (reporter, _calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), checkers, Box::new(reporter));

    assert!(!keeper.check_rules_for_files(&[post])?);
    Ok(())
}

#[test]
fn test_malformed_post_aborts_the_run_by_default() -> Result<()> {
    let dir = TempDir::new()?;
    let broken = write_post(&dir, "2020-01-01-broken.md", "no front matter\n");
    let valid = write_post(&dir, "2021-01-01-file2.md", WELL_FORMED);

    let (reporter, calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), vec![], Box::new(reporter));

    let result = keeper.check_rules_for_files(&[broken, valid]);

    assert!(result.is_err());
    // The run stopped before the second file; nothing was reported.
    assert!(calls.borrow().is_empty());
    Ok(())
}

#[test]
fn test_skip_and_report_policy_surfaces_the_error_and_continues() -> Result<()> {
    let dir = TempDir::new()?;
    let broken = write_post(&dir, "2020-01-01-broken.md", "no front matter\n");
    let valid = write_post(&dir, "2021-01-01-file2.md", WELL_FORMED);

    let (reporter, calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), vec![], Box::new(reporter))
        .with_malformed_post_policy(MalformedPostPolicy::SkipAndReport);

    let error_found = keeper.check_rules_for_files(&[broken, valid])?;

    assert!(error_found);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "2020-01-01-broken.md");
    assert!(calls[0].1.has_errors());
    assert!(calls[0].1.errors[0].contains("starting metadata section"));
    assert!(calls[1].1.is_empty());
    Ok(())
}

#[test]
fn test_end_to_end_failure_signal_depends_on_errors_only() -> Result<()> {
    let dir = TempDir::new()?;
    // One post violating the filename rule, one clean, one non-markdown.
    let undated = write_post(&dir, "undated-post.md", WELL_FORMED);
    let dated = write_post(&dir, "2021-01-01-file2.md", WELL_FORMED);
    let txt = write_post(&dir, "notes.txt", "irrelevant");

    let checkers: Vec<Box<dyn RuleChecker>> =
        vec![Box::new(CheckerFn(rulekeeper::filename_starts_with_a_date))];
    let (reporter, calls) = RecordingReporter::new();
    let keeper = RuleKeeper::new(PostDataExtractor::new(), checkers, Box::new(reporter));

    let error_found = keeper.check_rules_for_files(&[undated, dated, txt])?;

    assert!(error_found);
    let calls = calls.borrow();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].1.has_errors());
    assert!(!calls[1].1.has_errors());
    Ok(())
}
