//! Colored console reporting of per-file check results.

use owo_colors::OwoColorize;
use rulekeeper::{ResultsReporter, RuleCheckResults};

/// Prints merged check results to stdout, one block per file with findings.
///
/// Quiet on empty result sets; the orchestrator calls the reporter for every
/// processed file and leaves that decision here.
pub struct ConsoleReporter;

impl ResultsReporter for ConsoleReporter {
    fn report(&self, identifier: &str, results: &RuleCheckResults) {
        if results.is_empty() {
            return;
        }

        println!("Checks results for file: {identifier}");
        for error in &results.errors {
            println!("* {}: {error}", "Errors".red().bold());
        }
        for warning in &results.warnings {
            println!("* {}: {warning}", "Warnings".yellow().bold());
        }
        for recommendation in &results.recommendations {
            println!("* {}: {recommendation}", "Recommendations".cyan().bold());
        }
        println!();
    }
}
