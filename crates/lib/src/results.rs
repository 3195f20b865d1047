//! Categorized check results and their merge semantics.

use serde::Serialize;

/// The outcome of running one or more rule checkers against a post.
///
/// Three recognized categories, each an ordered list of human-readable
/// messages (order = order of detection). An empty category is equivalent to
/// an absent one; `Default` gives all three empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RuleCheckResults {
    /// Hard failures. Any entry here fails the overall run.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    /// Non-fatal issues worth surfacing.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Advisory suggestions. Never contribute to the failure signal.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl RuleCheckResults {
    /// A result set holding a single error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Self::default()
        }
    }

    /// A result set holding the given recommendations.
    pub fn recommendations(messages: Vec<String>) -> Self {
        Self {
            recommendations: messages,
            ..Self::default()
        }
    }

    /// Appends `other`'s categories after this set's own entries.
    ///
    /// Concatenation per category, left-then-right, never deduplicating.
    pub fn merge(&mut self, other: RuleCheckResults) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.recommendations.extend(other.recommendations);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.recommendations.is_empty()
    }
}
