//! Concrete editorial rules. Each one implements [`crate::RuleChecker`].

pub mod filename;
pub mod key_tags;
pub mod similar_tags;
