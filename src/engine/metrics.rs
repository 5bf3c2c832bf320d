//! Substitution run metrics.
//!
//! These structs describe what a rule or a batch actually did: which match
//! mode was used, how many spans were replaced, how often a value function
//! ran and how long it took.
//!
//! The intended usage is:
//!
//! - `Rule::apply` / `RuleBatch::apply_all` for normal operation.
//! - `Rule::apply_with_metrics` / `RuleBatch::apply_all_with_metrics` for
//!   debugging rule sets (for example spotting a pattern key that silently
//!   degraded to literal matching).

use crate::{Error, Result};
use std::time::Duration;

/// How a rule's key was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// Verbatim substring search.
    Literal,
    /// Regular expression search.
    Pattern,
    /// A pattern was requested but the key did not compile, so it was
    /// searched literally.
    Degraded,
}

/// Observations for a single successful rule application.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleMetrics {
    pub mode: MatchMode,
    /// Number of spans replaced. Zero means the template was left untouched.
    pub replacements: usize,
    /// Number of times the rule's value function was invoked.
    pub value_calls: usize,
    pub duration: Duration,
}

/// Per-rule entry of a [`BatchMetrics`].
#[derive(Debug, Clone)]
pub struct RuleReport {
    /// Position of the rule in the batch.
    pub index: usize,
    pub outcome: Result<RuleMetrics>,
}

impl RuleReport {
    pub fn error(&self) -> Option<&Error> {
        self.outcome.as_ref().err()
    }
}

/// Timing and per-rule reports for one batch run.
///
/// `rules` holds an entry for every rule that was attempted; after a
/// fail-fast abort the remaining rules have no entry.
#[derive(Debug, Default, Clone)]
pub struct BatchMetrics {
    pub total: Duration,
    pub rules: Vec<RuleReport>,
}

impl BatchMetrics {
    /// Total number of spans replaced across all successful rules.
    pub fn replacements(&self) -> usize {
        self.rules.iter().filter_map(|r| r.outcome.as_ref().ok()).map(|m| m.replacements).sum()
    }

    /// Indices of the rules that failed.
    pub fn failed(&self) -> Vec<usize> {
        self.rules.iter().filter(|r| r.outcome.is_err()).map(|r| r.index).collect()
    }
}

/// Batch outcome bundled with its metrics.
#[derive(Debug, Clone)]
pub struct BatchRun {
    /// What [`RuleBatch::apply_all`](crate::RuleBatch::apply_all) would return.
    pub result: Result<()>,
    pub metrics: BatchMetrics,
}
