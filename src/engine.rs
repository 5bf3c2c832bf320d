//! Matching and substitution engine.
//!
//! Applying a rule is a short pipeline:
//!
//! ```text
//! Rule ── matcher::compile ──> Matcher::{Literal, Pattern}   (matcher.rs)
//!           - reject empty keys
//!           - compile the key when PATTERN is set
//!           - degrade to literal on a bad pattern (unless STRICT)
//!                 │
//!                 v
//!        replace::{literal, pattern}                        (replace.rs)
//!           - first match or every match (REPEAT)
//!           - static value or value_fn per match
//!                 │
//!                 v
//!        Replaced { text, replacements, value_calls }  (text is None when nothing matched)
//! ```
//!
//! A batch is a sequential fold over its rules (`batch.rs`), branching per
//! rule on the fail-fast policy. Timing and counts for both levels live in
//! `metrics.rs`.
//!
//! Patterns are compiled on every application. Nothing is cached between
//! calls, so a `Rule` carries no state and can be shared freely.

#[path = "engine/batch.rs"]
mod batch;
#[path = "engine/matcher.rs"]
mod matcher;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/replace.rs"]
mod replace;

pub(crate) use batch::run_batch;
pub use metrics::{BatchMetrics, BatchRun, MatchMode, RuleMetrics, RuleReport};

use crate::{Result, Rule};
use matcher::Matcher;
use std::time::Instant;

/// Apply `rule` to `template` in place and report what happened.
///
/// On error the template is left untouched.
pub(crate) fn apply_rule(rule: &Rule, template: &mut String) -> Result<RuleMetrics> {
    let start = Instant::now();
    let (matcher, mode) = matcher::compile(rule)?;

    let replaced = match &matcher {
        Matcher::Literal(key) => replace::literal(template, key, rule),
        Matcher::Pattern(re) => replace::pattern(template, re, rule),
    };

    tracing::trace!(key = %rule.key, ?mode, replacements = replaced.replacements, "applied rule");

    if let Some(text) = replaced.text {
        *template = text;
    }

    Ok(RuleMetrics {
        mode,
        replacements: replaced.replacements,
        value_calls: replaced.value_calls,
        duration: start.elapsed(),
    })
}
