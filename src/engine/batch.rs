//! Sequential application of a rule batch.
//!
//! The batch is a plain fold over its rules against one evolving template:
//!
//! ```text
//! for i in 0..rules.len():
//!     Ok   -> next rule
//!     Err  -> fail_fast ? return Err : on_error(err, i); next rule
//! ```
//!
//! There is no rollback. A rule that fails leaves the template as the
//! previous rules left it, and an observed (non fail-fast) failure never
//! turns into an error for the batch as a whole.

use super::apply_rule;
use super::metrics::{BatchMetrics, BatchRun, RuleReport};
use crate::RuleBatch;
use std::time::Instant;

pub(crate) fn run_batch(batch: &RuleBatch, template: &mut String) -> BatchRun {
    let start = Instant::now();
    let mut metrics = BatchMetrics { rules: Vec::with_capacity(batch.rules.len()), ..Default::default() };

    for (index, rule) in batch.rules.iter().enumerate() {
        let outcome = apply_rule(rule, template);

        if let Err(err) = &outcome {
            if batch.fail_fast {
                tracing::debug!(index, error = %err, "rule failed, aborting batch");
                let err = err.clone();
                metrics.rules.push(RuleReport { index, outcome });
                metrics.total = start.elapsed();
                return BatchRun { result: Err(err), metrics };
            }

            tracing::debug!(index, error = %err, "rule failed, continuing");
            if let Some(observer) = &batch.on_error {
                observer(err, index);
            }
        }

        metrics.rules.push(RuleReport { index, outcome });
    }

    metrics.total = start.elapsed();
    BatchRun { result: Ok(()), metrics }
}
