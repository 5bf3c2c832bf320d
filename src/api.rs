use crate::engine::{self, BatchRun, RuleMetrics};
use crate::{Result, Rule, RuleBatch};

impl Rule {
    /// Apply this rule to `template` in place.
    ///
    /// Finding nothing to replace is not an error. The only failures are an
    /// empty key ([`Error::InvalidRule`](crate::Error::InvalidRule)) and, for
    /// strict pattern rules, a key that does not compile; in both cases the
    /// template is left untouched.
    ///
    /// # Example
    /// ```
    /// use subst_rules::Rule;
    ///
    /// let mut text = String::from("let's count num num num");
    /// Rule::computed("num", |_, i| i.to_string()).pattern(true).repeat(true).apply(&mut text).unwrap();
    /// assert_eq!(text, "let's count 0 1 2");
    /// ```
    pub fn apply(&self, template: &mut String) -> Result<()> {
        engine::apply_rule(self, template).map(|_| ())
    }

    /// Like [`Rule::apply`], also reporting the match mode used and the number
    /// of replacements made.
    pub fn apply_with_metrics(&self, template: &mut String) -> Result<RuleMetrics> {
        engine::apply_rule(self, template)
    }
}

impl RuleBatch {
    /// Apply every rule, in order, to `template`.
    ///
    /// Returns an error only when `fail_fast` is set and a rule fails; the
    /// template then holds the output of the rules before it. Without
    /// `fail_fast` every rule is attempted, failures go to `on_error`, and the
    /// batch reports success.
    ///
    /// # Example
    /// ```
    /// use std::sync::{Arc, Mutex};
    /// use subst_rules::{Rule, RuleBatch};
    ///
    /// let failed = Arc::new(Mutex::new(Vec::new()));
    /// let log = failed.clone();
    /// let batch = RuleBatch::new(vec![Rule::new("{{value}}", "57"), Rule::default()])
    ///     .with_observer(move |_, i| log.lock().unwrap().push(i));
    ///
    /// let mut text = String::from("{{value}} {{error}}");
    /// batch.apply_all(&mut text).unwrap();
    /// assert_eq!(text, "57 {{error}}");
    /// assert_eq!(*failed.lock().unwrap(), vec![1]);
    /// ```
    pub fn apply_all(&self, template: &mut String) -> Result<()> {
        engine::run_batch(self, template).result
    }

    /// Like [`RuleBatch::apply_all`], also returning per-rule reports and timing.
    pub fn apply_all_with_metrics(&self, template: &mut String) -> BatchRun {
        engine::run_batch(self, template)
    }
}

/// Run `rules` in order over a copy of `template` and return the result.
///
/// Stops at the first failing rule.
pub fn substitute(template: &str, rules: &[Rule]) -> Result<String> {
    let mut out = template.to_string();
    for rule in rules {
        rule.apply(&mut out)?;
    }
    Ok(out)
}
