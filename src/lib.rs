//! Ordered text substitution over a mutable template.
//!
//! A [`Rule`] describes one substitution: a key (literal text or a regular
//! expression), a replacement (static text or a function of the match), and
//! flags choosing first-match vs every-match replacement. A [`RuleBatch`]
//! applies a list of rules in order with either fail-fast or
//! observe-and-continue error handling.
//!
//! The engine knows nothing about the template's format: a key like
//! `{{name}}` is just text.
//!
//! ```
//! use subst_rules::{Rule, RuleBatch};
//!
//! let mut text = String::from("the time is {{hour}}h {{minute}}m");
//! let batch = RuleBatch::new(vec![Rule::new("{{hour}}", "12"), Rule::new("{{minute}}", "00")]);
//! batch.apply_all(&mut text).unwrap();
//! assert_eq!(text, "the time is 12h 00m");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;

#[cfg(test)]
mod tests;

use std::sync::Arc;

pub use api::substitute;
pub use engine::{BatchMetrics, BatchRun, MatchMode, RuleMetrics, RuleReport};
pub use error::{Error, Result};

// --- Rule -------------------------------------------------------------------

/// Replacement producer: receives the matched text and its 0-based match index.
///
/// Under literal matching it is always called with `("", 0)`.
pub type ValueFn = Arc<dyn Fn(&str, usize) -> String + Send + Sync>;

/// Observer for rules that fail inside a non fail-fast [`RuleBatch`].
pub type ErrorObserver = Arc<dyn Fn(&Error, usize) + Send + Sync>;

bitflags::bitflags! {
    /// Matching and repetition switches for a [`Rule`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RuleFlags: u8 {
        /// Replace every non-overlapping match instead of only the first.
        const REPEAT  = 1 << 0;
        /// Compile the key as a regular expression.
        const PATTERN = 1 << 1;
        /// With `PATTERN`: fail with [`Error::PatternCompile`] instead of
        /// falling back to literal matching when the key does not compile.
        const STRICT  = 1 << 2;
    }
}

/// One substitution instruction.
///
/// Rules are immutable descriptions; the same rule can be applied to any
/// number of templates, including from several threads at once.
#[derive(Clone)]
pub struct Rule {
    /// Text or pattern to search for. Must not be empty.
    pub key: String,
    /// Static replacement, used when `value_fn` is `None`.
    pub value: String,
    /// Computed replacement, used instead of `value` when present.
    pub value_fn: Option<ValueFn>,
    pub flags: RuleFlags,
}

impl Rule {
    /// A literal, first-match rule replacing `key` with `value`.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Rule { key: key.into(), value: value.into(), value_fn: None, flags: RuleFlags::empty() }
    }

    /// A literal, first-match rule whose replacement is computed by `f`.
    pub fn computed<F>(key: impl Into<String>, f: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        Rule::new(key, String::new()).with_value_fn(f)
    }

    pub fn with_value_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str, usize) -> String + Send + Sync + 'static,
    {
        self.value_fn = Some(Arc::new(f));
        self
    }

    pub fn repeat(mut self, on: bool) -> Self {
        self.flags.set(RuleFlags::REPEAT, on);
        self
    }

    pub fn pattern(mut self, on: bool) -> Self {
        self.flags.set(RuleFlags::PATTERN, on);
        self
    }

    pub fn strict(mut self, on: bool) -> Self {
        self.flags.set(RuleFlags::STRICT, on);
        self
    }

    pub fn is_repeat(&self) -> bool {
        self.flags.contains(RuleFlags::REPEAT)
    }

    pub fn uses_pattern(&self) -> bool {
        self.flags.contains(RuleFlags::PATTERN)
    }

    pub fn is_strict(&self) -> bool {
        self.flags.contains(RuleFlags::STRICT)
    }

    /// Replacement text for one match.
    pub(crate) fn value_for(&self, matched: &str, index: usize) -> String {
        match &self.value_fn {
            Some(f) => f(matched, index),
            None => self.value.clone(),
        }
    }
}

impl Default for Rule {
    fn default() -> Self {
        Rule::new(String::new(), String::new())
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("value_fn", &self.value_fn.as_ref().map(|_| "<function>"))
            .field("flags", &self.flags)
            .finish()
    }
}

// --- RuleBatch --------------------------------------------------------------

/// An ordered list of rules plus a failure policy.
///
/// Later rules see the output of earlier ones. Nothing is rolled back: when a
/// rule fails, the mutations of the rules before it stay in the template.
#[derive(Clone, Default)]
pub struct RuleBatch {
    pub rules: Vec<Rule>,
    /// Stop at the first failing rule and return its error.
    pub fail_fast: bool,
    /// Called with `(error, rule_index)` for each failing rule when
    /// `fail_fast` is off.
    pub on_error: Option<ErrorObserver>,
}

impl RuleBatch {
    /// A batch that keeps going past failing rules, with no observer.
    pub fn new(rules: Vec<Rule>) -> Self {
        RuleBatch { rules, fail_fast: false, on_error: None }
    }

    pub fn with_fail_fast(mut self, on: bool) -> Self {
        self.fail_fast = on;
        self
    }

    pub fn with_observer<F>(mut self, f: F) -> Self
    where
        F: Fn(&Error, usize) + Send + Sync + 'static,
    {
        self.on_error = Some(Arc::new(f));
        self
    }
}

impl std::fmt::Debug for RuleBatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBatch")
            .field("rules", &self.rules)
            .field("fail_fast", &self.fail_fast)
            .field("on_error", &self.on_error.as_ref().map(|_| "<function>"))
            .finish()
    }
}
