//! Key validation and match-mode selection.
//!
//! A key is searched literally unless the rule asks for `PATTERN` *and* the
//! key compiles. A key that fails to compile silently falls back to literal
//! search ([`MatchMode::Degraded`]); setting `STRICT` turns that fallback into
//! [`Error::PatternCompile`].

use super::metrics::MatchMode;
use crate::{Error, Result, Rule};
use regex::Regex;

#[derive(Debug)]
pub(crate) enum Matcher<'r> {
    /// Verbatim substring search for the whole key.
    Literal(&'r str),
    Pattern(Regex),
}

pub(crate) fn compile(rule: &Rule) -> Result<(Matcher<'_>, MatchMode)> {
    if rule.key.is_empty() {
        return Err(Error::InvalidRule);
    }

    if !rule.uses_pattern() {
        return Ok((Matcher::Literal(&rule.key), MatchMode::Literal));
    }

    match Regex::new(&rule.key) {
        Ok(re) => Ok((Matcher::Pattern(re), MatchMode::Pattern)),
        Err(source) if rule.is_strict() => Err(Error::PatternCompile { key: rule.key.clone(), source }),
        Err(err) => {
            tracing::debug!(key = %rule.key, error = %err, "pattern did not compile, matching literally");
            Ok((Matcher::Literal(&rule.key), MatchMode::Degraded))
        }
    }
}
