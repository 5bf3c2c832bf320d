use thiserror::Error;

/// Errors produced while applying a [`Rule`](crate::Rule).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The rule has an empty key; it cannot match anything meaningful.
    #[error("invalid rule: key must not be empty")]
    InvalidRule,

    /// The key failed to compile as a regular expression and the rule was
    /// marked [`RuleFlags::STRICT`](crate::RuleFlags::STRICT).
    #[error("invalid pattern '{key}': {source}")]
    PatternCompile {
        key: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
