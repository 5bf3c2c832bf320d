//! Literal and pattern replacement.
//!
//! Both paths read from the original template and build a new string; the
//! caller decides whether to write it back.
//!
//! ```text
//! literal, value_fn:   f("", 0) once, reused for every replaced occurrence
//! pattern, REPEAT:     "a1 b2 c3"  /\d/  ->  f("1",0) f("2",1) f("3",2)
//! pattern, first only: "a1 b2 c3"  /\d/  ->  f("1",0), rest untouched
//! ```

use crate::Rule;
use regex::{Captures, Regex};

/// Outcome of one replacement pass.
#[derive(Debug)]
pub(crate) struct Replaced {
    /// New template, or `None` when nothing matched.
    pub text: Option<String>,
    pub replacements: usize,
    pub value_calls: usize,
}

impl Replaced {
    fn unchanged() -> Self {
        Replaced { text: None, replacements: 0, value_calls: 0 }
    }
}

pub(crate) fn literal(template: &str, key: &str, rule: &Rule) -> Replaced {
    let occurrences = template.matches(key).count();
    if occurrences == 0 {
        return Replaced::unchanged();
    }

    let value = rule.value_for("", 0);
    let value_calls = usize::from(rule.value_fn.is_some());

    if rule.is_repeat() {
        Replaced { text: Some(template.replace(key, &value)), replacements: occurrences, value_calls }
    } else {
        Replaced { text: Some(template.replacen(key, &value, 1)), replacements: 1, value_calls }
    }
}

pub(crate) fn pattern(template: &str, re: &Regex, rule: &Rule) -> Replaced {
    if rule.is_repeat() {
        let mut index = 0;
        let text = re.replace_all(template, |caps: &Captures<'_>| {
            let matched = caps.get(0).map_or("", |m| m.as_str());
            let value = rule.value_for(matched, index);
            index += 1;
            value
        });

        if index == 0 {
            return Replaced::unchanged();
        }
        let value_calls = if rule.value_fn.is_some() { index } else { 0 };
        return Replaced { text: Some(text.into_owned()), replacements: index, value_calls };
    }

    let Some(m) = re.find(template) else {
        return Replaced::unchanged();
    };

    let value = rule.value_for(m.as_str(), 0);
    let mut text = String::with_capacity(template.len() - m.len() + value.len());
    text.push_str(&template[..m.start()]);
    text.push_str(&value);
    text.push_str(&template[m.end()..]);

    Replaced { text: Some(text), replacements: 1, value_calls: usize::from(rule.value_fn.is_some()) }
}
