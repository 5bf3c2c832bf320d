/// Build a [`Rule`](crate::Rule) from named fields.
///
/// Only `key` is required; the other fields must appear in this order.
///
/// ```
/// use subst_rules::rule;
///
/// let rule = rule! {
///     key: r"\{name[1-3]\}",
///     value_fn: |m, _i| m.trim_matches(['{', '}']).to_uppercase(),
///     repeat: true,
///     pattern: true,
/// };
///
/// let mut text = String::from("{name1} and {name2}");
/// rule.apply(&mut text).unwrap();
/// assert_eq!(text, "NAME1 and NAME2");
/// ```
#[macro_export]
macro_rules! rule {
    (
        key: $key:expr
        $(, value: $value:expr)?
        $(, value_fn: |$text:pat_param, $index:pat_param| $body:expr)?
        $(, repeat: $repeat:expr)?
        $(, pattern: $pattern:expr)?
        $(, strict: $strict:expr)?
        $(,)?
    ) => {{
        let rule = $crate::Rule::new($key, ::std::string::String::new());
        $(let rule = $crate::Rule { value: ::std::string::String::from($value), ..rule };)?
        $(let rule = rule.with_value_fn(move |$text: &str, $index: usize| -> ::std::string::String {
            ::std::string::String::from($body)
        });)?
        $(let rule = rule.repeat($repeat);)?
        $(let rule = rule.pattern($pattern);)?
        $(let rule = rule.strict($strict);)?
        rule
    }};
}
