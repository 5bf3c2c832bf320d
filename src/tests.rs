use crate::{Error, Rule, RuleBatch};
use std::sync::{Arc, Mutex};

fn applied(rule: &Rule, input: &str) -> String {
    let mut text = input.to_string();
    rule.apply(&mut text).unwrap();
    text
}

#[test]
fn substitution_examples() {
    // (rule, input, expected)
    let cases: Vec<(Rule, &str, &str)> = vec![
        (Rule::new("hello", "bye"), "hello world", "bye world"),
        (Rule::new("rust", "go").repeat(true), "I love rust because rust is awesome", "I love go because go is awesome"),
        (Rule::new("rust", "go"), "I love rust because rust is awesome", "I love go because rust is awesome"),
        (
            Rule::computed("num", |_, i| i.to_string()).pattern(true).repeat(true),
            "let's count num num num num num",
            "let's count 0 1 2 3 4",
        ),
        (
            Rule::computed("num", |_, i| i.to_string()).repeat(true),
            "let's count num num num num num",
            "let's count 0 0 0 0 0",
        ),
        (Rule::new("dog(s?)", "cats").pattern(true), "cats cats dogs cats", "cats cats cats cats"),
        (Rule::new("dog(s?)", "cats").pattern(true), "dogs dog", "cats dog"),
        (
            Rule::computed("dog(s?)", |m, _| if m == "dogs" { "cats".into() } else { "cat".into() }).pattern(true),
            "cats cats dog cats",
            "cats cats cat cats",
        ),
        (Rule::new(r"\", "/").pattern(true).repeat(true), r"\home\user\app", "/home/user/app"),
        (Rule::new(r"\\", "/").pattern(true).repeat(true), r"\home\user\app", "/home/user/app"),
        (Rule::new("missing", "x").repeat(true), "nothing to see", "nothing to see"),
        (Rule::new("{{x}}", ""), "a{{x}}b", "ab"),
        (Rule::new("a+", "-").repeat(true), "a+a aa+", "-a a-"),
        (Rule::new("a+", "-").pattern(true).repeat(true), "a+a aa+", "-+- -+"),
    ];

    for (rule, input, expected) in cases {
        assert_eq!(applied(&rule, input), expected, "rule {rule:?} on {input:?}");
    }
}

#[test]
fn pattern_value_fn_sees_each_match() {
    let names = ["Joe Swanson", "Peter Griffin", "Glenn Quagmire"];
    let rule = Rule::computed(r"\{name[1-3]\}", move |m, _| {
        let n: usize = m[5..6].parse().unwrap_or(1);
        names[n - 1].to_string()
    })
    .pattern(true)
    .repeat(true);

    assert_eq!(applied(&rule, "{name1} and {name2} and {name3}"), "Joe Swanson and Peter Griffin and Glenn Quagmire");
}

#[test]
fn pattern_value_fn_calls_are_ordered() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let log = calls.clone();
    let rule = Rule::computed(r"[0-9]+", move |m, i| {
        log.lock().unwrap().push((m.to_string(), i));
        format!("<{m}>")
    })
    .pattern(true)
    .repeat(true);

    assert_eq!(applied(&rule, "7 apples, 12 pears, 300 plums"), "<7> apples, <12> pears, <300> plums");
    assert_eq!(
        *calls.lock().unwrap(),
        vec![("7".to_string(), 0), ("12".to_string(), 1), ("300".to_string(), 2)]
    );
}

#[test]
fn literal_key_absent_leaves_template_unchanged() {
    for key in ["zzz", "HELLO", "world!", "  "] {
        for repeat in [false, true] {
            let rule = Rule::new(key, "X").repeat(repeat);
            assert_eq!(applied(&rule, "hello world"), "hello world");
        }
    }
}

#[test]
fn empty_key_fails_and_leaves_template() {
    let rules = [
        Rule::default(),
        Rule::new("", "x").repeat(true),
        Rule::computed("", |_, _| "x".into()).pattern(true),
        rule! { key: "", value: "x", pattern: true, strict: true },
    ];

    for rule in rules {
        let mut text = String::from("untouched");
        assert_eq!(rule.apply(&mut text), Err(Error::InvalidRule));
        assert_eq!(text, "untouched");
    }
}

#[test]
fn strict_pattern_rule_reports_compile_error() {
    let rule = Rule::new("(", "x").pattern(true).strict(true);
    let mut text = String::from("a ( b");
    let err = rule.apply(&mut text).unwrap_err();

    assert!(matches!(err, Error::PatternCompile { ref key, .. } if key == "("));
    assert!(err.to_string().starts_with("invalid pattern '('"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(text, "a ( b");
}

#[test]
fn chained_rules() {
    let batch = RuleBatch::new(vec![Rule::new("{{hour}}", "12"), Rule::new("{{minute}}", "00")]);
    let mut text = String::from("the time is {{hour}}h {{minute}}m");
    batch.apply_all(&mut text).unwrap();
    assert_eq!(text, "the time is 12h 00m");
}

#[test]
fn chained_rules_with_observed_error() {
    let failures = Arc::new(Mutex::new(Vec::new()));
    let log = failures.clone();
    let batch = RuleBatch::new(vec![Rule::new("{{value}}", "57"), Rule::default()])
        .with_observer(move |err, i| log.lock().unwrap().push((err.clone(), i)));

    let mut text = String::from("{{value}} {{error}}");
    assert!(batch.apply_all(&mut text).is_ok());
    assert_eq!(text, "57 {{error}}");
    assert_eq!(*failures.lock().unwrap(), vec![(Error::InvalidRule, 1)]);
}

#[test]
fn continue_mode_without_observer_still_runs_every_rule() {
    let batch = RuleBatch::new(vec![Rule::default(), Rule::new("a", "b"), Rule::default(), Rule::new("b", "c")]);
    let mut text = String::from("a");
    assert!(batch.apply_all(&mut text).is_ok());
    assert_eq!(text, "c");
}

#[test]
fn fail_fast_keeps_earlier_mutations() {
    let batch = RuleBatch {
        rules: vec![Rule::new("{{value}}", "57"), Rule::default(), Rule::new("{{error}}", "never")],
        fail_fast: true,
        on_error: None,
    };

    let mut text = String::from("{{value}} {{error}}");
    assert_eq!(batch.apply_all(&mut text), Err(Error::InvalidRule));
    assert_eq!(text, "57 {{error}}");
}

#[test]
fn batch_metrics_show_degraded_rules() {
    use crate::MatchMode;

    let batch = RuleBatch::new(vec![
        Rule::new("[", "(").pattern(true).repeat(true),
        Rule::new(r"\]", ")").pattern(true).repeat(true),
        Rule::default(),
    ]);
    let mut text = String::from("[a] [b]");
    let run = batch.apply_all_with_metrics(&mut text);

    assert!(run.result.is_ok());
    assert_eq!(text, "(a) (b)");
    let modes: Vec<_> = run.metrics.rules.iter().filter_map(|r| r.outcome.as_ref().ok()).map(|m| m.mode).collect();
    assert_eq!(modes, vec![MatchMode::Degraded, MatchMode::Pattern]);
    assert_eq!(run.metrics.failed(), vec![2]);
    assert_eq!(run.metrics.replacements(), 4);
}

#[test]
fn rule_macro_builds_equivalent_rules() {
    let from_macro = rule! { key: "rust", value: "go", repeat: true };
    let by_hand = Rule::new("rust", "go").repeat(true);

    assert_eq!(from_macro.flags, by_hand.flags);
    assert_eq!(applied(&from_macro, "rust rust"), applied(&by_hand, "rust rust"));

    let counter = rule! {
        key: "num",
        value_fn: |_m, i| format!("#{i}"),
        repeat: true,
        pattern: true,
    };
    assert_eq!(applied(&counter, "num num"), "#0 #1");
}

#[test]
fn rules_are_shared_across_threads() {
    let rule = Rule::computed(r"\d", |m, i| format!("{m}{i}")).pattern(true).repeat(true);
    let batch = RuleBatch::new(vec![rule.clone(), Rule::new("x", "y").repeat(true)]);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let rule = &rule;
                let batch = &batch;
                s.spawn(move || {
                    let mut single = format!("{n} {n}");
                    rule.apply(&mut single).unwrap();

                    let mut batched = format!("x{n}x");
                    batch.apply_all(&mut batched).unwrap();
                    (single, batched)
                })
            })
            .collect();

        for (n, handle) in handles.into_iter().enumerate() {
            let (single, batched) = handle.join().unwrap();
            assert_eq!(single, format!("{n}0 {n}1"));
            assert_eq!(batched, format!("y{n}0y"));
        }
    });
}
