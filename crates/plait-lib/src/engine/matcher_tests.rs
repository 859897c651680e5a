use crate::test_utils::{consumed, parse_pattern};
use crate::{
    LETTERS, ParseError, SPACES, either, literal_char, literal_word, nothing, optional, repeat,
    repeat1, seq, until, word_class,
};

#[test]
fn nothing_matches_empty() {
    let parsed = parse_pattern(nothing(), "anything").unwrap();
    assert_eq!(parsed.consumed, 0);
    assert_eq!(parsed.output(), "");
    assert_eq!(parsed.parts().count(), 0);
}

#[test]
fn single_char_or_nothing() {
    assert_eq!(consumed('a', "a"), Some(1));
    assert_eq!(consumed('a', "b"), None);
    assert_eq!(consumed(either!['a', nothing()], "b"), Some(0));
}

#[test]
fn repeated_chars() {
    assert_eq!(consumed(repeat('a'), "aa"), Some(2));
    assert_eq!(consumed(repeat('a'), "aaaa"), Some(4));
    assert_eq!(consumed(repeat(either!['a', nothing()]), "aaaa"), Some(4));
}

#[test]
fn a_then_b() {
    let a = repeat('a');
    let a_opt = repeat(either!['a', nothing()]);
    let b = repeat('b');
    let b_opt = repeat(either!['b', nothing()]);

    for text in ["ab", "abc"] {
        for pattern in [seq![&a, &b], seq![&a_opt, &b], seq![&a_opt, &b_opt]] {
            let parsed = parse_pattern(pattern, text).unwrap();
            assert_eq!(parsed.consumed, 2);
            assert_eq!(parsed.output(), "ab");
        }
    }
}

#[test]
fn specific_word() {
    assert_eq!(consumed(literal_word("tomato"), "tomato"), Some(6));
    assert_eq!(consumed(literal_word("tomato"), ""), None);
}

#[test]
fn repeated_words() {
    let tomatoes = repeat("tomato");
    let eight = "tomato".repeat(8);

    assert_eq!(consumed(&tomatoes, "tomato"), Some(6));
    assert_eq!(consumed(&tomatoes, &eight), Some(48));
    assert_eq!(parse_pattern(&tomatoes, "tomatoPuree").unwrap().output(), "tomato");
    assert_eq!(consumed(&tomatoes, "sauce made from tomato"), Some(0));
}

#[test]
fn repeat_on_empty_input() {
    let parsed = parse_pattern(repeat("tomato"), "").unwrap();
    assert_eq!(parsed.consumed, 0);
    assert_eq!(parsed.output(), "");
    assert!(parsed.node.children().is_empty());
}

#[test]
fn repeat1_needs_one_match() {
    let err = parse_pattern(repeat1("tomato"), "banana").unwrap_err();
    assert_eq!(
        err,
        ParseError::NoMatch {
            label: "Repeat".to_string(),
            offset: 0
        }
    );
    assert_eq!(consumed(repeat1("tomato"), "tomatotomato!"), Some(12));
}

#[test]
fn word_class_runs() {
    assert_eq!(consumed(word_class("abc"), "abc"), Some(3));
    assert_eq!(parse_pattern(word_class("abc"), "bcd").unwrap().output(), "bc");
    assert_eq!(consumed(word_class("abc"), "xyz"), None);
    assert_eq!(consumed(word_class("abc"), ""), None);
}

#[test]
fn joined_variable() {
    let var = seq!['$', word_class(LETTERS)];
    assert_eq!(consumed(&var, "$variable"), Some(9));
    assert_eq!(parse_pattern(&var, "$var again").unwrap().output(), "$var");

    let var_space = seq![&var, word_class(" ")];
    assert_eq!(parse_pattern(&var_space, "$var again").unwrap().output(), "$var ");

    let var_space_word = seq![&var_space, word_class(LETTERS)];
    assert_eq!(consumed(&var_space_word, "$var again"), Some(10));
}

#[test]
fn sequence_round_trip() {
    let ident = word_class(&format!("{LETTERS}_"));
    let parsed = parse_pattern(seq!['$', ident], "$thing_two extra").unwrap();
    assert_eq!(parsed.consumed, 10);
    assert_eq!(parsed.output(), "$thing_two");
}

#[test]
fn sequence_reports_failing_member() {
    let err = parse_pattern(seq!['$', word_class(LETTERS)], "$ x").unwrap_err();
    assert_eq!(
        err,
        ParseError::NoMatch {
            label: "Class".to_string(),
            offset: 1
        }
    );
}

#[test]
fn sequence_does_not_backtrack() {
    // The greedy class swallows the `a` the literal needs.
    let pattern = seq![word_class("ab"), 'a'];
    assert_eq!(consumed(pattern, "aba"), None);
}

#[test]
fn until_scenarios() {
    let space = until(" ");
    assert_eq!(parse_pattern(space.clone(), "thing ").unwrap().output(), "thing ");
    assert_eq!(parse_pattern(space.clone(), "thing another").unwrap().output(), "thing ");
    assert_eq!(consumed(space, "thisisalongtext"), Some(15));
    assert_eq!(consumed(until(" ").fail_on_eof(), "thisisalongtext"), None);

    let end = until("END");
    assert_eq!(consumed(end.clone(), "START do stuff. END"), Some(19));
    assert_eq!(
        consumed(end.clone(), "START do stuff. END and some extra crap. END AGAIN"),
        Some(19)
    );
    assert_eq!(consumed(end, "START do stuff. "), Some(16));
    assert_eq!(consumed(until("END").fail_on_eof(), "START do stuff. "), None);
}

#[test]
fn until_with_escape() {
    let quoted = until("\"").escape('\\');
    let text = "thing\\\" end\"";
    assert_eq!(consumed(quoted.clone(), text), Some(text.len()));
    assert_eq!(parse_pattern(quoted.clone(), "thing\" another").unwrap().output(), "thing\"");

    let text = r#"say \"hi\" now" tail"#;
    assert_eq!(parse_pattern(quoted, text).unwrap().output(), r#"say \"hi\" now""#);
}

#[test]
fn either_tries_options_in_order() {
    assert_eq!(consumed(either!['a', 'b'], "a"), Some(1));
    assert_eq!(consumed(either!['a', 'b'], "b"), Some(1));
    assert_eq!(consumed(either!['a', 'b', 'c'], "c"), Some(1));
    assert_eq!(consumed(literal_char('a') | literal_word("bc"), "bc"), Some(2));
    // First success wins, not the longest.
    assert_eq!(consumed(either!["==", "==="], "==="), Some(2));
}

#[test]
fn either_fails_when_no_option_matches() {
    let err = parse_pattern(either!['a', 'b', 'c'], "d").unwrap_err();
    assert_eq!(
        err,
        ParseError::NoMatch {
            label: "Either".to_string(),
            offset: 0
        }
    );
}

#[test]
fn either_defers_empty_matches() {
    assert_eq!(consumed(either![nothing(), "x"], "x"), Some(1));

    let parsed = parse_pattern(either![nothing(), "x"], "y").unwrap();
    assert_eq!(parsed.consumed, 0);
    assert_eq!(parsed.node.text(), Some(""));
}

#[test]
fn either_with_trailing_nothing() {
    let chocolate = either![literal_word("chocolate"), nothing()];
    assert_eq!(parse_pattern(&chocolate, "chocolate!").unwrap().output(), "chocolate");
    assert_eq!(consumed(&chocolate, "vanilla"), Some(0));
}

#[test]
fn multiple_nothings() {
    let e = either![literal_word("chocolate"), ' ', nothing()];
    assert_eq!(consumed(&e, "chocolate!"), Some(9));
    assert_eq!(consumed(repeat(&e), "chocolate!"), Some(9));

    // The nested `Nothing` is hoisted behind `e`'s options.
    let me = repeat(either![either!['?', nothing()], &e]);
    let parsed = parse_pattern(me, "chocolate!").unwrap();
    assert_eq!(parsed.consumed, 9);
    assert_eq!(parsed.output(), "chocolate");
}

#[test]
fn repeated_alternation() {
    let words = either![literal_word("the"), literal_word("cat")];
    let s = repeat(either![word_class(SPACES), words]);

    assert_eq!(parse_pattern(&s, "the cat sat on the mat").unwrap().output(), "the cat ");
    let parsed = parse_pattern(&s, "the the the cat, yo. remix!").unwrap();
    assert_eq!(parsed.consumed, 15);
    assert_eq!(parsed.output(), "the the the cat");
}

#[test]
fn repeat_of_optional_terminates() {
    let a_run = repeat(either!['a', nothing()]);
    assert_eq!(consumed(&a_run, "aaab"), Some(3));
    assert_eq!(consumed(&a_run, "b"), Some(0));
    assert_eq!(consumed(&a_run, ""), Some(0));
    assert_eq!(consumed(repeat(nothing()), "abc"), Some(0));
}

#[test]
fn optional_sugar() {
    let signed = seq![optional!['-', '+'], word_class("0123456789")];
    assert_eq!(consumed(&signed, "-42"), Some(3));
    assert_eq!(consumed(&signed, "+7"), Some(2));
    assert_eq!(consumed(&signed, "19"), Some(2));
    assert_eq!(consumed(&signed, "-"), None);
}

#[test]
fn start_offset_is_respected() {
    let (grammar, root) = crate::Grammar::expect_pattern(word_class(LETTERS));
    let parsed = crate::parse(&grammar, root, "12 abc", 3).unwrap();
    assert_eq!(parsed.start, 3);
    assert_eq!(parsed.consumed, 3);
    assert_eq!(parsed.output(), "abc");
}
