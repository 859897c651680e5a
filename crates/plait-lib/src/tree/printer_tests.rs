use crate::test_utils::dump_tree;
use crate::{Grammar, LETTERS, NUMBERS, RuleId, SPACES, optional, seq, word_class};

fn assignment_grammar() -> (Grammar, RuleId) {
    let mut builder = Grammar::builder();
    let ident = builder.rule("ident", word_class(&format!("{LETTERS}{NUMBERS}_")));
    let var = builder.rule("var", seq!['$', ident]);
    let gap = builder.rule("gap", word_class(SPACES));
    let number = builder.rule("number", word_class(NUMBERS));
    let assign = builder.rule(
        "assign",
        seq![var, optional![gap], '=', optional![gap], number, ';'],
    );
    (builder.build().unwrap(), assign)
}

#[test]
fn printer_rule_labels() {
    let (grammar, _) = assignment_grammar();
    let var = grammar.expect_rule("var");

    insta::assert_snapshot!(dump_tree(&grammar, var, "$thing_two extra"), @r#"
    Var
      Char "$"
      Ident "thing_two"
    "#);
}

#[test]
fn printer_nested() {
    let (grammar, assign) = assignment_grammar();

    insta::assert_snapshot!(dump_tree(&grammar, assign, "$a = 12;"), @r#"
    Assign
      Var
        Char "$"
        Ident "a"
      Gap " "
      Char "="
      Gap " "
      Number "12"
      Char ";"
    "#);
}

#[test]
fn printer_with_spans() {
    let (grammar, assign) = assignment_grammar();
    let parsed = grammar.parse(assign, "$a=12;").unwrap();

    insta::assert_snapshot!(parsed.printer(&grammar).with_spans(true).dump(), @r#"
    Assign [0..6]
      Var [0..2]
        Char [0..1] "$"
        Ident [1..2] "a"
      Nothing [2..2] ""
      Char [2..3] "="
      Nothing [3..3] ""
      Number [3..5] "12"
      Char [5..6] ";"
    "#);
}

#[test]
fn printer_spans_are_absolute() {
    let (grammar, _) = assignment_grammar();
    let var = grammar.expect_rule("var");
    let parsed = crate::parse(&grammar, var, "x = $b", 4).unwrap();

    insta::assert_snapshot!(parsed.printer(&grammar).with_spans(true).dump(), @r#"
    Var [4..6]
      Char [4..5] "$"
      Ident [5..6] "b"
    "#);
}

#[test]
fn printer_escapes_text() {
    let (grammar, root) = Grammar::expect_pattern(crate::until("\n"));

    let out = dump_tree(&grammar, root, "say \"hi\"\nrest");
    insta::assert_snapshot!(out, @r#"Until "say \"hi\"\n""#);
}

#[test]
fn printer_colored() {
    let (grammar, root) = Grammar::expect_pattern('a');
    let parsed = grammar.parse(root, "a").unwrap();

    let out = parsed.printer(&grammar).colored(true).dump();
    assert_eq!(out, "\x1b[34mChar\x1b[0m \x1b[32m\"a\"\x1b[0m\n");
}

#[test]
fn pretty_print_matches_printer() {
    let (grammar, assign) = assignment_grammar();
    let parsed = grammar.parse(assign, "$x=1;").unwrap();

    assert_eq!(
        crate::pretty_print(&grammar, &parsed.node),
        parsed.node.printer(&grammar).dump()
    );
}
