use crate::{Grammar, ParseError, Parsed, Pattern, RuleId};

impl Grammar {
    /// One-rule grammar; panics on construction errors.
    pub fn expect_pattern(pattern: impl Into<Pattern>) -> (Grammar, RuleId) {
        Grammar::from_pattern(pattern).expect("pattern should lower")
    }

    /// Look up a rule by name; panics if it does not exist.
    pub fn expect_rule(&self, name: &str) -> RuleId {
        self.rule(name).unwrap_or_else(|| panic!("rule `{name}` should exist"))
    }
}

/// Match an ad-hoc pattern at the start of `text`.
pub fn parse_pattern<'s>(
    pattern: impl Into<Pattern>,
    text: &'s str,
) -> Result<Parsed<'s>, ParseError> {
    let (grammar, root) = Grammar::expect_pattern(pattern);
    grammar.parse(root, text)
}

/// Bytes consumed by an ad-hoc pattern, `None` when it does not match.
pub fn consumed(pattern: impl Into<Pattern>, text: &str) -> Option<usize> {
    parse_pattern(pattern, text).ok().map(|parsed| parsed.consumed)
}

/// Parse `text` with `rule` and render the tree.
pub fn dump_tree(grammar: &Grammar, rule: RuleId, text: &str) -> String {
    let parsed = grammar.parse(rule, text).expect("input should match");
    assert_eq!(parsed.output(), &text[..parsed.consumed]);
    parsed.printer(grammar).dump()
}
