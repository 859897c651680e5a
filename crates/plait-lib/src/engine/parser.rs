//! Top-level parse entry points and per-call limits.

use super::context::ParseContext;
use super::error::ParseError;
use super::matcher::Matcher;
use super::trace::{NoopTracer, Tracer};
use crate::grammar::{Grammar, RuleId};
use crate::tree::Parsed;

/// Default maximum nesting of combinator calls.
///
/// Each level of a rule recursing through `either![seq![.., rule], ..]` nests
/// three calls (alternation, sequence, rule reference), so a right-recursive
/// list of about 340 items reaches this limit.
pub const DEFAULT_RECURSION_FUEL: u32 = 1024;

/// Limits applied to each parse call. `None` means unlimited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum number of combinator invocations.
    pub exec_fuel: Option<u32>,
    /// Maximum nesting of combinator invocations.
    ///
    /// `None` leaves nesting bounded only by the thread's stack; deep enough
    /// input overflows it and aborts the process.
    pub recursion_fuel: Option<u32>,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            exec_fuel: None,
            recursion_fuel: Some(DEFAULT_RECURSION_FUEL),
        }
    }
}

/// Runs rules of a grammar against input text.
///
/// A `Parser` holds only configuration. Each call gets its own context, so
/// one parser (or many, over the same grammar) may be used from any number
/// of threads at once.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    config: ParseConfig,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            config: ParseConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParseConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_exec_fuel(mut self, fuel: Option<u32>) -> Self {
        self.config.exec_fuel = fuel;
        self
    }

    /// See [`ParseConfig::recursion_fuel`] before passing `None`.
    pub fn with_recursion_fuel(mut self, fuel: Option<u32>) -> Self {
        self.config.recursion_fuel = fuel;
        self
    }

    pub fn config(&self) -> ParseConfig {
        self.config
    }

    pub fn parse<'s>(&self, rule: RuleId, text: &'s str) -> Result<Parsed<'s>, ParseError> {
        self.parse_at(rule, text, 0)
    }

    pub fn parse_at<'s>(
        &self,
        rule: RuleId,
        text: &'s str,
        start: usize,
    ) -> Result<Parsed<'s>, ParseError> {
        self.parse_with(rule, text, start, &mut NoopTracer)
    }

    /// Parse with execution hooks; see [`Tracer`].
    pub fn parse_with<'s, T: Tracer>(
        &self,
        rule: RuleId,
        text: &'s str,
        start: usize,
        tracer: &mut T,
    ) -> Result<Parsed<'s>, ParseError> {
        if start > text.len() || !text.is_char_boundary(start) {
            return Err(ParseError::StartOutOfBounds {
                start,
                len: text.len(),
            });
        }

        let root = self.grammar.rule_root(rule);
        let ctx = ParseContext::new(self.config.exec_fuel, self.config.recursion_fuel);
        let mut matcher = Matcher::new(self.grammar, text, ctx, tracer);
        let result = matcher.match_node(root, start);

        if let Some(fatal) = matcher.into_context().take_fatal_error() {
            return Err(fatal);
        }
        result.map_err(|failure| ParseError::NoMatch {
            label: self.grammar.label(failure.node).to_string(),
            offset: failure.offset,
        })
    }
}

impl Grammar {
    /// Match `rule` at the start of `text` with default limits.
    pub fn parse<'s>(&self, rule: RuleId, text: &'s str) -> Result<Parsed<'s>, ParseError> {
        Parser::new(self).parse(rule, text)
    }
}

/// Match `rule` against `text` starting at byte offset `start`.
pub fn parse<'s>(
    grammar: &Grammar,
    rule: RuleId,
    text: &'s str,
    start: usize,
) -> Result<Parsed<'s>, ParseError> {
    Parser::new(grammar).parse_at(rule, text, start)
}
