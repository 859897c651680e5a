//! Recursive-descent matcher over a frozen grammar.
//!
//! One `Matcher` serves exactly one top-level parse call. It borrows the
//! grammar immutably and owns the [`ParseContext`], so concurrent calls on the
//! same grammar never share state.

use super::context::ParseContext;
use super::terminals::{match_char, match_class, match_until, match_word};
use super::trace::Tracer;
use crate::grammar::{Grammar, Node, NodeId};
use crate::tree::{ParseNode, Parsed};

/// A combinator did not match.
///
/// Carries the combinator whose failure ended the attempt: the failing member
/// for sequences, the combinator itself otherwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NoMatch {
    pub(crate) node: NodeId,
    pub(crate) offset: usize,
}

pub(crate) type MatchResult<'s> = Result<Parsed<'s>, NoMatch>;

pub(crate) struct Matcher<'a, 's, T: Tracer> {
    grammar: &'a Grammar,
    text: &'s str,
    ctx: ParseContext,
    tracer: &'a mut T,
}

impl<'a, 's, T: Tracer> Matcher<'a, 's, T> {
    pub(crate) fn new(
        grammar: &'a Grammar,
        text: &'s str,
        ctx: ParseContext,
        tracer: &'a mut T,
    ) -> Self {
        Self {
            grammar,
            text,
            ctx,
            tracer,
        }
    }

    pub(crate) fn into_context(self) -> ParseContext {
        self.ctx
    }

    pub(crate) fn match_node(&mut self, id: NodeId, offset: usize) -> MatchResult<'s> {
        if !self.ctx.enter() {
            return Err(NoMatch { node: id, offset });
        }
        self.tracer.trace_enter(id, offset);

        let result = self.dispatch(id, offset);

        self.ctx.exit();
        match &result {
            Ok(parsed) => self.tracer.trace_match(id, offset, parsed.consumed),
            Err(_) => self.tracer.trace_no_match(id, offset),
        }
        result
    }

    fn dispatch(&mut self, id: NodeId, offset: usize) -> MatchResult<'s> {
        let grammar = self.grammar;
        let text = self.text;
        let consumed = match grammar.ensure_node(id) {
            Node::Char(c) => match_char(*c, text, offset),
            Node::Word(word) => match_word(word, text, offset),
            Node::Class(class) => match_class(class, text, offset),
            Node::Nothing => Some(0),
            Node::Until(until) => match_until(until, text, offset),
            Node::Seq(members) => return self.match_seq(id, members, offset),
            Node::Either(options) => return self.match_either(id, options, offset),
            Node::Repeat { inner, allow_none } => {
                return self.match_repeat(id, *inner, *allow_none, offset);
            }
            Node::Ref(rule) => return self.match_node(grammar.rule_root(*rule), offset),
        };

        let Some(consumed) = consumed else {
            return Err(NoMatch { node: id, offset });
        };
        Ok(Parsed {
            start: offset,
            consumed,
            node: ParseNode::Leaf {
                producer: id,
                text: &text[offset..offset + consumed],
            },
        })
    }

    /// Members back to back. No internal backtracking.
    fn match_seq(&mut self, id: NodeId, members: &[NodeId], offset: usize) -> MatchResult<'s> {
        let mut children = Vec::with_capacity(members.len());
        let mut pos = offset;
        for &member in members {
            let parsed = self.match_node(member, pos)?;
            pos += parsed.consumed;
            children.push(parsed.node);
        }
        Ok(composite(id, offset, pos - offset, children))
    }

    /// First option that consumes input wins. The first empty match is kept
    /// as a fallback while later options are tried.
    fn match_either(&mut self, id: NodeId, options: &[NodeId], offset: usize) -> MatchResult<'s> {
        if !self.ctx.claim(id, offset) {
            self.tracer.trace_cycle(id, offset);
            return Err(NoMatch { node: id, offset });
        }

        let mut found = None;
        let mut deferred = None;
        for &option in options {
            match self.match_node(option, offset) {
                Ok(parsed) if parsed.consumed > 0 => {
                    found = Some(parsed);
                    break;
                }
                Ok(parsed) => {
                    self.tracer.trace_epsilon_deferred(option, offset);
                    deferred.get_or_insert(parsed);
                }
                Err(_) => {}
            }
            if self.ctx.is_aborted() {
                break;
            }
        }

        self.ctx.release(id, offset);
        found.or(deferred).ok_or(NoMatch { node: id, offset })
    }

    /// Stops at the first failure or empty match; neither is kept.
    fn match_repeat(
        &mut self,
        id: NodeId,
        inner: NodeId,
        allow_none: bool,
        offset: usize,
    ) -> MatchResult<'s> {
        let mut children = Vec::new();
        let mut pos = offset;
        while let Ok(parsed) = self.match_node(inner, pos) {
            if parsed.consumed == 0 {
                break;
            }
            pos += parsed.consumed;
            children.push(parsed.node);
        }

        if children.is_empty() && !allow_none {
            return Err(NoMatch { node: id, offset });
        }
        Ok(composite(id, offset, pos - offset, children))
    }
}

fn composite<'s>(
    producer: NodeId,
    start: usize,
    consumed: usize,
    children: Vec<ParseNode<'s>>,
) -> Parsed<'s> {
    Parsed {
        start,
        consumed,
        node: ParseNode::Composite { producer, children },
    }
}
