//! Tracing infrastructure for debugging grammar execution.
//!
//! The matcher is generic over [`Tracer`]. With [`NoopTracer`] every hook is
//! an empty `#[inline(always)]` function and the calls compile away, so plain
//! parse calls pay nothing for instrumentation.
//!
//! Tracing-only state (the current nesting depth for indentation) lives in
//! the tracer, not in the parse context.

use plait_core::Colors;
use plait_core::utils::clip_text;

use crate::grammar::{Grammar, NodeId};

/// Longest matched text shown on a trace line.
const TEXT_PREVIEW_CHARS: usize = 24;

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Matches, failures and cycle-guard rejections.
    #[default]
    Default,
    /// Also entries into every combinator and deferred empty matches.
    Verbose,
}

/// Hooks called by the matcher.
///
/// Every `trace_enter` is paired with exactly one `trace_match` or
/// `trace_no_match` for the same node and offset, unless the call is aborted
/// by fuel exhaustion.
pub trait Tracer {
    /// Before a combinator is tried.
    fn trace_enter(&mut self, node: NodeId, offset: usize);

    /// After a combinator matched `consumed` bytes.
    fn trace_match(&mut self, node: NodeId, offset: usize, consumed: usize);

    /// After a combinator failed to match.
    fn trace_no_match(&mut self, node: NodeId, offset: usize);

    /// The cycle guard rejected re-entering an alternation.
    fn trace_cycle(&mut self, node: NodeId, offset: usize);

    /// An option matched without consuming input and was set aside while
    /// later options are tried.
    fn trace_epsilon_deferred(&mut self, node: NodeId, offset: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _node: NodeId, _offset: usize) {}

    #[inline(always)]
    fn trace_match(&mut self, _node: NodeId, _offset: usize, _consumed: usize) {}

    #[inline(always)]
    fn trace_no_match(&mut self, _node: NodeId, _offset: usize) {}

    #[inline(always)]
    fn trace_cycle(&mut self, _node: NodeId, _offset: usize) {}

    #[inline(always)]
    fn trace_epsilon_deferred(&mut self, _node: NodeId, _offset: usize) {}
}

/// Tracer that collects an indented execution log.
///
/// Line markers: `>` enter, `+` match, `-` no match, `!` cycle rejected,
/// `~` empty match deferred.
pub struct PrintTracer<'a, 's> {
    grammar: &'a Grammar,
    text: &'s str,
    verbosity: Verbosity,
    colors: Colors,
    depth: usize,
    lines: Vec<String>,
}

impl<'a, 's> PrintTracer<'a, 's> {
    pub fn new(grammar: &'a Grammar, text: &'s str, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            grammar,
            text,
            verbosity,
            colors,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    fn push(&mut self, marker: &str, node: NodeId, offset: usize, suffix: &str) {
        let c = &self.colors;
        let indent = "  ".repeat(self.depth);
        let label = c.paint(c.blue, self.grammar.label(node));
        let at = c.paint(c.dim, &format!("@{offset}"));
        let line = format!("{indent}{marker} {label} {at}{suffix}");
        self.lines.push(line);
    }

    fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}

impl Tracer for PrintTracer<'_, '_> {
    fn trace_enter(&mut self, node: NodeId, offset: usize) {
        if self.is_verbose() {
            self.push(">", node, offset, "");
        }
        self.depth += 1;
    }

    fn trace_match(&mut self, node: NodeId, offset: usize, consumed: usize) {
        self.depth = self.depth.saturating_sub(1);
        let matched = &self.text[offset..offset + consumed];
        let preview = format!("{:?}", clip_text(matched, TEXT_PREVIEW_CHARS).as_ref());
        let suffix = format!(" {}", self.colors.paint(self.colors.green, &preview));
        self.push("+", node, offset, &suffix);
    }

    fn trace_no_match(&mut self, node: NodeId, offset: usize) {
        self.depth = self.depth.saturating_sub(1);
        let marker = self.colors.paint(self.colors.red, "-");
        self.push(&marker, node, offset, "");
    }

    fn trace_cycle(&mut self, node: NodeId, offset: usize) {
        let marker = self.colors.paint(self.colors.red, "!");
        self.push(&marker, node, offset, " cycle");
    }

    fn trace_epsilon_deferred(&mut self, node: NodeId, offset: usize) {
        if self.is_verbose() {
            self.push("~", node, offset, " deferred");
        }
    }
}
