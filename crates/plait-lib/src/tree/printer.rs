use std::fmt::Write;

use plait_core::Colors;

use super::ParseNode;
use crate::grammar::Grammar;

/// Indented listing of a parse tree.
///
/// Composites print their label and then their children one level deeper;
/// leaves print their label and Debug-quoted text:
///
/// ```text
/// Var
///   Char "$"
///   Ident "thing_two"
/// ```
pub struct TreePrinter<'a, 'src> {
    grammar: &'a Grammar,
    node: &'a ParseNode<'src>,
    spans: bool,
    base_offset: usize,
    colors: Colors,
}

impl<'a, 'src> TreePrinter<'a, 'src> {
    pub fn new(grammar: &'a Grammar, node: &'a ParseNode<'src>) -> Self {
        Self {
            grammar,
            node,
            spans: false,
            base_offset: 0,
            colors: Colors::OFF,
        }
    }

    /// Append `[start..end]` byte ranges to every line.
    pub fn with_spans(mut self, value: bool) -> Self {
        self.spans = value;
        self
    }

    /// Offset of the tree's first byte in the parsed input.
    pub fn with_base_offset(mut self, offset: usize) -> Self {
        self.base_offset = offset;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        self.format_node(self.node, 0, self.base_offset, w)
    }

    fn format_node(
        &self,
        node: &ParseNode<'src>,
        indent: usize,
        start: usize,
        w: &mut impl Write,
    ) -> std::fmt::Result {
        let c = &self.colors;
        let prefix = "  ".repeat(indent);
        let label = c.paint(c.blue, self.grammar.label(node.producer()));
        let span = self.span_str(start, start + node.len());

        match node {
            ParseNode::Leaf { text, .. } => {
                let quoted = format!("{:?}", text);
                writeln!(w, "{prefix}{label}{span} {}", c.paint(c.green, &quoted))
            }
            ParseNode::Composite { children, .. } => {
                writeln!(w, "{prefix}{label}{span}")?;
                let mut offset = start;
                for child in children {
                    self.format_node(child, indent + 1, offset, w)?;
                    offset += child.len();
                }
                Ok(())
            }
        }
    }

    fn span_str(&self, start: usize, end: usize) -> String {
        if !self.spans {
            return String::new();
        }
        let c = &self.colors;
        format!(" {}", c.paint(c.dim, &format!("[{start}..{end}]")))
    }
}
