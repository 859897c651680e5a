//! Parse trees and their lossless reconstruction.
//!
//! A successful match yields a [`ParseNode`]: either a leaf holding the exact
//! slice of input it matched, or a composite holding its children in order.
//! Concatenating the leaves left to right reproduces the consumed input byte
//! for byte, so [`output`] needs nothing but the tree itself.

mod printer;

#[cfg(test)]
mod printer_tests;

pub use printer::TreePrinter;

use std::iter::FusedIterator;

use crate::grammar::{Grammar, NodeId};

/// Node of a parse tree. Leaf text borrows from the parsed input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseNode<'src> {
    Leaf {
        producer: NodeId,
        text: &'src str,
    },
    Composite {
        producer: NodeId,
        children: Vec<ParseNode<'src>>,
    },
}

impl<'src> ParseNode<'src> {
    /// Grammar node that produced this parse node.
    pub fn producer(&self) -> NodeId {
        match self {
            ParseNode::Leaf { producer, .. } | ParseNode::Composite { producer, .. } => *producer,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, ParseNode::Leaf { .. })
    }

    /// Matched text of a leaf; `None` for composites.
    pub fn text(&self) -> Option<&'src str> {
        match self {
            ParseNode::Leaf { text, .. } => Some(*text),
            ParseNode::Composite { .. } => None,
        }
    }

    /// Children of a composite; empty for leaves.
    pub fn children(&self) -> &[ParseNode<'src>] {
        match self {
            ParseNode::Leaf { .. } => &[],
            ParseNode::Composite { children, .. } => children,
        }
    }

    /// Byte length of the reconstructed text.
    pub fn len(&self) -> usize {
        self.parts().map(str::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.parts().next().is_none()
    }

    pub fn output(&self) -> String {
        output(self)
    }

    pub fn parts(&self) -> Parts<'_, 'src> {
        parts(self)
    }

    pub fn printer<'a>(&'a self, grammar: &'a Grammar) -> TreePrinter<'a, 'src> {
        TreePrinter::new(grammar, self)
    }
}

/// Result of a successful match.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Parsed<'src> {
    /// Offset the match started at.
    pub start: usize,
    /// Bytes consumed from `start`.
    pub consumed: usize,
    pub node: ParseNode<'src>,
}

impl<'src> Parsed<'src> {
    pub fn output(&self) -> String {
        output(&self.node)
    }

    pub fn parts(&self) -> Parts<'_, 'src> {
        parts(&self.node)
    }

    /// Printer whose spans are absolute offsets into the parsed input.
    pub fn printer<'a>(&'a self, grammar: &'a Grammar) -> TreePrinter<'a, 'src> {
        TreePrinter::new(grammar, &self.node).with_base_offset(self.start)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Regenerate the source text a tree was parsed from.
pub fn output(node: &ParseNode<'_>) -> String {
    parts(node).collect()
}

/// Depth-first, left-to-right leaf texts, skipping empty leaves.
pub fn parts<'a, 'src>(node: &'a ParseNode<'src>) -> Parts<'a, 'src> {
    Parts { stack: vec![node] }
}

/// Render a tree as an indented listing.
pub fn pretty_print(grammar: &Grammar, node: &ParseNode<'_>) -> String {
    TreePrinter::new(grammar, node).dump()
}

/// Lazy leaf-text iterator; see [`parts`].
#[derive(Debug, Clone)]
pub struct Parts<'a, 'src> {
    stack: Vec<&'a ParseNode<'src>>,
}

impl<'src> Iterator for Parts<'_, 'src> {
    type Item = &'src str;

    fn next(&mut self) -> Option<&'src str> {
        while let Some(node) = self.stack.pop() {
            match node {
                ParseNode::Leaf { text, .. } if !text.is_empty() => return Some(*text),
                ParseNode::Leaf { .. } => {}
                ParseNode::Composite { children, .. } => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}

impl FusedIterator for Parts<'_, '_> {}
