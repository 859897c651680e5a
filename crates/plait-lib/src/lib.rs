//! Plait: backtracking parser combinators with lossless parse trees.
//!
//! Grammars are assembled from [`Pattern`] values, registered as named rules
//! on a [`GrammarBuilder`], and frozen into an immutable [`Grammar`]. Every
//! successful parse yields a tree that reproduces the consumed input exactly.
//!
//! # Example
//!
//! ```
//! use plait_lib::{Grammar, LETTERS, seq, word_class};
//!
//! let mut builder = Grammar::builder();
//! let ident = builder.rule("ident", word_class(&format!("{LETTERS}_")));
//! let var = builder.rule("var", seq!['$', ident]);
//! let grammar = builder.build().expect("grammar is well-formed");
//!
//! let parsed = grammar.parse(var, "$thing_two extra").expect("matches");
//! assert_eq!(parsed.consumed, 10);
//! assert_eq!(parsed.output(), "$thing_two");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;
pub mod grammar;
mod invariants;
pub mod pattern;
pub mod tree;

#[cfg(test)]
mod test_utils;
#[cfg(test)]
mod tests;

pub use engine::{
    DEFAULT_RECURSION_FUEL, NoopTracer, ParseConfig, ParseError, Parser, PrintTracer, Tracer,
    Verbosity, parse,
};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, NodeId, RuleId};
pub use pattern::{
    CharClass, LETTERS, NUMBERS, Pattern, SPACES, Until, either, literal, literal_char,
    literal_word, nothing, optional, repeat, repeat1, sequence, until, word_class,
};
pub use tree::{ParseNode, Parsed, Parts, TreePrinter, output, parts, pretty_print};

/// Errors from building a grammar or running it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
