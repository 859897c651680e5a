//! Errors reported by a top-level parse call.

/// Why a parse call produced no tree.
///
/// `NoMatch` is the ordinary outcome of input the grammar does not accept.
/// The fuel variants are fatal: they abort the whole call, including any
/// alternatives that were still pending.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The start rule did not match. `label` and `offset` name the
    /// combinator whose failure ended the attempt: the failing member of a
    /// sequence, otherwise the combinator itself.
    #[error("no match: `{label}` failed at offset {offset}")]
    NoMatch { label: String, offset: usize },

    #[error("start offset {start} is not a character boundary of the {len}-byte input")]
    StartOutOfBounds { start: usize, len: usize },

    /// Execution fuel exhausted (too many combinator invocations).
    #[error("parse execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (combinators nested too deeply).
    #[error("parse recursion limit exceeded")]
    RecursionLimitExceeded,
}
