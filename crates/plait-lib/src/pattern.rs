//! Combinator values and the construction API.
//!
//! A `Pattern` is a plain tree describing what to match. Patterns are
//! normalized once, here, at construction time: string arguments are promoted
//! to `Char`/`Word` literals and nested alternations are flattened. Rules
//! refer to each other (and to themselves) through `RuleId` handles, so a
//! pattern never needs to be mutated after it has been handed out.
//!
//! Patterns become matchable once registered with a
//! [`GrammarBuilder`](crate::GrammarBuilder) and frozen into a
//! [`Grammar`](crate::Grammar).

use std::ops::BitOr;

use crate::grammar::RuleId;

pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "1234567890";
pub const SPACES: &str = " \t";

/// A composable matcher description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// One specific character.
    Char(char),
    /// One specific word, matched exactly.
    Word(String),
    /// Greedy run (length ≥ 1) of characters from a set.
    Class(CharClass),
    /// Always matches, consuming nothing.
    Nothing,
    /// Scan forward through a terminator.
    Until(Until),
    /// Members matched back to back.
    Seq(Vec<Pattern>),
    /// First option that matches wins; empty matches are deferred.
    Either(Vec<Pattern>),
    /// Zero or more (or one or more) applications of `inner`.
    Repeat { inner: Box<Pattern>, allow_none: bool },
    /// Indirect reference to a named rule.
    Ref(RuleId),
}

impl Pattern {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Pattern::Nothing)
    }
}

/// Set of characters accepted by a [`Pattern::Class`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    /// Sorted, deduplicated.
    chars: Vec<char>,
}

impl CharClass {
    pub fn new(chars: &str) -> Self {
        let mut chars: Vec<char> = chars.chars().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.binary_search(&c).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// Delimited scan: everything up to and including `ending`.
///
/// An occurrence of `ending` directly preceded by the escape character does
/// not terminate the scan. When the input runs out first, the scan consumes
/// the remainder of the input, unless [`Until::fail_on_eof`] was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Until {
    pub(crate) ending: String,
    pub(crate) escape: Option<char>,
    pub(crate) fail_on_eof: bool,
}

impl Until {
    pub fn new(ending: impl Into<String>) -> Self {
        Self {
            ending: ending.into(),
            escape: None,
            fail_on_eof: false,
        }
    }

    pub fn escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Treat a missing terminator as a failed match.
    pub fn fail_on_eof(mut self) -> Self {
        self.fail_on_eof = true;
        self
    }

    pub fn escape_char(&self) -> Option<char> {
        self.escape
    }

    pub fn fails_on_eof(&self) -> bool {
        self.fail_on_eof
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn literal_char(c: char) -> Pattern {
    Pattern::Char(c)
}

pub fn literal_word(word: impl Into<String>) -> Pattern {
    Pattern::Word(word.into())
}

/// Promote a string: one character becomes `Char`, anything longer `Word`.
pub fn literal(text: &str) -> Pattern {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Pattern::Char(c),
        _ => Pattern::Word(text.to_string()),
    }
}

pub fn word_class(chars: &str) -> Pattern {
    Pattern::Class(CharClass::new(chars))
}

pub fn nothing() -> Pattern {
    Pattern::Nothing
}

/// Scan up to and including `ending`. See [`Until`] for the end-of-input rule.
pub fn until(ending: impl Into<String>) -> Until {
    Until::new(ending)
}

pub fn sequence<I, P>(members: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    Pattern::Seq(members.into_iter().map(Into::into).collect())
}

/// Alternation over `options`, tried in order.
///
/// Nested alternations are spliced into this one. `Nothing` options that come
/// from a nested alternation are moved to the end of the list.
pub fn either<I, P>(options: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    Pattern::Either(flatten_options(options))
}

pub(crate) fn flatten_options<I, P>(options: I) -> Vec<Pattern>
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    let mut flat = Vec::new();
    let mut hoisted = Vec::new();
    for option in options {
        match option.into() {
            Pattern::Either(nested) => {
                for inner in nested {
                    if inner.is_nothing() {
                        hoisted.push(inner);
                    } else {
                        flat.push(inner);
                    }
                }
            }
            other => flat.push(other),
        }
    }
    flat.extend(hoisted);
    flat
}

/// Zero or more repetitions.
pub fn repeat(inner: impl Into<Pattern>) -> Pattern {
    Pattern::Repeat {
        inner: Box::new(inner.into()),
        allow_none: true,
    }
}

/// One or more repetitions.
pub fn repeat1(inner: impl Into<Pattern>) -> Pattern {
    Pattern::Repeat {
        inner: Box::new(inner.into()),
        allow_none: false,
    }
}

/// `either(options..., nothing())`.
pub fn optional<I, P>(options: I) -> Pattern
where
    I: IntoIterator<Item = P>,
    P: Into<Pattern>,
{
    let mut options: Vec<Pattern> = options.into_iter().map(Into::into).collect();
    options.push(Pattern::Nothing);
    either(options)
}

// ============================================================================
// Conversions
// ============================================================================

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        literal(text)
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        literal(&text)
    }
}

impl From<char> for Pattern {
    fn from(c: char) -> Self {
        Pattern::Char(c)
    }
}

impl From<RuleId> for Pattern {
    fn from(rule: RuleId) -> Self {
        Pattern::Ref(rule)
    }
}

impl From<Until> for Pattern {
    fn from(until: Until) -> Self {
        Pattern::Until(until)
    }
}

impl From<CharClass> for Pattern {
    fn from(class: CharClass) -> Self {
        Pattern::Class(class)
    }
}

impl From<&Pattern> for Pattern {
    fn from(pattern: &Pattern) -> Self {
        pattern.clone()
    }
}

impl<R: Into<Pattern>> BitOr<R> for Pattern {
    type Output = Pattern;

    fn bitor(self, rhs: R) -> Pattern {
        either([self, rhs.into()])
    }
}

impl<R: Into<Pattern>> BitOr<R> for RuleId {
    type Output = Pattern;

    fn bitor(self, rhs: R) -> Pattern {
        either([Pattern::Ref(self), rhs.into()])
    }
}

// ============================================================================
// Macros
// ============================================================================

/// Sequence of heterogeneous parts: `seq!['$', ident, "->", member]`.
#[macro_export]
macro_rules! seq {
    ($($part:expr),* $(,)?) => {
        $crate::Pattern::Seq(::std::vec![$($crate::Pattern::from($part)),*])
    };
}

/// Alternation of heterogeneous options: `either!["===", "==", '=']`.
#[macro_export]
macro_rules! either {
    ($($option:expr),* $(,)?) => {
        $crate::pattern::either::<::std::vec::Vec<$crate::Pattern>, $crate::Pattern>(
            ::std::vec![$($crate::Pattern::from($option)),*]
        )
    };
}

/// Alternation with a trailing `Nothing`: `optional!['-']`.
#[macro_export]
macro_rules! optional {
    ($($option:expr),* $(,)?) => {
        $crate::pattern::optional::<::std::vec::Vec<$crate::Pattern>, $crate::Pattern>(
            ::std::vec![$($crate::Pattern::from($option)),*]
        )
    };
}
