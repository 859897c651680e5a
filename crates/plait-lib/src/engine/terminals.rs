//! Terminal matchers.
//!
//! Each returns the number of bytes consumed at `offset`, or `None` when the
//! input does not match there. `offset` is always a character boundary.

use crate::pattern::{CharClass, Until};

pub(crate) fn match_char(c: char, text: &str, offset: usize) -> Option<usize> {
    text[offset..].starts_with(c).then_some(c.len_utf8())
}

/// A word cut short by end-of-input is a mismatch.
pub(crate) fn match_word(word: &str, text: &str, offset: usize) -> Option<usize> {
    text[offset..].starts_with(word).then_some(word.len())
}

/// Longest run of class members; at least one character.
pub(crate) fn match_class(class: &CharClass, text: &str, offset: usize) -> Option<usize> {
    let consumed: usize = text[offset..]
        .chars()
        .take_while(|&c| class.contains(c))
        .map(char::len_utf8)
        .sum();
    (consumed > 0).then_some(consumed)
}

/// Everything through the first unescaped `ending`.
///
/// The escape check looks at the character right before the candidate
/// terminator, which may lie before `offset` (e.g. an opening quote).
pub(crate) fn match_until(until: &Until, text: &str, offset: usize) -> Option<usize> {
    let rest = &text[offset..];
    let ending = until.ending.as_str();
    let step = ending.chars().next().map_or(1, char::len_utf8);

    let mut from = 0;
    while let Some(found) = rest[from..].find(ending) {
        let at = from + found;
        let escaped = until
            .escape
            .is_some_and(|escape| text[..offset + at].chars().next_back() == Some(escape));
        if !escaped {
            return Some(at + ending.len());
        }
        from = at + step;
    }

    if until.fail_on_eof {
        None
    } else {
        Some(rest.len())
    }
}
