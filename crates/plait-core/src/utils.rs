use std::borrow::Cow;

/// Render a rule name as a tree label.
///
/// Grammar authors name rules in whatever case their host code uses
/// (`php_block`, `COMMENT_LINE`, `string-literal`). Labels are PascalCase.
/// Names that are already PascalCase come back unchanged.
///
/// # Examples
/// ```
/// use plait_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("php_block"), "PhpBlock");
/// assert_eq!(to_pascal_case("COMMENT_LINE"), "CommentLine");
/// assert_eq!(to_pascal_case("PhpBlock"), "PhpBlock");
/// ```
pub fn to_pascal_case(name: &str) -> String {
    let is_separator = |c: char| matches!(c, '_' | '-' | '.' | ' ');

    let already_pascal = !name.contains(is_separator)
        && name.starts_with(|c: char| c.is_ascii_uppercase())
        && name.chars().any(|c| c.is_ascii_lowercase());
    if already_pascal {
        return name.to_string();
    }

    name.split(is_separator)
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Clip `text` to at most `max_chars` characters, marking the cut with `…`.
///
/// Borrows when no clipping is needed.
pub fn clip_text(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.char_indices().nth(max_chars).is_none() {
        return Cow::Borrowed(text);
    }
    let cut = text
        .char_indices()
        .nth(max_chars.saturating_sub(1))
        .map_or(0, |(i, _)| i);
    Cow::Owned(format!("{}…", &text[..cut]))
}
