//! Greedy word wrapping on ASCII spaces.

use crate::domain::AppError;

/// Wrap `text` into lines shorter than `max_width` characters.
///
/// Words are the pieces between single ASCII spaces, so a run of spaces yields
/// empty words and survives the wrap: joining the returned lines with `" "`
/// always gives back `text`. A word longer than the width gets a line of its own.
///
/// Text that is empty or all whitespace is returned unchanged as the only line.
///
/// # Errors
/// `AppError::MissingArgument` when `text` is absent.
pub fn word_wrap<'a>(
    text: impl Into<Option<&'a str>>,
    max_width: usize,
) -> Result<Vec<String>, AppError> {
    let text = text.into().ok_or(AppError::MissingArgument("text"))?;

    if text.trim().is_empty() {
        return Ok(vec![text.to_string()]);
    }

    let mut words = text.split(' ');
    let first = words.next().unwrap_or_default();

    let mut lines = Vec::new();
    let mut current = first.to_string();
    let mut current_len = first.chars().count();

    for word in words {
        let word_len = word.chars().count();

        if current_len + 1 + word_len >= max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        } else {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        }
    }

    lines.push(current);
    Ok(lines)
}
