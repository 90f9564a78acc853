//! Thousands grouping for digit strings.
//!
//! Works on characters rather than parsed numbers, so inputs of any length
//! are grouped without overflow or precision loss.

use crate::error::DigitError;

/// Separator used by [`format`].
pub const DEFAULT_SEPARATOR: char = ',';

const GROUP_SIZE: usize = 3;

/// Inserts `,` every three characters counting from the right.
///
/// Non-digit characters are not rejected; they are grouped like any other
/// character. Use [`format_checked`] to reject them.
///
/// # Examples
///
/// - `format("100000")` → `"100,000"`
/// - `format("12")` → `"12"`
pub fn format(digits: &str) -> String {
    format_with(digits, DEFAULT_SEPARATOR)
}

/// [`format`] with a caller-chosen separator.
pub fn format_with(digits: &str, separator: char) -> String {
    let count = digits.chars().count();
    let mut out = String::with_capacity(digits.len() + count / GROUP_SIZE);
    for (i, c) in digits.chars().enumerate() {
        // No separator ahead of the leftmost group.
        if i > 0 && (count - i) % GROUP_SIZE == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// [`format`], but only for strings made of ASCII digits.
pub fn format_checked(digits: &str) -> Result<String, DigitError> {
    if let Some((offset, ch)) = digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        return Err(DigitError::NonDigit { ch, offset });
    }
    Ok(format(digits))
}

/// Removes every `separator` from `formatted`.
pub fn strip_separators(formatted: &str, separator: char) -> String {
    formatted.chars().filter(|&c| c != separator).collect()
}
