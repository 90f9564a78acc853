//! Error types for decoding query values and validating digit strings.

use thiserror::Error;

/// Failure while URI-decoding a query value.
///
/// Offsets are byte positions into the raw (still encoded) input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodingError {
    /// `%` not followed by two hex digits.
    #[error("malformed percent escape at byte {offset}")]
    MalformedEscape { offset: usize },
    /// Escapes decode to bytes that are not valid UTF-8.
    #[error("percent escapes at byte {offset} do not form valid UTF-8")]
    InvalidUtf8 { offset: usize },
}

/// Input to the strict thousands formatter contained a non-digit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigitError {
    #[error("non-digit character {ch:?} at byte {offset}")]
    NonDigit { ch: char, offset: usize },
}
