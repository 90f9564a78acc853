//! URI percent-decoding for query values.
//!
//! Follows `decodeURI` rules: `+` stays a plus sign, and an escape that
//! decodes to a reserved URI character is kept in its escaped form.

use std::borrow::Cow;

use crate::error::DecodingError;

/// Characters whose escapes survive decoding untouched.
const RESERVED: &[u8] = b";/?:@&=+$,#";

/// Percent-decode `input`, failing on malformed escapes or invalid UTF-8.
///
/// Returns the input borrowed when it contains no `%`.
pub fn decode_uri(input: &str) -> Result<Cow<'_, str>, DecodingError> {
    if !input.contains('%') {
        return Ok(Cow::Borrowed(input));
    }

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(rel) = input[pos..].find('%') else {
            out.push_str(&input[pos..]);
            break;
        };
        out.push_str(&input[pos..pos + rel]);
        let start = pos + rel;

        let lead = escaped_byte(bytes, start)?;
        if lead.is_ascii() {
            if RESERVED.contains(&lead) {
                out.push_str(&input[start..start + 3]);
            } else {
                out.push(lead as char);
            }
            pos = start + 3;
            continue;
        }

        let width = utf8_width(lead).ok_or(DecodingError::InvalidUtf8 { offset: start })?;
        let mut buf = [0u8; 4];
        buf[0] = lead;
        let mut cursor = start + 3;
        for slot in buf.iter_mut().take(width).skip(1) {
            let b = escaped_byte(bytes, cursor)?;
            if b & 0xC0 != 0x80 {
                return Err(DecodingError::InvalidUtf8 { offset: start });
            }
            *slot = b;
            cursor += 3;
        }

        // Rejects overlong forms and surrogates the width check lets through.
        let decoded = std::str::from_utf8(&buf[..width])
            .map_err(|_| DecodingError::InvalidUtf8 { offset: start })?;
        out.push_str(decoded);
        pos = cursor;
    }

    Ok(Cow::Owned(out))
}

/// Reads the `%XX` escape starting at `at`.
fn escaped_byte(bytes: &[u8], at: usize) -> Result<u8, DecodingError> {
    let malformed = DecodingError::MalformedEscape { offset: at };
    if bytes.get(at) != Some(&b'%') {
        return Err(malformed);
    }
    let high = bytes.get(at + 1).copied().and_then(hex_digit);
    let low = bytes.get(at + 2).copied().and_then(hex_digit);
    match (high, low) {
        (Some(high), Some(low)) => Ok(high << 4 | low),
        _ => Err(malformed),
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}
