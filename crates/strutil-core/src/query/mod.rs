//! Query-parameter extraction.
//!
//! Looks up a single parameter in the query string of a URL and optionally
//! URI-decodes it. No URL validation is done: everything after the first `?`
//! is the query string, and missing keys or query strings yield `""`.

mod decode;
mod params;

pub use decode::decode_uri;
pub use params::{parse_params, parse_query, query_string, ParamMap};

use crate::error::DecodingError;

/// Options for [`extract_with`]. The default returns values undecoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// URI-decode the value before returning it.
    pub decode: bool,
}

impl ExtractOptions {
    /// Options that URI-decode the value.
    pub fn decoded() -> Self {
        Self { decode: true }
    }
}

/// Raw value of `key` in the query string of `url`, or `""` if absent.
///
/// # Examples
///
/// - `extract("http://h/p?projectId=abc", "projectId")` → `"abc"`
/// - `extract("http://h/p", "anything")` → `""`
pub fn extract(url: &str, key: &str) -> String {
    lookup(url, key).to_string()
}

/// Like [`extract`], decoding the value when `options.decode` is set.
///
/// Only the decode step can fail; a value with malformed escapes is reported
/// as a [`DecodingError`] instead of being returned raw.
pub fn extract_with(
    url: &str,
    key: &str,
    options: &ExtractOptions,
) -> Result<String, DecodingError> {
    let raw = lookup(url, key);
    if !options.decode {
        return Ok(raw.to_string());
    }
    match decode_uri(raw) {
        Ok(value) => Ok(value.into_owned()),
        Err(err) => {
            tracing::debug!("decoding {}={} failed: {}", key, raw, err);
            Err(err)
        }
    }
}

fn lookup<'a>(url: &'a str, key: &str) -> &'a str {
    let Some(query) = query_string(url) else {
        tracing::trace!("no query string in {}", url);
        return "";
    };
    parse_query(query).get(key).copied().unwrap_or("")
}
