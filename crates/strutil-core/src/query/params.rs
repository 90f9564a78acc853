//! Splitting a URL's query string into a parameter mapping.

use std::collections::BTreeMap;

/// Parameter name to raw (still encoded) value. Keys iterate sorted.
pub type ParamMap<'a> = BTreeMap<&'a str, &'a str>;

/// Text after the first `?`, or `None` when the URL has no query string.
///
/// Fragments are not stripped, so `http://h/#/route?a=1` yields `a=1`.
pub fn query_string(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, query)| query)
}

/// Splits `query` on `&`, then each segment on its first `=`.
///
/// A segment without `=` maps to an empty value, so an empty segment is the
/// name `""` with value `""`. A repeated name keeps the value of its last
/// occurrence.
pub fn parse_query(query: &str) -> ParamMap<'_> {
    let mut params = ParamMap::new();
    for segment in query.split('&') {
        let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
        params.insert(name, value);
    }
    params
}

/// Parameter mapping of `url`; empty when there is no query string.
pub fn parse_params(url: &str) -> ParamMap<'_> {
    let params = query_string(url).map(parse_query).unwrap_or_default();
    tracing::trace!("parsed {} query parameters", params.len());
    params
}
