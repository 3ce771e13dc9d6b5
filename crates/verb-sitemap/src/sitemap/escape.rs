//! Percent-encoding helpers for query values and path segments.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes left as-is in query values, besides the space mapped to `+`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b' ');

/// Escape a query-string value: spaces become `+`, everything outside
/// `[A-Za-z0-9_.~-]` is percent-encoded as UTF-8 bytes.
pub fn query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE)
        .to_string()
        .replace(' ', "+")
}

/// Escape a single path segment, spaces included, as `%XX`.
pub fn path_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}
