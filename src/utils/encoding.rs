//! Percent-encoding for values that end up in a path segment or a query string.
//!
//! Spaces are always written as `%20`; `+` is never produced, so backends that
//! decode with RFC 3986 rules and those that decode form data read the same value.

use url::form_urlencoded::byte_serialize;

/// Encode a single query value or path segment.
///
/// An empty input yields an empty output. Input that already contains `%`
/// escapes is encoded again (`%` becomes `%25`); callers pass raw values.
pub fn encode_component(value: &str) -> String {
    // byte_serialize writes a space as '+', and a literal '+' as %2B,
    // so every remaining '+' is a space.
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Encode an identifier before it is interpolated into a path.
pub fn encode_segment(value: impl std::fmt::Display) -> String {
    encode_component(&value.to_string())
}

/// Render `key=value` pairs joined with `&`. Empty values stay as `key=`.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}
