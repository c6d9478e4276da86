//! Small utility helpers for URL encoding and tolerant JSON extraction.
//!
//! The functions in this module are intentionally lightweight and
//! dependency-free to keep hot paths fast. They are used by the URL
//! synchronizer and the catalog fetch boundary.

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URL query values per RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) pass through.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes become `%` followed by two uppercase hex digits.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Decode a percent-encoded URL query component.
///
/// Inputs:
/// - `input`: Possibly percent-encoded string; `+` is treated as a space.
///
/// Output:
/// - Returns the decoded string; malformed escapes are kept verbatim.
#[must_use]
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                if let (Some(hi), Some(lo)) = (
                    bytes.get(i + 1).copied().and_then(hex_val),
                    bytes.get(i + 2).copied().and_then(hex_val),
                ) {
                    out.push(hi * 16 + lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Map an ASCII hex digit to its numeric value.
fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// What: Extract a string value from a JSON object by key, defaulting to empty.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string otherwise.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Extract an unsigned integer by key; missing or mistyped fields yield 0.
#[must_use]
pub fn u64_of(v: &Value, key: &str) -> u64 {
    v.get(key).and_then(Value::as_u64).unwrap_or_default()
}

/// Extract a float by key; accepts integers too. Missing fields yield 0.0.
#[must_use]
pub fn f64_of(v: &Value, key: &str) -> f64 {
    v.get(key).and_then(Value::as_f64).unwrap_or_default()
}

/// What: Extract a creation timestamp (epoch seconds) by trying keys in order.
///
/// Inputs:
/// - `v`: JSON object carrying the timestamp.
/// - `keys`: Candidate keys (e.g. `createdAt`, `created_at`).
///
/// Output:
/// - Epoch seconds; 0 when no key parses.
///
/// Details:
/// - Accepts raw epoch numbers and RFC 3339 strings.
#[must_use]
pub fn ts_of(v: &Value, keys: &[&str]) -> i64 {
    for k in keys {
        let Some(val) = v.get(*k) else { continue };
        if let Some(n) = val.as_i64() {
            return n;
        }
        if let Some(text) = val.as_str()
            && let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text)
        {
            return dt.timestamp();
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Percent-encoding escapes reserved bytes and round-trips with decode.
    ///
    /// - Input: A query value with spaces and punctuation
    /// - Output: Encoded form has no raw spaces; decoding restores the original
    fn percent_encode_decode_round_trip() {
        let raw = "5 mukhi & mala";
        let enc = percent_encode(raw);
        assert_eq!(enc, "5%20mukhi%20%26%20mala");
        assert_eq!(percent_decode(&enc), raw);
    }

    #[test]
    /// What: Decoding treats `+` as space and keeps malformed escapes verbatim.
    ///
    /// - Input: Plus-separated words and a dangling percent
    /// - Output: Spaces restored; `%` kept as-is
    fn percent_decode_plus_and_malformed() {
        assert_eq!(percent_decode("5+mukhi"), "5 mukhi");
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("%zz"), "%zz");
    }

    #[test]
    /// What: Tolerant extractors default missing or mistyped fields.
    ///
    /// - Input: JSON object with a string price and no stock
    /// - Output: Numeric defaults of 0 instead of a parse failure
    fn extractors_default_on_missing() {
        let v: Value = serde_json::json!({"title": "bead", "price": "oops"});
        assert_eq!(s(&v, "title"), "bead");
        assert!((f64_of(&v, "price") - 0.0).abs() < f64::EPSILON);
        assert_eq!(u64_of(&v, "stock"), 0);
    }

    #[test]
    /// What: Timestamp extraction accepts epoch numbers and RFC 3339 strings.
    ///
    /// - Input: One object with epoch seconds, one with an ISO string
    /// - Output: Both map to the same epoch value
    fn ts_of_accepts_epoch_and_rfc3339() {
        let a: Value = serde_json::json!({"createdAt": 1_700_000_000});
        let b: Value = serde_json::json!({"createdAt": "2023-11-14T22:13:20Z"});
        assert_eq!(ts_of(&a, &["createdAt"]), 1_700_000_000);
        assert_eq!(ts_of(&b, &["createdAt"]), 1_700_000_000);
        assert_eq!(ts_of(&a, &["missing"]), 0);
    }
}
