//! Scalar type inference for raw string values.
//!
//! Interpretations are tried in a fixed order and the first match wins:
//! boolean true, boolean false, integer, float, then the untouched string.
//! Because the boolean keywords include `"1"` and `"0"`, those two strings
//! always infer as booleans and never as integers.
//!
//! Numbers follow plain base-10 spelling only. Looser numeric parsers also
//! take `_` digit grouping (`1_000`), surrounding whitespace, and the words
//! `inf`, `nan`, and `infinity`; none of those are numbers here, they stay text.

use envnest_core::Scalar;
use std::num::IntErrorKind;

const TRUE_WORDS: [&str; 4] = ["true", "1", "yes", "on"];
const FALSE_WORDS: [&str; 4] = ["false", "0", "no", "off"];

/// Infer a typed [`Scalar`] from `raw`. Never fails; no trimming is done.
pub fn infer_value(raw: &str) -> Scalar {
    if matches_any(raw, &TRUE_WORDS) {
        return Scalar::Boolean(true);
    }
    if matches_any(raw, &FALSE_WORDS) {
        return Scalar::Boolean(false);
    }
    match parse_integer(raw) {
        Integer::Exact(i) => return Scalar::Integer(i),
        // Too wide for i128: keep every digit rather than round to a float.
        Integer::TooWide => return Scalar::Text(raw.to_string()),
        Integer::NotInteger => {}
    }
    if let Some(f) = parse_float(raw) {
        return Scalar::Float(f);
    }
    Scalar::Text(raw.to_string())
}

fn matches_any(raw: &str, words: &[&str]) -> bool {
    words.iter().any(|w| raw.eq_ignore_ascii_case(w))
}

#[derive(Debug, PartialEq)]
enum Integer {
    Exact(i128),
    TooWide,
    NotInteger,
}

/// Optionally signed base-10 integer.
fn parse_integer(raw: &str) -> Integer {
    match raw.parse::<i128>() {
        Ok(i) => Integer::Exact(i),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Integer::TooWide
        }
        Err(_) => Integer::NotInteger,
    }
}

/// Decimal float: digits with an optional sign, point, and exponent.
/// Spellings like `inf` or `NaN` are left to the string fallback.
fn parse_float(raw: &str) -> Option<f64> {
    let decimal = raw.bytes().any(|b| b.is_ascii_digit())
        && raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !decimal {
        return None;
    }
    raw.parse::<f64>().ok()
}
