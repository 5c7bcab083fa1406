//! Numeric canonicalization for attribute values.
//!
//! Two renderers rarely agree on float precision (`10.00001` vs `10.0`), so every numeric literal
//! inside an attribute value is rounded to 4 decimals and stripped of trailing zeros before it is
//! used as a fingerprint key.

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Decimals kept for every numeric literal.
pub const NUMERIC_DECIMALS: usize = 4;

fn re_num() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| Regex::new(r"-?\d+\.\d+|-?\d+").unwrap())
}

/// Parses a trimmed numeric literal, returning `None` for anything that is not a finite `f64`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats `v` with [`NUMERIC_DECIMALS`] decimals, then drops trailing zeros and a dangling `.`.
pub fn format_number(v: f64) -> String {
    let mut out = format!("{:.*}", NUMERIC_DECIMALS, v);
    if out.contains('.') {
        while out.ends_with('0') {
            out.pop();
        }
        if out.ends_with('.') {
            out.pop();
        }
    }
    out
}

fn normalize_pass(s: &str) -> Cow<'_, str> {
    re_num().replace_all(s, |caps: &regex::Captures<'_>| {
        let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        match parse_number(raw) {
            Some(v) => format_number(v),
            None => raw.to_string(),
        }
    })
}

/// Canonicalizes every integer/decimal literal embedded in `value`.
///
/// Non-numeric text (including whitespace, separators and units) is left untouched. A literal that
/// cannot be represented as a finite `f64` is kept verbatim.
pub fn normalize_attr_value(value: &str) -> String {
    let mut current = value.to_string();
    // Collapsing `1.00001` to `1` can glue it onto a following `.5` run, forming a new literal.
    loop {
        let next = normalize_pass(&current).into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}
