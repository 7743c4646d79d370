//! Coercion of resolved values to the requested type.
//!
//! Responsibilities:
//! - Parse integers and floats from a leading numeric prefix.
//! - Turn any value into an array (list as-is, JSON array, or comma split).
//!
//! Does NOT handle:
//! - Truthiness or fallback substitution (see `accessor::getters`).
//! - Strict versus quiet error policy; failures here are plain `None`.
//!
//! Invariants:
//! - Numeric parsing ignores leading whitespace and trailing garbage:
//!   `"42px"` is 42, `"px42"` has no value.
//! - Array coercion never fails.

use std::fmt;

use serde_json::Value;

use crate::constants::ARRAY_SEPARATOR;
use crate::value::EnvValue;

/// The type a getter coerces to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Int,
    Float,
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::String => "string",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// Coerce to an integer. Floats truncate toward zero.
pub(crate) fn to_int(value: &EnvValue) -> Option<i64> {
    match value {
        EnvValue::Int(i) => Some(*i),
        EnvValue::Float(x) => truncate_float(*x),
        EnvValue::Null | EnvValue::Bool(_) => None,
        other => parse_int_prefix(&other.to_string()),
    }
}

/// Coerce to a float.
pub(crate) fn to_float(value: &EnvValue) -> Option<f64> {
    match value {
        EnvValue::Int(i) => Some(*i as f64),
        EnvValue::Float(x) => Some(*x),
        EnvValue::Null | EnvValue::Bool(_) => None,
        other => parse_float_prefix(&other.to_string()),
    }
}

/// Coerce to an array: lists pass through, JSON arrays are decoded, and
/// anything else is split on commas.
pub(crate) fn into_array(value: EnvValue) -> Vec<Value> {
    if let EnvValue::List(items) = value {
        return items;
    }

    let raw = value.to_string();
    match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(items)) => items,
        _ => raw
            .split(ARRAY_SEPARATOR)
            .map(|part| Value::String(part.to_string()))
            .collect(),
    }
}

fn truncate_float(x: f64) -> Option<i64> {
    let t = x.trunc();
    if t.is_finite() && t >= i64::MIN as f64 && t < i64::MAX as f64 {
        Some(t as i64)
    } else {
        None
    }
}

/// Parse the leading integer of `input`.
///
/// Accepts leading whitespace, an optional sign, and an optional `0x`/`0X`
/// prefix selecting base 16. Stops at the first non-digit. Returns `None`
/// when no digit is found or the value overflows `i64`.
pub(crate) fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, s) = split_sign(s);

    let (radix, digits) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        seen = true;
        let d = i64::from(d);
        value = value.checked_mul(i64::from(radix))?;
        value = if negative {
            value.checked_sub(d)?
        } else {
            value.checked_add(d)?
        };
    }

    seen.then_some(value)
}

/// Parse the leading float of `input`.
///
/// Accepts leading whitespace, an optional sign, `Infinity`, or a decimal
/// number with optional fraction and exponent. Returns `None` when no number
/// is found.
pub(crate) fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let (negative, rest) = split_sign(s);
    if rest.starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes = s.as_bytes();
    let mut end = s.len() - rest.len();
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+') | Some(b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse().ok()
}

fn split_sign(s: &str) -> (bool, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (false, rest)
    } else {
        (false, s)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
