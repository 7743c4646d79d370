//! Dynamic values held in the defaults table.
//!
//! Responsibilities:
//! - Represent any value a defaults document can carry.
//! - Define the loose truthiness used to decide whether a value counts as set.
//! - Render values to their string form for coercion.
//!
//! Invariants:
//! - Falsy values are `Null`, `false`, `0`, `0.0`, `NaN`, `""`, `"0"` and `[]`.
//!   A falsy value is treated like an unset one when a getter picks between
//!   the resolved value and its fallback.
//! - A defaults entry holding `"0"` still wins over the environment; only the
//!   getter treats it as unset.

use std::fmt;

use serde_json::{Map, Value};

use crate::constants::ARRAY_SEPARATOR;

/// A value resolved from the defaults table, the environment, or a fallback.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Object(Map<String, Value>),
}

impl EnvValue {
    /// Whether a getter treats the value as "set".
    ///
    /// Note that the string `"0"` is falsy, so an environment variable holding
    /// `0` falls through to the caller's fallback.
    pub fn is_truthy(&self) -> bool {
        match self {
            EnvValue::Null => false,
            EnvValue::Bool(b) => *b,
            EnvValue::Int(i) => *i != 0,
            EnvValue::Float(f) => *f != 0.0 && !f.is_nan(),
            EnvValue::Str(s) => !(s.is_empty() || s == "0"),
            EnvValue::List(items) => !items.is_empty(),
            EnvValue::Object(_) => true,
        }
    }

    /// Whether a defaults entry takes priority over the environment.
    ///
    /// Same as [`is_truthy`](Self::is_truthy) except that every non-empty
    /// string counts, including `"0"`.
    pub(crate) fn is_present_default(&self) -> bool {
        match self {
            EnvValue::Str(s) => !s.is_empty(),
            other => other.is_truthy(),
        }
    }

    /// Returns the value as a truthy `Option`, dropping falsy values.
    pub(crate) fn into_truthy(self) -> Option<Self> {
        self.is_truthy().then_some(self)
    }
}

impl fmt::Display for EnvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Null => f.write_str("null"),
            EnvValue::Bool(b) => write!(f, "{b}"),
            EnvValue::Int(i) => write!(f, "{i}"),
            EnvValue::Float(x) => f.write_str(&format_float(*x)),
            EnvValue::Str(s) => f.write_str(s),
            EnvValue::List(items) => f.write_str(&join_items(items)),
            EnvValue::Object(map) => write!(f, "{}", Value::Object(map.clone())),
        }
    }
}

fn format_float(x: f64) -> String {
    if x.is_infinite() {
        let sign = if x > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if x.is_nan() {
        "NaN".to_string()
    } else {
        x.to_string()
    }
}

/// Joins list items the way a list is flattened into a single string.
/// Nulls render as empty segments and nested lists are flattened in place.
fn join_items(items: &[Value]) -> String {
    items
        .iter()
        .map(|item| match item {
            Value::Null => String::new(),
            Value::Array(inner) => join_items(inner),
            other => EnvValue::from(other.clone()).to_string(),
        })
        .collect::<Vec<_>>()
        .join(&ARRAY_SEPARATOR.to_string())
}

impl From<Value> for EnvValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => EnvValue::Null,
            Value::Bool(b) => EnvValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => EnvValue::Int(i),
                None => EnvValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => EnvValue::Str(s),
            Value::Array(items) => EnvValue::List(items),
            Value::Object(map) => EnvValue::Object(map),
        }
    }
}

impl From<&str> for EnvValue {
    fn from(value: &str) -> Self {
        EnvValue::Str(value.to_string())
    }
}

impl From<String> for EnvValue {
    fn from(value: String) -> Self {
        EnvValue::Str(value)
    }
}

impl From<i64> for EnvValue {
    fn from(value: i64) -> Self {
        EnvValue::Int(value)
    }
}

impl From<f64> for EnvValue {
    fn from(value: f64) -> Self {
        EnvValue::Float(value)
    }
}

impl From<Vec<Value>> for EnvValue {
    fn from(value: Vec<Value>) -> Self {
        EnvValue::List(value)
    }
}
