//! Typed getters.
//!
//! Each getter resolves the name, substitutes the fallback when the resolved
//! value is absent or falsy, and coerces the result. A value that is still
//! absent or falsy after substitution is `Ok(None)`, not an error.

use serde_json::Value;

use super::EnvAccessor;
use crate::coerce::{ValueKind, into_array, to_float, to_int};
use crate::error::EnvError;
use crate::value::EnvValue;

impl<P> EnvAccessor<P> {
    /// Read `name` as a string. Never fails on conversion.
    pub fn get_string(
        &self,
        name: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, EnvError> {
        self.get_typed(name, default.map(EnvValue::from), ValueKind::String, |v| {
            Some(v.to_string())
        })
    }

    /// Read `name` as an integer.
    ///
    /// The leading integer of the value is used, so `"8080px"` reads as 8080
    /// and `"0x1F"` as 31. Note that `"0"` counts as unset and yields the
    /// fallback. Integers outside the `i64` range are not rounded; they fail
    /// like any other unparseable value.
    ///
    /// # Errors
    ///
    /// `EnvError::TypeConversion` when the value has no leading integer or
    /// overflows `i64` (strict mode only).
    pub fn get_int(&self, name: &str, default: Option<i64>) -> Result<Option<i64>, EnvError> {
        self.get_typed(name, default.map(EnvValue::from), ValueKind::Int, to_int)
    }

    /// Same as [`get_int`](Self::get_int), returning the integer as an `EnvValue`.
    pub fn get_int_or_any(
        &self,
        name: &str,
        default: Option<i64>,
    ) -> Result<Option<EnvValue>, EnvError> {
        Ok(self.get_int(name, default)?.map(EnvValue::Int))
    }

    /// Read `name` as a float.
    ///
    /// # Errors
    ///
    /// `EnvError::TypeConversion` when the value has no leading number
    /// (strict mode only).
    pub fn get_float(&self, name: &str, default: Option<f64>) -> Result<Option<f64>, EnvError> {
        self.get_typed(name, default.map(EnvValue::from), ValueKind::Float, to_float)
    }

    /// Read `name` as an array.
    ///
    /// Lists from the defaults table are returned as-is. Strings holding a
    /// JSON array are decoded; any other string is split on `,`.
    pub fn get_array(
        &self,
        name: &str,
        default: Option<Vec<Value>>,
    ) -> Result<Option<Vec<Value>>, EnvError> {
        self.get_typed(name, default.map(EnvValue::from), ValueKind::Array, |v| {
            Some(into_array(v.clone()))
        })
    }

    fn get_typed<T>(
        &self,
        name: &str,
        fallback: Option<EnvValue>,
        kind: ValueKind,
        convert: impl FnOnce(&EnvValue) -> Option<T>,
    ) -> Result<Option<T>, EnvError> {
        let key = self.effective_key(name);

        let value = match self.resolve_key(&key).and_then(EnvValue::into_truthy) {
            Some(value) => value,
            None => match fallback.and_then(EnvValue::into_truthy) {
                Some(value) => {
                    tracing::debug!(key = %key, source = "fallback", "Resolved variable");
                    value
                }
                None => {
                    tracing::debug!(key = %key, "Variable not configured");
                    return Ok(None);
                }
            },
        };

        let result = match convert(&value) {
            Some(converted) => Ok(Some(converted)),
            None => Err(EnvError::TypeConversion {
                key,
                value: value.to_string(),
                target: kind,
            }),
        };
        self.suppress(result)
    }
}
