//! Construction options for [`EnvAccessor`](crate::EnvAccessor).
//!
//! Responsibilities:
//! - Hold the recognized options with their defaults.
//! - Parse options from a JSON object, rejecting unknown keys.
//!
//! Invariants:
//! - Only `prefix`, `prefixSeparator` and `strictErrors` are recognized;
//!   `prefixSeparate` and `throwOnError` are accepted as aliases.

use serde::Deserialize;

use crate::constants::DEFAULT_PREFIX_SEPARATOR;
use crate::error::EnvError;

/// Options applied when constructing an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AccessorOptions {
    /// Namespace segment placed before every variable name. Empty disables prefixing.
    pub prefix: String,
    /// Joins `prefix` and the variable name.
    #[serde(alias = "prefixSeparate")]
    pub prefix_separator: String,
    /// When false, failures yield absent values instead of errors.
    #[serde(alias = "throwOnError")]
    pub strict_errors: bool,
}

impl Default for AccessorOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            prefix_separator: DEFAULT_PREFIX_SEPARATOR.to_string(),
            strict_errors: true,
        }
    }
}

impl AccessorOptions {
    /// Parse options from a JSON object such as `{"prefix": "APP"}`.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::InvalidOptions` for malformed JSON, unknown keys, or
    /// values of the wrong type.
    pub fn from_json_str(json: &str) -> Result<Self, EnvError> {
        serde_json::from_str(json).map_err(|e| EnvError::InvalidOptions {
            message: e.to_string(),
        })
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_prefix_separator(mut self, separator: impl Into<String>) -> Self {
        self.prefix_separator = separator.into();
        self
    }

    pub fn with_strict_errors(mut self, strict: bool) -> Self {
        self.strict_errors = strict;
        self
    }
}
