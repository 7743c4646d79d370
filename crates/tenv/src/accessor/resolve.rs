//! Key composition and raw lookup.

use super::EnvAccessor;
use crate::value::EnvValue;

impl<P> EnvAccessor<P> {
    /// The name actually looked up for `name`: `prefix + separator + name`
    /// when a prefix is set, otherwise `name` unchanged.
    pub fn effective_key(&self, name: &str) -> String {
        if self.prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}{}{}", self.prefix, self.prefix_separator, name)
        }
    }

    /// Look `name` up in the defaults table, then in the live environment.
    ///
    /// A defaults entry wins unless it is `null`, `false`, zero, empty, or
    /// `NaN`; the string `"0"` still wins. An environment variable
    /// wins whenever it is defined, even as an empty string. Returns `None`
    /// when neither source has the key.
    pub fn resolve(&self, name: &str) -> Option<EnvValue> {
        self.resolve_key(&self.effective_key(name))
    }

    pub(super) fn resolve_key(&self, key: &str) -> Option<EnvValue> {
        if let Some(value) = self.defaults.get(key).filter(|v| v.is_present_default()) {
            tracing::debug!(key, source = "defaults", "Resolved variable");
            return Some(value.clone());
        }

        let raw = std::env::var_os(key)?;
        tracing::debug!(key, source = "environment", "Resolved variable");
        Some(EnvValue::Str(raw.to_string_lossy().into_owned()))
    }
}
