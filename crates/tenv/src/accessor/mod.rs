//! The typed environment accessor.
//!
//! Responsibilities:
//! - Hold the prefix settings, the defaults table and the error policy.
//! - Resolve names through defaults table, live environment and fallback.
//! - Coerce resolved values to strings, integers, floats and arrays.
//! - Load the defaults table through a `DefaultsProvider`.
//!
//! Does NOT handle:
//! - Reading or parsing defaults files (see `provider`).
//! - Mutating or enumerating the environment.
//!
//! Invariants / Assumptions:
//! - Lookup priority is defaults table, then environment, then fallback.
//! - The defaults table is replaced wholesale by a successful load, never merged.
//! - Environment reads are never cached.
//! - Once quiet, an accessor stays quiet.

mod defaults;
mod getters;
mod resolve;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use crate::error::EnvError;
use crate::options::AccessorOptions;
use crate::provider::FileDefaultsProvider;
use crate::value::EnvValue;

/// Resolves environment variables to typed values.
///
/// ```no_run
/// use tenv::{AccessorOptions, EnvAccessor};
///
/// let env = EnvAccessor::new(AccessorOptions::default().with_prefix("APP"));
/// // Reads APP_PORT, falling back to 8080.
/// let port = env.get_int("PORT", Some(8080))?;
/// # Ok::<(), tenv::EnvError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EnvAccessor<P = FileDefaultsProvider> {
    prefix: String,
    prefix_separator: String,
    defaults: BTreeMap<String, EnvValue>,
    strict_errors: bool,
    provider: P,
}

impl EnvAccessor<FileDefaultsProvider> {
    /// Create an accessor that loads defaults from files.
    pub fn new(options: AccessorOptions) -> Self {
        Self::with_provider(options, FileDefaultsProvider::new())
    }
}

impl Default for EnvAccessor<FileDefaultsProvider> {
    fn default() -> Self {
        Self::new(AccessorOptions::default())
    }
}

impl<P> EnvAccessor<P> {
    /// Create an accessor that loads defaults through `provider`.
    pub fn with_provider(options: AccessorOptions, provider: P) -> Self {
        let AccessorOptions {
            prefix,
            prefix_separator,
            strict_errors,
        } = options;

        Self {
            prefix,
            prefix_separator,
            defaults: BTreeMap::new(),
            strict_errors,
            provider,
        }
    }

    /// Namespace segment placed before every name; empty when unprefixed.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Joins the prefix and the name.
    pub fn prefix_separator(&self) -> &str {
        &self.prefix_separator
    }

    /// The provider `load_defaults` reads through.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The current defaults table. Empty until a load succeeds.
    pub fn defaults(&self) -> &BTreeMap<String, EnvValue> {
        &self.defaults
    }

    pub fn defaults_loaded(&self) -> bool {
        !self.defaults.is_empty()
    }

    pub fn is_quiet(&self) -> bool {
        !self.strict_errors
    }

    /// Stop returning errors for the rest of this accessor's lifetime.
    ///
    /// Every later failure is logged at WARN and reported as an absent value
    /// instead. Callers can no longer tell "not configured" from
    /// "misconfigured", so a malformed value silently becomes `None`.
    /// Values already returned are unaffected. Calling this twice is a no-op.
    pub fn quiet(&mut self) {
        self.strict_errors = false;
    }

    /// Apply the error policy: in quiet mode, errors become the empty result.
    fn suppress<T: Default>(&self, result: Result<T, EnvError>) -> Result<T, EnvError> {
        match result {
            Err(e) if !self.strict_errors => {
                tracing::warn!(error = %e, "Suppressing error in quiet mode");
                Ok(T::default())
            }
            other => other,
        }
    }
}
