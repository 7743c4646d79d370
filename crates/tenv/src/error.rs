//! Error types for the environment accessor.
//!
//! Responsibilities:
//! - Define one variant per failure kind the accessor can report.
//! - Convert provider failures into `EnvError::ModuleNotFound`.
//!
//! Does NOT handle:
//! - Deciding whether an error is surfaced or suppressed (see `accessor`).
//!
//! Invariants:
//! - Every variant carries the key or specifier involved.

use thiserror::Error;

use crate::coerce::ValueKind;
use crate::provider::ProviderError;

/// Errors that can occur while loading defaults or reading variables.
#[derive(Error, Debug)]
pub enum EnvError {
    /// The defaults resource could not be located, read, or parsed.
    #[error("Cannot find defaults module '{specifier}'")]
    ModuleNotFound {
        specifier: String,
        #[source]
        source: ProviderError,
    },

    /// The resource loaded but does not expose a usable `defaults` mapping.
    #[error("Defaults module '{specifier}' has the wrong structure: {message}")]
    StructureInvalid { specifier: String, message: String },

    /// The `defaults` mapping exists but has no keys.
    #[error("Defaults module '{specifier}' has no keys")]
    DefaultsEmpty { specifier: String },

    /// A resolved value could not be coerced to the requested type.
    #[error("Cannot convert {key}={value:?} to {target}")]
    TypeConversion {
        key: String,
        value: String,
        target: ValueKind,
    },

    #[error("Invalid accessor options: {message}")]
    InvalidOptions { message: String },
}

impl EnvError {
    pub(crate) fn module_not_found(specifier: &str, source: ProviderError) -> Self {
        EnvError::ModuleNotFound {
            specifier: specifier.to_string(),
            source,
        }
    }
}
