//! Sources for the defaults document.
//!
//! Responsibilities:
//! - Define the `DefaultsProvider` capability the accessor loads defaults through.
//! - Provide a file-backed provider (JSON or YAML) and an in-memory provider.
//!
//! Does NOT handle:
//! - Validating the document structure (see `accessor::defaults`).
//! - Caching; every `load` call goes back to the source.
//!
//! Invariants:
//! - A provider returns the whole document; the accessor extracts `defaults`.
//! - Every provider failure becomes `EnvError::ModuleNotFound` at the accessor.

use std::future::Future;
use std::path::PathBuf;

use thiserror::Error;

mod file;
mod memory;

pub use file::FileDefaultsProvider;
pub use memory::MemoryDefaultsProvider;

/// Loads a defaults document given a path or specifier.
pub trait DefaultsProvider {
    /// Load the document identified by `specifier`.
    fn load(
        &self,
        specifier: &str,
    ) -> impl Future<Output = Result<serde_json::Value, ProviderError>> + Send;
}

/// Errors raised by defaults providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to read defaults file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse defaults file at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("No defaults document registered for '{specifier}'")]
    NotRegistered { specifier: String },
}
