//! Tests for the environment accessor.
//!
//! Responsibilities:
//! - Test key composition and lookup priority.
//! - Test typed getters, fallbacks and coercion.
//! - Test defaults loading and its failure kinds.
//! - Test quiet mode.
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment pollution.
//! - Environment variables are scoped with `temp_env`.

use std::sync::Mutex;

use serde_json::Value;

use crate::accessor::EnvAccessor;
use crate::options::AccessorOptions;
use crate::provider::MemoryDefaultsProvider;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Specifier under which `accessor_with_defaults` registers its document.
pub const TEST_SPECIFIER: &str = "test-defaults";

/// Build an accessor whose provider serves `document` under `TEST_SPECIFIER`.
pub fn memory_accessor(
    options: AccessorOptions,
    document: Value,
) -> EnvAccessor<MemoryDefaultsProvider> {
    let provider = MemoryDefaultsProvider::new().with_document(TEST_SPECIFIER, document);
    EnvAccessor::with_provider(options, provider)
}

/// Build an accessor and load `document` as its defaults table.
pub async fn accessor_with_defaults(
    options: AccessorOptions,
    document: Value,
) -> EnvAccessor<MemoryDefaultsProvider> {
    let mut accessor = memory_accessor(options, document);
    accessor
        .load_defaults(TEST_SPECIFIER)
        .await
        .expect("test defaults should load");
    accessor
}
