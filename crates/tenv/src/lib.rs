//! Typed access to process environment variables.
//!
//! This crate provides [`EnvAccessor`], which resolves a variable name against
//! an optional defaults table, the live process environment, and a
//! caller-supplied fallback, then coerces the result to a string, integer,
//! float, or array.

mod accessor;
mod coerce;
pub mod constants;
mod error;
mod options;
pub mod provider;
mod value;

pub use accessor::EnvAccessor;
pub use coerce::ValueKind;
pub use error::EnvError;
pub use options::AccessorOptions;
pub use provider::{DefaultsProvider, FileDefaultsProvider, MemoryDefaultsProvider, ProviderError};
pub use value::EnvValue;
