//! Centralized constants for the tenv crate.

/// Separator placed between the prefix and the variable name.
pub const DEFAULT_PREFIX_SEPARATOR: &str = "_";

/// Field a defaults document must expose at its top level.
pub const DEFAULTS_FIELD: &str = "defaults";

/// Separator used when an array value is neither a list nor a JSON array.
pub const ARRAY_SEPARATOR: char = ',';

/// File extensions parsed as YAML by the file provider.
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];
