//! Loading and validating the defaults table.

use std::collections::BTreeMap;

use serde_json::Value;

use super::EnvAccessor;
use crate::constants::DEFAULTS_FIELD;
use crate::error::EnvError;
use crate::provider::DefaultsProvider;
use crate::value::EnvValue;

impl<P: DefaultsProvider> EnvAccessor<P> {
    /// Load the defaults table from the document at `specifier`.
    ///
    /// The document must be an object with a non-empty `defaults` mapping.
    /// On success the table is replaced as a whole. On failure the previous
    /// table is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if (strict mode only):
    /// - The provider cannot find, read or parse the document (`ModuleNotFound`)
    /// - The document has no `defaults` mapping (`StructureInvalid`)
    /// - The `defaults` mapping is empty (`DefaultsEmpty`)
    pub async fn load_defaults(&mut self, specifier: &str) -> Result<(), EnvError> {
        let result = self.try_load_defaults(specifier).await;
        self.suppress(result)
    }

    async fn try_load_defaults(&mut self, specifier: &str) -> Result<(), EnvError> {
        let document = self
            .provider
            .load(specifier)
            .await
            .map_err(|e| EnvError::module_not_found(specifier, e))?;

        let table = extract_defaults(specifier, document)?;
        tracing::info!(specifier, entries = table.len(), "Loaded defaults table");
        self.defaults = table;
        Ok(())
    }
}

/// Pull the `defaults` mapping out of a loaded document.
pub(super) fn extract_defaults(
    specifier: &str,
    document: Value,
) -> Result<BTreeMap<String, EnvValue>, EnvError> {
    let structure_invalid = |message: &str| EnvError::StructureInvalid {
        specifier: specifier.to_string(),
        message: message.to_string(),
    };

    let Value::Object(mut root) = document else {
        return Err(structure_invalid("document is not an object"));
    };
    let Some(defaults) = root.remove(DEFAULTS_FIELD) else {
        return Err(structure_invalid("missing `defaults` field"));
    };
    let Value::Object(entries) = defaults else {
        return Err(structure_invalid("`defaults` is not a mapping"));
    };

    if entries.is_empty() {
        return Err(EnvError::DefaultsEmpty {
            specifier: specifier.to_string(),
        });
    }

    Ok(entries
        .into_iter()
        .map(|(key, value)| (key, EnvValue::from(value)))
        .collect())
}
