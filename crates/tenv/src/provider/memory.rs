//! In-memory defaults provider.

use std::collections::HashMap;

use super::{DefaultsProvider, ProviderError};

/// Serves defaults documents registered under a specifier.
///
/// Useful for embedding defaults in the binary and for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryDefaultsProvider {
    documents: HashMap<String, serde_json::Value>,
}

impl MemoryDefaultsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `document` under `specifier`, replacing any previous entry.
    pub fn insert(&mut self, specifier: impl Into<String>, document: serde_json::Value) {
        self.documents.insert(specifier.into(), document);
    }

    pub fn with_document(
        mut self,
        specifier: impl Into<String>,
        document: serde_json::Value,
    ) -> Self {
        self.insert(specifier, document);
        self
    }
}

impl DefaultsProvider for MemoryDefaultsProvider {
    async fn load(&self, specifier: &str) -> Result<serde_json::Value, ProviderError> {
        self.documents
            .get(specifier)
            .cloned()
            .ok_or_else(|| ProviderError::NotRegistered {
                specifier: specifier.to_string(),
            })
    }
}
