//! File-backed defaults provider.

use std::path::{Path, PathBuf};

use super::{DefaultsProvider, ProviderError};
use crate::constants::YAML_EXTENSIONS;

/// Reads defaults documents from disk.
///
/// Relative specifiers resolve against the base directory when one is set,
/// and against the process working directory otherwise. Files ending in
/// `.yaml` or `.yml` are parsed as YAML; everything else as JSON.
#[derive(Debug, Clone, Default)]
pub struct FileDefaultsProvider {
    base_dir: Option<PathBuf>,
}

impl FileDefaultsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative specifiers against `dir`.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub(crate) fn resolve_path(&self, specifier: &str) -> PathBuf {
        let path = Path::new(specifier);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            YAML_EXTENSIONS
                .iter()
                .any(|yaml| ext.eq_ignore_ascii_case(yaml))
        })
}

fn parse_document(path: &Path, content: &str) -> Result<serde_json::Value, ProviderError> {
    let parsed = if is_yaml(path) {
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    } else {
        serde_json::from_str(content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| ProviderError::Parse {
        path: path.to_path_buf(),
        message,
    })
}

impl DefaultsProvider for FileDefaultsProvider {
    async fn load(&self, specifier: &str) -> Result<serde_json::Value, ProviderError> {
        let path = self.resolve_path(specifier);
        tracing::debug!(path = %path.display(), "Reading defaults file");

        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| ProviderError::Read {
                path: path.clone(),
                source,
            })?;

        parse_document(&path, &content)
    }
}
