//! Resource documents and the filesystem loader.

use async_trait::async_trait;
use serde::Deserialize;

use super::Source;
use crate::error::LoadError;
use crate::traits::ResourceLoader;

/// Reads resources from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

#[async_trait]
impl ResourceLoader for FsLoader {
    async fn read_text(&self, path: &str) -> Result<String, LoadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Unreachable {
                path: path.to_string(),
                message: e.to_string(),
            })
    }
}

/// Facts resource: `{ "facts": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FactsDocument {
    /// Raw fact strings.
    #[serde(default)]
    pub facts: Vec<String>,
}

impl FactsDocument {
    /// Parse the facts resource.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Malformed`] if `text` is not a facts document.
    pub fn parse(path: &str, text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|e| malformed(path, &e))
    }
}

/// Sources resource: `{ "sources": [...] }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourcesDocument {
    /// Raw source records.
    #[serde(default)]
    pub sources: Vec<RawSource>,
}

impl SourcesDocument {
    /// Parse the sources resource.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Malformed`] if `text` is not a sources document.
    pub fn parse(path: &str, text: &str) -> Result<Self, LoadError> {
        serde_json::from_str(text).map_err(|e| malformed(path, &e))
    }
}

/// One source record as it appears in the resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSource {
    /// Site label.
    #[serde(default)]
    pub site: String,
    /// Reference locator (`null` and missing both mean empty).
    #[serde(default)]
    pub url: Option<String>,
    /// Raw excerpt strings.
    #[serde(default)]
    pub excerpts: Vec<String>,
}

impl From<RawSource> for Source {
    fn from(raw: RawSource) -> Self {
        Self::new(raw.site, raw.url.unwrap_or_default(), raw.excerpts)
    }
}

fn malformed(path: &str, err: &serde_json::Error) -> LoadError {
    LoadError::Malformed {
        path: path.to_string(),
        message: err.to_string(),
    }
}
