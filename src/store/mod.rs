//! Input store.
//!
//! This module provides:
//! - [`InputStore`]: the two normalized input collections (facts and sources)
//! - [`Source`]: a site with its reference locator and excerpts
//! - [`FsLoader`]: filesystem-backed [`ResourceLoader`]
//! - [`normalize_spaces`]: whitespace normalization shared by all text entries
//!
//! The store is populated once and is read-only afterward.
//!
//! # Example
//!
//! ```
//! use hallucination_reports::store::{InputStore, Source};
//!
//! let store = InputStore::from_raw(
//!     vec!["  Watson bakes bread\n on Sundays. ".to_string(), "   ".to_string()],
//!     vec![Source::new("NASA", "", vec!["Liftoff  is scheduled.".to_string()])],
//! );
//! assert_eq!(store.facts(), ["Watson bakes bread on Sundays."]);
//! assert_eq!(store.sources()[0].excerpts, ["Liftoff is scheduled."]);
//! ```

mod loader;

pub use loader::{FactsDocument, FsLoader, RawSource, SourcesDocument};

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::traits::ResourceLoader;

/// An external site with the excerpts attributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Site label, e.g. `"NASA"`.
    pub site: String,
    /// Reference locator; may be empty.
    pub url: String,
    /// Normalized excerpt strings. May be empty.
    pub excerpts: Vec<String>,
}

impl Source {
    /// Create a new source.
    #[must_use]
    pub fn new(site: impl Into<String>, url: impl Into<String>, excerpts: Vec<String>) -> Self {
        Self {
            site: site.into(),
            url: url.into(),
            excerpts,
        }
    }

    /// A source without excerpts is never chosen as a provider.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.excerpts.is_empty()
    }
}

/// One excerpt copied out of a source, tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptSelection {
    /// Site label of the providing source.
    pub site: String,
    /// Reference locator of the providing source.
    pub url: String,
    /// The excerpt text.
    pub excerpt: String,
}

impl ExcerptSelection {
    /// Create a new selection.
    #[must_use]
    pub fn new(
        site: impl Into<String>,
        url: impl Into<String>,
        excerpt: impl Into<String>,
    ) -> Self {
        Self {
            site: site.into(),
            url: url.into(),
            excerpt: excerpt.into(),
        }
    }
}

/// Facts and sources, normalized and immutable after load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputStore {
    facts: Vec<String>,
    sources: Vec<Source>,
}

impl InputStore {
    /// Build a store from in-memory data, applying normalization.
    ///
    /// Empty facts and empty excerpts are dropped. Sources that end up with
    /// no excerpts are kept.
    #[must_use]
    pub fn from_raw(facts: Vec<String>, sources: Vec<Source>) -> Self {
        let facts = normalize_all(facts);
        let sources = sources
            .into_iter()
            .map(|s| Source {
                site: normalize_spaces(&s.site),
                url: s.url.trim().to_string(),
                excerpts: normalize_all(s.excerpts),
            })
            .collect();
        Self { facts, sources }
    }

    /// Load both resources through `loader`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if either resource is unreachable or malformed.
    pub async fn load<L>(loader: &L, facts_path: &str, sources_path: &str) -> Result<Self, LoadError>
    where
        L: ResourceLoader + ?Sized,
    {
        let facts_text = loader.read_text(facts_path).await?;
        let facts_doc = FactsDocument::parse(facts_path, &facts_text)?;

        let sources_text = loader.read_text(sources_path).await?;
        let sources_doc = SourcesDocument::parse(sources_path, &sources_text)?;

        let store = Self::from_raw(
            facts_doc.facts,
            sources_doc.sources.into_iter().map(Source::from).collect(),
        );

        tracing::info!(
            facts = store.facts.len(),
            sources = store.sources.len(),
            usable_sources = store.usable_sources().count(),
            "Input store loaded"
        );

        Ok(store)
    }

    /// All normalized facts.
    #[must_use]
    pub fn facts(&self) -> &[String] {
        &self.facts
    }

    /// All sources, including ones without excerpts.
    #[must_use]
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Sources that have at least one excerpt.
    pub fn usable_sources(&self) -> impl Iterator<Item = &Source> {
        self.sources.iter().filter(|s| s.is_usable())
    }
}

/// Collapse whitespace runs to single spaces and trim both ends.
///
/// ```
/// use hallucination_reports::store::normalize_spaces;
///
/// assert_eq!(normalize_spaces("  a \t b\n\nc  "), "a b c");
/// assert_eq!(normalize_spaces(" \n "), "");
/// ```
#[must_use]
pub fn normalize_spaces(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_all(entries: Vec<String>) -> Vec<String> {
    entries
        .iter()
        .map(|e| normalize_spaces(e))
        .filter(|e| !e.is_empty())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_utils::{mock_loader, mock_loader_unreachable};
    use pretty_assertions::assert_eq;

    const FACTS_JSON: &str = r#"{"facts": ["Watson  eats pasta.", "", "  Watson plays\ttennis. "]}"#;
    const SOURCES_JSON: &str = r#"{
        "sources": [
            {"site": "NASA", "url": "https://example.test/nasa", "excerpts": ["Engines  fired.", " "]},
            {"site": "Empty Blog", "excerpts": []},
            {"site": "IKEA"}
        ]
    }"#;

    #[test]
    fn test_normalize_spaces_collapses_runs() {
        assert_eq!(normalize_spaces("a\u{a0}\u{a0}b"), "a b");
        assert_eq!(normalize_spaces("one\r\ntwo"), "one two");
        assert_eq!(normalize_spaces(""), "");
    }

    #[test]
    fn test_from_raw_drops_empty_entries() {
        let store = InputStore::from_raw(
            vec![" ".to_string(), "x".to_string()],
            vec![Source::new("S", " https://s.test ", vec!["\n".to_string()])],
        );
        assert_eq!(store.facts(), ["x"]);
        assert_eq!(store.sources().len(), 1);
        assert!(store.sources()[0].excerpts.is_empty());
        assert_eq!(store.sources()[0].url, "https://s.test");
        assert_eq!(store.usable_sources().count(), 0);
    }

    #[tokio::test]
    async fn test_load_normalizes_both_resources() {
        let loader = mock_loader(FACTS_JSON, SOURCES_JSON);
        let store = InputStore::load(&loader, "facts.json", "sources.json")
            .await
            .expect("should load");

        assert_eq!(store.facts(), ["Watson eats pasta.", "Watson plays tennis."]);
        assert_eq!(store.sources().len(), 3);
        assert_eq!(store.sources()[0].excerpts, ["Engines fired."]);
        assert_eq!(store.sources()[2].url, "");
        let usable: Vec<&str> = store.usable_sources().map(|s| s.site.as_str()).collect();
        assert_eq!(usable, ["NASA"]);
    }

    #[tokio::test]
    async fn test_load_missing_collections_default_to_empty() {
        let loader = mock_loader("{}", "{}");
        let store = InputStore::load(&loader, "facts.json", "sources.json")
            .await
            .expect("should load");
        assert!(store.facts().is_empty());
        assert!(store.sources().is_empty());
    }

    #[tokio::test]
    async fn test_load_unreachable_resource() {
        let mock = mock_loader_unreachable("404");

        let err = InputStore::load(&mock, "facts.json", "sources.json")
            .await
            .unwrap_err();
        assert_eq!(err.path(), "facts.json");
    }

    #[tokio::test]
    async fn test_load_malformed_sources() {
        let loader = mock_loader(FACTS_JSON, "{\"sources\": [");
        let err = InputStore::load(&loader, "facts.json", "sources.json")
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Malformed { path, .. } if path == "sources.json"));
    }
}
