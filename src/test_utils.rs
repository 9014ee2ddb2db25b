//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - [`ScriptedRandom`]: a deterministic [`RandomSource`] replaying fixed draws
//! - Mock factories for loaders and clocks
//! - Input store fixtures
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use chrono::{DateTime, Utc};

use crate::error::LoadError;
use crate::store::{InputStore, Source};
use crate::traits::{MockResourceLoader, MockTimeProvider, RandomSource};

/// Random source that replays a fixed list of values, cycling forever.
///
/// Each draw returns `value % len`, so scripts stay valid whatever the
/// pool size.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<usize>,
    next: usize,
}

impl ScriptedRandom {
    /// Create a source replaying `values`. An empty script always draws 0.
    #[must_use]
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }

    /// Number of draws made so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 || self.values.is_empty() {
            self.next += 1;
            return 0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value % len
    }
}

/// Create a mock loader serving `facts` for paths containing "facts" and
/// `sources` for every other path.
#[must_use]
pub fn mock_loader(facts: impl Into<String>, sources: impl Into<String>) -> MockResourceLoader {
    let facts = facts.into();
    let sources = sources.into();
    let mut mock = MockResourceLoader::new();
    mock.expect_read_text().returning(move |path| {
        if path.contains("facts") {
            Ok(facts.clone())
        } else {
            Ok(sources.clone())
        }
    });
    mock
}

/// Create a mock loader failing every read as unreachable.
#[must_use]
pub fn mock_loader_unreachable(message: &'static str) -> MockResourceLoader {
    let mut mock = MockResourceLoader::new();
    mock.expect_read_text().returning(move |path| {
        Err(LoadError::Unreachable {
            path: path.to_string(),
            message: message.to_string(),
        })
    });
    mock
}

/// Create a mock time provider that returns a fixed time.
#[must_use]
pub fn mock_time(time: DateTime<Utc>) -> MockTimeProvider {
    let mut mock = MockTimeProvider::new();
    mock.expect_now().return_const(time);
    mock
}

/// Create a mock time provider from an ISO 8601 timestamp string.
///
/// # Panics
///
/// Panics if the timestamp string is invalid.
#[must_use]
pub fn mock_time_str(timestamp: &str) -> MockTimeProvider {
    let time = timestamp
        .parse::<DateTime<Utc>>()
        .expect("Invalid timestamp format");
    mock_time(time)
}

/// Create a test fact list.
#[must_use]
pub fn test_facts(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Create a test source.
#[must_use]
pub fn test_source(site: &str, excerpts: &[&str]) -> Source {
    Source::new(site, format!("https://{}.test", site.to_lowercase()), test_facts(excerpts))
}

/// Store with five facts and four usable sites.
#[must_use]
pub fn sample_store() -> InputStore {
    InputStore::from_raw(
        test_facts(&[
            "Watson bakes bread every Sunday.",
            "Watson owns a cat named Orbit.",
            "Watson keeps a pink rocket on the balcony.",
            "Watson collects smooth rocks.",
            "Watson drinks four coffees a day.",
        ]),
        vec![
            test_source("ArchDaily", &["The pavilion is wrapped in timber slats."]),
            test_source("IKEA", &["The glasses stack neatly on a narrow shelf."]),
            test_source("Garden Weekly", &["Prune the roses after the first frost."]),
            test_source("Museum Notes", &["The exhibition opens in spring."]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ResourceLoader, TimeProvider};
    use chrono::Datelike;

    #[test]
    fn test_scripted_random_cycles() {
        let mut rng = ScriptedRandom::new(vec![1, 4]);
        assert_eq!(rng.index(3), 1);
        assert_eq!(rng.index(3), 1);
        assert_eq!(rng.index(3), 1);
        assert_eq!(rng.index(10), 4);
        assert_eq!(rng.draws(), 4);
    }

    #[test]
    fn test_scripted_random_empty_script() {
        let mut rng = ScriptedRandom::new(Vec::new());
        assert_eq!(rng.index(5), 0);
        assert_eq!(rng.index(0), 0);
    }

    #[tokio::test]
    async fn test_mock_loader_routes_by_path() {
        let mock = mock_loader("F", "S");
        assert_eq!(mock.read_text("data/facts.json").await.unwrap(), "F");
        assert_eq!(mock.read_text("data/sources.json").await.unwrap(), "S");
    }

    #[tokio::test]
    async fn test_mock_loader_unreachable() {
        let mock = mock_loader_unreachable("gone");
        let err = mock.read_text("x.json").await.unwrap_err();
        assert_eq!(err.path(), "x.json");
    }

    #[test]
    fn test_mock_time_str() {
        let mock = mock_time_str("2024-06-15T10:30:00Z");
        let time = mock.now();
        assert_eq!(time.year(), 2024);
        assert_eq!(time.month(), 6);
        assert_eq!(time.day(), 15);
    }

    #[test]
    fn test_sample_store_shape() {
        let store = sample_store();
        assert_eq!(store.facts().len(), 5);
        assert_eq!(store.usable_sources().count(), 4);
        assert_eq!(store.sources()[1].url, "https://ikea.test");
    }
}
