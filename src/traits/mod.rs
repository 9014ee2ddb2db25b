//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`ResourceLoader`]: Input resource reading abstraction
//! - [`RandomSource`]: Randomness abstraction for reproducible selection
//! - [`TimeProvider`]: Time abstraction for testing
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.
//!
//! # Example
//!
//! ```
//! use hallucination_reports::traits::{RandomSource, RngSource};
//!
//! let mut rng = RngSource::seeded(7);
//! let i = rng.index(9);
//! assert!(i < 9);
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::LoadError;

/// Resource loader trait for mocking.
///
/// Abstracts how the facts and sources resources are fetched so the
/// input store can be tested without touching the filesystem.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Read the full text of a resource.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Unreachable`] if the resource cannot be read.
    async fn read_text(&self, path: &str) -> Result<String, LoadError>;
}

/// Random source trait.
///
/// Every random choice made by the selector goes through this trait, so a
/// seeded or scripted implementation makes generation reproducible.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send {
    /// Return a uniformly distributed index in `0..len`.
    ///
    /// Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Deterministic source for reproducible runs.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seeded when a seed is given, entropy otherwise.
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }
}

impl<R: Rng + Send> RandomSource for RngSource<R> {
    fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Time provider trait for deterministic testing.
///
/// This trait abstracts time operations to allow for
/// deterministic testing by providing fixed timestamps.
#[cfg_attr(test, mockall::automock)]
pub trait TimeProvider: Send + Sync {
    /// Get the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Real time provider using system clock.
///
/// This is the production implementation that returns the actual current time.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeProvider;

impl TimeProvider for RealTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(RealTimeProvider: Send, Sync, Clone, Copy, Default);
    assert_impl_all!(RngSource<StdRng>: Send, Clone);

    #[test]
    fn test_real_time_provider_now() {
        let provider = RealTimeProvider;
        let before = Utc::now();
        let now = provider.now();
        let after = Utc::now();
        assert!(now >= before);
        assert!(now <= after);
    }

    #[test]
    fn test_rng_source_stays_in_range() {
        let mut rng = RngSource::seeded(1234);
        for len in 1..50 {
            for _ in 0..20 {
                assert!(rng.index(len) < len);
            }
        }
    }

    #[test]
    fn test_rng_source_zero_len() {
        let mut rng = RngSource::seeded(1);
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn test_rng_source_seeded_is_reproducible() {
        let mut a = RngSource::seeded(99);
        let mut b = RngSource::seeded(99);
        let draws_a: Vec<usize> = (0..32).map(|_| a.index(1000)).collect();
        let draws_b: Vec<usize> = (0..32).map(|_| b.index(1000)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_rng_source_from_seed_option() {
        let mut seeded = RngSource::from_seed_option(Some(5));
        let mut expected = RngSource::seeded(5);
        assert_eq!(seeded.index(100), expected.index(100));

        let mut entropy = RngSource::from_seed_option(None);
        assert!(entropy.index(3) < 3);
    }

    #[test]
    fn test_mock_random_source_sequence() {
        let mut mock = MockRandomSource::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_index()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(2_usize);
        mock.expect_index()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(0_usize);

        assert_eq!(mock.index(5), 2);
        assert_eq!(mock.index(5), 0);
    }

    #[tokio::test]
    async fn test_mock_resource_loader_error() {
        let mut mock = MockResourceLoader::new();
        mock.expect_read_text().returning(|path| {
            Err(LoadError::Unreachable {
                path: path.to_string(),
                message: "404".to_string(),
            })
        });

        let result = mock.read_text("facts.json").await;
        assert!(matches!(result, Err(LoadError::Unreachable { path, .. }) if path == "facts.json"));
    }

    #[test]
    fn test_mock_time_provider() {
        let fixed_time = Utc::now() - chrono::Duration::days(1);
        let mut mock = MockTimeProvider::new();
        mock.expect_now().return_const(fixed_time);

        assert_eq!(mock.now(), fixed_time);
    }
}
