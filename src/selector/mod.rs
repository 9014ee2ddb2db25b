//! Random, non-repeating selection.
//!
//! This module provides:
//! - [`choose_facts`] / [`pad_facts`]: distinct facts, padded to a fixed slot count
//! - [`choose_excerpts`]: excerpts spread across distinct sites, fallback padded
//! - [`choose_template`]: template choice avoiding recent repeats
//! - [`RecentTemplates`]: keys used since the last full cycle
//!
//! Every loop here is bounded by a retry budget. When a soft constraint
//! cannot be met within the budget the best effort found is accepted.

use std::collections::HashSet;

use crate::catalog::Template;
use crate::store::{ExcerptSelection, Source};
use crate::traits::RandomSource;

/// Fact slots every template receives.
pub const FACT_SLOTS: usize = 3;

/// Excerpt slots every report carries.
pub const EXCERPT_SLOTS: usize = 2;

/// Site label attributed to fallback excerpts.
pub const FALLBACK_SITE: &str = "Web";

/// Generic excerpts used when the sources cannot fill every slot.
pub const FALLBACK_EXCERPTS: &[&str] = &[
    "Engineers will examine findings before setting a timeline for the next test.",
    "These delicious and impressive main meals work perfectly for a romantic dinner for two.",
    "The Food and Drug Administration suggests consuming no more than 400 milligrams of caffeine per day.",
];

/// Draw an index in `0..len`; `len` must be non-zero.
fn draw<R: RandomSource + ?Sized>(rng: &mut R, len: usize) -> usize {
    rng.index(len).min(len.saturating_sub(1))
}

/// Choose up to `n` distinct facts, uniformly without replacement.
///
/// Returns fewer than `n` facts if the pool is smaller.
pub fn choose_facts<R: RandomSource + ?Sized>(facts: &[String], n: usize, rng: &mut R) -> Vec<String> {
    let mut remaining: Vec<&String> = facts.iter().collect();
    let mut chosen = Vec::with_capacity(n.min(facts.len()));
    while chosen.len() < n && !remaining.is_empty() {
        let i = draw(rng, remaining.len());
        chosen.push(remaining.remove(i).clone());
    }
    chosen
}

/// Pad `chosen` with per-slot filler facts up to [`FACT_SLOTS`].
///
/// ```
/// use hallucination_reports::selector::pad_facts;
///
/// let facts = pad_facts(vec!["Watson sails.".to_string()], "Watson");
/// assert_eq!(facts, ["Watson sails.", "Watson insists this is normal.", "Watson blames the algorithm."]);
/// ```
#[must_use]
pub fn pad_facts(mut chosen: Vec<String>, name: &str) -> Vec<String> {
    chosen.truncate(FACT_SLOTS);
    for slot in chosen.len()..FACT_SLOTS {
        chosen.push(crate::catalog::filler_fact(name, slot));
    }
    chosen
}

/// Choose exactly `n` excerpts.
///
/// Draws a random source per attempt, skipping sources without excerpts.
/// A site already picked in this call is skipped until every usable site
/// has been picked once; after that sites may repeat, but the same excerpt
/// from the same site is never picked twice. Once `retry_budget` attempts
/// are spent, remaining slots are filled from [`FALLBACK_EXCERPTS`]
/// attributed to [`FALLBACK_SITE`].
pub fn choose_excerpts<R: RandomSource + ?Sized>(
    sources: &[Source],
    n: usize,
    rng: &mut R,
    retry_budget: u32,
) -> Vec<ExcerptSelection> {
    let usable_sites: HashSet<&str> = sources
        .iter()
        .filter(|s| s.is_usable())
        .map(|s| s.site.as_str())
        .collect();

    let mut picked: Vec<ExcerptSelection> = Vec::with_capacity(n);
    let mut used_sites: HashSet<&str> = HashSet::new();
    let mut attempts = 0_u32;

    while picked.len() < n && attempts < retry_budget && !usable_sites.is_empty() {
        attempts += 1;
        let source = &sources[draw(rng, sources.len())];
        if !source.is_usable() {
            continue;
        }
        let sites_exhausted = used_sites.len() >= usable_sites.len();
        if used_sites.contains(source.site.as_str()) && !sites_exhausted {
            continue;
        }
        let excerpt = &source.excerpts[draw(rng, source.excerpts.len())];
        if picked
            .iter()
            .any(|p| p.site == source.site && &p.excerpt == excerpt)
        {
            continue;
        }
        used_sites.insert(source.site.as_str());
        picked.push(ExcerptSelection::new(&source.site, &source.url, excerpt));
    }

    if picked.len() < n {
        tracing::debug!(
            picked = picked.len(),
            wanted = n,
            attempts,
            "Padding excerpts from fallback pool"
        );
    }
    while picked.len() < n {
        let text = FALLBACK_EXCERPTS[picked.len() % FALLBACK_EXCERPTS.len()];
        picked.push(ExcerptSelection::new(FALLBACK_SITE, "", text));
    }
    picked
}

/// Template keys used since the last full cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentTemplates {
    keys: HashSet<&'static str>,
}

impl RecentTemplates {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `key` was used in the current cycle.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Number of keys recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Start a new cycle.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    fn record(&mut self, key: &'static str) {
        self.keys.insert(key);
    }
}

/// Choose a template from `candidates`, avoiding keys in `recent`.
///
/// If `recent` already holds as many keys as there are candidates it is
/// cleared first. A draw that collides with `recent` is redrawn up to
/// `retry_budget` times; after that the last draw is accepted. The chosen
/// key is recorded in `recent`.
///
/// Returns `None` only when `candidates` is empty.
pub fn choose_template<'c, R: RandomSource + ?Sized>(
    candidates: &[&'c Template],
    recent: &mut RecentTemplates,
    rng: &mut R,
    retry_budget: u32,
) -> Option<&'c Template> {
    if candidates.is_empty() {
        return None;
    }
    if recent.len() >= candidates.len() {
        recent.clear();
    }

    let mut chosen = candidates[draw(rng, candidates.len())];
    let mut redraws = 0_u32;
    while recent.contains(chosen.key) && redraws < retry_budget {
        chosen = candidates[draw(rng, candidates.len())];
        redraws += 1;
    }
    if recent.contains(chosen.key) {
        tracing::debug!(key = chosen.key, redraws, "Accepting repeated template");
    }

    recent.record(chosen.key);
    Some(chosen)
}
