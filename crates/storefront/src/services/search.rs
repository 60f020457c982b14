//! Mock product search.
//!
//! There is no index behind this. A query either returns the same three
//! sample jerseys or a "no results" state:
//!
//! - the trimmed, lower-cased query equals [`NOT_FOUND_SENTINEL`], or
//! - a uniform draw from the injected [`RandomSource`] falls below the
//!   configured miss rate (0.3 by default).
//!
//! The random miss exists to demo the empty state. Set the miss rate to 0 to
//! make every other query deterministic.

use rand::Rng;
use sharp_style_core::types::cart::PLACEHOLDER_IMAGE;
use sharp_style_core::{Price, ProductId, ProductSummary};
use tracing::instrument;

/// Query that always produces the no-results state.
pub const NOT_FOUND_SENTINEL: &str = "notfound";

/// Default share of ordinary queries that randomly return no results.
pub const DEFAULT_MISS_RATE: f64 = 0.3;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Result of submitting a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchOutcome {
    /// Query was blank. Results are cleared and the panel hidden.
    #[default]
    Empty,
    NoResults,
    Results(Vec<ProductSummary>),
}

/// The mock search engine.
#[derive(Debug, Clone, Copy)]
pub struct MockSearch {
    miss_rate: f64,
}

impl Default for MockSearch {
    fn default() -> Self {
        Self::new(DEFAULT_MISS_RATE)
    }
}

impl MockSearch {
    /// Create an engine with the given random miss rate, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(miss_rate: f64) -> Self {
        Self {
            miss_rate: miss_rate.clamp(0.0, 1.0),
        }
    }

    #[must_use]
    pub const fn miss_rate(&self) -> f64 {
        self.miss_rate
    }

    /// Run a query.
    #[instrument(skip(self, rng))]
    pub fn submit(&self, query: &str, rng: &mut dyn RandomSource) -> SearchOutcome {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return SearchOutcome::Empty;
        }

        if trimmed.to_lowercase() == NOT_FOUND_SENTINEL {
            return SearchOutcome::NoResults;
        }

        let draw = rng.next_unit();
        if draw < self.miss_rate {
            tracing::debug!(draw, miss_rate = self.miss_rate, "Random search miss");
            return SearchOutcome::NoResults;
        }

        SearchOutcome::Results(sample_results())
    }
}

/// The fixed result set returned for every hit.
#[must_use]
pub fn sample_results() -> Vec<ProductSummary> {
    ["SJ15", "SJ16", "SJ17"]
        .into_iter()
        .zip(1..)
        .map(|(code, id)| ProductSummary {
            id: ProductId::new(id),
            name: format!("Full Sleeve Dawah Jersey - {code}"),
            price: Price::from_units(275),
            original_price: Price::from_units(550),
            image_ref: PLACEHOLDER_IMAGE.to_string(),
        })
        .collect()
}

/// Search box state: the current query, its outcome and whether the results
/// panel is showing.
///
/// Each submission replaces the previous outcome entirely.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    query: String,
    outcome: SearchOutcome,
    panel_visible: bool,
}

impl SearchSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit `query` and update the panel.
    pub fn submit(&mut self, query: &str, engine: &MockSearch, rng: &mut dyn RandomSource) {
        query.clone_into(&mut self.query);
        self.outcome = engine.submit(query, rng);
        self.panel_visible = !matches!(self.outcome, SearchOutcome::Empty);
    }

    /// Input focused: re-open the panel if there is a query to show.
    pub fn focus(&mut self) {
        if !self.query.trim().is_empty() {
            self.panel_visible = true;
        }
    }

    /// Pointer went down outside the search area.
    pub const fn dismiss(&mut self) {
        self.panel_visible = false;
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    #[must_use]
    pub const fn is_panel_visible(&self) -> bool {
        self.panel_visible
    }

    #[must_use]
    pub const fn has_no_results(&self) -> bool {
        matches!(self.outcome, SearchOutcome::NoResults)
    }

    /// Current results; empty unless the last query hit.
    #[must_use]
    pub fn results(&self) -> &[ProductSummary] {
        match &self.outcome {
            SearchOutcome::Results(results) => results,
            SearchOutcome::Empty | SearchOutcome::NoResults => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIT: FixedRandom = FixedRandom(0.99);
    const MISS: FixedRandom = FixedRandom(0.0);

    #[test]
    fn test_blank_query_is_empty() {
        let engine = MockSearch::default();
        assert_eq!(engine.submit("", &mut MISS), SearchOutcome::Empty);
        assert_eq!(engine.submit("   \t", &mut HIT), SearchOutcome::Empty);
    }

    #[test]
    fn test_sentinel_is_always_no_results() {
        let engine = MockSearch::new(0.0);
        for query in ["notfound", "NotFound", "  NOTFOUND  "] {
            assert_eq!(engine.submit(query, &mut HIT), SearchOutcome::NoResults);
        }
    }

    #[test]
    fn test_hit_returns_three_samples() {
        let engine = MockSearch::default();
        let SearchOutcome::Results(results) = engine.submit("jersey", &mut HIT) else {
            panic!("expected results");
        };
        assert_eq!(results, sample_results());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].name, "Full Sleeve Dawah Jersey - SJ15");
        assert_eq!(results[2].name, "Full Sleeve Dawah Jersey - SJ17");
    }

    #[test]
    fn test_random_miss_below_threshold() {
        let engine = MockSearch::new(0.3);
        assert_eq!(engine.submit("jersey", &mut FixedRandom(0.29)), SearchOutcome::NoResults);
        assert!(matches!(
            engine.submit("jersey", &mut FixedRandom(0.3)),
            SearchOutcome::Results(_)
        ));
    }

    #[test]
    fn test_zero_miss_rate_never_misses() {
        let engine = MockSearch::new(0.0);
        assert!(matches!(engine.submit("jersey", &mut MISS), SearchOutcome::Results(_)));
    }

    #[test]
    fn test_miss_rate_is_clamped() {
        assert!((MockSearch::new(4.0).miss_rate() - 1.0).abs() < f64::EPSILON);
        assert!(MockSearch::new(-1.0).miss_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_thread_random_hits_most_of_the_time() {
        let engine = MockSearch::default();
        let mut rng = ThreadRandom;
        let trials = 2000;
        let hits = (0..trials)
            .filter(|_| matches!(engine.submit("anything-else", &mut rng), SearchOutcome::Results(_)))
            .count();
        // Expected ~1400 with a standard deviation of ~20.
        assert!(hits >= 1300, "only {hits} hits out of {trials}");
    }

    #[test]
    fn test_session_shows_and_clears_panel() {
        let engine = MockSearch::default();
        let mut session = SearchSession::new();

        session.submit("jersey", &engine, &mut HIT);
        assert!(session.is_panel_visible());
        assert_eq!(session.results().len(), 3);

        session.submit("", &engine, &mut HIT);
        assert!(!session.is_panel_visible());
        assert!(session.results().is_empty());
        assert!(!session.has_no_results());
    }

    #[test]
    fn test_session_replaces_previous_outcome() {
        let engine = MockSearch::default();
        let mut session = SearchSession::new();

        session.submit("jersey", &engine, &mut HIT);
        session.submit("notfound", &engine, &mut HIT);
        assert!(session.has_no_results());
        assert!(session.results().is_empty());
        assert!(session.is_panel_visible());
        assert_eq!(session.query(), "notfound");
    }

    #[test]
    fn test_session_dismiss_and_focus() {
        let engine = MockSearch::default();
        let mut session = SearchSession::new();

        session.focus();
        assert!(!session.is_panel_visible());

        session.submit("jersey", &engine, &mut HIT);
        session.dismiss();
        assert!(!session.is_panel_visible());
        assert_eq!(session.results().len(), 3);

        session.focus();
        assert!(session.is_panel_visible());
    }
}
