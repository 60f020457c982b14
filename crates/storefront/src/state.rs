//! Application state shared across handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::StorefrontConfig;
use crate::services::{MockSearch, RandomSource, SearchSession, ThreadRandom};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Per-visitor state (cart,
/// theme) lives in the session, not here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    search: MockSearch,
    random: Mutex<Box<dyn RandomSource>>,
}

impl AppState {
    /// Create a new application state drawing search misses from the
    /// thread RNG.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_random_source(config, Box::new(ThreadRandom))
    }

    /// Create a state with an explicit random source for search misses.
    #[must_use]
    pub fn with_random_source(config: StorefrontConfig, random: Box<dyn RandomSource>) -> Self {
        let search = MockSearch::new(config.search_miss_rate);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                search,
                random: Mutex::new(random),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the mock search engine.
    #[must_use]
    pub fn search(&self) -> &MockSearch {
        &self.inner.search
    }

    /// Run `query` through the mock engine and record it on `session`.
    pub fn submit_search(&self, session: &mut SearchSession, query: &str) {
        let mut random = self
            .inner
            .random
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        session.submit(query, &self.inner.search, random.as_mut());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::FixedRandom;

    #[test]
    fn test_miss_rate_comes_from_config() {
        let config = StorefrontConfig {
            search_miss_rate: 0.0,
            ..StorefrontConfig::default()
        };
        let state = AppState::new(config);
        assert!(state.search().miss_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn test_submit_search_uses_injected_source() {
        let state =
            AppState::with_random_source(StorefrontConfig::default(), Box::new(FixedRandom(0.0)));
        let mut session = SearchSession::new();

        state.submit_search(&mut session, "jersey");
        assert!(session.has_no_results());

        let state =
            AppState::with_random_source(StorefrontConfig::default(), Box::new(FixedRandom(0.99)));
        state.submit_search(&mut session, "jersey");
        assert_eq!(session.results().len(), 3);
    }
}
