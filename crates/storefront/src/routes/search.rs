//! Search route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use crate::services::SearchSession;
use crate::state::AppState;

/// Search query parameters.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// Results panel fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "fragments/search_results.html")]
pub struct SearchResultsTemplate {
    pub search: SearchSession,
}

/// Run a mock search and render the results panel.
///
/// A blank query renders an empty, hidden panel.
#[instrument(skip(state))]
pub async fn results(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> SearchResultsTemplate {
    let mut search = SearchSession::new();
    state.submit_search(&mut search, &query.q);

    tracing::debug!(
        results = search.results().len(),
        no_results = search.has_no_results(),
        "Search submitted"
    );

    SearchResultsTemplate { search }
}
