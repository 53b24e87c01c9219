use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use super::super::AppState;

#[derive(Debug, Serialize)]
pub(crate) struct PositionsResponse {
    positions: Vec<String>,
    total_count: usize,
}

#[derive(Debug, Serialize)]
pub(crate) struct SuggestionsResponse {
    suggestions: Vec<String>,
    query: String,
}

/// Pick the search text out of the raw query pairs.  A missing `q` is an
/// empty query; when `q` repeats, the last one wins.
fn search_text(params: Vec<(String, String)>) -> String {
    params
        .into_iter()
        .filter(|(name, _)| name == "q")
        .last()
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// `GET /api/positions` — every canonical position name.
pub(crate) async fn api_positions_list(State(state): State<AppState>) -> Json<PositionsResponse> {
    let positions = state.catalog.positions().to_vec();
    Json(PositionsResponse {
        total_count: positions.len(),
        positions,
    })
}

/// `GET /api/suggestions?q=` — up to 10 position names containing `q`.
pub(crate) async fn api_suggestions(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<SuggestionsResponse> {
    let query = search_text(params);
    Json(SuggestionsResponse {
        suggestions: state.catalog.suggest(&query),
        query,
    })
}
