use axum::{extract::State, Json};

use super::super::AppState;
use crate::catalog::categories::{AllJobs, JobCategory};

/// `GET /api/categories` — position names grouped by category.
pub(crate) async fn api_categories(State(state): State<AppState>) -> Json<Vec<JobCategory>> {
    Json(state.categories.categories_view())
}

/// `GET /api/all-jobs` — category → position → skills.
pub(crate) async fn api_all_jobs(State(state): State<AppState>) -> Json<AllJobs> {
    Json(state.categories.combined_view(&state.catalog))
}
