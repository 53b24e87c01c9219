use axum::{
    extract::{rejection::PathRejection, OriginalUri, Path, State},
    Json,
};

use super::super::{ApiError, AppState};
use crate::catalog::SkillsMatch;

/// `GET /api/skills/:position` — skills for a position (case-insensitive,
/// falls back to substring matching).
///
/// A segment that does not decode to UTF-8 cannot name a position, so it
/// is reported as not found using its raw, still-encoded form.
pub(crate) async fn api_skills_for_position(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    position: Result<Path<String>, PathRejection>,
) -> Result<Json<SkillsMatch>, ApiError> {
    match position {
        Ok(Path(position)) => state.catalog.resolve(&position).map(Json),
        Err(_) => Err(ApiError::NotFound {
            position: uri.path().rsplit('/').next().unwrap_or_default().to_string(),
        }),
    }
}
