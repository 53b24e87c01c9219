use axum::{response::IntoResponse, Json};

pub(crate) const SERVICE_NAME: &str = "Job Portal Skills API";

/// `GET /` — service banner and endpoint map.
pub(crate) async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": format!("Welcome to {SERVICE_NAME}"),
        "version": env!("CARGO_PKG_VERSION"),
        "authentication": "API Key required in X-API-Key header",
        "endpoints": {
            "positions": "/api/positions",
            "skills": "/api/skills/{position}",
            "suggestions": "/api/suggestions",
            "categories": "/api/categories",
            "all_jobs": "/api/all-jobs",
        },
    }))
}

/// `GET /health`
pub(crate) async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy", "service": SERVICE_NAME }))
}
