use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Errors a catalog request can end in.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or unknown API key.  Deliberately does not say which.
    #[error("Invalid or missing API Key. Please provide a valid API key in the X-API-Key header.")]
    Unauthorized,

    /// The resolver found neither an exact nor a substring match.
    #[error("No skills found for position: {position}. Try /api/positions to see available positions.")]
    NotFound { position: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
