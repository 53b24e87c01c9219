use std::collections::HashSet;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware,
    response::IntoResponse,
};
use tracing::debug;

use super::{ApiError, AppState};
use crate::config::ConfigError;

/// Request header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// The set of accepted API keys.  Membership is the whole trust decision.
#[derive(Clone)]
pub struct ApiKeySet {
    keys: HashSet<String>,
}

impl std::fmt::Debug for ApiKeySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeySet")
            .field("count", &self.keys.len())
            .finish()
    }
}

impl ApiKeySet {
    /// Parse a comma-separated key list.  Segments are trimmed, empty ones
    /// dropped and duplicates collapsed; an empty result is an error.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let keys: HashSet<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from)
            .collect();

        if keys.is_empty() {
            return Err(ConfigError::NoApiKeys);
        }
        Ok(Self { keys })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Accept `presented` iff it is a non-empty, exactly matching key.
    pub fn authenticate(&self, presented: Option<&str>) -> Result<(), ApiError> {
        match presented {
            Some(key) if !key.is_empty() && self.keys.contains(key) => Ok(()),
            _ => Err(ApiError::Unauthorized),
        }
    }
}

pub(crate) async fn auth_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: middleware::Next,
) -> impl IntoResponse {
    let presented = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());
    let has_key = presented.is_some();

    match state.api_keys.authenticate(presented) {
        Ok(()) => next.run(req).await,
        Err(e) => {
            debug!(path = %req.uri().path(), has_key, "rejected request");
            e.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_drops_empty_segments() {
        let set = ApiKeySet::parse(" sk_a , ,sk_b,,sk_a ").unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.authenticate(Some("sk_a")).is_ok());
        assert!(set.authenticate(Some("sk_b")).is_ok());
    }

    #[test]
    fn parse_rejects_blank_input() {
        assert!(matches!(ApiKeySet::parse(""), Err(ConfigError::NoApiKeys)));
        assert!(matches!(ApiKeySet::parse(" , ,"), Err(ConfigError::NoApiKeys)));
    }

    #[test]
    fn authenticate_is_exact_and_case_sensitive() {
        let set = ApiKeySet::parse("sk_abc").unwrap();
        assert!(set.authenticate(Some("sk_abc")).is_ok());
        assert!(matches!(set.authenticate(Some("SK_ABC")), Err(ApiError::Unauthorized)));
        assert!(matches!(set.authenticate(Some("sk_abc ")), Err(ApiError::Unauthorized)));
        assert!(matches!(set.authenticate(Some("sk_wrong")), Err(ApiError::Unauthorized)));
    }

    #[test]
    fn missing_and_empty_keys_are_rejected() {
        let set = ApiKeySet::parse("sk_abc").unwrap();
        assert!(matches!(set.authenticate(None), Err(ApiError::Unauthorized)));
        assert!(matches!(set.authenticate(Some("")), Err(ApiError::Unauthorized)));
    }
}
