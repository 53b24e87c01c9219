//! HTTP gateway.
//!
//! Serves:
//! - `GET /`                       — banner with the endpoint map
//! - `GET /health`                 — liveness probe
//! - `GET /api/positions`          — canonical position names
//! - `GET /api/skills/:position`   — skills for one position
//! - `GET /api/suggestions?q=`     — position name suggestions
//! - `GET /api/categories`         — positions grouped by category
//! - `GET /api/all-jobs`           — category → position → skills
//!
//! Everything under `/api` requires a valid `X-API-Key` header.

pub mod auth;
mod error;
mod handlers;

use axum::{middleware, routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::catalog::categories::CategoryIndex;
use crate::catalog::Catalog;
pub use auth::{ApiKeySet, API_KEY_HEADER};
pub use error::ApiError;

// ---------------------------------------------------------------------------
// Shared state injected into axum handlers
// ---------------------------------------------------------------------------

/// Everything a request handler can see.  Built once at startup, never
/// mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub categories: Arc<CategoryIndex>,
    pub api_keys: Arc<ApiKeySet>,
}

impl AppState {
    pub fn new(catalog: Catalog, categories: CategoryIndex, api_keys: ApiKeySet) -> Self {
        Self {
            catalog: Arc::new(catalog),
            categories: Arc::new(categories),
            api_keys: Arc::new(api_keys),
        }
    }

    /// Built-in catalog and categories with the given keys.
    pub fn builtin(api_keys: ApiKeySet) -> Self {
        Self::new(Catalog::builtin(), CategoryIndex::builtin(), api_keys)
    }
}

/// Which origins may call the API from a browser.
#[derive(Debug, Clone, Default)]
pub enum CorsPolicy {
    /// Any origin, credentials allowed.
    #[default]
    Permissive,
    /// Only the listed origins.
    Origins(Vec<axum::http::HeaderValue>),
}

impl CorsPolicy {
    fn layer(&self) -> CorsLayer {
        match self {
            CorsPolicy::Permissive => CorsLayer::very_permissive(),
            CorsPolicy::Origins(list) => CorsLayer::new()
                .allow_origin(AllowOrigin::list(list.clone()))
                .allow_methods(Any)
                .allow_headers(Any),
        }
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the full application router.
pub fn router(state: AppState, cors: &CorsPolicy) -> Router {
    let api_router = Router::new()
        .route("/positions", get(handlers::positions::api_positions_list))
        .route("/skills/:position", get(handlers::skills::api_skills_for_position))
        .route("/suggestions", get(handlers::positions::api_suggestions))
        .route("/categories", get(handlers::categories::api_categories))
        .route("/all-jobs", get(handlers::categories::api_all_jobs))
        .layer(middleware::from_fn_with_state(state.clone(), auth::auth_middleware));

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .nest("/api", api_router)
        .with_state(state)
        .layer(cors.layer())
        .layer(TraceLayer::new_for_http())
}

// ---------------------------------------------------------------------------
// Gateway handle
// ---------------------------------------------------------------------------

/// Handle returned by [`start_gateway`].
pub struct Gateway {
    /// Server task handle.
    pub handle: JoinHandle<()>,
    /// The address the server is actually listening on.
    pub addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
}

impl Gateway {
    /// Stop accepting connections and wait for in-flight requests.
    pub async fn shutdown(self) {
        let _ = self.shutdown_tx.send(());
        if let Err(e) = self.handle.await {
            error!("gateway task failed: {e}");
        }
    }
}

/// Start the gateway HTTP server on `addr`.
///
/// Binding to port 0 picks a free port; the chosen address is in
/// [`Gateway::addr`].
pub async fn start_gateway(
    addr: SocketAddr,
    state: AppState,
    cors: &CorsPolicy,
) -> std::io::Result<Gateway> {
    let app = router(state, cors);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let bound_addr = listener.local_addr()?;
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            error!("gateway server error: {e}");
        }
    });

    info!(%bound_addr, "gateway started");

    Ok(Gateway {
        handle,
        addr: bound_addr,
        shutdown_tx,
    })
}
