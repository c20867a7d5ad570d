//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with the combine and admin handlers
//! - Wire up middleware (tracing, timeout, request ID)
//! - Derive cache flags from query parameters
//! - Write MIME and client-caching headers
//! - Graceful shutdown on Ctrl+C or a programmatic trigger

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    http::{header, HeaderName, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin;
use crate::config::CombinerConfig;
use crate::fetch::{FsFetcher, ResourceFetcher};
use crate::merge::cache::MergeCache;
use crate::merge::orchestrator::{self, MergeRequest};
use crate::observability::metrics;
use crate::resolve::extension::Extension;

/// Query parameter that bypasses the cache for one request.
const PARAM_SKIP_CACHE: &str = "_skipcache_";
/// Alias for [`PARAM_SKIP_CACHE`] used while debugging pages.
const PARAM_DEBUG: &str = "_dbg_";
/// Query parameter that clears the whole cache before serving.
const PARAM_EXPIRE_CACHE: &str = "_expirecache_";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub cache: MergeCache,
    pub fetcher: Arc<dyn ResourceFetcher>,
    pub config: Arc<CombinerConfig>,
}

/// HTTP server for the combiner service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server reading assets from the configured
    /// document root.
    pub fn new(config: CombinerConfig) -> Self {
        let fetcher = Arc::new(FsFetcher::new(config.assets.root_dir.clone()));
        Self::with_fetcher(config, fetcher)
    }

    /// Create a server around a custom resource lookup.
    pub fn with_fetcher(config: CombinerConfig, fetcher: Arc<dyn ResourceFetcher>) -> Self {
        let state = AppState {
            cache: MergeCache::new(),
            fetcher,
            config: Arc::new(config),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let request_timeout = Duration::from_secs(state.config.timeouts.request_secs);
        let admin_enabled = state.config.admin.enabled;

        let mut router = Router::new()
            .route("/{*path}", get(combine_handler))
            .with_state(state.clone());

        if admin_enabled {
            router = router.merge(admin::admin_router(state));
        }

        router
            .layer(TimeoutLayer::new(request_timeout))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main combine handler: derive cache flags, run the merge, write
/// content headers.
async fn combine_handler(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    uri: Uri,
) -> Response {
    let start = Instant::now();
    let path = uri.path();

    let Some(extension) = Extension::detect(path) else {
        tracing::debug!(path = %path, "Unrecognized resource extension");
        metrics::record_request("none", 404, start);
        return (StatusCode::NOT_FOUND, "Unrecognized resource extension").into_response();
    };

    let clear_cache = params.contains_key(PARAM_EXPIRE_CACHE);
    let skip_cache = params.contains_key(PARAM_SKIP_CACHE) || params.contains_key(PARAM_DEBUG);
    let cache_enabled = state.config.cache.enabled && !skip_cache;

    let request = MergeRequest {
        request_path: path,
        context_prefix: &state.config.assets.context_path,
        cache_enabled,
        clear_cache,
    };
    let outcome = orchestrator::serve(&state.cache, state.fetcher.as_ref(), &request);

    tracing::debug!(
        path = %path,
        cache_hit = outcome.cache_hit,
        resources = outcome.resources,
        bytes = outcome.content.len(),
        "Serving combined response"
    );
    metrics::record_request(extension.label(), 200, start);

    let max_age = state.config.headers.expires_minutes * 60;
    (
        [
            (header::CONTENT_TYPE, extension.mime().to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", max_age),
            ),
            (
                HeaderName::from_static("x-cache"),
                if outcome.cache_hit { "HIT" } else { "MISS" }.to_string(),
            ),
        ],
        outcome.content,
    )
        .into_response()
}

/// Wait for Ctrl+C or a programmatic shutdown trigger.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
