//! Admin endpoints: status and cache management.
//!
//! # Design Decisions
//! - Bearer-token auth on every admin route
//! - Disabled by default; enabling requires an api_key (enforced by
//!   config validation)

pub mod auth;
pub mod handlers;

use axum::{middleware, routing::get, Router};

use self::auth::admin_auth_middleware;
use self::handlers::{clear_cache, get_cache, get_status};
use crate::http::server::AppState;

/// Build the /admin router with auth applied.
pub fn admin_router(state: AppState) -> Router {
    Router::new()
        .route("/admin/status", get(get_status))
        .route("/admin/cache", get(get_cache).delete(clear_cache))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            admin_auth_middleware,
        ))
        .with_state(state)
}
