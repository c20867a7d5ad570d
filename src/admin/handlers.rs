use axum::{extract::State, Json};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub status: &'static str,
    pub cache_enabled: bool,
    pub context_path: String,
}

#[derive(Serialize)]
pub struct CacheStats {
    pub entries: usize,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        cache_enabled: state.config.cache.enabled,
        context_path: state.config.assets.context_path.clone(),
    })
}

pub async fn get_cache(State(state): State<AppState>) -> Json<CacheStats> {
    Json(CacheStats {
        entries: state.cache.len(),
    })
}

pub async fn clear_cache(State(state): State<AppState>) -> Json<CacheStats> {
    state.cache.clear();
    tracing::info!("Cache cleared via admin endpoint");
    Json(CacheStats {
        entries: state.cache.len(),
    })
}
