//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the
//! service. All types derive Serde traits for deserialization from
//! config files, and every section has defaults so a minimal config
//! works out of the box.

use serde::{Deserialize, Serialize};

/// Root configuration for the combiner service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct CombinerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Where assets live and how request paths map onto them.
    pub assets: AssetConfig,

    /// Merged-response cache settings.
    pub cache: CacheConfig,

    /// Response header settings.
    pub headers: HeaderConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Admin endpoint settings.
    pub admin: AdminConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Asset location configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Document root that resolved locations are read from.
    pub root_dir: String,

    /// Context prefix stripped from every request path before
    /// resolution (e.g. "/app"). Empty means the service is mounted at
    /// the root.
    pub context_path: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root_dir: "./public".to_string(),
            context_path: String::new(),
        }
    }
}

/// Merged-response cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Serve repeat requests from the in-memory cache. Individual
    /// requests can still bypass it with the `_skipcache_` parameter.
    pub enabled: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Response header configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Client cache lifetime in minutes, emitted as
    /// `Cache-Control: public, max-age=...`.
    pub expires_minutes: u64,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        // Seven days.
        Self {
            expires_minutes: 7 * 24 * 60,
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Expose Prometheus metrics.
    pub metrics_enabled: bool,

    /// Metrics exporter bind address.
    pub metrics_address: String,

    /// Default tracing filter, overridable via RUST_LOG.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
            log_filter: "asset_combiner=info,tower_http=info".to_string(),
        }
    }
}

/// Admin endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Enable the /admin endpoints.
    pub enabled: bool,

    /// API key for authentication (Bearer token).
    pub api_key: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key: String::new(),
        }
    }
}
