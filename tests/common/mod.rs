//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use asset_combiner::config::CombinerConfig;
use asset_combiner::http::HttpServer;
use asset_combiner::lifecycle::Shutdown;

/// Write a small asset tree under `root`.
pub fn write_assets(root: &Path) {
    std::fs::create_dir_all(root.join("js")).unwrap();
    std::fs::create_dir_all(root.join("css")).unwrap();
    std::fs::write(root.join("js/a.js"), "var a = 1;\n").unwrap();
    std::fs::write(root.join("js/b.js"), "var b = 2;\n").unwrap();
    std::fs::write(root.join("css/x.css"), ".x { color: red; }\n").unwrap();
    std::fs::write(root.join("y.css"), ".y { color: blue; }\n").unwrap();
}

/// Config pointing at `root`, with everything else at defaults.
pub fn test_config(root: &Path, context_path: &str) -> CombinerConfig {
    let mut config = CombinerConfig::default();
    config.assets.root_dir = root.display().to_string();
    config.assets.context_path = context_path.to_string();
    config
}

/// Spawn a combiner server on an OS-assigned port and return its address.
pub async fn spawn_combiner(config: CombinerConfig, shutdown: &Shutdown) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);
    let rx = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    addr
}
