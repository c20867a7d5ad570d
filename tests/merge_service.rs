//! End-to-end tests for the combined asset service.

mod common;

use asset_combiner::lifecycle::Shutdown;

#[tokio::test]
async fn test_combines_scripts_in_request_order() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(common::test_config(dir.path(), ""), &shutdown).await;

    let res = reqwest::get(format!("http://{}/js/a,b.js", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.headers()["content-type"], "text/javascript");
    assert_eq!(res.text().await.unwrap(), "var a = 1;\nvar b = 2;\n");

    shutdown.trigger();
}

#[tokio::test]
async fn test_context_path_is_stripped_before_resolution() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(common::test_config(dir.path(), "/app"), &shutdown).await;

    let res = reqwest::get(format!("http://{}/app/js/a,b.js", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "var a = 1;\nvar b = 2;\n");

    shutdown.trigger();
}

#[tokio::test]
async fn test_relative_parent_segment_walks_up() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(common::test_config(dir.path(), ""), &shutdown).await;

    let res = reqwest::get(format!("http://{}/css/x,../y.css", addr))
        .await
        .unwrap();
    assert_eq!(res.headers()["content-type"], "text/css");
    assert_eq!(
        res.text().await.unwrap(),
        ".x { color: red; }\n.y { color: blue; }\n"
    );

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_resource_is_silently_skipped() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(common::test_config(dir.path(), ""), &shutdown).await;

    let res = reqwest::get(format!("http://{}/js/missing,b.js", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "var b = 2;\n");

    shutdown.trigger();
}

#[tokio::test]
async fn test_cached_response_survives_file_change() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(common::test_config(dir.path(), ""), &shutdown).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/js/a.js", addr);

    let first = client.get(&url).send().await.unwrap();
    assert_eq!(first.headers()["x-cache"], "MISS");
    assert_eq!(first.text().await.unwrap(), "var a = 1;\n");

    std::fs::write(dir.path().join("js/a.js"), "var a = 2;\n").unwrap();

    // Cache hit still serves the old content without touching disk.
    let second = client.get(&url).send().await.unwrap();
    assert_eq!(second.headers()["x-cache"], "HIT");
    assert_eq!(second.text().await.unwrap(), "var a = 1;\n");

    // Bypassing the cache sees the new content and leaves the cache alone.
    let skipped = client
        .get(format!("{}?_skipcache_=1", url))
        .send()
        .await
        .unwrap();
    assert_eq!(skipped.headers()["x-cache"], "MISS");
    assert_eq!(skipped.text().await.unwrap(), "var a = 2;\n");

    // Clearing the cache forces a fresh merge for everyone.
    let cleared = client
        .get(format!("{}?_expirecache_=1", url))
        .send()
        .await
        .unwrap();
    assert_eq!(cleared.headers()["x-cache"], "MISS");
    assert_eq!(cleared.text().await.unwrap(), "var a = 2;\n");

    let after = client.get(&url).send().await.unwrap();
    assert_eq!(after.headers()["x-cache"], "HIT");
    assert_eq!(after.text().await.unwrap(), "var a = 2;\n");

    shutdown.trigger();
}

#[tokio::test]
async fn test_admin_endpoints_require_bearer_token() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let mut config = common::test_config(dir.path(), "");
    config.admin.enabled = true;
    config.admin.api_key = "test-key".into();
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(config, &shutdown).await;
    let client = reqwest::Client::new();

    let unauthorized = client
        .get(format!("http://{}/admin/status", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthorized.status(), 401);

    let status = client
        .get(format!("http://{}/admin/status", addr))
        .bearer_auth("test-key")
        .send()
        .await
        .unwrap();
    assert_eq!(status.status(), 200);
    let body: serde_json::Value = status.json().await.unwrap();
    assert_eq!(body["status"], "operational");

    shutdown.trigger();
}

#[tokio::test]
async fn test_admin_cache_clear_evicts_entries() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let mut config = common::test_config(dir.path(), "");
    config.admin.enabled = true;
    config.admin.api_key = "test-key".into();
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(config, &shutdown).await;
    let client = reqwest::Client::new();
    let asset_url = format!("http://{}/js/a,b.js", addr);

    client.get(&asset_url).send().await.unwrap();

    let stats: serde_json::Value = client
        .get(format!("http://{}/admin/cache", addr))
        .bearer_auth("test-key")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(stats["entries"], 1);

    let cleared: serde_json::Value = client
        .delete(format!("http://{}/admin/cache", addr))
        .bearer_auth("test-key")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(cleared["entries"], 0);

    let refetched = client.get(&asset_url).send().await.unwrap();
    assert_eq!(refetched.headers()["x-cache"], "MISS");

    shutdown.trigger();
}

#[tokio::test]
async fn test_unrecognized_extension_is_not_served() {
    let dir = tempfile::tempdir().unwrap();
    common::write_assets(dir.path());
    let shutdown = Shutdown::new();
    let addr = common::spawn_combiner(common::test_config(dir.path(), ""), &shutdown).await;

    let res = reqwest::get(format!("http://{}/js/a.exe", addr))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    shutdown.trigger();
}
