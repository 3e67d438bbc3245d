//! End-to-end delivery tests against a running server.

use std::time::Duration;

use docs_server::config::{RuntimeMode, ServerConfig};
use docs_server::metric::MetricCache;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION};
use reqwest::StatusCode;

mod common;

fn config(runtime: RuntimeMode) -> ServerConfig {
    let mut config = ServerConfig {
        runtime,
        ..ServerConfig::default()
    };
    config.stars.enabled = false;
    config
}

async fn start(runtime: RuntimeMode) -> common::TestServer {
    common::start_server(config(runtime), MetricCache::new(Duration::from_secs(3600))).await
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_plain_navigation_gets_full_document() {
    let server = start(RuntimeMode::Development).await;

    let response = client().get(server.url("/docs/themes")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).unwrap(),
        "text/html; charset=utf-8"
    );

    let body = response.text().await.unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    for id in ["title", "header", "sidebar", "content", "toc", "footer"] {
        assert!(body.contains(&format!("id=\"{}\"", id)), "missing {}", id);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_marked_request_gets_fragments_in_order() {
    let server = start(RuntimeMode::Development).await;

    let body = client()
        .get(server.url("/docs/themes"))
        .header("HX-Request", "true")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let content = body.find("<main id=\"content\">").unwrap();
    let toc = body.find("<nav id=\"toc\" hx-swap-oob=\"true\">").unwrap();
    let title = body.find("<title id=\"title\" hx-swap-oob=\"true\">").unwrap();
    assert_eq!(content, 0);
    assert!(toc > content && title > toc);
    assert!(!body.contains("id=\"sidebar\""));
    assert!(!body.contains("id=\"footer\""));

    server.stop().await;
}

#[tokio::test]
async fn test_marker_value_must_be_true() {
    let server = start(RuntimeMode::Development).await;

    let body = client()
        .get(server.url("/docs/themes"))
        .header("HX-Request", "false")
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));

    server.stop().await;
}

#[tokio::test]
async fn test_undefined_path_is_404_in_both_modes() {
    let server = start(RuntimeMode::Development).await;

    let full = client().get(server.url("/no/such/page")).send().await.unwrap();
    assert_eq!(full.status(), StatusCode::NOT_FOUND);
    let body = full.text().await.unwrap();
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Page not found"));

    let fragment = client()
        .get(server.url("/no/such/page"))
        .header("HX-Request", "true")
        .send()
        .await
        .unwrap();
    assert_eq!(fragment.status(), StatusCode::NOT_FOUND);
    let body = fragment.text().await.unwrap();
    assert!(body.starts_with("<main id=\"content\">"));
    assert!(body.contains("Page not found"));

    server.stop().await;
}

#[tokio::test]
async fn test_docs_root_redirects() {
    let server = start(RuntimeMode::Development).await;

    let response = client().get(server.url("/docs")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), "/docs/introduction");

    server.stop().await;
}

#[tokio::test]
async fn test_toast_duration_parsing() {
    let server = start(RuntimeMode::Development).await;

    let body = client()
        .post(server.url("/docs/toast/demo"))
        .form(&[("title", "Hello"), ("duration", "abc")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("data-tui-toast-duration=\"0\""));

    let body = client()
        .post(server.url("/docs/toast/demo"))
        .form(&[("title", "Hello"), ("duration", "500"), ("type", "error")])
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("data-tui-toast-duration=\"500\""));
    assert!(body.contains("toast-error"));

    server.stop().await;
}

#[tokio::test]
async fn test_stream_endpoint_pushes_modal() {
    let server = start(RuntimeMode::Production).await;

    let response = client()
        .get(server.url("/api/load-datepicker"))
        .header("HX-Request", "true")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");

    let body = response.text().await.unwrap();
    assert_eq!(body.matches("event: datastar-merge-fragments").count(), 1);
    assert!(body.contains("data: useViewTransition true"));
    assert!(body.contains("id=\"modal-default\""));

    server.stop().await;
}

#[tokio::test]
async fn test_htmx_showcase_fragments() {
    let server = start(RuntimeMode::Development).await;

    let body = client()
        .get(server.url("/api/load-modal-htmx"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(!body.contains("<!DOCTYPE"));
    assert!(body.contains("id=\"modal-default\""));

    server.stop().await;
}

#[tokio::test]
async fn test_cache_control_per_runtime() {
    let dev = start(RuntimeMode::Development).await;
    let response = client().get(dev.url("/")).send().await.unwrap();
    assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-store");
    dev.stop().await;

    let prod = start(RuntimeMode::Production).await;
    let response = client().get(prod.url("/")).send().await.unwrap();
    assert_eq!(
        response.headers().get(CACHE_CONTROL).unwrap(),
        "public, max-age=31536000"
    );
    prod.stop().await;
}

#[tokio::test]
async fn test_every_response_has_request_id() {
    let server = start(RuntimeMode::Development).await;

    for path in ["/", "/missing", "/docs"] {
        let response = client().get(server.url(path)).send().await.unwrap();
        assert!(response.headers().contains_key("x-request-id"), "no id on {}", path);
    }

    server.stop().await;
}

#[tokio::test]
async fn test_missing_static_files_are_plain_404() {
    let mut config = config(RuntimeMode::Development);
    config.assets.static_dir = "/nonexistent/docs-server-static".to_string();
    config.assets.asset_dir = "/nonexistent/docs-server-assets".to_string();
    let server = common::start_server(config, MetricCache::new(Duration::from_secs(3600))).await;

    let response = client().get(server.url("/sitemap.xml")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Sitemap not found");

    let response = client().get(server.url("/favicon.ico")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.text().await.unwrap(), "Favicon not found");

    server.stop().await;
}

#[tokio::test]
async fn test_assets_are_served_from_disk() {
    let root = std::env::temp_dir().join(format!("docs-server-it-{}", uuid::Uuid::new_v4()));
    let assets = root.join("assets");
    let statics = root.join("static");
    tokio::fs::create_dir_all(assets.join("css")).await.unwrap();
    tokio::fs::create_dir_all(&statics).await.unwrap();
    tokio::fs::write(assets.join("css").join("output.css"), "body{}").await.unwrap();
    tokio::fs::write(statics.join("robots.txt"), "User-agent: *").await.unwrap();

    let mut config = config(RuntimeMode::Development);
    config.assets.asset_dir = assets.display().to_string();
    config.assets.static_dir = statics.display().to_string();
    let server = common::start_server(config, MetricCache::new(Duration::from_secs(3600))).await;

    let response = client().get(server.url("/assets/css/output.css")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "body{}");

    let response = client().get(server.url("/robots.txt")).send().await.unwrap();
    assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
    assert_eq!(response.text().await.unwrap(), "User-agent: *");

    server.stop().await;
    tokio::fs::remove_dir_all(&root).await.unwrap();
}
