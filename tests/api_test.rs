//! Tests for the HTTP API

mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use maleda::config::{FeedConfig, ServerConfig};
use maleda::server::{create_router, ApiServer, AppState};

use common::sample_catalog;

fn router() -> Router {
    create_router(AppState::new(sample_catalog(), FeedConfig::default()))
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(router(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["articles"], 7);
}

#[tokio::test]
async fn test_article_by_index_returns_raw_record() {
    let (status, body) = get(router(), "/api/articles/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Feature stores");
    assert_eq!(body["readTime"], "3 min read");
    assert!(body.get("success").is_none());
}

#[tokio::test]
async fn test_article_not_found() {
    for uri in ["/api/articles/7", "/api/articles/abc", "/api/articles/-1"] {
        let (status, body) = get(router(), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["message"], "Article not found");
    }
}

#[tokio::test]
async fn test_article_by_key() {
    let catalog = sample_catalog();
    let key = catalog.get(6).unwrap().key.to_string();

    let (status, body) = get(router(), &format!("/api/articles/key/{key}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["index"], 6);
    assert_eq!(body["data"]["title"], "CLI tools");

    let (status, _) = get(router(), "/api/articles/key/000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_article_content_blocks() {
    let (status, body) = get(router(), "/api/articles/0/content").await;
    assert_eq!(status, StatusCode::OK);

    let blocks = body["data"]["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0]["type"], "heading");
    assert_eq!(blocks[2]["type"], "list_item");
}

#[tokio::test]
async fn test_topic() {
    let (status, body) = get(router(), "/api/topic/data-science").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["topic"], "data science");
    assert_eq!(body["data"]["category"], "Data Science");
    assert_eq!(body["data"]["categories"].as_array().unwrap().len(), 4);

    let articles = body["data"]["articles"].as_array().unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0]["index"], 3);
}

#[tokio::test]
async fn test_unknown_topic() {
    let (status, body) = get(router(), "/api/topic/politics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_categories_in_first_appearance_order() {
    let (_, body) = get(router(), "/api/categories").await;
    let labels: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["AI", "Tech", "Data Science", "Cybersecurity"]);
    assert_eq!(body["data"][2]["slug"], "data-science");
}

#[tokio::test]
async fn test_trending_categories() {
    let (status, body) = get(router(), "/api/categories/trending?limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["categories"][0]["category"], "Tech");
    assert_eq!(body["data"]["categories"][0]["engagement_score"], 59_500.0);
    assert_eq!(body["data"]["categories"][1]["category"], "AI");
    assert_eq!(body["data"]["tabs"].as_array().unwrap().len(), 3);
    assert_eq!(body["data"]["tabs"][0]["value"], "all");
}

#[tokio::test]
async fn test_trending_sidebar_default_limit() {
    let (_, body) = get(router(), "/api/trending").await;
    let indices: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["index"].as_u64().unwrap())
        .collect();
    assert_eq!(indices, vec![3, 0, 6]);
}

#[tokio::test]
async fn test_feed_pages() {
    let (_, first) = get(router(), "/api/feed?tab=tech&page=0&page_size=2").await;
    assert_eq!(first["data"]["total"], 3);
    assert_eq!(first["data"]["has_more"], true);
    assert_eq!(first["data"]["articles"].as_array().unwrap().len(), 2);

    let (_, second) = get(router(), "/api/feed?tab=tech&page=1&page_size=2").await;
    assert_eq!(second["data"]["has_more"], false);
    assert_eq!(second["data"]["articles"][0]["index"], 6);
}

#[tokio::test]
async fn test_feed_defaults_to_all_tab() {
    let (_, body) = get(router(), "/api/feed").await;
    assert_eq!(body["data"]["tab"], "all");
    assert_eq!(body["data"]["total"], 7);
    assert_eq!(body["data"]["page_size"], 5);
}

#[tokio::test]
async fn test_metrics_endpoint() {
    maleda::metrics::init_metrics().unwrap();
    let _ = get(router(), "/api/health").await;

    let response = router()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("maleda_api_requests_total"));
}

#[tokio::test]
async fn test_server_router_with_layers() {
    let server = ApiServer::new(
        ServerConfig::default(),
        FeedConfig::default(),
        sample_catalog(),
    )
    .unwrap();

    let response = server
        .build_router()
        .oneshot(Request::builder().uri("/api/trending").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
