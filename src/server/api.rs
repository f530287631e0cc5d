//! REST API handlers for the article catalog
//!
//! This module defines the API routes and handlers. Every handler reads the
//! shared immutable catalog; rankings are recomputed on each request.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{parse_blocks, topic_slug, ContentBlock};
use crate::feed::{self, tabs, FeedFilter, Tab};
use crate::models::CatalogEntry;
use crate::ranking::{rank_categories_with_scores, top_trending, CategoryScore, TrendingArticle};

use super::AppState;

// ============================================================================
// API Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Simple error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}

/// Body of the article endpoint's 404
#[derive(Debug, Serialize)]
pub struct NotFoundMessage {
    pub message: String,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub articles: usize,
    pub loaded_at: String,
}

/// Category listing entry
#[derive(Debug, Serialize)]
pub struct CategoryInfo {
    pub label: String,
    pub slug: String,
    pub articles: usize,
}

/// Ranked categories with the tab bar they produce
#[derive(Debug, Serialize)]
pub struct TrendingCategoriesResponse {
    pub categories: Vec<CategoryScore>,
    pub tabs: Vec<Tab>,
}

/// Topic page
#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub topic: String,
    pub category: String,
    pub slug: String,
    pub categories: Vec<String>,
    pub articles: Vec<CatalogEntry>,
}

/// Parsed article body
#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub index: usize,
    pub key: String,
    pub blocks: Vec<ContentBlock>,
}

/// One page of the feed
#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub tab: String,
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_more: bool,
    pub articles: Vec<CatalogEntry>,
}

/// `?limit=` query
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

/// `?tab=&page=&page_size=` query
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    pub tab: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

// ============================================================================
// API Routes
// ============================================================================

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/api/health", get(health_check))
        // Article endpoints
        .route("/api/articles/{index}", get(get_article))
        .route("/api/articles/{index}/content", get(get_article_content))
        .route("/api/articles/key/{key}", get(get_article_by_key))
        // Topic and category endpoints
        .route("/api/topic/{topic}", get(get_topic))
        .route("/api/categories", get(list_categories))
        .route("/api/categories/trending", get(trending_categories))
        // Sidebar and feed
        .route("/api/trending", get(trending_articles))
        .route("/api/feed", get(get_feed))
        // Metrics
        .route("/metrics", get(metrics_handler))
        .route_layer(middleware::from_fn(track_metrics))
        .with_state(state)
}

/// Record request count and latency per matched route
async fn track_metrics(request: Request, next: Next) -> Response {
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    crate::metrics::record_api_request(
        &endpoint,
        response.status().as_u16(),
        start.elapsed().as_secs_f64(),
    );
    response
}

fn not_found(message: impl Into<String>) -> Response {
    (StatusCode::NOT_FOUND, Json(ErrorResponse::new(message))).into_response()
}

// ============================================================================
// Health Handlers
// ============================================================================

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::success(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        articles: state.catalog.len(),
        loaded_at: state.catalog.loaded_at().to_rfc3339(),
    }))
}

// ============================================================================
// Article Handlers
// ============================================================================

/// Article by position, returned as the bare record
async fn get_article(State(state): State<AppState>, Path(index): Path<String>) -> Response {
    match index.parse::<usize>().ok().and_then(|i| state.catalog.get(i)) {
        Some(entry) => (StatusCode::OK, Json(entry.article.clone())).into_response(),
        None => {
            tracing::debug!(index = %index, "Article not found");
            (
                StatusCode::NOT_FOUND,
                Json(NotFoundMessage {
                    message: "Article not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Article by stable key
async fn get_article_by_key(State(state): State<AppState>, Path(key): Path<String>) -> Response {
    match state.catalog.get_by_key(&key) {
        Some(entry) => (StatusCode::OK, Json(ApiResponse::success(entry.clone()))).into_response(),
        None => not_found(format!("Article not found: {key}")),
    }
}

/// Parsed body of an article
async fn get_article_content(
    State(state): State<AppState>,
    Path(index): Path<String>,
) -> Response {
    let Some(entry) = index.parse::<usize>().ok().and_then(|i| state.catalog.get(i)) else {
        return not_found(format!("Article not found: {index}"));
    };

    let response = ContentResponse {
        index: entry.index,
        key: entry.key.to_string(),
        blocks: parse_blocks(&entry.article.content),
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

// ============================================================================
// Topic and Category Handlers
// ============================================================================

/// Articles of one topic, addressed by slug
async fn get_topic(State(state): State<AppState>, Path(topic): Path<String>) -> Response {
    let Some(category) = state.catalog.find_topic(&topic) else {
        return not_found(format!("Topic not found: {topic}"));
    };

    let response = TopicResponse {
        topic: crate::catalog::topic_name(&topic),
        slug: topic_slug(&category),
        category,
        categories: state.catalog.categories(),
        articles: state.catalog.by_topic(&topic).into_iter().cloned().collect(),
    };
    (StatusCode::OK, Json(ApiResponse::success(response))).into_response()
}

/// Distinct categories in order of first appearance
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let categories: Vec<CategoryInfo> = state
        .catalog
        .categories()
        .into_iter()
        .map(|label| CategoryInfo {
            slug: topic_slug(&label),
            articles: state.catalog.by_category(&label).len(),
            label,
        })
        .collect();

    Json(ApiResponse::success(categories))
}

/// Categories ranked by engagement
async fn trending_categories(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(state.feed.top_categories);
    let categories = rank_categories_with_scores(state.catalog.articles(), limit);
    let labels: Vec<String> = categories.iter().map(|c| c.category.clone()).collect();

    Json(ApiResponse::success(TrendingCategoriesResponse {
        tabs: tabs(&labels),
        categories,
    }))
}

// ============================================================================
// Sidebar and Feed Handlers
// ============================================================================

/// Trending sidebar
async fn trending_articles(
    State(state): State<AppState>,
    Query(query): Query<LimitQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(state.feed.trending_limit);
    let trending: Vec<TrendingArticle> = top_trending(state.catalog.entries(), limit);
    Json(ApiResponse::success(trending))
}

/// One page of the feed for a tab
async fn get_feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> impl IntoResponse {
    let tab = query.tab.unwrap_or_else(|| feed::ALL_TAB.to_string());
    let filter = FeedFilter::tab(&tab);
    let page_size = query.page_size.unwrap_or(state.feed.page_size);
    let result = feed::page(&state.catalog, &filter, query.page.unwrap_or(0), page_size);

    Json(ApiResponse::success(FeedResponse {
        tab,
        page: result.page,
        page_size: result.page_size,
        total: result.total,
        has_more: result.has_more,
        articles: result.entries.into_iter().cloned().collect(),
    }))
}

// ============================================================================
// Metrics Handler
// ============================================================================

/// Prometheus text exposition
async fn metrics_handler() -> Response {
    match crate::metrics::encode_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode metrics");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to encode metrics")),
            )
                .into_response()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
