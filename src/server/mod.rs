//! Read-only HTTP API over the article catalog
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │               API Server                 │
//! │                                          │
//! │  Arc<Catalog>  (loaded once, immutable)  │
//! │        │                                 │
//! │        ├── ranking  (recomputed per hit) │
//! │        └── feed     (stateless pages)    │
//! │                                          │
//! │  GET /api/articles/{index}               │
//! │  GET /api/topic/{topic}                  │
//! │  GET /api/categories/trending            │
//! │  GET /api/trending                       │
//! │  GET /api/feed                           │
//! └──────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use maleda::server::ApiServer;
//!
//! let server = ApiServer::new(config.server, config.feed, catalog)?;
//! server.start().await?;
//! ```

pub mod api;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::Catalog;
use crate::config::{FeedConfig, ServerConfig};

pub use api::create_router;

// ============================================================================
// App State
// ============================================================================

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Loaded article catalog
    pub catalog: Arc<Catalog>,

    /// Feed and ranking defaults
    pub feed: FeedConfig,

    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>, feed: FeedConfig) -> Self {
        Self {
            catalog,
            feed,
            start_time: Instant::now(),
        }
    }
}

// ============================================================================
// API Server
// ============================================================================

/// Main API server
pub struct ApiServer {
    config: ServerConfig,
    state: AppState,
}

impl ApiServer {
    /// Create a new API server
    pub fn new(
        config: ServerConfig,
        feed: FeedConfig,
        catalog: Arc<Catalog>,
    ) -> Result<Self, ServerError> {
        if feed.page_size == 0 {
            return Err(ServerError::Config("page_size must be greater than 0".to_string()));
        }

        crate::metrics::set_catalog_size(catalog.len());

        Ok(Self {
            config,
            state: AppState::new(catalog, feed),
        })
    }

    /// Get the application state
    pub fn state(&self) -> AppState {
        self.state.clone()
    }

    /// Build the router with all routes
    pub fn build_router(&self) -> Router {
        let mut router = create_router(self.state.clone());

        // Add CORS layer if enabled
        if self.config.enable_cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        // Add tracing layer if enabled
        if self.config.enable_request_logging {
            router = router.layer(TraceLayer::new_for_http());
        }

        router
    }

    /// Serve until the process is stopped
    pub async fn start(&self) -> Result<(), ServerError> {
        self.start_with_shutdown(std::future::pending()).await
    }

    /// Serve until `shutdown_signal` resolves, then drain open connections
    pub async fn start_with_shutdown(
        &self,
        shutdown_signal: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<(), ServerError> {
        let listener = self.bind().await?;
        tracing::info!(
            addr = %self.config.bind_address,
            articles = self.state.catalog.len(),
            "API server listening"
        );

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(shutdown_signal)
            .await
            .map_err(|e| ServerError::Serve(e.to_string()))?;

        tracing::info!("API server stopped");
        Ok(())
    }

    async fn bind(&self) -> Result<tokio::net::TcpListener, ServerError> {
        let addr = self.config.bind_address;
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind(format!("{addr}: {e}")))
    }

    /// Get server info
    pub fn info(&self) -> ServerInfo {
        ServerInfo {
            bind_address: self.config.bind_address,
            articles: self.state.catalog.len(),
            categories: self.state.catalog.categories().len(),
            page_size: self.state.feed.page_size,
            cors_enabled: self.config.enable_cors,
            request_logging_enabled: self.config.enable_request_logging,
        }
    }
}

/// Server information
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub bind_address: SocketAddr,
    pub articles: usize,
    pub categories: usize,
    pub page_size: usize,
    pub cors_enabled: bool,
    pub request_logging_enabled: bool,
}

impl ServerInfo {
    /// Format as display string
    pub fn display(&self) -> String {
        format!(
            "maleda API Server\n\
             {:-<40}\n\
             Bind Address: {}\n\
             Articles: {}\n\
             Categories: {}\n\
             Page Size: {}\n\
             CORS: {}\n\
             Request Logging: {}",
            "",
            self.bind_address,
            self.articles,
            self.categories,
            self.page_size,
            if self.cors_enabled { "enabled" } else { "disabled" },
            if self.request_logging_enabled { "enabled" } else { "disabled" }
        )
    }
}

// ============================================================================
// Server Errors
// ============================================================================

/// Server errors
#[derive(Debug, Clone, Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to bind to address
    #[error("Failed to bind: {0}")]
    Bind(String),

    /// Server error
    #[error("Server error: {0}")]
    Serve(String),
}

// ============================================================================
// Tests
// ============================================================================
