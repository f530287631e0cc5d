//! maleda - article catalog, engagement ranking and feed pagination
//!
//! Serves a static collection of articles grouped by category: a tab bar of
//! the most engaging categories, an incrementally loaded feed, a trending
//! sidebar and per-article detail pages.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`] - Article record and stable keys
//! - [`catalog`] - Loading, indexing and rendering of the article collection
//! - [`ranking`] - Count parsing, trending scores and category ranking
//! - [`feed`] - Tab filters, the paginator and scroll-driven loading
//! - [`server`] - Read-only HTTP API
//! - [`config`] - Configuration management and settings
//! - [`metrics`] - Prometheus metrics
//! - [`error`] - Unified error type
//!
//! # Example
//!
//! ```no_run
//! use maleda::catalog::Catalog;
//! use maleda::ranking::{rank_categories, top_trending};
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("data/articles.json"))?;
//! let tabs = rank_categories(catalog.articles(), 5);
//! let sidebar = top_trending(catalog.entries(), 3);
//! println!("{tabs:?} {}", sidebar.len());
//! # Ok::<(), maleda::catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod models;
pub mod ranking;
pub mod server;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogError};
    pub use crate::config::Config;
    pub use crate::error::{Error, ErrorCategory, MaledaErrorTrait, Result};
    pub use crate::feed::{FeedFilter, LoadOutcome, Paginator, PaginatorState, SentinelTrigger};
    pub use crate::models::{Article, ArticleKey, CatalogEntry};
    pub use crate::ranking::{rank_categories, score, top_trending};
}

// Direct re-exports for convenience
pub use models::{Article, ArticleKey, CatalogEntry};
