//! Article catalog loaded from the static data file
//!
//! The catalog is read once, treated as immutable and shared behind an
//! `Arc`. Every article is addressable two ways:
//!
//! - by **index**, its position in the source array (the identity detail
//!   links and the article endpoint use)
//! - by **key**, a stable identifier derived from title, author and date
//!
//! # Usage
//!
//! ```no_run
//! use maleda::catalog::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load(Path::new("data/articles.json"))?;
//! for category in catalog.categories() {
//!     println!("{category}: {}", catalog.by_category(&category).len());
//! }
//! # Ok::<(), maleda::catalog::CatalogError>(())
//! ```

pub mod content;
pub mod render;
pub mod source;
pub mod topic;

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Article, ArticleKey, CatalogEntry};

pub use content::{parse_blocks, ContentBlock};
pub use render::ArticleRenderer;
pub use source::{ArticleSource, JsonFileSource, StaticSource};
pub use topic::{matches_topic, topic_name, topic_slug};

/// Errors raised while building or reading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Data file could not be read
    #[error("Failed to read article data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file is not a JSON array of articles
    #[error("Invalid article data: {0}")]
    Json(#[from] serde_json::Error),

    /// Detail template could not be registered or rendered
    #[error("Template error: {0}")]
    Template(String),
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Immutable, indexed article collection
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    keys: HashMap<ArticleKey, usize>,
    loaded_at: DateTime<Utc>,
}

impl Catalog {
    /// Build a catalog, assigning indices and stable keys in source order
    pub fn from_articles(articles: Vec<Article>) -> Self {
        let mut keys = HashMap::with_capacity(articles.len());
        let mut entries = Vec::with_capacity(articles.len());

        for (index, article) in articles.into_iter().enumerate() {
            let base = article.base_key();
            let mut key = ArticleKey::new(base.clone());
            let mut suffix = 2;
            while keys.contains_key(&key) {
                key = ArticleKey::new(format!("{base}-{suffix}"));
                suffix += 1;
            }
            if suffix > 2 {
                tracing::debug!(index, key = %key, "Duplicate article identity, key suffixed");
            }

            keys.insert(key.clone(), index);
            entries.push(CatalogEntry {
                index,
                key,
                article,
            });
        }

        Self {
            entries,
            keys,
            loaded_at: Utc::now(),
        }
    }

    /// Parse a JSON array of articles
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let articles: Vec<Article> = serde_json::from_str(json)?;
        Ok(Self::from_articles(articles))
    }

    /// Load the catalog from a JSON file
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), articles = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Load the catalog from a JSON file without blocking the runtime
    pub async fn load_async(path: &Path) -> CatalogResult<Self> {
        Self::from_source(&JsonFileSource::new(path)).await
    }

    /// Load the catalog from any article source
    pub async fn from_source(source: &dyn ArticleSource) -> CatalogResult<Self> {
        let articles = source.fetch().await?;
        let catalog = Self::from_articles(articles);
        tracing::info!(source = %source.describe(), articles = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Number of articles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no articles
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When the catalog was built
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// All entries in source order
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// All articles in source order
    pub fn articles(&self) -> impl Iterator<Item = &Article> {
        self.entries.iter().map(|e| &e.article)
    }

    /// Entry at a source position
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Entry by stable key
    pub fn get_by_key(&self, key: &str) -> Option<&CatalogEntry> {
        self.keys
            .get(&ArticleKey::new(key))
            .and_then(|&index| self.entries.get(index))
    }

    /// Distinct category labels in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.articles()
            .filter(|a| seen.insert(a.category.as_str()))
            .map(|a| a.category.clone())
            .collect()
    }

    /// Entries whose category equals `label` exactly
    pub fn by_category(&self, label: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| e.article.category == label)
            .collect()
    }

    /// One slug per distinct category
    pub fn topic_slugs(&self) -> Vec<String> {
        self.categories().iter().map(|c| topic_slug(c)).collect()
    }

    /// Category label a topic slug refers to, if any
    pub fn find_topic(&self, slug: &str) -> Option<String> {
        self.categories()
            .into_iter()
            .find(|c| matches_topic(c, slug))
    }

    /// Entries belonging to the topic named by `slug`
    pub fn by_topic(&self, slug: &str) -> Vec<&CatalogEntry> {
        self.entries
            .iter()
            .filter(|e| matches_topic(&e.article.category, slug))
            .collect()
    }
}
