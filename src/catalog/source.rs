//! Article sources
//!
//! The catalog does not care where articles come from; anything that can
//! produce the full article array once per load implements [`ArticleSource`].

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::models::Article;

use super::{CatalogError, CatalogResult};

/// Something that yields the complete, ordered article collection
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch every article in source order
    async fn fetch(&self) -> CatalogResult<Vec<Article>>;

    /// Human-readable description for logs
    fn describe(&self) -> String;
}

/// JSON array stored on disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ArticleSource for JsonFileSource {
    async fn fetch(&self) -> CatalogResult<Vec<Article>> {
        let json = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&json)?)
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// Articles already in memory
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    articles: Vec<Article>,
}

impl StaticSource {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl ArticleSource for StaticSource {
    async fn fetch(&self) -> CatalogResult<Vec<Article>> {
        Ok(self.articles.clone())
    }

    fn describe(&self) -> String {
        format!("static:{} articles", self.articles.len())
    }
}
