//! Trending sidebar: top articles by trending score

use serde::Serialize;

use crate::models::{ArticleKey, CatalogEntry};

use super::score::trending_score;

/// Number of sidebar entries when not configured
pub const DEFAULT_TRENDING_LIMIT: usize = 3;

/// One sidebar entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendingArticle {
    /// Position in the catalog; 1-based rank is its place in the result
    pub index: usize,
    pub key: ArticleKey,
    pub title: String,
    pub category: String,
    pub author: String,
    pub score: f64,
}

impl TrendingArticle {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            index: entry.index,
            key: entry.key.clone(),
            title: entry.article.title.clone(),
            category: entry.article.category.clone(),
            author: entry.article.author.clone(),
            score: trending_score(&entry.article),
        }
    }
}

/// Top `limit` entries by trending score
///
/// Recomputed on every call; equal scores keep catalog order.
pub fn top_trending<'a, I>(entries: I, limit: usize) -> Vec<TrendingArticle>
where
    I: IntoIterator<Item = &'a CatalogEntry>,
{
    let mut ranked: Vec<TrendingArticle> =
        entries.into_iter().map(TrendingArticle::from_entry).collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(limit);
    ranked
}
