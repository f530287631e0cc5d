//! Category ranking by aggregated engagement

use serde::Serialize;
use std::collections::HashMap;

use crate::models::Article;

use super::score::engagement_contribution;

/// Number of categories shown in the tab bar when not configured
pub const DEFAULT_TOP_CATEGORIES: usize = 5;

/// Aggregated engagement for one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: String,
    pub engagement_score: f64,
    pub article_count: usize,
}

/// Score every category, highest engagement first
///
/// Categories are grouped by exact (case-sensitive) label. Ties keep the
/// order in which categories first appear in `articles`.
pub fn score_categories<'a, I>(articles: I) -> Vec<CategoryScore>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut positions: HashMap<&'a str, usize> = HashMap::new();
    let mut scores: Vec<CategoryScore> = Vec::new();

    for article in articles {
        let slot = *positions.entry(article.category.as_str()).or_insert_with(|| {
            scores.push(CategoryScore {
                category: article.category.clone(),
                engagement_score: 0.0,
                article_count: 0,
            });
            scores.len() - 1
        });

        let entry = &mut scores[slot];
        entry.engagement_score += engagement_contribution(article);
        entry.article_count += 1;
    }

    // sort_by is stable, so equal scores stay in first-appearance order
    scores.sort_by(|a, b| b.engagement_score.total_cmp(&a.engagement_score));
    scores
}

/// Top `top_n` categories with their scores
pub fn rank_categories_with_scores<'a, I>(articles: I, top_n: usize) -> Vec<CategoryScore>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut scores = score_categories(articles);
    scores.truncate(top_n);
    scores
}

/// Top `top_n` category labels by engagement score
pub fn rank_categories<'a, I>(articles: I, top_n: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a Article>,
{
    rank_categories_with_scores(articles, top_n)
        .into_iter()
        .map(|s| s.category)
        .collect()
}
