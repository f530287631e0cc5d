//! Engagement scoring for single articles
//!
//! Two independent weightings exist. The trending sidebar ranks articles
//! with a comment weight of 10; the category ranker sums per-article
//! contributions with a comment weight of 100.

use crate::models::Article;

use super::count::{count_or_zero, parse_count, CountParseError};

/// Comment weight for the article-level trending score
pub const TRENDING_COMMENT_WEIGHT: f64 = 10.0;

/// Comment weight for the category-level engagement score
pub const ENGAGEMENT_COMMENT_WEIGHT: f64 = 100.0;

/// Strict trending score from raw count strings
///
/// # Errors
/// Fails if either count contains no digits.
pub fn try_score(views: &str, comments: &str) -> Result<f64, CountParseError> {
    Ok(parse_count(views)? + TRENDING_COMMENT_WEIGHT * parse_count(comments)?)
}

/// Trending score from raw count strings, malformed counts read as zero
pub fn score(views: &str, comments: &str) -> f64 {
    count_or_zero(views) + TRENDING_COMMENT_WEIGHT * count_or_zero(comments)
}

/// Trending score of an article: `views + 10 * comments`
pub fn trending_score(article: &Article) -> f64 {
    score(&article.views, &article.comments)
}

/// Contribution of one article to its category: `views + 100 * comments`
pub fn engagement_contribution(article: &Article) -> f64 {
    count_or_zero(&article.views) + ENGAGEMENT_COMMENT_WEIGHT * count_or_zero(&article.comments)
}
