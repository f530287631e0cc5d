//! Engagement ranking
//!
//! Pure functions over an in-memory article collection:
//! - [`count`] - parsing of human-readable counts such as `"38K"`
//! - [`score`] - article-level trending score and per-article engagement
//! - [`category`] - top-K categories by aggregated engagement
//! - [`trending`] - top-N articles for the trending sidebar
//!
//! Nothing here is cached; every call recomputes from its input.

pub mod category;
pub mod count;
pub mod score;
pub mod trending;

pub use category::{
    rank_categories, rank_categories_with_scores, score_categories, CategoryScore,
    DEFAULT_TOP_CATEGORIES,
};
pub use count::{count_or_zero, parse_count, CountParseError};
pub use score::{
    engagement_contribution, score, trending_score, try_score, ENGAGEMENT_COMMENT_WEIGHT,
    TRENDING_COMMENT_WEIGHT,
};
pub use trending::{top_trending, TrendingArticle, DEFAULT_TRENDING_LIMIT};
