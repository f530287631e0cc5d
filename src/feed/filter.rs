//! Feed filters and the tab bar

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::models::Article;

/// Tab value that shows every article
pub const ALL_TAB: &str = "all";

/// Predicate over articles used by [`FeedFilter::Custom`]
pub type ArticlePredicate = Arc<dyn Fn(&Article) -> bool + Send + Sync>;

/// Which articles a feed shows
#[derive(Clone)]
pub enum FeedFilter {
    /// Every article
    All,
    /// Tab value: lowercased category, matched case-insensitively
    Tab(String),
    /// Exact category label
    Category(String),
    /// Arbitrary predicate
    Custom(ArticlePredicate),
}

impl FeedFilter {
    /// Filter for a tab value; `"all"` selects everything
    pub fn tab(value: &str) -> Self {
        let value = value.to_lowercase();
        if value == ALL_TAB {
            Self::All
        } else {
            Self::Tab(value)
        }
    }

    /// Filter from a closure
    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Article) -> bool + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(predicate))
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::All => true,
            Self::Tab(value) => article.category.to_lowercase() == *value,
            Self::Category(label) => article.category == *label,
            Self::Custom(predicate) => predicate(article),
        }
    }
}

impl Default for FeedFilter {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Debug for FeedFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "All"),
            Self::Tab(value) => write!(f, "Tab({value:?})"),
            Self::Category(label) => write!(f, "Category({label:?})"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// One entry of the tab bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub value: String,
    pub label: String,
}

/// Tab bar: `All` followed by one tab per ranked category
pub fn tabs(ranked_categories: &[String]) -> Vec<Tab> {
    std::iter::once(Tab {
        value: ALL_TAB.to_string(),
        label: "All".to_string(),
    })
    .chain(ranked_categories.iter().map(|label| Tab {
        value: label.to_lowercase(),
        label: label.clone(),
    }))
    .collect()
}
