//! Article feed: filtering, incremental pagination and scroll effects
//!
//! - [`filter`] - tab and category filters, the tab bar
//! - [`paginator`] - the Idle / Loading / Exhausted page cursor
//! - [`sentinel`] - visibility threshold that drives page loads
//! - [`fade`] - scroll-position math for header and card fades
//!
//! [`page`] offers a stateless slice of the same feed for request/response
//! callers that keep no cursor of their own.

pub mod fade;
pub mod filter;
pub mod paginator;
pub mod sentinel;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::CatalogEntry;

pub use filter::{tabs, ArticlePredicate, FeedFilter, Tab, ALL_TAB};
pub use paginator::{LoadOutcome, PageTicket, Paginator, PaginatorState, DEFAULT_PAGE_SIZE};
pub use sentinel::{SentinelTrigger, DEFAULT_SENTINEL_THRESHOLD};

/// One page of a filtered feed
#[derive(Debug, Serialize)]
pub struct FeedPage<'a> {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
    pub has_more: bool,
    pub entries: Vec<&'a CatalogEntry>,
}

/// Slice `[page * page_size, (page + 1) * page_size)` of the filtered catalog
pub fn page<'a>(
    catalog: &'a Catalog,
    filter: &FeedFilter,
    page: usize,
    page_size: usize,
) -> FeedPage<'a> {
    let page_size = page_size.max(1);
    let matching: Vec<&CatalogEntry> = catalog
        .entries()
        .iter()
        .filter(|e| filter.matches(&e.article))
        .collect();

    let total = matching.len();
    let start = page.saturating_mul(page_size).min(total);
    let end = start.saturating_add(page_size).min(total);

    FeedPage {
        page,
        page_size,
        total,
        has_more: end < total,
        entries: matching[start..end].to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Article;

    fn catalog() -> Catalog {
        let articles = (0..7)
            .map(|i| Article {
                title: format!("Article {i}"),
                category: if i % 2 == 0 { "AI" } else { "Tech" }.to_string(),
                ..Default::default()
            })
            .collect();
        Catalog::from_articles(articles)
    }

    #[test]
    fn test_first_page() {
        let catalog = catalog();
        let result = page(&catalog, &FeedFilter::All, 0, 5);
        assert_eq!(result.entries.len(), 5);
        assert_eq!(result.total, 7);
        assert!(result.has_more);
    }

    #[test]
    fn test_last_partial_page() {
        let catalog = catalog();
        let result = page(&catalog, &FeedFilter::All, 1, 5);
        assert_eq!(result.entries.len(), 2);
        assert!(!result.has_more);
    }

    #[test]
    fn test_filtered_page_keeps_catalog_indices() {
        let catalog = catalog();
        let result = page(&catalog, &FeedFilter::tab("tech"), 0, 2);
        let indices: Vec<usize> = result.entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 3]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let catalog = catalog();
        let result = page(&catalog, &FeedFilter::All, 50, 5);
        assert!(result.entries.is_empty());
        assert!(!result.has_more);
    }
}
