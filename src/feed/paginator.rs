//! Incremental feed pagination
//!
//! A [`Paginator`] is a cursor over the filtered catalog. Pages are appended
//! to a visible set that only grows until the next [`Paginator::reset`].
//!
//! # States
//!
//! ```text
//!            reset (from any state)
//!   ┌────────────────────────────────────┐
//!   v                                    │
//! Idle ──begin_load──> Loading ──finish_load (page had articles)──> Idle
//!                         │
//!                         └──finish_load (empty page)──> Exhausted
//! ```
//!
//! Loading is observable through the two-phase `begin_load` / `finish_load`
//! form. Any load request made while Loading is dropped.

use std::ops::Range;
use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::models::CatalogEntry;

use super::filter::FeedFilter;

/// Articles per page when not configured
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Paginator lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaginatorState {
    Idle,
    Loading,
    Exhausted,
}

/// Result of a load request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A page was appended to the visible set
    Loaded { page: usize, count: usize },
    /// No more articles; nothing was appended
    Exhausted,
    /// A load was already in flight; the request was dropped
    Busy,
    /// The ticket predates the last reset and was discarded
    Stale,
}

/// Permission to complete one page load
///
/// Issued by [`Paginator::begin_load`] and consumed by
/// [`Paginator::finish_load`].
#[derive(Debug, PartialEq, Eq)]
pub struct PageTicket {
    generation: u64,
    page: usize,
    range: Range<usize>,
}

impl PageTicket {
    /// Zero-based page number this ticket loads
    pub fn page(&self) -> usize {
        self.page
    }

    /// Slice of the filtered collection this ticket covers
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }
}

/// Stateful cursor over a filtered article collection
#[derive(Debug)]
pub struct Paginator {
    catalog: Arc<Catalog>,
    filter: FeedFilter,
    page_size: usize,
    /// Catalog indices passing the current filter
    matching: Vec<usize>,
    /// Catalog indices loaded so far, in load order
    visible: Vec<usize>,
    cursor: usize,
    state: PaginatorState,
    /// Bumped on every reset so in-flight tickets can be recognised
    generation: u64,
}

impl Paginator {
    /// Create an idle paginator showing every article
    pub fn new(catalog: Arc<Catalog>, page_size: usize) -> Self {
        let mut paginator = Self {
            catalog,
            filter: FeedFilter::All,
            page_size: page_size.max(1),
            matching: Vec::new(),
            visible: Vec::new(),
            cursor: 0,
            state: PaginatorState::Idle,
            generation: 0,
        };
        paginator.reset(FeedFilter::All);
        paginator
    }

    /// Switch filter: clear the visible set, rewind to page 0, go Idle
    pub fn reset(&mut self, filter: FeedFilter) {
        self.matching = self
            .catalog
            .entries()
            .iter()
            .filter(|e| filter.matches(&e.article))
            .map(|e| e.index)
            .collect();
        self.filter = filter;
        self.visible.clear();
        self.cursor = 0;
        self.state = PaginatorState::Idle;
        self.generation += 1;

        tracing::debug!(
            filter = ?self.filter,
            matching = self.matching.len(),
            "Feed reset"
        );
    }

    /// Start a page load; `None` unless the paginator is Idle
    pub fn begin_load(&mut self) -> Option<PageTicket> {
        if self.state != PaginatorState::Idle {
            tracing::trace!(state = ?self.state, "Load request dropped");
            return None;
        }

        self.state = PaginatorState::Loading;
        let start = self.cursor * self.page_size;
        Some(PageTicket {
            generation: self.generation,
            page: self.cursor,
            range: start..start + self.page_size,
        })
    }

    /// Complete a load started by [`Self::begin_load`]
    pub fn finish_load(&mut self, ticket: PageTicket) -> LoadOutcome {
        if ticket.generation != self.generation || self.state != PaginatorState::Loading {
            tracing::debug!(page = ticket.page, "Stale page ticket discarded");
            return LoadOutcome::Stale;
        }

        let len = self.matching.len();
        let start = ticket.range.start.min(len);
        let end = ticket.range.end.min(len);
        let page = &self.matching[start..end];

        if page.is_empty() {
            self.state = PaginatorState::Exhausted;
            tracing::debug!(visible = self.visible.len(), "Feed exhausted");
            return LoadOutcome::Exhausted;
        }

        let count = page.len();
        self.visible.extend_from_slice(page);
        self.cursor += 1;
        self.state = PaginatorState::Idle;
        crate::metrics::record_page_loaded();

        tracing::debug!(page = ticket.page, count, visible = self.visible.len(), "Page loaded");
        LoadOutcome::Loaded {
            page: ticket.page,
            count,
        }
    }

    /// Load the next page in one step
    pub fn load_next_page(&mut self) -> LoadOutcome {
        match self.state {
            PaginatorState::Loading => LoadOutcome::Busy,
            PaginatorState::Exhausted => LoadOutcome::Exhausted,
            PaginatorState::Idle => match self.begin_load() {
                Some(ticket) => self.finish_load(ticket),
                None => LoadOutcome::Busy,
            },
        }
    }

    pub fn state(&self) -> PaginatorState {
        self.state
    }

    /// Next page number to load
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filter(&self) -> &FeedFilter {
        &self.filter
    }

    /// Number of articles passing the current filter
    pub fn total_matching(&self) -> usize {
        self.matching.len()
    }

    /// Whether unloaded articles remain
    pub fn has_more(&self) -> bool {
        self.state != PaginatorState::Exhausted && self.visible.len() < self.matching.len()
    }

    /// Accumulated visible entries in load order
    pub fn visible(&self) -> Vec<&CatalogEntry> {
        self.visible
            .iter()
            .filter_map(|&index| self.catalog.get(index))
            .collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }
}
