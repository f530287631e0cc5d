//! Visibility-driven page loading
//!
//! The display layer reports how much of the sentinel element at the end
//! of the feed is visible. Crossing the threshold asks the paginator for
//! the next page; the paginator itself drops requests while it is loading.

use super::paginator::{LoadOutcome, Paginator};

/// Visible fraction of the sentinel that triggers a load
pub const DEFAULT_SENTINEL_THRESHOLD: f64 = 0.1;

/// Push-based trigger for [`Paginator::load_next_page`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentinelTrigger {
    threshold: f64,
}

impl SentinelTrigger {
    /// Create a trigger; the threshold is clamped to `(0, 1]`
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(f64::MIN_POSITIVE, 1.0),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Report the sentinel's visible ratio
    ///
    /// Returns `None` when the ratio is below the threshold, otherwise the
    /// outcome of the load request.
    pub fn observe(&self, visible_ratio: f64, paginator: &mut Paginator) -> Option<LoadOutcome> {
        if visible_ratio < self.threshold {
            return None;
        }
        Some(paginator.load_next_page())
    }
}

impl Default for SentinelTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SENTINEL_THRESHOLD)
    }
}
