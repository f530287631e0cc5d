pub mod browse;
pub mod serve;

// Re-export command functions for convenience
pub use browse::{categories, feed, show, trending, FeedParams};
pub use serve::{serve, ServeParams};
