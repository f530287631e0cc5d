//! Unified error handling for the maleda crate
//!
//! This module provides a unified error type that consolidates all domain-specific
//! errors into a single `Error` enum, while maintaining the ability to use
//! domain-specific errors when needed.
//!
//! # Architecture
//!
//! - [`MaledaErrorTrait`] - Common interface implemented by all error types
//! - [`ErrorCategory`] - Classification of errors for handling strategies
//! - [`Error`] - Unified error enum wrapping all domain-specific errors
//!
//! Ranking and pagination never return errors to their callers: malformed
//! counts read as zero and empty collections yield empty results. What
//! remains here comes from loading data, configuration and serving.

use std::io;
use thiserror::Error;

// Re-export domain-specific errors for convenience
pub use crate::catalog::CatalogError;
pub use crate::ranking::CountParseError;
pub use crate::server::ServerError;

/// Common trait for all maleda error types
pub trait MaledaErrorTrait: std::error::Error {
    /// Check if this error is recoverable (can be retried)
    fn is_recoverable(&self) -> bool;

    /// Short message suitable for end users
    fn user_message(&self) -> String;

    /// Get the error category for handling strategies
    fn category(&self) -> ErrorCategory;
}

/// Classification of errors for handling strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed article data or counts
    Parsing,
    /// Data file and other I/O errors
    Storage,
    /// Configuration and validation errors
    Config,
    /// HTTP server errors
    Server,
    /// Other/unknown errors
    Other,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parsing => "parsing",
            Self::Storage => "storage",
            Self::Config => "config",
            Self::Server => "server",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the maleda crate
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog loading and rendering errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Count parsing errors (only from the strict scoring API)
    #[error("Count error: {0}")]
    Count(#[from] CountParseError),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(#[from] ServerError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}")]
    Other {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MaledaErrorTrait for Error {
    fn is_recoverable(&self) -> bool {
        match self {
            Self::Catalog(CatalogError::Io { .. }) => true,
            Self::Catalog(_) => false,
            Self::Count(_) => false,
            Self::Server(e) => matches!(e, ServerError::Bind(_)),
            Self::Io(_) => true, // I/O errors are often transient
            Self::Json(_) => false,
            Self::Config(_) => false,
            Self::Other { .. } => false,
        }
    }

    fn user_message(&self) -> String {
        match self {
            Self::Catalog(CatalogError::Io { path, .. }) => {
                format!("Article data could not be read from {}", path.display())
            }
            Self::Catalog(CatalogError::Json(_)) | Self::Json(_) => {
                "Article data is malformed".to_string()
            }
            Self::Catalog(CatalogError::Template(msg)) => format!("Template problem: {msg}"),
            Self::Count(e) => e.to_string(),
            Self::Server(e) => e.to_string(),
            Self::Io(e) => format!("I/O problem: {e}"),
            Self::Config(msg) => format!("Invalid configuration: {msg}"),
            Self::Other { context, .. } => context.clone(),
        }
    }

    fn category(&self) -> ErrorCategory {
        match self {
            Self::Catalog(CatalogError::Io { .. }) | Self::Io(_) => ErrorCategory::Storage,
            Self::Catalog(_) | Self::Count(_) | Self::Json(_) => ErrorCategory::Parsing,
            Self::Server(ServerError::Config(_)) | Self::Config(_) => ErrorCategory::Config,
            Self::Server(_) => ErrorCategory::Server,
            Self::Other { .. } => ErrorCategory::Other,
        }
    }
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a generic error with context
    pub fn other(context: impl Into<String>) -> Self {
        Self::Other {
            context: context.into(),
            source: None,
        }
    }

    /// Create a generic error with context and source
    pub fn with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Other {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Conversion from anyhow::Error
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Other {
            context: err.to_string(),
            source: None,
        }
    }
}

/// Result type alias using the unified Error type
pub type Result<T> = std::result::Result<T, Error>;
