//! Configuration management for the maleda service
//!
//! This module handles loading and validating configuration from environment variables,
//! TOML files, and command-line arguments.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::feed::{DEFAULT_PAGE_SIZE, DEFAULT_SENTINEL_THRESHOLD};
use crate::ranking::{DEFAULT_TOP_CATEGORIES, DEFAULT_TRENDING_LIMIT};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,

    /// Article data configuration
    pub catalog: CatalogConfig,

    /// Feed, ranking and sidebar configuration
    pub feed: FeedConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server bind address
    pub bind_address: SocketAddr,

    /// Enable permissive CORS
    pub enable_cors: bool,

    /// Trace every HTTP request
    pub enable_request_logging: bool,
}

/// Article data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the JSON article array
    pub data_path: PathBuf,
}

/// Feed, ranking and sidebar configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Articles per feed page
    pub page_size: usize,

    /// Categories shown in the tab bar
    pub top_categories: usize,

    /// Articles shown in the trending sidebar
    pub trending_limit: usize,

    /// Visible fraction of the sentinel that loads the next page
    pub sentinel_threshold: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            enable_cors: true,
            enable_request_logging: true,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/articles.json"),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            top_categories: DEFAULT_TOP_CATEGORIES,
            trending_limit: DEFAULT_TRENDING_LIMIT,
            sentinel_threshold: DEFAULT_SENTINEL_THRESHOLD,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
            format: String::from("text"),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse::<T>().ok())
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let bind_address =
            env_parse::<SocketAddr>("MALEDA_BIND_ADDRESS").unwrap_or(defaults.server.bind_address);

        let enable_cors =
            env_parse::<bool>("MALEDA_ENABLE_CORS").unwrap_or(defaults.server.enable_cors);

        let enable_request_logging = env_parse::<bool>("MALEDA_REQUEST_LOGGING")
            .unwrap_or(defaults.server.enable_request_logging);

        let data_path = std::env::var("MALEDA_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.catalog.data_path);

        let page_size = env_parse::<usize>("MALEDA_PAGE_SIZE").unwrap_or(defaults.feed.page_size);

        let top_categories =
            env_parse::<usize>("MALEDA_TOP_CATEGORIES").unwrap_or(defaults.feed.top_categories);

        let trending_limit =
            env_parse::<usize>("MALEDA_TRENDING_LIMIT").unwrap_or(defaults.feed.trending_limit);

        let sentinel_threshold = env_parse::<f64>("MALEDA_SENTINEL_THRESHOLD")
            .unwrap_or(defaults.feed.sentinel_threshold);

        let level = std::env::var("MALEDA_LOG_LEVEL").unwrap_or(defaults.logging.level);

        let format = std::env::var("MALEDA_LOG_FORMAT").unwrap_or(defaults.logging.format);

        Ok(Self {
            server: ServerConfig {
                bind_address,
                enable_cors,
                enable_request_logging,
            },
            catalog: CatalogConfig { data_path },
            feed: FeedConfig {
                page_size,
                top_categories,
                trending_limit,
                sentinel_threshold,
            },
            logging: LoggingConfig { level, format },
        })
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise from the environment, then validate
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.feed.page_size == 0 {
            anyhow::bail!("page_size must be greater than 0");
        }

        if self.feed.top_categories == 0 {
            anyhow::bail!("top_categories must be greater than 0");
        }

        if !(self.feed.sentinel_threshold > 0.0 && self.feed.sentinel_threshold <= 1.0) {
            anyhow::bail!("sentinel_threshold must be in (0, 1]");
        }

        if !matches!(self.logging.format.as_str(), "text" | "json") {
            anyhow::bail!("log format must be 'text' or 'json', got '{}'", self.logging.format);
        }

        Ok(())
    }
}
