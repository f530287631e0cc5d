// Core data structures for the maleda article catalog

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest for a stable key
const KEY_LEN: usize = 12;

/// Article record as stored in the static data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub description: String,
    pub date: String,     // display string, never parsed
    pub views: String,    // human-readable count, e.g. "38K"
    pub comments: String, // human-readable count
    pub image: String,
    pub category: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub read_time: String,
}

impl Article {
    /// Compute the base stable key from title, author and date
    ///
    /// Collisions are resolved by the catalog, which appends a numeric
    /// suffix in load order.
    pub fn base_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.title.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.author.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.date.as_bytes());
        let digest = format!("{:x}", hasher.finalize());
        digest[..KEY_LEN].to_string()
    }
}

/// Stable article identifier assigned at load time
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleKey(String);

impl ArticleKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ArticleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An article together with both of its identities
///
/// `index` is the position in the source collection (what the article
/// endpoint and detail links address); `key` survives reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub index: usize,
    pub key: ArticleKey,
    #[serde(flatten)]
    pub article: Article,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Article {
        Article {
            title: "Rust in the kernel".to_string(),
            description: "What changed this release".to_string(),
            date: "Mar 10, 2025".to_string(),
            views: "38K".to_string(),
            comments: "120".to_string(),
            image: "/rust.jpeg".to_string(),
            category: "Tech".to_string(),
            content: "## Intro\nBody".to_string(),
            author: "Abebe".to_string(),
            read_time: "5 min read".to_string(),
        }
    }

    #[test]
    fn test_base_key_length_and_stability() {
        let article = sample();
        let key = article.base_key();
        assert_eq!(key.len(), KEY_LEN);
        assert_eq!(key, sample().base_key());
    }

    #[test]
    fn test_base_key_ignores_engagement_fields() {
        let mut other = sample();
        other.views = "1K".to_string();
        other.comments = "3".to_string();
        assert_eq!(sample().base_key(), other.base_key());
    }

    #[test]
    fn test_read_time_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["readTime"], "5 min read");
        assert!(json.get("read_time").is_none());
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "title": "t", "description": "d", "date": "x",
            "views": "1", "comments": "0", "image": "i", "category": "AI"
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.content.is_empty());
        assert!(article.author.is_empty());
        assert!(article.read_time.is_empty());
    }

    #[test]
    fn test_entry_serializes_flat() {
        let entry = CatalogEntry {
            index: 4,
            key: ArticleKey::new("abc"),
            article: sample(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["index"], 4);
        assert_eq!(json["key"], "abc");
        assert_eq!(json["title"], "Rust in the kernel");
    }
}
