//! Common test utilities

#![allow(dead_code)]

use std::sync::Arc;

use maleda::catalog::Catalog;
use maleda::models::Article;

/// Create an article with the given category and counts
pub fn create_article(title: &str, category: &str, views: &str, comments: &str) -> Article {
    Article {
        title: title.to_string(),
        description: format!("About {title}"),
        date: "Mar 1, 2025".to_string(),
        views: views.to_string(),
        comments: comments.to_string(),
        image: "/img.jpeg".to_string(),
        category: category.to_string(),
        content: "## Heading\nFirst line\nsecond line\n\n- item".to_string(),
        author: "Test Author".to_string(),
        read_time: "3 min read".to_string(),
    }
}

/// Seven articles over four categories with known scores
///
/// | idx | category      | views | comments | trending |
/// |-----|---------------|-------|----------|----------|
/// | 0   | AI            | 38K   | 120      | 39200    |
/// | 1   | Tech          | 5K    | 10       | 5100     |
/// | 2   | AI            | 2K    | 30       | 2300     |
/// | 3   | Data Science  | 50K   | 0        | 50000    |
/// | 4   | Tech          | 1K    | 5        | 1050     |
/// | 5   | Cybersecurity | abc   | 7        | 70       |
/// | 6   | Tech          | 12K   | 400      | 16000    |
///
/// Engagement: Tech 59500, AI 55000, Data Science 50000, Cybersecurity 700.
pub fn sample_articles() -> Vec<Article> {
    vec![
        create_article("Edge models", "AI", "38K", "120"),
        create_article("Laptop fans", "Tech", "5K", "10"),
        create_article("Agents", "AI", "2K", "30"),
        create_article("Feature stores", "Data Science", "50K", "0"),
        create_article("Server rendering", "Tech", "1K", "5"),
        create_article("Passkeys", "Cybersecurity", "abc", "7"),
        create_article("CLI tools", "Tech", "12K", "400"),
    ]
}

pub fn sample_catalog() -> Arc<Catalog> {
    Arc::new(Catalog::from_articles(sample_articles()))
}

/// Catalog of `n` untitled articles in one category
pub fn uniform_catalog(n: usize, category: &str) -> Arc<Catalog> {
    let articles = (0..n)
        .map(|i| create_article(&format!("Article {i}"), category, "1K", "1"))
        .collect();
    Arc::new(Catalog::from_articles(articles))
}
