//! Tests for catalog loading, sources and rendering

mod common;

use std::io::Write;
use std::path::PathBuf;

use maleda::catalog::{
    parse_blocks, ArticleRenderer, ArticleSource, Catalog, CatalogError, ContentBlock,
    StaticSource,
};
use tempfile::NamedTempFile;

use common::{sample_articles, sample_catalog};

fn write_json(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn shipped_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/articles.json")
}

#[test]
fn test_shipped_data_loads() {
    let catalog = Catalog::load(&shipped_data()).unwrap();
    assert_eq!(catalog.len(), 12);
    assert!(catalog.categories().contains(&"Self Improvement".to_string()));
    assert_eq!(catalog.by_topic("self-improvement").len(), 2);
}

#[test]
fn test_load_from_file_round_trips_records() {
    let json = serde_json::to_string(&sample_articles()).unwrap();
    let file = write_json(&json);

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.get(3).unwrap().article.category, "Data Science");
}

#[test]
fn test_optional_fields_default() {
    let file = write_json(
        r#"[{"title": "t", "description": "d", "date": "Mar 1, 2025", "views": "1K",
             "comments": "2", "image": "/i.jpeg", "category": "AI"}]"#,
    );

    let catalog = Catalog::load(file.path()).unwrap();
    let article = &catalog.get(0).unwrap().article;
    assert!(article.content.is_empty());
    assert!(article.author.is_empty());
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_json(r#"{"title": "not an array"}"#);
    let err = Catalog::load(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Json(_)));
}

#[test]
fn test_keys_are_stable_across_reordering() {
    let forward = Catalog::from_articles(sample_articles());
    let mut reversed_articles = sample_articles();
    reversed_articles.reverse();
    let reversed = Catalog::from_articles(reversed_articles);

    let key = &forward.get(0).unwrap().key;
    let moved = reversed.get_by_key(key.as_str()).unwrap();
    assert_eq!(moved.index, 6);
    assert_eq!(moved.article.title, "Edge models");
}

#[tokio::test]
async fn test_load_async_matches_sync() {
    let json = serde_json::to_string(&sample_articles()).unwrap();
    let file = write_json(&json);

    let sync = Catalog::load(file.path()).unwrap();
    let async_loaded = Catalog::load_async(file.path()).await.unwrap();
    assert_eq!(sync.entries(), async_loaded.entries());
}

#[tokio::test]
async fn test_static_source() {
    let source = StaticSource::new(sample_articles());
    assert!(source.describe().contains("7"));

    let catalog = Catalog::from_source(&source).await.unwrap();
    assert_eq!(catalog.len(), 7);
}

#[test]
fn test_content_blocks() {
    let blocks = parse_blocks("## Heading\nFirst line\nsecond line\n\n- item");
    assert_eq!(
        blocks,
        vec![
            ContentBlock::Heading {
                level: 2,
                text: "Heading".to_string()
            },
            ContentBlock::Paragraph {
                text: "First line second line".to_string()
            },
            ContentBlock::ListItem {
                text: "item".to_string()
            },
        ]
    );
}

#[test]
fn test_render_detail_page() {
    let catalog = sample_catalog();
    let renderer = ArticleRenderer::new().unwrap();
    let page = renderer.render(catalog.get(0).unwrap()).unwrap();

    assert!(page.starts_with("# Edge models"));
    assert!(page.contains("Mar 1, 2025 | 38K views | 120 comments"));
    assert!(page.contains("## Heading"));
    assert!(page.contains("- item"));
}

#[test]
fn test_render_with_custom_template() {
    let template = write_json("{{title}} [{{category}}] #{{index}}");
    let renderer = ArticleRenderer::with_template(template.path()).unwrap();

    let catalog = sample_catalog();
    let page = renderer.render(catalog.get(5).unwrap()).unwrap();
    assert_eq!(page, "Passkeys [Cybersecurity] #5");
}

#[test]
fn test_missing_template_is_error() {
    let result = ArticleRenderer::with_template(std::path::Path::new("/nonexistent/t.hbs"));
    assert!(matches!(result, Err(CatalogError::Template(_))));
}
