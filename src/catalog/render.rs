//! Article detail rendering with the Handlebars template engine
//!
//! Renders one catalog entry to a Markdown detail page: headline,
//! description, the `date | views | comments` line and the parsed body.

use handlebars::Handlebars;
use serde::Serialize;
use std::path::Path;

use crate::models::CatalogEntry;

use super::content::parse_blocks;
use super::{CatalogError, CatalogResult};

/// Default detail template
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/article.hbs");

const TEMPLATE_NAME: &str = "article";

/// Template data for rendering
#[derive(Debug, Serialize)]
struct ArticleTemplateData {
    index: usize,
    key: String,
    title: String,
    description: String,
    date: String,
    views: String,
    comments: String,
    category: String,
    author: String,
    read_time: String,
    blocks: Vec<String>,
}

impl From<&CatalogEntry> for ArticleTemplateData {
    fn from(entry: &CatalogEntry) -> Self {
        let article = &entry.article;
        Self {
            index: entry.index,
            key: entry.key.to_string(),
            title: article.title.clone(),
            description: article.description.clone(),
            date: article.date.clone(),
            views: article.views.clone(),
            comments: article.comments.clone(),
            category: article.category.clone(),
            author: article.author.clone(),
            read_time: article.read_time.clone(),
            blocks: parse_blocks(&article.content)
                .iter()
                .map(|b| b.to_markdown())
                .collect(),
        }
    }
}

/// Markdown renderer for article detail pages
pub struct ArticleRenderer {
    handlebars: Handlebars<'static>,
}

impl ArticleRenderer {
    /// Create a renderer with the built-in template
    pub fn new() -> CatalogResult<Self> {
        let mut handlebars = Self::engine();
        handlebars
            .register_template_string(TEMPLATE_NAME, DEFAULT_TEMPLATE)
            .map_err(|e| CatalogError::Template(e.to_string()))?;
        Ok(Self { handlebars })
    }

    /// Create a renderer with a custom template file
    pub fn with_template(template_path: &Path) -> CatalogResult<Self> {
        let mut handlebars = Self::engine();
        handlebars
            .register_template_file(TEMPLATE_NAME, template_path)
            .map_err(|e| {
                CatalogError::Template(format!("{}: {e}", template_path.display()))
            })?;
        Ok(Self { handlebars })
    }

    fn engine() -> Handlebars<'static> {
        let mut handlebars = Handlebars::new();
        // Output is Markdown, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars
    }

    /// Render an entry to Markdown
    pub fn render(&self, entry: &CatalogEntry) -> CatalogResult<String> {
        let data = ArticleTemplateData::from(entry);
        self.handlebars
            .render(TEMPLATE_NAME, &data)
            .map_err(|e| CatalogError::Template(e.to_string()))
    }
}
