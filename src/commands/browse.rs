use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use maleda::catalog::{ArticleRenderer, Catalog};
use maleda::config::Config;
use maleda::feed::{FeedFilter, LoadOutcome, Paginator, SentinelTrigger};
use maleda::ranking::{rank_categories_with_scores, top_trending};

fn load_catalog(config: &Config, data: Option<String>) -> Result<Catalog> {
    let path = data
        .map(PathBuf::from)
        .unwrap_or_else(|| config.catalog.data_path.clone());
    Catalog::load(&path).with_context(|| format!("Failed to load {}", path.display()))
}

/// Print the top categories by engagement
pub fn categories(config: &Config, data: Option<String>, top: Option<usize>) -> Result<()> {
    let catalog = load_catalog(config, data)?;
    let top = top.unwrap_or(config.feed.top_categories);
    let ranked = rank_categories_with_scores(catalog.articles(), top);

    println!("Top {} categories ({} articles)", ranked.len(), catalog.len());
    println!("================================");
    for (i, category) in ranked.iter().enumerate() {
        println!(
            "{}. {} (engagement: {:.0}, articles: {})",
            i + 1,
            category.category,
            category.engagement_score,
            category.article_count
        );
    }
    Ok(())
}

/// Print the trending sidebar
pub fn trending(config: &Config, data: Option<String>, limit: Option<usize>) -> Result<()> {
    let catalog = load_catalog(config, data)?;
    let limit = limit.unwrap_or(config.feed.trending_limit);

    println!("Trending");
    println!("========");
    for (rank, article) in top_trending(catalog.entries(), limit).iter().enumerate() {
        println!("{}. {} (score: {:.0})", rank + 1, article.title, article.score);
        println!("   {} | by {} | #{}", article.category, article.author, article.index);
    }
    Ok(())
}

/// Options for the `feed` subcommand
pub struct FeedParams {
    pub data: Option<String>,
    pub tab: String,
    pub pages: usize,
    pub page_size: Option<usize>,
}

/// Walk the feed page by page as a scrolling reader would
pub fn feed(config: &Config, params: FeedParams) -> Result<()> {
    let catalog = Arc::new(load_catalog(config, params.data)?);
    let page_size = params.page_size.unwrap_or(config.feed.page_size);
    let trigger = SentinelTrigger::new(config.feed.sentinel_threshold);

    let mut paginator = Paginator::new(catalog, page_size);
    paginator.reset(FeedFilter::tab(&params.tab));

    println!(
        "Feed '{}' ({} matching, {} per page)",
        params.tab,
        paginator.total_matching(),
        paginator.page_size()
    );
    println!("================================");

    // Sentinel fully in view once per requested page
    for _ in 0..params.pages {
        let shown = paginator.visible_len();
        match trigger.observe(1.0, &mut paginator) {
            Some(LoadOutcome::Loaded { page, count }) => {
                println!("-- page {} ({count} articles) --", page + 1);
                for entry in paginator.visible().into_iter().skip(shown) {
                    let article = &entry.article;
                    println!("[{}] {} ({})", entry.index, article.title, article.category);
                    println!(
                        "    {} | {} views | {} comments",
                        article.date, article.views, article.comments
                    );
                }
            }
            Some(LoadOutcome::Exhausted) => break,
            _ => {}
        }
    }

    if paginator.has_more() {
        println!("\n... {} more", paginator.total_matching() - paginator.visible_len());
    } else {
        println!("\nNo more articles");
    }
    Ok(())
}

/// Render one article's detail page
pub fn show(
    config: &Config,
    index: usize,
    data: Option<String>,
    template: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(config, data)?;
    let entry = catalog
        .get(index)
        .with_context(|| format!("Article not found: {index}"))?;

    let renderer = match template {
        Some(path) => ArticleRenderer::with_template(Path::new(&path))?,
        None => ArticleRenderer::new()?,
    };

    println!("{}", renderer.render(entry)?);
    Ok(())
}
