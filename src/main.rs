use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maleda::config::Config;

mod commands;

#[derive(Parser)]
#[command(
    name = "maleda",
    version,
    about = "Article catalog with category ranking, trending sidebar and paged feed",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log format (text, json); overrides the configured format
    #[arg(long, global = true)]
    log_format: Option<String>,

    /// Path to a TOML config file (defaults to MALEDA_* environment variables)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the read-only API server
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// Article data file
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Show the top categories by engagement
    Categories {
        /// Article data file
        #[arg(short, long)]
        data: Option<String>,

        /// Number of categories to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Show the trending sidebar
    Trending {
        /// Article data file
        #[arg(short, long)]
        data: Option<String>,

        /// Number of articles to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Page through the feed for one tab
    Feed {
        /// Article data file
        #[arg(short, long)]
        data: Option<String>,

        /// Tab value ("all" or a lowercased category)
        #[arg(short, long, default_value = "all")]
        tab: String,

        /// Number of pages to load
        #[arg(long, default_value = "1")]
        pages: usize,

        /// Articles per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Render one article's detail page
    Show {
        /// Article position in the data file
        index: usize,

        /// Article data file
        #[arg(short, long)]
        data: Option<String>,

        /// Custom Handlebars template
        #[arg(long)]
        template: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    // Initialize tracing/logging
    let log_format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    setup_tracing(log_format, &config.logging.level, cli.verbose)?;

    tracing::debug!(config = ?config, "Configuration loaded");

    match cli.command {
        Commands::Serve { host, port, data } => {
            tracing::info!(host = ?host, port = ?port, data = ?data, "Starting serve command");
            commands::serve(config, commands::ServeParams { host, port, data }).await?;
        }

        Commands::Categories { data, top } => {
            tracing::info!(data = ?data, top = ?top, "Starting categories command");
            commands::categories(&config, data, top)?;
        }

        Commands::Trending { data, limit } => {
            tracing::info!(data = ?data, limit = ?limit, "Starting trending command");
            commands::trending(&config, data, limit)?;
        }

        Commands::Feed {
            data,
            tab,
            pages,
            page_size,
        } => {
            tracing::info!(
                tab = %tab,
                pages = %pages,
                page_size = ?page_size,
                "Starting feed command"
            );
            commands::feed(
                &config,
                commands::FeedParams {
                    data,
                    tab,
                    pages,
                    page_size,
                },
            )?;
        }

        Commands::Show {
            index,
            data,
            template,
        } => {
            tracing::info!(index = %index, template = ?template, "Starting show command");
            commands::show(&config, index, data, template)?;
        }
    }

    Ok(())
}

fn setup_tracing(format: &str, level: &str, verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        tracing_subscriber::EnvFilter::new("maleda=debug,tower_http=debug,info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("maleda={level},warn")))
    };

    match format {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
