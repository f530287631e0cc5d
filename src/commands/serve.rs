use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use maleda::catalog::Catalog;
use maleda::config::Config;
use maleda::server::ApiServer;

/// Overrides given on the command line
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub data: Option<String>,
}

/// Start the read-only API server
pub async fn serve(mut config: Config, params: ServeParams) -> Result<()> {
    let ServeParams { host, port, data } = params;

    if host.is_some() || port.is_some() {
        let host = host.unwrap_or_else(|| config.server.bind_address.ip().to_string());
        let port = port.unwrap_or_else(|| config.server.bind_address.port());
        config.server.bind_address = format!("{host}:{port}")
            .parse::<SocketAddr>()
            .context("Invalid bind address")?;
    }
    if let Some(data) = data {
        config.catalog.data_path = data.into();
    }

    if let Err(e) = maleda::metrics::init_metrics() {
        tracing::warn!("Metrics initialization failed: {}", e);
    }

    let catalog = Catalog::load_async(&config.catalog.data_path)
        .await
        .context("Failed to load article data")?;

    let server = ApiServer::new(config.server.clone(), config.feed.clone(), Arc::new(catalog))
        .context("Failed to create API server")?;

    println!("{}", server.info().display());
    println!();
    println!("API Endpoints:");
    println!("  GET  /api/health                   - Health check");
    println!("  GET  /metrics                      - Prometheus metrics endpoint");
    println!("  GET  /api/articles/{{index}}          - Article by position");
    println!("  GET  /api/articles/{{index}}/content  - Parsed article body");
    println!("  GET  /api/articles/key/{{key}}        - Article by stable key");
    println!("  GET  /api/topic/{{topic}}             - Articles of one topic");
    println!("  GET  /api/categories               - Distinct categories");
    println!("  GET  /api/categories/trending      - Top categories by engagement");
    println!("  GET  /api/trending                 - Trending sidebar");
    println!("  GET  /api/feed                     - One feed page (?tab=&page=)");
    println!();
    println!("Listening on http://{}", config.server.bind_address);
    println!("Press Ctrl+C to stop.\n");

    server
        .start_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown signal received");
                }
                Err(e) => {
                    tracing::error!("Failed to wait for Ctrl+C: {}", e);
                }
            }
        })
        .await?;

    println!("Server stopped.");
    Ok(())
}
