//! Zimbogrocer — WhatsApp storefront chatbot.
//!
//! Main entry point that wires the catalog, conversation engine, session
//! store and messaging provider, then starts the webhook server.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use grocer_api::ApiServer;
use grocer_catalog::CatalogStore;
use grocer_channels::WhatsAppProvider;
use grocer_core::GrocerConfig;
use grocer_engine::ConversationEngine;
use grocer_session::RedisSessionStore;

#[derive(Parser, Debug)]
#[command(name = "zimbogrocer")]
#[command(about = "WhatsApp storefront chatbot")]
#[command(version)]
struct Cli {
    /// HTTP port (overrides config)
    #[arg(long, env = "ZIMBOGROCER__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Redis connection URL (overrides config)
    #[arg(long, env = "ZIMBOGROCER__REDIS__URL")]
    redis_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "zimbogrocer=info,grocer_api=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Zimbogrocer starting up");

    // Load configuration
    let mut config = GrocerConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        GrocerConfig::default()
    });

    // Apply CLI overrides
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(url) = cli.redis_url {
        config.redis.url = url;
    }

    info!(
        http_port = config.api.http_port,
        redis = %config.redis.url,
        admins = config.whatsapp.admin_numbers.len(),
        "Configuration loaded"
    );

    if config.whatsapp.access_token.is_empty() {
        error!("ZIMBOGROCER__WHATSAPP__ACCESS_TOKEN is not set; outbound sends will fail");
    }

    let config = Arc::new(config);

    // Static catalog, seeded once per process.
    let catalog = Arc::new(CatalogStore::seeded());
    info!(
        categories = catalog.category_names().len(),
        products = catalog.all_products().len(),
        "Catalog seeded"
    );

    let engine = Arc::new(ConversationEngine::new(
        catalog.clone(),
        config.store.clone(),
    ));

    let sessions = Arc::new(RedisSessionStore::connect(&config.redis).await?);

    let provider = Arc::new(WhatsAppProvider::new(&config.whatsapp));

    let api_server = ApiServer::new(config, engine, catalog, sessions, provider);

    // Start metrics exporter
    if let Err(e) = api_server.start_metrics().await {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Zimbogrocer is ready to serve traffic");

    // Start HTTP server (blocks until shutdown)
    api_server.start_http().await?;

    Ok(())
}
