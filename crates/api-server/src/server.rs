//! HTTP server wiring the webhook handlers and operational endpoints.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use dashmap::DashMap;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use grocer_catalog::CatalogStore;
use grocer_channels::WhatsAppProvider;
use grocer_core::GrocerConfig;
use grocer_engine::ConversationEngine;
use grocer_session::SessionStore;

use crate::webhook::{self, AppState};

pub struct ApiServer {
    config: Arc<GrocerConfig>,
    state: AppState,
}

impl ApiServer {
    pub fn new(
        config: Arc<GrocerConfig>,
        engine: Arc<ConversationEngine>,
        catalog: Arc<CatalogStore>,
        sessions: Arc<dyn SessionStore>,
        provider: Arc<WhatsAppProvider>,
    ) -> Self {
        let state = AppState {
            engine,
            catalog,
            sessions,
            provider,
            config: config.clone(),
            turn_locks: Arc::new(DashMap::new()),
            start_time: Instant::now(),
        };
        Self { config, state }
    }

    /// Start the HTTP server. Blocks until shutdown.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let app = Router::new()
            .route("/webhook", get(webhook::verify_webhook))
            .route("/webhook", post(webhook::receive_webhook))
            // Operational endpoints
            .route("/health", get(webhook::health_check))
            .route("/ready", get(webhook::readiness))
            .route("/live", get(webhook::liveness))
            // Middleware
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone());

        let addr = SocketAddr::new(
            self.config.api.host.parse()?,
            self.config.api.http_port,
        );

        info!(addr = %addr, "Starting HTTP server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }

    /// Start the Prometheus metrics exporter on its own port.
    pub async fn start_metrics(&self) -> anyhow::Result<()> {
        let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
        let handle = builder
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install_recorder()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");

        // Keep the handle alive
        std::mem::forget(handle);
        Ok(())
    }
}
