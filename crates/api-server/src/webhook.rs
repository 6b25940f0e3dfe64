//! Webhook front door: Meta verification handshake plus message delivery.
//! The delivery endpoint always acknowledges with 200 — anything else makes
//! the provider retry-storm.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use grocer_catalog::CatalogStore;
use grocer_channels::webhook::{extract_inbound, Inbound, WebhookEnvelope};
use grocer_channels::WhatsAppProvider;
use grocer_core::GrocerConfig;
use grocer_engine::{admin, ConversationEngine};
use grocer_session::SessionStore;

/// Shared application state for the webhook handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConversationEngine>,
    pub catalog: Arc<CatalogStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub provider: Arc<WhatsAppProvider>,
    pub config: Arc<GrocerConfig>,
    /// One in-flight turn per sender; two quick messages from the same
    /// number would otherwise race on the session key.
    pub turn_locks: Arc<DashMap<String, Arc<Mutex<()>>>>,
    pub start_time: Instant,
}

impl AppState {
    fn sender_lock(&self, sender: &str) -> Arc<Mutex<()>> {
        self.turn_locks
            .entry(sender.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    #[serde(rename = "hub.mode")]
    pub mode: Option<String>,
    #[serde(rename = "hub.verify_token")]
    pub verify_token: Option<String>,
    #[serde(rename = "hub.challenge")]
    pub challenge: Option<String>,
}

/// GET /webhook — Meta verification handshake.
pub async fn verify_webhook(
    State(state): State<AppState>,
    Query(query): Query<VerifyQuery>,
) -> Result<String, StatusCode> {
    if query.mode.as_deref() != Some("subscribe") {
        return Err(StatusCode::FORBIDDEN);
    }
    match query.verify_token {
        Some(token) if token == state.config.whatsapp.verify_token => {
            info!("Webhook verification successful");
            Ok(query.challenge.unwrap_or_default())
        }
        _ => {
            warn!("Webhook verification failed: invalid token");
            Err(StatusCode::FORBIDDEN)
        }
    }
}

/// POST /webhook — inbound message delivery.
pub async fn receive_webhook(State(state): State<AppState>, Json(body): Json<Value>) -> StatusCode {
    let envelope: WebhookEnvelope = match serde_json::from_value(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            // Ack anyway; a malformed payload is the provider's quirk, not
            // a reason to be redelivered the same payload forever.
            warn!(error = %e, "Malformed webhook payload");
            metrics::counter!("webhook.malformed").increment(1);
            return StatusCode::OK;
        }
    };

    for inbound in extract_inbound(&envelope) {
        match inbound {
            Inbound::Text {
                sender,
                message_id,
                routing_id,
                body,
            } => {
                metrics::counter!("webhook.text_messages").increment(1);
                process_text(&state, &sender, &message_id, &routing_id, &body).await;
            }
            Inbound::Unsupported {
                sender,
                routing_id,
                kind,
            } => {
                debug!(sender = %sender, kind = %kind, "Non-text message");
                metrics::counter!("webhook.unsupported_messages").increment(1);
                state
                    .provider
                    .send_or_log(&routing_id, &sender, "Please send a text message")
                    .await;
            }
        }
    }

    StatusCode::OK
}

async fn process_text(
    state: &AppState,
    sender: &str,
    message_id: &str,
    routing_id: &str,
    body: &str,
) {
    // At-least-once delivery: drop redelivered message ids.
    if !message_id.is_empty() {
        match state.sessions.mark_message_seen(message_id).await {
            Ok(false) => {
                debug!(message_id = message_id, "Duplicate delivery dropped");
                metrics::counter!("webhook.duplicates_dropped").increment(1);
                return;
            }
            Ok(true) => {}
            Err(e) => {
                // Dedup is best-effort; prefer double processing over
                // dropping a customer's message.
                warn!(error = %e, "Message dedup check failed");
            }
        }
    }

    // Admin commands bypass the conversation entirely.
    if admin::is_admin(&state.config.whatsapp.admin_numbers, sender) {
        if let Some(reply) = admin::try_handle(&state.catalog, sender, body) {
            state.provider.send_or_log(routing_id, sender, &reply).await;
            return;
        }
    }

    let lock = state.sender_lock(sender);
    let _turn_guard = lock.lock().await;

    let session = match state.sessions.load(sender).await {
        Ok(session) => session,
        Err(e) => {
            error!(sender = sender, error = %e, "Failed to load session");
            return;
        }
    };

    let turn = state.engine.handle(session, body);

    if let Err(e) = state.sessions.save(sender, &turn.session).await {
        error!(sender = sender, error = %e, "Failed to persist session");
    }

    if let Some(order) = &turn.order {
        if let Err(e) = state.sessions.save_order(order).await {
            error!(order_id = %order.order_id, error = %e, "Failed to persist order");
        }
        metrics::counter!("orders.placed").increment(1);
        info!(
            order_id = %order.order_id,
            payer = %order.payer_phone,
            total = order.total,
            "Order placed"
        );
    }

    for reply in &turn.replies {
        state.provider.send_or_log(routing_id, sender, reply).await;
    }

    if let Some(alert) = &turn.owner_alert {
        let owner = &state.config.whatsapp.owner_phone;
        if owner.is_empty() {
            warn!("Owner notification skipped: no owner phone configured");
        } else {
            state.provider.send_or_log(routing_id, owner, alert).await;
        }
    }
}

// ---- Operational endpoints ------------------------------------------------

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_secs: u64,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /ready
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if state.start_time.elapsed().as_secs() > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}
