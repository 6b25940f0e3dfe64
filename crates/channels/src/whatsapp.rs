//! Outbound WhatsApp text delivery via the Business Cloud API.

use serde::Serialize;
use tracing::{error, info};

use grocer_core::config::WhatsAppConfig;

#[derive(Debug, Serialize)]
struct OutboundText<'a> {
    messaging_product: &'static str,
    to: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    text: TextBody<'a>,
}

#[derive(Debug, Serialize)]
struct TextBody<'a> {
    body: &'a str,
}

pub struct WhatsAppProvider {
    http: reqwest::Client,
    api_base_url: String,
    access_token: String,
    phone_number_id: String,
}

impl WhatsAppProvider {
    pub fn new(config: &WhatsAppConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base_url: config.api_base_url.clone(),
            access_token: config.access_token.clone(),
            phone_number_id: config.phone_number_id.clone(),
        }
    }

    /// Send a plain text message through the given routing id (the webhook's
    /// `phone_number_id`), falling back to the configured one.
    pub async fn send_text(&self, routing_id: &str, to: &str, body: &str) -> anyhow::Result<()> {
        let phone_id = if routing_id.is_empty() {
            &self.phone_number_id
        } else {
            routing_id
        };
        let url = format!("{}/{}/messages", self.api_base_url, phone_id);
        let payload = OutboundText {
            messaging_product: "whatsapp",
            to,
            kind: "text",
            text: TextBody { body },
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?;

        info!(
            to = to,
            status = %response.status(),
            body_len = body.len(),
            "Sent WhatsApp text message"
        );
        Ok(())
    }

    /// Fire-and-forget variant: delivery failures are logged with context
    /// and swallowed so the webhook can always acknowledge the provider.
    pub async fn send_or_log(&self, routing_id: &str, to: &str, body: &str) {
        if let Err(e) = self.send_text(routing_id, to, body).await {
            metrics::counter!("whatsapp.send_failures").increment(1);
            error!(to = to, error = %e, "Failed to send WhatsApp message");
        }
    }
}
