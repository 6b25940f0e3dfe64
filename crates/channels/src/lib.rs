//! WhatsApp Business Cloud API surface: inbound webhook envelope parsing
//! and outbound text delivery.

pub mod webhook;
pub mod whatsapp;

pub use webhook::{extract_inbound, Inbound, WebhookEnvelope};
pub use whatsapp::WhatsAppProvider;
