//! Inbound webhook envelope for the Meta Cloud API. Typed but tolerant:
//! every field the provider might omit is optional or defaulted, so a
//! surprising payload degrades to "nothing extracted", never to an error.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookEnvelope {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub entry: Vec<Entry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Entry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub changes: Vec<Change>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Change {
    #[serde(default)]
    pub value: Option<ChangeValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeValue {
    #[serde(default)]
    pub metadata: Option<Metadata>,
    #[serde(default)]
    pub contacts: Vec<Contact>,
    #[serde(default)]
    pub messages: Vec<InboundMessage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub phone_number_id: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default)]
    pub wa_id: String,
    #[serde(default)]
    pub profile: Option<Profile>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundMessage {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub timestamp: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub text: Option<TextBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextBody {
    #[serde(default)]
    pub body: String,
}

/// One inbound item after flattening the envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Inbound {
    Text {
        sender: String,
        message_id: String,
        routing_id: String,
        body: String,
    },
    /// Images, audio, stickers and friends get a fixed "text only" reply.
    Unsupported {
        sender: String,
        routing_id: String,
        kind: String,
    },
}

/// Walk entry → changes → value → messages and pull out everything
/// addressable. Messages without a sender are dropped.
pub fn extract_inbound(envelope: &WebhookEnvelope) -> Vec<Inbound> {
    let mut inbound = Vec::new();
    for entry in &envelope.entry {
        for change in &entry.changes {
            let Some(value) = &change.value else { continue };
            let routing_id = value
                .metadata
                .as_ref()
                .map(|m| m.phone_number_id.clone())
                .unwrap_or_default();
            for message in &value.messages {
                if message.from.is_empty() {
                    continue;
                }
                match (&message.kind[..], &message.text) {
                    ("text", Some(text)) if !text.body.trim().is_empty() => {
                        inbound.push(Inbound::Text {
                            sender: message.from.clone(),
                            message_id: message.id.clone(),
                            routing_id: routing_id.clone(),
                            body: text.body.clone(),
                        });
                    }
                    _ => inbound.push(Inbound::Unsupported {
                        sender: message.from.clone(),
                        routing_id: routing_id.clone(),
                        kind: message.kind.clone(),
                    }),
                }
            }
        }
    }
    inbound
}
