//! Conversation engine for the storefront bot: a step-indexed state
//! machine that turns (persisted session, inbound text) into outbound
//! messages plus the next session state to persist.

pub mod admin;
mod checkout;
pub mod engine;
pub mod format;

pub use engine::{ConversationEngine, Turn};
