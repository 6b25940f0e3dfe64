//! Durable conversation state contract. The process holds no state between
//! webhook calls; everything a turn needs comes back through this trait.

use async_trait::async_trait;

use grocer_core::order::Order;
use grocer_core::session::UserSession;
use grocer_core::GrocerResult;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the session for a sender. A missing or expired key yields a
    /// fresh session at the initial step; this never fails on a miss.
    async fn load(&self, sender: &str) -> GrocerResult<UserSession>;

    /// Persist the full accumulated session and refresh its expiry.
    /// Callers always supply the complete state, so a save can never
    /// erase fields it didn't mean to touch.
    async fn save(&self, sender: &str, session: &UserSession) -> GrocerResult<()>;

    /// Drop a sender's session entirely.
    async fn clear(&self, sender: &str) -> GrocerResult<()>;

    /// Record a provider message id. Returns `true` the first time an id
    /// is seen and `false` on redelivery, so at-least-once webhooks are
    /// processed exactly once.
    async fn mark_message_seen(&self, message_id: &str) -> GrocerResult<bool>;

    /// Persist an order snapshot and index it under the payer's number.
    async fn save_order(&self, order: &Order) -> GrocerResult<()>;

    async fn load_order(&self, order_id: &str) -> GrocerResult<Option<Order>>;

    /// Order ids placed by a sender, oldest first.
    async fn list_order_ids(&self, sender: &str) -> GrocerResult<Vec<String>>;
}

pub(crate) fn session_key(sender: &str) -> String {
    format!("user_state:{sender}")
}

pub(crate) fn order_key(order_id: &str) -> String {
    format!("order:{order_id}")
}

pub(crate) fn user_orders_key(sender: &str) -> String {
    format!("orders:{sender}")
}

pub(crate) fn message_seen_key(message_id: &str) -> String {
    format!("wamid:{message_id}")
}
